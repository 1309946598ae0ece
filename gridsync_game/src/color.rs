use gridsync_core::prelude::Rgb;
use rand::Rng;

/// Picks a random display color, every channel uniform in `[0, 1]`
pub fn assign_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
    )
}

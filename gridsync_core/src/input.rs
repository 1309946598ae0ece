//! Movement intent of a player
use core::fmt::{Debug, Formatter};
use core::ops::{BitOr, BitOrAssign};
use serde::{Deserialize, Serialize};

/// Bitmask of the movement keys held by a player.
///
/// Only the four low bits are used, which is also the width of the field on the wire.
/// The default value is "no key pressed".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFlags(u8);

impl InputFlags {
    pub const EMPTY: Self = Self(0);
    pub const W: Self = Self(1);
    pub const A: Self = Self(1 << 1);
    pub const S: Self = Self(1 << 2);
    pub const D: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Width of the bitmask on the wire
    pub const WIRE_BITS: u32 = 4;

    /// Keeps only the bits of the four movement keys
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for InputFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InputFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl Debug for InputFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return write!(f, "InputFlags(-)");
        }
        write!(f, "InputFlags(")?;
        for (flag, name) in [
            (Self::W, 'W'),
            (Self::A, 'A'),
            (Self::S, 'S'),
            (Self::D, 'D'),
        ] {
            if self.contains(flag) {
                write!(f, "{name}")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_flags() {
        let mut flags = InputFlags::W | InputFlags::D;
        assert_eq!(flags.bits(), 0b1001);
        assert!(flags.contains(InputFlags::W));
        assert!(flags.contains(InputFlags::D));
        assert!(!flags.contains(InputFlags::A));
        assert!(!flags.contains(InputFlags::S));

        flags |= InputFlags::S;
        flags.remove(InputFlags::W);
        assert_eq!(flags, InputFlags::S | InputFlags::D);
        assert_eq!(format!("{flags:?}"), "InputFlags(SD)");
    }

    #[test]
    fn test_from_bits_truncate() {
        assert_eq!(InputFlags::from_bits_truncate(0b0110), InputFlags::A | InputFlags::S);
        assert_eq!(InputFlags::from_bits_truncate(0b1_0000), InputFlags::EMPTY);
        assert_eq!(InputFlags::from_bits_truncate(0xff), InputFlags::ALL);
        assert!(InputFlags::default().is_empty());
    }
}

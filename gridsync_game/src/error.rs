#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a {x_len}x{z_len} grid must have between 1 and 256 cells")]
    InvalidGrid { x_len: u16, z_len: u16 },
}

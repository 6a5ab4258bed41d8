use thiserror::Error;

/// Returned when reading the payload of the side that is not present.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsentValueError {
    #[error("No left value present")]
    Left,

    #[error("No right value present")]
    Right,
}

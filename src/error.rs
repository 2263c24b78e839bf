use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum RandomError {
    #[error("Invalid argument: bound must be positive, got {bound}")]
    InvalidArgument { bound: i32 },
}

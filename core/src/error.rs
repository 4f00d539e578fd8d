use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid cell index")]
    InvalidIndex,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell set shape does not match the grid size")]
    InvalidBoardShape,
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("At least one answer cell is required")]
    NoAnswers,
    #[error("More answer cells than the grid can hold")]
    TooManyAnswers,
}

pub type Result<T> = core::result::Result<T, GridError>;

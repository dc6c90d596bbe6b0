use thiserror::Error;

/// Field rule violated by a player payload.
///
/// Rules are checked in declaration order and the first failure wins, so a payload with
/// several problems always reports the same one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Team is required")]
    MissingTeam,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("PPG must be between 0 and 50")]
    PpgOutOfRange,
    #[error("Years must be between 0 and 25")]
    YearsOutOfRange,
}

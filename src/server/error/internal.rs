use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored player row carries a position token outside the known set.
    ///
    /// Rows are only written through validated parameters, so this means the table was
    /// modified outside the service. Results in a 500 Internal Server Error with a
    /// generic message returned to client.
    #[error("Player {player_id} has unknown position '{value}'")]
    UnknownPosition {
        /// ID of the offending row
        player_id: i32,
        /// The stored token that failed to parse
        value: String,
    },

    /// A grouped position count carried a token outside the known set.
    #[error("Position count for unknown position '{0}'")]
    UnknownPositionGroup(String),
}

use thiserror::Error;

use crate::commands::Usage;

/// Infrastructure failures from loading or saving the rules record.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine config file path")]
    NoConfigPath,

    #[error("Config could not be read at startup; not overwriting it")]
    ReadOnlyConfig,
}

/// Why a chat command was refused. Each variant becomes exactly one message
/// delivered back to the player who issued the command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("missing permission for '{command}'")]
    MissingPermission { command: String },

    #[error("usage: {0:?}")]
    Usage(Usage),

    #[error("rule #{0} does not exist")]
    RuleNotFound(i64),

    #[error("no player matches '{0}'")]
    PlayerNotFound(String),
}

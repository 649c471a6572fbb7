//! rules-manager library - Rules management for multiplayer game servers
//!
//! Keeps an ordered list of server rules, a pre-rendered display cache of
//! them, and the chat commands that read and change both.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod host;
pub mod lang;
pub mod manager;
pub mod rules;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use host::{ConfigStore, Host, Player, RuleEvents};
pub use manager::RulesManager;

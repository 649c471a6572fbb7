//! Seams to the game server hosting the rules manager
//!
//! The host owns players, permissions, chat delivery and persistence. The
//! rules manager only talks to it through these traits.

use crate::config::Config;
use crate::error::RulesError;
use crate::rules::AvatarId;

/// A connected player, or any other target chat can be delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub trait Host {
    fn has_permission(&self, player: &Player, permission: &str) -> bool;

    fn find_player(&self, search: &str) -> Option<Player>;

    /// Sends already-rendered text to `target`'s chat as `sender`.
    fn deliver(&mut self, target: &Player, text: &str, sender: AvatarId);

    /// Locale for messages addressed to `player`. `None` uses the default.
    fn locale(&self, _player: &Player) -> Option<String> {
        None
    }
}

/// Where the rules record lives between restarts.
pub trait ConfigStore {
    /// `Ok(None)` when no record has been saved yet.
    fn read_config(&self) -> Result<Option<Config>, RulesError>;

    fn write_config(&self, config: &Config) -> Result<(), RulesError>;
}

/// Notifications for other plugins that track rule changes.
pub trait RuleEvents {
    fn on_rule_added(&mut self, _number: usize, _rule: &str) {}

    fn on_rule_removed(&mut self, _number: usize, _rule: &str) {}

    fn on_rule_edited(&mut self, _number: usize, _old_rule: &str, _new_rule: &str) {}
}

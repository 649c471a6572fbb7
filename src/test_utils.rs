//! Shared test utilities for rules-manager
//!
//! This module provides an in-memory host, config store and event recorder
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    use crate::config::Config;
    use crate::error::RulesError;
    use crate::host::{ConfigStore, Host, Player, RuleEvents};
    use crate::lang::Lang;
    use crate::manager::RulesManager;
    use crate::rules::AvatarId;

    /// One message handed to the host for delivery
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Delivery {
        pub target: String,
        pub text: String,
        pub sender: AvatarId,
    }

    /// Host that records deliveries instead of sending chat
    #[derive(Debug, Default)]
    pub struct MockHost {
        pub players: Vec<Player>,
        pub grants: HashSet<(String, String)>,
        pub locales: HashMap<String, String>,
        pub delivered: Vec<Delivery>,
    }

    impl MockHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_player(mut self, player: &Player) -> Self {
            self.players.push(player.clone());
            self
        }

        pub fn grant(&mut self, player: &Player, permission: &str) {
            self.grants
                .insert((player.id.clone(), permission.to_string()));
        }

        pub fn grant_all(&mut self, player: &Player) {
            for permission in crate::commands::permissions::ALL {
                self.grant(player, permission);
            }
        }

        /// Texts delivered to `player`, oldest first
        pub fn texts_for(&self, player: &Player) -> Vec<&str> {
            self.delivered
                .iter()
                .filter(|d| d.target == player.id)
                .map(|d| d.text.as_str())
                .collect()
        }

        pub fn last_text_for(&self, player: &Player) -> Option<&str> {
            self.texts_for(player).last().copied()
        }

        pub fn clear(&mut self) {
            self.delivered.clear();
        }
    }

    impl Host for MockHost {
        fn has_permission(&self, player: &Player, permission: &str) -> bool {
            self.grants
                .contains(&(player.id.clone(), permission.to_string()))
        }

        fn find_player(&self, search: &str) -> Option<Player> {
            self.players
                .iter()
                .find(|p| p.id == search || p.name.eq_ignore_ascii_case(search))
                .cloned()
        }

        fn deliver(&mut self, target: &Player, text: &str, sender: AvatarId) {
            self.delivered.push(Delivery {
                target: target.id.clone(),
                text: text.to_string(),
                sender,
            });
        }

        fn locale(&self, player: &Player) -> Option<String> {
            self.locales.get(&player.id).cloned()
        }
    }

    /// Config store kept in memory
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub saved: RefCell<Option<Config>>,
        pub writes: Cell<usize>,
        pub fail_writes: bool,
        pub fail_reads: bool,
    }

    impl MemoryStore {
        pub fn with_config(config: Config) -> Self {
            Self {
                saved: RefCell::new(Some(config)),
                ..Self::default()
            }
        }

        pub fn saved(&self) -> Option<Config> {
            self.saved.borrow().clone()
        }
    }

    impl ConfigStore for MemoryStore {
        fn read_config(&self) -> Result<Option<Config>, RulesError> {
            if self.fail_reads {
                return Err(RulesError::Io(std::io::Error::other("corrupt record")));
            }
            Ok(self.saved.borrow().clone())
        }

        fn write_config(&self, config: &Config) -> Result<(), RulesError> {
            if self.fail_writes {
                return Err(RulesError::Io(std::io::Error::other("disk full")));
            }
            self.writes.set(self.writes.get() + 1);
            *self.saved.borrow_mut() = Some(config.clone());
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecordedEvent {
        Added(usize, String),
        Removed(usize, String),
        Edited(usize, String, String),
    }

    /// Observer that shares what it saw with the test
    #[derive(Debug, Clone, Default)]
    pub struct RecordingEvents {
        pub events: Rc<RefCell<Vec<RecordedEvent>>>,
    }

    impl RecordingEvents {
        pub fn events(&self) -> Vec<RecordedEvent> {
            self.events.borrow().clone()
        }
    }

    impl RuleEvents for RecordingEvents {
        fn on_rule_added(&mut self, number: usize, rule: &str) {
            self.events
                .borrow_mut()
                .push(RecordedEvent::Added(number, rule.to_string()));
        }

        fn on_rule_removed(&mut self, number: usize, rule: &str) {
            self.events
                .borrow_mut()
                .push(RecordedEvent::Removed(number, rule.to_string()));
        }

        fn on_rule_edited(&mut self, number: usize, old_rule: &str, new_rule: &str) {
            self.events.borrow_mut().push(RecordedEvent::Edited(
                number,
                old_rule.to_string(),
                new_rule.to_string(),
            ));
        }
    }

    pub fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Record with the given rules, header "Welcome" and an empty footer
    pub fn scenario_config(rules: &[&str]) -> Config {
        Config {
            rules: strings(rules),
            rules_header: "Welcome".to_string(),
            rules_footer: String::new(),
            rule_format: "{RULENUMBER}. {RULE}".to_string(),
            rules_avatar_id: 0,
        }
    }

    pub fn test_manager(rules: &[&str]) -> RulesManager<MemoryStore> {
        let config = scenario_config(rules);
        RulesManager::new(config.clone(), Lang::new(), MemoryStore::with_config(config))
    }

    pub fn admin() -> Player {
        Player::new("76561198000000001", "Admin")
    }

    pub fn visitor() -> Player {
        Player::new("76561198000000002", "Visitor")
    }
}

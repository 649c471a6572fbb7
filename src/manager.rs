//! The rules manager plugin
//!
//! Owns the rule book and its display cache as one unit: every mutation goes
//! through here so the cache is patched before anything can read it.

mod manager_commands;

use log::{error, warn};

use crate::config::{self, Config};
use crate::error::{CommandError, RulesError};
use crate::host::{ConfigStore, Host, Player, RuleEvents};
use crate::lang::{Lang, MessageKey};
use crate::rules::{DisplayCache, RuleBook, RuleChange, TemplateField};

pub struct RulesManager<S: ConfigStore> {
    book: RuleBook,
    cache: DisplayCache,
    lang: Lang,
    store: S,
    /// Cleared when the stored record was unreadable at load.
    writable: bool,
    observers: Vec<Box<dyn RuleEvents>>,
}

impl<S: ConfigStore> RulesManager<S> {
    /// Builds a manager around an already-loaded record.
    pub fn new(config: Config, lang: Lang, store: S) -> Self {
        let book = RuleBook::from_config(config);
        let cache = DisplayCache::build(&book, &lang);
        Self {
            book,
            cache,
            lang,
            store,
            writable: true,
            observers: Vec::new(),
        }
    }

    /// Loads the record from `store` (writing defaults on first run) and
    /// builds the cache. The warning, if any, explains why defaults are in use.
    ///
    /// If the record could not be read, the manager runs on defaults but
    /// never saves, leaving the stored record for the owner to fix.
    pub fn load(store: S, lang: Lang) -> (Self, Option<String>) {
        let result = config::load_config(&store);
        let mut manager = Self::new(result.config, lang, store);
        manager.writable = result.writable;
        (manager, result.warning)
    }

    /// Whether changes are persisted through the config store.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn subscribe(&mut self, observer: Box<dyn RuleEvents>) {
        self.observers.push(observer);
    }

    pub fn book(&self) -> &RuleBook {
        &self.book
    }

    pub fn cache(&self) -> &DisplayCache {
        &self.cache
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the message tables. Cached rule text is localized, so the
    /// whole cache is rebuilt.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.cache.rebuild_all(&self.book, &self.lang);
    }

    pub fn rules(&self) -> &[String] {
        self.book.rules()
    }

    pub fn is_valid_rule(&self, number: i64) -> bool {
        self.book.is_valid_rule(number)
    }

    /// Shows the whole rules block to `target`.
    pub fn display_rules(&self, host: &mut impl Host, target: &Player) {
        host.deliver(target, self.cache.aggregate(), self.book.avatar());
    }

    /// Shows rule `number` to `target`. Delivers nothing and returns `false`
    /// when the rule does not exist.
    pub fn display_rule(&self, host: &mut impl Host, target: &Player, number: i64) -> bool {
        match self.cache.rule(number, &self.book) {
            Some(text) => {
                host.deliver(target, text, self.book.avatar());
                true
            }
            None => false,
        }
    }

    /// Appends a rule. The returned change carries the new rule's number.
    pub fn add_rule(&mut self, text: &str) -> Result<RuleChange, CommandError> {
        let change = self.book.add_rule(text)?;
        self.commit(&change);
        Ok(change)
    }

    /// Removes rule `number`; later rules move up one place.
    pub fn remove_rule(&mut self, number: i64) -> Result<RuleChange, CommandError> {
        let change = self.book.remove_rule(number)?;
        self.commit(&change);
        Ok(change)
    }

    pub fn edit_rule(&mut self, number: i64, text: &str) -> Result<RuleChange, CommandError> {
        let change = self.book.edit_rule(number, text)?;
        self.commit(&change);
        Ok(change)
    }

    pub fn set_template(
        &mut self,
        field: TemplateField,
        value: &str,
    ) -> Result<RuleChange, CommandError> {
        let change = self.book.set_template(field, value)?;
        self.commit(&change);
        Ok(change)
    }

    pub fn set_avatar(&mut self, raw: &str) -> Result<RuleChange, CommandError> {
        let change = self.book.set_avatar(raw)?;
        self.commit(&change);
        Ok(change)
    }

    /// Persists the current record through the config store.
    pub fn save(&self) -> Result<(), RulesError> {
        if !self.writable {
            return Err(RulesError::ReadOnlyConfig);
        }
        self.store.write_config(&self.book.to_config())
    }

    /// Patches the cache for a committed change, then tells observers.
    fn commit(&mut self, change: &RuleChange) {
        let update = change.cache_update();
        #[cfg(debug_assertions)]
        log::debug!("Committing {:?} with cache update {:?}", change, update);
        self.cache.apply(update, &self.book, &self.lang);

        for observer in &mut self.observers {
            match change {
                RuleChange::Added { number, text } => observer.on_rule_added(*number, text),
                RuleChange::Removed { number, text } => observer.on_rule_removed(*number, text),
                RuleChange::Edited { number, old, new } => {
                    observer.on_rule_edited(*number, old, new)
                }
                RuleChange::Template { .. } | RuleChange::Avatar(_) => {}
            }
        }
    }

    fn save_or_log(&self) {
        match self.save() {
            Ok(()) => {}
            Err(RulesError::ReadOnlyConfig) => {
                warn!("Rules config was unreadable at startup, change kept in memory only")
            }
            Err(e) => error!("Failed to save rules config: {}", e),
        }
    }

    /// Sends a localized message to `player` as the rules avatar.
    fn reply(&self, host: &mut impl Host, player: &Player, key: MessageKey, args: &[&str]) {
        let locale = host.locale(player);
        let text = self.lang.format(key, locale.as_deref(), args);
        host.deliver(player, &text, self.book.avatar());
    }

    fn reply_error(&self, host: &mut impl Host, player: &Player, err: &CommandError) {
        #[cfg(debug_assertions)]
        log::debug!("Command from {} refused: {}", player.name, err);
        match err {
            CommandError::MissingPermission { command } => {
                self.reply(host, player, MessageKey::MissingPermission, &[command.as_str()])
            }
            CommandError::Usage(usage) => self.reply(host, player, usage.message_key(), &[]),
            CommandError::RuleNotFound(number) => self.reply(
                host,
                player,
                MessageKey::RuleNotFound,
                &[number.to_string().as_str()],
            ),
            CommandError::PlayerNotFound(search) => {
                self.reply(host, player, MessageKey::PlayerNotFound, &[search.as_str()])
            }
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;

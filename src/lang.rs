//! Localized player-facing messages
//!
//! Every message has a built-in English template. Hosts may register
//! per-locale overrides; lookups fall back from the requested locale to the
//! default locale and finally to the built-in text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::warn;

use crate::error::RulesError;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    MissingPermission,
    Help,
    RuleNotFound,
    PlayerNotFound,
    SpecificRule,
    RuleAdded,
    RuleRemoved,
    RuleEdited,
    RulesShown,
    RuleShown,
    AvatarChanged,
    FooterChanged,
    RuleFormatChanged,
    HeaderChanged,
    AddUsage,
    RemoveUsage,
    EditUsage,
    ShowUsage,
    SetAvatarUsage,
    SetFooterUsage,
    SetRuleFormatUsage,
    SetHeaderUsage,
}

impl MessageKey {
    pub const ALL: [MessageKey; 22] = [
        MessageKey::MissingPermission,
        MessageKey::Help,
        MessageKey::RuleNotFound,
        MessageKey::PlayerNotFound,
        MessageKey::SpecificRule,
        MessageKey::RuleAdded,
        MessageKey::RuleRemoved,
        MessageKey::RuleEdited,
        MessageKey::RulesShown,
        MessageKey::RuleShown,
        MessageKey::AvatarChanged,
        MessageKey::FooterChanged,
        MessageKey::RuleFormatChanged,
        MessageKey::HeaderChanged,
        MessageKey::AddUsage,
        MessageKey::RemoveUsage,
        MessageKey::EditUsage,
        MessageKey::ShowUsage,
        MessageKey::SetAvatarUsage,
        MessageKey::SetFooterUsage,
        MessageKey::SetRuleFormatUsage,
        MessageKey::SetHeaderUsage,
    ];

    /// Key name used in override files.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::MissingPermission => "MissingPermission",
            MessageKey::Help => "RulesManagerHelp",
            MessageKey::RuleNotFound => "RulesManagerRuleNotFound",
            MessageKey::PlayerNotFound => "RulesManagerPlayerNotFound",
            MessageKey::SpecificRule => "RulesManagerSpecificRule",
            MessageKey::RuleAdded => "RulesManagerRuleAdded",
            MessageKey::RuleRemoved => "RulesManagerRuleRemoved",
            MessageKey::RuleEdited => "RulesManagerRuleEdited",
            MessageKey::RulesShown => "RulesManagerRulesShown",
            MessageKey::RuleShown => "RulesManagerRuleShown",
            MessageKey::AvatarChanged => "RulesManagerAvatarChanged",
            MessageKey::FooterChanged => "RulesManagerRulesFooterChanged",
            MessageKey::RuleFormatChanged => "RulesManagerRuleFormatChanged",
            MessageKey::HeaderChanged => "RulesManagerRulesHeaderChanged",
            MessageKey::AddUsage => "RulesManagerAddUsage",
            MessageKey::RemoveUsage => "RulesManagerRemoveUsage",
            MessageKey::EditUsage => "RulesManagerEditUsage",
            MessageKey::ShowUsage => "RulesManagerShowUsage",
            MessageKey::SetAvatarUsage => "RulesManagerSetAvatarUsage",
            MessageKey::SetFooterUsage => "RulesManagerSetFooterUsage",
            MessageKey::SetRuleFormatUsage => "RulesManagerSetRuleFormatUsage",
            MessageKey::SetHeaderUsage => "RulesManagerSetHeaderUsage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Built-in English template.
    pub fn default_text(self) -> &'static str {
        match self {
            MessageKey::MissingPermission => "You do not have permission to use the '{0}' command!",
            MessageKey::Help => "These are the commands available:\n{0}",
            MessageKey::RuleNotFound => "Rule #{0} does not exist!",
            MessageKey::PlayerNotFound => "No player found matching '{0}'!",
            MessageKey::SpecificRule => "Rule #{0} states that: {1}",
            MessageKey::RuleAdded => "The rule '{0}' has been added!",
            MessageKey::RuleRemoved => "Rule #{0} has been removed!",
            MessageKey::RuleEdited => "Rule #{0} is now '{1}'",
            MessageKey::RulesShown => "Rules have been shown to {0}!",
            MessageKey::RuleShown => "Rule #{0} has been shown to {1}!",
            MessageKey::AvatarChanged => "Rules avatar has been changed to {0}!",
            MessageKey::FooterChanged => "Rules footer has been changed to '{0}'",
            MessageKey::RuleFormatChanged => "Rule format has been changed to '{0}'",
            MessageKey::HeaderChanged => "Rules header has been changed to '{0}'",
            MessageKey::AddUsage => "Usage: <rulesmanager/rman> <add/a> <rule>",
            MessageKey::RemoveUsage => "Usage: <rulesmanager/rman> <remove/r> <rule number>",
            MessageKey::EditUsage => "Usage: <rulesmanager/rman> <edit/e> <rule number> <rule>",
            MessageKey::ShowUsage => "Usage: <rulesmanager/rman> <show/s> <player> [rule number]",
            MessageKey::SetAvatarUsage => "Usage: <rulesmanager/rman> <setavatar/sa> <steamid64>",
            MessageKey::SetFooterUsage => "Usage: <rulesmanager/rman> <setfooter/sf> <footer>",
            MessageKey::SetRuleFormatUsage => {
                "Usage: <rulesmanager/rman> <setruleformat/srf> <format>"
            }
            MessageKey::SetHeaderUsage => "Usage: <rulesmanager/rman> <setheader/sh> <header>",
        }
    }
}

/// Message tables keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct Lang {
    overrides: HashMap<String, HashMap<MessageKey, String>>,
}

impl Lang {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers templates for `locale`, replacing earlier ones with the same
    /// key. Unknown key names are skipped. Returns how many were accepted.
    pub fn register_messages<I, K, V>(&mut self, locale: &str, messages: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = self.overrides.entry(locale.to_string()).or_default();
        let mut accepted = 0;

        for (name, text) in messages {
            match MessageKey::from_name(name.as_ref()) {
                Some(key) => {
                    table.insert(key, text.into());
                    accepted += 1;
                }
                None => warn!("Ignoring unknown message key '{}'", name.as_ref()),
            }
        }

        accepted
    }

    /// Loads a TOML file of `Key = "template"` pairs as overrides for `locale`.
    pub fn load_overrides(&mut self, locale: &str, path: &Path) -> Result<usize, RulesError> {
        let contents = fs::read_to_string(path)?;
        let messages: HashMap<String, String> = toml::from_str(&contents)?;
        let accepted = self.register_messages(locale, messages);

        #[cfg(debug_assertions)]
        log::debug!(
            "Loaded {} message overrides for '{}' from {:?}",
            accepted, locale, path
        );
        Ok(accepted)
    }

    /// Template for `key` in `locale`, falling back to the default locale and
    /// then to the built-in English text.
    pub fn get_message(&self, key: MessageKey, locale: Option<&str>) -> &str {
        locale
            .and_then(|l| self.lookup(l, key))
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
            .unwrap_or_else(|| key.default_text())
    }

    fn lookup(&self, locale: &str, key: MessageKey) -> Option<&str> {
        self.overrides
            .get(locale)
            .and_then(|table| table.get(&key))
            .map(String::as_str)
    }

    pub fn format(&self, key: MessageKey, locale: Option<&str>, args: &[&str]) -> String {
        format_message(self.get_message(key, locale), args)
    }
}

/// Substitutes `{0}`, `{1}`, ... with positional arguments in one pass.
///
/// Inserted arguments are never rescanned. Placeholders without a matching
/// argument and any other braces are kept as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "lang_tests.rs"]
mod lang_tests;

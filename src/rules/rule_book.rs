use log::info;

use super::avatar::AvatarId;
use super::display_cache::CacheUpdate;
use super::template::{TemplateField, TemplateSet};
use crate::commands::Usage;
use crate::config::Config;
use crate::error::CommandError;

/// A committed mutation of the rule book.
///
/// Carries what observers are told about, and tells the display cache which
/// entries went stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleChange {
    Added { number: usize, text: String },
    Removed { number: usize, text: String },
    Edited { number: usize, old: String, new: String },
    Template { field: TemplateField, value: String },
    Avatar(AvatarId),
}

impl RuleChange {
    pub fn cache_update(&self) -> CacheUpdate {
        match self {
            RuleChange::Added { number, .. } | RuleChange::Edited { number, .. } => {
                CacheUpdate::One(*number)
            }
            // Every rule at or after the removed slot now has different text
            RuleChange::Removed { number, .. } => CacheUpdate::From(*number),
            RuleChange::Template { .. } => CacheUpdate::All,
            RuleChange::Avatar(_) => CacheUpdate::None,
        }
    }
}

/// Authoritative rule list plus the templates and sender avatar.
///
/// Rule numbers are never stored: rule `n` is whatever sits at position
/// `n - 1`. Every mutation validates fully before touching state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<String>,
    templates: TemplateSet,
    avatar: AvatarId,
}

impl Default for RuleBook {
    fn default() -> Self {
        RuleBook::from_config(Config::default())
    }
}

impl RuleBook {
    pub fn new(rules: Vec<String>, templates: TemplateSet, avatar: AvatarId) -> Self {
        Self {
            rules,
            templates,
            avatar,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let templates = TemplateSet {
            header: config.rules_header,
            footer: config.rules_footer,
            rule_format: config.rule_format,
        };
        Self::new(config.rules, templates, AvatarId::from(config.rules_avatar_id))
    }

    pub fn to_config(&self) -> Config {
        Config {
            rules: self.rules.clone(),
            rules_header: self.templates.header.clone(),
            rules_footer: self.templates.footer.clone(),
            rule_format: self.templates.rule_format.clone(),
            rules_avatar_id: self.avatar.get(),
        }
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn count(&self) -> usize {
        self.rules.len()
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn avatar(&self) -> AvatarId {
        self.avatar
    }

    /// Whether `number` names an existing rule (`1..=count`).
    pub fn is_valid_rule(&self, number: i64) -> bool {
        self.index_of(number).is_some()
    }

    /// Text of rule `number`, if it exists.
    pub fn rule(&self, number: i64) -> Option<&str> {
        self.index_of(number).map(|idx| self.rules[idx].as_str())
    }

    fn index_of(&self, number: i64) -> Option<usize> {
        let number = usize::try_from(number).ok()?;
        (1..=self.rules.len()).contains(&number).then(|| number - 1)
    }

    /// Appends a rule. The new rule's number is the new count.
    pub fn add_rule(&mut self, text: &str) -> Result<RuleChange, CommandError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommandError::Usage(Usage::Add));
        }

        self.rules.push(text.to_string());
        let number = self.rules.len();
        info!("Rule #{} added: {}", number, text);

        Ok(RuleChange::Added {
            number,
            text: text.to_string(),
        })
    }

    /// Removes rule `number`, shifting every later rule down by one.
    pub fn remove_rule(&mut self, number: i64) -> Result<RuleChange, CommandError> {
        let idx = self
            .index_of(number)
            .ok_or(CommandError::Usage(Usage::Remove))?;

        let text = self.rules.remove(idx);
        info!("Rule #{} removed: {}", idx + 1, text);

        Ok(RuleChange::Removed {
            number: idx + 1,
            text,
        })
    }

    pub fn edit_rule(&mut self, number: i64, text: &str) -> Result<RuleChange, CommandError> {
        let idx = self.index_of(number).ok_or(CommandError::Usage(Usage::Edit))?;
        let text = text.trim();
        if text.is_empty() {
            return Err(CommandError::Usage(Usage::Edit));
        }

        let old = std::mem::replace(&mut self.rules[idx], text.to_string());
        info!("Rule #{} edited: '{}' -> '{}'", idx + 1, old, text);

        Ok(RuleChange::Edited {
            number: idx + 1,
            old,
            new: text.to_string(),
        })
    }

    /// Replaces one template. Header and rule format must not be blank.
    pub fn set_template(
        &mut self,
        field: TemplateField,
        value: &str,
    ) -> Result<RuleChange, CommandError> {
        let value = value.trim();
        if value.is_empty() && !field.allows_empty() {
            return Err(CommandError::Usage(Usage::for_template(field)));
        }

        self.templates.set(field, value.to_string());
        info!("Template {:?} set to '{}'", field, value);

        Ok(RuleChange::Template {
            field,
            value: value.to_string(),
        })
    }

    pub fn set_avatar(&mut self, raw: &str) -> Result<RuleChange, CommandError> {
        let avatar = AvatarId::parse(raw).ok_or(CommandError::Usage(Usage::SetAvatar))?;

        self.avatar = avatar;
        info!("Rules avatar set to {}", avatar);

        Ok(RuleChange::Avatar(avatar))
    }
}

#[cfg(test)]
#[path = "rule_book_tests.rs"]
mod rule_book_tests;

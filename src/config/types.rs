// Persisted rules record

use serde::{Deserialize, Serialize};

use crate::rules::template::{DEFAULT_FOOTER, DEFAULT_HEADER, DEFAULT_RULE_FORMAT};

pub const DEFAULT_RULE: &str = "No Rules!";

/// Root configuration structure
///
/// Field names on disk match the record the game-server plugin has always
/// written, so existing config files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "Rules", alias = "rules", default = "default_rules")]
    pub rules: Vec<String>,

    #[serde(
        rename = "Rules Header",
        alias = "rulesHeader",
        default = "default_header"
    )]
    pub rules_header: String,

    #[serde(rename = "Rules Footer", alias = "rulesFooter", default)]
    pub rules_footer: String,

    #[serde(
        rename = "Rule Format",
        alias = "ruleFormat",
        default = "default_rule_format"
    )]
    pub rule_format: String,

    #[serde(
        rename = "Scheduled Messages Avatar ID",
        alias = "rulesAvatarID",
        default
    )]
    pub rules_avatar_id: u64,
}

fn default_rules() -> Vec<String> {
    vec![DEFAULT_RULE.to_string()]
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_rule_format() -> String {
    DEFAULT_RULE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rules: default_rules(),
            rules_header: default_header(),
            rules_footer: DEFAULT_FOOTER.to_string(),
            rule_format: default_rule_format(),
            rules_avatar_id: 0,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

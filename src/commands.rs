//! Chat command surface
//!
//! Names, aliases, permissions and usage messages for `rules` and the
//! `rulesmanager`/`rman` sub-commands, plus argument helpers shared by the
//! handlers.

pub mod permissions;
mod sub_command;

pub use sub_command::SubCommand;

use crate::lang::MessageKey;
use crate::rules::TemplateField;

pub const RULES_COMMAND: &str = "rules";
pub const MANAGER_COMMAND: &str = "rulesmanager";
pub const MANAGER_ALIAS: &str = "rman";

/// Which usage message a malformed command gets back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Add,
    Remove,
    Edit,
    Show,
    SetAvatar,
    SetFooter,
    SetRuleFormat,
    SetHeader,
}

impl Usage {
    pub fn for_template(field: TemplateField) -> Self {
        match field {
            TemplateField::Header => Usage::SetHeader,
            TemplateField::Footer => Usage::SetFooter,
            TemplateField::RuleFormat => Usage::SetRuleFormat,
        }
    }

    pub fn message_key(self) -> MessageKey {
        match self {
            Usage::Add => MessageKey::AddUsage,
            Usage::Remove => MessageKey::RemoveUsage,
            Usage::Edit => MessageKey::EditUsage,
            Usage::Show => MessageKey::ShowUsage,
            Usage::SetAvatar => MessageKey::SetAvatarUsage,
            Usage::SetFooter => MessageKey::SetFooterUsage,
            Usage::SetRuleFormat => MessageKey::SetRuleFormatUsage,
            Usage::SetHeader => MessageKey::SetHeaderUsage,
        }
    }
}

/// Whether `name` invokes the manager command.
pub fn is_manager_command(name: &str) -> bool {
    name.eq_ignore_ascii_case(MANAGER_COMMAND) || name.eq_ignore_ascii_case(MANAGER_ALIAS)
}

/// Joins `args[start..]` with single spaces and trims the result.
pub fn join_args(args: &[String], start: usize) -> String {
    args.get(start..)
        .map(|rest| rest.join(" ").trim().to_string())
        .unwrap_or_default()
}

/// Parses a rule number argument. Surrounding whitespace is allowed,
/// anything else that is not an integer is `None`.
pub fn parse_rule_number(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Splits a chat line into arguments. Double quotes group words containing
/// spaces; the quotes themselves are dropped.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        args.push(current);
    }

    args
}

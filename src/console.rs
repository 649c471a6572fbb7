//! Terminal host
//!
//! Runs the rules manager outside a game server: chat goes to a writer,
//! permissions come from the command line, and players are a fixed list.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::{info, warn};

use crate::commands::{self, RULES_COMMAND, split_args};
use crate::host::{ConfigStore, Host, Player, RuleEvents};
use crate::manager::RulesManager;
use crate::rules::AvatarId;
use crate::rules::template::LINE_BREAK;

/// Grant that stands for every permission.
pub const GRANT_ALL: &str = "*";

pub struct ConsoleHost<W: Write> {
    out: W,
    operator: Player,
    players: Vec<Player>,
    grants: HashSet<String>,
    locale: Option<String>,
    matcher: SkimMatcherV2,
}

impl<W: Write> fmt::Debug for ConsoleHost<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleHost")
            .field("operator", &self.operator)
            .field("players", &self.players)
            .field("grants", &self.grants)
            .finish_non_exhaustive()
    }
}

impl<W: Write> ConsoleHost<W> {
    /// Host whose only known player is `operator`.
    pub fn new(out: W, operator: Player) -> Self {
        Self {
            out,
            players: vec![operator.clone()],
            operator,
            grants: HashSet::new(),
            locale: None,
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn operator(&self) -> &Player {
        &self.operator
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Grants a permission to the operator. `*` grants everything.
    pub fn grant(&mut self, permission: impl Into<String>) {
        self.grants.insert(permission.into());
    }

    pub fn set_locale(&mut self, locale: Option<String>) {
        self.locale = locale;
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn fuzzy_find(&self, search: &str) -> Option<&Player> {
        self.players
            .iter()
            .filter_map(|p| {
                self.matcher
                    .fuzzy_match(&p.name, search)
                    .map(|score| (p, score))
            })
            .max_by_key(|(_, score)| *score)
            .map(|(p, _)| p)
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn has_permission(&self, player: &Player, permission: &str) -> bool {
        player == &self.operator
            && (self.grants.contains(GRANT_ALL) || self.grants.contains(permission))
    }

    /// Exact id, then case-insensitive exact name, then best fuzzy name match.
    fn find_player(&self, search: &str) -> Option<Player> {
        self.players
            .iter()
            .find(|p| p.id == search)
            .or_else(|| {
                self.players
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(search))
            })
            .or_else(|| self.fuzzy_find(search))
            .cloned()
    }

    fn deliver(&mut self, target: &Player, text: &str, sender: AvatarId) {
        let text = text.replace(LINE_BREAK, "\n");
        let mut prefix = String::new();
        if target != &self.operator {
            prefix.push_str(&format!("[to {}] ", target.name));
        }
        if !sender.is_none() {
            prefix.push_str(&format!("[avatar {}] ", sender));
        }

        if let Err(e) = writeln!(self.out, "{}{}", prefix, text) {
            warn!("Failed to write chat output: {}", e);
        }
    }

    fn locale(&self, _player: &Player) -> Option<String> {
        self.locale.clone()
    }
}

/// Logs rule changes, standing in for other plugins listening for them.
#[derive(Debug, Default)]
pub struct LoggingRuleEvents;

impl RuleEvents for LoggingRuleEvents {
    fn on_rule_added(&mut self, number: usize, rule: &str) {
        info!("OnRuleAdded #{}: {}", number, rule);
    }

    fn on_rule_removed(&mut self, number: usize, rule: &str) {
        info!("OnRuleRemoved #{}: {}", number, rule);
    }

    fn on_rule_edited(&mut self, number: usize, old_rule: &str, new_rule: &str) {
        info!("OnRuleEdited #{}: '{}' -> '{}'", number, old_rule, new_rule);
    }
}

/// What happened to one chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Empty,
    Shown,
    Managed { edited: bool },
    Unknown,
}

/// Runs one chat line (`/rules 2`, `rman add Be nice`, ...) as the operator.
pub fn run_line<S: ConfigStore, W: Write>(
    manager: &mut RulesManager<S>,
    host: &mut ConsoleHost<W>,
    line: &str,
) -> LineOutcome {
    let args = split_args(line.trim().trim_start_matches('/'));
    run_args(manager, host, &args)
}

/// Runs an already-split chat command as the operator.
pub fn run_args<S: ConfigStore, W: Write>(
    manager: &mut RulesManager<S>,
    host: &mut ConsoleHost<W>,
    args: &[String],
) -> LineOutcome {
    let Some((command, rest)) = args.split_first() else {
        return LineOutcome::Empty;
    };
    let command = command.trim_start_matches('/');

    let player = host.operator().clone();
    if command.eq_ignore_ascii_case(RULES_COMMAND) {
        manager.rules_command(host, &player, rest);
        LineOutcome::Shown
    } else if commands::is_manager_command(command) {
        let edited = manager.rules_manager_command(host, &player, command, rest);
        LineOutcome::Managed { edited }
    } else {
        LineOutcome::Unknown
    }
}

/// Feeds every line of `input` to [`run_line`]. Unknown commands are
/// reported on `host`'s output.
pub fn run_lines<S, W, I>(
    manager: &mut RulesManager<S>,
    host: &mut ConsoleHost<W>,
    input: I,
) -> io::Result<()>
where
    S: ConfigStore,
    W: Write,
    I: IntoIterator<Item = io::Result<String>>,
{
    for line in input {
        let line = line?;
        if run_line(manager, host, &line) == LineOutcome::Unknown {
            writeln!(host.out, "Unknown command: {}", line.trim())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;

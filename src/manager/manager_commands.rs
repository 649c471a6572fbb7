//! Handlers for the `rules` and `rulesmanager` chat commands
//!
//! Every handler checks, in order: the sub-command permission, the argument
//! shape, then rule bounds. Nothing is mutated until all three pass.

use super::RulesManager;
use crate::commands::{SubCommand, Usage, join_args, parse_rule_number, permissions};
use crate::error::CommandError;
use crate::host::{ConfigStore, Host, Player};
use crate::lang::MessageKey;
use crate::rules::TemplateField;

type CommandResult = Result<bool, CommandError>;

impl<S: ConfigStore> RulesManager<S> {
    /// `rules [number]`
    ///
    /// No argument or an unparsable one shows every rule. A number that is
    /// not a rule reports that it does not exist.
    pub fn rules_command(&self, host: &mut impl Host, player: &Player, args: &[String]) {
        let Some(number) = args.first().and_then(|raw| parse_rule_number(raw)) else {
            self.display_rules(host, player);
            return;
        };

        if !self.display_rule(host, player, number) {
            self.reply_error(host, player, &CommandError::RuleNotFound(number));
        }
    }

    /// `rulesmanager|rman <sub-command> ...`
    ///
    /// Returns whether the record changed. Changes are saved before returning,
    /// unless the stored record was unreadable at load.
    pub fn rules_manager_command(
        &mut self,
        host: &mut impl Host,
        player: &Player,
        command: &str,
        args: &[String],
    ) -> bool {
        if !host.has_permission(player, permissions::CMD) {
            let err = CommandError::MissingPermission {
                command: command.to_string(),
            };
            self.reply_error(host, player, &err);
            return false;
        }

        let Some(sub) = args.first().and_then(|name| SubCommand::parse(name)) else {
            self.help_command(host, player);
            return false;
        };

        #[cfg(debug_assertions)]
        log::debug!("{} ran {} {:?}", player.name, command, sub);

        let result = if host.has_permission(player, sub.permission()) {
            self.run_sub_command(host, player, sub, args)
        } else {
            Err(CommandError::MissingPermission {
                command: format!("{} {}", command, args[0]),
            })
        };

        match result {
            Ok(true) => {
                self.save_or_log();
                true
            }
            Ok(false) => false,
            Err(err) => {
                self.reply_error(host, player, &err);
                false
            }
        }
    }

    fn run_sub_command(
        &mut self,
        host: &mut impl Host,
        player: &Player,
        sub: SubCommand,
        args: &[String],
    ) -> CommandResult {
        match sub {
            SubCommand::Add => self.add_command(host, player, args),
            SubCommand::Remove => self.remove_command(host, player, args),
            SubCommand::Edit => self.edit_command(host, player, args),
            SubCommand::Show => self.show_command(host, player, args),
            SubCommand::SetAvatar => self.set_avatar_command(host, player, args),
            SubCommand::SetFooter => {
                self.set_template_command(host, player, TemplateField::Footer, args)
            }
            SubCommand::SetRuleFormat => {
                self.set_template_command(host, player, TemplateField::RuleFormat, args)
            }
            SubCommand::SetHeader => {
                self.set_template_command(host, player, TemplateField::Header, args)
            }
        }
    }

    fn add_command(&mut self, host: &mut impl Host, player: &Player, args: &[String]) -> CommandResult {
        let text = join_args(args, 1);
        self.add_rule(&text)?;
        self.reply(host, player, MessageKey::RuleAdded, &[text.as_str()]);
        Ok(true)
    }

    fn remove_command(
        &mut self,
        host: &mut impl Host,
        player: &Player,
        args: &[String],
    ) -> CommandResult {
        let number = rule_number_arg(args, 1, Usage::Remove)?;
        self.remove_rule(number)?;
        self.reply(host, player, MessageKey::RuleRemoved, &[number.to_string().as_str()]);
        Ok(true)
    }

    fn edit_command(&mut self, host: &mut impl Host, player: &Player, args: &[String]) -> CommandResult {
        let number = rule_number_arg(args, 1, Usage::Edit)?;
        let text = join_args(args, 2);
        self.edit_rule(number, &text)?;
        self.reply(
            host,
            player,
            MessageKey::RuleEdited,
            &[number.to_string().as_str(), text.as_str()],
        );
        Ok(true)
    }

    /// `show <player> [number]`, delivers rules to someone else.
    fn show_command(&mut self, host: &mut impl Host, player: &Player, args: &[String]) -> CommandResult {
        let search = args.get(1).ok_or(CommandError::Usage(Usage::Show))?;
        let number = match args.get(2) {
            Some(raw) => Some(parse_rule_number(raw).ok_or(CommandError::Usage(Usage::Show))?),
            None => None,
        };

        let target = host
            .find_player(search)
            .ok_or_else(|| CommandError::PlayerNotFound(search.clone()))?;

        match number {
            None => {
                self.display_rules(host, &target);
                self.reply(host, player, MessageKey::RulesShown, &[target.name.as_str()]);
            }
            Some(number) => {
                if !self.display_rule(host, &target, number) {
                    return Err(CommandError::RuleNotFound(number));
                }
                self.reply(
                    host,
                    player,
                    MessageKey::RuleShown,
                    &[number.to_string().as_str(), target.name.as_str()],
                );
            }
        }

        Ok(false)
    }

    fn set_avatar_command(
        &mut self,
        host: &mut impl Host,
        player: &Player,
        args: &[String],
    ) -> CommandResult {
        let raw = args.get(1).ok_or(CommandError::Usage(Usage::SetAvatar))?;
        self.set_avatar(raw)?;
        self.reply(host, player, MessageKey::AvatarChanged, &[raw.as_str()]);
        Ok(true)
    }

    fn set_template_command(
        &mut self,
        host: &mut impl Host,
        player: &Player,
        field: TemplateField,
        args: &[String],
    ) -> CommandResult {
        self.set_template(field, &join_args(args, 1))?;

        let key = match field {
            TemplateField::Header => MessageKey::HeaderChanged,
            TemplateField::Footer => MessageKey::FooterChanged,
            TemplateField::RuleFormat => MessageKey::RuleFormatChanged,
        };
        let value = self.book.templates().get(field).to_string();
        self.reply(host, player, key, &[value.as_str()]);
        Ok(true)
    }

    /// Lists every sub-command with its usage.
    fn help_command(&self, host: &mut impl Host, player: &Player) {
        let locale = host.locale(player);
        let lines: Vec<String> = SubCommand::ALL
            .iter()
            .map(|sub| {
                format!(
                    "{} - {}",
                    sub.title(),
                    self.lang
                        .get_message(sub.usage().message_key(), locale.as_deref())
                )
            })
            .collect();

        self.reply(host, player, MessageKey::Help, &[lines.join("\n").as_str()]);
    }
}

/// Reads the rule number at `args[idx]`; missing or malformed is a usage error.
fn rule_number_arg(args: &[String], idx: usize, usage: Usage) -> Result<i64, CommandError> {
    args.get(idx)
        .and_then(|raw| parse_rule_number(raw))
        .ok_or(CommandError::Usage(usage))
}

#[cfg(test)]
#[path = "manager_commands_tests.rs"]
mod manager_commands_tests;

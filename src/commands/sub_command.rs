use super::Usage;
use super::permissions;

/// A `rulesmanager` sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCommand {
    Add,
    Remove,
    Edit,
    Show,
    SetAvatar,
    SetFooter,
    SetRuleFormat,
    SetHeader,
}

impl SubCommand {
    /// Order sub-commands are listed in the help text.
    pub const ALL: [SubCommand; 8] = [
        SubCommand::Add,
        SubCommand::Remove,
        SubCommand::Edit,
        SubCommand::Show,
        SubCommand::SetAvatar,
        SubCommand::SetFooter,
        SubCommand::SetRuleFormat,
        SubCommand::SetHeader,
    ];

    /// Resolves a sub-command name or alias.
    pub fn parse(name: &str) -> Option<Self> {
        let sub = match name.to_ascii_lowercase().as_str() {
            "add" | "a" => SubCommand::Add,
            "remove" | "r" => SubCommand::Remove,
            "edit" | "e" => SubCommand::Edit,
            "show" | "s" => SubCommand::Show,
            "setavatar" | "sa" => SubCommand::SetAvatar,
            "setfooter" | "sf" => SubCommand::SetFooter,
            "setruleformat" | "srf" => SubCommand::SetRuleFormat,
            "setheader" | "sh" => SubCommand::SetHeader,
            _ => return None,
        };
        Some(sub)
    }

    pub fn permission(self) -> &'static str {
        match self {
            SubCommand::Add => permissions::ADD,
            SubCommand::Remove => permissions::REMOVE,
            SubCommand::Edit => permissions::EDIT,
            SubCommand::Show => permissions::SHOW,
            SubCommand::SetAvatar => permissions::SET_AVATAR,
            SubCommand::SetFooter => permissions::SET_FOOTER,
            SubCommand::SetRuleFormat => permissions::SET_RULE_FORMAT,
            SubCommand::SetHeader => permissions::SET_HEADER,
        }
    }

    pub fn usage(self) -> Usage {
        match self {
            SubCommand::Add => Usage::Add,
            SubCommand::Remove => Usage::Remove,
            SubCommand::Edit => Usage::Edit,
            SubCommand::Show => Usage::Show,
            SubCommand::SetAvatar => Usage::SetAvatar,
            SubCommand::SetFooter => Usage::SetFooter,
            SubCommand::SetRuleFormat => Usage::SetRuleFormat,
            SubCommand::SetHeader => Usage::SetHeader,
        }
    }

    /// Label shown before the usage line in the help text.
    pub fn title(self) -> &'static str {
        match self {
            SubCommand::Add => "Add",
            SubCommand::Remove => "Remove",
            SubCommand::Edit => "Edit",
            SubCommand::Show => "Show",
            SubCommand::SetAvatar => "Set Avatar",
            SubCommand::SetFooter => "Set Footer",
            SubCommand::SetRuleFormat => "Set Format",
            SubCommand::SetHeader => "Set Header",
        }
    }
}

// Permission names registered with the host

/// Required for any `rulesmanager` sub-command.
pub const CMD: &str = "rulesmanager.cmd";
pub const ADD: &str = "rulesmanager.add";
pub const REMOVE: &str = "rulesmanager.remove";
pub const EDIT: &str = "rulesmanager.edit";
pub const SHOW: &str = "rulesmanager.show";
pub const SET_AVATAR: &str = "rulesmanager.setavatar";
pub const SET_FOOTER: &str = "rulesmanager.setfooter";
pub const SET_RULE_FORMAT: &str = "rulesmanager.setruleformat";
pub const SET_HEADER: &str = "rulesmanager.setheader";

pub const ALL: [&str; 9] = [
    CMD,
    ADD,
    REMOVE,
    EDIT,
    SHOW,
    SET_AVATAR,
    SET_FOOTER,
    SET_RULE_FORMAT,
    SET_HEADER,
];

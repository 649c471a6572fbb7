use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of decimal digits in a platform account id (SteamID64).
pub const AVATAR_ID_DIGITS: usize = 17;

/// Sender identity attached to delivered rule messages.
///
/// Only used when text is handed to the host; it is never baked into cached
/// rule text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarId(u64);

impl AvatarId {
    /// The "no avatar" sentinel.
    pub const NONE: AvatarId = AvatarId(0);

    /// Parses a raw command argument.
    ///
    /// Accepts the literal `"0"` or exactly 17 ASCII digits without a leading
    /// zero. Anything else returns `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "0" {
            return Some(Self::NONE);
        }

        if raw.len() != AVATAR_ID_DIGITS
            || raw.starts_with('0')
            || !raw.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        raw.parse::<u64>().ok().map(AvatarId)
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AvatarId {
    fn from(value: u64) -> Self {
        AvatarId(value)
    }
}

impl fmt::Display for AvatarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

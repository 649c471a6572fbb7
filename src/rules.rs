//! Rule store and display cache
//!
//! The rule book is the authoritative state; the display cache is the
//! rendered projection of it that players are actually shown.

pub mod avatar;
pub mod display_cache;
mod rule_book;
pub mod template;

pub use avatar::AvatarId;
pub use display_cache::{CacheUpdate, DisplayCache};
pub use rule_book::{RuleBook, RuleChange};
pub use template::{TemplateField, TemplateSet};

//! Pre-rendered rule text.
//!
//! Slot 0 holds the whole rules block, slot `n` holds the single-rule text
//! for rule `n`. The cache is a projection of a [`RuleBook`] and is patched
//! after every mutation instead of being recomputed on read.

use super::rule_book::RuleBook;
use crate::lang::{Lang, MessageKey};

/// Which cache slots a mutation invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheUpdate {
    /// Templates changed: every slot is stale.
    All,
    /// Positions shifted: the aggregate and every rule from `n` onward.
    From(usize),
    /// One rule changed text: the aggregate and rule `n`.
    One(usize),
    /// Nothing cached depends on the change.
    None,
}

#[derive(Debug, Clone, Default)]
pub struct DisplayCache {
    entries: Vec<String>,
}

impl DisplayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh cache for `book`.
    pub fn build(book: &RuleBook, lang: &Lang) -> Self {
        let mut cache = Self::new();
        cache.rebuild_all(book, lang);
        cache
    }

    pub fn apply(&mut self, update: CacheUpdate, book: &RuleBook, lang: &Lang) {
        match update {
            CacheUpdate::All => self.rebuild_all(book, lang),
            CacheUpdate::From(number) => self.rebuild_from(number, book, lang),
            CacheUpdate::One(number) => self.patch_one(number, book, lang),
            CacheUpdate::None => {}
        }
    }

    /// Recomputes the aggregate and every rule slot.
    pub fn rebuild_all(&mut self, book: &RuleBook, lang: &Lang) {
        #[cfg(debug_assertions)]
        log::debug!("Rebuilding rule cache for {} rules", book.count());
        self.refresh_aggregate(book);
        for number in 1..=book.count() {
            self.refresh_rule(number, book, lang);
        }
    }

    /// Recomputes the aggregate and rule slots `number..=count`.
    ///
    /// Out-of-range `number` only refreshes the aggregate.
    pub fn rebuild_from(&mut self, number: usize, book: &RuleBook, lang: &Lang) {
        #[cfg(debug_assertions)]
        log::debug!("Rebuilding rule cache from #{}", number);
        self.refresh_aggregate(book);
        for n in number.max(1)..=book.count() {
            self.refresh_rule(n, book, lang);
        }
    }

    /// Recomputes the aggregate and the single slot for `number`.
    pub fn patch_one(&mut self, number: usize, book: &RuleBook, lang: &Lang) {
        #[cfg(debug_assertions)]
        log::debug!("Patching rule cache for #{}", number);
        self.refresh_aggregate(book);
        if (1..=book.count()).contains(&number) {
            self.refresh_rule(number, book, lang);
        }
    }

    /// The rendered rules block.
    pub fn aggregate(&self) -> &str {
        self.entries.first().map(String::as_str).unwrap_or_default()
    }

    /// The rendered single-rule text, if `number` is a valid rule of `book`.
    ///
    /// Bounds come from the book, not the cache, because slots past the
    /// current count may still hold text from removed rules.
    pub fn rule(&self, number: i64, book: &RuleBook) -> Option<&str> {
        if !book.is_valid_rule(number) {
            return None;
        }
        let idx = usize::try_from(number).ok()?;
        self.entries.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_capacity(&mut self, book: &RuleBook) {
        let needed = book.count() + 1;
        if self.entries.len() < needed {
            self.entries.resize(needed, String::new());
        }
    }

    fn refresh_aggregate(&mut self, book: &RuleBook) {
        self.ensure_capacity(book);
        self.entries[0] = book.templates().render_block(book.rules());
    }

    fn refresh_rule(&mut self, number: usize, book: &RuleBook, lang: &Lang) {
        let text = &book.rules()[number - 1];
        self.entries[number] = lang.format(
            MessageKey::SpecificRule,
            None,
            &[number.to_string().as_str(), text.as_str()],
        );
    }
}

#[cfg(test)]
#[path = "display_cache_tests.rs"]
mod display_cache_tests;

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Locale-indexed string tables

use log::trace;

/// Locale tried when the user's locale has no entry
pub const FALLBACK_LOCALE: &str = "en-us";

/// A table of alternative strings, each tagged with a locale
///
/// E.g. the translations of one font's family name. Entry order is the order
/// in which the platform lists them; the first entry is the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedStrings {
    entries: Vec<(String, String)>,
}

impl LocalizedStrings {
    /// Construct an empty table
    pub fn new() -> Self {
        LocalizedStrings::default()
    }

    /// Append a `value` for `locale`
    pub fn push(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.entries.push((locale.into(), value.into()));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locale tag of entry `index`
    pub fn locale(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.0.as_str())
    }

    /// String of entry `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.1.as_str())
    }

    /// Iterate over the strings of all entries
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.1.as_str())
    }

    /// Find the entry for a locale tag
    ///
    /// Tags compare ASCII case-insensitively, with `_` equivalent to `-`.
    pub fn find_locale(&self, locale: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(tag, _)| locale_eq(tag, locale))
    }

    /// Choose the entry to show a user with locale `user_locale`
    ///
    /// Tries the user's locale, then [`FALLBACK_LOCALE`], then entry 0.
    pub fn locale_index(&self, user_locale: Option<&str>) -> usize {
        if let Some(index) = user_locale.and_then(|locale| self.find_locale(locale)) {
            return index;
        }
        trace!("locale_index: {user_locale:?} not found; trying {FALLBACK_LOCALE}");
        self.find_locale(FALLBACK_LOCALE).unwrap_or(0)
    }

    /// Resolve the best string for `user_locale`
    ///
    /// Returns `None` only if the table is empty.
    pub fn resolve(&self, user_locale: Option<&str>) -> Option<&str> {
        self.get(self.locale_index(user_locale))
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for LocalizedStrings {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        LocalizedStrings {
            entries: iter
                .into_iter()
                .map(|(locale, value)| (locale.into(), value.into()))
                .collect(),
        }
    }
}

fn locale_eq(a: &str, b: &str) -> bool {
    let norm = |c: u8| match c {
        b'_' => b'-',
        c => c.to_ascii_lowercase(),
    };
    a.len() == b.len() && a.bytes().zip(b.bytes()).all(|(x, y)| norm(x) == norm(y))
}

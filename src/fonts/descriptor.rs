// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font descriptors, queries and result sets

use super::{FontWeight, FontWidth};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// A concrete, installed font face
///
/// Descriptors are owned values, independent of any platform handle. String
/// fields which the font does not provide are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontDescriptor {
    /// Absolute path to the (first) file backing this face
    pub path: PathBuf,
    /// Unique programmatic identifier
    pub postscript_name: String,
    /// Family name, as localized for the user
    pub family: String,
    /// Style (subfamily) name, as localized for the user
    pub style: String,
    pub weight: FontWeight,
    pub width: FontWidth,
    pub italic: bool,
    pub monospace: bool,
}

/// A partial description of a wanted font
///
/// Fields which are `None` (strings) or zero (weight, width) are wildcards.
/// `italic` and `monospace` are always compared.
///
/// The default query matches every upright, proportional font.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FontQuery {
    pub postscript_name: Option<String>,
    pub family: Option<String>,
    pub style: Option<String>,
    pub weight: FontWeight,
    pub width: FontWidth,
    pub italic: bool,
    pub monospace: bool,
}

impl Default for FontQuery {
    fn default() -> Self {
        FontQuery::new()
    }
}

impl FontQuery {
    /// Synonym for default
    pub fn new() -> Self {
        FontQuery {
            postscript_name: None,
            family: None,
            style: None,
            weight: FontWeight::ANY,
            width: FontWidth::ANY,
            italic: false,
            monospace: false,
        }
    }

    /// Require this postscript name
    #[inline]
    pub fn with_postscript_name(mut self, name: impl Into<String>) -> Self {
        self.postscript_name = Some(name.into());
        self
    }

    /// Require this family name
    #[inline]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Require this style name
    #[inline]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Require this weight
    #[inline]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Require this width
    #[inline]
    pub fn with_width(mut self, width: FontWidth) -> Self {
        self.width = width;
        self
    }

    /// Set the italic flag
    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set the monospace flag
    #[inline]
    pub fn with_monospace(mut self, monospace: bool) -> Self {
        self.monospace = monospace;
        self
    }

    /// Derive a query on traits alone
    ///
    /// Names are cleared and `monospace` is reset; weight, width and italic
    /// are kept.
    pub fn traits_only(&self) -> Self {
        FontQuery {
            postscript_name: None,
            family: None,
            style: None,
            weight: self.weight,
            width: self.width,
            italic: self.italic,
            monospace: false,
        }
    }

    /// Test whether `font` satisfies every constrained field
    pub fn matches(&self, font: &FontDescriptor) -> bool {
        fn string_matches(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map(|want| want == have).unwrap_or(true)
        }

        string_matches(&self.postscript_name, &font.postscript_name)
            && string_matches(&self.family, &font.family)
            && string_matches(&self.style, &font.style)
            && (self.weight.is_any() || self.weight == font.weight)
            && (self.width.is_any() || self.width == font.width)
            && self.italic == font.italic
            && self.monospace == font.monospace
    }
}

impl From<&FontDescriptor> for FontQuery {
    /// An exact query for this descriptor (the path is not compared)
    fn from(font: &FontDescriptor) -> Self {
        FontQuery {
            postscript_name: Some(font.postscript_name.clone()),
            family: Some(font.family.clone()),
            style: Some(font.style.clone()),
            weight: font.weight,
            width: font.width,
            italic: font.italic,
            monospace: font.monospace,
        }
    }
}

/// An ordered list of descriptors, unique by postscript name
///
/// The first descriptor inserted for any given postscript name wins.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    fonts: Vec<FontDescriptor>,
    names: HashSet<String>,
}

impl ResultSet {
    /// Construct an empty set
    pub fn new() -> Self {
        ResultSet::default()
    }

    /// Append `font` unless its postscript name is already present
    ///
    /// Returns true if inserted.
    pub fn insert(&mut self, font: FontDescriptor) -> bool {
        if self.names.contains(&font.postscript_name) {
            return false;
        }
        self.names.insert(font.postscript_name.clone());
        self.fonts.push(font);
        true
    }

    /// True if a font with this postscript name is present
    pub fn contains(&self, postscript_name: &str) -> bool {
        self.names.contains(postscript_name)
    }

    /// Keep only fonts for which `f` returns true
    ///
    /// Rejected descriptors are dropped immediately.
    pub fn retain<F: FnMut(&FontDescriptor) -> bool>(&mut self, mut f: F) {
        let names = &mut self.names;
        self.fonts.retain(|font| {
            let keep = f(font);
            if !keep {
                names.remove(&font.postscript_name);
            }
            keep
        });
    }

    /// Number of fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// The first font, if any
    pub fn first(&self) -> Option<&FontDescriptor> {
        self.fonts.first()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, FontDescriptor> {
        self.fonts.iter()
    }

    /// Access as a slice
    pub fn as_slice(&self) -> &[FontDescriptor] {
        &self.fonts
    }

    /// Take the first font, dropping the rest
    pub fn into_first(self) -> Option<FontDescriptor> {
        self.fonts.into_iter().next()
    }

    /// Convert to a `Vec`
    pub fn into_vec(self) -> Vec<FontDescriptor> {
        self.fonts
    }
}

impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        self.fonts == other.fonts
    }
}

impl Eq for ResultSet {}

impl IntoIterator for ResultSet {
    type Item = FontDescriptor;
    type IntoIter = std::vec::IntoIter<FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FontDescriptor;
    type IntoIter = std::slice::Iter<'a, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

impl FromIterator<FontDescriptor> for ResultSet {
    fn from_iter<I: IntoIterator<Item = FontDescriptor>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for font in iter {
            set.insert(font);
        }
        set
    }
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Properties for specifying font weight, width and slant.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual weight class of a font, typically on a scale from 100 to 900.
///
/// This is the OpenType [`usWeightClass`] value. In a [`FontQuery`] the value
/// [`FontWeight::ANY`] matches every weight.
///
/// [`usWeightClass`]: https://learn.microsoft.com/en-us/typography/opentype/spec/os2#usweightclass
/// [`FontQuery`]: super::FontQuery
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Wildcard: matches any weight
    pub const ANY: Self = Self(0);

    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 350.
    pub const SEMI_LIGHT: Self = Self(350);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Weight value of 950.
    pub const EXTRA_BLACK: Self = Self(950);
}

impl FontWeight {
    /// Returns the underlying weight value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// True if this is the wildcard value
    pub fn is_any(self) -> bool {
        self == Self::ANY
    }

    /// Parses a CSS style font weight attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// # use system_fonts::fonts::FontWeight;
    /// assert_eq!(FontWeight::parse("normal"), Some(FontWeight::NORMAL));
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("850"), Some(FontWeight(850)));
    /// assert_eq!(FontWeight::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            _ => Self(s.parse::<u16>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            0 => "any",
            400 => "normal",
            700 => "bold",
            _ => return write!(f, "{}", self.0),
        };
        write!(f, "{keyword}")
    }
}

/// Visual width class of a font, as an ordinal from 1 to 9.
///
/// This is the OpenType [`usWidthClass`] value, also known as "stretch".
/// In a [`FontQuery`] the value [`FontWidth::ANY`] matches every width.
///
/// [`usWidthClass`]: https://learn.microsoft.com/en-us/typography/opentype/spec/os2#uswidthclass
/// [`FontQuery`]: super::FontQuery
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FontWidth(pub u16);

impl FontWidth {
    /// Wildcard: matches any width
    pub const ANY: Self = Self(0);

    /// Width that is 50% of normal.
    pub const ULTRA_CONDENSED: Self = Self(1);

    /// Width that is 62.5% of normal.
    pub const EXTRA_CONDENSED: Self = Self(2);

    /// Width that is 75% of normal.
    pub const CONDENSED: Self = Self(3);

    /// Width that is 87.5% of normal.
    pub const SEMI_CONDENSED: Self = Self(4);

    /// Width that is 100% of normal. This is the default value.
    pub const NORMAL: Self = Self(5);

    /// Width that is 112.5% of normal.
    pub const SEMI_EXPANDED: Self = Self(6);

    /// Width that is 125% of normal.
    pub const EXPANDED: Self = Self(7);

    /// Width that is 150% of normal.
    pub const EXTRA_EXPANDED: Self = Self(8);

    /// Width that is 200% of normal.
    pub const ULTRA_EXPANDED: Self = Self(9);
}

impl FontWidth {
    /// Returns the underlying ordinal.
    pub fn value(self) -> u16 {
        self.0
    }

    /// True if this is the wildcard value
    pub fn is_any(self) -> bool {
        self == Self::ANY
    }

    /// Returns the width as a percentage of normal, if this is a known ordinal
    ///
    /// # Example
    ///
    /// ```
    /// # use system_fonts::fonts::FontWidth;
    /// assert_eq!(FontWidth::SEMI_CONDENSED.percentage(), Some(87.5));
    /// assert_eq!(FontWidth::ANY.percentage(), None);
    /// ```
    pub fn percentage(self) -> Option<f32> {
        Some(match self.0 {
            1 => 50.0,
            2 => 62.5,
            3 => 75.0,
            4 => 87.5,
            5 => 100.0,
            6 => 112.5,
            7 => 125.0,
            8 => 150.0,
            9 => 200.0,
            _ => return None,
        })
    }

    /// Parses the width from a CSS style keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// # use system_fonts::fonts::FontWidth;
    /// assert_eq!(FontWidth::parse("semi-condensed"), Some(FontWidth::SEMI_CONDENSED));
    /// assert_eq!(FontWidth::parse("wideload"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "ultra-condensed" => Self::ULTRA_CONDENSED,
            "extra-condensed" => Self::EXTRA_CONDENSED,
            "condensed" => Self::CONDENSED,
            "semi-condensed" => Self::SEMI_CONDENSED,
            "normal" => Self::NORMAL,
            "semi-expanded" => Self::SEMI_EXPANDED,
            "expanded" => Self::EXPANDED,
            "extra-expanded" => Self::EXTRA_EXPANDED,
            "ultra-expanded" => Self::ULTRA_EXPANDED,
            _ => return None,
        })
    }
}

impl Default for FontWidth {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match *self {
            v if v == Self::ANY => "any",
            v if v == Self::ULTRA_CONDENSED => "ultra-condensed",
            v if v == Self::EXTRA_CONDENSED => "extra-condensed",
            v if v == Self::CONDENSED => "condensed",
            v if v == Self::SEMI_CONDENSED => "semi-condensed",
            v if v == Self::NORMAL => "normal",
            v if v == Self::SEMI_EXPANDED => "semi-expanded",
            v if v == Self::EXPANDED => "expanded",
            v if v == Self::EXTRA_EXPANDED => "extra-expanded",
            v if v == Self::ULTRA_EXPANDED => "ultra-expanded",
            _ => {
                return write!(f, "{}", self.0);
            }
        };
        write!(f, "{keyword}")
    }
}

/// Visual slant of a font face
///
/// Only [`FontSlant::Italic`] counts as italic in a [`FontDescriptor`];
/// an oblique face is reported as upright.
///
/// [`FontDescriptor`]: super::FontDescriptor
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontSlant {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// Generally a slanted version of the upright style.
    Oblique,
    /// Generally a cursive style with a slant.
    Italic,
}

impl FontSlant {
    /// Slant for a face with the given italic flag
    pub fn from_italic(italic: bool) -> Self {
        if italic {
            FontSlant::Italic
        } else {
            FontSlant::Normal
        }
    }

    /// True for [`FontSlant::Italic`] only
    pub fn is_italic(self) -> bool {
        self == FontSlant::Italic
    }
}

impl fmt::Display for FontSlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSlant::Normal => "normal",
            FontSlant::Oblique => "oblique",
            FontSlant::Italic => "italic",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weight_display() {
        assert_eq!(FontWeight::BOLD.to_string(), "bold");
        assert_eq!(FontWeight::ANY.to_string(), "any");
        assert_eq!(FontWeight::SEMI_BOLD.to_string(), "600");
        assert_eq!(FontWeight::parse(" 300 "), Some(FontWeight::LIGHT));
    }

    #[test]
    fn width_display() {
        for width in 1..=9 {
            let width = FontWidth(width);
            assert_eq!(FontWidth::parse(&width.to_string()), Some(width));
        }
        assert_eq!(FontWidth(12).to_string(), "12");
        assert_eq!(FontWidth(12).percentage(), None);
    }

    #[test]
    fn slant() {
        assert!(FontSlant::from_italic(true).is_italic());
        assert!(!FontSlant::Oblique.is_italic());
        assert_eq!(FontSlant::default(), FontSlant::Normal);
    }
}

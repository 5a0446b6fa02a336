// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font enumeration, matching and substitution
//!
//! Fonts are described by a [`FontDescriptor`]: an owned record of a face's
//! names, traits and backing file. Descriptors are produced by walking a
//! platform font collection (see [`crate::platform`]) and are independent of
//! any native handle.
//!
//! ### Matching
//!
//! A [`FontQuery`] constrains some fields of a descriptor and leaves the
//! others as wildcards. [`FontManager::find_fonts`] returns every match;
//! [`FontManager::find_font`] resolves a single font, degrading first to a
//! match on traits alone (weight, width and italic) and finally to any
//! installed font.
//!
//! ### Substitution
//!
//! Given a font and a sample string, [`FontManager::substitute_font`] reports
//! which font the platform's text layout actually draws with. This differs
//! from the requested font when that lacks glyphs for the text.
//!
//! ### Localized names
//!
//! Family and style names may be stored in several languages. These are
//! resolved via [`LocalizedStrings`]: first for the user's locale, then for
//! US English, then the font's first entry.

mod attributes;
mod descriptor;
mod extract;
mod fallback;
mod library;
mod localized;

pub use attributes::{FontSlant, FontWeight, FontWidth};
pub use descriptor::{FontDescriptor, FontQuery, ResultSet};
pub use extract::descriptor_from_font;
pub use fallback::FallbackCapture;
pub use library::{FontError, FontManager};
pub use localized::{LocalizedStrings, FALLBACK_LOCALE};

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! System font enumeration, matching and substitution
//!
//! The free functions of this crate query the fonts installed on this system
//! with default [`Config`]. For other configurations or other font services,
//! construct a [`fonts::FontManager`].
//!
//! ```no_run
//! use system_fonts::fonts::{FontQuery, FontWeight};
//!
//! let query = FontQuery::new().with_family("Arial").with_weight(FontWeight::BOLD);
//! if let Some(font) = system_fonts::find_font(&query)? {
//!     println!("{} at {}", font.postscript_name, font.path.display());
//! }
//!
//! // Which font draws Japanese text requested in Arial?
//! let font = system_fonts::substitute_font("ArialMT", "日本語")?;
//! # Ok::<(), system_fonts::fonts::FontError>(())
//! ```

mod env;
pub use env::*;

pub(crate) mod conv;

pub mod diagnostics;
pub mod fonts;
pub mod platform;
pub mod system;
pub mod wide;

use fonts::{FontDescriptor, FontError, FontManager, FontQuery, ResultSet};

/// List every installed font backed by a local file
///
/// See [`FontManager::available_fonts`].
pub fn get_available_fonts() -> Result<ResultSet, FontError> {
    FontManager::default().available_fonts()
}

/// List installed fonts matching `query`
///
/// See [`FontManager::find_fonts`].
pub fn find_fonts(query: &FontQuery) -> Result<ResultSet, FontError> {
    FontManager::default().find_fonts(query)
}

/// Resolve `query` to a single installed font
///
/// See [`FontManager::find_font`].
pub fn find_font(query: &FontQuery) -> Result<Option<FontDescriptor>, FontError> {
    FontManager::default().find_font(query)
}

/// Determine which installed font draws `text` when `postscript_name` is requested
///
/// See [`FontManager::substitute_font`].
pub fn substitute_font(
    postscript_name: &str,
    text: &str,
) -> Result<Option<FontDescriptor>, FontError> {
    FontManager::default().substitute_font(postscript_name, text)
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration of font sources and of the substitution layout

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration
///
/// A `Config` can be default-constructed: system fonts only, locale taken
/// from the operating system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Whether to load the fonts installed on this system
    ///
    /// Defaults to true.
    pub load_system_fonts: bool,
    /// Extra directories to load fonts from
    pub font_dirs: Vec<PathBuf>,
    /// Extra font files to load
    pub font_files: Vec<PathBuf>,
    /// Locale used to choose among localized font names
    ///
    /// If `None` (the default), the operating system's user locale is used.
    pub locale: Option<String>,
    /// Locale of the text format used for substitution
    ///
    /// Defaults to `"en-us"`.
    pub format_locale: String,
    /// Font size of the text format used for substitution
    ///
    /// This does not affect which font is chosen. Defaults to 12.
    pub format_size: f32,
    /// Box in which substitution text is laid out
    ///
    /// Only affects line-wrapping, not which font is chosen.
    /// Defaults to `(100.0, 100.0)`.
    pub layout_bounds: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            load_system_fonts: true,
            font_dirs: vec![],
            font_files: vec![],
            locale: None,
            format_locale: "en-us".to_string(),
            format_size: 12.0,
            layout_bounds: (100.0, 100.0),
        }
    }
}

impl Config {
    /// Synonym for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Add a directory of fonts
    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    /// Add a font file
    pub fn font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_files.push(path.into());
        self
    }

    /// Override the user locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the layout box used for substitution
    pub fn layout_bounds(mut self, width: f32, height: f32) -> Self {
        self.layout_bounds = (width, height);
        self
    }
}

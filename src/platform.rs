// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Platform font service
//!
//! These traits describe what this library needs from a native font API:
//! enumerating families and faces, reading face metadata and localized names,
//! resolving backing files, and laying out text while observing which
//! physical face is used for each glyph run.
//!
//! All handles are owned values; dropping a handle releases the native
//! resource behind it. No handle outlives the call which acquired it.
//!
//! [`crate::system::SystemFonts`] implements this over the live system
//! collection.

use crate::fonts::{FontError, FontSlant, FontWeight, FontWidth, LocalizedStrings};
use crate::wide::WideString;
use std::ops::ControlFlow;
use std::path::PathBuf;

/// Entry point to a platform font API
pub trait FontService {
    type Collection: FontCollection;

    /// Acquire a fresh snapshot of the installed fonts
    ///
    /// Each call initializes a new snapshot; nothing is shared between calls.
    fn system_collection(&self) -> Result<Self::Collection, FontError>;

    /// The user's default locale tag, e.g. `"en-US"`
    fn user_locale(&self) -> Option<String>;
}

/// A snapshot of installed fonts
pub trait FontCollection {
    /// Handle to one installed font face
    type Font: NativeFont + Clone;
    /// Handle to a text format (font request plus size and locale)
    type Format;

    /// Number of families
    fn family_count(&self) -> usize;

    /// Faces of the family at `index`, in collection order
    fn family_fonts(&self, index: usize) -> Result<Vec<Self::Font>, FontError>;

    /// Create a text format
    fn create_text_format(&self, format: &TextFormat) -> Result<Self::Format, FontError>;

    /// Lay out `text` with `format` in a box of `bounds` and draw it
    ///
    /// Each glyph run is reported to `observer` in visual order, until the
    /// observer returns [`ControlFlow::Break`].
    fn draw_text_layout(
        &self,
        text: &WideString,
        format: &Self::Format,
        bounds: (f32, f32),
        observer: &mut dyn GlyphRunObserver<Self::Font>,
    ) -> Result<(), FontError>;
}

/// Kinds of informational string stored with a font
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfoString {
    /// PostScript name
    PostscriptName,
    /// Legacy (Win32) family name
    FamilyName,
    /// Legacy (Win32) subfamily name, i.e. the style
    SubfamilyName,
}

/// Handle to an installed font face
pub trait NativeFont {
    /// Handle to a file backing this face
    type File: FontFileRef;

    /// Files backing this face, in platform order
    fn files(&self) -> Result<Vec<Self::File>, FontError>;

    /// Localized strings of the given kind, if the font has any
    fn informational_strings(&self, id: InfoString)
        -> Result<Option<LocalizedStrings>, FontError>;

    fn weight(&self) -> FontWeight;

    fn stretch(&self) -> FontWidth;

    fn slant(&self) -> FontSlant;

    /// Whether every glyph has the same advance
    ///
    /// `None` if the platform cannot tell.
    fn is_monospaced(&self) -> Option<bool>;
}

/// Handle to a font file
pub trait FontFileRef {
    /// Absolute path of the file, if it is stored locally
    ///
    /// Files provided by other loaders (in memory, remote) yield `None`.
    fn local_path(&self) -> Result<Option<PathBuf>, FontError>;
}

/// Parameters of a text format
#[derive(Clone, Debug, PartialEq)]
pub struct TextFormat {
    /// Family name; empty selects the platform default
    pub family: WideString,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub stretch: FontWidth,
    /// Size in device-independent pixels
    pub size: f32,
    pub locale: WideString,
}

/// How glyph positions are measured
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MeasuringMode {
    /// Ideal (resolution-independent) metrics
    #[default]
    Natural,
    /// Metrics snapped to a pixel grid
    GdiClassic,
    /// Metrics snapped with natural advances
    GdiNatural,
}

/// A contiguous sequence of glyphs drawn with one physical face
#[derive(Debug)]
pub struct GlyphRun<'a, F> {
    /// The face actually used for this run
    pub font: &'a F,
    pub baseline_origin: (f32, f32),
    pub measuring_mode: MeasuringMode,
    /// Number of glyphs in this run
    pub glyph_count: usize,
}

/// Receives glyph runs as a text layout is drawn
pub trait GlyphRunObserver<F> {
    /// Called once per glyph run; return `Break` to stop drawing
    fn glyph_run(&mut self, run: GlyphRun<'_, F>) -> ControlFlow<()>;
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Fallback font detection
//!
//! A font may lack glyphs for some characters of a string, in which case the
//! platform's text layout silently substitutes another installed font for
//! those characters. To learn which font is actually used we lay the text
//! out and observe the first glyph run as it is drawn.

use super::library::find_font_in;
use super::{descriptor_from_font, FontDescriptor, FontError, FontManager, FontQuery};
use super::{FontSlant, FontWeight, FontWidth};
use crate::platform::{FontCollection, FontService, GlyphRun, GlyphRunObserver, TextFormat};
use crate::wide::WideString;
use log::debug;
use std::ops::ControlFlow;

/// Records the face used by the first glyph run, then stops drawing
#[derive(Debug)]
pub struct FallbackCapture<F> {
    font: Option<F>,
}

impl<F> Default for FallbackCapture<F> {
    fn default() -> Self {
        FallbackCapture { font: None }
    }
}

impl<F> FallbackCapture<F> {
    /// Construct with nothing captured
    pub fn new() -> Self {
        FallbackCapture::default()
    }

    /// The captured face, if any run was drawn
    pub fn font(&self) -> Option<&F> {
        self.font.as_ref()
    }

    /// Take the captured face
    pub fn into_font(self) -> Option<F> {
        self.font
    }
}

impl<F: Clone> GlyphRunObserver<F> for FallbackCapture<F> {
    fn glyph_run(&mut self, run: GlyphRun<'_, F>) -> ControlFlow<()> {
        if self.font.is_none() {
            self.font = Some(run.font.clone());
        }
        ControlFlow::Break(())
    }
}

impl<S: FontService> FontManager<S> {
    /// Determine which font renders `text` when `postscript_name` is requested
    ///
    /// The name is resolved with [`FontManager::find_font`] (so a missing
    /// font degrades to a similar one). If the resolved font lacks glyphs for
    /// the start of `text` the result is whichever font the platform
    /// substitutes. Only the first glyph run is considered.
    ///
    /// Returns `Ok(None)` if no glyph run was drawn or the face used has no
    /// local file.
    pub fn substitute_font(
        &self,
        postscript_name: &str,
        text: &str,
    ) -> Result<Option<FontDescriptor>, FontError> {
        let collection = self.service().system_collection()?;
        let locale = self.user_locale();
        let locale = locale.as_deref();

        let query = FontQuery::new().with_postscript_name(postscript_name);
        let requested = find_font_in(&collection, locale, &query)?;

        let config = self.config();
        let format = match &requested {
            Some(font) => {
                debug!("substitute_font: {postscript_name} resolved to {}", font.postscript_name);
                TextFormat {
                    family: WideString::new(&font.family),
                    weight: font.weight,
                    slant: FontSlant::from_italic(font.italic),
                    stretch: font.width,
                    size: config.format_size,
                    locale: WideString::new(&config.format_locale),
                }
            }
            None => {
                debug!("substitute_font: {postscript_name} unresolved; using default format");
                TextFormat {
                    family: WideString::default(),
                    weight: FontWeight::NORMAL,
                    slant: FontSlant::Normal,
                    stretch: FontWidth::NORMAL,
                    size: config.format_size,
                    locale: WideString::new(&config.format_locale),
                }
            }
        };
        let format = collection.create_text_format(&format)?;

        let text = WideString::new(text);
        let mut capture = FallbackCapture::<<S::Collection as FontCollection>::Font>::new();
        collection.draw_text_layout(&text, &format, config.layout_bounds, &mut capture)?;

        match capture.into_font() {
            Some(font) => {
                let desc = descriptor_from_font(&font, locale)?;
                if let Some(desc) = desc.as_ref() {
                    debug!("substitute_font: drawn with {}", desc.postscript_name);
                }
                Ok(desc)
            }
            None => {
                debug!("substitute_font: no glyph run drawn");
                Ok(None)
            }
        }
    }
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! An in-memory font service for tests

#![allow(dead_code)]

use std::cell::Cell;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::rc::Rc;
use system_fonts::fonts::{
    FontError, FontManager, FontSlant, FontWeight, FontWidth, LocalizedStrings,
};
use system_fonts::platform::{
    FontCollection, FontFileRef, FontService, GlyphRun, GlyphRunObserver, InfoString,
    MeasuringMode, NativeFont, TextFormat,
};
use system_fonts::wide::{decode_wide, WideString};
use system_fonts::Config;

/// Where a face's first file comes from
#[derive(Clone, Debug)]
pub enum Backing {
    Local(PathBuf),
    Memory,
    NoFiles,
}

#[derive(Clone, Debug)]
pub struct MockFace {
    pub backing: Backing,
    pub postscript: Option<LocalizedStrings>,
    pub family: Option<LocalizedStrings>,
    pub style: Option<LocalizedStrings>,
    pub weight: FontWeight,
    pub width: FontWidth,
    pub slant: FontSlant,
    pub monospace: Option<bool>,
    pub coverage: String,
}

fn english(value: &str) -> Option<LocalizedStrings> {
    Some([("en-US", value)].into_iter().collect())
}

impl MockFace {
    /// A regular face covering ASCII letters and digits
    pub fn new(postscript: &str, family: &str, style: &str) -> Self {
        MockFace {
            backing: Backing::Local(PathBuf::from(format!("/fonts/{postscript}.ttf"))),
            postscript: english(postscript),
            family: english(family),
            style: english(style),
            weight: FontWeight::NORMAL,
            width: FontWidth::NORMAL,
            slant: FontSlant::Normal,
            monospace: Some(false),
            coverage: " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".into(),
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn width(mut self, width: FontWidth) -> Self {
        self.width = width;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    pub fn oblique(mut self) -> Self {
        self.slant = FontSlant::Oblique;
        self
    }

    pub fn monospace(mut self, monospace: Option<bool>) -> Self {
        self.monospace = monospace;
        self
    }

    pub fn covers(mut self, chars: &str) -> Self {
        self.coverage = chars.into();
        self
    }

    pub fn backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    pub fn family_names(mut self, names: &[(&str, &str)]) -> Self {
        self.family = Some(names.iter().copied().collect());
        self
    }

    pub fn no_style(mut self) -> Self {
        self.style = None;
        self
    }

    fn has_glyph(&self, c: char) -> bool {
        self.coverage.contains(c)
    }

    fn family_name(&self) -> &str {
        self.family
            .as_ref()
            .and_then(|names| names.resolve(None))
            .unwrap_or_default()
    }
}

/// Which native call should fail
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    Collection,
    Files,
    Strings,
    Format,
    Layout,
}

#[derive(Debug, Default)]
pub struct MockService {
    pub families: Vec<Vec<MockFace>>,
    pub locale: Option<String>,
    pub failure: Option<Failure>,
    pub collections: Cell<usize>,
}

impl MockService {
    pub fn new(families: Vec<Vec<MockFace>>) -> Self {
        MockService {
            families,
            locale: Some("en-US".into()),
            ..Default::default()
        }
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn locale(mut self, locale: Option<&str>) -> Self {
        self.locale = locale.map(|s| s.to_string());
        self
    }

    pub fn manager(self) -> FontManager<MockService> {
        FontManager::new(self, Config::default())
    }
}

impl FontService for MockService {
    type Collection = MockCollection;

    fn system_collection(&self) -> Result<MockCollection, FontError> {
        if self.failure == Some(Failure::Collection) {
            return Err(FontError::platform("GetSystemFontCollection"));
        }
        self.collections.set(self.collections.get() + 1);
        Ok(MockCollection {
            families: self
                .families
                .iter()
                .map(|faces| {
                    faces
                        .iter()
                        .map(|face| MockFont {
                            face: Rc::new(face.clone()),
                            failure: self.failure,
                        })
                        .collect()
                })
                .collect(),
            failure: self.failure,
        })
    }

    fn user_locale(&self) -> Option<String> {
        self.locale.clone()
    }
}

#[derive(Clone, Debug)]
pub struct MockFont {
    pub face: Rc<MockFace>,
    failure: Option<Failure>,
}

pub struct MockFile(Backing);

impl FontFileRef for MockFile {
    fn local_path(&self) -> Result<Option<PathBuf>, FontError> {
        Ok(match &self.0 {
            Backing::Local(path) => Some(path.clone()),
            _ => None,
        })
    }
}

impl NativeFont for MockFont {
    type File = MockFile;

    fn files(&self) -> Result<Vec<MockFile>, FontError> {
        if self.failure == Some(Failure::Files) {
            return Err(FontError::platform("GetFiles"));
        }
        Ok(match &self.face.backing {
            Backing::NoFiles => vec![],
            backing => vec![MockFile(backing.clone())],
        })
    }

    fn informational_strings(
        &self,
        id: InfoString,
    ) -> Result<Option<LocalizedStrings>, FontError> {
        if self.failure == Some(Failure::Strings) {
            return Err(FontError::platform("GetInformationalStrings"));
        }
        Ok(match id {
            InfoString::PostscriptName => self.face.postscript.clone(),
            InfoString::FamilyName => self.face.family.clone(),
            InfoString::SubfamilyName => self.face.style.clone(),
        })
    }

    fn weight(&self) -> FontWeight {
        self.face.weight
    }

    fn stretch(&self) -> FontWidth {
        self.face.width
    }

    fn slant(&self) -> FontSlant {
        self.face.slant
    }

    fn is_monospaced(&self) -> Option<bool> {
        self.face.monospace
    }
}

pub struct MockCollection {
    families: Vec<Vec<MockFont>>,
    failure: Option<Failure>,
}

pub struct MockFormat {
    pub primary: Option<MockFont>,
}

impl MockCollection {
    fn fonts(&self) -> impl Iterator<Item = &MockFont> {
        self.families.iter().flatten()
    }
}

impl FontCollection for MockCollection {
    type Font = MockFont;
    type Format = MockFormat;

    fn family_count(&self) -> usize {
        self.families.len()
    }

    fn family_fonts(&self, index: usize) -> Result<Vec<MockFont>, FontError> {
        self.families
            .get(index)
            .cloned()
            .ok_or(FontError::InvalidFamily(index))
    }

    fn create_text_format(&self, format: &TextFormat) -> Result<MockFormat, FontError> {
        if self.failure == Some(Failure::Format) {
            return Err(FontError::platform("CreateTextFormat"));
        }
        let family = decode_wide(format.family.as_slice_with_nul());
        let same_family = |font: &&MockFont| font.face.family_name() == family;
        let primary = self
            .fonts()
            .filter(same_family)
            .find(|font| font.face.weight == format.weight && font.face.slant == format.slant)
            .or_else(|| self.fonts().find(same_family))
            .or_else(|| self.fonts().next())
            .cloned();
        Ok(MockFormat { primary })
    }

    fn draw_text_layout(
        &self,
        text: &WideString,
        format: &MockFormat,
        _bounds: (f32, f32),
        observer: &mut dyn GlyphRunObserver<MockFont>,
    ) -> Result<(), FontError> {
        if self.failure == Some(Failure::Layout) {
            return Err(FontError::platform("CreateTextLayout"));
        }

        let mut runs: Vec<(MockFont, usize)> = vec![];
        for c in text.to_string_lossy().chars() {
            let font = format
                .primary
                .as_ref()
                .filter(|font| font.face.has_glyph(c))
                .or_else(|| self.fonts().find(|font| font.face.has_glyph(c)))
                .or(runs.last().map(|run| &run.0))
                .or(format.primary.as_ref())
                .cloned();
            let Some(font) = font else { continue };
            match runs.last_mut() {
                Some(run) if Rc::ptr_eq(&run.0.face, &font.face) => run.1 += 1,
                _ => runs.push((font, 1)),
            }
        }

        let mut x = 0.0;
        for (font, glyph_count) in &runs {
            let run = GlyphRun {
                font,
                baseline_origin: (x, 10.0),
                measuring_mode: MeasuringMode::Natural,
                glyph_count: *glyph_count,
            };
            if observer.glyph_run(run).is_break() {
                break;
            }
            x += 10.0 * *glyph_count as f32;
        }
        Ok(())
    }
}

/// Records every run's postscript name
#[derive(Default)]
pub struct RunRecorder {
    pub runs: Vec<(String, usize)>,
}

impl GlyphRunObserver<MockFont> for RunRecorder {
    fn glyph_run(&mut self, run: GlyphRun<'_, MockFont>) -> ControlFlow<()> {
        let name = run
            .font
            .face
            .postscript
            .as_ref()
            .and_then(|names| names.resolve(None))
            .unwrap_or_default()
            .to_string();
        self.runs.push((name, run.glyph_count));
        ControlFlow::Continue(())
    }
}

/// A small installed set, with one postscript name in two families
pub fn standard_fonts() -> Vec<Vec<MockFace>> {
    vec![
        vec![
            MockFace::new("ArialMT", "Arial", "Regular"),
            MockFace::new("Arial-BoldMT", "Arial", "Bold").weight(FontWeight::BOLD),
            MockFace::new("Arial-ItalicMT", "Arial", "Italic").italic(),
        ],
        vec![
            MockFace::new("Arial-BoldMT", "Arial Bold", "Regular").weight(FontWeight::BOLD),
            MockFace::new("ArialBold-Legacy", "Arial Bold", "Regular"),
        ],
        vec![
            MockFace::new("CourierNewPSMT", "Courier New", "Regular").monospace(Some(true)),
        ],
        vec![
            MockFace::new("MS-Gothic", "MS Gothic", "Regular").covers(" ABCabc日本語"),
        ],
    ]
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! System font service
//!
//! Implements the [`crate::platform`] traits over a [`fontdb::Database`]
//! loaded from the fonts installed on this system (plus any extra sources
//! given in the [`Config`]). The database is rebuilt on every call to
//! [`FontService::system_collection`].

mod families;
mod layout;
mod names;

use crate::fonts::{FontError, FontSlant, FontWeight, FontWidth, LocalizedStrings};
use crate::platform::{
    FontCollection, FontFileRef, FontService, GlyphRunObserver, InfoString, NativeFont, TextFormat,
};
use crate::wide::{decode_wide, WideString};
use crate::Config;
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight, ID};
use layout::{stretch_ordinal, TextLayout};
use log::{debug, trace};
use names::FaceNames;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use ttf_parser::Face;

/// The system font service
#[derive(Clone, Debug, Default)]
pub struct SystemFonts {
    config: Config,
}

impl SystemFonts {
    /// Construct
    pub fn new(config: Config) -> Self {
        SystemFonts { config }
    }

    fn load_database(&self) -> Result<Database, FontError> {
        let mut db = Database::new();
        if self.config.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.config.font_dirs {
            db.load_fonts_dir(dir);
        }
        for path in &self.config.font_files {
            db.load_font_file(path)?;
        }
        families::set_defaults(&mut db);
        debug!("Found {} fonts", db.len());
        Ok(db)
    }
}

impl FontService for SystemFonts {
    type Collection = SystemCollection;

    fn system_collection(&self) -> Result<SystemCollection, FontError> {
        Ok(SystemCollection::new(self.load_database()?))
    }

    fn user_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A snapshot of the system fonts
///
/// Faces are grouped into families by their primary family name, with
/// families ordered by first appearance in the database.
pub struct SystemCollection {
    db: Rc<Database>,
    families: Vec<Vec<ID>>,
}

impl SystemCollection {
    fn new(db: Database) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut families: Vec<Vec<ID>> = vec![];
        for face in db.faces() {
            let name = face.families.first().map(|(name, _)| name.as_str());
            let i = *index.entry(name.unwrap_or_default()).or_insert_with(|| {
                families.push(vec![]);
                families.len() - 1
            });
            families[i].push(face.id);
        }
        drop(index);

        SystemCollection {
            db: Rc::new(db),
            families,
        }
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// True if no fonts are loaded
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// The face drawing `family` in the style of `format`
    ///
    /// Tries fontdb's family names, then legacy family names, then the
    /// default sans-serif family, then any face. Returns `None` only if no
    /// fonts are loaded.
    fn primary_face(&self, family: &str, format: &SystemFormat) -> Option<ID> {
        let named = (!family.is_empty())
            .then(|| {
                self.db
                    .query(&to_query(&[Family::Name(family)], format))
                    .or_else(|| self.legacy_family_face(family, format))
            })
            .flatten();
        named
            .or_else(|| self.db.query(&to_query(&[Family::SansSerif], format)))
            .or_else(|| self.db.faces().next().map(|face| face.id))
    }

    /// The closest face whose legacy family name is `family`
    fn legacy_family_face(&self, family: &str, format: &SystemFormat) -> Option<ID> {
        let db = &self.db;
        let faces = db.faces().filter(|info| {
            db.with_face_data(info.id, |data, index| {
                Face::parse(data, index).is_ok_and(|face| names::has_legacy_family(&face, family))
            })
            .unwrap_or(false)
        });
        let id = layout::closest(faces, format);
        trace!("legacy_family_face: {family:?} resolved to {id:?}");
        id
    }
}

impl fmt::Debug for SystemCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemCollection")
            .field("faces", &self.db.len())
            .field("families", &self.families.len())
            .finish()
    }
}

impl FontCollection for SystemCollection {
    type Font = SystemFont;
    type Format = SystemFormat;

    fn family_count(&self) -> usize {
        self.families.len()
    }

    fn family_fonts(&self, index: usize) -> Result<Vec<SystemFont>, FontError> {
        let ids = self
            .families
            .get(index)
            .ok_or(FontError::InvalidFamily(index))?;
        ids.iter()
            .map(|id| SystemFont::new(self.db.clone(), *id))
            .collect()
    }

    fn create_text_format(&self, format: &TextFormat) -> Result<SystemFormat, FontError> {
        let family = decode_wide(format.family.as_slice_with_nul());
        let mut resolved = SystemFormat {
            primary: None,
            weight: format.weight,
            slant: format.slant,
            stretch: format.stretch,
            size: format.size,
            locale: decode_wide(format.locale.as_slice()),
        };
        resolved.primary = self.primary_face(&family, &resolved);
        trace!("create_text_format: {family:?} resolved to {:?}", resolved.primary);
        Ok(resolved)
    }

    fn draw_text_layout(
        &self,
        text: &WideString,
        format: &SystemFormat,
        bounds: (f32, f32),
        observer: &mut dyn GlyphRunObserver<SystemFont>,
    ) -> Result<(), FontError> {
        let layout = TextLayout::new(&self.db, text.as_slice(), format, bounds);
        trace!("draw_text_layout: {} runs", layout.num_runs());
        layout.draw(&self.db, (0.0, 0.0), observer)
    }
}

fn to_query<'a>(families: &'a [Family<'a>], format: &SystemFormat) -> Query<'a> {
    Query {
        families,
        weight: Weight(format.weight.0),
        stretch: to_stretch(format.stretch),
        style: match format.slant {
            FontSlant::Normal => Style::Normal,
            FontSlant::Oblique => Style::Oblique,
            FontSlant::Italic => Style::Italic,
        },
    }
}

fn to_stretch(width: FontWidth) -> Stretch {
    match width.0 {
        1 => Stretch::UltraCondensed,
        2 => Stretch::ExtraCondensed,
        3 => Stretch::Condensed,
        4 => Stretch::SemiCondensed,
        6 => Stretch::SemiExpanded,
        7 => Stretch::Expanded,
        8 => Stretch::ExtraExpanded,
        9 => Stretch::UltraExpanded,
        _ => Stretch::Normal,
    }
}

/// A resolved text format
#[derive(Clone, Debug, PartialEq)]
pub struct SystemFormat {
    primary: Option<ID>,
    weight: FontWeight,
    slant: FontSlant,
    stretch: FontWidth,
    size: f32,
    locale: String,
}

impl SystemFormat {
    /// The face requested text is drawn with, where it has glyphs
    ///
    /// `None` only if no fonts are loaded.
    pub fn primary(&self) -> Option<ID> {
        self.primary
    }

    /// Font size
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// Handle to one face of a [`SystemCollection`]
#[derive(Clone)]
pub struct SystemFont {
    db: Rc<Database>,
    id: ID,
    weight: FontWeight,
    stretch: FontWidth,
    slant: FontSlant,
    monospaced: bool,
    names: Rc<OnceCell<FaceNames>>,
}

impl SystemFont {
    fn new(db: Rc<Database>, id: ID) -> Result<Self, FontError> {
        let info = db.face(id).ok_or(FontError::FaceData)?;
        let slant = match info.style {
            Style::Normal => FontSlant::Normal,
            Style::Italic => FontSlant::Italic,
            Style::Oblique => FontSlant::Oblique,
        };
        let (weight, stretch, monospaced) = (
            FontWeight(info.weight.0),
            FontWidth(stretch_ordinal(info.stretch)),
            info.monospaced,
        );
        Ok(SystemFont {
            db,
            id,
            weight,
            stretch,
            slant,
            monospaced,
            names: Rc::new(OnceCell::new()),
        })
    }

    /// The database identifier of this face
    pub fn id(&self) -> ID {
        self.id
    }

    fn names(&self) -> Result<&FaceNames, FontError> {
        if let Some(names) = self.names.get() {
            return Ok(names);
        }
        let names = self
            .db
            .with_face_data(self.id, |data, index| {
                Face::parse(data, index).map(|face| FaceNames::read(&face))
            })
            .ok_or(FontError::FaceData)??;
        Ok(self.names.get_or_init(|| names))
    }
}

impl fmt::Debug for SystemFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SystemFont").field(&self.id).finish()
    }
}

impl NativeFont for SystemFont {
    type File = SystemFile;

    fn files(&self) -> Result<Vec<SystemFile>, FontError> {
        let info = self.db.face(self.id).ok_or(FontError::FaceData)?;
        let path = match &info.source {
            Source::File(path) | Source::SharedFile(path, _) => Some(path.clone()),
            _ => None,
        };
        Ok(vec![SystemFile { path }])
    }

    fn informational_strings(
        &self,
        id: InfoString,
    ) -> Result<Option<LocalizedStrings>, FontError> {
        Ok(self.names()?.get(id).cloned())
    }

    fn weight(&self) -> FontWeight {
        self.weight
    }

    fn stretch(&self) -> FontWidth {
        self.stretch
    }

    fn slant(&self) -> FontSlant {
        self.slant
    }

    fn is_monospaced(&self) -> Option<bool> {
        Some(self.monospaced)
    }
}

/// Handle to the file backing a [`SystemFont`]
#[derive(Clone, Debug)]
pub struct SystemFile {
    // None for fonts loaded from memory
    path: Option<PathBuf>,
}

impl FontFileRef for SystemFile {
    fn local_path(&self) -> Result<Option<PathBuf>, FontError> {
        self.path
            .as_deref()
            .map(std::path::absolute)
            .transpose()
            .map_err(FontError::from)
    }
}

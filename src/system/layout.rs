// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple text layout with font fallback
//!
//! Text is split into glyph runs, each drawn with one face. This does no
//! shaping: one glyph per char, advancing by the nominal glyph advance.

use super::{SystemFont, SystemFormat};
use crate::conv::{to_u32, DPU};
use crate::fonts::{FontError, FontSlant};
use crate::platform::{GlyphRun, GlyphRunObserver, MeasuringMode};
use fontdb::{Database, FaceInfo, Stretch, Style, ID};
use log::trace;
use std::collections::HashMap;
use std::ops::{ControlFlow, Range};
use std::rc::Rc;
use ttf_parser::Face;

/// Vertical metrics, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
struct LineMetrics {
    ascent: f32,
    height: f32,
}

impl LineMetrics {
    fn nominal(size: f32) -> Self {
        LineMetrics {
            ascent: 0.8 * size,
            height: 1.2 * size,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Run {
    face: ID,
    /// Range in UTF-16 code units
    range: Range<u32>,
    glyphs: usize,
    /// Baseline origin relative to the layout origin
    origin: (f32, f32),
}

/// Glyph coverage lookups against a database
struct Coverage<'a> {
    db: &'a Database,
    // Advance in ems, or None where the face has no glyph
    advances: HashMap<(ID, char), Option<f32>>,
    // Fallback face for a char, or None where no face covers it
    fallbacks: HashMap<char, Option<ID>>,
}

impl<'a> Coverage<'a> {
    fn new(db: &'a Database) -> Self {
        Coverage {
            db,
            advances: HashMap::new(),
            fallbacks: HashMap::new(),
        }
    }

    fn advance(&mut self, face: ID, c: char) -> Option<f32> {
        let db = self.db;
        *self.advances.entry((face, c)).or_insert_with(|| {
            db.with_face_data(face, |data, index| {
                let face = Face::parse(data, index).ok()?;
                let glyph = face.glyph_index(c)?;
                let advance = face.glyph_hor_advance(glyph).unwrap_or(0);
                Some(DPU::new(1.0, face.units_per_em()).u16_to_px(advance))
            })
            .flatten()
        })
    }

    fn covers(&mut self, face: ID, c: char) -> bool {
        self.advance(face, c).is_some()
    }

    /// The installed face closest to `format` which covers `c`
    fn fallback(&mut self, c: char, format: &SystemFormat) -> Option<ID> {
        if let Some(id) = self.fallbacks.get(&c) {
            return *id;
        }

        let db = self.db;
        let mut best: Option<(u32, ID)> = None;
        for info in db.faces() {
            let distance = distance(info, format);
            if best.map(|(d, _)| distance < d).unwrap_or(true) && self.covers(info.id, c) {
                best = Some((distance, info.id));
            }
        }

        let id = best.map(|(_, id)| id);
        trace!("fallback for {c:?}: {id:?}");
        self.fallbacks.insert(c, id);
        id
    }
}

/// The face of `faces` closest to `format`, first on ties
pub(crate) fn closest<'a>(
    faces: impl Iterator<Item = &'a FaceInfo>,
    format: &SystemFormat,
) -> Option<ID> {
    faces
        .min_by_key(|info| distance(info, format))
        .map(|info| info.id)
}

/// How far `info` is from the traits requested by `format`
fn distance(info: &FaceInfo, format: &SystemFormat) -> u32 {
    let style = match (info.style, format.slant) {
        (Style::Normal, FontSlant::Normal)
        | (Style::Italic, FontSlant::Italic)
        | (Style::Oblique, FontSlant::Oblique) => 0,
        (Style::Normal, _) | (_, FontSlant::Normal) => 2,
        _ => 1,
    };
    let weight = u32::from(info.weight.0.abs_diff(format.weight.0));
    let stretch = u32::from(stretch_ordinal(info.stretch).abs_diff(format.stretch.0));
    style * 10_000 + stretch * 1_000 + weight
}

/// The `usWidthClass` ordinal of a stretch
pub(crate) fn stretch_ordinal(stretch: Stretch) -> u16 {
    match stretch {
        Stretch::UltraCondensed => 1,
        Stretch::ExtraCondensed => 2,
        Stretch::Condensed => 3,
        Stretch::SemiCondensed => 4,
        Stretch::Normal => 5,
        Stretch::SemiExpanded => 6,
        Stretch::Expanded => 7,
        Stretch::ExtraExpanded => 8,
        Stretch::UltraExpanded => 9,
    }
}

fn line_metrics(db: &Database, face: ID, size: f32) -> Option<LineMetrics> {
    db.with_face_data(face, |data, index| {
        let face = Face::parse(data, index).ok()?;
        let dpu = DPU::new(size, face.units_per_em());
        let ascent = dpu.i16_to_px(face.ascender());
        let height = dpu.i16_to_px(face.height());
        (height > 0.0).then_some(LineMetrics { ascent, height })
    })
    .flatten()
}

/// A laid-out string
#[derive(Clone, Debug, Default)]
pub(crate) struct TextLayout {
    runs: Vec<Run>,
}

impl TextLayout {
    /// Lay out `text` within `bounds`
    ///
    /// Each char is drawn with the primary face of `format` if that has a
    /// glyph, else with the previously used fallback face if that has one,
    /// else with the closest face which has one. If no face has a glyph, the
    /// char stays in the current run.
    ///
    /// Lines wrap when a glyph would cross the width of `bounds`. The height
    /// of `bounds` does not clip.
    pub(crate) fn new(
        db: &Database,
        text: &[u16],
        format: &SystemFormat,
        bounds: (f32, f32),
    ) -> Self {
        let size = format.size;
        let metrics = format
            .primary
            .and_then(|id| line_metrics(db, id, size))
            .unwrap_or_else(|| LineMetrics::nominal(size));

        let mut coverage = Coverage::new(db);
        let mut last_fallback: Option<ID> = None;
        let mut runs: Vec<Run> = vec![];
        let mut current: Option<Run> = None;
        let (mut x, mut line) = (0.0f32, 0u32);
        let mut offset = 0;

        for c in char::decode_utf16(text.iter().copied()) {
            let c = c.unwrap_or(char::REPLACEMENT_CHARACTER);
            let start = offset;
            // an unpaired surrogate is one code unit
            offset += if c == char::REPLACEMENT_CHARACTER { 1 } else { c.len_utf16() };

            if c == '\n' {
                runs.extend(current.take());
                x = 0.0;
                line += 1;
                continue;
            }

            let face = if format.primary.is_some_and(|id| coverage.covers(id, c)) {
                format.primary
            } else if last_fallback.is_some_and(|id| coverage.covers(id, c)) {
                last_fallback
            } else if let Some(id) = coverage.fallback(c, format) {
                last_fallback = Some(id);
                Some(id)
            } else {
                current.as_ref().map(|run| run.face).or(format.primary)
            };
            let Some(face) = face else {
                trace!("no face for {c:?}");
                continue;
            };

            let advance = coverage.advance(face, c).unwrap_or(0.0) * size;
            if x > 0.0 && x + advance > bounds.0 {
                runs.extend(current.take());
                x = 0.0;
                line += 1;
            }

            if let Some(run) = current.as_mut().filter(|run| run.face == face) {
                run.range.end = to_u32(offset);
                run.glyphs += 1;
            } else {
                runs.extend(current.take());
                current = Some(Run {
                    face,
                    range: to_u32(start)..to_u32(offset),
                    glyphs: 1,
                    origin: (x, metrics.ascent + line as f32 * metrics.height),
                });
            }
            x += advance;
        }
        runs.extend(current);

        TextLayout { runs }
    }

    /// Number of glyph runs
    pub(crate) fn num_runs(&self) -> usize {
        self.runs.len()
    }

    /// Report each run to `observer`, offset by `origin`
    pub(crate) fn draw(
        &self,
        db: &Rc<Database>,
        origin: (f32, f32),
        observer: &mut dyn GlyphRunObserver<SystemFont>,
    ) -> Result<(), FontError> {
        for run in &self.runs {
            trace!("draw: run {:?} with {:?}", run.range, run.face);
            let font = SystemFont::new(db.clone(), run.face)?;
            let run = GlyphRun {
                font: &font,
                baseline_origin: (origin.0 + run.origin.0, origin.1 + run.origin.1),
                measuring_mode: MeasuringMode::Natural,
                glyph_count: run.glyphs,
            };
            if let ControlFlow::Break(()) = observer.glyph_run(run) {
                break;
            }
        }
        Ok(())
    }
}

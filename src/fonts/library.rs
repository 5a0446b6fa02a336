// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font enumeration and matching

use super::{descriptor_from_font, FontDescriptor, FontQuery, ResultSet};
use crate::platform::{FontCollection, FontService};
use crate::system::SystemFonts;
use crate::Config;
use log::{debug, trace};
use thiserror::Error;

/// Font loading errors
///
/// Any of these aborts the whole operation; no partial result is returned.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font loading error: {call} failed")]
    Platform { call: &'static str },
    #[error("font loading error")]
    FaceParsing(#[from] ttf_parser::FaceParsingError),
    #[error("font loading error: face data unavailable")]
    FaceData,
    #[error("font loading error: invalid family index {0}")]
    InvalidFamily(usize),
    #[error("font loading error")]
    Io(#[from] std::io::Error),
}

impl FontError {
    /// Construct a [`FontError::Platform`] for a failed native call
    pub fn platform(call: &'static str) -> Self {
        FontError::Platform { call }
    }
}

/// Font enumeration, matching and substitution over a [`FontService`]
///
/// Every method acquires its own collection snapshot from the service and
/// releases it before returning; nothing is cached between calls.
pub struct FontManager<S: FontService = SystemFonts> {
    service: S,
    config: Config,
}

impl FontManager<SystemFonts> {
    /// Construct over the system font service
    pub fn system(config: Config) -> Self {
        let service = SystemFonts::new(config.clone());
        FontManager { service, config }
    }
}

impl Default for FontManager<SystemFonts> {
    fn default() -> Self {
        FontManager::system(Config::default())
    }
}

impl<S: FontService> FontManager<S> {
    /// Construct over an arbitrary service
    pub fn new(service: S, config: Config) -> Self {
        FontManager { service, config }
    }

    /// Access the service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The locale used to resolve localized names
    pub(crate) fn user_locale(&self) -> Option<String> {
        self.config
            .locale
            .clone()
            .or_else(|| self.service.user_locale())
    }

    /// List every installed font which is backed by a local file
    ///
    /// Fonts are unique by postscript name, in family then face order.
    pub fn available_fonts(&self) -> Result<ResultSet, FontError> {
        let collection = self.service.system_collection()?;
        let locale = self.user_locale();
        enumerate(&collection, locale.as_deref())
    }

    /// List installed fonts matching `query`
    pub fn find_fonts(&self, query: &FontQuery) -> Result<ResultSet, FontError> {
        let collection = self.service.system_collection()?;
        let locale = self.user_locale();
        let mut fonts = enumerate(&collection, locale.as_deref())?;
        filter(&mut fonts, query);
        Ok(fonts)
    }

    /// Resolve `query` to a single installed font
    ///
    /// Tries `query`, then the query's traits alone (weight, width, italic),
    /// then any installed font. Returns `None` only if no font is installed.
    pub fn find_font(&self, query: &FontQuery) -> Result<Option<FontDescriptor>, FontError> {
        let collection = self.service.system_collection()?;
        let locale = self.user_locale();
        find_font_in(&collection, locale.as_deref(), query)
    }
}

/// Walk `collection`, extracting each face once
pub(crate) fn enumerate<C: FontCollection>(
    collection: &C,
    user_locale: Option<&str>,
) -> Result<ResultSet, FontError> {
    let mut fonts = ResultSet::new();
    for index in 0..collection.family_count() {
        for font in collection.family_fonts(index)? {
            let Some(desc) = descriptor_from_font(&font, user_locale)? else {
                continue;
            };
            let name = desc.postscript_name.clone();
            if fonts.insert(desc) {
                trace!("enumerate: {name}");
            } else {
                trace!("enumerate: skipping duplicate {name}");
            }
        }
    }
    debug!("enumerate: found {} fonts", fonts.len());
    Ok(fonts)
}

fn filter(fonts: &mut ResultSet, query: &FontQuery) {
    fonts.retain(|font| query.matches(font));
    debug!("filter: {} fonts match {query:?}", fonts.len());
}

pub(crate) fn find_font_in<C: FontCollection>(
    collection: &C,
    user_locale: Option<&str>,
    query: &FontQuery,
) -> Result<Option<FontDescriptor>, FontError> {
    let all = enumerate(collection, user_locale)?;
    let traits = query.traits_only();

    let font = all
        .iter()
        .find(|font| query.matches(font))
        .or_else(|| {
            debug!("find_font: no exact match; matching traits only");
            all.iter().find(|font| traits.matches(font))
        })
        .or_else(|| {
            debug!("find_font: no trait match; using any font");
            all.first()
        })
        .cloned();

    match &font {
        Some(font) => debug!("find_font: {}", font.postscript_name),
        None => debug!("find_font: no fonts installed"),
    }
    Ok(font)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn configured_locale_overrides() {
        let manager = FontManager::system(Config::new().load_system_fonts(false).locale("ja-JP"));
        assert_eq!(manager.user_locale().as_deref(), Some("ja-JP"));

        let manager = FontManager::system(Config::new().load_system_fonts(false));
        assert_eq!(manager.user_locale(), sys_locale::get_locale());
    }
}

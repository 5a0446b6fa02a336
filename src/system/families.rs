// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Default generic families
//!
//! A text format with an empty or unknown family name is drawn with the
//! platform's default sans-serif font. `fontdb` does not pick defaults for
//! the generic families itself, so we choose the first installed family from
//! each of the lists below.
//!
//! Font family ordering indicates usage preference.

use fontdb::Database;
use log::debug;

const DEFAULT_SERIF: [&str; 10] = [
    "Times New Roman",
    "Georgia",
    "Palatino Linotype",
    "Palatino",
    "Times",
    "Noto Serif",
    "DejaVu Serif",
    "Liberation Serif",
    "Droid Serif",
    "FreeSerif",
];

const DEFAULT_SANS_SERIF: [&str; 14] = [
    "Segoe UI",
    "Arial",
    "Helvetica",
    "Noto Sans",
    "DejaVu Sans",
    "Liberation Sans",
    "Open Sans",
    "Droid Sans",
    "Roboto",
    "Cantarell",
    "Verdana",
    "Tahoma",
    "Lucida Sans Unicode",
    "FreeSans",
];

const DEFAULT_MONOSPACE: [&str; 11] = [
    "Consolas",
    "Menlo",
    "Courier New",
    "Noto Sans Mono",
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Droid Sans Mono",
    "Source Code Pro",
    "Lucida Console",
    "Courier",
    "FreeMono",
];

/// Set default generic families among those installed in `db`
pub(crate) fn set_defaults(db: &mut Database) {
    if let Some(name) = first_installed(db, &DEFAULT_SERIF) {
        debug!("Default serif font: {name}");
        db.set_serif_family(name);
    }
    if let Some(name) = first_installed(db, &DEFAULT_SANS_SERIF) {
        debug!("Default sans-serif font: {name}");
        db.set_sans_serif_family(name);
    }
    if let Some(name) = first_installed(db, &DEFAULT_MONOSPACE) {
        debug!("Default monospace font: {name}");
        db.set_monospace_family(name);
    }
}

fn first_installed(db: &Database, names: &[&'static str]) -> Option<&'static str> {
    names.iter().copied().find(|name| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    })
}

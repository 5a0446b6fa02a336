// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Building descriptors from platform font handles

use super::{FontDescriptor, FontError};
use crate::platform::{FontFileRef, InfoString, NativeFont};
use log::{debug, trace};

/// Build a descriptor for `font`
///
/// Returns `Ok(None)` if the font has no file or its first file is not
/// stored locally. Only the first file of a multi-file face is recorded.
pub fn descriptor_from_font<F: NativeFont>(
    font: &F,
    user_locale: Option<&str>,
) -> Result<Option<FontDescriptor>, FontError> {
    let files = font.files()?;
    let Some(file) = files.first() else {
        trace!("descriptor_from_font: no files");
        return Ok(None);
    };
    let Some(path) = file.local_path()? else {
        trace!("descriptor_from_font: not a local file");
        return Ok(None);
    };
    drop(files);

    let postscript_name = info_string(font, InfoString::PostscriptName, user_locale)?;
    let family = info_string(font, InfoString::FamilyName, user_locale)?;
    let style = info_string(font, InfoString::SubfamilyName, user_locale)?;

    debug!("descriptor_from_font: {postscript_name} ({})", path.display());
    Ok(Some(FontDescriptor {
        path,
        postscript_name,
        family,
        style,
        weight: font.weight(),
        width: font.stretch(),
        italic: font.slant().is_italic(),
        monospace: font.is_monospaced().unwrap_or(false),
    }))
}

fn info_string<F: NativeFont>(
    font: &F,
    id: InfoString,
    user_locale: Option<&str>,
) -> Result<String, FontError> {
    let strings = font.informational_strings(id)?;
    let value = strings
        .as_ref()
        .and_then(|strings| strings.resolve(user_locale))
        .unwrap_or_default()
        .to_string();
    trace!("info_string {id:?}: {value}");
    Ok(value)
}

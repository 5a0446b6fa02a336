// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Localized strings from the OpenType `name` table

use crate::fonts::LocalizedStrings;
use crate::platform::InfoString;
use crate::wide::decode_wide_be;
use ttf_parser::{name_id, Face, PlatformId};

/// Name ID of an informational string
fn name_id_of(id: InfoString) -> u16 {
    match id {
        InfoString::PostscriptName => name_id::POST_SCRIPT_NAME,
        InfoString::FamilyName => name_id::FAMILY,
        InfoString::SubfamilyName => name_id::SUBFAMILY,
    }
}

/// The three informational strings of one face
#[derive(Clone, Debug, Default)]
pub(crate) struct FaceNames {
    postscript: Option<LocalizedStrings>,
    family: Option<LocalizedStrings>,
    subfamily: Option<LocalizedStrings>,
}

impl FaceNames {
    pub(crate) fn read(face: &Face) -> Self {
        FaceNames {
            postscript: read_strings(face, name_id_of(InfoString::PostscriptName)),
            family: read_strings(face, name_id_of(InfoString::FamilyName)),
            subfamily: read_strings(face, name_id_of(InfoString::SubfamilyName)),
        }
    }

    pub(crate) fn get(&self, id: InfoString) -> Option<&LocalizedStrings> {
        match id {
            InfoString::PostscriptName => self.postscript.as_ref(),
            InfoString::FamilyName => self.family.as_ref(),
            InfoString::SubfamilyName => self.subfamily.as_ref(),
        }
    }
}

/// Read all variants of name `id`
///
/// Windows-platform UTF-16 records are preferred, tagged with their locale.
/// Unicode-platform records (which carry no language) are used only if there
/// is no Windows record.
pub(crate) fn read_strings(face: &Face, id: u16) -> Option<LocalizedStrings> {
    let mut windows = LocalizedStrings::new();
    let mut unicode = LocalizedStrings::new();

    for name in face.names() {
        if name.name_id != id {
            continue;
        }
        match name.platform_id {
            // Encodings 0, 1 and 10 are UTF-16BE
            PlatformId::Windows if matches!(name.encoding_id, 0 | 1 | 10) => {
                let value = decode_wide_be(name.name);
                if !value.is_empty() {
                    windows.push(lcid_tag(name.language_id), value);
                }
            }
            PlatformId::Unicode => {
                let value = decode_wide_be(name.name);
                if !value.is_empty() {
                    unicode.push("und", value);
                }
            }
            _ => (),
        }
    }

    if !windows.is_empty() {
        Some(windows)
    } else if !unicode.is_empty() {
        Some(unicode)
    } else {
        None
    }
}

/// True if any localization of the legacy family name (name ID 1) is `family`
///
/// Faces with a typographic family (name ID 16) are listed by fontdb under
/// that name only, so e.g. "DejaVu Serif Condensed" is known to fontdb as
/// "DejaVu Serif".
pub(crate) fn has_legacy_family(face: &Face, family: &str) -> bool {
    read_strings(face, name_id::FAMILY)
        .is_some_and(|names| names.values().any(|name| name == family))
}

/// Locale tag of a Windows language identifier
///
/// Unlisted identifiers yield `"und"` (undetermined).
pub(crate) fn lcid_tag(lcid: u16) -> &'static str {
    match lcid {
        0x0401 => "ar-SA",
        0x0402 => "bg-BG",
        0x0403 => "ca-ES",
        0x0404 => "zh-TW",
        0x0405 => "cs-CZ",
        0x0406 => "da-DK",
        0x0407 => "de-DE",
        0x0408 => "el-GR",
        0x0409 => "en-US",
        0x040A => "es-ES",
        0x040B => "fi-FI",
        0x040C => "fr-FR",
        0x040D => "he-IL",
        0x040E => "hu-HU",
        0x040F => "is-IS",
        0x0410 => "it-IT",
        0x0411 => "ja-JP",
        0x0412 => "ko-KR",
        0x0413 => "nl-NL",
        0x0414 => "nb-NO",
        0x0415 => "pl-PL",
        0x0416 => "pt-BR",
        0x0418 => "ro-RO",
        0x0419 => "ru-RU",
        0x041A => "hr-HR",
        0x041B => "sk-SK",
        0x041D => "sv-SE",
        0x041E => "th-TH",
        0x041F => "tr-TR",
        0x0421 => "id-ID",
        0x0422 => "uk-UA",
        0x0424 => "sl-SI",
        0x0425 => "et-EE",
        0x0426 => "lv-LV",
        0x0427 => "lt-LT",
        0x042A => "vi-VN",
        0x042D => "eu-ES",
        0x0439 => "hi-IN",
        0x0804 => "zh-CN",
        0x0807 => "de-CH",
        0x0809 => "en-GB",
        0x080A => "es-MX",
        0x080C => "fr-BE",
        0x0813 => "nl-BE",
        0x0816 => "pt-PT",
        0x0C04 => "zh-HK",
        0x0C07 => "de-AT",
        0x0C09 => "en-AU",
        0x0C0A => "es-ES",
        0x0C0C => "fr-CA",
        0x1004 => "zh-SG",
        0x1009 => "en-CA",
        0x100C => "fr-CH",
        0x1404 => "zh-MO",
        0x1409 => "en-NZ",
        0x1809 => "en-IE",
        _ => "und",
    }
}

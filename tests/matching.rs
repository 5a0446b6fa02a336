// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Enumeration and matching against an in-memory font service

mod common;

use common::{standard_fonts, Backing, Failure, MockFace, MockService};
use std::borrow::Borrow;
use std::path::PathBuf;
use system_fonts::fonts::{FontDescriptor, FontError, FontQuery, FontWeight, FontWidth};

fn names(fonts: impl IntoIterator<Item = impl Borrow<FontDescriptor>>) -> Vec<String> {
    fonts
        .into_iter()
        .map(|font| font.borrow().postscript_name.clone())
        .collect()
}

#[test]
fn available_fonts_in_order_and_unique() {
    let manager = MockService::new(standard_fonts()).manager();
    let fonts = manager.available_fonts().unwrap();
    assert_eq!(
        names(&fonts),
        [
            "ArialMT",
            "Arial-BoldMT",
            "Arial-ItalicMT",
            "ArialBold-Legacy",
            "CourierNewPSMT",
            "MS-Gothic"
        ]
    );

    // the first face with a duplicated name wins
    let bold = fonts.iter().find(|f| f.postscript_name == "Arial-BoldMT").unwrap();
    assert_eq!(bold.family, "Arial");
    assert_eq!(bold.style, "Bold");
    assert_eq!(bold.weight, FontWeight::BOLD);
    assert_eq!(bold.path, PathBuf::from("/fonts/Arial-BoldMT.ttf"));
}

#[test]
fn descriptor_fields() {
    let manager = MockService::new(standard_fonts()).manager();
    let fonts = manager.available_fonts().unwrap();

    let italic = &fonts.as_slice()[2];
    assert!(italic.italic);
    assert!(!italic.monospace);
    assert_eq!(italic.width, FontWidth::NORMAL);

    let courier = fonts.iter().find(|f| f.family == "Courier New").unwrap();
    assert!(courier.monospace);
}

#[test]
fn oblique_is_not_italic() {
    let service = MockService::new(vec![vec![
        MockFace::new("Sans-Oblique", "Sans", "Oblique").oblique(),
    ]]);
    let fonts = service.manager().available_fonts().unwrap();
    assert!(!fonts.first().unwrap().italic);
}

#[test]
fn unknown_monospace_is_false() {
    let service = MockService::new(vec![vec![
        MockFace::new("Old", "Old", "Regular").monospace(None),
    ]]);
    let fonts = service.manager().available_fonts().unwrap();
    assert!(!fonts.first().unwrap().monospace);
}

#[test]
fn missing_strings_are_empty() {
    let service = MockService::new(vec![vec![MockFace::new("NoStyle", "NoStyle", "").no_style()]]);
    let fonts = service.manager().available_fonts().unwrap();
    assert_eq!(fonts.first().unwrap().style, "");
}

#[test]
fn fonts_without_local_file_are_skipped() {
    let service = MockService::new(vec![vec![
        MockFace::new("Remote", "Web", "Regular").backing(Backing::Memory),
        MockFace::new("Synthetic", "Web", "Bold").backing(Backing::NoFiles),
        MockFace::new("Local", "Web", "Italic"),
    ]]);
    let fonts = service.manager().available_fonts().unwrap();
    assert_eq!(names(&fonts), ["Local"]);
}

#[test]
fn localized_family_names() {
    let face = MockFace::new("Meiryo", "Meiryo", "Regular").family_names(&[
        ("ja-JP", "メイリオ"),
        ("en-US", "Meiryo"),
    ]);

    let service = MockService::new(vec![vec![face.clone()]]).locale(Some("ja-JP"));
    let fonts = service.manager().available_fonts().unwrap();
    assert_eq!(fonts.first().unwrap().family, "メイリオ");

    let service = MockService::new(vec![vec![face.clone()]]).locale(Some("fr-FR"));
    let fonts = service.manager().available_fonts().unwrap();
    assert_eq!(fonts.first().unwrap().family, "Meiryo");

    let service = MockService::new(vec![vec![face]]).locale(None);
    let fonts = service.manager().available_fonts().unwrap();
    assert_eq!(fonts.first().unwrap().family, "Meiryo");
}

#[test]
fn wildcard_query_is_identity() {
    let upright: Vec<Vec<MockFace>> = standard_fonts()
        .into_iter()
        .map(|family| {
            family
                .into_iter()
                .filter(|face| !face.slant.is_italic() && face.monospace != Some(true))
                .collect()
        })
        .collect();
    let manager = MockService::new(upright).manager();

    let all = manager.available_fonts().unwrap();
    let found = manager.find_fonts(&FontQuery::new()).unwrap();
    assert!(!all.is_empty());
    assert_eq!(found, all);
}

#[test]
fn exact_field_filtering() {
    let manager = MockService::new(standard_fonts()).manager();
    let query = FontQuery::new().with_family("Arial").with_italic(false);
    let found = manager.find_fonts(&query).unwrap();
    assert_eq!(names(&found), ["ArialMT", "Arial-BoldMT"]);
    assert!(found.iter().all(|font| font.family == "Arial" && !font.italic));

    let query = FontQuery::new().with_family("Arial Bold");
    assert_eq!(names(manager.find_fonts(&query).unwrap()), ["ArialBold-Legacy"]);

    let query = FontQuery::new().with_monospace(true);
    assert_eq!(names(manager.find_fonts(&query).unwrap()), ["CourierNewPSMT"]);

    let query = FontQuery::new().with_family("Arial").with_weight(FontWeight::BLACK);
    assert!(manager.find_fonts(&query).unwrap().is_empty());
}

#[test]
fn find_font_exact() {
    let manager = MockService::new(standard_fonts()).manager();
    let query = FontQuery::new().with_postscript_name("Arial-ItalicMT").with_italic(true);
    let font = manager.find_font(&query).unwrap().unwrap();
    assert_eq!(font.postscript_name, "Arial-ItalicMT");
}

#[test]
fn find_font_falls_back_to_traits() {
    let manager = MockService::new(standard_fonts()).manager();
    let query = FontQuery::new()
        .with_postscript_name("Helvetica-Bold")
        .with_weight(FontWeight::BOLD)
        .with_monospace(true);
    let font = manager.find_font(&query).unwrap().unwrap();
    assert_eq!(font.postscript_name, "Arial-BoldMT");
    assert_eq!(font.weight, FontWeight::BOLD);
}

#[test]
fn find_font_falls_back_to_any() {
    let manager = MockService::new(standard_fonts()).manager();
    let query = FontQuery::new()
        .with_postscript_name("Nothing")
        .with_weight(FontWeight(999));
    let font = manager.find_font(&query).unwrap().unwrap();
    assert_eq!(font.postscript_name, "ArialMT");
}

#[test]
fn find_font_with_no_fonts() {
    let manager = MockService::new(vec![]).manager();
    assert_eq!(manager.find_font(&FontQuery::new()).unwrap(), None);
    assert!(manager.available_fonts().unwrap().is_empty());
}

#[test]
fn fresh_collection_per_call() {
    let manager = MockService::new(standard_fonts()).manager();
    manager.available_fonts().unwrap();
    manager.find_fonts(&FontQuery::new()).unwrap();
    manager.find_font(&FontQuery::new()).unwrap();
    assert_eq!(manager.service().collections.get(), 3);
}

#[test]
fn platform_failures_abort() {
    for failure in [Failure::Collection, Failure::Files, Failure::Strings] {
        let manager = MockService::new(standard_fonts()).failing(failure).manager();
        let err = manager.available_fonts().unwrap_err();
        assert!(matches!(err, FontError::Platform { .. }));
        assert!(err.to_string().starts_with("font loading error"));
        assert!(manager.find_font(&FontQuery::new()).is_err());
    }
}

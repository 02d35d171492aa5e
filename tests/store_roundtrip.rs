// tests/store_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use casper_scrape::model::{Cell, TableRow};
use casper_scrape::runner::build_dataset;
use casper_scrape::store::{self, SourceTables};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("casper_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn loads_tables_and_writes_four_files() {
    let dir = tmp_dir("e2e");
    let input = dir.join("tables.json");
    fs::write(&input, r#"{
        "options": { "character_header_rows": 0, "appearance_header_rows": 0 },
        "characters": [
            { "header": "Casper", "cells": [
                { "text": "Casper Christensen", "links": ["Casper Christensen"] },
                { "text": "1" },
                { "text": "1, 4-5 (ikke 5)" },
                { "text": "Vært" }
            ] }
        ]
    }"#).unwrap();

    let tables = store::load_tables(&input).unwrap();
    let ds = build_dataset(&tables, None).unwrap();

    let out = dir.join("out");
    let written = store::write_dataset(&out, &ds).unwrap();
    let names: Vec<_> = written.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
    assert_eq!(names, vec!["characters.json", "actors.json", "episodes.json", "appearances.json"]);

    let chars = fs::read_to_string(out.join("characters.json")).unwrap();
    assert!(chars.contains(r#""character_name": "Casper""#));

    let eps: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("episodes.json")).unwrap()).unwrap();
    assert_eq!(eps.as_array().unwrap().len(), 67);
    assert_eq!(eps[48]["episode_id"], 49);
    assert_eq!(eps[48]["season"], 2);
    assert_eq!(eps[48]["episode"], 1);

    let apps: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("appearances.json")).unwrap()).unwrap();
    let apps = apps.as_array().unwrap();
    assert_eq!(apps.len(), 3);
    assert!(apps[0].get("annotation").is_none());
    assert_eq!(apps[2]["annotation"], "(ikke 5)");
}

#[test]
fn unreadable_input_is_an_error() {
    let dir = tmp_dir("bad_input");
    let input = dir.join("tables.json");
    fs::write(&input, "{ not json").unwrap();
    assert!(matches!(store::load_tables(&input), Err(casper_scrape::Error::Json(_))));
    assert!(matches!(store::load_tables(&dir.join("missing.json")), Err(casper_scrape::Error::Io(_))));
}

#[test]
fn write_refuses_file_in_place_of_dir() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("out");
    fs::write(&blocker, "x").unwrap();
    let mut tables = SourceTables {
        characters: vec![TableRow::new("A", vec![Cell::text("x"), Cell::text("x"), Cell::text("1")])],
        ..Default::default()
    };
    tables.options.character_header_rows = 0;
    tables.options.appearance_header_rows = 0;
    let ds = build_dataset(&tables, None).unwrap();
    assert!(store::write_dataset(&blocker, &ds).is_err());
}

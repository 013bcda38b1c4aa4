/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use indexmap::IndexMap;
use std::path::PathBuf;
use surname_processor::io::{load_options, load_people};
use surname_processor::{NameFormatter, Person, ProcessorError};

#[test]
fn test_format_people_fixture() {
    let people = load_people(&fixture("people.yaml")).unwrap();
    let formatted = NameFormatter::new().format_people(&people);

    let rows: Vec<(&str, Option<&str>, Option<&str>)> = formatted
        .iter()
        .map(|(id, f)| (id.as_str(), f.prefix.as_deref(), f.last_name.as_deref()))
        .collect();

    assert_eq!(
        rows,
        [
            ("jansen", Some("de"), Some("Jansen")),
            ("berg", None, Some("Jansen - van der Berg")),
            ("visser", Some("de"), Some("Bakker")),
            ("bakker", None, Some("Bakker - van Dekker")),
            ("dekker", Some("van"), Some("Dekker")),
        ]
    );
}

#[test]
fn test_format_people_with_loaded_options() {
    let people = load_people(&fixture("people.yaml")).unwrap();
    let options = load_options(&fixture("options.yaml")).unwrap();
    let formatter = NameFormatter::with_options(options);

    let berg = formatter.format_person(&people, "berg").unwrap();
    assert_eq!(berg.last_name.as_deref(), Some("Jansen-van der Berg"));
}

#[test]
fn test_format_person_unknown_id() {
    let people = load_people(&fixture("people.json")).unwrap();
    let err = NameFormatter::new().format_person(&people, "nobody").unwrap_err();
    assert!(matches!(err, ProcessorError::PersonNotFound(ref id) if id == "nobody"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_people(&fixture("does-not-exist.yaml")).unwrap_err();
    assert!(matches!(err, ProcessorError::Io(_)));
}

/// Writes `bytes` to a uniquely named file in the system temp directory.
fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("surname-{}-{}", std::process::id(), name));
    std::fs::write(&path, bytes).unwrap();
    path
}

fn couple() -> Vec<Person> {
    let mut jansen = Person::new(jansen_berg(Some("BP")));
    jansen.id = Some("jansen".to_string());
    let berg = Person::new(jansen_berg(Some("PB")));
    vec![jansen, berg]
}

#[test]
fn test_load_cbor_list() {
    let path = write_temp("list.cbor", &serde_cbor::to_vec(&couple()).unwrap());
    let people = load_people(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let ids: Vec<&str> = people.keys().map(String::as_str).collect();
    assert_eq!(ids, ["jansen", "2"]);
    let formatted = NameFormatter::new().format_person(&people, "2").unwrap();
    assert_eq!(formatted.last_name.as_deref(), Some("Berg - de Jansen"));
}

#[test]
fn test_load_cbor_map() {
    let map: IndexMap<String, Person> = couple()
        .into_iter()
        .zip(["first", "second"])
        .map(|(mut person, key)| {
            person.id = None;
            (key.to_string(), person)
        })
        .collect();
    let path = write_temp("map.cbor", &serde_cbor::to_vec(&map).unwrap());
    let people = load_people(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let ids: Vec<&str> = people.keys().map(String::as_str).collect();
    assert_eq!(ids, ["first", "second"]);
    assert_eq!(people["first"].id.as_deref(), Some("first"));
    let formatted = NameFormatter::new().format_person(&people, "first").unwrap();
    assert_eq!(formatted.last_name.as_deref(), Some("Jansen - van der Berg"));
}

#[test]
fn test_load_malformed_cbor() {
    let path = write_temp("malformed.cbor", &[0xff, 0x00, 0x13]);
    let err = load_people(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ProcessorError::ParseError(ref format, _) if format == "CBOR"));
}

#[test]
fn test_load_yaml_list() {
    let people = load_people(&fixture("people-list.yaml")).unwrap();
    let ids: Vec<&str> = people.keys().map(String::as_str).collect();
    assert_eq!(ids, ["1", "berg", "3"]);

    let formatted = NameFormatter::new().format_people(&people);
    assert_eq!(formatted["berg"].last_name.as_deref(), Some("Jansen - van der Berg"));
    assert_eq!(formatted["3"].last_name.as_deref(), Some("Smit"));
}

#[test]
fn test_load_yaml_single_person() {
    let people = load_people(&fixture("person.yaml")).unwrap();
    assert_eq!(people.len(), 1);

    let formatted = NameFormatter::new().format_person(&people, "visser").unwrap();
    assert_eq!(formatted.prefix.as_deref(), Some("de"));
    assert_eq!(formatted.last_name.as_deref(), Some("Bakker - Visser"));
}

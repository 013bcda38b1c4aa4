/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fmt::Display;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use surname_core::{FormatOptions, Person};
use tracing::warn;

use crate::{People, ProcessorError};

/// Keys map entries by their map key, filling in a missing `Id`.
fn collect_map(map: IndexMap<String, Person>) -> People {
    map.into_iter()
        .map(|(key, mut person)| {
            if person.id.is_none() {
                person.id = Some(key.clone());
            }
            (key, person)
        })
        .collect()
}

/// Keys list entries by their `Id`, or by 1-based position when it is unset.
fn collect_list(list: Vec<Person>) -> People {
    let mut people = People::new();
    for (index, mut person) in list.into_iter().enumerate() {
        let id = person
            .id
            .get_or_insert_with(|| (index + 1).to_string())
            .clone();
        if people.contains_key(&id) {
            warn!(id = %id, "duplicate person id, replacing the earlier entry");
        }
        people.insert(id, person);
    }
    people
}

/// Tries a map of id to person, then a list, then a single person. When no
/// shape fits, the error of the last attempt is reported.
fn parse_shapes<E: Display>(
    format: &str,
    as_map: impl FnOnce() -> Result<IndexMap<String, Person>, E>,
    as_list: impl FnOnce() -> Result<Vec<Person>, E>,
    as_single: impl FnOnce() -> Result<Person, E>,
) -> Result<People, ProcessorError> {
    if let Ok(map) = as_map() {
        return Ok(collect_map(map));
    }
    if let Ok(list) = as_list() {
        return Ok(collect_list(list));
    }
    match as_single() {
        Ok(person) => Ok(collect_list(vec![person])),
        Err(e) => Err(ProcessorError::ParseError(format.to_string(), e.to_string())),
    }
}

/// Load people from a file given its path.
/// Supports YAML, JSON and CBOR: a map of id to person, a list of persons,
/// or a single person.
pub fn load_people(path: &Path) -> Result<People, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "cbor" => {
            // Check for syntax errors first
            let _: serde_cbor::Value = serde_cbor::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("CBOR".to_string(), e.to_string()))?;
            parse_shapes(
                "CBOR",
                || serde_cbor::from_slice(&bytes),
                || serde_cbor::from_slice(&bytes),
                || serde_cbor::from_slice(&bytes),
            )
        }
        "json" => {
            // Check for syntax errors first
            let value: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
            parse_shapes(
                "JSON",
                || serde_json::from_value(value.clone()),
                || serde_json::from_value(value.clone()),
                || serde_json::from_value(value.clone()),
            )
        }
        _ => {
            let content = std::str::from_utf8(&bytes)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
            // Check for syntax errors first
            let value: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
            parse_shapes(
                "YAML",
                || serde_yaml::from_value(value.clone()),
                || serde_yaml::from_value(value.clone()),
                || serde_yaml::from_value(value.clone()),
            )
        }
    }
}

/// Load formatting options from a YAML or JSON file.
pub fn load_options(path: &Path) -> Result<FormatOptions, ProcessorError> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => serde_yaml::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures")
            .join(name)
    }

    #[test]
    fn load_people_keeps_map_order() {
        let people = load_people(&fixture("people.yaml")).expect("people fixture should parse");
        let ids: Vec<&str> = people.keys().map(String::as_str).collect();
        assert_eq!(ids, ["jansen", "berg", "visser", "bakker", "dekker"]);
        assert_eq!(people["berg"].id.as_deref(), Some("berg"));
    }

    #[test]
    fn load_people_keys_list_by_id_or_position() {
        let people = load_people(&fixture("people.json")).expect("people fixture should parse");
        let ids: Vec<&str> = people.keys().map(String::as_str).collect();
        assert_eq!(ids, ["p-1", "2"]);
    }

    #[test]
    fn collect_list_replaces_duplicate_ids() {
        let mut first = Person::new(surname_core::PersonName::new("Jansen"));
        first.id = Some("a".to_string());
        let mut second = Person::new(surname_core::PersonName::new("Berg"));
        second.id = Some("a".to_string());

        let people = collect_list(vec![first, second]);
        assert_eq!(people.len(), 1);
        assert_eq!(people["a"].name.family_name.as_deref(), Some("Berg"));
    }

    #[test]
    fn load_people_reports_syntax_errors() {
        let err = load_people(&fixture("malformed.json")).unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(ref format, _) if format == "JSON"));
    }

    #[test]
    fn load_people_rejects_invalid_utf8_yaml() {
        let err = load_people(&fixture("invalid-utf8.yaml")).unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(ref format, _) if format == "YAML"));
    }

    #[test]
    fn load_people_reports_field_errors_of_last_shape() {
        let err = load_people(&fixture("wrong-field-type.json")).unwrap_err();
        let ProcessorError::ParseError(format, message) = err else {
            panic!("expected a parse error");
        };
        assert_eq!(format, "JSON");
        assert!(!message.contains("untagged"), "message: {}", message);
        assert!(message.contains("invalid type"), "message: {}", message);
    }

    #[test]
    fn load_options_reads_delimiter() {
        let options = load_options(&fixture("options.yaml")).expect("options fixture should parse");
        assert_eq!(options.partner_delimiter(), "-");
    }
}

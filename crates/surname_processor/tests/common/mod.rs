/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use surname_processor::PersonName;

// --- Helper Functions for Test Data Construction ---

/// Path to a file under the workspace `tests/fixtures` directory.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// A name with both own and partner family names set.
pub fn make_name(
    family: &str,
    prefix: Option<&str>,
    partner: &str,
    partner_prefix: Option<&str>,
    convention: Option<&str>,
) -> PersonName {
    PersonName {
        family_name: Some(family.to_string()),
        family_name_prefix: prefix.map(str::to_string),
        family_name_partner: Some(partner.to_string()),
        family_name_partner_prefix: partner_prefix.map(str::to_string),
        convention: convention.map(Into::into),
    }
}

/// The `Jansen` / `van der Berg` couple used throughout the tests.
pub fn jansen_berg(convention: Option<&str>) -> PersonName {
    make_name("Jansen", Some("de"), "Berg", Some("van der"), convention)
}

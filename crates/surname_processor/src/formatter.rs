/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Last name and prefix derivation.

use indexmap::IndexMap;
use surname_core::{Convention, FormatOptions, FormattedName, PersonName};
use tracing::debug;

use crate::{People, ProcessorError};

/// Unset conventions format like `B`.
static DEFAULT_CONVENTION: Convention = Convention::Own;

/// Formats names according to their naming convention.
#[derive(Debug, Clone, Default)]
pub struct NameFormatter {
    options: FormatOptions,
}

impl NameFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// The family-name prefix to display.
    ///
    /// Partner-led conventions (`P`, `PB`) take the partner's prefix, all
    /// others the own prefix. An unset prefix stays unset.
    pub fn prefix(&self, name: &PersonName) -> Option<String> {
        self.prefix_for(name, effective_convention(name))
    }

    /// The last name to display.
    ///
    /// Combined conventions join both family names with the partner
    /// delimiter, inserting the linking prefix of the second name when it is
    /// non-empty. Missing parts become empty segments, so a combined last
    /// name is always present.
    pub fn last_name(&self, name: &PersonName) -> Option<String> {
        self.last_name_for(name, effective_convention(name))
    }

    pub fn format(&self, name: &PersonName) -> FormattedName {
        let convention = effective_convention(name);
        FormattedName {
            prefix: self.prefix_for(name, convention),
            last_name: self.last_name_for(name, convention),
        }
    }

    fn prefix_for(&self, name: &PersonName, convention: &Convention) -> Option<String> {
        let selected = if convention.partner_first() {
            &name.family_name_partner_prefix
        } else {
            &name.family_name_prefix
        };
        trim_non_empty(selected.clone())
    }

    fn last_name_for(&self, name: &PersonName, convention: &Convention) -> Option<String> {
        let formatted = match convention {
            Convention::Partner => name.family_name_partner.clone(),
            Convention::OwnPartner => Some(self.combine(
                name.family_name.as_deref(),
                name.family_name_partner_prefix.as_deref(),
                name.family_name_partner.as_deref(),
            )),
            Convention::PartnerOwn => Some(self.combine(
                name.family_name_partner.as_deref(),
                name.family_name_prefix.as_deref(),
                name.family_name.as_deref(),
            )),
            Convention::Own | Convention::Other(_) => name.family_name.clone(),
        };
        trim_non_empty(formatted)
    }

    /// Formats every person, keeping input order.
    pub fn format_people(&self, people: &People) -> IndexMap<String, FormattedName> {
        people
            .iter()
            .map(|(id, person)| (id.clone(), self.format(&person.name)))
            .collect()
    }

    /// Formats the person stored under `id`.
    pub fn format_person(&self, people: &People, id: &str) -> Result<FormattedName, ProcessorError> {
        people
            .get(id)
            .map(|person| self.format(&person.name))
            .ok_or_else(|| ProcessorError::PersonNotFound(id.to_string()))
    }

    fn combine(&self, first: Option<&str>, linking_prefix: Option<&str>, second: Option<&str>) -> String {
        let mut combined = first.unwrap_or_default().to_string();
        combined.push_str(self.options.partner_delimiter());
        if let Some(prefix) = linking_prefix.filter(|p| !p.is_empty()) {
            combined.push_str(prefix);
            combined.push(' ');
        }
        combined.push_str(second.unwrap_or_default());
        combined
    }
}

/// The prefix of `name` with default options.
pub fn prefix(name: &PersonName) -> Option<String> {
    NameFormatter::new().prefix(name)
}

/// The last name of `name` with default options.
pub fn last_name(name: &PersonName) -> Option<String> {
    NameFormatter::new().last_name(name)
}

fn effective_convention(name: &PersonName) -> &Convention {
    match &name.convention {
        Some(convention) if convention.is_recognized() => convention,
        Some(other) => {
            debug!(code = %other, "unrecognized naming convention, using own family name");
            &DEFAULT_CONVENTION
        }
        None => &DEFAULT_CONVENTION,
    }
}

/// Whitespace as host records define it: Unicode spaces and line
/// terminators plus the byte-order mark, but not NEL (U+0085).
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Trims surrounding whitespace from a non-empty value; empty and unset
/// values pass through as they are.
fn trim_non_empty(value: Option<String>) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s.trim_matches(is_trimmable).to_string()),
        other => other,
    }
}

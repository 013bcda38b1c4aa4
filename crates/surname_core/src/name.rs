/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::convention::Convention;

/// The name components of a person, as recorded by the host system.
///
/// All fields are optional; formatting treats a missing field as an empty
/// segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "PascalCase")]
pub struct PersonName {
    /// Own family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Linking prefix of the own family name (e.g. "van", "de").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name_prefix: Option<String>,
    /// Partner's family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name_partner: Option<String>,
    /// Linking prefix of the partner's family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name_partner_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convention: Option<Convention>,
}

impl PersonName {
    /// A name with only the own family name set.
    pub fn new(family_name: &str) -> Self {
        Self {
            family_name: Some(family_name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.family_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn with_partner(mut self, partner: &str, partner_prefix: Option<&str>) -> Self {
        self.family_name_partner = Some(partner.to_string());
        self.family_name_partner_prefix = partner_prefix.map(str::to_string);
        self
    }

    pub fn with_convention(mut self, convention: impl Into<Convention>) -> Self {
        self.convention = Some(convention.into());
        self
    }
}

/// The host envelope around a name: `{ "Name": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: PersonName,
}

impl Person {
    pub fn new(name: PersonName) -> Self {
        Self { id: None, name }
    }
}

/// The derived display values for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FormattedName {
    pub prefix: Option<String>,
    pub last_name: Option<String>,
}

/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Formatting options.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placed between the two family names of a combined convention.
pub const DEFAULT_PARTNER_DELIMITER: &str = " - ";

/// Options controlling how combined last names are built.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FormatOptions {
    /// Delimiter between own and partner family names (`BP`, `PB`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_delimiter: Option<String>,
}

impl FormatOptions {
    pub fn partner_delimiter(&self) -> &str {
        self.partner_delimiter
            .as_deref()
            .unwrap_or(DEFAULT_PARTNER_DELIMITER)
    }
}

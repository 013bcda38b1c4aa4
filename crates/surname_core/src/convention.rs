/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Naming convention selecting which family names form the displayed last name.
///
/// Every code parses: codes outside the four known ones are kept verbatim in
/// [`Convention::Other`] and are formatted like [`Convention::Own`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Convention {
    /// `B`: own family name only.
    Own,
    /// `BP`: own family name, then the partner's.
    OwnPartner,
    /// `P`: partner's family name only.
    Partner,
    /// `PB`: partner's family name, then the own one.
    PartnerOwn,
    /// Any unrecognized code.
    Other(String),
}

impl Convention {
    /// Returns the code this convention is recorded under.
    pub fn as_str(&self) -> &str {
        match self {
            Convention::Own => "B",
            Convention::OwnPartner => "BP",
            Convention::Partner => "P",
            Convention::PartnerOwn => "PB",
            Convention::Other(code) => code,
        }
    }

    /// Whether the partner's name leads (`P` and `PB`).
    pub fn partner_first(&self) -> bool {
        matches!(self, Convention::Partner | Convention::PartnerOwn)
    }

    /// Whether this is one of the four known codes.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Convention::Other(_))
    }
}

impl From<&str> for Convention {
    fn from(code: &str) -> Self {
        match code {
            "B" => Convention::Own,
            "BP" => Convention::OwnPartner,
            "P" => Convention::Partner,
            "PB" => Convention::PartnerOwn,
            other => Convention::Other(other.to_string()),
        }
    }
}

impl From<String> for Convention {
    fn from(code: String) -> Self {
        match Convention::from(code.as_str()) {
            Convention::Other(_) => Convention::Other(code),
            known => known,
        }
    }
}

impl From<Convention> for String {
    fn from(convention: Convention) -> Self {
        match convention {
            Convention::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Convention {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Convention::from(s))
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Convention {
    fn schema_name() -> String {
        "Convention".to_string()
    }

    fn json_schema(generator: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Data model for surname formatting.
//!
//! A [`PersonName`] carries the name components a host system records for a
//! person: their own family name, their partner's family name, the linking
//! prefixes ("van", "de la") for each, and a [`Convention`] code choosing
//! which of these make up the displayed last name.
//!
//! Field names follow the host record layout (`FamilyName`,
//! `FamilyNamePartnerPrefix`, ...), so a record can be read directly:
//!
//! ```rust
//! use surname_core::{Convention, Person};
//!
//! let json = r#"{
//!     "Name": {
//!         "FamilyName": "Jansen",
//!         "FamilyNamePartnerPrefix": "van der",
//!         "FamilyNamePartner": "Berg",
//!         "Convention": "BP"
//!     }
//! }"#;
//! let person: Person = serde_json::from_str(json).unwrap();
//! assert_eq!(person.name.convention, Some(Convention::OwnPartner));
//! ```

pub mod convention;
pub mod name;
pub mod options;

pub use convention::Convention;
pub use name::{FormattedName, Person, PersonName};
pub use options::{FormatOptions, DEFAULT_PARTNER_DELIMITER};

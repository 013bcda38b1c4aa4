/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Surname processor
//!
//! Derives the displayed last name and family-name prefix of a person from
//! their recorded name components and naming convention. The convention
//! selects the own family name (`B`), the partner's (`P`), or both in either
//! order (`BP`, `PB`), each optionally preceded by its linking prefix.
//!
//! # Example
//!
//! ```rust
//! use surname_processor::{NameFormatter, PersonName};
//!
//! let name = PersonName::new("Jansen")
//!     .with_partner("Berg", Some("van der"))
//!     .with_convention("BP");
//!
//! let formatter = NameFormatter::new();
//! assert_eq!(formatter.last_name(&name).as_deref(), Some("Jansen - van der Berg"));
//! assert_eq!(formatter.prefix(&name), None);
//! ```

pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod formatter;
pub mod io;

pub use error::ProcessorError;
pub use formatter::{last_name, prefix, NameFormatter};

pub use surname_core::{Convention, FormatOptions, FormattedName, Person, PersonName};

/// People keyed by id, in input order.
pub type People = indexmap::IndexMap<String, Person>;

/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed; carries the format name and parser message.
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),
}

/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(unsafe_code)]

//! C-FFI for the surname processor.
//!
//! Lets host environments that keep person records as JSON (scripting
//! engines, mapping tools) derive display names without linking Rust.

use crate::formatter::NameFormatter;
use serde::Deserialize;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use surname_core::{FormatOptions, Person, PersonName};

/// Either the host envelope `{ "Name": { ... } }` or a bare name.
#[derive(Deserialize)]
#[serde(untagged)]
enum NameInput {
    Person(Person),
    Name(PersonName),
}

impl NameInput {
    fn into_name(self) -> PersonName {
        match self {
            NameInput::Person(person) => person.name,
            NameInput::Name(name) => name,
        }
    }
}

/// Helper to safely create a C string from a Rust string, returning null if it contains null bytes.
fn safe_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Format a person given as JSON, returning `{"prefix": .., "last-name": ..}`.
///
/// `options_json` may be null to use the default options.
///
/// # Safety
/// `person_json` must be a valid null-terminated C string, and
/// `options_json` either null or a valid null-terminated C string. The
/// returned pointer must be freed with `surname_string_free`. Returns null on
/// invalid input.
#[no_mangle]
pub unsafe extern "C" fn surname_format(
    person_json: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    let Some(person_str) = (unsafe { read_str(person_json) }) else {
        return ptr::null_mut();
    };

    let name = match serde_json::from_str::<NameInput>(person_str) {
        Ok(input) => input.into_name(),
        Err(_) => return ptr::null_mut(),
    };

    let options = if options_json.is_null() {
        FormatOptions::default()
    } else {
        let Some(options_str) = (unsafe { read_str(options_json) }) else {
            return ptr::null_mut();
        };
        match serde_json::from_str::<FormatOptions>(options_str) {
            Ok(o) => o,
            Err(_) => return ptr::null_mut(),
        }
    };

    let formatted = NameFormatter::with_options(options).format(&name);
    match serde_json::to_string(&formatted) {
        Ok(json) => safe_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by `surname_format`.
///
/// # Safety
/// `s` must be a pointer returned by this library, or null.
#[no_mangle]
pub unsafe extern "C" fn surname_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

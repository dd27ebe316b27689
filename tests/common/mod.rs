//! Common test utilities and helpers.
//!
//! - Reading generated PDFs back (text, page count, size)
//! - Parsing the CLI status lines
//! - Custom assertions

#![allow(dead_code)]

pub mod assertions;
pub mod pdf_helpers;

pub use assertions::*;
pub use pdf_helpers::*;

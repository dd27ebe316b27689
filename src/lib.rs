//! Generator for the sample will PDF used as an integration test fixture.
//!
//! The document is fixed: a title, an introductory sentence, two beneficiary
//! records, a totals declaration and a signature block, typeset on a US
//! letter page with the built-in Helvetica faces.
//!
//! # Architecture
//!
//! - [`content`]: content blocks, styles and the fixed will text
//! - [`layout`]: font metrics, word wrapping and pagination
//! - [`render`]: PDF backends behind the [`DocumentRenderer`] trait
//! - [`generator`]: the service tying the pipeline together
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use sample_will::WillGenerator;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = WillGenerator::with_printpdf().generate(Path::new("sample_will.pdf"))?;
//! println!("{} bytes", report.bytes);
//! # Ok(())
//! # }
//! ```
//!
//! The story can be inspected without rendering anything:
//!
//! ```
//! use sample_will::sample_will_story;
//!
//! let story = sample_will_story();
//! assert!(story.texts().any(|t| t == "Witness: Jane Smith"));
//! ```

pub mod content;
pub mod error;
pub mod generator;
pub mod layout;
pub mod render;

pub use content::{sample_will_story, Block, Story, StyleKind, StyleSheet};
pub use error::{WillError, WillResult};
pub use generator::{create_sample_pdf, GenerationReport, WillGenerator, DEFAULT_OUTPUT};
pub use layout::PageSetup;
pub use render::{DocumentRenderer, PrintPdfRenderer};

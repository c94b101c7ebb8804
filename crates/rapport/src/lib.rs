//! French internship report (rapport de stage) generator.
//!
//! Takes a JSON description of a report — student, company, internship
//! dates, chapter outline, typography and inclusion flags — and produces a
//! complete DOCX skeleton: one of twelve cover models, an estimated table
//! of contents, acknowledgments, abstract, numbered chapters with writing
//! prompts, and annexes, with logo headers and page-number footers on every
//! page after the cover. Missing data degrades to bracketed placeholders;
//! the output is deterministic for equal input.
//!
//! ```no_run
//! let data: rapport::ReportData = serde_json::from_str(r#"{"prenom": "Alice"}"#)?;
//! let bytes = rapport::generate_report(&data)?;
//! std::fs::write("rapport.docx", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cover;
pub mod error;
pub mod furniture;
pub mod generator;
pub mod model;
pub mod sections;
pub mod styles;
pub mod support;

pub use cover::CoverKind;
pub use error::Error;
pub use generator::{build_docx, generate_report};
pub use model::ReportData;

/// The result type of this crate.
pub type Result<T, Err = Error> = std::result::Result<T, Err>;

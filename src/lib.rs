//! # PDF Scribe
//!
//! Minimal PDF writer: builds a single-page document from a small object
//! graph and serializes it to a byte-exact file with a cross-reference table
//! that readers can use for random access.
//!
//! ## Core Features
//!
//! - **Object graph**: Catalog, page tree, page, content stream, resources and
//!   fonts, owned as a tree
//! - **Forward references**: object numbers are reserved before the parent
//!   body is built, children are written after their parent
//! - **Exact offsets**: every cross-reference entry is checked against the
//!   written bytes before the document is returned
//! - **Deterministic**: identical input gives identical output
//!
//! ## Quick Start
//!
//! ```
//! use pdf_scribe::writer::{Catalog, Contents, Font, Page, Pages, PdfWriter, Resources};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let font = Font::new("Type0", "F1", "TimesNewRoman", "UniJIS-UCS2-H")?;
//! let page = Page::new(
//!     Contents::new("BT /F1 24 Tf 100 100 Td (Hello, World!) Tj ET"),
//!     Resources::new(vec![font]),
//! );
//! let pdf = PdfWriter::new().build(&Catalog::new(Pages::new(vec![page])))?;
//! assert_eq!(pdf.object_count(), 6);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// PDF object model
pub mod object;

// PDF writing
pub mod writer;

// Re-exports
pub use error::{Error, Result};
pub use object::{Object, ObjectRef};
pub use writer::{PdfWriter, PdfWriterConfig, WrittenPdf};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

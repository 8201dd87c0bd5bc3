//! PDF writing module for generating PDF files.
//!
//! ## Architecture
//!
//! ```text
//! Catalog ─ Pages ─ Page ─┬─ Contents
//!     │                   └─ Resources ─ Font…
//!     └─ Outlines
//!     ↓
//! [Reserved] (object number assigned before the parent body is built)
//!     ↓
//! [PdfWriter] (depth-first emission, offset ledger, xref, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```
//! use pdf_scribe::writer::{Catalog, Contents, Font, Page, Pages, PdfWriter, Resources};
//!
//! # fn main() -> pdf_scribe::Result<()> {
//! let font = Font::new("Type1", "F1", "Helvetica", "WinAnsiEncoding")?;
//! let page = Page::new(
//!     Contents::new("BT /F1 24 Tf 100 100 Td (Hello, World!) Tj ET"),
//!     Resources::new(vec![font]),
//! );
//! let catalog = Catalog::new(Pages::new(vec![page]));
//!
//! let bytes = PdfWriter::new().write(&catalog)?;
//! assert!(bytes.starts_with(b"%PDF-1.3"));
//! # Ok(())
//! # }
//! ```

mod content_stream;
mod id_allocator;
mod node;
mod object_serializer;
mod page_tree;
mod pdf_writer;
mod resources;
mod xref_ledger;

pub use content_stream::Contents;
pub use id_allocator::ObjectIdAllocator;
pub use node::{Node, Rendered, Reserved, Slot};
pub use object_serializer::ObjectSerializer;
pub use page_tree::{Catalog, MediaBox, Outlines, Page, Pages, ResourcesPlacement};
pub use pdf_writer::{PdfWriter, PdfWriterConfig, WrittenPdf, DEFAULT_PDF_VERSION};
pub use resources::{Font, Resources};
pub use xref_ledger::{OffsetLedger, XrefEntry, XREF_ENTRY_LEN};

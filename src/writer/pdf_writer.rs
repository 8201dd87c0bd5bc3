//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.
//!
//! Objects are written depth-first starting at the catalog: each object is
//! rendered, written, and then followed by its children. The output buffer
//! length is the byte cursor, so every recorded offset is the true position
//! of the object in the finished file.

use super::id_allocator::ObjectIdAllocator;
use super::node::{Rendered, Reserved};
use super::object_serializer::ObjectSerializer;
use super::page_tree::Catalog;
use super::xref_ledger::{OffsetLedger, XrefEntry};
use crate::error::{Error, Result};
use crate::object::ObjectRef;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Header version written when none is configured.
pub const DEFAULT_PDF_VERSION: &str = "1.3";

/// Configuration for PDF generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.3")
    pub version: String,
    /// Write dictionaries on a single line
    pub compact: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_PDF_VERSION.to_string(),
            compact: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set the header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Enable or disable compact dictionaries.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.header_line()?;
        Ok(config)
    }

    /// The `%PDF-x.y` header line (without newline).
    pub fn header_line(&self) -> Result<String> {
        let bytes = self.version.as_bytes();
        let well_formed = bytes.len() == 3
            && bytes[0].is_ascii_digit()
            && bytes[1] == b'.'
            && bytes[2].is_ascii_digit();
        if !well_formed {
            return Err(Error::InvalidHeader(self.version.clone()));
        }
        Ok(format!("%PDF-{}", self.version))
    }

    fn serializer(&self) -> ObjectSerializer {
        if self.compact {
            ObjectSerializer::compact()
        } else {
            ObjectSerializer::new()
        }
    }
}

/// A finished document together with its cross-reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPdf {
    /// Complete file contents
    pub bytes: Vec<u8>,
    /// Reference to the catalog (`/Root`)
    pub root: ObjectRef,
    /// Cross-reference entries ordered by object number
    pub xref: Vec<XrefEntry>,
    /// Byte offset of the `xref` keyword
    pub startxref: usize,
}

impl WrittenPdf {
    /// Number of indirect objects in the file.
    pub fn object_count(&self) -> usize {
        self.xref.len()
    }

    /// `/Size` written in the trailer.
    pub fn xref_size(&self) -> usize {
        self.xref.len() + 1
    }

    /// Take the file contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// State of a single build: object numbers, offsets and output so far.
struct BuildContext {
    ids: ObjectIdAllocator,
    ledger: OffsetLedger,
    output: Vec<u8>,
    serializer: ObjectSerializer,
}

impl BuildContext {
    fn new(serializer: ObjectSerializer) -> Self {
        Self {
            ids: ObjectIdAllocator::new(),
            ledger: OffsetLedger::new(),
            output: Vec::new(),
            serializer,
        }
    }

    /// Write `reserved` and, after it, everything it reserved.
    fn emit(&mut self, reserved: Reserved<'_>) -> Result<()> {
        let Rendered { body, followers } = reserved.render(&mut self.ids);
        let obj_ref = reserved.reference();
        let offset = self.output.len();

        log::debug!(
            "Writing {} object {} at offset {} ({} followers)",
            reserved.node().kind(),
            obj_ref.id,
            offset,
            followers.len()
        );

        self.ledger.record(obj_ref, offset);
        self.serializer
            .write_indirect(&mut self.output, obj_ref, &body)?;

        for follower in followers {
            self.emit(follower)?;
        }
        Ok(())
    }

    /// Check that every allocated object was written exactly where the
    /// ledger says it was.
    fn verify_ledger(&self) -> Result<Vec<XrefEntry>> {
        let allocated = self.ids.issued();
        if self.ledger.len() != allocated as usize {
            return Err(Error::LedgerMismatch {
                recorded: self.ledger.len(),
                allocated,
            });
        }

        let sorted = self.ledger.sorted_entries()?;
        for entry in &sorted {
            let marker = entry.obj_ref.obj_marker();
            let lands = self
                .output
                .get(entry.offset..)
                .is_some_and(|rest| rest.starts_with(marker.as_bytes()));
            if !lands {
                return Err(Error::MisplacedOffset {
                    id: entry.obj_ref.id,
                    offset: entry.offset,
                });
            }
        }
        Ok(sorted)
    }
}

/// Check that `offset` names the `xref` keyword inside `output`.
fn check_startxref(output: &[u8], offset: usize) -> Result<()> {
    let lands_on_xref = output
        .get(offset..)
        .is_some_and(|rest| rest.starts_with(b"xref"));
    if !lands_on_xref {
        return Err(Error::StartXrefOutOfBounds {
            offset,
            len: output.len(),
        });
    }
    Ok(())
}

/// PDF document writer.
///
/// Holds only configuration; each call to [`PdfWriter::build`] uses fresh
/// object numbering and a fresh offset ledger, so one writer can serve any
/// number of documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    config: PdfWriterConfig,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PdfWriterConfig {
        &self.config
    }

    /// Build the complete PDF document rooted at `catalog`.
    ///
    /// Nothing is returned unless the cross-reference table has been
    /// checked against the written bytes.
    pub fn build(&self, catalog: &Catalog) -> Result<WrittenPdf> {
        let header = self.config.header_line()?;
        let mut ctx = BuildContext::new(self.config.serializer());

        // PDF Header
        writeln!(ctx.output, "{}", header)?;

        let root = Reserved::reserve(catalog, &mut ctx.ids);
        let root_ref = root.reference();
        ctx.emit(root)?;

        let xref = ctx.verify_ledger()?;

        // Write xref table
        let xref_start = ctx.output.len();
        ctx.ledger.write_table(&mut ctx.output)?;

        // Write trailer
        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(ctx.ledger.table_size() as i64)),
            ("Root", ObjectSerializer::reference(root_ref)),
        ]);
        writeln!(ctx.output, "trailer")?;
        ctx.serializer.write_object(&mut ctx.output, &trailer)?;
        writeln!(ctx.output)?;
        writeln!(ctx.output, "startxref")?;
        writeln!(ctx.output, "{}", xref_start)?;
        writeln!(ctx.output, "%%EOF")?;

        check_startxref(&ctx.output, xref_start)?;

        log::info!(
            "Wrote PDF {}: {} objects, {} bytes",
            self.config.version,
            xref.len(),
            ctx.output.len()
        );

        Ok(WrittenPdf {
            bytes: ctx.output,
            root: root_ref,
            xref,
            startxref: xref_start,
        })
    }

    /// Build the document and return its bytes.
    pub fn write(&self, catalog: &Catalog) -> Result<Vec<u8>> {
        Ok(self.build(catalog)?.into_bytes())
    }

    /// Build the document and write it to `w`.
    ///
    /// `w` receives nothing if the build fails.
    pub fn write_to<W: Write>(&self, catalog: &Catalog, w: &mut W) -> Result<()> {
        let bytes = self.write(catalog)?;
        w.write_all(&bytes)?;
        Ok(())
    }

    /// Save the PDF to a file.
    pub fn save(&self, catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.write(catalog)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

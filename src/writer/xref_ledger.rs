//! Offset ledger and cross-reference table writer.
//!
//! The ledger records, for every indirect object, the byte offset at which
//! its `N 0 obj` marker starts in the final output. Entries are appended in
//! emission order; the table itself is written in object-number order, which
//! is how readers index it.

use crate::error::{Error, Result};
use crate::object::ObjectRef;
use std::io::Write;

/// Generation number written for the free-list head (object 0).
const FREE_HEAD_GENERATION: u16 = 65535;

/// Length of every cross-reference entry line, end-of-line included.
pub const XREF_ENTRY_LEN: usize = 20;

/// One recorded object location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    /// Object this entry belongs to
    pub obj_ref: ObjectRef,
    /// Byte offset of the object's `obj` marker from the start of the file
    pub offset: usize,
}

impl XrefEntry {
    /// Generation number of the entry.
    pub fn generation(&self) -> u16 {
        self.obj_ref.gen
    }
}

/// Append-only log of object offsets for one document build.
#[derive(Debug, Default)]
pub struct OffsetLedger {
    entries: Vec<XrefEntry>,
}

impl OffsetLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `obj_ref`'s definition begins at `offset`.
    pub fn record(&mut self, obj_ref: ObjectRef, offset: usize) {
        self.entries.push(XrefEntry { obj_ref, offset });
    }

    /// Number of recorded objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in emission order.
    pub fn entries(&self) -> &[XrefEntry] {
        &self.entries
    }

    /// `/Size` of the table: recorded objects plus the free-list head.
    pub fn table_size(&self) -> usize {
        self.entries.len() + 1
    }

    /// Entries ordered by object number.
    ///
    /// Fails with [`Error::IdentityGap`] unless the object numbers are
    /// exactly `1..=len`.
    pub fn sorted_entries(&self) -> Result<Vec<XrefEntry>> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.obj_ref.id);

        for (index, entry) in sorted.iter().enumerate() {
            let expected = index as u32 + 1;
            if entry.obj_ref.id != expected {
                return Err(Error::IdentityGap {
                    expected,
                    found: entry.obj_ref.id,
                });
            }
        }
        Ok(sorted)
    }

    /// Write the `xref` section: keyword, subsection header, free head and
    /// one in-use entry per recorded object.
    pub fn write_table<W: Write>(&self, w: &mut W) -> Result<()> {
        let sorted = self.sorted_entries()?;

        writeln!(w, "xref")?;
        writeln!(w, "0 {}", self.table_size())?;
        write_entry(w, 0, FREE_HEAD_GENERATION, 'f')?;
        for entry in &sorted {
            write_entry(w, entry.offset, entry.generation(), 'n')?;
        }
        Ok(())
    }
}

/// Write a single 20-byte entry: `oooooooooo ggggg t` + space + LF.
fn write_entry<W: Write>(w: &mut W, offset: usize, gen: u16, kind: char) -> std::io::Result<()> {
    writeln!(w, "{:010} {:05} {} ", offset, gen, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_string(ledger: &OffsetLedger) -> String {
        let mut buf = Vec::new();
        ledger.write_table(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_ledger_table() {
        let ledger = OffsetLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.table_size(), 1);
        assert_eq!(table_string(&ledger), "xref\n0 1\n0000000000 65535 f \n");
    }

    #[test]
    fn test_entries_are_twenty_bytes() {
        let mut ledger = OffsetLedger::new();
        ledger.record(ObjectRef::new(1, 0), 9);
        ledger.record(ObjectRef::new(2, 0), 1234567);

        let table = table_string(&ledger);
        let lines: Vec<&str> = table.split_inclusive('\n').collect();
        assert_eq!(lines.len(), 5);
        for line in &lines[2..] {
            assert_eq!(line.len(), XREF_ENTRY_LEN);
        }
        assert_eq!(lines[3], "0000000009 00000 n \n");
        assert_eq!(lines[4], "0001234567 00000 n \n");
    }

    #[test]
    fn test_table_is_written_in_object_order() {
        let mut ledger = OffsetLedger::new();
        ledger.record(ObjectRef::new(1, 0), 10);
        ledger.record(ObjectRef::new(3, 0), 30);
        ledger.record(ObjectRef::new(2, 0), 50);

        // Emission order is preserved in the ledger itself
        let emitted: Vec<u32> = ledger.entries().iter().map(|e| e.obj_ref.id).collect();
        assert_eq!(emitted, vec![1, 3, 2]);

        let table = table_string(&ledger);
        assert!(table.contains("0 4\n"));
        let offsets: Vec<&str> = table.lines().skip(3).map(|l| &l[..10]).collect();
        assert_eq!(offsets, vec!["0000000010", "0000000050", "0000000030"]);
    }

    #[test]
    fn test_gap_in_object_numbers_is_rejected() {
        let mut ledger = OffsetLedger::new();
        ledger.record(ObjectRef::new(1, 0), 10);
        ledger.record(ObjectRef::new(3, 0), 30);

        let err = ledger.sorted_entries().unwrap_err();
        assert!(matches!(err, Error::IdentityGap { expected: 2, found: 3 }));
    }

    #[test]
    fn test_duplicate_object_number_is_rejected() {
        let mut ledger = OffsetLedger::new();
        ledger.record(ObjectRef::new(1, 0), 10);
        ledger.record(ObjectRef::new(1, 0), 20);

        assert!(matches!(ledger.write_table(&mut Vec::new()), Err(Error::IdentityGap { .. })));
    }
}

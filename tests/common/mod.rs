//! Helpers for reading back the tail of a written PDF the way a reader
//! would: `startxref`, then the xref table, then the trailer.

#![allow(dead_code)]

use regex::Regex;

/// Cross-reference data parsed from the end of a file.
#[derive(Debug)]
pub struct ParsedTail {
    /// Offset named by `startxref`
    pub startxref: usize,
    /// Count from the `0 N` subsection header
    pub subsection_count: usize,
    /// `(offset, generation, kind)` per entry, entry 0 included
    pub entries: Vec<(usize, u16, char)>,
    /// `/Size` from the trailer
    pub size: usize,
    /// Object number from `/Root`
    pub root: u32,
}

pub fn parse_tail(bytes: &[u8]) -> ParsedTail {
    let text = std::str::from_utf8(bytes).expect("output should be UTF-8");

    let tail_re = Regex::new(r"startxref\n(\d+)\n%%EOF\n$").unwrap();
    let caps = tail_re.captures(text).expect("file should end with startxref/%%EOF");
    let startxref: usize = caps[1].parse().unwrap();

    let xref = &text[startxref..];
    let head_re = Regex::new(r"^xref\n0 (\d+)\n").unwrap();
    let caps = head_re.captures(xref).expect("startxref should point at an xref section");
    let subsection_count: usize = caps[1].parse().unwrap();

    let mut pos = caps[0].len();
    let mut entries = Vec::with_capacity(subsection_count);
    for _ in 0..subsection_count {
        let line = &xref[pos..pos + 20];
        assert!(line.ends_with(" \n"), "entry {:?} should end with space + LF", line);
        let offset: usize = line[0..10].parse().unwrap();
        let gen: u16 = line[11..16].parse().unwrap();
        let kind = line.as_bytes()[17] as char;
        entries.push((offset, gen, kind));
        pos += 20;
    }

    let trailer_re = Regex::new(r"^trailer\n<<\s*/Size (\d+)\s*/Root (\d+) 0 R\s*>>\n").unwrap();
    let caps = trailer_re
        .captures(&xref[pos..])
        .expect("trailer should follow the xref entries");

    ParsedTail {
        startxref,
        subsection_count,
        entries,
        size: caps[1].parse().unwrap(),
        root: caps[2].parse().unwrap(),
    }
}

/// Body text of object `id` located through the parsed table.
pub fn object_text<'a>(bytes: &'a [u8], tail: &ParsedTail, id: u32) -> &'a str {
    let (offset, _, _) = tail.entries[id as usize];
    let text = std::str::from_utf8(&bytes[offset..]).unwrap();
    let end = text.find("\nendobj\n").expect("object should end with endobj");
    &text[..end]
}

//! PDF object serialization.
//!
//! Serializes PDF objects to their byte representation according to
//! PDF specification ISO 32000-1:2008.

use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Serializer for PDF objects.
///
/// Converts PDF Object types to their byte representation following
/// the PDF specification syntax rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer {
    /// Whether to use compact formatting (minimal whitespace)
    compact: bool,
}

impl ObjectSerializer {
    /// Create a new object serializer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact serializer (minimal whitespace).
    pub fn compact() -> Self {
        Self { compact: true }
    }

    /// Serialize an object into an in-memory buffer.
    pub fn serialize(&self, obj: &Object) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_object(&mut buf, obj)?;
        Ok(buf)
    }

    /// Write an indirect object definition.
    ///
    /// Format: `{id} {gen} obj\n{object}\nendobj\n`
    pub fn write_indirect<W: Write>(
        &self,
        w: &mut W,
        obj_ref: ObjectRef,
        obj: &Object,
    ) -> std::io::Result<()> {
        writeln!(w, "{}", obj_ref.obj_marker())?;
        self.write_object(w, obj)?;
        write!(w, "\nendobj\n")
    }

    /// Write an object.
    pub fn write_object<W: Write>(&self, w: &mut W, obj: &Object) -> std::io::Result<()> {
        match obj {
            Object::Integer(i) => write!(w, "{}", i),
            Object::Real(r) => self.write_real(w, *r),
            Object::Name(n) => self.write_name(w, n),
            Object::Array(arr) => self.write_array(w, arr),
            Object::Dictionary(dict) => self.write_dictionary(w, dict),
            Object::Stream { dict, data } => self.write_stream(w, dict, data),
            Object::Reference(r) => write!(w, "{}", r),
        }
    }

    /// Write a real number with appropriate precision.
    ///
    /// PDF has no token for NaN or infinity, so those are rejected.
    fn write_real<W: Write>(&self, w: &mut W, value: f64) -> std::io::Result<()> {
        if !value.is_finite() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("real number {} has no PDF representation", value),
            ));
        }
        // Up to 5 decimal places, trailing zeros removed
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            write!(w, "{}", value as i64)
        } else {
            let formatted = format!("{:.5}", value);
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            write!(w, "{}", trimmed)
        }
    }

    /// Write a PDF name.
    ///
    /// Names start with `/` and escape special characters with `#xx`.
    fn write_name<W: Write>(&self, w: &mut W, name: &str) -> std::io::Result<()> {
        write!(w, "/")?;
        for byte in name.bytes() {
            match byte {
                b'!'
                | b'"'
                | b'$'
                | b'&'
                | b'\''
                | b'*'..=b'.'
                | b'0'..=b':'
                | b';'
                | b'='
                | b'?'
                | b'@'
                | b'A'..=b'Z'
                | b'\\'
                | b'^'..=b'z'
                | b'|'
                | b'~' => {
                    w.write_all(&[byte])?;
                },
                _ => {
                    write!(w, "#{:02X}", byte)?;
                },
            }
        }
        Ok(())
    }

    /// Write a PDF array.
    fn write_array<W: Write>(&self, w: &mut W, arr: &[Object]) -> std::io::Result<()> {
        write!(w, "[")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            self.write_object(w, obj)?;
        }
        write!(w, "]")
    }

    /// Write a PDF dictionary in insertion order.
    fn write_dictionary<W: Write>(&self, w: &mut W, dict: &Dictionary) -> std::io::Result<()> {
        write!(w, "<<")?;

        for (key, value) in dict {
            if !self.compact {
                write!(w, "\n  ")?;
            }
            self.write_name(w, key)?;
            write!(w, " ")?;
            self.write_object(w, value)?;
        }

        if !self.compact && !dict.is_empty() {
            writeln!(w)?;
        }
        write!(w, ">>")
    }

    /// Write a PDF stream.
    ///
    /// `/Length` is always recomputed from `data`.
    fn write_stream<W: Write>(
        &self,
        w: &mut W,
        dict: &Dictionary,
        data: &[u8],
    ) -> std::io::Result<()> {
        let mut dict_with_length = dict.clone();
        dict_with_length.insert("Length".to_string(), Object::Integer(data.len() as i64));

        self.write_dictionary(w, &dict_with_length)?;
        write!(w, "\nstream\n")?;
        w.write_all(data)?;
        write!(w, "\nendstream")
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::Name(s.to_string())
    }

    /// Create an Integer object.
    pub fn integer(i: i64) -> Object {
        Object::Integer(i)
    }

    /// Create an Array object.
    pub fn array(items: Vec<Object>) -> Object {
        Object::Array(items)
    }

    /// Create a Dictionary object.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        let map: Dictionary = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Object::Dictionary(map)
    }

    /// Create a Reference object.
    pub fn reference(obj_ref: ObjectRef) -> Object {
        Object::Reference(obj_ref)
    }

    /// Create a rectangle array `[llx lly urx ury]`.
    pub fn rect(llx: f64, lly: f64, urx: f64, ury: f64) -> Object {
        Object::Array(vec![
            Object::Real(llx),
            Object::Real(lly),
            Object::Real(urx),
            Object::Real(ury),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(s: &ObjectSerializer, obj: &Object) -> String {
        String::from_utf8(s.serialize(obj).unwrap()).unwrap()
    }

    #[test]
    fn test_serialize_integer() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &Object::Integer(42)), "42");
        assert_eq!(to_string(&s, &Object::Integer(-123)), "-123");
    }

    #[test]
    fn test_serialize_real() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &Object::Real(3.14258)), "3.14258");
        assert_eq!(to_string(&s, &Object::Real(612.0)), "612");
        assert_eq!(to_string(&s, &Object::Real(0.5)), "0.5");
        assert_eq!(to_string(&s, &Object::Real(-72.0)), "-72");
    }

    #[test]
    fn test_serialize_real_beyond_integer_range() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &Object::Real(1e20)), "100000000000000000000");
        assert_eq!(to_string(&s, &Object::Real(-1e19)), "-10000000000000000000");
    }

    #[test]
    fn test_serialize_non_finite_real_fails() {
        let s = ObjectSerializer::new();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = s.serialize(&Object::Real(value)).unwrap_err();
            assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        }
        let rect = ObjectSerializer::rect(0.0, 0.0, f64::NAN, 792.0);
        assert!(s.serialize(&rect).is_err());
    }

    #[test]
    fn test_serialize_name() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &ObjectSerializer::name("Type")), "/Type");
        assert_eq!(to_string(&s, &ObjectSerializer::name("UniJIS-UCS2-H")), "/UniJIS-UCS2-H");
    }

    #[test]
    fn test_serialize_name_with_special_chars() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &ObjectSerializer::name("Name With Space")), "/Name#20With#20Space");
        assert_eq!(to_string(&s, &ObjectSerializer::name("A(B)")), "/A#28B#29");
        assert_eq!(to_string(&s, &ObjectSerializer::name("50#")), "/50#23");
        assert_eq!(to_string(&s, &ObjectSerializer::name("a%b/c")), "/a#25b#2Fc");
    }

    #[test]
    fn test_serialize_array() {
        let s = ObjectSerializer::compact();
        let arr = ObjectSerializer::array(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
        assert_eq!(to_string(&s, &arr), "[1 2 3]");
    }

    #[test]
    fn test_serialize_dictionary_keeps_insertion_order() {
        let s = ObjectSerializer::compact();
        let dict = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Count", ObjectSerializer::integer(1)),
            ("Kids", ObjectSerializer::array(vec![ObjectSerializer::reference(ObjectRef::new(3, 0))])),
        ]);
        assert_eq!(to_string(&s, &dict), "<</Type /Pages/Count 1/Kids [3 0 R]>>");
    }

    #[test]
    fn test_serialize_dictionary_pretty() {
        let s = ObjectSerializer::new();
        let dict = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(ObjectRef::new(2, 0))),
        ]);
        assert_eq!(to_string(&s, &dict), "<<\n  /Type /Catalog\n  /Pages 2 0 R\n>>");
    }

    #[test]
    fn test_serialize_empty_dictionary() {
        assert_eq!(to_string(&ObjectSerializer::new(), &ObjectSerializer::dict(vec![])), "<<>>");
    }

    #[test]
    fn test_serialize_reference() {
        let s = ObjectSerializer::new();
        assert_eq!(to_string(&s, &ObjectSerializer::reference(ObjectRef::new(10, 0))), "10 0 R");
    }

    #[test]
    fn test_write_indirect() {
        let s = ObjectSerializer::new();
        let mut buf = Vec::new();
        s.write_indirect(&mut buf, ObjectRef::new(1, 0), &Object::Integer(42))
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 0 obj\n42\nendobj\n");
    }

    #[test]
    fn test_serialize_stream_recomputes_length() {
        let s = ObjectSerializer::compact();
        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Integer(999));

        let stream = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"stream data"),
        };

        let result = to_string(&s, &stream);
        assert_eq!(result, "<</Length 11>>\nstream\nstream data\nendstream");
    }

    #[test]
    fn test_rect_helper() {
        let rect = ObjectSerializer::rect(0.0, 0.0, 612.0, 792.0);
        assert_eq!(to_string(&ObjectSerializer::compact(), &rect), "[0 0 612 792]");
    }
}

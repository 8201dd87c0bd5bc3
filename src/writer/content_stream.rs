//! Page content streams.
//!
//! Operators are supplied by the caller as opaque text and written verbatim
//! between `stream` and `endstream`; nothing here parses or checks them.

use super::node::Rendered;
use super::object_serializer::ObjectSerializer;
use crate::object::{Dictionary, Object};
use bytes::Bytes;

/// An uncompressed content stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contents {
    data: Bytes,
}

impl Contents {
    /// Create a content stream from operator text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            data: Bytes::from(text.into()),
        }
    }

    /// Create a content stream from raw bytes.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Stream data as written.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte length of the stream data; this is the written `/Length`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn render<'a>(&self) -> Rendered<'a> {
        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), ObjectSerializer::integer(self.len() as i64));
        Rendered::leaf(Object::Stream {
            dict,
            data: self.data.clone(),
        })
    }
}

//! Font and resource dictionaries.

use super::id_allocator::ObjectIdAllocator;
use super::node::{Rendered, Reserved};
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// A font dictionary referenced by name from content streams.
///
/// Only the dictionary is written; no font program is embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    subtype: String,
    name: String,
    base_font: String,
    encoding: String,
}

impl Font {
    /// Create a font dictionary.
    ///
    /// # Arguments
    ///
    /// * `subtype` - Font subtype, e.g. `Type0` or `Type1`
    /// * `name` - Resource name used by content streams, e.g. `F1`
    /// * `base_font` - PostScript name of the font
    /// * `encoding` - Encoding or CMap name
    ///
    /// Every field must be non-empty and free of NUL bytes.
    pub fn new(
        subtype: impl Into<String>,
        name: impl Into<String>,
        base_font: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            subtype: check_name("font subtype", subtype.into())?,
            name: check_name("font name", name.into())?,
            base_font: check_name("base font", base_font.into())?,
            encoding: check_name("font encoding", encoding.into())?,
        })
    }

    /// Font subtype.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base font name.
    pub fn base_font(&self) -> &str {
        &self.base_font
    }

    /// Encoding name.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub(crate) fn render<'a>(&self) -> Rendered<'a> {
        Rendered::leaf(ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Font")),
            ("Subtype", ObjectSerializer::name(&self.subtype)),
            ("Name", ObjectSerializer::name(&self.name)),
            ("BaseFont", ObjectSerializer::name(&self.base_font)),
            ("Encoding", ObjectSerializer::name(&self.encoding)),
        ]))
    }
}

fn check_name(field: &'static str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(Error::InvalidInput {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains('\0') {
        return Err(Error::InvalidInput {
            field,
            reason: "must not contain NUL bytes".to_string(),
        });
    }
    Ok(value)
}

/// Resource dictionary of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    fonts: Vec<Font>,
}

impl Resources {
    /// Create a resource dictionary listing `fonts`.
    pub fn new(fonts: Vec<Font>) -> Self {
        Self { fonts }
    }

    /// Fonts in declaration order.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Reserve every font and build the dictionary that references them.
    ///
    /// Shared by the indirect form and by pages that inline their resources.
    pub(crate) fn font_dictionary<'a>(
        &'a self,
        ids: &mut ObjectIdAllocator,
    ) -> (Dictionary, Vec<Reserved<'a>>) {
        let fonts: Vec<Reserved<'a>> = self
            .fonts
            .iter()
            .map(|font| Reserved::reserve(font, ids))
            .collect();

        let refs = fonts
            .iter()
            .map(|font| ObjectSerializer::reference(font.reference()))
            .collect();

        let mut dict = Dictionary::new();
        dict.insert("Font".to_string(), ObjectSerializer::array(refs));
        (dict, fonts)
    }

    pub(crate) fn render<'a>(&'a self, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        let (dict, followers) = self.font_dictionary(ids);
        Rendered {
            body: Object::Dictionary(dict),
            followers,
        }
    }
}

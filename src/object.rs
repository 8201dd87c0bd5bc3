//! PDF object types.
//!
//! Values that make up the body of an indirect object. Dictionaries keep
//! insertion order so that written output is deterministic.

use indexmap::IndexMap;

/// Dictionary representation (keys are names without the leading `/`).
pub type Dictionary = IndexMap<String, Object>;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Integer value
    Integer(i64),
    /// Real (floating-point) value
    Real(f64),
    /// Name (written with a leading /)
    Name(String),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (key-value pairs)
    Dictionary(Dictionary),
    /// Stream (dictionary + data)
    Stream {
        /// Stream dictionary
        dict: Dictionary,
        /// Stream data
        data: bytes::Bytes,
    },
    /// Indirect object reference
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    /// Create a new object reference.
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }

    /// Opening marker of this object's definition, e.g. `4 0 obj`.
    pub fn obj_marker(&self) -> String {
        format!("{} {} obj", self.id, self.gen)
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "Integer",
            Object::Real(_) => "Real",
            Object::Name(_) => "Name",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream { .. } => "Stream",
            Object::Reference(_) => "Reference",
        }
    }

    /// Try to cast to dictionary. Works for both Dictionary and Stream objects.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Try to cast to integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_token() {
        let r = ObjectRef::new(7, 0);
        assert_eq!(r.to_string(), "7 0 R");
        assert_eq!(r.obj_marker(), "7 0 obj");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Object::Integer(1).type_name(), "Integer");
        assert_eq!(Object::Name("Page".into()).type_name(), "Name");
        assert_eq!(Object::Reference(ObjectRef::new(1, 0)).type_name(), "Reference");
    }

    #[test]
    fn test_stream_as_dict() {
        let mut dict = Dictionary::new();
        dict.insert("Length".to_string(), Object::Integer(3));
        let stream = Object::Stream {
            dict,
            data: bytes::Bytes::from_static(b"abc"),
        };
        let d = stream.as_dict().unwrap();
        assert_eq!(d.get("Length").and_then(Object::as_integer), Some(3));
    }

    #[test]
    fn test_casts_reject_other_types() {
        let obj = Object::Integer(5);
        assert!(obj.as_dict().is_none());
        assert!(obj.as_array().is_none());
        assert!(obj.as_reference().is_none());
        assert!(obj.as_name().is_none());
    }

    #[test]
    fn test_refs_order_by_id() {
        let mut refs = vec![ObjectRef::new(3, 0), ObjectRef::new(1, 0), ObjectRef::new(2, 0)];
        refs.sort();
        assert_eq!(refs.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}

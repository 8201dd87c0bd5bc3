//! Object number allocation.

use crate::object::ObjectRef;

/// Issues object numbers for one document build.
///
/// Numbers start at 1 and are handed out in strict issuance order. An
/// allocator belongs to exactly one build; a new build gets a new allocator.
#[derive(Debug, Default)]
pub struct ObjectIdAllocator {
    last_id: u32,
}

impl ObjectIdAllocator {
    /// Create an allocator whose first allocation returns object 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next object number (generation 0).
    pub fn allocate(&mut self) -> ObjectRef {
        self.last_id += 1;
        ObjectRef::new(self.last_id, 0)
    }

    /// Number of object numbers handed out so far.
    pub fn issued(&self) -> u32 {
        self.last_id
    }
}

//! Indirect object nodes and the reserve-then-render protocol.
//!
//! A parent never writes a child inline. It first *reserves* the child,
//! which assigns the child an object number, puts the child's reference
//! into its own body, and hands the reserved child back as a follower. The
//! child is rendered later, when the writer reaches it.
//!
//! [`Reserved`] is the only way to obtain a child's [`ObjectRef`], so a body
//! cannot mention an object that has no number yet.

use super::content_stream::Contents;
use super::id_allocator::ObjectIdAllocator;
use super::page_tree::{Catalog, Outlines, Page, Pages};
use super::resources::{Font, Resources};
use crate::object::{Object, ObjectRef};

/// Borrowed view of one of the object kinds the writer knows how to emit.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Document catalog (root)
    Catalog(&'a Catalog),
    /// Page tree node
    Pages(&'a Pages),
    /// Leaf page
    Page(&'a Page),
    /// Outline dictionary
    Outlines(&'a Outlines),
    /// Page content stream
    Contents(&'a Contents),
    /// Resource dictionary
    Resources(&'a Resources),
    /// Font dictionary
    Font(&'a Font),
}

impl<'a> Node<'a> {
    /// Short name of the object kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Catalog(_) => "Catalog",
            Node::Pages(_) => "Pages",
            Node::Page(_) => "Page",
            Node::Outlines(_) => "Outlines",
            Node::Contents(_) => "Contents",
            Node::Resources(_) => "Resources",
            Node::Font(_) => "Font",
        }
    }

    fn render(self, slot: Slot, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        match self {
            Node::Catalog(catalog) => catalog.render(ids),
            Node::Pages(pages) => pages.render(slot, ids),
            Node::Page(page) => page.render(slot, ids),
            Node::Outlines(outlines) => outlines.render(),
            Node::Contents(contents) => contents.render(),
            Node::Resources(resources) => resources.render(ids),
            Node::Font(font) => font.render(),
        }
    }
}

impl<'a> From<&'a Catalog> for Node<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Node::Catalog(catalog)
    }
}

impl<'a> From<&'a Pages> for Node<'a> {
    fn from(pages: &'a Pages) -> Self {
        Node::Pages(pages)
    }
}

impl<'a> From<&'a Page> for Node<'a> {
    fn from(page: &'a Page) -> Self {
        Node::Page(page)
    }
}

impl<'a> From<&'a Outlines> for Node<'a> {
    fn from(outlines: &'a Outlines) -> Self {
        Node::Outlines(outlines)
    }
}

impl<'a> From<&'a Contents> for Node<'a> {
    fn from(contents: &'a Contents) -> Self {
        Node::Contents(contents)
    }
}

impl<'a> From<&'a Resources> for Node<'a> {
    fn from(resources: &'a Resources) -> Self {
        Node::Resources(resources)
    }
}

impl<'a> From<&'a Font> for Node<'a> {
    fn from(font: &'a Font) -> Self {
        Node::Font(font)
    }
}

/// Where a node sits in the output: its own number and, for pages, the
/// page tree node that lists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The node's own reference
    pub obj_ref: ObjectRef,
    /// Reference to the parent page tree node, if any
    pub parent: Option<ObjectRef>,
}

/// A node that already owns an object number but has not been rendered.
#[derive(Debug)]
pub struct Reserved<'a> {
    slot: Slot,
    node: Node<'a>,
}

impl<'a> Reserved<'a> {
    /// Allocate an object number for `node`.
    pub fn reserve(node: impl Into<Node<'a>>, ids: &mut ObjectIdAllocator) -> Self {
        let node = node.into();
        let obj_ref = ids.allocate();
        log::trace!("Reserved {} for {}", obj_ref, node.kind());
        Self {
            slot: Slot {
                obj_ref,
                parent: None,
            },
            node,
        }
    }

    /// Allocate an object number for a node that records its parent.
    pub fn reserve_child(
        node: impl Into<Node<'a>>,
        parent: ObjectRef,
        ids: &mut ObjectIdAllocator,
    ) -> Self {
        let mut reserved = Self::reserve(node, ids);
        reserved.slot.parent = Some(parent);
        reserved
    }

    /// Reference token for use in a parent's body.
    pub fn reference(&self) -> ObjectRef {
        self.slot.obj_ref
    }

    /// Position of this node in the output.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// The node itself.
    pub fn node(&self) -> Node<'a> {
        self.node
    }

    /// Produce the body and the followers of this node.
    ///
    /// Children mentioned in the body are reserved here, so `ids` advances.
    pub fn render(&self, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        self.node.render(self.slot, ids)
    }
}

/// Result of rendering one node.
#[derive(Debug)]
pub struct Rendered<'a> {
    /// Body written between `obj` and `endobj`
    pub body: Object,
    /// Children to emit right after this object, in order
    pub followers: Vec<Reserved<'a>>,
}

impl<'a> Rendered<'a> {
    /// A body without followers.
    pub fn leaf(body: Object) -> Self {
        Self {
            body,
            followers: Vec::new(),
        }
    }
}

//! Catalog, page tree and page objects.

use super::content_stream::Contents;
use super::id_allocator::ObjectIdAllocator;
use super::node::{Rendered, Reserved, Slot};
use super::object_serializer::ObjectSerializer;
use super::resources::Resources;
use crate::error::{Error, Result};
use crate::object::{Dictionary, Object};

/// Page boundaries in default user space units (1/72 inch).
///
/// Only constructible through [`MediaBox::new`] or the presets, so every
/// value is finite and encloses a positive area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    llx: f64,
    lly: f64,
    urx: f64,
    ury: f64,
}

impl MediaBox {
    /// Create a media box from its corners.
    ///
    /// All coordinates must be finite and the box must have a positive
    /// width and height.
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Result<Self> {
        if ![llx, lly, urx, ury].iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidInput {
                field: "media box",
                reason: "coordinates must be finite".to_string(),
            });
        }
        if urx <= llx || ury <= lly {
            return Err(Error::InvalidInput {
                field: "media box",
                reason: format!("[{} {} {} {}] has no area", llx, lly, urx, ury),
            });
        }
        Ok(Self { llx, lly, urx, ury })
    }

    /// US Letter (8.5" x 11").
    pub fn letter() -> Self {
        Self {
            llx: 0.0,
            lly: 0.0,
            urx: 612.0,
            ury: 792.0,
        }
    }

    /// A4 (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            llx: 0.0,
            lly: 0.0,
            urx: 595.0,
            ury: 842.0,
        }
    }

    /// Lower-left x.
    pub fn llx(&self) -> f64 {
        self.llx
    }

    /// Lower-left y.
    pub fn lly(&self) -> f64 {
        self.lly
    }

    /// Upper-right x.
    pub fn urx(&self) -> f64 {
        self.urx
    }

    /// Upper-right y.
    pub fn ury(&self) -> f64 {
        self.ury
    }

    /// Width in user space units.
    pub fn width(&self) -> f64 {
        self.urx - self.llx
    }

    /// Height in user space units.
    pub fn height(&self) -> f64 {
        self.ury - self.lly
    }

    fn to_object(self) -> Object {
        ObjectSerializer::rect(self.llx, self.lly, self.urx, self.ury)
    }
}

impl Default for MediaBox {
    fn default() -> Self {
        Self::letter()
    }
}

/// How a page points at its resource dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResourcesPlacement {
    /// Separate object, referenced by `/Resources N 0 R`
    #[default]
    Indirect,
    /// Dictionary nested directly in the page body
    Inline,
}

/// A single page: content stream plus resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    contents: Contents,
    resources: Resources,
    media_box: MediaBox,
    placement: ResourcesPlacement,
}

impl Page {
    /// Create a US Letter page with indirect resources.
    pub fn new(contents: Contents, resources: Resources) -> Self {
        Self {
            contents,
            resources,
            media_box: MediaBox::default(),
            placement: ResourcesPlacement::default(),
        }
    }

    /// Replace the page size.
    pub fn with_media_box(mut self, media_box: MediaBox) -> Self {
        self.media_box = media_box;
        self
    }

    /// Choose how resources are written.
    pub fn with_resources_placement(mut self, placement: ResourcesPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Page content stream.
    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    /// Page resources.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Page size.
    pub fn media_box(&self) -> MediaBox {
        self.media_box
    }

    pub(crate) fn render<'a>(&'a self, slot: Slot, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        let contents = Reserved::reserve(&self.contents, ids);

        let mut dict = Dictionary::new();
        dict.insert("Type".to_string(), ObjectSerializer::name("Page"));
        if let Some(parent) = slot.parent {
            dict.insert("Parent".to_string(), ObjectSerializer::reference(parent));
        }
        dict.insert("MediaBox".to_string(), self.media_box.to_object());
        dict.insert("Contents".to_string(), ObjectSerializer::reference(contents.reference()));

        let mut followers = vec![contents];
        match self.placement {
            ResourcesPlacement::Indirect => {
                let resources = Reserved::reserve(&self.resources, ids);
                dict.insert(
                    "Resources".to_string(),
                    ObjectSerializer::reference(resources.reference()),
                );
                followers.push(resources);
            },
            ResourcesPlacement::Inline => {
                let (resources, fonts) = self.resources.font_dictionary(ids);
                dict.insert("Resources".to_string(), Object::Dictionary(resources));
                followers.extend(fonts);
            },
        }

        Rendered {
            body: Object::Dictionary(dict),
            followers,
        }
    }
}

/// Page tree root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pages {
    kids: Vec<Page>,
}

impl Pages {
    /// Create a page tree node holding `kids` in order.
    pub fn new(kids: Vec<Page>) -> Self {
        Self { kids }
    }

    /// Pages in order.
    pub fn kids(&self) -> &[Page] {
        &self.kids
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.kids.len()
    }

    pub(crate) fn render<'a>(&'a self, slot: Slot, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        let kids: Vec<Reserved<'a>> = self
            .kids
            .iter()
            .map(|kid| Reserved::reserve_child(kid, slot.obj_ref, ids))
            .collect();

        let refs = kids
            .iter()
            .map(|kid| ObjectSerializer::reference(kid.reference()))
            .collect();

        Rendered {
            body: ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Count", ObjectSerializer::integer(self.count() as i64)),
                ("Kids", ObjectSerializer::array(refs)),
            ]),
            followers: kids,
        }
    }
}

/// Outline dictionary.
///
/// Written as an empty dictionary; outline items are not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outlines {
    count: u32,
}

impl Outlines {
    /// Create an outline dictionary.
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Declared number of outline entries. Not written.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub(crate) fn render<'a>(&self) -> Rendered<'a> {
        Rendered::leaf(Object::Dictionary(Dictionary::new()))
    }
}

/// Document catalog, the root of the object graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pages: Pages,
    outlines: Option<Outlines>,
}

impl Catalog {
    /// Create a catalog for `pages`.
    pub fn new(pages: Pages) -> Self {
        Self {
            pages,
            outlines: None,
        }
    }

    /// Attach an outline dictionary.
    ///
    /// The outlines object is emitted after the page tree but the catalog
    /// body does not reference it.
    pub fn with_outlines(mut self, outlines: Outlines) -> Self {
        self.outlines = Some(outlines);
        self
    }

    /// Page tree.
    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Outline dictionary, if any.
    pub fn outlines(&self) -> Option<&Outlines> {
        self.outlines.as_ref()
    }

    pub(crate) fn render<'a>(&'a self, ids: &mut ObjectIdAllocator) -> Rendered<'a> {
        let pages = Reserved::reserve(&self.pages, ids);
        let body = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages.reference())),
        ]);

        let mut followers = vec![pages];
        if let Some(outlines) = &self.outlines {
            followers.push(Reserved::reserve(outlines, ids));
        }
        Rendered { body, followers }
    }
}

use std::fmt;

use bitflags::bitflags;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::surface::{DisplayList, Primitive, Surface, TargetRect};

bitflags! {
    /// Which kinds of view change a layer is sensitive to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ChangeMask: u8 {
        /// Full-scene redraw. A draw pass carrying this flag selects every
        /// layer regardless of its own mask.
        const REDRAW = 1 << 0;
        const RESIZE = 1 << 1;
        const SCROLL = 1 << 2;
    }
}

impl Serialize for ChangeMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ChangeMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// Unique layer identifier.
pub type LayerId = Uuid;

type RedrawFn = Box<dyn FnMut(&mut DisplayList)>;

/// One independently redrawable, priority-ordered region of the composed
/// scene. The redraw procedure is supplied by an external collaborator and
/// closes over whatever domain data it needs; its only output is what it
/// draws into the retained content list.
pub struct Layer {
    pub id: LayerId,
    pub priority: i32,
    pub mask: ChangeMask,
    content: DisplayList,
    redraw: RedrawFn,
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("mask", &self.mask)
            .field("primitives", &self.content.len())
            .finish()
    }
}

/// The single reference raster image behind the plan, positioned and scaled
/// by the manager. Decoding the bitmap is an external capability; only the
/// source identifier and natural size travel through here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub source: String,
    pub natural_width: f64,
    pub natural_height: f64,
    pub rect: TargetRect,
    pub opacity: f64,
}

/// Owns the ordered layer list and the dirty/redraw protocol. The manager is
/// the sole mutator of its retained content; everything runs synchronously
/// on the caller's thread.
pub struct LayerManager {
    canvas_width: f64,
    canvas_height: f64,
    layers: Vec<Layer>,
    reference_image: Option<ReferenceImage>,
}

impl fmt::Debug for LayerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerManager")
            .field("canvas_width", &self.canvas_width)
            .field("canvas_height", &self.canvas_height)
            .field("layers", &self.layers)
            .field("reference_image", &self.reference_image)
            .finish()
    }
}

impl LayerManager {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            layers: Vec::new(),
            reference_image: None,
        }
    }

    // ── Layer management ─────────────────────────────────────────────

    /// Append a layer, then re-sort so draw order always follows ascending
    /// priority (lowest first, i.e. visually behind). The sort is stable, so
    /// equal priorities keep their insertion order.
    pub fn add_layer<F>(&mut self, priority: i32, mask: ChangeMask, redraw: F) -> LayerId
    where
        F: FnMut(&mut DisplayList) + 'static,
    {
        let id = Uuid::new_v4();
        self.layers.push(Layer {
            id,
            priority,
            mask,
            content: DisplayList::new(self.canvas_width, self.canvas_height),
            redraw: Box::new(redraw),
        });
        self.layers.sort_by_key(|l| l.priority);
        id
    }

    /// Remove a layer by handle. Unknown handles are a tolerated no-op.
    pub fn remove_layer(&mut self, id: LayerId) {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        if self.layers.len() == before {
            warn!("remove_layer: unknown layer {id}, ignoring");
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer priorities in draw order.
    pub fn priorities(&self) -> Vec<i32> {
        self.layers.iter().map(|l| l.priority).collect()
    }

    /// The retained content of a layer, for composition or inspection.
    pub fn layer_content(&self, id: LayerId) -> Option<&DisplayList> {
        self.layers.iter().find(|l| l.id == id).map(|l| &l.content)
    }

    // ── Redraw protocol ──────────────────────────────────────────────

    /// Run one redraw pass. A layer is selected when its mask intersects
    /// `change`, or unconditionally when `change` carries `REDRAW`. Each
    /// selected layer has its retained content cleared and repopulated by
    /// its redraw procedure; unselected layers keep their prior content.
    pub fn draw(&mut self, change: ChangeMask) {
        let full = change.contains(ChangeMask::REDRAW);
        let mut selected = 0usize;
        for layer in &mut self.layers {
            if full || layer.mask.intersects(change) {
                layer.content.clear();
                (layer.redraw)(&mut layer.content);
                selected += 1;
            }
        }
        debug!(
            "draw({change:?}): redrew {selected} of {} layers",
            self.layers.len()
        );
    }

    /// Copy every layer's retained content onto `target`, ascending
    /// priority, with the reference image (if any) drawn first, behind the
    /// plan.
    pub fn compose(&self, target: &mut dyn Surface) {
        target.clear();
        if let Some(image) = &self.reference_image {
            target.add_child(Primitive::Image {
                source: image.source.clone(),
                rect: image.rect,
                opacity: image.opacity,
            });
        }
        for layer in &self.layers {
            for primitive in layer.content.primitives() {
                target.add_child(primitive.clone());
            }
        }
    }

    // ── Reference image ──────────────────────────────────────────────

    /// Install a reference image, replacing any existing one; at most one is
    /// active at a time. Its target rectangle is the natural size scaled by
    /// the given factors, anchored at the canvas origin.
    pub fn set_reference_image(
        &mut self,
        source: &str,
        natural_width: f64,
        natural_height: f64,
        scale_x: f64,
        scale_y: f64,
    ) {
        if let Some(old) = &self.reference_image {
            debug!("set_reference_image: replacing {}", old.source);
        }
        self.reference_image = Some(ReferenceImage {
            source: source.to_string(),
            natural_width,
            natural_height,
            rect: TargetRect {
                x: 0.0,
                y: 0.0,
                width: natural_width * scale_x,
                height: natural_height * scale_y,
            },
            opacity: 1.0,
        });
    }

    pub fn reference_image(&self) -> Option<&ReferenceImage> {
        self.reference_image.as_ref()
    }

    /// Resize the reference image's target rectangle. No-op when no image
    /// is installed.
    pub fn resize_reference_image(&mut self, width: f64, height: f64) {
        match &mut self.reference_image {
            Some(image) => {
                image.rect.width = width;
                image.rect.height = height;
            }
            None => warn!("resize_reference_image: no reference image, ignoring"),
        }
    }

    /// Move the reference image's target rectangle. No-op when no image is
    /// installed.
    pub fn move_reference_image(&mut self, x: f64, y: f64) {
        match &mut self.reference_image {
            Some(image) => {
                image.rect.x = x;
                image.rect.y = y;
            }
            None => warn!("move_reference_image: no reference image, ignoring"),
        }
    }

    /// Set the reference image's opacity, clamped to [0, 1]. No-op when no
    /// image is installed.
    pub fn set_reference_image_opacity(&mut self, opacity: f64) {
        match &mut self.reference_image {
            Some(image) => image.opacity = opacity.clamp(0.0, 1.0),
            None => warn!("set_reference_image_opacity: no reference image, ignoring"),
        }
    }

    pub fn remove_reference_image(&mut self) -> Option<ReferenceImage> {
        self.reference_image.take()
    }
}

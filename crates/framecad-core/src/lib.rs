//! # FrameCAD Core
//!
//! Core geometry for the FrameCAD structural plan editor: world/screen
//! coordinate types and transforms, nearest-point snap resolution for
//! interactive point entry, and the immutable hardware-catalog tables.
//!
//! World space is Cartesian with Y up, in engineering units; screen space is
//! pixel space with Y down. The two are distinct types, and
//! [`transform::ViewTransform`] is the only converter between them.

pub mod catalog;
pub mod geometry;
pub mod snap;
pub mod transform;

pub use catalog::{ConnectorCatalog, ConnectorKind, ConnectorRecord, WoodType};
pub use geometry::{Color, ScreenPoint, Segment, WorldPoint, WorldRect};
pub use snap::{SnapHit, SnapResolver};
pub use transform::ViewTransform;

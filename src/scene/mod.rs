//! Boundary zur externen Render-Engine: Picking und Marker-Brücke.

pub mod binding;
pub mod raycast;

pub use binding::{
    annotation_world_position, measurement_world_points, resync_after_transform, SceneBinding,
};
pub use raycast::{SceneRaycaster, SurfaceHit, SurfacePicker};

//! Domänen-Datenmodell und reine Geometrie.

pub mod annotation;
pub mod camera;
pub mod geometry;
pub mod measurement;
pub mod saved_view;
pub mod scene_transform;
pub mod spatial;

pub use annotation::{Annotation, AnnotationKind, AnnotationReply, AnnotationStatus};
pub use camera::{CameraFlight, ViewAxis, ViewCamera};
pub use geometry::SegmentSplit;
pub use measurement::{Measurement, MeasurementKind, MeasurementUnit, PendingMeasurement};
pub use saved_view::SavedView;
pub use scene_transform::{SceneBounds, SceneTransform};
pub use spatial::{MarkerIndex, MarkerMatch, MarkerRef};

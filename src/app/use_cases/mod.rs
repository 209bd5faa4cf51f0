//! Use-Case-Funktionen: die eigentlichen Mutationen auf dem AppState.

pub mod annotation;
pub mod camera;
pub mod gizmo;
pub mod measurement;
pub mod saved_view;
pub mod segment_removal;
pub mod selection;
pub mod sync;

pub use segment_removal::SegmentRemovalOutcome;

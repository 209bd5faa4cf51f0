//! Feature-Handler: dünne Einstiegspunkte über den Use-Cases.

pub mod annotation;
pub mod gizmo;
pub mod measurement;
pub mod options;
pub mod saved_view;
pub mod selection;
pub mod sync;
pub mod view;

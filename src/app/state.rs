//! Application State und Entity Store.
//!
//! Dieses Modul verwaltet den Zustand der Anwendung (Entities,
//! Interaktionsmodus, Szene, View).

mod app_state;
mod entity_store;
mod interaction;
mod scene;
mod view;

pub use app_state::{AppState, SessionContext};
pub use entity_store::EntityStore;
pub use interaction::{
    resolve_gizmo_target, EditorTool, GizmoMode, GizmoState, GizmoTarget, InteractionMode,
    InteractionState,
};
pub use scene::SceneState;
pub use view::ViewState;

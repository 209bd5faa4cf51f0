//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    resolve_gizmo_target, AppState, EditorTool, EntityStore, GizmoMode, GizmoState, GizmoTarget,
    InteractionMode, InteractionState, SceneState, SessionContext, ViewState,
};
pub use use_cases::SegmentRemovalOutcome;

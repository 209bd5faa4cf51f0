//! Scan-Annotation-Editor Library.
//! Core-Funktionalität als Library exportiert für UI-Einbettung und Tests.

pub mod app;
pub mod core;
pub mod input;
pub mod scene;
pub mod shared;
pub mod sync;

pub use app::{
    resolve_gizmo_target, AppCommand, AppController, AppIntent, AppState, EditorTool, EntityStore,
    GizmoMode, GizmoTarget, InteractionMode, InteractionState, SegmentRemovalOutcome,
    SessionContext, ViewState,
};
pub use core::{
    Annotation, AnnotationKind, AnnotationReply, AnnotationStatus, CameraFlight, MarkerIndex,
    MarkerMatch, MarkerRef, Measurement, MeasurementKind, MeasurementUnit, PendingMeasurement,
    SavedView, SceneBounds, SceneTransform, SegmentSplit, ViewAxis, ViewCamera,
};
pub use input::{InputContext, InputEvent, InputState, Key, Modifiers, PointerButton};
pub use scene::{resync_after_transform, SceneBinding, SceneRaycaster, SurfaceHit, SurfacePicker};
pub use shared::EditorOptions;
pub use sync::{
    decode_remote_change, flush_outbox, PersistOp, PersistenceGateway, RemoteChange, RemoteId,
    SyncOutbox,
};

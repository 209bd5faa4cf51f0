use glam::{Quat, Vec3};

use super::super::state::{EditorTool, GizmoMode};
use crate::core::{
    AnnotationKind, AnnotationStatus, MarkerRef, MeasurementKind, SceneBounds, ViewAxis, ViewCamera,
};
use crate::shared::EditorOptions;
use crate::sync::RemoteChange;

/// Mutierende Commands auf dem AppState.
/// Entstehen ausschließlich über das Intent→Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Szenen-Metadaten nach Scan-Load übernehmen
    LoadScan { bounds: SceneBounds },
    /// Szenen-Metadaten nach Scan-Unload zurücksetzen
    ClearScan,

    /// Werkzeug setzen (löscht Selektion und Drag)
    SetTool { tool: EditorTool },

    /// Punkt-Sammlung für eine neue Messung beginnen
    StartMeasurement { kind: MeasurementKind },
    /// Punkt an die laufende Messung anhängen
    AddMeasurementPoint { world_pos: Vec3 },
    /// Letzten Punkt zurücknehmen (leere Sammlung wird verworfen)
    UndoLastPoint,
    /// Laufende Messung validieren und als Entity anlegen
    FinalizeMeasurement,
    /// Laufende Messung verwerfen
    CancelMeasurement,

    /// Annotation an Weltposition anlegen
    CreateAnnotation {
        kind: AnnotationKind,
        world_pos: Vec3,
        content: String,
    },

    /// Marker selektieren (löscht Werkzeug und anderen Modus)
    SelectMarker { marker: MarkerRef },
    /// Selektion und Drag aufheben
    ClearInteraction,
    /// Marker-Drag beginnen (parkt Werkzeug, sperrt Orbit)
    BeginMarkerDrag { marker: MarkerRef },
    /// Live-Position während des Drags übernehmen (ohne Persistenz)
    UpdateMarkerDrag { world_pos: Vec3 },
    /// Drag abschließen: autoritative Position übernehmen und persistieren
    EndMarkerDrag { world_pos: Option<Vec3> },

    /// Beschriftung einer Messung setzen
    SetMeasurementLabel { id: u64, label: Option<String> },
    /// Einzelnen Messpunkt verschieben (Wert wird neu berechnet)
    MoveMeasurementPoint {
        id: u64,
        index: usize,
        world_pos: Vec3,
    },
    /// Segment entfernen (Delete/Truncate/Split laut Geometrie)
    RemoveSegment { id: u64, segment_index: usize },
    /// Messung löschen
    DeleteMeasurement { id: u64 },

    /// Inhalt einer Annotation setzen
    SetAnnotationContent { id: u64, content: String },
    /// Status einer Annotation setzen
    SetAnnotationStatus { id: u64, status: AnnotationStatus },
    /// Annotation verschieben
    MoveAnnotation { id: u64, world_pos: Vec3 },
    /// Antwort anhängen
    AddAnnotationReply { annotation_id: u64, content: String },
    /// Antwort entfernen
    RemoveAnnotationReply { annotation_id: u64, reply_id: u64 },
    /// Annotation löschen
    DeleteAnnotation { id: u64 },

    /// Aktuelle Kamera als Ansicht speichern
    CreateSavedView { name: String },
    /// Ansicht umbenennen
    RenameSavedView { id: u64, name: String },
    /// Ansicht löschen
    DeleteSavedView { id: u64 },
    /// Ansicht umsortieren (dichte Neuvergabe der sort_order)
    ReorderSavedView { id: u64, new_index: usize },
    /// Ansicht anwenden (Kameraflug anfordern)
    ApplySavedView { id: u64 },

    /// Kamera achsenparallel ausrichten
    SnapViewToAxis { axis: ViewAxis },
    /// Kamera auf die Szene einpassen
    FrameScene,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera-Pose übernehmen
    SetCameraPose { camera: ViewCamera },

    /// Gizmo ein-/ausblenden
    SetGizmoEnabled { enabled: bool },
    /// Gizmo-Transformationsart setzen
    SetGizmoMode { mode: GizmoMode },
    /// Snap-Raster setzen
    SetGizmoSnap { active: bool },
    /// Gizmo-Handle-Drag beginnen (sperrt Orbit)
    BeginGizmoDrag,
    /// Gizmo-Transform auf das aktuelle Ziel anwenden
    ApplyGizmoTransform {
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    },
    /// Gizmo-Handle-Drag beenden (Orbit wieder freigeben)
    EndGizmoDrag,

    /// Remote-Change in den Store einfalten
    ApplyRemoteChange { change: RemoteChange },
    /// Persistenz-Fehlschlag protokollieren (kein Rollback)
    LogPersistFailure { description: String },

    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

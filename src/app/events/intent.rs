use glam::{Quat, Vec3};

use super::super::state::{EditorTool, GizmoMode};
use crate::core::{AnnotationKind, AnnotationStatus, MarkerRef, SceneBounds, ViewAxis, ViewCamera};
use crate::shared::EditorOptions;
use crate::sync::RemoteChange;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Scan wurde von der Render-Schicht geladen
    ScanLoaded { bounds: SceneBounds },
    /// Scan wurde entladen
    ScanCleared,

    /// Editor-Werkzeug wechseln
    SetToolRequested { tool: EditorTool },

    /// Mess-Punkt wurde per Klick auf der Oberfläche platziert
    MeasurePointPlaced { world_pos: Vec3 },
    /// Letzten Punkt der laufenden Messung zurücknehmen
    UndoLastPointRequested,
    /// Laufende Messung finalisieren
    FinalizeMeasurementRequested,
    /// Laufende Messung verwerfen
    CancelMeasurementRequested,

    /// Annotation wurde per Klick auf der Oberfläche platziert
    AnnotationPlaced {
        kind: AnnotationKind,
        world_pos: Vec3,
        content: String,
    },

    /// Marker (Messpunkt oder Annotation) per Klick selektieren
    MarkerPickRequested { marker: MarkerRef },
    /// Selektion und Drag aufheben
    ClearSelectionRequested,

    /// Drag-Lifecycle Start: Marker-Drag beginnen
    MarkerDragStarted { marker: MarkerRef },
    /// Drag-Lifecycle Update: Live-Position vom Oberflächen-Pick
    MarkerDragMoved { world_pos: Vec3 },
    /// Drag-Lifecycle Ende: finaler Pick (None = Fehlschuss, letzte
    /// Live-Position bleibt bestehen)
    MarkerDragEnded { world_pos: Option<Vec3> },

    /// Beschriftung einer Messung ändern
    MeasurementLabelEdited { id: u64, label: Option<String> },
    /// Einzelnen Messpunkt verschieben (z.B. Panel-Eingabe)
    MeasurementPointMoved {
        id: u64,
        index: usize,
        world_pos: Vec3,
    },
    /// Segment aus einer Messung entfernen
    SegmentRemoveRequested { id: u64, segment_index: usize },
    /// Messung löschen
    DeleteMeasurementRequested { id: u64 },

    /// Inhalt einer Annotation ändern
    AnnotationContentEdited { id: u64, content: String },
    /// Status einer Annotation ändern (flache Menge, frei erreichbar)
    AnnotationStatusChanged { id: u64, status: AnnotationStatus },
    /// Annotation verschieben (z.B. Panel-Eingabe)
    AnnotationMoved { id: u64, world_pos: Vec3 },
    /// Antwort an einen Annotation-Thread anhängen
    AnnotationReplyAdded { annotation_id: u64, content: String },
    /// Antwort aus einem Annotation-Thread entfernen
    AnnotationReplyRemoved { annotation_id: u64, reply_id: u64 },
    /// Annotation löschen
    DeleteAnnotationRequested { id: u64 },

    /// Aktuelle Kamera als Ansicht speichern
    SavedViewCreateRequested { name: String },
    /// Ansicht umbenennen
    SavedViewRenameRequested { id: u64, name: String },
    /// Ansicht löschen
    SavedViewDeleteRequested { id: u64 },
    /// Ansicht an neue Listenposition verschieben
    SavedViewReorderRequested { id: u64, new_index: usize },
    /// Ansicht anwenden (Kameraflug anfordern)
    SavedViewApplyRequested { id: u64 },

    /// Kamera achsenparallel ausrichten (View-Snap)
    ViewSnapRequested { axis: ViewAxis },
    /// Kamera auf die Szene einpassen
    FrameSceneRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Orbit-Kamera-Pose von der Einbettung zurückgemeldet
    CameraPoseReported { camera: ViewCamera },

    /// Gizmo ein-/ausblenden
    GizmoToggled { enabled: bool },
    /// Gizmo-Transformationsart wechseln
    GizmoModeChanged { mode: GizmoMode },
    /// Snap-Raster per Modifier-Taste umschalten
    GizmoSnapChanged { active: bool },
    /// Gizmo-Handle-Drag gestartet
    GizmoDragStarted,
    /// Gizmo meldet neuen Ziel-Transform
    GizmoTransformUpdated {
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    },
    /// Gizmo-Handle-Drag beendet
    GizmoDragEnded,

    /// Change-Notification aus dem Persistenz-Dienst
    RemoteChangeReceived { change: RemoteChange },
    /// Persistenz-Aufruf der Einbettung ist fehlgeschlagen
    PersistFailureReported { description: String },

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

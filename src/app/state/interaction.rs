//! Interaktionszustand: Werkzeug, Selektion/Drag und Gizmo.
//!
//! Der Modus ist bewusst als Tagged Union modelliert: höchstens einer
//! von {selektierte Annotation, selektierter Messpunkt, Annotation-Drag,
//! Punkt-Drag} ist aktiv, strukturell garantiert statt per Konvention.

use crate::core::{AnnotationKind, MeasurementKind};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Marker selektieren und verschieben
    #[default]
    Select,
    /// Distanz-Messung: Polylinien-Punkte platzieren
    MeasureDistance,
    /// Flächen-Messung: Fan-Punkte platzieren
    MeasureArea,
    /// Pin-Annotation platzieren
    PlacePin,
    /// Kommentar-Annotation platzieren
    PlaceComment,
    /// Markup-Annotation platzieren
    PlaceMarkup,
}

impl EditorTool {
    /// Mess-Art des Werkzeugs, falls es ein Mess-Werkzeug ist.
    pub fn measurement_kind(&self) -> Option<MeasurementKind> {
        match self {
            EditorTool::MeasureDistance => Some(MeasurementKind::Distance),
            EditorTool::MeasureArea => Some(MeasurementKind::Area),
            _ => None,
        }
    }

    /// Annotations-Art des Werkzeugs, falls es ein Annotations-Werkzeug ist.
    pub fn annotation_kind(&self) -> Option<AnnotationKind> {
        match self {
            EditorTool::PlacePin => Some(AnnotationKind::Pin),
            EditorTool::PlaceComment => Some(AnnotationKind::Comment),
            EditorTool::PlaceMarkup => Some(AnnotationKind::Markup),
            _ => None,
        }
    }

    /// Gibt `true` zurück, wenn das Werkzeug per Klick platziert.
    pub fn is_placement(&self) -> bool {
        !matches!(self, EditorTool::Select)
    }
}

/// Exklusiver Selektions-/Drag-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Keine Selektion, kein Drag
    #[default]
    Idle,
    /// Eine Annotation ist selektiert
    AnnotationSelected { annotation_id: u64 },
    /// Ein einzelner Messpunkt ist selektiert
    PointSelected {
        measurement_id: u64,
        point_index: usize,
    },
    /// Eine Annotation wird gezogen
    DraggingAnnotation { annotation_id: u64 },
    /// Ein Messpunkt wird gezogen
    DraggingPoint {
        measurement_id: u64,
        point_index: usize,
    },
}

impl InteractionMode {
    /// Gibt `true` zurück, wenn gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            InteractionMode::DraggingAnnotation { .. } | InteractionMode::DraggingPoint { .. }
        )
    }

    /// Gibt `true` zurück, wenn der Modus diese Messung referenziert.
    pub fn references_measurement(&self, id: u64) -> bool {
        match self {
            InteractionMode::PointSelected { measurement_id, .. }
            | InteractionMode::DraggingPoint { measurement_id, .. } => *measurement_id == id,
            _ => false,
        }
    }

    /// Gibt `true` zurück, wenn der Modus diese Annotation referenziert.
    pub fn references_annotation(&self, id: u64) -> bool {
        match self {
            InteractionMode::AnnotationSelected { annotation_id }
            | InteractionMode::DraggingAnnotation { annotation_id } => *annotation_id == id,
            _ => false,
        }
    }
}

/// Transformationsart des Gizmos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Ziel, an dem der Manipulations-Handle hängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoTarget {
    /// Der gesamte Scan (Standard ohne Selektion)
    Scan,
    /// Eine selektierte Annotation
    Annotation { annotation_id: u64 },
    /// Ein selektierter Messpunkt
    MeasurementPoint {
        measurement_id: u64,
        point_index: usize,
    },
}

/// Bestimmt das Gizmo-Ziel aus dem Interaktionsmodus.
/// Explizite Punkt-/Annotations-Selektion hat Vorrang vor dem Scan.
pub fn resolve_gizmo_target(mode: &InteractionMode) -> GizmoTarget {
    match mode {
        InteractionMode::AnnotationSelected { annotation_id }
        | InteractionMode::DraggingAnnotation { annotation_id } => GizmoTarget::Annotation {
            annotation_id: *annotation_id,
        },
        InteractionMode::PointSelected {
            measurement_id,
            point_index,
        }
        | InteractionMode::DraggingPoint {
            measurement_id,
            point_index,
        } => GizmoTarget::MeasurementPoint {
            measurement_id: *measurement_id,
            point_index: *point_index,
        },
        InteractionMode::Idle => GizmoTarget::Scan,
    }
}

/// Zustand des Manipulations-Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GizmoState {
    /// Gizmo eingeblendet und aktiv
    pub enabled: bool,
    /// Translate / Rotate / Scale
    pub mode: GizmoMode,
    /// Snap-Raster aktiv (Modifier-Taste gehalten)
    pub snap_active: bool,
    /// Der Handle selbst wird gerade gezogen
    pub handle_dragging: bool,
}

/// Gesamter Interaktionszustand des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Exklusiver Selektions-/Drag-Modus
    pub mode: InteractionMode,
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Während eines Punkt-Drags geparktes Werkzeug (wird nach
    /// Drag-Ende wiederhergestellt)
    pub stashed_tool: Option<EditorTool>,
    /// Gizmo-Zustand
    pub gizmo: GizmoState,
}

impl InteractionState {
    /// Erstellt den Standard-Zustand (Select-Tool, kein Modus).
    pub fn new() -> Self {
        Self::default()
    }
}

//! Szenen-Zustand: Transform und Metadaten des geladenen Scans.

use crate::core::{SceneBounds, SceneTransform};

/// Zustand des geladenen Scans.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneState {
    /// Aktueller Transform des Scans (einziges bewegliches Szenen-Objekt)
    pub transform: SceneTransform,
    /// Gibt an, ob ein Scan geladen ist
    pub scan_loaded: bool,
    /// Bounding-Box des Scans (für Kamera-Framing)
    pub bounds: Option<SceneBounds>,
}

impl SceneState {
    /// Erstellt einen Zustand ohne geladenen Scan.
    pub fn new() -> Self {
        Self::default()
    }
}

//! Zentrale Konfiguration für den Scan-Annotation-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::MeasurementUnit;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pixel-Schwelle für die Klick/Drag-Unterscheidung: darüber gilt die
/// Geste als Kamera-Orbit und wird nicht als Platzierung interpretiert.
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0;
/// Pick-Radius (Welteinheiten) für Marker-Selektion und Drag-Start.
pub const MARKER_PICK_RADIUS: f32 = 0.15;

// ── Gizmo ───────────────────────────────────────────────────────────

/// Raster für Translation bei aktivem Snap (Welteinheiten).
pub const GIZMO_TRANSLATE_SNAP: f32 = 0.1;
/// Raster für Rotation bei aktivem Snap (Grad).
pub const GIZMO_ROTATE_SNAP_DEG: f32 = 15.0;
/// Raster für Skalierung bei aktivem Snap.
pub const GIZMO_SCALE_SNAP: f32 = 0.1;

// ── Kamera ──────────────────────────────────────────────────────────

/// Dauer eines angeforderten Kamerafluges in Sekunden.
pub const CAMERA_FLIGHT_DURATION_S: f32 = 0.8;
/// Fallback-Distanz der Kamera zum Ziel bei degenerierten Szenen-Bounds.
pub const DEFAULT_FRAME_DISTANCE: f32 = 5.0;
/// Sicherheitsfaktor beim Einpassen der Szene in den Viewport.
pub const FRAME_PADDING_FACTOR: f32 = 1.4;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `scan_annotation_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pixel-Schwelle für Klick/Drag-Unterscheidung
    pub click_drag_threshold_px: f32,
    /// Pick-Radius für Marker-Selektion in Welteinheiten
    pub marker_pick_radius: f32,

    // ── Gizmo ───────────────────────────────────────────────────
    /// Translations-Raster bei aktivem Snap (Welteinheiten)
    pub gizmo_translate_snap: f32,
    /// Rotations-Raster bei aktivem Snap (Grad)
    pub gizmo_rotate_snap_deg: f32,
    /// Skalierungs-Raster bei aktivem Snap
    pub gizmo_scale_snap: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Dauer von Kameraflügen in Sekunden
    pub camera_flight_duration_s: f32,
    /// Fallback-Distanz zum Ziel bei degenerierten Szenen-Bounds
    pub default_frame_distance: f32,

    // ── Messungen ───────────────────────────────────────────────
    /// Standard-Einheit neuer Messungen
    #[serde(default)]
    pub default_unit: MeasurementUnit,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            click_drag_threshold_px: CLICK_DRAG_THRESHOLD_PX,
            marker_pick_radius: MARKER_PICK_RADIUS,

            gizmo_translate_snap: GIZMO_TRANSLATE_SNAP,
            gizmo_rotate_snap_deg: GIZMO_ROTATE_SNAP_DEG,
            gizmo_scale_snap: GIZMO_SCALE_SNAP,

            camera_flight_duration_s: CAMERA_FLIGHT_DURATION_S,
            default_frame_distance: DEFAULT_FRAME_DISTANCE,

            default_unit: MeasurementUnit::Meters,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.click_drag_threshold_px, CLICK_DRAG_THRESHOLD_PX);
        assert_eq!(opts.marker_pick_radius, MARKER_PICK_RADIUS);
        assert_eq!(opts.default_unit, MeasurementUnit::Meters);
    }

    #[test]
    fn toml_round_trip_preserves_options() {
        let mut opts = EditorOptions::default();
        opts.gizmo_rotate_snap_deg = 45.0;
        opts.default_unit = MeasurementUnit::Feet;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&text).expect("Parsen erwartet");

        assert_eq!(parsed, opts);
    }
}

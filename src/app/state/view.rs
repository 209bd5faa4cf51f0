//! View-State: Kamera-Pose, Orbit-Freigabe und Flug-Anforderungen.

use crate::core::{CameraFlight, ViewCamera};

/// Kamera- und Viewport-Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Aktuelle Kamera-Pose (von der Einbettung nach Orbit-Bewegungen
    /// zurückgeschrieben)
    pub camera: ViewCamera,
    /// Orbit-Steuerung freigegeben; während Marker- und Gizmo-Drags
    /// deaktiviert, damit Kamera und Drag nicht konkurrieren
    pub orbit_enabled: bool,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Angeforderter Kameraflug; die Einbettung konsumiert ihn über
    /// [`ViewState::take_requested_flight`] und animiert selbst
    pub requested_flight: Option<CameraFlight>,
}

impl ViewState {
    /// Erstellt den Standard-View-State.
    pub fn new() -> Self {
        Self {
            camera: ViewCamera::new(),
            orbit_enabled: true,
            viewport_size: [1280.0, 720.0],
            requested_flight: None,
        }
    }

    /// Entnimmt die ausstehende Flug-Anforderung.
    pub fn take_requested_flight(&mut self) -> Option<CameraFlight> {
        self.requested_flight.take()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

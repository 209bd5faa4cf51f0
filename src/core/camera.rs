//! Kamera-Pose für gespeicherte Ansichten und View-Snap.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kamera-Pose: Position, Blickziel und Öffnungswinkel.
///
/// Die eigentliche Orbit-Steuerung läuft in der Render-Schicht;
/// der Core hält nur die persistierbare Pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewCamera {
    /// Kamera-Position in Welt-Koordinaten
    pub position: Vec3,
    /// Blickziel in Welt-Koordinaten
    pub target: Vec3,
    /// Vertikaler Öffnungswinkel in Grad
    pub fov_deg: f32,
}

impl ViewCamera {
    /// Standard-Öffnungswinkel in Grad.
    pub const DEFAULT_FOV_DEG: f32 = 60.0;

    /// Erstellt die Standard-Kamera (leicht erhöhte Schrägsicht auf den Ursprung).
    pub fn new() -> Self {
        Self {
            position: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::ZERO,
            fov_deg: Self::DEFAULT_FOV_DEG,
        }
    }

    /// Distanz zwischen Kamera und Blickziel.
    pub fn target_distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Die sechs achsenparallelen Blickrichtungen für View-Snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewAxis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl ViewAxis {
    /// Richtungsvektor vom Blickziel zur Kamera-Position.
    pub fn direction(&self) -> Vec3 {
        match self {
            ViewAxis::PosX => Vec3::X,
            ViewAxis::NegX => Vec3::NEG_X,
            ViewAxis::PosY => Vec3::Y,
            ViewAxis::NegY => Vec3::NEG_Y,
            ViewAxis::PosZ => Vec3::Z,
            ViewAxis::NegZ => Vec3::NEG_Z,
        }
    }
}

/// Angeforderter Kameraflug zu einer Ziel-Pose.
///
/// Der Core schneidet nicht hart um, sondern hinterlegt die Anforderung
/// im View-State; die Einbettung animiert den Flug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    /// Ziel-Pose des Flugs
    pub camera: ViewCamera,
    /// Flugdauer in Sekunden
    pub duration_s: f32,
}

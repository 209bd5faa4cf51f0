//! Transform des geladenen Scans und Welt↔Lokal-Koordinatenbrücke.
//!
//! Der Scan ist das einzige Objekt der Szene mit veränderbarem Transform.
//! Entity-Positionen werden in Welt-Koordinaten persistiert; die
//! Render-Schicht hängt ihre Marker unter den Scan-Transform, damit sie
//! starr mit dem Scan mitbewegt werden.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position, Rotation und Skalierung des geladenen Scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    /// Translation in Welt-Koordinaten
    pub position: Vec3,
    /// Rotation als Quaternion
    pub rotation: Quat,
    /// Skalierung pro Achse (uniform oder nicht-uniform)
    pub scale: Vec3,
}

impl SceneTransform {
    /// Identitäts-Transform (unbewegter Scan).
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Lokal→Welt-Matrix des Scans.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Welt→Lokal-Matrix (Inverse von [`SceneTransform::matrix`]).
    pub fn inverse_matrix(&self) -> Mat4 {
        self.matrix().inverse()
    }

    /// Transformiert einen Welt-Punkt in den lokalen Raum des Scans.
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.inverse_matrix().transform_point3(point)
    }

    /// Transformiert einen lokalen Punkt des Scans in Welt-Koordinaten.
    /// Exakte Umkehrung von [`SceneTransform::world_to_local`].
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Achsenparallele Bounding-Box des geladenen Scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Größte Kantenlänge. 0.0 bei degenerierter (punktförmiger) Box.
    pub fn max_extent(&self) -> f32 {
        let size = self.max - self.min;
        size.x.max(size.y).max(size.z).max(0.0)
    }
}

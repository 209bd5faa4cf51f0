//! Oberflächen-Picking über die externe Render-Engine.
//!
//! Die Render-Engine selbst ist nicht Teil dieses Crates; sie wird nur
//! über [`SceneRaycaster`] angesprochen ("Ray von Kamera + Screen-Punkt,
//! nächster Oberflächen-Treffer").

use glam::{Vec2, Vec3};

use crate::core::ViewCamera;

/// Treffer eines Oberflächen-Raycasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Schnittpunkt in Welt-Koordinaten
    pub point: Vec3,
    /// Oberflächennormale am Schnittpunkt
    pub normal: Vec3,
}

/// Boundary zur externen Render-Engine.
///
/// `screen_ndc` ist der normalisierte Screen-Punkt in `[0, 1]²`
/// (Ursprung oben links), wie ihn das Input-Layer liefert.
pub trait SceneRaycaster {
    /// Nächster Treffer auf der Oberfläche des geladenen Scans.
    /// `None` bei Fehlschuss oder wenn kein Scan geladen ist.
    fn cast_ray(&self, camera: &ViewCamera, screen_ndc: Vec2) -> Option<SurfaceHit>;

    /// Generischer Szenen-Raycast (z.B. gegen die Bodenebene), als
    /// Fallback für Platzierungen ohne geladenen Scan.
    fn cast_fallback_ray(&self, camera: &ViewCamera, screen_ndc: Vec2) -> Option<SurfaceHit>;
}

/// Dünner Wrapper um den Raycaster mit der Pick-Semantik des Editors.
///
/// Während eines Drags wird pro Pointer-Event gepickt (Live-Feedback);
/// die autoritative Position entsteht erst beim finalen Pick am
/// Drag-Ende (Snap-on-Release) — Zwischenframes beeinflussen die
/// gespeicherte Position nicht.
pub struct SurfacePicker<'a> {
    raycaster: &'a dyn SceneRaycaster,
    scan_loaded: bool,
}

impl<'a> SurfacePicker<'a> {
    /// Erstellt einen Picker über dem Raycaster der Render-Engine.
    pub fn new(raycaster: &'a dyn SceneRaycaster, scan_loaded: bool) -> Self {
        Self {
            raycaster,
            scan_loaded,
        }
    }

    /// Nächster Punkt auf der Scan-Oberfläche, `None` bei Fehlschuss
    /// oder ohne geladenen Scan.
    pub fn pick(&self, camera: &ViewCamera, screen_ndc: Vec2) -> Option<SurfaceHit> {
        if !self.scan_loaded {
            return None;
        }
        self.raycaster.cast_ray(camera, screen_ndc)
    }

    /// Pick für Platzierungen: Scan-Oberfläche, sonst generischer
    /// Szenen-Raycast als Fallback.
    pub fn pick_or_fallback(&self, camera: &ViewCamera, screen_ndc: Vec2) -> Option<SurfaceHit> {
        if self.scan_loaded {
            self.raycaster.cast_ray(camera, screen_ndc)
        } else {
            self.raycaster.cast_fallback_ray(camera, screen_ndc)
        }
    }
}

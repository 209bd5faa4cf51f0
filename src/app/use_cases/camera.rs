//! Use-Case-Funktionen für Kamera-Steuerung: View-Snap und Framing.

use glam::Vec3;

use crate::app::AppState;
use crate::core::{CameraFlight, ViewAxis, ViewCamera};
use crate::shared::options::FRAME_PADDING_FACTOR;

/// Richtet die Kamera achsenparallel aus (View-Snap).
///
/// Die Kamera wird in aktueller Ziel-Distanz entlang der Achse
/// positioniert; statt eines harten Schnitts wird ein Kameraflug
/// angefordert. Degenerierte Distanz fällt auf die konfigurierte
/// Standard-Distanz zurück.
pub fn snap_to_axis(state: &mut AppState, axis: ViewAxis) {
    let target = state.view.camera.target;
    let mut distance = state.view.camera.target_distance();
    if distance <= 1e-4 {
        distance = state.options.default_frame_distance;
    }

    let camera = ViewCamera {
        position: target + axis.direction() * distance,
        target,
        fov_deg: state.view.camera.fov_deg,
    };
    state.view.requested_flight = Some(CameraFlight {
        camera,
        duration_s: state.options.camera_flight_duration_s,
    });
}

/// Passt die Kamera auf die Bounding-Box des Scans ein.
///
/// Degenerierte Bounds (kein Scan oder punktförmige Box) fallen auf
/// das Standard-Framing zurück statt einen Fehler zu werfen.
pub fn frame_scene(state: &mut AppState) {
    let (center, extent) = match state.scene.bounds {
        Some(bounds) => (bounds.center(), bounds.max_extent()),
        None => (Vec3::ZERO, 0.0),
    };

    let distance = if extent <= f32::EPSILON {
        state.options.default_frame_distance
    } else {
        let half_fov_tan = (state.view.camera.fov_deg.to_radians() * 0.5).tan().max(1e-3);
        (extent * 0.5 / half_fov_tan) * FRAME_PADDING_FACTOR
    };

    // Blickrichtung beibehalten, bei degenerierter Pose Schrägsicht
    let mut direction = (state.view.camera.position - state.view.camera.target).normalize_or_zero();
    if direction.length_squared() < 0.5 {
        direction = Vec3::ONE.normalize();
    }

    let camera = ViewCamera {
        position: center + direction * distance,
        target: center,
        fov_deg: state.view.camera.fov_deg,
    };
    state.view.requested_flight = Some(CameraFlight {
        camera,
        duration_s: state.options.camera_flight_duration_s,
    });

    log::info!(
        "Szene eingepasst: Zentrum ({:.1}, {:.1}, {:.1}), Distanz {:.2}",
        center.x,
        center.y,
        center.z,
        distance
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SceneBounds;
    use approx::assert_relative_eq;

    #[test]
    fn snap_keeps_target_distance_and_fov() {
        let mut state = AppState::new();
        state.view.camera = ViewCamera {
            position: Vec3::new(0.0, 0.0, 7.0),
            target: Vec3::ZERO,
            fov_deg: 45.0,
        };

        snap_to_axis(&mut state, ViewAxis::PosX);

        let flight = state
            .view
            .take_requested_flight()
            .expect("Kameraflug erwartet");
        assert_relative_eq!(flight.camera.position.x, 7.0, epsilon = 1e-5);
        assert_relative_eq!(flight.camera.position.y, 0.0, epsilon = 1e-5);
        assert_eq!(flight.camera.fov_deg, 45.0);
        assert_eq!(flight.camera.target, Vec3::ZERO);
    }

    #[test]
    fn snap_with_degenerate_distance_uses_default() {
        let mut state = AppState::new();
        state.view.camera.position = state.view.camera.target;

        snap_to_axis(&mut state, ViewAxis::NegY);

        let flight = state
            .view
            .take_requested_flight()
            .expect("Kameraflug erwartet");
        assert_relative_eq!(
            flight.camera.target_distance(),
            state.options.default_frame_distance,
            epsilon = 1e-4
        );
    }

    #[test]
    fn frame_scene_centers_on_bounds() {
        let mut state = AppState::new();
        state.scene.bounds = Some(SceneBounds {
            min: Vec3::new(-2.0, 0.0, -2.0),
            max: Vec3::new(2.0, 2.0, 2.0),
        });

        frame_scene(&mut state);

        let flight = state
            .view
            .take_requested_flight()
            .expect("Kameraflug erwartet");
        assert_eq!(flight.camera.target, Vec3::new(0.0, 1.0, 0.0));
        assert!(flight.camera.target_distance() > 2.0);
    }

    #[test]
    fn frame_scene_with_zero_bounds_falls_back_to_default() {
        let mut state = AppState::new();
        state.scene.bounds = Some(SceneBounds {
            min: Vec3::ONE,
            max: Vec3::ONE,
        });

        frame_scene(&mut state);

        let flight = state
            .view
            .take_requested_flight()
            .expect("Kameraflug erwartet");
        assert_relative_eq!(
            flight.camera.target_distance(),
            state.options.default_frame_distance,
            epsilon = 1e-4
        );
    }
}

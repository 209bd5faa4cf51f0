//! Reine Geometrie-Funktionen für Mess-Polylinien und Flächen.
//!
//! Alle Funktionen arbeiten auf Welt-Koordinaten und haben keine
//! Abhängigkeiten auf den App-State. `value` einer Messung wird
//! ausschließlich hier berechnet, nie unabhängig gesetzt.

use glam::Vec3;

/// Summe der euklidischen Distanzen zwischen aufeinanderfolgenden Punkten.
///
/// Mit genau 2 Punkten ist das die einfache Streckenlänge.
/// Weniger als 2 Punkte ergeben 0.0 (degenerierte Eingabe, kein Fehler).
pub fn polyline_length(points: &[Vec3]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}

/// Fläche eines Punkt-Fans ab `points[0]` (Fan-Triangulierung).
///
/// Summiert `cross(p[i] - origin, p[i+1] - origin)` als Vektor und
/// nimmt den halben Betrag. Verallgemeinert die planare Polygonfläche
/// auf nicht exakt koplanare Punktmengen — bewusste Toleranz für
/// verrauschte Scan-Daten.
///
/// Weniger als 3 Punkte ergeben 0.0.
pub fn fan_area(points: &[Vec3]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let origin = points[0];
    let mut sum = Vec3::ZERO;
    for pair in points[1..].windows(2) {
        sum += (pair[0] - origin).cross(pair[1] - origin);
    }

    sum.length() / 2.0
}

/// Ergebnis der Entfernung eines Segments aus einer Polylinie.
///
/// Segment `i` verbindet `points[i]` und `points[i+1]`.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentSplit {
    /// Segment-Index außerhalb `[0, n-2]` — Eingabe wird ignoriert
    Rejected,
    /// Einziges Segment entfernt — die gesamte Messung entfällt
    Delete,
    /// Erstes oder letztes Segment entfernt — der angrenzende Endpunkt fällt weg
    Truncate(Vec<Vec3>),
    /// Mittleres Segment entfernt — die Polylinie zerfällt in zwei Teile
    Split { left: Vec<Vec3>, right: Vec<Vec3> },
}

/// Bestimmt das Ergebnis der Entfernung von Segment `segment_index`.
///
/// Drei Ausgänge: Delete (genau 2 Punkte), Truncate (Randsegment),
/// Split (mittleres Segment, beide Hälften behalten ≥ 2 Punkte).
pub fn split_points_at_segment(points: &[Vec3], segment_index: usize) -> SegmentSplit {
    let n = points.len();
    if n < 2 || segment_index > n - 2 {
        return SegmentSplit::Rejected;
    }

    if n == 2 {
        return SegmentSplit::Delete;
    }

    if segment_index == 0 {
        return SegmentSplit::Truncate(points[1..].to_vec());
    }

    if segment_index == n - 2 {
        return SegmentSplit::Truncate(points[..n - 1].to_vec());
    }

    SegmentSplit::Split {
        left: points[..=segment_index].to_vec(),
        right: points[segment_index + 1..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polyline_length_of_two_points_is_segment_distance() {
        let points = [Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)];
        assert_relative_eq!(polyline_length(&points), 5.0);
    }

    #[test]
    fn polyline_length_is_additive_over_segments() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(1.0, 2.0, 2.0);
        let total = polyline_length(&[a, b, c]);
        assert_relative_eq!(total, a.distance(b) + b.distance(c), epsilon = 1e-6);
    }

    #[test]
    fn polyline_length_of_degenerate_input_is_zero() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[Vec3::ONE]), 0.0);
    }

    #[test]
    fn fan_area_of_unit_square_is_one() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        assert_relative_eq!(fan_area(&points), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn fan_area_of_triangle() {
        // Rechtwinkliges Dreieck mit Katheten 2 und 3
        let points = [
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
        ];
        assert_relative_eq!(fan_area(&points), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn fan_area_tolerates_non_planar_points() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.1, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.1, 1.0),
        ];
        let area = fan_area(&points);
        assert!(area > 0.9 && area < 1.1);
    }

    #[test]
    fn removing_only_segment_deletes_measurement() {
        let points = [Vec3::ZERO, Vec3::ONE];
        assert_eq!(split_points_at_segment(&points, 0), SegmentSplit::Delete);
    }

    #[test]
    fn removing_first_segment_drops_first_point() {
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        match split_points_at_segment(&p, 0) {
            SegmentSplit::Truncate(rest) => assert_eq!(rest, vec![p[1], p[2], p[3]]),
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn removing_last_segment_drops_last_point() {
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        match split_points_at_segment(&p, 1) {
            SegmentSplit::Truncate(rest) => assert_eq!(rest, vec![p[0], p[1]]),
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn removing_middle_segment_splits_into_two_polylines() {
        let p = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        match split_points_at_segment(&p, 1) {
            SegmentSplit::Split { left, right } => {
                assert_eq!(left, vec![p[0], p[1]]);
                assert_eq!(right, vec![p[2], p[3]]);
            }
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_segment_index_is_rejected() {
        let p = [Vec3::ZERO, Vec3::ONE, Vec3::new(2.0, 2.0, 2.0)];
        assert_eq!(split_points_at_segment(&p, 2), SegmentSplit::Rejected);
        assert_eq!(split_points_at_segment(&p, 99), SegmentSplit::Rejected);
        assert_eq!(split_points_at_segment(&[], 0), SegmentSplit::Rejected);
    }
}

//! Mess-Entities: Distanz-Polylinien und Flächen-Messungen.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry;

/// Art einer Messung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Polylinie, Wert = Gesamtlänge (≥ 2 Punkte)
    Distance,
    /// Punkt-Fan, Wert = Fläche (≥ 3 Punkte)
    Area,
}

impl MeasurementKind {
    /// Minimale Punktzahl für eine gültige Messung dieser Art.
    pub fn min_points(&self) -> usize {
        match self {
            MeasurementKind::Distance => 2,
            MeasurementKind::Area => 3,
        }
    }
}

/// Anzeige-Einheit einer Messung. Gespeichert wird immer in Metern
/// (Welt-Einheiten); die Umrechnung betrifft nur die Darstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    #[default]
    Meters,
    Centimeters,
    Feet,
    Inches,
}

impl MeasurementUnit {
    /// Umrechnungsfaktor von Metern in diese Einheit.
    pub fn factor_from_meters(&self) -> f32 {
        match self {
            MeasurementUnit::Meters => 1.0,
            MeasurementUnit::Centimeters => 100.0,
            MeasurementUnit::Feet => 3.280_84,
            MeasurementUnit::Inches => 39.370_08,
        }
    }

    /// Einheiten-Suffix für Beschriftungen.
    pub fn suffix(&self) -> &'static str {
        match self {
            MeasurementUnit::Meters => "m",
            MeasurementUnit::Centimeters => "cm",
            MeasurementUnit::Feet => "ft",
            MeasurementUnit::Inches => "in",
        }
    }
}

/// Eine abgeschlossene Messung mit Punkten in Welt-Koordinaten.
///
/// `value` ist immer das Ergebnis der Geometrie-Neuberechnung aus
/// `points` — Mutationen laufen über [`Measurement::set_points`]
/// bzw. [`Measurement::set_point`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Entity-ID
    pub id: u64,
    /// Distanz oder Fläche
    pub kind: MeasurementKind,
    /// Geordnete Punktfolge in Welt-Koordinaten
    pub points: Vec<Vec3>,
    /// Abgeleiteter Wert (Länge bzw. Fläche) in Welt-Einheiten
    pub value: f32,
    /// Anzeige-Einheit
    pub unit: MeasurementUnit,
    /// Optionale Beschriftung
    pub label: Option<String>,
    /// Ersteller (User-ID der Session)
    pub created_by: String,
    /// Erstellungszeitpunkt (Epoch-Millisekunden, von der Einbettung geliefert)
    pub created_at: f64,
}

impl Measurement {
    /// Erstellt eine Messung und berechnet `value` aus den Punkten.
    pub fn new(
        id: u64,
        kind: MeasurementKind,
        points: Vec<Vec3>,
        unit: MeasurementUnit,
        created_by: String,
        created_at: f64,
    ) -> Self {
        let mut measurement = Self {
            id,
            kind,
            points,
            value: 0.0,
            unit,
            label: None,
            created_by,
            created_at,
        };
        measurement.recompute_value();
        measurement
    }

    /// Ersetzt alle Punkte und berechnet `value` neu.
    pub fn set_points(&mut self, points: Vec<Vec3>) {
        self.points = points;
        self.recompute_value();
    }

    /// Ersetzt einen einzelnen Punkt und berechnet `value` neu.
    /// Index außerhalb der Punktfolge ist ein No-op.
    pub fn set_point(&mut self, index: usize, position: Vec3) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        *point = position;
        self.recompute_value();
        true
    }

    /// Anzahl der Segmente der Polylinie.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    fn recompute_value(&mut self) {
        self.value = match self.kind {
            MeasurementKind::Distance => geometry::polyline_length(&self.points),
            MeasurementKind::Area => geometry::fan_area(&self.points),
        };
    }
}

/// Transiente, noch nicht finalisierte Messung.
///
/// Existiert höchstens einmal, zwischen "Messung starten" und
/// Finalisieren bzw. Abbrechen.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMeasurement {
    /// Art der entstehenden Messung
    pub kind: MeasurementKind,
    /// Bisher gesammelte Punkte in Welt-Koordinaten
    pub points: Vec<Vec3>,
}

impl PendingMeasurement {
    /// Startet eine leere Punkt-Sammlung.
    pub fn new(kind: MeasurementKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    /// Gibt `true` zurück, wenn genug Punkte zum Finalisieren vorliegen.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= self.kind.min_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_measurement_computes_value_from_points() {
        let m = Measurement::new(
            1,
            MeasurementKind::Distance,
            vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)],
            MeasurementUnit::Meters,
            "user-a".into(),
            0.0,
        );
        assert_relative_eq!(m.value, 2.0);
    }

    #[test]
    fn set_point_recomputes_value() {
        let mut m = Measurement::new(
            1,
            MeasurementKind::Distance,
            vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
            MeasurementUnit::Meters,
            "user-a".into(),
            0.0,
        );
        assert!(m.set_point(1, Vec3::new(5.0, 0.0, 0.0)));
        assert_relative_eq!(m.value, 5.0);
        assert!(!m.set_point(7, Vec3::ZERO));
    }

    #[test]
    fn repeated_set_points_is_idempotent() {
        let points = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 1.0),
        ];
        let mut m = Measurement::new(
            1,
            MeasurementKind::Distance,
            points.clone(),
            MeasurementUnit::Meters,
            "user-a".into(),
            0.0,
        );
        let first = m.value;
        m.set_points(points.clone());
        m.set_points(points);
        assert_eq!(m.value, first);
    }

    #[test]
    fn pending_completeness_follows_kind_minimum() {
        let mut pending = PendingMeasurement::new(MeasurementKind::Area);
        pending.points.push(Vec3::ZERO);
        pending.points.push(Vec3::X);
        assert!(!pending.is_complete());
        pending.points.push(Vec3::Z);
        assert!(pending.is_complete());
    }
}

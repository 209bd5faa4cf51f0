//! Spatial-Index (KD-Tree) für Marker-Hit-Tests im Viewport.
//!
//! Indexiert die Welt-Positionen aller Messpunkte und Annotationen,
//! damit das Input-Layer Klicks und Drag-Starts in O(log n) einem
//! Marker zuordnen kann.

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

use super::{Annotation, Measurement};

/// Referenz auf einen anklickbaren Marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRef {
    /// Ein einzelner Punkt einer Messung
    MeasurementPoint {
        measurement_id: u64,
        point_index: usize,
    },
    /// Der Ankerpunkt einer Annotation
    Annotation { annotation_id: u64 },
}

/// Ergebnis einer Distanzabfrage gegen den Marker-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMatch {
    /// Getroffener Marker
    pub marker: MarkerRef,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Marker-Positionen.
#[derive(Debug, Clone)]
pub struct MarkerIndex {
    tree: KdTree<f64, 3>,
    markers: Vec<MarkerRef>,
}

impl MarkerIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            markers: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus Messungen und Annotationen.
    pub fn from_entities<'a>(
        measurements: impl Iterator<Item = &'a Measurement>,
        annotations: impl Iterator<Item = &'a Annotation>,
    ) -> Self {
        let mut markers = Vec::new();
        let mut entries: Vec<[f64; 3]> = Vec::new();

        for measurement in measurements {
            for (point_index, point) in measurement.points.iter().enumerate() {
                markers.push(MarkerRef::MeasurementPoint {
                    measurement_id: measurement.id,
                    point_index,
                });
                entries.push(to_entry(*point));
            }
        }

        for annotation in annotations {
            markers.push(MarkerRef::Annotation {
                annotation_id: annotation.id,
            });
            entries.push(to_entry(annotation.position));
        }

        Self {
            tree: (&entries).into(),
            markers,
        }
    }

    /// Gibt die Anzahl indexierter Marker zurück.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Findet den nächsten Marker zur gegebenen Welt-Position.
    pub fn nearest(&self, query: Vec3) -> Option<MarkerMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&to_entry(query));
        let marker = *self.markers.get(result.item as usize)?;

        Some(MarkerMatch {
            marker,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Marker innerhalb eines Radius, sortiert nach Distanz.
    pub fn within_radius(&self, query: Vec3, radius: f32) -> Vec<MarkerMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&to_entry(query), (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let marker = *self.markers.get(entry.item as usize)?;
                Some(MarkerMatch {
                    marker,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

fn to_entry(point: Vec3) -> [f64; 3] {
    [point.x as f64, point.y as f64, point.z as f64]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnnotationKind, MeasurementKind, MeasurementUnit};

    fn sample_entities() -> (Vec<Measurement>, Vec<Annotation>) {
        let measurement = Measurement::new(
            1,
            MeasurementKind::Distance,
            vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
            MeasurementUnit::Meters,
            "user-a".into(),
            0.0,
        );
        let annotation = Annotation::new(
            2,
            AnnotationKind::Pin,
            Vec3::new(4.0, 3.0, 0.0),
            "Pin".into(),
            "user-a".into(),
            0.0,
        );
        (vec![measurement], vec![annotation])
    }

    #[test]
    fn nearest_returns_expected_marker() {
        let (measurements, annotations) = sample_entities();
        let index = MarkerIndex::from_entities(measurements.iter(), annotations.iter());

        let hit = index
            .nearest(Vec3::new(3.9, 2.9, 0.0))
            .expect("Treffer erwartet");

        assert_eq!(hit.marker, MarkerRef::Annotation { annotation_id: 2 });
        assert!(hit.distance < 0.2);
    }

    #[test]
    fn nearest_resolves_individual_measurement_points() {
        let (measurements, annotations) = sample_entities();
        let index = MarkerIndex::from_entities(measurements.iter(), annotations.iter());

        let hit = index
            .nearest(Vec3::new(9.8, 0.1, 0.0))
            .expect("Treffer erwartet");

        assert_eq!(
            hit.marker,
            MarkerRef::MeasurementPoint {
                measurement_id: 1,
                point_index: 1
            }
        );
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let (measurements, annotations) = sample_entities();
        let index = MarkerIndex::from_entities(measurements.iter(), annotations.iter());

        let matches = index.within_radius(Vec3::ZERO, 6.0);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].distance <= matches[1].distance);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = MarkerIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec3::ZERO).is_none());
    }
}

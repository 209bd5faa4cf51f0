//! Persistenz-Rand: Outbox-Flush, Fehlschläge ohne Rollback,
//! Remote-Change-Einfaltung.

use anyhow::anyhow;
use glam::Vec3;
use scan_annotation_editor::{
    flush_outbox, Annotation, AnnotationReply, AppController, AppIntent, AppState, EditorTool,
    Measurement, MeasurementKind, MeasurementUnit, PersistenceGateway, RemoteChange, RemoteId,
    SavedView,
};

/// Gateway-Double: protokolliert Aufrufe, optional mit Fehlschlag.
#[derive(Default)]
struct RecordingGateway {
    calls: Vec<String>,
    fail_all: bool,
}

impl RecordingGateway {
    fn result(&mut self, call: String) -> anyhow::Result<RemoteId> {
        self.calls.push(call);
        if self.fail_all {
            Err(anyhow!("Dienst nicht erreichbar"))
        } else {
            Ok(format!("remote-{}", self.calls.len()))
        }
    }

    fn unit_result(&mut self, call: String) -> anyhow::Result<()> {
        self.result(call).map(|_| ())
    }
}

impl PersistenceGateway for RecordingGateway {
    fn create_measurement(&mut self, m: &Measurement) -> anyhow::Result<RemoteId> {
        self.result(format!("create_measurement {}", m.id))
    }
    fn update_measurement(&mut self, m: &Measurement) -> anyhow::Result<()> {
        self.unit_result(format!("update_measurement {}", m.id))
    }
    fn delete_measurement(&mut self, id: u64) -> anyhow::Result<()> {
        self.unit_result(format!("delete_measurement {id}"))
    }
    fn create_annotation(&mut self, a: &Annotation) -> anyhow::Result<RemoteId> {
        self.result(format!("create_annotation {}", a.id))
    }
    fn update_annotation(&mut self, a: &Annotation) -> anyhow::Result<()> {
        self.unit_result(format!("update_annotation {}", a.id))
    }
    fn delete_annotation(&mut self, id: u64) -> anyhow::Result<()> {
        self.unit_result(format!("delete_annotation {id}"))
    }
    fn create_reply(&mut self, annotation_id: u64, reply: &AnnotationReply) -> anyhow::Result<RemoteId> {
        self.result(format!("create_reply {annotation_id}/{}", reply.id))
    }
    fn delete_reply(&mut self, annotation_id: u64, reply_id: u64) -> anyhow::Result<()> {
        self.unit_result(format!("delete_reply {annotation_id}/{reply_id}"))
    }
    fn create_saved_view(&mut self, v: &SavedView) -> anyhow::Result<RemoteId> {
        self.result(format!("create_saved_view {}", v.id))
    }
    fn update_saved_view(&mut self, v: &SavedView) -> anyhow::Result<()> {
        self.unit_result(format!("update_saved_view {}", v.id))
    }
    fn delete_saved_view(&mut self, id: u64) -> anyhow::Result<()> {
        self.unit_result(format!("delete_saved_view {id}"))
    }
}

fn finalize_distance(controller: &mut AppController, state: &mut AppState) -> u64 {
    controller
        .handle_intent(
            state,
            AppIntent::SetToolRequested {
                tool: EditorTool::MeasureDistance,
            },
        )
        .expect("SetToolRequested sollte ohne Fehler durchlaufen");
    for p in [Vec3::ZERO, Vec3::X] {
        controller
            .handle_intent(state, AppIntent::MeasurePointPlaced { world_pos: p })
            .expect("MeasurePointPlaced sollte ohne Fehler durchlaufen");
    }
    controller
        .handle_intent(state, AppIntent::FinalizeMeasurementRequested)
        .expect("FinalizeMeasurementRequested sollte ohne Fehler durchlaufen");
    *state
        .store
        .measurements
        .keys()
        .last()
        .expect("Messung erwartet")
}

#[test]
fn test_flush_sends_store_mutations_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut gateway = RecordingGateway::default();

    let id = finalize_distance(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::MeasurementLabelEdited {
                id,
                label: Some("Wandlänge".into()),
            },
        )
        .expect("MeasurementLabelEdited sollte ohne Fehler durchlaufen");

    let flushed = flush_outbox(&state.store, &mut state.outbox, &mut gateway);

    assert_eq!(flushed, 2);
    assert_eq!(
        gateway.calls,
        vec![
            format!("create_measurement {id}"),
            format!("update_measurement {id}")
        ]
    );
    assert!(state.outbox.is_empty());
}

#[test]
fn test_persist_failure_keeps_local_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut gateway = RecordingGateway {
        fail_all: true,
        ..RecordingGateway::default()
    };

    let id = finalize_distance(&mut controller, &mut state);
    let flushed = flush_outbox(&state.store, &mut state.outbox, &mut gateway);

    // Fehlschlag: nichts übertragen, aber der lokale Stand bleibt
    assert_eq!(flushed, 0);
    assert!(state.store.measurements.contains_key(&id));
    // Kein Retry: die Outbox ist geleert, nicht erneut befüllt
    assert!(state.outbox.is_empty());

    // Die Einbettung meldet den Fehlschlag nur zur Diagnose
    controller
        .handle_intent(
            &mut state,
            AppIntent::PersistFailureReported {
                description: "create_measurement: Dienst nicht erreichbar".into(),
            },
        )
        .expect("PersistFailureReported sollte ohne Fehler durchlaufen");
    assert!(state.store.measurements.contains_key(&id));
}

#[test]
fn test_create_then_delete_before_flush_skips_create() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut gateway = RecordingGateway::default();

    let id = finalize_distance(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::DeleteMeasurementRequested { id })
        .expect("DeleteMeasurementRequested sollte ohne Fehler durchlaufen");

    flush_outbox(&state.store, &mut state.outbox, &mut gateway);

    // Create auf gelöschtem Entity wird still übersprungen
    assert_eq!(gateway.calls, vec![format!("delete_measurement {id}")]);
}

#[test]
fn test_remote_insert_folds_in_only_when_absent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let local_id = finalize_distance(&mut controller, &mut state);

    // Echo des eigenen Inserts: wird übersprungen
    let mut echo = state.store.measurements[&local_id].clone();
    echo.created_by = "fremd".into();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteChangeReceived {
                change: RemoteChange::MeasurementInserted { measurement: echo },
            },
        )
        .expect("RemoteChangeReceived sollte ohne Fehler durchlaufen");
    assert_eq!(state.store.measurements[&local_id].created_by, "local");

    // Unbekanntes Insert eines anderen Akteurs: wird übernommen
    let remote = Measurement::new(
        500,
        MeasurementKind::Distance,
        vec![Vec3::ZERO, Vec3::Z],
        MeasurementUnit::Meters,
        "user-b".into(),
        2000.0,
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteChangeReceived {
                change: RemoteChange::MeasurementInserted {
                    measurement: remote,
                },
            },
        )
        .expect("RemoteChangeReceived sollte ohne Fehler durchlaufen");

    assert_eq!(state.measurement_count(), 2);
    // Einfalten erzeugt keine neuen Persistenz-Operationen (kein Rück-Echo)
    let ops_before = state.outbox.len();
    assert_eq!(ops_before, 1, "nur das lokale Create liegt an");
}

#[test]
fn test_remote_delete_clears_referencing_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let id = finalize_distance(&mut controller, &mut state);
    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerDragStarted {
                marker: scan_annotation_editor::MarkerRef::MeasurementPoint {
                    measurement_id: id,
                    point_index: 0,
                },
            },
        )
        .expect("MarkerDragStarted sollte ohne Fehler durchlaufen");
    assert!(!state.view.orbit_enabled);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoteChangeReceived {
                change: RemoteChange::MeasurementDeleted { id },
            },
        )
        .expect("RemoteChangeReceived sollte ohne Fehler durchlaufen");

    assert_eq!(state.measurement_count(), 0);
    assert!(state.view.orbit_enabled);
}

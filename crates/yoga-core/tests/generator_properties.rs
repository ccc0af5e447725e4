use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use yoga_core::{generate_flow, generate_flow_with, CancelFlag, InMemoryPoseLookup, InstantPacer, Pacer, PhaseEvent,
                PhaseKind, PhaseSink, PoseLookup, RecordingSink, SessionError, SessionOutcome, SessionReport,
                SessionRunner, SessionTiming};
use yoga_domain::{Chakra, Difficulty, Pose};

fn catalog(counts: &[(Chakra, i32)]) -> InMemoryPoseLookup {
    let mut id = 0;
    let mut poses = Vec::new();
    for (chakra, n) in counts {
        for i in 0..*n {
            id += 1;
            poses.push(Pose::new(id, format!("{chakra} #{i}"), *chakra, Difficulty::Easy));
        }
    }
    InMemoryPoseLookup::new(poses)
}

/// Pose 3 + transición 1 = costo 4 por pose.
fn cost_four() -> SessionTiming {
    SessionTiming { breath_seconds: 2,
                    pose_seconds: 3,
                    transition_seconds: 1,
                    rest_seconds: 2,
                    tick_millis: 0 }
}

#[test]
fn fewer_than_three_matching_poses_fails_before_any_phase() {
    let lookup = catalog(&[(Chakra::Crown, 2), (Chakra::Root, 10)]);
    let err = generate_flow(&lookup, "Crown", 30).unwrap_err();
    assert_eq!(err,
               SessionError::InsufficientPoses { chakra: "Crown".into(),
                                                 found: 2,
                                                 required: 3 });
}

#[test]
fn unknown_chakra_and_empty_table_reduce_to_insufficient_poses() {
    let lookup = catalog(&[(Chakra::Root, 5)]);
    assert!(generate_flow(&lookup, "Spleen", 10).unwrap_err().is_insufficient_poses());
    let empty = InMemoryPoseLookup::default();
    for c in Chakra::ALL {
        let err = generate_flow(&empty, c.as_str(), 10).unwrap_err();
        assert!(err.is_insufficient_poses(), "{c}: {err}");
    }
}

#[test]
fn no_pose_repeats_within_a_run() {
    let lookup = catalog(&[(Chakra::Heart, 7), (Chakra::Throat, 7)]);
    for seed in 0..50 {
        let session = generate_flow_with(&lookup, "Heart", 60, cost_four(), StdRng::seed_from_u64(seed)).unwrap();
        let ids: Vec<i32> = session.filter_map(|p| p.pose.map(|pose| pose.id())).collect();
        let unique: HashSet<i32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "seed {seed} repeated a pose: {ids:?}");
        assert!(ids.len() <= 7);
    }
}

#[test]
fn only_requested_chakra_is_used() {
    let lookup = catalog(&[(Chakra::Sacral, 4), (Chakra::Heart, 9)]);
    let session = generate_flow_with(&lookup, "sacral", 60, cost_four(), StdRng::seed_from_u64(11)).unwrap();
    for phase in session.filter(|p| p.kind == PhaseKind::Pose) {
        assert_eq!(phase.pose.unwrap().chakra(), Chakra::Sacral);
    }
}

#[test]
fn pool_exhaustion_ends_the_loop_early() {
    // 5 poses * 4 = 20 < 60: se agota el pool antes del objetivo.
    let lookup = catalog(&[(Chakra::Root, 5)]);
    let mut session = generate_flow_with(&lookup, "Root", 1, cost_four(), StdRng::seed_from_u64(7)).unwrap();
    let poses = session.by_ref().filter(|p| p.kind == PhaseKind::Pose).count();
    assert_eq!(poses, 5);
    assert_eq!(session.elapsed_seconds(), 20);
    assert_eq!(session.remaining_candidates(), 0);
}

#[test]
fn target_duration_caps_the_loop() {
    // 60 / 4 = 15 poses como máximo aunque haya 20 disponibles.
    let lookup = catalog(&[(Chakra::Root, 20)]);
    let mut session = generate_flow_with(&lookup, "Root", 1, cost_four(), StdRng::seed_from_u64(7)).unwrap();
    let poses = session.by_ref().filter(|p| p.kind == PhaseKind::Pose).count();
    assert_eq!(poses, 15);
    assert!(session.elapsed_seconds() >= session.target_seconds());
    assert_eq!(session.remaining_candidates(), 5);
}

#[test]
fn runner_ticks_every_phase_down_to_zero() {
    let lookup = catalog(&[(Chakra::ThirdEye, 4)]);
    let session = generate_flow_with(&lookup, "Third Eye", 1, cost_four(), StdRng::seed_from_u64(2)).unwrap();
    let mut sink = RecordingSink::default();
    let mut runner = SessionRunner::new(InstantPacer::default());
    let report = runner.run(session, &mut sink);

    let phases: Vec<_> = sink.started_phases().into_iter().cloned().collect();
    assert_eq!(phases.len(), 2 + 4 + 1);
    for phase in &phases {
        let ticks = sink.ticks_for(phase.index);
        let expected: Vec<u64> = (0..=phase.countdown_seconds).rev().collect();
        assert_eq!(ticks, expected, "phase {} ticks", phase.index);
    }
    assert_eq!(phases.last().map(|p| p.kind), Some(PhaseKind::Rest));

    // 2 respiraciones * 2 + 4 poses * (3 + 1) + savasana 2
    assert_eq!(runner.pacer().waited_units, 4 + 16 + 2);
    assert_eq!(report.outcome, SessionOutcome::Completed);
    assert_eq!(report.poses.len(), 4);
    assert_eq!(report.phases_completed, 7);
    assert_eq!(sink.report(), Some(&report));
}

/// Pacer que dispara la cancelación después de `after` unidades.
struct CancelAfter {
    flag: CancelFlag,
    after: u64,
    waited: u64,
}

impl Pacer for CancelAfter {
    fn wait_units(&mut self, units: u64) {
        self.waited += units;
        if self.waited >= self.after {
            self.flag.cancel();
        }
    }
}

#[test]
fn cancellation_stops_at_next_tick_and_reports_it() {
    let lookup = catalog(&[(Chakra::Heart, 5)]);
    let session = generate_flow_with(&lookup, "Heart", 10, cost_four(), StdRng::seed_from_u64(4)).unwrap();
    let flag = CancelFlag::new();
    let pacer = CancelAfter { flag: flag.clone(),
                              after: 6,
                              waited: 0 };
    let mut runner = SessionRunner::new(pacer).with_cancel(flag.clone());
    let mut sink = RecordingSink::default();
    let report = runner.run(session, &mut sink);

    assert_eq!(report.outcome, SessionOutcome::Cancelled);
    // Respiraciones (2 + 2 unidades) completas; la primera pose se corta.
    assert_eq!(report.phases_completed, 2);
    assert_eq!(sink.started_phases().len(), 3);
    assert!(sink.started_phases().iter().all(|p| p.kind != PhaseKind::Rest));
    assert!(sink.report().is_some());
}

/// Sink que cancela al terminar la fase `index`.
struct CancelOnFinish {
    flag: CancelFlag,
    index: usize,
    inner: RecordingSink,
}

impl PhaseSink for CancelOnFinish {
    fn phase_started(&mut self, phase: &PhaseEvent) { self.inner.phase_started(phase) }

    fn tick(&mut self, phase: &PhaseEvent, remaining: u64) { self.inner.tick(phase, remaining) }

    fn phase_finished(&mut self, phase: &PhaseEvent) {
        self.inner.phase_finished(phase);
        if phase.index == self.index {
            self.flag.cancel();
        }
    }

    fn session_finished(&mut self, report: &SessionReport) { self.inner.session_finished(report) }
}

#[test]
fn cancel_between_phases_does_not_draw_the_next_pose() {
    let lookup = catalog(&[(Chakra::Root, 5)]);
    let session = generate_flow_with(&lookup, "Root", 10, cost_four(), StdRng::seed_from_u64(3)).unwrap();
    let flag = CancelFlag::new();
    // Índice 1 = exhalación; la cancelación llega antes de la primera pose.
    let mut sink = CancelOnFinish { flag: flag.clone(),
                                    index: 1,
                                    inner: RecordingSink::default() };
    let report = SessionRunner::new(InstantPacer::default()).with_cancel(flag)
                                                            .run(session, &mut sink);

    assert_eq!(report.outcome, SessionOutcome::Cancelled);
    assert_eq!(report.phases_completed, 2);
    assert_eq!(report.elapsed_seconds, 0);
    assert!(report.poses.is_empty());
    assert_eq!(sink.inner.started_phases().len(), 2);
}

#[test]
fn oversized_timings_saturate_the_accumulator() {
    let timing = SessionTiming { pose_seconds: u64::MAX,
                                 transition_seconds: 10,
                                 ..cost_four() };
    let lookup = catalog(&[(Chakra::Root, 5)]);
    let mut session = generate_flow_with(&lookup, "Root", 10, timing, StdRng::seed_from_u64(1)).unwrap();
    let poses = session.by_ref().filter(|p| p.kind == PhaseKind::Pose).count();
    assert_eq!(poses, 1);
    assert_eq!(session.elapsed_seconds(), u64::MAX);
}

struct FailingLookup;

impl PoseLookup for FailingLookup {
    fn list_poses_by_chakra(&self, _chakra: Chakra) -> Result<Vec<Pose>, SessionError> {
        Err(SessionError::Lookup("database is locked".into()))
    }
}

#[test]
fn lookup_failures_are_not_masked_as_insufficient_poses() {
    let err = generate_flow(&FailingLookup, "Root", 10).unwrap_err();
    assert_eq!(err, SessionError::Lookup("database is locked".into()));
}

#[test]
fn report_serializes_for_json_output() {
    let lookup = catalog(&[(Chakra::Crown, 3)]);
    let session = generate_flow_with(&lookup, "Crown", 1, cost_four(), StdRng::seed_from_u64(8)).unwrap();
    let report = SessionRunner::new(InstantPacer::default()).run(session, &mut RecordingSink::default());
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["chakra"], "Crown");
    assert_eq!(v["outcome"], "Completed");
    assert_eq!(v["poses"].as_array().map(Vec::len), Some(3));
}

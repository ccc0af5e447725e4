
use test_support::{seeded_app, test_app};
use yoga_core::{PhaseKind, SessionOutcome};
use yoga_domain::Chakra;
use yogaflow::menu::{run_main_menu, ScriptedUi, INVALID_CHOICE};

#[test]
fn practice_from_listed_template_runs_whole_session() {
    let app = seeded_app();
    // Begin Practice -> Display all -> flow 7 (Crown, 30') -> Back -> Exit
    let mut ui = ScriptedUi::new(["1", "1", "7", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();

    assert!(ui.printed("Generating your unique yoga flow..."));
    assert!(ui.printed("Crown"));
    let report = ui.sink.report().expect("session report");
    assert_eq!(report.outcome, SessionOutcome::Completed);
    assert_eq!(report.chakra, Chakra::Crown);
    // 1800 unidades a costo 4: se agota el pool de 7 poses.
    assert_eq!(report.poses.len(), 7);
    let kinds: Vec<PhaseKind> = ui.sink.started_phases().iter().map(|p| p.kind).collect();
    assert_eq!(kinds.first(), Some(&PhaseKind::Breath));
    assert_eq!(kinds.last(), Some(&PhaseKind::Rest));
    assert_eq!(kinds.len(), 10);
    assert_eq!(ui.remaining_answers(), 0);
}

#[test]
fn unknown_template_id_is_reported() {
    let app = seeded_app();
    let mut ui = ScriptedUi::new(["1", "1", "99", "1", "abc", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert_eq!(ui.output.iter().filter(|l| l.contains("Flow not found.")).count(), 2);
    assert!(ui.sink.report().is_none());
}

#[test]
fn filter_by_chakra_lists_matching_templates() {
    let app = seeded_app();
    let mut ui = ScriptedUi::new(["1", "2", "third eye", "6", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("Yoga Flows with Chakra 'Third Eye':"));
    assert!(ui.printed("#6 Third Eye flow, 40 minutes, Intermediate"));
    assert_eq!(ui.sink.report().map(|r| r.chakra), Some(Chakra::ThirdEye));
}

#[test]
fn invalid_filter_input_does_not_ask_for_an_id() {
    let app = seeded_app();
    let mut ui = ScriptedUi::new(["1", "3", "soon", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("invalid duration 'soon'"));
    assert!(!ui.printed("? Enter the ID of the flow template you want to generate"));
}

#[test]
fn template_without_enough_poses_returns_to_menu() {
    let app = test_app();
    // Manage Flows -> Create (Crown, 30, Easy) -> Back; Begin Practice -> all -> 1
    let mut ui = ScriptedUi::new(["2", "2", "Crown", "30", "Easy", "4", "1", "1", "1", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("Yoga flow created successfully!"));
    assert!(ui.printed("not enough poses matching the chakra 'Crown'"));
    assert!(ui.sink.records.is_empty());
}

#[test]
fn invalid_choice_is_repeated_back() {
    let app = test_app();
    let mut ui = ScriptedUi::new(["9", "x", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert_eq!(ui.output.iter().filter(|l| l.as_str() == INVALID_CHOICE).count(), 2);
    assert!(ui.printed("Exiting... Goodbye!"));
}

#[test]
fn pose_management_round_trip() {
    let app = test_app();
    let mut ui = ScriptedUi::new(["3", "2", "Tree Pose", "root", "easy", // create
                                  "3", "1", "Mountain Pose", "", "",     // update name only
                                  "1",                                   // display
                                  "4", "1",                              // delete
                                  "4", "1",                              // delete again
                                  "3", "1", "", "", "",                  // no-op update
                                  "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("Yoga pose added successfully!"));
    assert!(ui.printed("Yoga pose updated successfully!"));
    assert!(ui.printed("Mountain Pose"));
    assert!(ui.printed("| Root          | Easy"));
    assert!(ui.printed("Yoga pose deleted successfully!"));
    assert!(ui.printed("Pose not found."));
    assert!(ui.printed("No updates provided. Pose remains unchanged."));
    assert_eq!(app.ctx.poses().count().unwrap(), 0);
}

#[test]
fn bad_pose_input_is_shown_and_menu_continues() {
    let app = test_app();
    let mut ui = ScriptedUi::new(["3", "2", "Tree", "Spleen", "Easy", "2", "  ", "Root", "Easy", "1", "5", "4"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("unknown chakra 'Spleen'"));
    assert!(ui.printed("No yoga poses found."));
    assert_eq!(app.ctx.poses().count().unwrap(), 0);
}

#[test]
fn flow_delete_and_closed_input() {
    let app = seeded_app();
    // Se corta la entrada en medio del submenú: el menú termina sin error.
    let mut ui = ScriptedUi::new(["2", "3", "1", "3", "1"]);
    run_main_menu(&app.ctx, &mut ui).unwrap();
    assert!(ui.printed("Yoga flow deleted successfully!"));
    assert!(ui.printed("Flow not found."));
    assert_eq!(app.ctx.flows().count().unwrap(), 6);
    assert_eq!(app.ctx.flow_poses().count().unwrap(), 30);
}

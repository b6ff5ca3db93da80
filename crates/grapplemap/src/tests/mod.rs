use crate::*;
use grapplemap_layout::check_invariants;

fn armbar() -> TechniqueId {
    TechniqueId::new("armbar-from-mount")
}

const ARMBAR_COUNTERS: [&str; 3] = [
    "Posture & Stack Defense",
    "Hitchhiker Roll-Through",
    "Cartwheel Escape (Can Opener)",
];

fn counter_nodes(engine: &Engine) -> Vec<SceneNode> {
    engine
        .scene()
        .into_iter()
        .filter(|n| n.category == Some(Category::Counter))
        .collect()
}

#[test]
fn full_diagram_meets_the_node_count_floor() {
    let engine = Engine::new();
    let scene = engine.scene();

    let positions = scene.iter().filter(|n| n.kind == NodeKind::Position).count();
    let techniques = scene.iter().filter(|n| n.kind == NodeKind::Technique).count();
    assert!(positions >= 7, "got {positions} positions");
    assert!(techniques >= 30, "got {techniques} techniques");
}

#[test]
fn initial_layout_satisfies_every_invariant() {
    let engine = Engine::new();
    let eligible = engine.eligible();
    assert_eq!(check_invariants(engine.layout(), &eligible), vec![]);
}

#[test]
fn toggling_counters_off_and_on_restores_the_named_counters() {
    let mut engine = Engine::new();
    assert!(counter_nodes(&engine).len() >= 3);

    engine.toggle_category(Category::Counter);
    assert_eq!(counter_nodes(&engine).len(), 0);

    engine.toggle_category(Category::Counter);
    let labels: Vec<String> = counter_nodes(&engine).into_iter().map(|n| n.label).collect();
    assert!(labels.len() >= 3);
    for name in ARMBAR_COUNTERS {
        assert!(labels.iter().any(|l| l == name), "{name} missing");
    }
}

#[test]
fn toggle_reversibility_restores_the_rendered_node_count() {
    let mut engine = Engine::new();
    let before = engine.scene().len();

    engine.toggle_category(Category::Sweep);
    assert_ne!(engine.scene().len(), before);
    engine.toggle_category(Category::Sweep);
    assert_eq!(engine.scene().len(), before);
}

#[test]
fn category_toggles_do_not_change_active_difficulties() {
    let mut engine = Engine::new();
    engine.toggle_category(Category::Pass);
    assert!(engine.difficulty_toggles().iter().all(|t| t.active));

    engine.toggle_difficulty(Difficulty::Basic);
    let categories = engine.category_toggles();
    assert!(!categories.iter().find(|t| t.label == "pass").unwrap().active);
    assert!(
        categories
            .iter()
            .filter(|t| t.label != "pass")
            .all(|t| t.active)
    );
}

#[test]
fn armbar_counters_sit_left_of_and_centered_on_the_armbar() {
    let engine = Engine::new();
    let layout = engine.layout();
    let parent = layout.get(&NodeId::Technique(armbar())).unwrap();

    let counters: Vec<&Rect> = engine
        .dataset()
        .counters_of(&armbar())
        .map(|c| layout.get(&NodeId::Technique(c.id.clone())).unwrap())
        .collect();
    assert_eq!(counters.len(), 3);

    for rect in &counters {
        assert!(rect.x < parent.x);
    }
    let mean = counters.iter().map(|r| r.center_y()).sum::<f64>() / counters.len() as f64;
    assert!((mean - parent.center_y()).abs() < 100.0);
}

#[test]
fn technique_detail_round_trip() {
    let mut engine = Engine::new();
    let filters_before = engine.category_toggles();
    let transform_before = engine.viewport_transform();

    engine.select_node(NodeRef::Technique(armbar()));
    assert!(!engine.view().is_diagram());
    let detail = engine.technique_detail().unwrap();
    assert_eq!(detail.label, "Armbar from Mount");
    assert_eq!(detail.category, Category::Submission);
    assert_eq!(detail.difficulty, Difficulty::Intermediate);
    assert!(!detail.steps.is_empty());

    engine.navigate_back();
    assert!(engine.view().is_diagram());
    assert!(engine.technique_detail().is_none());
    // The detour left filters and viewport untouched.
    assert_eq!(engine.category_toggles(), filters_before);
    assert_eq!(engine.viewport_transform(), transform_before);
}

#[test]
fn counter_detail_shows_the_counter_category() {
    let mut engine = Engine::new();
    engine.select_node(NodeRef::Technique(TechniqueId::new("posture-stack-defense")));
    let detail = engine.technique_detail().unwrap();
    assert_eq!(detail.label, "Posture & Stack Defense");
    assert_eq!(detail.category, Category::Counter);
    assert_eq!(detail.difficulty, Difficulty::Basic);
    assert_eq!(detail.counter_of, Some(armbar()));
}

#[test]
fn position_detail_round_trip() {
    let mut engine = Engine::new();
    engine.select_node(NodeRef::Position(PositionId::new("mount")));
    let detail = engine.position_detail().unwrap();
    assert_eq!(detail.label, "Mount");
    assert!(!detail.techniques.is_empty());

    engine.navigate_back();
    assert!(engine.position_detail().is_none());
    assert!(engine.view().is_diagram());
}

#[test]
fn selecting_an_unknown_node_is_a_no_op() {
    let mut engine = Engine::new();
    engine.select_node(NodeRef::Technique(TechniqueId::new("ghost")));
    assert!(engine.view().is_diagram());
}

#[test]
fn selecting_while_a_detail_is_open_keeps_the_open_detail() {
    let mut engine = Engine::new();
    engine.select_node(NodeRef::Technique(armbar()));
    engine.select_node(NodeRef::Position(PositionId::new("mount")));
    assert_eq!(engine.technique_detail().unwrap().label, "Armbar from Mount");
}

#[test]
fn zoom_changes_the_transform_and_reset_restores_the_canonical_one() {
    let mut engine = Engine::new();
    let canonical = engine.viewport_transform();

    engine.zoom_in();
    let once = engine.viewport_transform();
    assert_ne!(once, canonical);
    engine.zoom_in();
    assert_ne!(engine.viewport_transform(), once);

    engine.reset_viewport();
    assert_eq!(engine.viewport_transform(), canonical);
    engine.reset_viewport();
    assert_eq!(engine.viewport_transform(), canonical);
}

#[test]
fn zooming_does_not_disturb_filters_view_or_layout() {
    let mut engine = Engine::new();
    let layout_before = engine.layout().clone();

    engine.zoom_in();
    engine.zoom_out();
    assert_eq!(engine.layout(), &layout_before);
    assert!(engine.category_toggles().iter().all(|t| t.active));
    assert!(engine.view().is_diagram());
}

#[test]
fn filter_changes_plan_exits_for_removed_nodes_and_settle_on_the_target() {
    let mut engine = Engine::new();
    let counters_before = counter_nodes(&engine).len();
    assert!(counters_before >= 3);

    engine.toggle_category(Category::Counter);
    let plan = engine.plan();
    let exits = plan
        .changes()
        .filter(|(_, c)| matches!(c, Change::Exit { .. }))
        .count();
    assert!(exits >= counters_before);

    // Mid-flight the exits still hold geometry; at the bound they are gone
    // and the rendered state equals the new target layout exactly.
    let mid = engine.geometry_at(plan.duration() / 2.0);
    assert!(mid.len() > engine.layout().len());
    let settled = engine.geometry_at(plan.duration());
    assert_eq!(settled.len(), engine.layout().len());
    for (id, rect) in engine.layout().iter() {
        assert_eq!(settled.get(id), Some(rect));
    }
}

#[test]
fn a_command_mid_transition_plans_from_the_logical_state() {
    let mut engine = Engine::new();
    engine.toggle_category(Category::Counter);
    let logical_target = engine.layout().clone();

    // Before the first transition settles visually, toggle again. The new
    // plan must start from the previous plan's target, not from visuals.
    engine.toggle_category(Category::Counter);
    let plan = engine.plan();
    for (id, rect) in logical_target.iter() {
        match plan.change(id) {
            Some(Change::Move { from, .. }) => assert_eq!(from, rect),
            Some(Change::Exit { from }) => assert_eq!(from, rect),
            other => panic!("unexpected change for {id}: {other:?}"),
        }
    }
}

#[test]
fn every_single_toggle_state_keeps_the_layout_invariants() {
    let mut engine = Engine::new();
    for c in Category::ALL {
        engine.toggle_category(c);
        assert_eq!(check_invariants(engine.layout(), &engine.eligible()), vec![]);
        engine.toggle_category(c);
    }
    for d in Difficulty::ALL {
        engine.toggle_difficulty(d);
        assert_eq!(check_invariants(engine.layout(), &engine.eligible()), vec![]);
        engine.toggle_difficulty(d);
    }
}

#[test]
fn scene_nodes_carry_category_difficulty_and_label() {
    let engine = Engine::new();
    let scene = engine.scene();

    let armbar_node = scene
        .iter()
        .find(|n| n.label == "Armbar from Mount")
        .unwrap();
    assert_eq!(armbar_node.kind, NodeKind::Technique);
    assert_eq!(armbar_node.category, Some(Category::Submission));
    assert_eq!(armbar_node.difficulty, Some(Difficulty::Intermediate));

    let mount_node = scene.iter().find(|n| n.label == "Mount").unwrap();
    assert_eq!(mount_node.kind, NodeKind::Position);
    assert_eq!(mount_node.category, None);
    assert_eq!(mount_node.difficulty, None);
}

#[test]
fn scene_serializes_for_attribute_projection() {
    let engine = Engine::new();
    let json = serde_json::to_value(engine.scene()).unwrap();
    let first = &json[0];
    assert_eq!(first["kind"], "position");
    assert!(first["rect"]["width"].as_f64().unwrap() > 0.0);

    let toggles = serde_json::to_value(engine.category_toggles()).unwrap();
    assert_eq!(toggles[5]["label"], "counter");
    assert_eq!(toggles[5]["active"], true);
}

//! Integration tests for the editing engine
//!
//! Exercises whole editing sessions end to end: mixed operation sequences,
//! undo/redo walks, history bounds, and the invariants that must hold for
//! any sequence of operations.

use deck_model::{Element, ElementPatch, RectElement, Slide, TextElement};
use edit_engine::{EditorEngine, Tool, UiState};
use proptest::prelude::*;

fn active_id(engine: &EditorEngine) -> String {
    engine
        .presentation()
        .active_slide_id()
        .expect("active slide")
        .to_string()
}

#[test]
fn full_editing_session_round_trip() {
    let mut engine = EditorEngine::new();
    let initial = engine.presentation().slides().to_vec();

    // Build a small deck: a second slide with a rectangle and a caption.
    engine.add_slide();
    let slide = active_id(&engine);
    engine.add_element(&slide, Element::Rect(RectElement::new("", 10.0, 10.0)));
    engine.add_element(
        &slide,
        Element::Text(TextElement {
            text: Some("Title".into()),
            ..TextElement::new("", 50.0, 20.0)
        }),
    );
    engine.update_slide_background(&slide, "#222244");

    assert_eq!(engine.presentation().slide_count(), 2);
    assert_eq!(engine.presentation().slide(&slide).unwrap().elements.len(), 2);

    // Walk all the way back: the exact initial document reappears.
    while engine.undo() {}
    assert_eq!(engine.presentation().slides(), initial.as_slice());

    // And all the way forward again.
    while engine.redo() {}
    let restored = engine.presentation().slide(&slide).unwrap();
    assert_eq!(restored.elements.len(), 2);
    assert_eq!(restored.background.as_deref(), Some("#222244"));
}

#[test]
fn load_resets_session_like_a_fresh_start() {
    let mut engine = EditorEngine::new();
    let mut ui = UiState::new();

    engine.add_slide();
    ui.set_selected_tool(Tool::Circle);
    ui.set_selected_element(Some("e1".to_string()));

    let loaded = vec![Slide::with_id("s1"), Slide::with_id("s2")];
    engine.load_presentation(loaded);
    ui.reset();

    assert_eq!(engine.presentation().slide_count(), 2);
    assert_eq!(engine.presentation().active_slide_id(), Some("s1"));
    assert!(!engine.can_undo());
    assert_eq!(ui.selected_tool(), Tool::Select);
    assert_eq!(ui.selected_element_id(), None);
}

#[test]
fn editing_continues_cleanly_after_a_load() {
    let mut engine = EditorEngine::new();
    engine.load_presentation(vec![Slide::with_id("s1")]);

    engine.add_element("s1", Element::Rect(RectElement::new("r1", 0.0, 0.0)));
    assert!(engine.undo());
    assert!(engine.presentation().slide("s1").unwrap().elements.is_empty());
    assert!(engine.redo());
    assert_eq!(engine.presentation().slide("s1").unwrap().elements.len(), 1);
}

#[test]
fn element_updates_compose_across_undo_boundaries() {
    let mut engine = EditorEngine::new();
    let slide = active_id(&engine);
    engine.add_element(&slide, Element::Rect(RectElement::new("r1", 0.0, 0.0)));

    engine.update_element(
        &slide,
        "r1",
        &ElementPatch {
            left: Some(10.0),
            ..Default::default()
        },
    );
    engine.update_element(
        &slide,
        "r1",
        &ElementPatch {
            left: Some(20.0),
            ..Default::default()
        },
    );

    let left = |engine: &EditorEngine| match engine
        .presentation()
        .slide(&slide)
        .unwrap()
        .element("r1")
        .unwrap()
    {
        Element::Rect(r) => r.left,
        _ => unreachable!(),
    };

    assert_eq!(left(&engine), 20.0);
    engine.undo();
    assert_eq!(left(&engine), 10.0);
    engine.undo();
    assert_eq!(left(&engine), 0.0);
    engine.redo();
    assert_eq!(left(&engine), 10.0);
}

// ---------------------------------------------------------------------------
// Property-based coverage: invariants for arbitrary operation sequences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    AddSlide,
    DeleteActiveSlide,
    DeleteMissingSlide,
    AddElement,
    UpdateFirstElement(f64),
    DeleteFirstElement,
    SetBackground,
    SetActiveToFirst,
    Undo,
    Redo,
    Checkpoint,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddSlide),
        Just(Op::DeleteActiveSlide),
        Just(Op::DeleteMissingSlide),
        Just(Op::AddElement),
        (-500.0..500.0f64).prop_map(Op::UpdateFirstElement),
        Just(Op::DeleteFirstElement),
        Just(Op::SetBackground),
        Just(Op::SetActiveToFirst),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Checkpoint),
    ]
}

fn apply(engine: &mut EditorEngine, op: &Op) {
    match op {
        Op::AddSlide => engine.add_slide(),
        Op::DeleteActiveSlide => {
            let id = active_id(engine);
            engine.delete_slide(&id);
        }
        Op::DeleteMissingSlide => engine.delete_slide("no-such-slide"),
        Op::AddElement => {
            let id = active_id(engine);
            engine.add_element(&id, Element::Rect(RectElement::new("", 1.0, 1.0)));
        }
        Op::UpdateFirstElement(left) => {
            let slide_id = active_id(engine);
            let element_id = engine
                .presentation()
                .slide(&slide_id)
                .and_then(|s| s.elements.first())
                .map(|e| e.id().to_string());
            if let Some(element_id) = element_id {
                engine.update_element(
                    &slide_id,
                    &element_id,
                    &ElementPatch {
                        left: Some(*left),
                        ..Default::default()
                    },
                );
            }
        }
        Op::DeleteFirstElement => {
            let slide_id = active_id(engine);
            let element_id = engine
                .presentation()
                .slide(&slide_id)
                .and_then(|s| s.elements.first())
                .map(|e| e.id().to_string());
            if let Some(element_id) = element_id {
                engine.delete_element(&slide_id, &element_id);
            }
        }
        Op::SetBackground => {
            let id = active_id(engine);
            engine.update_slide_background(&id, "#abcdef");
        }
        Op::SetActiveToFirst => {
            let id = engine.presentation().slides()[0].id.clone();
            engine.set_active_slide(&id);
        }
        Op::Undo => {
            engine.undo();
        }
        Op::Redo => {
            engine.redo();
        }
        Op::Checkpoint => engine.checkpoint(),
    }
}

proptest! {
    /// The document always has at least one slide and a resolvable active
    /// pointer, and the snapshot count never exceeds the configured bound.
    #[test]
    fn invariants_hold_for_any_operation_sequence(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut engine = EditorEngine::with_history_capacity(8);

        for op in &ops {
            apply(&mut engine, op);

            let deck = engine.presentation();
            prop_assert!(deck.slide_count() >= 1);
            let active = deck.active_slide_id().expect("active pointer always set");
            prop_assert!(deck.contains_slide(active));

            let history = engine.history();
            prop_assert!(history.undo_depth() <= history.max_entries());
            prop_assert!(history.len() <= history.max_entries());
        }
    }

    /// With enough capacity, undoing all the way back reproduces the exact
    /// initial document.
    #[test]
    fn undo_to_origin_restores_initial_document(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut engine = EditorEngine::with_history_capacity(500);
        let initial = engine.presentation().slides().to_vec();

        for op in &ops {
            apply(&mut engine, op);
        }
        while engine.undo() {}

        prop_assert_eq!(engine.presentation().slides(), initial.as_slice());
    }

    /// An undo immediately followed by a redo is a no-op on the document.
    #[test]
    fn undo_redo_round_trips(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut engine = EditorEngine::with_history_capacity(500);
        for op in &ops {
            apply(&mut engine, op);
        }

        let before = engine.presentation().slides().to_vec();
        if engine.undo() {
            prop_assert!(engine.redo());
            prop_assert_eq!(engine.presentation().slides(), before.as_slice());
        }
    }
}

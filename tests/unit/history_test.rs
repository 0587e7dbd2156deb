//! Unit tests for undo/redo history

use slidecraft::{Color, History, Shape, Slide};

fn slide_with(n: usize) -> Slide {
    let mut slide = Slide::new();
    for i in 0..n {
        slide.add(Shape::square(i as i32 * 10, 0, 8, Color::RED));
    }
    slide
}

#[test]
fn undo_returns_recorded_state_and_enables_redo() {
    let mut history = History::new(10);
    let before = slide_with(1);
    history.record(1, &before, "Add shape");
    let after = slide_with(2);

    let snapshot = history.undo(&after).unwrap();
    assert_eq!(snapshot.slide, before);
    assert_eq!(snapshot.slide_number, 1);
    assert_eq!(snapshot.description, "Add shape");
    assert!(history.can_redo());
    assert_eq!(history.redo_description(), Some("Add shape"));

    let redone = history.redo(&snapshot.slide).unwrap();
    assert_eq!(redone.slide, after);
    assert!(history.can_undo());
}

#[test]
fn recording_clears_redo() {
    let mut history = History::new(10);
    history.record(1, &slide_with(0), "Add shape");
    history.undo(&slide_with(1));
    assert!(history.can_redo());
    history.record(1, &slide_with(0), "Clear slide");
    assert!(!history.can_redo());
}

#[test]
fn depth_is_bounded_and_drops_oldest() {
    let mut history = History::new(3);
    for i in 0..5 {
        history.record(i + 1, &slide_with(i), format!("step {}", i));
    }
    assert_eq!(history.undo_len(), 3);
    let mut current = slide_with(5);
    let mut numbers = Vec::new();
    while let Some(snapshot) = history.undo(&current) {
        numbers.push(snapshot.slide_number);
        current = snapshot.slide;
    }
    assert_eq!(numbers, vec![5, 4, 3]);
}

#[test]
fn empty_history_has_nothing_to_do() {
    let mut history = History::default();
    assert!(history.undo(&Slide::new()).is_none());
    assert!(history.redo(&Slide::new()).is_none());
    assert_eq!(history.next_undo_slide(), None);
}

#[test]
fn next_slide_numbers_follow_stacks() {
    let mut history = History::new(10);
    history.record(2, &slide_with(0), "Add shape");
    assert_eq!(history.next_undo_slide(), Some(2));
    history.undo(&slide_with(1));
    assert_eq!(history.next_redo_slide(), Some(2));
    history.clear();
    assert!(!history.can_undo() && !history.can_redo());
}

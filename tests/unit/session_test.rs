//! Scripted editor sessions

use slidecraft::config::Config;
use slidecraft::session::{normalize_path, Command};
use slidecraft::theme::Theme;
use slidecraft::{Color, Deck, Session, Shape, Slide};

use super::helpers::{fixtures_dir, run_session, temp_fixture, write_deck};

#[test]
fn opening_reports_loaded_decks() {
    let out = run_session(&[fixtures_dir().join("sample_deck.txt")], "q\n");
    assert!(out.contains("[INFO] Loading presentations..."));
    assert!(out.contains("[OK] Loaded 2 slide(s) from:"));
    assert!(out.contains("[OK] 1 presentation(s) loaded. Type help for commands."));
    assert!(out.contains("Slide 1/2"));
    assert!(out.contains("Exiting slideshow. Goodbye!"));
}

#[test]
fn malformed_lines_are_summarized_on_open() {
    let out = run_session(&[fixtures_dir().join("malformed_deck.txt")], "q\n");
    assert!(out.contains("[WARN] Skipped 3 malformed line(s) in"));
}

#[test]
fn nothing_loaded_creates_untitled_deck() {
    let out = run_session(&[fixtures_dir().join("does_not_exist.txt")], "q\n");
    assert!(out.contains("[ERR] Failed to open deck"));
    assert!(out.contains("[INFO] Created empty presentation."));
    assert!(out.contains("[untitled.txt, Slide 1/1]"));
}

#[test]
fn inline_add_then_undo_and_redo() {
    let script = "add circle 10 10 20 red\nundo\nredo\nhistory\nq\n";
    let out = run_session(&[], script);
    assert!(out.contains("[OK] Added Circle at (10, 10)"));
    assert!(out.contains("[OK] Undone: Add shape"));
    assert!(out.contains("[OK] Redone: Add shape"));
    assert!(out.contains("Undo stack: 1 action(s)"));
    assert!(out.contains("[WARN] Unsaved changes in: untitled.txt"));
}

#[test]
fn wizard_add_reads_answers_from_input() {
    // Square, at (5, 6), default size, color number 1 (Red)
    let script = "add\n3\n5 6\n\n1\nlist\nq\n";
    let out = run_session(&[], script);
    assert!(out.contains("Enter shape number: "));
    assert!(out.contains("[OK] Added Square at (5, 6)"));
    assert!(out.contains("Square       at (  5,   6) [40x40]"));
}

#[test]
fn undo_returns_to_the_edited_slide() {
    let script = "add star 1 1\nnewslide\nundo\nq\n";
    let out = run_session(&[], script);
    assert!(out.contains("[OK] Created new slide 2."));
    let after_undo = out.rsplit("[OK] Undone: Add shape").next().unwrap();
    assert!(after_undo.contains("Slide 1/2"));
}

#[test]
fn deleting_a_slide_clears_history() {
    let script = "add circle 1 1\nnewslide\ndelslide 2\nundo\nq\n";
    let out = run_session(&[], script);
    assert!(out.contains("[OK] Deleted slide 2."));
    assert!(out.contains("[INFO] Undo history cleared."));
    assert!(out.contains("[INFO] Nothing to undo."));
}

#[test]
fn save_writes_the_deck_file() {
    let (temp, path) = temp_fixture("sample_deck.txt");
    let script = "title Welcome\nadd square 0 0 10\nsave\nq\n";
    let out = run_session(&[path.clone()], script);
    assert!(out.contains("[OK] Title set to: Welcome"));
    assert!(out.contains("[OK] Saved to:"));
    assert!(!out.contains("Unsaved changes"));

    let (deck, _) = Deck::load(&path, Slide::new()).unwrap();
    assert_eq!(deck.slide(1).unwrap().len(), 4);
    drop(temp);
}

#[test]
fn switching_between_decks() {
    let temp = tempfile::TempDir::new().unwrap();
    let a = write_deck(temp.path(), "a.txt", "Circle, 1, 1\n");
    let b = write_deck(temp.path(), "b.txt", "Square, 1, 1\n---\nStar, 2, 2\n");
    let out = run_session(&[a, b], "nf\nnf\npf\nq\n");
    assert!(out.contains("[OK] 2 presentation(s) loaded."));
    assert!(out.contains("[OK] Switched to:"));
    assert!(out.contains("[INFO] Already at the last presentation."));
    assert!(out.contains("Slide 1/2"));
}

#[test]
fn opening_the_same_file_twice_is_refused() {
    let path = fixtures_dir().join("sample_deck.txt");
    let out = run_session(&[path.clone(), path], "q\n");
    assert!(out.contains("[WARN] Already open:"));
    assert!(out.contains("[OK] 1 presentation(s) loaded."));
}

#[test]
fn export_commands_write_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let svg = temp.path().join("one.svg");
    let json = temp.path().join("deck");
    let prefix = temp.path().join("all");
    let script = format!(
        "add circle 10 10\nexport {}\nexportjson {} all\nexportall {}\nq\n",
        svg.display(),
        json.display(),
        prefix.display()
    );
    let out = run_session(&[], &script);
    assert!(out.contains("[OK] Exported to:"));
    assert!(out.contains("[OK] Exported entire slideshow to:"));
    assert!(svg.exists());
    assert!(temp.path().join("deck.json").exists());
    assert!(temp.path().join("all_1.bmp").exists());
    assert!(temp.path().join("all_1.svg").exists());
}

#[test]
fn visual_mode_renders_art() {
    let out = run_session(&[fixtures_dir().join("sample_deck.txt")], "visual\nq\n");
    assert!(out.contains("[OK] Switched to visual mode."));
    assert!(out.contains('#'));
}

#[test]
fn unknown_command_is_reported() {
    let out = run_session(&[], "frobnicate\nq\n");
    assert!(out.contains("[ERR] Unknown command. Type help for available commands."));
}

#[test]
fn end_of_input_leaves_the_loop() {
    let out = run_session(&[], "show\n");
    assert!(out.contains("Slide 1/1"));
    assert!(!out.contains("Goodbye"));
}

#[test]
fn command_aliases_parse_alike() {
    assert_eq!(Command::parse("u"), Command::parse("undo"));
    assert_eq!(Command::parse("z"), Command::Undo);
    assert_eq!(Command::parse("Q"), Command::Exit);
    assert_eq!(normalize_path(".\\Decks\\Talk.TXT"), "decks/talk.txt");
}

#[test]
fn unknown_shape_leaves_the_slide_untouched() {
    let mut session = Session::new(Config::default(), Theme::plain());
    let mut slide = Slide::new();
    slide.add(Shape::circle(5, 5, 4, Color::RED));
    let mut deck = Deck::new("talk.txt");
    deck.add_slide(slide);
    session.add_deck(deck);
    let before = session.current_deck().unwrap().current().unwrap().clone();

    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    session.execute("add blob 1 2", &mut input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Unknown shape 'blob'"));
    let deck = session.current_deck().unwrap();
    assert_eq!(deck.current().unwrap(), &before);
    assert!(!deck.is_modified());
    assert_eq!(session.current_history().unwrap().undo_len(), 0);
}

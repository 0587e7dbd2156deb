//! CLI output snapshot tests
//!
//! Runs the binary with colors off and a small configured canvas.

use super::helpers::{run_slidecraft, small_canvas_home, write_deck};

const TWO_SHAPES: &str = "Rectangle, 0, 0, 16, 4, Red, Red, 0\nSquare, 12, 4, 4, 4, Green, Green, 0\n";

#[test]
fn snapshot_render_plain_art() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", TWO_SHAPES);
    let (stdout, _, exit_code) = run_slidecraft(home.path(), &["render", deck.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
Slide 1/1
########
      ##
");
}

#[test]
fn snapshot_render_list() {
    let home = small_canvas_home();
    let deck = write_deck(home.path(), "deck.txt", TWO_SHAPES);
    let (stdout, _, exit_code) =
        run_slidecraft(home.path(), &["render", deck.to_str().unwrap(), "--list"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
Slide 1/1

  === Shape List ===
   1. ▬ Rectangle    at (  0,   0) [16x4] ■ Red
   2. ■ Square       at ( 12,   4) [4x4] ■ Green
  ==================
");
}

#[test]
fn snapshot_shapes() {
    let home = small_canvas_home();
    let (stdout, _, exit_code) = run_slidecraft(home.path(), &["shapes"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
═══ Available Shapes ═══
 1. ● Circle       ■
 2. ▬ Rectangle    ■
 3. ■ Square       ■
 4. ▲ Triangle     ■
 5. ◆ Diamond      ■
 6. ★ Star         ■
 7. ⬡ Hexagon      ■
 8. ⬠ Pentagon     ■
 9. ⬭ Oval         ■
10. ⏢ Trapezoid    ■
11. ◇ Rhombus      ■
12. ─ Line         ■
13. T Text         ■
");
}

#[test]
fn snapshot_colors() {
    let home = small_canvas_home();
    let (stdout, _, exit_code) = run_slidecraft(home.path(), &["colors"]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
═══ Available Colors ═══
 1. ████ Red
 2. ████ Green
 3. ████ Blue
 4. ████ Yellow
 5. ████ Cyan
 6. ████ Magenta
 7. ████ Orange
 8. ████ Purple
 9. ████ Pink
10. ████ White
11. ████ Black
12. ████ Gray
13. ████ Brown
14. ████ Gold
15. ████ Silver
16. ████ Navy
17. ████ Teal
18. ████ Lime
19. ████ Coral
20. ████ Violet
");
}

use egui::Color32;
use pixel_studio::color::parse_hex;
use pixel_studio::{Document, GridPos, PixelGrid, ToolKind};

fn p(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

fn painted(grid: &PixelGrid) -> Vec<(usize, usize, Color32)> {
    grid.iter()
        .filter_map(|(x, y, color)| color.map(|color| (x, y, color)))
        .collect()
}

/// Scenario A: a diagonal pencil stroke on a blank 4x4 canvas
fn scenario_a() -> Document {
    let red = parse_hex("#FF0000").unwrap();
    let mut document = Document::new(4, 4).unwrap();
    document.select_tool(ToolKind::Pencil);
    document.set_color(red);

    document.pointer_down(p(0, 0));
    document.pointer_move(p(2, 2));

    // painted live, before the gesture ends
    assert_eq!(
        painted(document.grid()),
        vec![(0, 0, red), (1, 1, red), (2, 2, red)]
    );
    assert_eq!(document.history().len(), 1);

    document.pointer_up(p(2, 2));
    assert_eq!(document.history().len(), 2);
    assert_eq!(document.history().cursor(), Some(1));
    document
}

/// Scenario B: a green filled rectangle over the stroke
fn scenario_b() -> Document {
    let green = parse_hex("#00FF00").unwrap();
    let mut document = scenario_a();
    document.select_tool(ToolKind::Square);
    document.set_color(green);

    document.pointer_down(p(0, 0));
    document.pointer_move(p(1, 1));
    // still only a preview
    assert_eq!(document.grid().get(1, 0), None);

    document.pointer_up(p(1, 1));
    assert_eq!(document.history().len(), 3);
    document
}

#[test]
fn scenario_a_pencil_diagonal() {
    let document = scenario_a();
    assert_eq!(document.history().current(), Some(document.grid()));
}

#[test]
fn scenario_b_rectangle_over_stroke() {
    let red = parse_hex("#FF0000").unwrap();
    let green = parse_hex("#00FF00").unwrap();
    let document = scenario_b();

    assert_eq!(
        painted(document.grid()),
        vec![
            (0, 0, green),
            (1, 0, green),
            (0, 1, green),
            (1, 1, green),
            (2, 2, red),
        ]
    );
    assert_eq!(document.history().cursor(), Some(2));
}

#[test]
fn scenario_c_double_undo() {
    let red = parse_hex("#FF0000").unwrap();
    let after_stroke = scenario_a().grid().clone();
    let mut document = scenario_b();

    assert_eq!(document.undo(), Ok(true));
    assert_eq!(document.grid(), &after_stroke);
    assert_eq!(
        painted(document.grid()),
        vec![(0, 0, red), (1, 1, red), (2, 2, red)]
    );

    assert_eq!(document.undo(), Ok(true));
    assert!(document.grid().is_blank());

    assert_eq!(document.undo(), Ok(false));
    assert!(document.grid().is_blank());
    assert_eq!(document.history().cursor(), Some(0));
}

#[test]
fn scenario_d_new_stroke_drops_redo() {
    let mut document = scenario_b();
    document.undo().unwrap();
    document.undo().unwrap();

    document.select_tool(ToolKind::Pencil);
    document.set_color(Color32::BLUE);
    document.pointer_down(p(3, 0));
    document.pointer_move(p(3, 3));
    document.pointer_up(p(3, 3));

    let after_stroke = document.grid().clone();
    assert!(!document.can_redo());
    assert_eq!(document.redo(), Ok(false));
    assert_eq!(document.grid(), &after_stroke);
    assert_eq!(document.history().len(), 2);
}

#[test]
fn eraser_stroke_round_trips_through_history() {
    let mut document = scenario_a();
    document.select_tool(ToolKind::Eraser);
    document.pointer_down(p(0, 0));
    document.pointer_move(p(3, 3));
    document.pointer_up(p(3, 3));
    assert!(document.grid().is_blank());

    document.undo().unwrap();
    assert_eq!(document.grid().painted_cells(), 3);
    document.redo().unwrap();
    assert!(document.grid().is_blank());
}

#[test]
fn stroke_running_off_canvas_is_clipped() {
    let mut document = Document::new(4, 4).unwrap();
    document.pointer_down(p(1, 1));
    document.pointer_move(p(-5, 1));
    document.pointer_move(p(-5, 10));
    document.pointer_up(p(-5, 10));

    assert_eq!(document.grid().painted_cells(), 2);
    assert!(!document.is_gesture_active());
    assert_eq!(document.history().len(), 2);
}

#[test]
fn circle_released_outside_is_clamped() {
    let mut document = Document::new(5, 5).unwrap();
    document.select_tool(ToolKind::Circle);
    document.set_color(Color32::RED);
    document.pointer_down(p(4, 4));
    document.pointer_move(p(40, 4));
    document.pointer_up(p(40, 4));

    // released at (4, 4) itself: a single cell
    assert_eq!(document.grid().painted_cells(), 1);
    assert_eq!(document.grid().get(4, 4), Some(Color32::RED));
}

#[test]
fn shape_dragged_outside_previews_what_it_commits() {
    for tool in [ToolKind::Square, ToolKind::Circle] {
        let mut document = Document::new(5, 5).unwrap();
        document.select_tool(tool);
        document.set_color(Color32::RED);
        document.pointer_down(p(3, 1));
        document.pointer_move(p(40, -7));

        let mut shown: Vec<GridPos> = document
            .preview()
            .unwrap()
            .cells
            .into_iter()
            .filter(|cell| document.grid().contains(cell.x, cell.y))
            .collect();
        shown.sort();

        document.pointer_up(p(40, -7));
        let mut committed: Vec<GridPos> = painted(document.grid())
            .into_iter()
            .map(|(x, y, _)| GridPos::new(x as i32, y as i32))
            .collect();
        committed.sort();

        assert_eq!(shown, committed, "{}", tool.name());
    }
}

#[test]
fn pointer_leave_commits_freehand_work() {
    let mut document = Document::new(4, 4).unwrap();
    document.pointer_down(p(0, 3));
    document.pointer_move(p(3, 3));
    document.pointer_leave();

    assert!(!document.is_gesture_active());
    assert_eq!(document.history().len(), 2);
    document.undo().unwrap();
    assert!(document.grid().is_blank());
}

#[test]
fn missed_release_is_resolved_by_next_press() {
    let mut document = Document::new(4, 4).unwrap();
    document.pointer_down(p(0, 0));
    document.pointer_move(p(1, 0));
    // release never delivered
    document.pointer_down(p(3, 3));
    document.pointer_up(p(3, 3));

    assert_eq!(document.history().len(), 3);
    document.undo().unwrap();
    assert_eq!(document.grid().painted_cells(), 2);
}

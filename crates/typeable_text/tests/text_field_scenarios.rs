//! End-to-end behavior of the text field through its public API

use std::sync::Arc;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typeable_text::prelude::*;
use typeable_text::text;

/// Font with unit resolution, a 12 unit line height and a few fixed advances
fn test_font() -> FontData {
    let metrics = VerticalMetrics {
        resolution: 1.0,
        bounding_box_y_min: -2.0,
        bounding_box_y_max: 10.0,
        underline_thickness: 0.0,
    };
    let square = |w: f32| {
        vec![
            PathCommand::MoveTo(Point2::new(0.0, 0.0)),
            PathCommand::LineTo(Point2::new(w, 0.0)),
            PathCommand::LineTo(Point2::new(w, 8.0)),
            PathCommand::LineTo(Point2::new(0.0, 8.0)),
        ]
    };

    let mut font = FontData::new("Scenario Sans", metrics).unwrap();
    for (character, advance) in [
        ('a', 10.0),
        ('b', 8.0),
        ('c', 6.0),
        ('h', 7.0),
        ('i', 3.0),
        ('o', 6.0),
        ('u', 6.0),
        ('x', 5.0),
        ('y', 6.0),
        ('?', 4.0),
    ] {
        font = font.with_glyph(character, GlyphDef::new(advance, square(advance)));
    }
    font.with_glyph(' ', GlyphDef::blank(3.0))
}

fn field_with(text: &str) -> TextField {
    let config = TextFieldConfig::default()
        .with_align(HorizontalAlign::Left)
        .with_initial_text(text);
    TextField::new(Arc::new(test_font()), config).unwrap()
}

#[test]
fn scenario_a_insert_between_glyphs() {
    let mut field = field_with("ab");
    field.handle_move_caret(1);

    field.handle_insert('x');

    assert_eq!(field.text(), "axb");
    assert_eq!(field.caret_index(), 2);
    assert_eq!(field.glyphs().len(), 3);
}

#[test]
fn scenario_b_line_break_origins() {
    let font = test_font();
    let result = text::layout("hi\nyou", &font, 1.0).unwrap();

    assert_relative_eq!(result.line_height(), 12.0);
    let glyphs = result.glyphs();
    assert_eq!(glyphs[1].character, 'i');
    assert_relative_eq!(glyphs[1].origin.x, 7.0);
    assert_relative_eq!(glyphs[1].origin.y, 0.0);
    assert_eq!(glyphs[2].character, 'y');
    assert_relative_eq!(glyphs[2].origin.x, 0.0);
    assert_relative_eq!(glyphs[2].origin.y, -12.0);
}

#[test]
fn scenario_c_empty_text() {
    let field = field_with("");

    assert!(field.glyphs().is_empty());
    assert_relative_eq!(field.max_line_width(), 0.0);
    assert_eq!(field.caret_index(), 0);
    assert_eq!(field.caret_position(), Point2::origin());
}

#[test]
fn scenario_d_delete_before_start_is_noop() {
    let mut field = field_with("abc");
    let revision = field.revision();

    field.handle_delete_forward();

    assert_eq!(field.text(), "abc");
    assert_eq!(field.caret_index(), 0);
    assert_eq!(field.glyphs().len(), 3);
    assert_eq!(field.revision(), revision);
}

#[test]
fn scenario_e_click_right_half_selects_following_gap() {
    let mut field = field_with("abc");
    // glyph 2 ('c') spans x 18..24
    let bounds = field.glyphs()[2].bounds();
    let point = Point2::new(bounds.max.x - 1.0, bounds.center().y);

    field.handle_pointer_down(point);

    assert!(field.is_active());
    assert_eq!(field.caret_index(), 3);
}

#[test]
fn glyph_count_matches_non_break_characters() {
    let font = test_font();
    for sample in ["", "a", "abc", "a b c", "hi\nyou", "\n\n", "ab\n\nc"] {
        let result = text::layout(sample, &font, 1.0).unwrap();
        let expected = sample.chars().filter(|c| *c != '\n').count();
        assert_eq!(result.glyph_count(), expected, "text {sample:?}");
    }
}

#[test]
fn max_line_width_is_widest_line_not_sum() {
    let font = test_font();
    let result = text::layout("ab\nc\naa", &font, 1.0).unwrap();

    assert_relative_eq!(result.max_line_width(), 20.0);
    assert_relative_eq!(result.total_height(), 36.0);
    assert_eq!(result.line_count(), 3);
}

#[test]
fn layout_is_idempotent() {
    let font = test_font();
    let first = text::layout("hi you\nabc", &font, 2.5).unwrap();
    let second = text::layout("hi you\nabc", &font, 2.5).unwrap();

    assert_eq!(first.glyphs(), second.glyphs());
}

#[test]
fn caret_stays_clamped_under_random_edits() {
    let mut field = field_with("ab\nc");
    field.handle_activate(Some(Point2::new(1.0, 1.0)));
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for step in 0..2_000 {
        let key = match rng.gen_range(0..7) {
            0 => Key::Left,
            1 => Key::Right,
            2 => Key::Backspace,
            3 => Key::Delete,
            4 => Key::Character('\n'),
            5 => Key::Character('a'),
            _ => Key::Character('x'),
        };
        field.handle_key(key);
        if rng.gen_bool(0.1) {
            field.handle_move_caret(rng.gen_range(-12..=12));
        }

        let count = field.glyphs().len();
        assert!(field.caret_index() <= count, "step {step}: {} > {count}", field.caret_index());
        let expected = field.text().chars().filter(|c| *c != '\n').count();
        assert_eq!(count, expected, "step {step}");
    }
}

#[test]
fn backspace_undoes_enter() {
    let mut field = field_with("ab");
    field.handle_pointer_down(Point2::new(1.0, 1.0));
    field.handle_key(Key::Right);

    field.handle_key(Key::Character('\n'));
    assert_eq!(field.layout().line_count(), 2);
    assert_eq!(field.caret_position(), Point2::new(0.0, -12.0));

    field.handle_key(Key::Backspace);
    assert_eq!(field.text(), "ab");
    assert_eq!(field.caret_index(), 1);
    assert_eq!(field.layout().line_count(), 1);
    assert_eq!(field.caret_position(), Point2::new(10.0, 0.0));
}

#[test]
fn caret_position_round_trips_through_hit_test() {
    let mut field = field_with("abc\nhi");
    let count = field.glyphs().len();

    for k in 0..=count {
        field.handle_activate(None);
        field.handle_move_caret(-10);
        field.handle_move_caret(k as isize);
        let anchor = field.caret_position();

        field.handle_activate(Some(Point2::new(anchor.x, anchor.y + 0.5)));

        let resolved = field.caret_index();
        assert!(resolved + 1 >= k && resolved <= k, "k = {k}, resolved = {resolved}");
    }
}

#[test]
fn typing_after_activation_keeps_caret_visible_then_blinks() {
    let mut field = field_with("ab");
    field.handle_pointer_down(Point2::new(17.0, 2.0));
    assert_eq!(field.caret_index(), 2);
    assert!(field.caret_visible());

    field.tick(0.4);
    field.handle_key(Key::Character('c'));
    assert!(field.caret_visible());

    field.tick(0.8);
    assert!(field.caret_visible());
    field.tick(1.0);
    assert!(!field.caret_visible());
}

#[test]
fn clicking_outside_leaves_edit_mode() {
    let mut field = field_with("ab");
    field.handle_pointer_down(Point2::new(1.0, 1.0));
    assert!(field.is_active());

    field.handle_pointer_down(Point2::new(100.0, 1.0));

    assert!(!field.is_active());
    assert!(!field.caret_visible());
}

#[test]
fn centered_field_maps_parent_points_to_local() {
    let mut field = field_with("ab");
    field.set_align(HorizontalAlign::Center);
    assert_relative_eq!(field.alignment_offset(), -9.0);

    let local = field.to_field_local(Point2::new(0.0, 1.0));
    field.handle_pointer_down(local);

    // x = 9 lands in the right half of 'a'
    assert_eq!(field.caret_index(), 1);
}

#[test]
fn scene_mirror_follows_edits() {
    #[derive(Debug, thiserror::Error)]
    #[error("never fails")]
    struct Never;

    #[derive(Default)]
    struct Counter {
        next: usize,
        live: Vec<usize>,
        caret_at: Option<Point2>,
    }

    impl SceneBackend for Counter {
        type Node = usize;
        type Error = Never;

        fn build_filled_mesh(&mut self, _commands: &[PathCommand]) -> Result<usize, Never> {
            self.next += 1;
            Ok(self.next)
        }
        fn build_rect_mesh(&mut self, _rect: Rect) -> Result<usize, Never> {
            self.next += 1;
            Ok(self.next)
        }
        fn add_node(&mut self, node: usize) {
            self.live.push(node);
        }
        fn remove_node(&mut self, node: usize) {
            self.live.retain(|n| *n != node);
        }
        fn set_node_visible(&mut self, _node: usize, _visible: bool) {}
        fn set_node_position(&mut self, _node: usize, position: Point2) {
            self.caret_at = Some(position);
        }
        fn set_group_offset(&mut self, _x: f32) {}
    }

    let mut field = field_with("a b");
    let mut backend = Counter::default();
    let mut scene = TextFieldScene::new();
    scene.sync(&field, &mut backend).unwrap();
    assert_eq!(backend.live.len(), 3);

    field.handle_pointer_down(Point2::new(20.0, 1.0));
    field.handle_key(Key::Character('\n'));
    field.handle_key(Key::Character('c'));
    scene.sync(&field, &mut backend).unwrap();

    // a, b, c plus the caret; the blank space has no node
    assert_eq!(backend.live.len(), 4);
    assert_eq!(backend.caret_at, Some(Point2::new(6.0, -12.0)));
}

//! Property-based invariant tests for the canvas and its drawing primitives.
//!
//! 1. `set` then `get` reads back the pixel regardless of prior size.
//! 2. `rectangle_filled` stamps exactly the half-open box.
//! 3. `rectangle_nice_frame` leaves corner glyphs on corners and axis glyphs on edges.
//! 4. `flush` re-seeds a fixed canvas to blank rows of the configured width.
//! 5. Row contiguity: every row below the highest one touched exists.

use chalk_core::geometry::{Extent, Pos};
use chalk_core::sink::Sink;
use chalk_render::{Canvas, Draw, FrameGlyphs, Pixel};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn pos_strategy() -> impl Strategy<Value = Pos> {
    (0usize..40, 0usize..40).prop_map(|(x, y)| Pos::new(x, y))
}

fn glyph_strategy() -> impl Strategy<Value = Pixel> {
    prop_oneof![Just("#"), Just("█"), Just("┼"), Just("x")].prop_map(Pixel::new)
}

fn unbounded() -> Canvas {
    Canvas::new(Extent::Unbounded, Extent::Unbounded)
}

fn glyph_at(canvas: &Canvas, pos: Pos) -> Option<&str> {
    canvas.get(pos).ok().map(Pixel::glyph)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. set/get round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_then_get_reads_back(
        prior in prop::collection::vec(pos_strategy(), 0..8),
        pos in pos_strategy(),
        pixel in glyph_strategy(),
    ) {
        let mut canvas = unbounded();
        for p in prior {
            canvas.set(p, Pixel::from('.'));
        }
        canvas.set(pos, pixel.clone());
        prop_assert_eq!(canvas.get(pos), Ok(&pixel));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Filled rectangle is half-open
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filled_stamps_half_open_box(a in pos_strategy(), b in pos_strategy()) {
        let mut canvas = unbounded();
        canvas.rectangle_filled(a, b, &Pixel::from('█'));
        let (lo, hi) = a.normalized(b);

        let mut count = 0;
        for x in 0..canvas.row_count() {
            for (y, pixel) in canvas.row(x).unwrap_or_default().iter().enumerate() {
                if pixel.glyph() == "█" {
                    count += 1;
                    prop_assert!(x >= lo.x && x < hi.x, "row {} outside {:?}..{:?}", x, lo, hi);
                    prop_assert!(y >= lo.y && y < hi.y, "col {} outside {:?}..{:?}", y, lo, hi);
                }
            }
        }
        prop_assert_eq!(count, (hi.x - lo.x) * (hi.y - lo.y));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Nice frame glyph placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nice_frame_corners_and_edges(a in pos_strategy(), b in pos_strategy(), bold in any::<bool>()) {
        prop_assume!(a.x != b.x && a.y != b.y);
        let glyphs = FrameGlyphs::weight(bold);
        let mut canvas = unbounded();
        canvas.rectangle_nice_frame(a, b, bold);

        prop_assert_eq!(glyph_at(&canvas, a), Some(glyphs.top_left));
        prop_assert_eq!(glyph_at(&canvas, Pos::new(a.x, b.y)), Some(glyphs.top_right));
        prop_assert_eq!(glyph_at(&canvas, b), Some(glyphs.bottom_right));
        prop_assert_eq!(glyph_at(&canvas, Pos::new(b.x, a.y)), Some(glyphs.bottom_left));

        let (lo, hi) = a.normalized(b);
        for x in (lo.x + 1)..hi.x {
            prop_assert_eq!(glyph_at(&canvas, Pos::new(x, lo.y)), Some(glyphs.vertical));
            prop_assert_eq!(glyph_at(&canvas, Pos::new(x, hi.y)), Some(glyphs.vertical));
        }
        for y in (lo.y + 1)..hi.y {
            prop_assert_eq!(glyph_at(&canvas, Pos::new(lo.x, y)), Some(glyphs.horizontal));
            prop_assert_eq!(glyph_at(&canvas, Pos::new(hi.x, y)), Some(glyphs.horizontal));
        }
    }
}

proptest! {
    #[test]
    fn plain_frame_covers_perimeter_only(a in pos_strategy(), b in pos_strategy()) {
        prop_assume!(a != b);
        let mut canvas = unbounded();
        canvas.rectangle_frame(a, b, &Pixel::from('#'));
        let (lo, hi) = a.normalized(b);
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                let on_edge = x == lo.x || x == hi.x || y == lo.y || y == hi.y;
                let is_hash = glyph_at(&canvas, Pos::new(x, y)) == Some("#");
                prop_assert_eq!(on_edge, is_hash, "cell ({}, {})", x, y);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Flush re-seeds fixed canvases
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flush_reseeds_fixed_grid(
        drawn in prop::collection::vec((pos_strategy(), glyph_strategy()), 0..16),
    ) {
        let mut canvas = Canvas::new(Extent::Fixed(3), Extent::Fixed(2));
        for (pos, pixel) in drawn {
            canvas.set(pos, pixel);
        }
        let mut sink = Sink::capture();
        canvas.flush(&mut sink).unwrap();

        prop_assert_eq!(canvas.row_count(), 2);
        for x in 0..2 {
            let row = canvas.row(x).unwrap();
            prop_assert_eq!(row.len(), 3);
            prop_assert!(row.iter().all(Pixel::is_blank));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Row contiguity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rows_and_cells_are_contiguous(points in prop::collection::vec(pos_strategy(), 1..16)) {
        let mut canvas = unbounded();
        for p in &points {
            canvas.set(*p, Pixel::from('o'));
        }
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(0);
        prop_assert_eq!(canvas.row_count(), max_x + 1);
        for x in 0..=max_x {
            let max_y = points.iter().filter(|p| p.x == x).map(|p| p.y + 1).max().unwrap_or(0);
            prop_assert_eq!(canvas.row(x).unwrap().len(), max_y);
        }
    }
}

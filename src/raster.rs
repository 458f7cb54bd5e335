//! Cell rasterization for the drawing tools.
//!
//! Every function is pure and returns the cells to paint; callers decide the
//! color, so the same shape serves painting, erasing and previews.

use crate::grid::GridPos;

/// Bresenham line between `from` and `to`, both endpoints included.
///
/// The path is 8-connected and one cell wide. It is always traversed from the
/// smaller endpoint (by `x`, then `y`) so that `line(a, b)` is exactly
/// `line(b, a)` reversed.
pub fn line(from: GridPos, to: GridPos) -> Vec<GridPos> {
    if to < from {
        let mut cells = line(to, from);
        cells.reverse();
        return cells;
    }

    let (mut x, mut y) = (from.x as i64, from.y as i64);
    let (x1, y1) = (to.x as i64, to.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push(GridPos::new(x as i32, y as i32));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

/// Every cell of the axis-aligned box spanned by two opposite corners,
/// inclusive, in row-major order. Corner order does not matter.
pub fn filled_rectangle(a: GridPos, b: GridPos) -> Vec<GridPos> {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

    let mut cells = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            cells.push(GridPos::new(x, y));
        }
    }
    cells
}

/// Filled disc around `center` whose radius is the distance to `edge`.
///
/// A cell is inside when its center lies within the radius, inclusive.
/// Distances are compared squared so the test stays in integers.
pub fn filled_circle(center: GridPos, edge: GridPos) -> Vec<GridPos> {
    let r2 = squared_distance(center, edge);
    // floor(sqrt(r2)) bounds the scan box
    let mut reach = (r2 as f64).sqrt() as i64;
    while reach * reach > r2 {
        reach -= 1;
    }
    while (reach + 1) * (reach + 1) <= r2 {
        reach += 1;
    }

    let (cx, cy) = (center.x as i64, center.y as i64);
    let mut cells = Vec::new();
    for y in (cy - reach)..=(cy + reach) {
        for x in (cx - reach)..=(cx + reach) {
            let (ddx, ddy) = (x - cx, y - cy);
            if ddx * ddx + ddy * ddy <= r2 {
                cells.push(GridPos::new(x as i32, y as i32));
            }
        }
    }
    cells
}

fn squared_distance(a: GridPos, b: GridPos) -> i64 {
    let dx = b.x as i64 - a.x as i64;
    let dy = b.y as i64 - a.y as i64;
    dx * dx + dy * dy
}

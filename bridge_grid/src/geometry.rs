// geometry.rs - Pixel maths shared by drawing and clicking

use bridge_cells::Corners;
use egui::{Pos2, Rect, Rounding, Vec2, pos2};

/// Points sampled along each bridge curve.
const CURVE_STEPS: usize = 12;

/// Maps a pointer position to the grid cell under it, if any.
pub fn cell_under_pointer(pointer: Pos2, origin: Pos2, pitch: f32, dimensions: (usize, usize)) -> Option<(i32, i32)> {
    let local = pointer - origin;
    let x = (local.x / pitch).floor();
    let y = (local.y / pitch).floor();
    if x < 0.0 || y < 0.0 || x >= dimensions.0 as f32 || y >= dimensions.1 as f32 {
        return None;
    }
    Some((x as i32, y as i32))
}

/// Corner radii (`[NW, NE, SE, SW]`) as egui rounding.
pub fn rounding(corners: Corners) -> Rounding {
    Rounding {
        nw: corners[0],
        ne: corners[1],
        se: corners[2],
        sw: corners[3],
    }
}

fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

// Quarter turn clockwise in screen space (y points down).
fn rotate(v: Vec2, quarter_turns: usize) -> Vec2 {
    (0..quarter_turns % 4).fold(v, |v, _| Vec2::new(-v.y, v.x))
}

/// Outline of the connector a bridge cell draws into `corner` (`0 = NE`, clockwise).
///
/// The first point is the cell corner itself; the rest run along a cubic
/// curve from one edge midpoint to the next, so the outline can be filled
/// as a fan around the first point. `bezier` is the corner radius of the
/// active cells the bridge joins.
pub fn bridge_fillet(rect: Rect, corner: usize, bezier: f32) -> Vec<Pos2> {
    let s = rect.width() / 2.0;
    let c = (bezier / 2.0).min(s);
    let centre = rect.center();

    // Built for the NE corner relative to the cell centre, then rotated.
    let p0 = Vec2::new(0.0, -s);
    let p1 = Vec2::new(s - c, -s);
    let p2 = Vec2::new(s, -s + c);
    let p3 = Vec2::new(s, 0.0);

    let place = |v: Vec2| centre + rotate(v, corner);

    let mut points = Vec::with_capacity(CURVE_STEPS + 2);
    points.push(place(Vec2::new(s, -s)));
    for step in 0..=CURVE_STEPS {
        let t = step as f32 / CURVE_STEPS as f32;
        points.push(place(cubic(p0, p1, p2, p3, t)));
    }
    points
}

/// Top-left pixel of cell `(x, y)`.
pub fn cell_origin(origin: Pos2, pitch: f32, x: i32, y: i32) -> Pos2 {
    pos2(origin.x + x as f32 * pitch, origin.y + y as f32 * pitch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn pointer_maps_to_cells() {
        let origin = pos2(10.0, 20.0);
        assert_eq!(cell_under_pointer(pos2(10.0, 20.0), origin, 30.0, (3, 2)), Some((0, 0)));
        assert_eq!(cell_under_pointer(pos2(75.0, 50.5), origin, 30.0, (3, 2)), Some((2, 1)));
        assert_eq!(cell_under_pointer(pos2(100.0, 20.0), origin, 30.0, (3, 2)), None);
        assert_eq!(cell_under_pointer(pos2(9.0, 25.0), origin, 30.0, (3, 2)), None);
        assert_eq!(cell_under_pointer(pos2(15.0, 80.0), origin, 30.0, (3, 2)), None);
    }

    #[test]
    fn rounding_keeps_draw_order() {
        let r = rounding([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((r.nw, r.ne, r.se, r.sw), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn north_east_fillet_runs_between_edge_midpoints() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(20.0));
        let points = bridge_fillet(rect, 0, 8.0);
        assert!(close(points[0], pos2(20.0, 0.0)));
        assert!(close(points[1], pos2(10.0, 0.0)));
        assert!(close(*points.last().unwrap(), pos2(20.0, 10.0)));
        assert!(points.iter().all(|p| rect.expand(1e-3).contains(*p)));
    }

    #[test]
    fn fillets_rotate_clockwise() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), Vec2::splat(20.0));
        assert!(close(bridge_fillet(rect, 1, 8.0)[0], pos2(20.0, 20.0)));
        assert!(close(bridge_fillet(rect, 2, 8.0)[0], pos2(0.0, 20.0)));
        assert!(close(bridge_fillet(rect, 3, 8.0)[0], pos2(0.0, 0.0)));
    }
}

//! Turns standing walls into rectangles that a renderer or physics engine can
//! place directly. Each segment is a `width` x `height` box centred on
//! `(x, y)` and rotated by `angle` radians.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::maze::{CircularGrid, MazeGrid, RADIUS_FRACTION, RectGrid};

/// Chords per curved inner or outer cell face.
pub const ARC_SEGMENTS: usize = 5;

/// Chords in the ring closing off the outside of a circular maze.
pub const BOUNDARY_SEGMENTS: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    /// Part of the outer frame rather than a cell wall.
    pub boundary: bool,
}

/// Gap below the bottom-right cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exit {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// Where the ball starts: the middle of the maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStart {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Everything a rectangular maze scene needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RectLayout {
    pub walls: Vec<WallSegment>,
    pub exit: Exit,
    pub ball: BallStart,
}

/// Lays a rectangular maze out on a `canvas_width` x `canvas_height` canvas,
/// keeping one cell of margin on every side for the frame.
pub fn rect_layout(
    grid: &RectGrid,
    canvas_width: f64,
    canvas_height: f64,
    thickness: f64,
) -> RectLayout {
    let (width, height) = (grid.width() as f64, grid.height() as f64);
    let cell_width = canvas_width / (width + 2.0);
    let cell_height = canvas_height / (height + 2.0);
    let (offset_x, offset_y) = (cell_width, cell_height);

    let mut walls = rect_frame(width, height, cell_width, cell_height);

    let wall = |x, y, width, height| WallSegment {
        x,
        y,
        width,
        height,
        angle: 0.0,
        boundary: false,
    };
    for cell in grid.cells() {
        let cell_x = offset_x + cell.x as f64 * cell_width;
        let cell_y = offset_y + cell.y as f64 * cell_height;

        if cell.walls.north {
            walls.push(wall(cell_x + cell_width / 2.0, cell_y, cell_width, thickness));
        }
        if cell.walls.east {
            walls.push(wall(
                cell_x + cell_width,
                cell_y + cell_height / 2.0,
                thickness,
                cell_height,
            ));
        }
        if cell.walls.south {
            walls.push(wall(
                cell_x + cell_width / 2.0,
                cell_y + cell_height,
                cell_width,
                thickness,
            ));
        }
        if cell.walls.west {
            walls.push(wall(cell_x, cell_y + cell_height / 2.0, thickness, cell_height));
        }
    }

    RectLayout {
        walls,
        exit: Exit {
            x: offset_x + (width - 0.5) * cell_width,
            y: offset_y + height * cell_height,
            angle: FRAC_PI_2,
        },
        ball: BallStart {
            x: offset_x + width * cell_width / 2.0,
            y: offset_y + height * cell_height / 2.0,
            radius: cell_width.min(cell_height) * 0.3,
        },
    }
}

/// Top, left, right and bottom slabs, each one cell thick.
fn rect_frame(width: f64, height: f64, cell_width: f64, cell_height: f64) -> Vec<WallSegment> {
    let canvas_width = (width + 2.0) * cell_width;
    let canvas_height = (height + 2.0) * cell_height;
    let slab = |x, y, width, height| WallSegment {
        x,
        y,
        width,
        height,
        angle: 0.0,
        boundary: true,
    };
    vec![
        slab(canvas_width / 2.0, cell_height / 2.0, canvas_width, cell_height),
        slab(cell_width / 2.0, canvas_height / 2.0, cell_width, canvas_height),
        slab(
            cell_width + width * cell_width + cell_width / 2.0,
            canvas_height / 2.0,
            cell_width,
            canvas_height,
        ),
        slab(
            canvas_width / 2.0,
            cell_height + height * cell_height + cell_height / 2.0,
            canvas_width,
            cell_height,
        ),
    ]
}

/// Segments for every standing wall of a circular maze on a square canvas.
pub fn circular_segments(
    grid: &CircularGrid,
    canvas_size: f64,
    thickness: f64,
) -> Vec<WallSegment> {
    let center = canvas_size / 2.0;
    let mut segments = Vec::new();

    for cell in grid.cells() {
        let placement = grid.cell_to_pixel(cell, canvas_size);
        let start_angle = placement.angle;
        let angle_size = placement.angle_size;

        if cell.inner {
            arc(&mut segments, center, placement.inner_radius, start_angle, angle_size, thickness);
        }
        if cell.outer {
            arc(&mut segments, center, placement.outer_radius, start_angle, angle_size, thickness);
        }
        if cell.cw {
            segments.push(radial(
                center,
                placement.inner_radius,
                placement.outer_radius,
                start_angle + angle_size,
                thickness,
            ));
        }
        if cell.ccw {
            segments.push(radial(
                center,
                placement.inner_radius,
                placement.outer_radius,
                start_angle,
                thickness,
            ));
        }
    }

    if grid.cell_count() > 0 {
        let radius = canvas_size * RADIUS_FRACTION;
        let step = TAU / BOUNDARY_SEGMENTS as f64;
        segments.extend((0..BOUNDARY_SEGMENTS).map(|i| {
            let (from, to) = (i as f64 * step, (i + 1) as f64 * step);
            let mut segment = chord(center, radius, from, to, thickness);
            segment.boundary = true;
            segment
        }));
    }

    segments
}

/// Curved face split into `ARC_SEGMENTS` chords; chords shorter than half the
/// wall thickness are dropped.
fn arc(
    segments: &mut Vec<WallSegment>,
    center: f64,
    radius: f64,
    start_angle: f64,
    angle_size: f64,
    thickness: f64,
) {
    let step = angle_size / ARC_SEGMENTS as f64;
    for i in 0..ARC_SEGMENTS {
        let from = start_angle + i as f64 * step;
        let segment = chord(center, radius, from, from + step, thickness);
        if segment.width > thickness / 2.0 {
            segments.push(segment);
        }
    }
}

fn chord(center: f64, radius: f64, from: f64, to: f64, thickness: f64) -> WallSegment {
    let (x1, y1) = (center + radius * from.cos(), center + radius * from.sin());
    let (x2, y2) = (center + radius * to.cos(), center + radius * to.sin());
    WallSegment {
        x: (x1 + x2) / 2.0,
        y: (y1 + y2) / 2.0,
        width: (x2 - x1).hypot(y2 - y1),
        height: thickness,
        angle: (from + to) / 2.0 + FRAC_PI_2,
        boundary: false,
    }
}

/// Straight wall along `angle` between two radii.
fn radial(
    center: f64,
    inner_radius: f64,
    outer_radius: f64,
    angle: f64,
    thickness: f64,
) -> WallSegment {
    let (cos, sin) = (angle.cos(), angle.sin());
    let (inner_x, inner_y) = (center + inner_radius * cos, center + inner_radius * sin);
    let (outer_x, outer_y) = (center + outer_radius * cos, center + outer_radius * sin);
    WallSegment {
        x: (inner_x + outer_x) / 2.0,
        y: (inner_y + outer_y) / 2.0,
        width: (outer_x - inner_x).hypot(outer_y - inner_y),
        height: thickness,
        angle,
        boundary: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::randomized_kruskal,
        maze::RectDirection,
        random::get_rng,
    };

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_cell_rect_layout() {
        let grid = RectGrid::new(1, 1);
        let layout = rect_layout(&grid, 30.0, 30.0, 5.0);
        assert_eq!(layout.walls.len(), 8);
        assert_eq!(layout.walls.iter().filter(|w| w.boundary).count(), 4);

        let north = layout.walls[4];
        assert!((north.x - 15.0).abs() < EPS && (north.y - 10.0).abs() < EPS);
        assert!((north.width - 10.0).abs() < EPS && (north.height - 5.0).abs() < EPS);

        let east = layout.walls[5];
        assert!((east.x - 20.0).abs() < EPS && (east.y - 15.0).abs() < EPS);
        assert!((east.width - 5.0).abs() < EPS && (east.height - 10.0).abs() < EPS);

        assert!((layout.exit.x - 15.0).abs() < EPS && (layout.exit.y - 20.0).abs() < EPS);
        assert!((layout.ball.x - 15.0).abs() < EPS && (layout.ball.y - 15.0).abs() < EPS);
        assert!((layout.ball.radius - 3.0).abs() < EPS);
    }

    #[test]
    fn test_rect_layout_skips_open_walls() {
        let mut grid = RectGrid::new(2, 1);
        let full = rect_layout(&grid, 40.0, 30.0, 2.0).walls.len();
        grid.remove_walls((0, 0), (1, 0), RectDirection::East);
        let carved = rect_layout(&grid, 40.0, 30.0, 2.0).walls.len();
        assert_eq!(full - carved, 2);
    }

    #[test]
    fn test_circular_segments_of_walled_grid() {
        let grid = CircularGrid::new(3, 12, false);
        let segments = circular_segments(&grid, 200.0, 5.0);
        assert_eq!(segments.iter().filter(|s| s.boundary).count(), BOUNDARY_SEGMENTS);
        // Radial walls have length one ring width (30 on this canvas); two per cell
        let radial_count = segments
            .iter()
            .filter(|s| !s.boundary && (s.width - 30.0).abs() < EPS)
            .count();
        assert_eq!(radial_count, 2 * grid.cell_count());
        let max_radius = 200.0 * RADIUS_FRACTION;
        assert!(
            segments
                .iter()
                .all(|s| (s.x - 100.0).hypot(s.y - 100.0) <= max_radius + EPS)
        );
    }

    #[test]
    fn test_circular_center_has_no_inner_chords() {
        // Ring 0 faces the centre at radius zero, so no chord survives the length cut.
        let grid = CircularGrid::new(1, 6, false);
        let segments = circular_segments(&grid, 100.0, 4.0);
        let arcs = segments.iter().filter(|s| !s.boundary && (s.width - 45.0).abs() > EPS);
        // Only the outer faces of the six cells remain: five chords each
        assert_eq!(arcs.count(), 6 * ARC_SEGMENTS);
    }

    #[test]
    fn test_carving_removes_segments() {
        let mut grid = CircularGrid::new(4, 16, false);
        let before = circular_segments(&grid, 300.0, 3.0).len();
        randomized_kruskal(&mut grid, &mut get_rng(Some(4)));
        let after = circular_segments(&grid, 300.0, 3.0).len();
        assert!(after < before);
    }
}

//! Polar grid: concentric rings split into sectors.
//!
//! Ring `r` of `rings` holds `max(6, floor((r + 1) * sectors_in_outer_ring / rings))`
//! sectors, so rings near the centre have fewer, wider cells and arc lengths
//! stay roughly even. Sector `s` of a ring with `n` sectors spans the angles
//! `[2πs/n, 2π(s+1)/n)`; clockwise means increasing sector index.
//!
//! Adjacent rings rarely have matching sector counts, so the inner and outer
//! neighbors of a cell are nearest-angle picks rather than an exact inverse
//! relation: the outer neighbor of a cell does not always list that cell as
//! its inner neighbor.

use std::f64::consts::TAU;

use super::{Edge, MazeGrid, Neighbor, RingCell, RingDirection};
use rand::Rng;

/// The minimum number of sectors in any ring.
pub const MIN_SECTORS: usize = 6;

/// Fraction of the canvas used as the outermost radius, leaving a margin.
pub const RADIUS_FRACTION: f64 = 0.45;

/// How carving across a ring boundary updates the far cell's wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingBoundary {
    /// Clear the facing wall on both cells. A cleared inner or outer face can
    /// also line up with an open face of a cell it was never carved to, so the
    /// flags may show more openings than carves.
    #[default]
    Symmetric,
    /// Clear the far cell's facing wall only when its sector is the one
    /// whose start angle lies closest to the near cell's start angle.
    /// Leaves one-sided openings when ring sector counts do not divide evenly.
    Approximate,
}

/// Where a cell sits on a square canvas, for geometry builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Representative point: mid radius, at the sector's start angle.
    pub x: f64,
    pub y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Start angle of the sector, in radians.
    pub angle: f64,
    /// Angular span of the sector, in radians.
    pub angle_size: f64,
}

#[derive(Debug, Clone)]
pub struct CircularGrid {
    /// All cells, ring-major. Ring `r` occupies `ring_offsets[r]..ring_offsets[r + 1]`.
    cells: Box<[RingCell]>,
    ring_offsets: Box<[usize]>,
    rings: usize,
    sectors_in_outer_ring: usize,
    center_open: bool,
    boundary: RingBoundary,
    /// Every carve made through `remove_walls`, in order.
    carved: Vec<((usize, usize), (usize, usize))>,
}

/// Sector count of ring `ring` in a grid of `rings` rings.
pub fn sectors_for_ring(ring: usize, rings: usize, sectors_in_outer_ring: usize) -> usize {
    MIN_SECTORS.max((ring + 1) * sectors_in_outer_ring / rings)
}

impl CircularGrid {
    /// Creates rings `0..rings` (or `1..rings` with an open centre) with every
    /// wall standing. `rings` and `sectors_in_outer_ring` are expected to be positive.
    pub fn new(rings: usize, sectors_in_outer_ring: usize, center_open: bool) -> Self {
        let first_ring = usize::from(center_open);
        let mut cells = Vec::new();
        let mut ring_offsets = Vec::with_capacity(rings + 1);

        for ring in 0..rings {
            ring_offsets.push(cells.len());
            if ring < first_ring {
                continue;
            }
            let sectors = sectors_for_ring(ring, rings, sectors_in_outer_ring);
            cells.extend((0..sectors).map(|sector| RingCell::new(ring, sector, sectors)));
        }
        ring_offsets.push(cells.len());

        CircularGrid {
            cells: cells.into_boxed_slice(),
            ring_offsets: ring_offsets.into_boxed_slice(),
            rings,
            sectors_in_outer_ring,
            center_open,
            boundary: RingBoundary::default(),
            carved: Vec::new(),
        }
    }

    pub fn with_ring_boundary(mut self, boundary: RingBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn ring_boundary(&self) -> RingBoundary {
        self.boundary
    }

    /// Total ring count, including the missing centre ring of an open-centre grid.
    pub fn rings(&self) -> usize {
        self.rings
    }

    pub fn sectors_in_outer_ring(&self) -> usize {
        self.sectors_in_outer_ring
    }

    pub fn center_open(&self) -> bool {
        self.center_open
    }

    /// The innermost ring that holds cells.
    pub fn first_ring(&self) -> usize {
        usize::from(self.center_open)
    }

    /// Number of sectors in `ring`, or 0 for a ring that holds no cells.
    pub fn sectors_in_ring(&self, ring: usize) -> usize {
        if ring >= self.rings {
            return 0;
        }
        self.ring_offsets[ring + 1] - self.ring_offsets[ring]
    }

    pub fn ring(&self, ring: usize) -> &[RingCell] {
        if ring >= self.rings {
            return &[];
        }
        &self.cells[self.ring_offsets[ring]..self.ring_offsets[ring + 1]]
    }

    pub fn cells(&self) -> impl Iterator<Item = &RingCell> {
        self.cells.iter()
    }

    /// Returns the cell at `ring`, wrapping `sector` around the ring in either
    /// direction. `None` when the ring holds no cells.
    pub fn get_cell(&self, ring: usize, sector: isize) -> Option<&RingCell> {
        let total = self.sectors_in_ring(ring);
        if total == 0 {
            return None;
        }
        let sector = sector.rem_euclid(total as isize) as usize;
        Some(&self[(ring, sector)])
    }

    /// Picks a ring uniformly, then a sector within it. Cells of inner rings
    /// are therefore more likely than cells of outer rings.
    pub fn get_random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> &RingCell {
        let first = self.first_ring();
        let ring = rng.random_range(first..self.rings);
        let sector = rng.random_range(0..self.sectors_in_ring(ring));
        &self[(ring, sector)]
    }

    /// Projects a cell onto a square canvas of side `canvas_size`.
    pub fn cell_to_pixel(&self, cell: &RingCell, canvas_size: f64) -> CellPlacement {
        let center = canvas_size / 2.0;
        let max_radius = canvas_size * RADIUS_FRACTION;

        let angle_size = TAU / cell.total_sectors as f64;
        let angle = angle_size * cell.sector as f64;

        let inner_radius = cell.ring as f64 / self.rings as f64 * max_radius;
        let outer_radius = (cell.ring + 1) as f64 / self.rings as f64 * max_radius;
        let radius = (inner_radius + outer_radius) / 2.0;

        CellPlacement {
            x: center + radius * angle.cos(),
            y: center + radius * angle.sin(),
            inner_radius,
            outer_radius,
            angle,
            angle_size,
        }
    }

    /// Sector of `ring` whose start angle is nearest to `angle`. Ties go to the lower sector.
    fn closest_sector(&self, ring: usize, angle: f64) -> usize {
        let total = self.sectors_in_ring(ring);
        let mut best = 0;
        let mut best_diff = f64::INFINITY;
        for sector in 0..total {
            let diff = (angle - TAU * sector as f64 / total as f64).abs();
            if diff < best_diff {
                best_diff = diff;
                best = sector;
            }
        }
        best
    }

    /// Whether a wall stands on `direction` side of the cell at `coord`.
    pub fn has_wall(&self, coord: (usize, usize), direction: RingDirection) -> bool {
        self[coord].wall(direction)
    }

    /// Neighbor pairs whose facing walls are both down, lower coordinate
    /// first, sorted. Unlike `passages`, this reads the wall flags, which is
    /// what geometry builders draw. It always covers the carves under
    /// `RingBoundary::Symmetric`, and may hold extra pairs where a face cleared
    /// for one carve meets a face cleared for another.
    pub fn open_connections(&self) -> Vec<((usize, usize), (usize, usize))> {
        let mut open = self
            .coords()
            .flat_map(|from| {
                self.neighbors(from)
                    .into_iter()
                    .filter(move |n| {
                        !self.has_wall(from, n.direction)
                            && !self.has_wall(n.coord, n.direction.opposite())
                    })
                    .map(move |n| (from.min(n.coord), from.max(n.coord)))
            })
            .collect::<Vec<_>>();
        open.sort_unstable();
        open.dedup();
        open
    }

    /// Checks that every carve left both facing walls down.
    /// Always holds for `RingBoundary::Symmetric`.
    pub fn carves_open_both_sides(&self) -> bool {
        self.carved.iter().all(|&(from, to)| {
            self.neighbors(from)
                .into_iter()
                .filter(|n| n.coord == to)
                .any(|n| {
                    !self.has_wall(from, n.direction) && !self.has_wall(to, n.direction.opposite())
                })
        })
    }

    fn ravel_index(&self, ring: usize, sector: usize) -> usize {
        self.ring_offsets[ring] + sector
    }
}

impl MazeGrid for CircularGrid {
    type Coord = (usize, usize);
    type Direction = RingDirection;

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn coord_at(&self, index: usize) -> (usize, usize) {
        self.cells[index].coord()
    }

    fn index_of(&self, coord: (usize, usize)) -> usize {
        self.ravel_index(coord.0, coord.1)
    }

    /// Up to four neighbors, in inner, outer, clockwise, counter-clockwise order.
    fn neighbors(&self, coord: (usize, usize)) -> Vec<Neighbor<(usize, usize), RingDirection>> {
        let (ring, sector) = coord;
        let total = self.sectors_in_ring(ring);
        if sector >= total {
            return Vec::new();
        }
        let mut neighbors = Vec::with_capacity(4);

        if ring > self.first_ring() {
            let inner_total = self.sectors_in_ring(ring - 1);
            neighbors.push(Neighbor {
                coord: (ring - 1, sector * inner_total / total),
                direction: RingDirection::Inner,
            });
        }

        if ring + 1 < self.rings {
            // Middle of the outer-ring sectors overlapping this one, rounding half up.
            let outer_total = self.sectors_in_ring(ring + 1);
            let start = sector * outer_total / total;
            let end = ((sector + 1) * outer_total / total).saturating_sub(1).max(start);
            neighbors.push(Neighbor {
                coord: (ring + 1, (start + end + 1) / 2),
                direction: RingDirection::Outer,
            });
        }

        neighbors.push(Neighbor {
            coord: (ring, (sector + 1) % total),
            direction: RingDirection::Cw,
        });
        neighbors.push(Neighbor {
            coord: (ring, (sector + total - 1) % total),
            direction: RingDirection::Ccw,
        });

        neighbors
    }

    fn is_visited(&self, coord: (usize, usize)) -> bool {
        self[coord].visited
    }

    fn set_visited(&mut self, coord: (usize, usize), visited: bool) {
        self[coord].visited = visited;
    }

    fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    fn remove_walls(&mut self, from: (usize, usize), to: (usize, usize), direction: RingDirection) {
        self[from].set_wall(direction, false);

        let clear_far_side = match (direction, self.boundary) {
            (RingDirection::Cw | RingDirection::Ccw, _) | (_, RingBoundary::Symmetric) => true,
            (RingDirection::Inner | RingDirection::Outer, RingBoundary::Approximate) => {
                let angle = self[from].start_angle();
                let best = self.closest_sector(to.0, angle);
                if best != to.1 {
                    tracing::debug!(
                        "[circular] one-sided {} opening from {:?}: closest sector is {:?}",
                        direction,
                        from,
                        (to.0, best)
                    );
                }
                best == to.1
            }
        };
        if clear_far_side {
            self[to].set_wall(direction.opposite(), false);
        }

        self.carved.push((from, to));
    }

    /// Each clockwise pair once (from the lower sector, or from sector 0 across
    /// the wrap) and each cell's outer wall once.
    fn wall_edges(&self) -> Vec<Edge<(usize, usize), RingDirection>> {
        self.coords()
            .flat_map(|from| {
                self.neighbors(from)
                    .into_iter()
                    .filter(move |n| {
                        n.coord.0 > from.0 || (n.coord.0 == from.0 && n.coord.1 > from.1)
                    })
                    .map(move |n| Edge {
                        from,
                        to: n.coord,
                        direction: n.direction,
                    })
            })
            .collect()
    }

    /// The carves recorded by `remove_walls`. With several outer-ring cells
    /// facing one inner cell, the wall flags alone cannot tell which of them
    /// an opened face leads to.
    fn passages(&self) -> Vec<((usize, usize), (usize, usize))> {
        self.carved.clone()
    }
}

impl std::ops::Index<(usize, usize)> for CircularGrid {
    type Output = RingCell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for CircularGrid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}

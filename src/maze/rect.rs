use std::fmt;

use super::{Edge, MazeGrid, Neighbor, RectCell, RectDirection};
use rand::Rng;

/// A `width` x `height` grid of square cells, stored row-major.
/// Row 0 is the north edge, column 0 the west edge.
#[derive(Debug, Clone)]
pub struct RectGrid {
    cells: Box<[RectCell]>,
    width: usize,
    height: usize,
}

impl RectGrid {
    /// Creates a grid with every wall standing and no cell visited.
    /// Both dimensions are expected to be positive.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| RectCell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        RectGrid {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: (usize, usize)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the cell at (x, y), or `None` outside the grid. There is no wraparound.
    pub fn get_cell(&self, x: usize, y: usize) -> Option<&RectCell> {
        self.is_in_bounds((x, y)).then(|| &self.cells[self.ravel_index(x, y)])
    }

    /// Picks a cell with two independent draws: a row, then a column.
    pub fn get_random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> &RectCell {
        let y = rng.random_range(0..self.height);
        let x = rng.random_range(0..self.width);
        &self[(x, y)]
    }

    pub fn cells(&self) -> impl Iterator<Item = &RectCell> {
        self.cells.iter()
    }

    /// The coordinate one step from `coord` towards `direction`, if it is inside the grid.
    pub fn step(&self, coord: (usize, usize), direction: RectDirection) -> Option<(usize, usize)> {
        let (x, y) = coord;
        let next = match direction {
            RectDirection::North => (x, y.checked_sub(1)?),
            RectDirection::East => (x.checked_add(1)?, y),
            RectDirection::South => (x, y.checked_add(1)?),
            RectDirection::West => (x.checked_sub(1)?, y),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Direction from `a` to `b` when they are orthogonally adjacent.
    pub fn direction_between(a: (usize, usize), b: (usize, usize)) -> Option<RectDirection> {
        let dx = b.0 as i64 - a.0 as i64;
        let dy = b.1 as i64 - a.1 as i64;
        RectDirection::ALL
            .into_iter()
            .find(|direction| direction.offset() == (dx, dy))
    }

    /// Clears the wall pair between two adjacent cells, working out the side
    /// from their relative offset. Returns `false` and leaves the grid untouched
    /// when the cells are not adjacent or not both in bounds.
    pub fn remove_walls_between(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        let Some(direction) = RectGrid::direction_between(a, b) else {
            return false;
        };
        self[a].walls.set(direction, false);
        self[b].walls.set(direction.opposite(), false);
        true
    }

    /// Whether a wall stands on `direction` side of the cell at `coord`.
    pub fn has_wall(&self, coord: (usize, usize), direction: RectDirection) -> bool {
        self[coord].walls.get(direction)
    }

    /// Checks that every pair of adjacent cells agrees about the wall between them.
    pub fn walls_consistent(&self) -> bool {
        self.cells.iter().all(|cell| {
            [RectDirection::East, RectDirection::South]
                .into_iter()
                .filter_map(|direction| {
                    self.step(cell.coord(), direction).map(|next| (direction, next))
                })
                .all(|(direction, next)| {
                    cell.walls.get(direction) == self[next].walls.get(direction.opposite())
                })
        })
    }
}

impl MazeGrid for RectGrid {
    type Coord = (usize, usize);
    type Direction = RectDirection;

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn coord_at(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    fn index_of(&self, coord: (usize, usize)) -> usize {
        self.ravel_index(coord.0, coord.1)
    }

    /// Up to four orthogonal neighbors, in north, east, south, west order.
    fn neighbors(&self, coord: (usize, usize)) -> Vec<Neighbor<(usize, usize), RectDirection>> {
        if !self.is_in_bounds(coord) {
            return Vec::new();
        }
        RectDirection::ALL
            .into_iter()
            .filter_map(|direction| {
                self.step(coord, direction).map(|next| Neighbor {
                    coord: next,
                    direction,
                })
            })
            .collect()
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

    fn remove_walls(&mut self, from: (usize, usize), to: (usize, usize), direction: RectDirection) {
        debug_assert_eq!(RectGrid::direction_between(from, to), Some(direction));
        self.remove_walls_between(from, to);
    }

    /// The east and south wall of every cell that has a neighbor there, row-major.
    fn wall_edges(&self) -> Vec<Edge<(usize, usize), RectDirection>> {
        self.coords()
            .flat_map(|from| {
                [RectDirection::East, RectDirection::South].map(|direction| {
                    self.step(from, direction).map(|to| Edge {
                        from,
                        to,
                        direction,
                    })
                })
            })
            .flatten()
            .collect()
    }

    fn passages(&self) -> Vec<((usize, usize), (usize, usize))> {
        self.wall_edges()
            .into_iter()
            .filter(|edge| {
                !self.has_wall(edge.from, edge.direction)
                    && !self.has_wall(edge.to, edge.direction.opposite())
            })
            .map(|edge| (edge.from, edge.to))
            .collect()
    }
}

impl std::ops::Index<(usize, usize)> for RectGrid {
    type Output = RectCell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RectGrid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}

/// ASCII drawing of the wall layout, one text row per wall line and cell row.
impl fmt::Display for RectGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for x in 0..self.width {
            let top = if self[(x, 0)].walls.north { "---" } else { "   " };
            write!(f, "{}+", top)?;
        }
        writeln!(f)?;

        for y in 0..self.height {
            let west = if self[(0, y)].walls.west { "|" } else { " " };
            write!(f, "{}", west)?;
            for x in 0..self.width {
                let east = if self[(x, y)].walls.east { "|" } else { " " };
                write!(f, "   {}", east)?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for x in 0..self.width {
                let south = if self[(x, y)].walls.south { "---" } else { "   " };
                write!(f, "{}+", south)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

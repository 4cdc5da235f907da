pub mod cell;
pub mod circular;
pub mod rect;

use std::{collections::VecDeque, fmt::Debug, hash::Hash};

pub use cell::{RectCell, RectDirection, RectWalls, RingCell, RingDirection};
pub use circular::{CellPlacement, CircularGrid, RADIUS_FRACTION, RingBoundary};
pub use rect::RectGrid;

/// A cell adjacent to some other cell, tagged with the side it lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<C, D> {
    pub coord: C,
    pub direction: D,
}

/// A wall between two adjacent cells that a generator may knock down.
/// `direction` is the side of `from` that faces `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<C, D> {
    pub from: C,
    pub to: C,
    pub direction: D,
}

/// The adjacency and wall-removal contract the generators carve through.
///
/// Cells live in an arena owned by the grid; `index_of`/`coord_at` map
/// between coordinates and dense indices in `0..cell_count()`.
pub trait MazeGrid {
    type Coord: Copy + Eq + Hash + Debug;
    type Direction: Copy + Eq + Debug;

    fn cell_count(&self) -> usize;

    fn coord_at(&self, index: usize) -> Self::Coord;

    fn index_of(&self, coord: Self::Coord) -> usize;

    /// All adjacent cells, visited or not.
    fn neighbors(&self, coord: Self::Coord) -> Vec<Neighbor<Self::Coord, Self::Direction>>;

    fn is_visited(&self, coord: Self::Coord) -> bool;

    fn set_visited(&mut self, coord: Self::Coord, visited: bool);

    /// Clears every cell's visited flag. Generators call this before carving.
    fn reset_visited(&mut self);

    /// Knocks down the wall between `from` and its neighbor `to` on side `direction`.
    fn remove_walls(&mut self, from: Self::Coord, to: Self::Coord, direction: Self::Direction);

    /// Every wall between adjacent cells, each listed exactly once.
    fn wall_edges(&self) -> Vec<Edge<Self::Coord, Self::Direction>>;

    /// Open connections between adjacent cells, each listed once.
    fn passages(&self) -> Vec<(Self::Coord, Self::Coord)>;

    fn unvisited_neighbors(
        &self,
        coord: Self::Coord,
    ) -> Vec<Neighbor<Self::Coord, Self::Direction>> {
        self.neighbors(coord)
            .into_iter()
            .filter(|n| !self.is_visited(n.coord))
            .collect()
    }

    fn coords(&self) -> impl Iterator<Item = Self::Coord> + '_ {
        (0..self.cell_count()).map(|i| self.coord_at(i))
    }
}

/// Number of open passages touching each cell, indexed like the grid's arena.
pub fn passage_degrees<G: MazeGrid>(grid: &G) -> Vec<usize> {
    let mut degrees = vec![0; grid.cell_count()];
    for (a, b) in grid.passages() {
        degrees[grid.index_of(a)] += 1;
        degrees[grid.index_of(b)] += 1;
    }
    degrees
}

/// Cells with exactly one way in or out.
pub fn dead_end_count<G: MazeGrid>(grid: &G) -> usize {
    passage_degrees(grid).into_iter().filter(|&d| d == 1).count()
}

/// Checks that the passages form a spanning tree: `cell_count - 1` passages
/// and every cell reachable from the first one.
///
/// On a circular grid the passages are the carves a generator made. See
/// [`CircularGrid::open_connections`] for what the wall flags show.
pub fn is_perfect<G: MazeGrid>(grid: &G) -> bool {
    let count = grid.cell_count();
    if count == 0 {
        return true;
    }
    let passages = grid.passages();
    passages.len() == count - 1 && is_connected(grid, &passages)
}

/// Whether `connections` join every cell of `grid` into one component.
pub fn is_connected<G: MazeGrid>(grid: &G, connections: &[(G::Coord, G::Coord)]) -> bool {
    let count = grid.cell_count();
    if count == 0 {
        return true;
    }

    let mut adjacency = vec![Vec::new(); count];
    for &(a, b) in connections {
        let (ia, ib) = (grid.index_of(a), grid.index_of(b));
        adjacency[ia].push(ib);
        adjacency[ib].push(ia);
    }

    let mut seen = vec![false; count];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    let mut reached = 1;
    while let Some(i) = queue.pop_front() {
        for &j in &adjacency[i] {
            if !seen[j] {
                seen[j] = true;
                reached += 1;
                queue.push_back(j);
            }
        }
    }
    reached == count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_grid_is_not_perfect() {
        let grid = RectGrid::new(3, 3);
        assert!(grid.passages().is_empty());
        assert!(!is_perfect(&grid));
        assert_eq!(dead_end_count(&grid), 0);
    }

    #[test]
    fn test_single_cell_is_trivially_perfect() {
        let grid = RectGrid::new(1, 1);
        assert!(is_perfect(&grid));
    }

    #[test]
    fn test_hand_carved_corridor() {
        // A straight corridor along the top row of a 3x1 grid.
        let mut grid = RectGrid::new(3, 1);
        grid.remove_walls((0, 0), (1, 0), RectDirection::East);
        grid.remove_walls((1, 0), (2, 0), RectDirection::East);
        assert!(is_perfect(&grid));
        assert_eq!(passage_degrees(&grid), vec![1, 2, 1]);
        assert_eq!(dead_end_count(&grid), 2);
    }

    #[test]
    fn test_disconnected_is_not_perfect() {
        // Two passages on four cells, one cell short of a tree.
        let mut grid = RectGrid::new(2, 2);
        grid.remove_walls((0, 0), (1, 0), RectDirection::East);
        grid.remove_walls((0, 1), (1, 1), RectDirection::East);
        assert!(!is_perfect(&grid));
    }
}

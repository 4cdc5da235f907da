use rand::{Rng, seq::IndexedRandom};

use crate::maze::MazeGrid;

/// Depth-first carve: step to a random unvisited neighbor, knocking the wall
/// down, and backtrack when the current cell has none left.
pub fn recursive_backtrack<G: MazeGrid, R: Rng + ?Sized>(grid: &mut G, rng: &mut R) {
    if grid.cell_count() == 0 {
        return;
    }
    grid.reset_visited();

    let start = grid.coord_at(rng.random_range(0..grid.cell_count()));
    grid.set_visited(start, true);

    // The stack only ever holds visited cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = grid.unvisited_neighbors(cell);

        if let Some(&next) = neighbors.choose(rng) {
            grid.remove_walls(cell, next.coord, next.direction);
            grid.set_visited(next.coord, true);
            // `cell` stays on the stack until all of its neighbors are visited
            stack.push(cell);
            stack.push(next.coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::{CircularGrid, RectGrid, is_perfect},
        random::{get_rng, scripted::Scripted},
    };

    #[test]
    fn test_recursive_backtrack_golden_4x4() {
        let mut grid = RectGrid::new(4, 4);
        // Start at index 6, i.e. (2, 1), then pick among the unvisited neighbors
        // at each step. Later draws default to the first neighbor.
        let mut rng = Scripted::picks(&[(6, 16), (1, 4), (0, 2), (0, 1), (0, 1), (0, 2), (1, 2)]);
        recursive_backtrack(&mut grid, &mut rng);
        let expected = "\
+---+---+---+---+
|   |           |
+   +   +---+   +
|       |       |
+   +---+---+---+
|               |
+---+---+---+   +
|               |
+---+---+---+---+
";
        assert_eq!(grid.to_string(), expected);
        assert!(is_perfect(&grid));
        assert!(grid.cells().all(|c| c.visited));
    }

    #[test]
    fn test_recursive_backtrack_zero_draws_snakes() {
        // Always taking the first unvisited neighbor from (0, 0) visits every cell in one run.
        let mut grid = RectGrid::new(3, 2);
        recursive_backtrack(&mut grid, &mut Scripted::zeros());
        assert!(is_perfect(&grid));
        assert_eq!(crate::maze::dead_end_count(&grid), 2);
    }

    #[test]
    fn test_recursive_backtrack_circular() {
        let mut grid = CircularGrid::new(5, 12, false);
        recursive_backtrack(&mut grid, &mut get_rng(Some(42)));
        assert!(is_perfect(&grid));
        assert!(grid.carves_open_both_sides());
    }

    #[test]
    fn test_resets_stale_visited_flags() {
        let mut grid = RectGrid::new(3, 3);
        grid.set_visited((1, 1), true);
        recursive_backtrack(&mut grid, &mut get_rng(Some(1)));
        assert!(is_perfect(&grid));
    }
}

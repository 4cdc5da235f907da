use rand::Rng;

use crate::maze::{Edge, MazeGrid};

/// Randomized Prim: grow the maze from one cell by repeatedly opening a random
/// wall from the frontier, i.e. a wall between a visited cell and an unvisited one.
pub fn randomized_prim<G: MazeGrid, R: Rng + ?Sized>(grid: &mut G, rng: &mut R) {
    if grid.cell_count() == 0 {
        return;
    }
    grid.reset_visited();

    let start = grid.coord_at(rng.random_range(0..grid.cell_count()));
    grid.set_visited(start, true);

    let mut frontier: Vec<Edge<G::Coord, G::Direction>> = Vec::new();
    push_frontier(grid, start, &mut frontier);

    while !frontier.is_empty() {
        // Uniform pick; frontier order carries no meaning
        let idx = rng.random_range(0..frontier.len());
        let wall = frontier.swap_remove(idx);

        // Another wall may have reached this cell since the wall was queued
        if grid.is_visited(wall.to) {
            continue;
        }

        grid.remove_walls(wall.from, wall.to, wall.direction);
        grid.set_visited(wall.to, true);
        push_frontier(grid, wall.to, &mut frontier);
    }
}

/// Queue the walls between `cell` and each of its unvisited neighbors.
fn push_frontier<G: MazeGrid>(
    grid: &G,
    cell: G::Coord,
    frontier: &mut Vec<Edge<G::Coord, G::Direction>>,
) {
    frontier.extend(grid.unvisited_neighbors(cell).into_iter().map(|n| Edge {
        from: cell,
        to: n.coord,
        direction: n.direction,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::{CircularGrid, RectDirection, RectGrid, is_perfect},
        random::{get_rng, scripted::Scripted},
    };

    #[test]
    fn test_prim_zero_draws() {
        // Start (0,0): frontier [E(1,0), S(0,1)]. Draw 0 opens (0,0)E and swaps
        // S(0,1) to the front, which is opened next. Then (1,0)'s S(1,1) closes it out.
        let mut grid = RectGrid::new(2, 2);
        randomized_prim(&mut grid, &mut Scripted::zeros());
        assert!(is_perfect(&grid));
        assert!(!grid.has_wall((0, 0), RectDirection::East));
        assert!(!grid.has_wall((0, 0), RectDirection::South));
        assert!(!grid.has_wall((1, 0), RectDirection::South));
        assert!(grid.has_wall((0, 1), RectDirection::East));
    }

    #[test]
    fn test_prim_rect() {
        let mut grid = RectGrid::new(9, 14);
        randomized_prim(&mut grid, &mut get_rng(Some(21)));
        assert!(is_perfect(&grid));
        assert!(grid.walls_consistent());
        assert!(grid.cells().all(|c| c.visited));
    }

    #[test]
    fn test_prim_circular() {
        let mut grid = CircularGrid::new(5, 12, false);
        randomized_prim(&mut grid, &mut get_rng(Some(21)));
        assert!(is_perfect(&grid));
        assert!(grid.cells().all(|c| c.visited));
    }
}

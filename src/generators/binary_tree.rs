use rand::{Rng, seq::IndexedRandom};

use crate::maze::{MazeGrid, RectDirection, RectGrid};

/// Single row-major pass: every cell opens either its north or its west wall.
/// Row 0 can only go west and column 0 only north, so the result is a tree
/// rooted at (0, 0) with long open corridors along the top and left edges.
pub fn binary_tree<R: Rng + ?Sized>(grid: &mut RectGrid, rng: &mut R) {
    grid.reset_visited();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let options = [RectDirection::North, RectDirection::West]
                .into_iter()
                .filter_map(|direction| grid.step((x, y), direction).map(|next| (direction, next)))
                .collect::<Vec<_>>();

            // Only (0, 0) has no option
            if let Some(&(direction, next)) = options.choose(rng) {
                grid.remove_walls((x, y), next, direction);
            }
        }
    }
}

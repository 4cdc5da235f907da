use rand::{Rng, seq::SliceRandom};

use crate::maze::MazeGrid;

/// Disjoint sets over dense cell indices, with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point everything on the path straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets holding `a` and `b`. Returns `false` if they already share one.
    fn unite(&mut self, a: usize, b: usize) -> bool {
        let (mut tall, mut short) = (self.find(a), self.find(b));
        if tall == short {
            return false;
        }
        if self.rank[tall] < self.rank[short] {
            std::mem::swap(&mut tall, &mut short);
        }
        self.parent[short] = tall;
        if self.rank[tall] == self.rank[short] {
            self.rank[tall] += 1;
        }
        true
    }
}

/// Random spanning tree: walk every wall once in shuffled order and knock it
/// down whenever the cells on either side are not yet connected.
pub fn randomized_kruskal<G: MazeGrid, R: Rng + ?Sized>(grid: &mut G, rng: &mut R) {
    if grid.cell_count() == 0 {
        return;
    }
    grid.reset_visited();

    let mut edges = grid.wall_edges();
    edges.shuffle(rng);

    let mut sets = UnionFind::new(grid.cell_count());
    let mut carved = 0;

    for edge in edges {
        let from = grid.index_of(edge.from);
        let to = grid.index_of(edge.to);

        if sets.unite(from, to) {
            grid.remove_walls(edge.from, edge.to, edge.direction);
            grid.set_visited(edge.from, true);
            grid.set_visited(edge.to, true);
            carved += 1;
        }
    }

    tracing::debug!(
        "[kruskal] carved {} passages across {} cells",
        carved,
        grid.cell_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::{CircularGrid, RectDirection, RectGrid, is_perfect},
        random::{get_rng, scripted::Scripted},
    };

    #[test]
    fn test_union_find() {
        let mut sets = UnionFind::new(6);
        assert!(sets.unite(0, 1));
        assert!(sets.unite(2, 3));
        assert!(sets.unite(1, 3));
        assert!(!sets.unite(0, 2));
        assert_eq!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(0), sets.find(4));
        assert!(sets.unite(4, 5));
        assert!(sets.unite(5, 0));
        let root = sets.find(0);
        assert!((0..6).all(|i| sets.find(i) == root));
    }

    #[test]
    fn test_kruskal_zero_draws() {
        // Zero draws move the last edge to the front. On a 2x2 grid the edges
        // are (0,0)E, (0,0)S, (1,0)S, (0,1)E, so the walk is (0,1)E, (0,0)E,
        // (0,0)S and then (1,0)S closes a cycle and is skipped.
        let mut grid = RectGrid::new(2, 2);
        randomized_kruskal(&mut grid, &mut Scripted::zeros());
        assert!(is_perfect(&grid));
        assert!(!grid.has_wall((0, 1), RectDirection::East));
        assert!(!grid.has_wall((0, 0), RectDirection::East));
        assert!(!grid.has_wall((0, 0), RectDirection::South));
        assert!(grid.has_wall((1, 0), RectDirection::South));
    }

    #[test]
    fn test_kruskal_rect() {
        let mut grid = RectGrid::new(12, 7);
        randomized_kruskal(&mut grid, &mut get_rng(Some(9)));
        assert!(is_perfect(&grid));
        assert!(grid.walls_consistent());
        assert!(grid.cells().all(|c| c.visited));
    }

    #[test]
    fn test_kruskal_circular() {
        let mut grid = CircularGrid::new(6, 24, true);
        randomized_kruskal(&mut grid, &mut get_rng(Some(9)));
        assert!(is_perfect(&grid));
        assert!(grid.carves_open_both_sides());
    }
}

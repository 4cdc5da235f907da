mod binary_tree;
mod kruskal;
mod prim;
mod recur_backtrack;

use std::str::FromStr;

pub use binary_tree::binary_tree;
pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;

use rand::Rng;

use crate::{
    error::Error,
    maze::{CircularGrid, RectGrid},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Kruskal,
    Prim,
    /// Rectangular grids only.
    BinaryTree,
}

impl Generator {
    pub const ALL: [Generator; 4] = [
        Generator::RecurBacktrack,
        Generator::Kruskal,
        Generator::Prim,
        Generator::BinaryTree,
    ];

    /// The selector name this generator is chosen by.
    pub fn name(&self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "backtracker",
            Generator::Kruskal => "kruskal",
            Generator::Prim => "prim",
            Generator::BinaryTree => "binarytree",
        }
    }

    /// Looks a generator up by selector name, falling back to the recursive
    /// backtracker for anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            tracing::warn!("[generate] {}, using {}", err, Generator::RecurBacktrack);
            Generator::RecurBacktrack
        })
    }

    pub fn supports_circular(&self) -> bool {
        !matches!(self, Generator::BinaryTree)
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == name)
            .ok_or_else(|| Error::UnknownGenerator(s.to_string()))
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
        }
    }
}

/// Carves a perfect maze into a fully walled rectangular grid.
pub fn generate_rect_maze<R: Rng + ?Sized>(
    grid: &mut RectGrid,
    generator: Generator,
    rng: &mut R,
) {
    tracing::debug!(
        "[generate] {} on {}x{} rectangular grid",
        generator,
        grid.width(),
        grid.height()
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
        Generator::Kruskal => randomized_kruskal(grid, rng),
        Generator::Prim => randomized_prim(grid, rng),
        Generator::BinaryTree => binary_tree(grid, rng),
    }
}

/// Carves a maze into a fully walled circular grid. The binary tree has no
/// polar form, so it falls back to the recursive backtracker.
pub fn generate_circular_maze<R: Rng + ?Sized>(
    grid: &mut CircularGrid,
    generator: Generator,
    rng: &mut R,
) {
    tracing::debug!(
        "[generate] {} on circular grid with {} rings, {} outer sectors",
        generator,
        grid.rings(),
        grid.sectors_in_outer_ring()
    );
    match generator {
        Generator::Kruskal => randomized_kruskal(grid, rng),
        Generator::Prim => randomized_prim(grid, rng),
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
        Generator::BinaryTree => {
            tracing::warn!(
                "[generate] {} is rectangular only, using {}",
                generator,
                Generator::RecurBacktrack
            );
            recursive_backtrack(grid, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::{MazeGrid, is_perfect},
        random::get_rng,
    };

    #[test]
    fn test_parse_names() {
        assert_eq!("kruskal".parse::<Generator>(), Ok(Generator::Kruskal));
        assert_eq!(" Prim ".parse::<Generator>(), Ok(Generator::Prim));
        assert_eq!("binarytree".parse::<Generator>(), Ok(Generator::BinaryTree));
        assert_eq!(
            "wilson".parse::<Generator>(),
            Err(Error::UnknownGenerator("wilson".to_string()))
        );
        for generator in Generator::ALL {
            assert_eq!(generator.name().parse::<Generator>(), Ok(generator));
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_backtracker() {
        assert_eq!(Generator::from_name("eller"), Generator::RecurBacktrack);
        assert_eq!(Generator::from_name(""), Generator::RecurBacktrack);
        assert_eq!(Generator::from_name("prim"), Generator::Prim);
        assert_eq!(Generator::default(), Generator::RecurBacktrack);
    }

    #[test]
    fn test_binary_tree_on_circular_falls_back() {
        let mut a = CircularGrid::new(4, 16, false);
        let mut b = CircularGrid::new(4, 16, false);
        generate_circular_maze(&mut a, Generator::BinaryTree, &mut get_rng(Some(5)));
        generate_circular_maze(&mut b, Generator::RecurBacktrack, &mut get_rng(Some(5)));
        assert!(is_perfect(&a));
        assert_eq!(a.passages(), b.passages());
    }
}

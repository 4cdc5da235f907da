use std::str::FromStr;

use rand::{Rng, rngs::StdRng};

use crate::{
    error::{Error, Result},
    generators::{Generator, generate_circular_maze, generate_rect_maze},
    geometry::{WallSegment, circular_segments, rect_layout},
    maze::{self, CircularGrid, MazeGrid, RectGrid, RingBoundary},
    random::get_rng,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Rectangular,
    #[default]
    Circular,
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Rectangular => "rectangular",
            Topology::Circular => "circular",
        }
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(Topology::Rectangular),
            "circular" => Ok(Topology::Circular),
            _ => Err(Error::UnknownTopology(s.to_string())),
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything needed to build one maze. Only the dimensions of the selected
/// topology are used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub topology: Topology,
    pub width: usize,
    pub height: usize,
    pub rings: usize,
    pub sectors_in_outer_ring: usize,
    pub center_open: bool,
    pub generator: Generator,
    pub ring_boundary: RingBoundary,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Circular,
            width: 10,
            height: 10,
            rings: 5,
            sectors_in_outer_ring: 12,
            center_open: false,
            generator: Generator::RecurBacktrack,
            ring_boundary: RingBoundary::Symmetric,
        }
    }
}

impl MazeConfig {
    pub fn rectangular(width: usize, height: usize) -> Self {
        Self {
            topology: Topology::Rectangular,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn circular(rings: usize, sectors_in_outer_ring: usize, center_open: bool) -> Self {
        Self {
            topology: Topology::Circular,
            rings,
            sectors_in_outer_ring,
            center_open,
            ..Self::default()
        }
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_ring_boundary(mut self, ring_boundary: RingBoundary) -> Self {
        self.ring_boundary = ring_boundary;
        self
    }

    /// Rejects dimensions that would leave the grid without cells.
    pub fn validate(&self) -> Result<()> {
        match self.topology {
            Topology::Rectangular if self.width == 0 || self.height == 0 => {
                Err(Error::InvalidDimensions(format!(
                    "rectangular grid must be at least 1x1, got {}x{}",
                    self.width, self.height
                )))
            }
            Topology::Circular if self.rings == 0 || self.sectors_in_outer_ring == 0 => {
                Err(Error::InvalidDimensions(format!(
                    "circular grid needs rings and outer sectors, got {} rings and {} sectors",
                    self.rings, self.sectors_in_outer_ring
                )))
            }
            Topology::Circular if self.center_open && self.rings < 2 => {
                Err(Error::InvalidDimensions(
                    "an open centre needs at least 2 rings".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// A carved maze, ready for geometry builders.
#[derive(Debug, Clone)]
pub enum Maze {
    Rectangular(RectGrid),
    Circular(CircularGrid),
}

impl Maze {
    pub fn topology(&self) -> Topology {
        match self {
            Maze::Rectangular(_) => Topology::Rectangular,
            Maze::Circular(_) => Topology::Circular,
        }
    }

    pub fn cell_count(&self) -> usize {
        match self {
            Maze::Rectangular(grid) => grid.cell_count(),
            Maze::Circular(grid) => grid.cell_count(),
        }
    }

    /// Passages carved by the generator.
    pub fn passage_count(&self) -> usize {
        match self {
            Maze::Rectangular(grid) => grid.passages().len(),
            Maze::Circular(grid) => grid.passages().len(),
        }
    }

    /// Adjacent pairs with both facing walls down, as drawn. Matches
    /// `passage_count` on rectangular mazes. Circular mazes can show extra
    /// openings where ring sector counts do not line up.
    pub fn open_connection_count(&self) -> usize {
        match self {
            Maze::Rectangular(grid) => grid.passages().len(),
            Maze::Circular(grid) => grid.open_connections().len(),
        }
    }

    pub fn dead_ends(&self) -> usize {
        match self {
            Maze::Rectangular(grid) => maze::dead_end_count(grid),
            Maze::Circular(grid) => maze::dead_end_count(grid),
        }
    }

    /// Whether the carved passages form a spanning tree. For circular mazes
    /// the wall flags may still show extra openings, see `open_connection_count`.
    pub fn is_perfect(&self) -> bool {
        match self {
            Maze::Rectangular(grid) => maze::is_perfect(grid),
            Maze::Circular(grid) => maze::is_perfect(grid),
        }
    }

    /// Standing walls as segments on a square canvas of side `canvas_size`.
    pub fn wall_segments(&self, canvas_size: f64, thickness: f64) -> Vec<WallSegment> {
        match self {
            Maze::Rectangular(grid) => rect_layout(grid, canvas_size, canvas_size, thickness).walls,
            Maze::Circular(grid) => circular_segments(grid, canvas_size, thickness),
        }
    }

    pub fn as_rect(&self) -> Option<&RectGrid> {
        match self {
            Maze::Rectangular(grid) => Some(grid),
            Maze::Circular(_) => None,
        }
    }

    pub fn as_circular(&self) -> Option<&CircularGrid> {
        match self {
            Maze::Circular(grid) => Some(grid),
            Maze::Rectangular(_) => None,
        }
    }
}

/// Builds a fresh grid for `config` and carves it.
pub fn build_maze<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> Result<Maze> {
    config.validate()?;

    let maze = match config.topology {
        Topology::Rectangular => {
            let mut grid = RectGrid::new(config.width, config.height);
            generate_rect_maze(&mut grid, config.generator, rng);
            Maze::Rectangular(grid)
        }
        Topology::Circular => {
            let mut grid = CircularGrid::new(
                config.rings,
                config.sectors_in_outer_ring,
                config.center_open,
            )
            .with_ring_boundary(config.ring_boundary);
            tracing::debug!(
                "[spinner] {:?} ring boundaries, centre open: {}",
                grid.ring_boundary(),
                grid.center_open()
            );
            generate_circular_maze(&mut grid, config.generator, rng);
            Maze::Circular(grid)
        }
    };

    tracing::info!(
        "[spinner] built {} maze with {}: {} cells, {} dead ends",
        config.topology,
        config.generator,
        maze.cell_count(),
        maze.dead_ends()
    );
    Ok(maze)
}

/// Owns a configuration and the random source, and builds mazes on demand.
pub struct MazeSpinner {
    config: MazeConfig,
    rng: StdRng,
}

impl MazeSpinner {
    /// `seed` makes the sequence of generated mazes reproducible.
    pub fn new(config: MazeConfig, seed: Option<u64>) -> Self {
        Self {
            config,
            rng: get_rng(seed),
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn generate(&mut self) -> Result<Maze> {
        build_maze(&self.config, &mut self.rng)
    }

    /// Applies `update` to the current configuration and builds a new maze
    /// from it. An invalid update is rolled back.
    pub fn regenerate(&mut self, update: impl FnOnce(&mut MazeConfig)) -> Result<Maze> {
        let mut config = self.config.clone();
        update(&mut config);
        config.validate()?;
        self.config = config;
        self.generate()
    }
}

//! Perfect-maze generation on rectangular and circular grids.
//!
//! A grid starts with every wall standing; a generator carves passages until
//! the open connections form a spanning tree. The carved grid can then be
//! turned into wall segments for a renderer or physics engine.

pub mod error;
pub mod generators;
pub mod geometry;
pub mod maze;
pub mod random;
pub mod spinner;

pub use error::{Error, Result};
pub use generators::Generator;
pub use maze::{CircularGrid, MazeGrid, RectGrid, RingBoundary};
pub use spinner::{Maze, MazeConfig, MazeSpinner, Topology, build_maze};

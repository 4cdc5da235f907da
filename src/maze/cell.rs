use std::fmt;

/// The four sides of a rectangular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectDirection {
    North,
    East,
    South,
    West,
}

impl RectDirection {
    pub const ALL: [RectDirection; 4] = [
        RectDirection::North,
        RectDirection::East,
        RectDirection::South,
        RectDirection::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            RectDirection::North => RectDirection::South,
            RectDirection::East => RectDirection::West,
            RectDirection::South => RectDirection::North,
            RectDirection::West => RectDirection::East,
        }
    }

    /// Offset (dx, dy) of the neighbor across this side. North is towards row 0.
    pub fn offset(self) -> (i64, i64) {
        match self {
            RectDirection::North => (0, -1),
            RectDirection::East => (1, 0),
            RectDirection::South => (0, 1),
            RectDirection::West => (-1, 0),
        }
    }
}

/// Wall flags of a rectangular cell. `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectWalls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl RectWalls {
    pub const ALL_STANDING: RectWalls = RectWalls {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    pub fn get(&self, direction: RectDirection) -> bool {
        match direction {
            RectDirection::North => self.north,
            RectDirection::East => self.east,
            RectDirection::South => self.south,
            RectDirection::West => self.west,
        }
    }

    pub fn set(&mut self, direction: RectDirection, standing: bool) {
        match direction {
            RectDirection::North => self.north = standing,
            RectDirection::East => self.east = standing,
            RectDirection::South => self.south = standing,
            RectDirection::West => self.west = standing,
        }
    }

    pub fn count(&self) -> usize {
        RectDirection::ALL
            .iter()
            .filter(|&&direction| self.get(direction))
            .count()
    }
}

/// A cell of the rectangular grid, identified by its (x, y) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectCell {
    pub x: usize,
    pub y: usize,
    pub walls: RectWalls,
    /// Scratch flag used only while a generator runs.
    pub visited: bool,
}

impl RectCell {
    pub fn new(x: usize, y: usize) -> Self {
        RectCell {
            x,
            y,
            walls: RectWalls::ALL_STANDING,
            visited: false,
        }
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// The four faces of a ring cell: towards the centre, away from it, and
/// along the ring in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingDirection {
    Inner,
    Outer,
    Cw,
    Ccw,
}

impl RingDirection {
    pub fn opposite(self) -> Self {
        match self {
            RingDirection::Inner => RingDirection::Outer,
            RingDirection::Outer => RingDirection::Inner,
            RingDirection::Cw => RingDirection::Ccw,
            RingDirection::Ccw => RingDirection::Cw,
        }
    }
}

impl fmt::Display for RingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingDirection::Inner => write!(f, "inner"),
            RingDirection::Outer => write!(f, "outer"),
            RingDirection::Cw => write!(f, "cw"),
            RingDirection::Ccw => write!(f, "ccw"),
        }
    }
}

/// A cell of the circular grid, identified by (ring, sector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingCell {
    pub ring: usize,
    pub sector: usize,
    /// Number of sectors in this cell's ring.
    pub total_sectors: usize,
    pub inner: bool,
    pub outer: bool,
    pub cw: bool,
    pub ccw: bool,
    /// Scratch flag used only while a generator runs.
    pub visited: bool,
}

impl RingCell {
    pub fn new(ring: usize, sector: usize, total_sectors: usize) -> Self {
        RingCell {
            ring,
            sector,
            total_sectors,
            inner: true,
            outer: true,
            cw: true,
            ccw: true,
            visited: false,
        }
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.ring, self.sector)
    }

    pub fn wall(&self, direction: RingDirection) -> bool {
        match direction {
            RingDirection::Inner => self.inner,
            RingDirection::Outer => self.outer,
            RingDirection::Cw => self.cw,
            RingDirection::Ccw => self.ccw,
        }
    }

    pub fn set_wall(&mut self, direction: RingDirection, standing: bool) {
        match direction {
            RingDirection::Inner => self.inner = standing,
            RingDirection::Outer => self.outer = standing,
            RingDirection::Cw => self.cw = standing,
            RingDirection::Ccw => self.ccw = standing,
        }
    }

    /// Angle in radians at which this cell's sector starts.
    pub fn start_angle(&self) -> f64 {
        std::f64::consts::TAU * self.sector as f64 / self.total_sectors as f64
    }
}

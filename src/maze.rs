//! Logical maze structs and utilities.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Enum for the four cell boundaries.
///
/// The discriminants match the order wall flags appear on a maze file line.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Toward larger `y`
    North = 0,
    /// Toward larger `x`
    East = 1,
    /// Toward smaller `y`
    South = 2,
    /// Toward smaller `x`
    West = 3,
}

/// All four directions, in the order wall flags appear on a maze file line.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Returns the direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// One maze cell: a wall flag for each of its four boundaries.
///
/// A set flag means the wall is present. Each cell carries its own copy of a
/// shared wall; see [`Maze::has_consistent_walls`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Wall on the north boundary.
    pub north: bool,
    /// Wall on the east boundary.
    pub east: bool,
    /// Wall on the south boundary.
    pub south: bool,
    /// Wall on the west boundary.
    pub west: bool,
}

impl Tile {
    /// Creates a tile with the given wall flags.
    pub fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Tile {
            north,
            east,
            south,
            west,
        }
    }

    /// Creates a tile with no walls.
    pub fn open() -> Self {
        Tile::default()
    }

    /// Creates a tile with all four walls.
    pub fn walled() -> Self {
        Tile::new(true, true, true, true)
    }

    /// Returns whether the wall in the given direction is present.
    pub fn wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Sets or clears the wall in the given direction.
    pub fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.north = present,
            Direction::East => self.east = present,
            Direction::South => self.south = present,
            Direction::West => self.west = present,
        }
    }
}

/// A maze: columns of [`Tile`]s, west to east, each column running south to
/// north.
///
/// `x` selects the column and grows eastward; `y` selects the row within a
/// column and grows northward, so `(0, 0)` is the south-west cell. Columns may
/// have different lengths.
///
/// # Examples
///
/// ```
/// use micromouse_maze::maze::Maze;
///
/// let maze = Maze::open(4, 3);
/// assert_eq!(maze.width(), 4);
/// assert!(maze.at(0, 0).unwrap().west);
/// assert!(!maze.at(1, 1).unwrap().north);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    columns: Vec<Vec<Tile>>,
}

impl Maze {
    /// Creates an empty maze.
    pub fn new() -> Self {
        Maze::default()
    }

    /// Creates a maze from explicit columns.
    pub fn from_columns(columns: Vec<Vec<Tile>>) -> Self {
        Maze { columns }
    }

    /// Creates a rectangular maze with every wall of every tile present.
    ///
    /// Zero in either dimension gives the empty maze.
    pub fn closed(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Maze::new();
        }
        Maze {
            columns: vec![vec![Tile::walled(); height]; width],
        }
    }

    /// Creates a rectangular maze with walls on the perimeter only.
    ///
    /// Zero in either dimension gives the empty maze.
    pub fn open(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Maze::new();
        }
        let mut maze = Maze {
            columns: vec![vec![Tile::open(); height]; width],
        };
        for x in 0..width {
            maze.columns[x][0].south = true;
            maze.columns[x][height - 1].north = true;
        }
        for y in 0..height {
            maze.columns[0][y].west = true;
            maze.columns[width - 1][y].east = true;
        }
        maze
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether the maze has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column at `x`, if it exists.
    pub fn column(&self, x: usize) -> Option<&[Tile]> {
        self.columns.get(x).map(|column| column.as_slice())
    }

    /// Returns the tile at `(x, y)`, if it exists.
    pub fn at(&self, x: usize, y: usize) -> Option<Tile> {
        self.columns.get(x)?.get(y).copied()
    }

    /// Returns a mutable reference to the tile at `(x, y)`, if it exists.
    pub fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.columns.get_mut(x)?.get_mut(y)
    }

    /// Appends a column on the east side.
    pub fn push_column(&mut self, column: Vec<Tile>) {
        self.columns.push(column);
    }

    /// Returns the position adjacent to `(x, y)` in the given direction, if
    /// both positions exist in the maze.
    ///
    /// Columns of different lengths are respected: a tile's east neighbor
    /// exists only if the next column is tall enough to contain it.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        self.at(x, y)?;
        let (nx, ny) = match direction {
            Direction::North => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::South => {
                if y == 0 {
                    return None;
                }
                (x, y - 1)
            }
            Direction::West => {
                if x == 0 {
                    return None;
                }
                (x - 1, y)
            }
        };
        self.at(nx, ny)?;
        Some((nx, ny))
    }

    /// Returns whether every column has the same length.
    ///
    /// The empty maze is rectangular.
    pub fn is_rectangular(&self) -> bool {
        match self.columns.first() {
            Some(first) => self
                .columns
                .iter()
                .all(|column| column.len() == first.len()),
            None => true,
        }
    }

    /// Returns whether every pair of adjacent tiles agrees about the wall
    /// between them.
    ///
    /// This is a structural property, not a file format rule: a maze whose
    /// cells disagree still loads and saves.
    pub fn has_consistent_walls(&self) -> bool {
        for x in 0..self.columns.len() {
            for y in 0..self.columns[x].len() {
                let tile = self.columns[x][y];
                for direction in DIRECTIONS {
                    if let Some((nx, ny)) = self.neighbor(x, y, direction) {
                        if tile.wall(direction) != self.columns[nx][ny].wall(direction.opposite()) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

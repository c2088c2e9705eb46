//! A set of pre-made general purpose mazes

use crate::maze::{Maze, Tile};
use serde::{Deserialize, Serialize};

/// The mazes that ship with the crate.
///
/// Each variant has a matching file under `mazes/`, except [`Closed`], which
/// exists as a starting point for carving rather than something worth keeping
/// on disk.
///
/// [`Closed`]: StandardMaze::Closed
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// 4x4, walls on the perimeter only
    #[default]
    Open,
    /// 2x2, every wall present
    Closed,
    /// 3x3, one corridor snaking between the south-west and north-east corners
    Zigzag,
    /// Two columns of different lengths
    Ragged,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 4] {
        [Self::Open, Self::Closed, Self::Zigzag, Self::Ragged]
    }

    /// Get the [`Maze`] associated with this enum
    ///
    /// ```
    /// use micromouse_maze::standard_mazes::StandardMaze;
    ///
    /// assert!(StandardMaze::Zigzag.get_maze().has_consistent_walls());
    /// ```
    pub fn get_maze(&self) -> Maze {
        match self {
            Self::Open => Maze::open(4, 4),
            Self::Closed => Maze::closed(2, 2),
            Self::Zigzag => zigzag(),
            Self::Ragged => ragged(),
        }
    }
}

/// One corridor: east along the bottom row, west along the middle row, east
/// along the top row.
fn zigzag() -> Maze {
    Maze::from_columns(vec![
        vec![
            Tile::new(true, false, true, true),
            Tile::new(false, false, true, true),
            Tile::new(true, false, false, true),
        ],
        vec![
            Tile::new(true, false, true, false),
            Tile::new(true, false, true, false),
            Tile::new(true, false, true, false),
        ],
        vec![
            Tile::new(false, true, true, false),
            Tile::new(true, true, false, false),
            Tile::new(true, true, true, false),
        ],
    ])
}

/// A column of two cells next to a column of one.
fn ragged() -> Maze {
    Maze::from_columns(vec![
        vec![
            Tile::new(true, true, false, false),
            Tile::new(false, true, true, false),
        ],
        vec![Tile::new(true, false, false, true)],
    ])
}

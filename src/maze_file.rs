//! Reading, writing, and validation of maze description files.
//!
//! A maze file is plain text with one line per cell: the cell's `x` and `y`
//! position followed by four `0`/`1` wall flags in north, east, south, west
//! order. Lines are grouped into columns by `x` value, south to north within
//! a column and west to east between columns. Columns may have different
//! lengths; there is no header, footer, or comment syntax.

use crate::maze::{Maze, Tile, DIRECTIONS};
use anyhow::{anyhow, Error};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Checks that the file at `path` is a conformant maze description.
///
/// A conformant file must satisfy the following conditions:
/// - The file exists and is not empty.
/// - Every line consists of exactly six whitespace-separated integer values.
/// - The first line describes cell `(0, 0)`; every later line either
///   continues the current column (same `x`, `y` one greater) or starts the
///   next column (`x` one greater, `y` of 0).
/// - The last four values on every line are each either 0 or 1.
///
/// The maze does not have to be rectangular. Validation stops at the first
/// violation; the returned error names the file, the 1-indexed line, and the
/// offending values.
pub fn validate_maze_file(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(anyhow!("\"{}\" is not a file", path.display()));
    }

    let file = File::open(path).map_err(|e| {
        anyhow!(
            "Could not open \"{}\" for maze validation: {}",
            path.display(),
            e
        )
    })?;

    let mut line_num = 0;
    let mut expected_x = 0;
    let mut expected_y = 0;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| anyhow!("Could not read \"{}\": {}", path.display(), e))?;
        line_num += 1;

        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != 6 {
            return Err(anyhow!(
                "\"{}\" does not contain six values on line {}: found {}",
                path.display(),
                line_num,
                tokens.len()
            ));
        }

        let mut values = [0i32; 6];
        for (i, token) in tokens.iter().enumerate() {
            values[i] = token.parse().map_err(|_| {
                anyhow!(
                    "\"{}\" contains a non-numeric value on line {}: \"{}\" in position {}",
                    path.display(),
                    line_num,
                    token,
                    i + 1
                )
            })?;
        }

        // a y of 0 is only expected on the very first line or at the start of
        // a later column; `expected_y != 0` forces the first line to be (0, 0)
        let continues_column = values[0] == expected_x && values[1] == expected_y;
        let starts_column = values[0] == expected_x + 1 && values[1] == 0 && expected_y != 0;
        if continues_column {
            expected_y += 1;
        } else if starts_column {
            expected_x += 1;
            expected_y = 1;
        } else {
            return Err(anyhow!(
                "\"{}\" contains unexpected x and y values {} and {} on line {}",
                path.display(),
                values[0],
                values[1],
                line_num
            ));
        }

        for (i, &value) in values[2..].iter().enumerate() {
            if value != 0 && value != 1 {
                return Err(anyhow!(
                    "\"{}\" contains an invalid wall value {} in position {} on line {}: \
                     wall values must be 0 or 1",
                    path.display(),
                    value,
                    i + 3,
                    line_num
                ));
            }
        }
    }

    if line_num == 0 {
        return Err(anyhow!("\"{}\" is empty", path.display()));
    }

    Ok(())
}

/// Returns whether the file at `path` is a conformant maze description.
///
/// On failure the diagnostic from [`validate_maze_file`] is logged as a
/// warning.
///
/// # Examples
///
/// ```
/// use micromouse_maze::maze_file::is_maze_file;
///
/// assert!(is_maze_file(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/zigzag.maz")));
/// assert!(!is_maze_file("no_such_file.maz"));
/// ```
pub fn is_maze_file(path: impl AsRef<Path>) -> bool {
    match validate_maze_file(path) {
        Ok(()) => true,
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

/// Loads the maze description at `path`.
///
/// The file is validated first, so a non-conformant file is an error rather
/// than a mangled maze. Columns are inferred from the `x` values: a line
/// whose `x` exceeds the number of completed columns closes the column in
/// progress.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, Error> {
    let path = path.as_ref();

    validate_maze_file(path)?;

    let file = File::open(path)
        .map_err(|e| anyhow!("Could not open \"{}\" for reading: {}", path.display(), e))?;

    let mut maze = Maze::new();
    let mut column = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| anyhow!("Could not read \"{}\": {}", path.display(), e))?;
        let values = line
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut tile = Tile::open();
        for (i, direction) in DIRECTIONS.into_iter().enumerate() {
            tile.set_wall(direction, values[2 + i] == 1);
        }

        if (maze.width() as i32) < values[0] {
            maze.push_column(column);
            column = Vec::new();
        }

        column.push(tile);
    }

    // the last column has no trailing marker
    maze.push_column(column);

    Ok(maze)
}

/// Writes `maze` to `path` in the maze description format.
///
/// Any existing file is overwritten. Wall flags are written in the
/// [`DIRECTIONS`] order and every line, the last included, ends with a
/// newline. A failure partway through leaves the partial file behind.
///
/// # Examples
///
/// ```
/// use micromouse_maze::maze::Maze;
/// use micromouse_maze::maze_file::{load_maze, save_maze};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("open.maz");
/// save_maze(&Maze::open(2, 2), &path).unwrap();
/// assert_eq!(load_maze(&path).unwrap(), Maze::open(2, 2));
/// ```
pub fn save_maze(maze: &Maze, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| anyhow!("Unable to save maze to \"{}\": {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);

    for x in 0..maze.width() {
        if let Some(column) = maze.column(x) {
            for (y, tile) in column.iter().enumerate() {
                write!(writer, "{} {}", x, y)?;
                for direction in DIRECTIONS {
                    write!(writer, " {}", if tile.wall(direction) { 1 } else { 0 })?;
                }
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;

    Ok(())
}

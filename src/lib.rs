#![warn(missing_docs)]
//! Reading, writing, validating, and generating micromouse maze files

pub mod generator;
pub mod maze;
pub mod maze_file;
pub mod standard_mazes;

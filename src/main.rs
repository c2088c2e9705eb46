//! Command line checker for maze description files.

use micromouse_maze::maze_file::is_maze_file;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: micromouse-maze <FILE>...");
        return ExitCode::FAILURE;
    }

    let mut all_ok = true;
    for path in &paths {
        if is_maze_file(path) {
            println!("{path}: ok");
        } else {
            all_ok = false;
            println!("{path}: not a maze file");
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

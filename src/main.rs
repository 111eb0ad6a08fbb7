//! Command-line front end for generating and solving grid mazes.
//!
//! The binary is a thin consumer of the library core: it carves a maze, prints it as ASCII
//! walls, and on request solves it and dumps the carve and visit event logs to stdout.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetrace::{Grid, MazeBuilder, PathFinder};

/// Command-line arguments for the maze generator.
#[derive(Debug, clap::Parser)]
#[command(version, about = "Generate a random grid maze and optionally solve it")]
struct Args {
    /// Number of rows in the maze grid.
    rows: usize,
    /// Number of columns in the maze grid.
    cols: usize,
    /// Seed for the maze generator; chosen at random and reported when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Start cell for the solver as `row,col`; defaults to the origin.
    #[arg(long, value_parser = parse_cell)]
    start: Option<(usize, usize)>,
    /// End cell for the solver as `row,col`; defaults to the far corner.
    #[arg(long, value_parser = parse_cell)]
    end: Option<(usize, usize)>,
    /// Solve the maze and print the shortest path.
    #[arg(long)]
    solve: bool,
    /// Dump the carve and visit event logs to stdout.
    #[arg(long)]
    trace: bool,
}

/// Parses a `row,col` cell coordinate argument.
fn parse_cell(raw: &str) -> Result<(usize, usize), String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{raw}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|error| format!("bad row in `{raw}`: {error}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|error| format!("bad column in `{raw}`: {error}"))?;

    Ok((row, col))
}

fn main() -> Result<()> {
    install()?;

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut grid = Grid::new(args.rows, args.cols)?;
    let carve_log = MazeBuilder::from_seed(seed).carve(&mut grid);

    println!("seed: {seed}");
    print!("{grid}");

    if args.trace {
        for event in &carve_log {
            let (prev_row, prev_col, prev_side) = event.prev;
            let (cur_row, cur_col, cur_side) = event.cur;
            println!(
                "carve ({prev_row}, {prev_col}) {prev_side:?} <-> ({cur_row}, {cur_col}) {cur_side:?}"
            );
        }
    }

    if args.solve {
        let start = args.start.unwrap_or((0, 0));
        let end = args.end.unwrap_or((args.rows - 1, args.cols - 1));

        let finder = PathFinder::new(&grid, start, end)?;
        let visit_log = finder.search(&mut grid);

        if args.trace {
            for event in &visit_log {
                println!(
                    "visit ({}, {}) distance {} from {:?}",
                    event.row, event.col, event.distance, event.predecessor
                );
            }
        }

        let mut path = finder.trace_back(&grid)?;
        path.reverse();

        if let Some(distance) = grid.cell(end.0, end.1)?.distance() {
            println!("distance: {distance}");
        }
        println!("path: {path:?}");
    }

    Ok(())
}

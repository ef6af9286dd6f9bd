use std::env;

use pmaze::{
    progress::ProgressHandle, solve, CellWall, Dims, Generator, Maze, NoopRenderer, SolveReport,
};
use rand::{thread_rng, Rng as _};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected 2 or 3 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Usage: ascii <width> <height> [seed]"
    );

    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let size = Dims(args[0] as i32, args[1] as i32);
    let maze = Generator::new(size)
        .expect("invalid maze size")
        .with_seed(seed)
        .generate(ProgressHandle::new(), &mut NoopRenderer)
        .expect("generation failed");

    let report = solve(&maze, ProgressHandle::new(), &mut NoopRenderer);
    show_maze(&maze, &report);
    println!(
        "solved: {} ({} cells on path, {} visited)",
        report.found,
        report.path.len(),
        report.visits
    );
}

fn show_maze(maze: &Maze, report: &SolveReport) {
    let size = maze.grid.size();

    for y in 0..size.1 {
        for x in 0..size.0 {
            print!("+");
            print!(
                "{}",
                if maze.grid.is_open(Dims(x, y), CellWall::Top) {
                    "  "
                } else {
                    "--"
                }
            );
        }
        println!("+");

        for x in 0..size.0 {
            let pos = Dims(x, y);
            print!(
                "{}",
                if maze.grid.is_open(pos, CellWall::Left) {
                    " "
                } else {
                    "|"
                }
            );
            print!(
                "{}",
                if report.path.contains(&pos) { "()" } else { "  " }
            );
        }
        println!("|");
    }

    for x in 0..size.0 {
        print!("+");
        print!(
            "{}",
            if maze.grid.is_open(Dims(x, size.1 - 1), CellWall::Bottom) {
                "  "
            } else {
                "--"
            }
        );
    }
    println!("+");
}

use hashbrown::HashSet;

use super::Maze;
use crate::dims::Dims;
use crate::grid::{CellWall, Grid};
use crate::progress::ProgressHandle;
use crate::render::Renderer;

/// Candidate order of the search: right, down, up, left. The order is an
/// implementation choice, not a contract; it decides which dead ends get
/// explored first, never whether the path is found. It is fixed so that
/// identical grids replay identical move sequences.
const CANDIDATE_ORDER: [CellWall; 4] = [
    CellWall::Right,
    CellWall::Bottom,
    CellWall::Top,
    CellWall::Left,
];

/// Outcome of a solve run.
///
/// `path` is the surviving forward chain from start to end inclusive, empty
/// when no path was found. `visits` counts distinct cells entered; every
/// cell is entered at most once, so `visits` never exceeds the cell count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveReport {
    pub found: bool,
    pub path: Vec<Dims>,
    pub visits: usize,
}

/// Searches `maze` from its entrance to its exit.
pub fn solve(maze: &Maze, progress: ProgressHandle, renderer: &mut dyn Renderer) -> SolveReport {
    solve_from(&maze.grid, maze.start, maze.end, progress, renderer)
}

/// Backtracking depth-first search over the open walls of `grid`.
///
/// Runs on an explicit stack of `(cell, next candidate)` frames, the same
/// shape the carve uses, so grid size never threatens the call stack. On a
/// carved grid the search is guaranteed to finish with `found: true`; a
/// `false` outcome is the normal report for grids whose goal is unreachable,
/// not an error.
pub fn solve_from(
    grid: &Grid,
    start: Dims,
    end: Dims,
    progress: ProgressHandle,
    renderer: &mut dyn Renderer,
) -> SolveReport {
    let cell_count = grid.size().product() as usize;
    progress.lock().from = cell_count;

    if !grid.is_in_bounds(start) || !grid.is_in_bounds(end) {
        log::warn!("solve endpoints out of bounds: {:?} -> {:?}", start, end);
        return SolveReport::default();
    }

    let mut visited: HashSet<Dims> = HashSet::with_capacity(cell_count);
    let mut stack: Vec<(Dims, usize)> = Vec::new();

    visited.insert(start);
    stack.push((start, 0));
    progress.lock().done = 1;

    let mut found = start == end;

    while !found {
        let Some(&mut (cell, ref mut next)) = stack.last_mut() else {
            break;
        };

        let mut entered = None;
        while *next < CANDIDATE_ORDER.len() {
            let wall = CANDIDATE_ORDER[*next];
            *next += 1;

            if !grid.is_open(cell, wall) {
                continue;
            }
            // open boundary walls (entrance/exit) lead outside the grid
            let Some(target) = grid.neighbor(cell, wall) else {
                continue;
            };
            if visited.contains(&target) {
                continue;
            }

            entered = Some(target);
            break;
        }

        match entered {
            Some(target) => {
                visited.insert(target);
                renderer.draw_move(cell, target, false);
                stack.push((target, 0));
                found = target == end;
            }
            None => {
                // dead end in the search, unwind one frame
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    renderer.draw_move(parent, cell, true);
                }
            }
        }

        progress.lock().done = visited.len();
        if progress.is_stopped() {
            log::debug!("solve stopped at {} of {} cells", visited.len(), cell_count);
            return SolveReport {
                found: false,
                path: Vec::new(),
                visits: visited.len(),
            };
        }
    }

    progress.lock().finish();

    SolveReport {
        found,
        path: if found {
            stack.iter().map(|&(cell, _)| cell).collect()
        } else {
            Vec::new()
        },
        visits: visited.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{solve, solve_from, Dims, Grid, SolveReport};
    use crate::algorithms::{DepthFirstSearch, Generator, GridGenerator, Maze, RndKruskals};
    use crate::grid::CellWall;
    use crate::progress::ProgressHandle;
    use crate::render::{NoopRenderer, RecordingRenderer};

    fn generate(size: Dims, seed: u64, algorithm: Box<dyn GridGenerator>) -> Maze {
        Generator::new(size)
            .unwrap()
            .with_seed(seed)
            .with_algorithm(algorithm)
            .generate(ProgressHandle::new(), &mut NoopRenderer)
            .unwrap()
    }

    fn assert_valid_path(maze: &Maze, report: &SolveReport) {
        assert!(report.found);
        assert_eq!(report.path.first(), Some(&maze.start));
        assert_eq!(report.path.last(), Some(&maze.end));
        for pair in report.path.windows(2) {
            let wall = Grid::which_wall_between(pair[0], pair[1]).expect("path cells not adjacent");
            assert!(maze.grid.is_open(pair[0], wall), "path crosses a wall");
        }
    }

    #[test]
    fn solves_generated_mazes() {
        for (size, seed) in [(Dims(2, 2), 1), (Dims(6, 4), 11), (Dims(9, 9), 23)] {
            for algorithm in [
                Box::new(DepthFirstSearch) as Box<dyn GridGenerator>,
                Box::new(RndKruskals),
            ] {
                let maze = generate(size, seed, algorithm);
                let report = solve(&maze, ProgressHandle::new(), &mut NoopRenderer);
                assert_valid_path(&maze, &report);
                assert!(report.visits <= size.product() as usize);
            }
        }
    }

    #[test]
    fn single_cell_solves_with_zero_forward_moves() {
        let maze = generate(Dims(1, 1), 0, Box::new(DepthFirstSearch));
        let mut renderer = RecordingRenderer::new();
        let report = solve(&maze, ProgressHandle::new(), &mut renderer);
        assert_eq!(
            report,
            SolveReport {
                found: true,
                path: vec![Dims(0, 0)],
                visits: 1,
            }
        );
        assert!(renderer.moves.is_empty());
    }

    #[test]
    fn each_cell_is_entered_at_most_once() {
        let maze = generate(Dims(10, 10), 77, Box::new(DepthFirstSearch));
        let mut renderer = RecordingRenderer::new();
        let report = solve(&maze, ProgressHandle::new(), &mut renderer);
        assert!(report.found);

        let forward: Vec<_> = renderer
            .moves
            .iter()
            .filter(|&&(_, _, backtrack)| !backtrack)
            .map(|&(_, to, _)| to)
            .collect();
        let mut unique = forward.clone();
        unique.sort_by_key(|d| (d.1, d.0));
        unique.dedup();
        assert_eq!(forward.len(), unique.len());
        assert!(!forward.contains(&maze.start));
        assert_eq!(report.visits, forward.len() + 1);
    }

    #[test]
    fn forward_and_backtrack_moves_reconcile() {
        let maze = generate(Dims(7, 5), 9, Box::new(RndKruskals));
        let mut renderer = RecordingRenderer::new();
        let report = solve(&maze, ProgressHandle::new(), &mut renderer);
        assert_valid_path(&maze, &report);

        let forward = renderer.moves.iter().filter(|m| !m.2).count();
        let backtrack = renderer.moves.iter().filter(|m| m.2).count();
        assert_eq!(forward - backtrack, report.path.len() - 1);
    }

    #[test]
    fn move_sequence_is_deterministic() {
        let maze = generate(Dims(8, 8), 4, Box::new(DepthFirstSearch));

        let mut first = RecordingRenderer::new();
        let mut second = RecordingRenderer::new();
        let a = solve(&maze, ProgressHandle::new(), &mut first);
        let b = solve(&maze, ProgressHandle::new(), &mut second);

        assert_eq!(a, b);
        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn unreachable_goal_is_reported_not_found() {
        // hand-built grid that never went through generation: no interior
        // walls were removed, so the goal cannot be reached
        let mut grid = Grid::new(Dims(2, 1)).unwrap();
        grid.open_exterior(Dims(0, 0), CellWall::Top);
        grid.open_exterior(Dims(1, 0), CellWall::Bottom);

        let mut renderer = RecordingRenderer::new();
        let report = solve_from(
            &grid,
            Dims(0, 0),
            Dims(1, 0),
            ProgressHandle::new(),
            &mut renderer,
        );
        assert_eq!(
            report,
            SolveReport {
                found: false,
                path: Vec::new(),
                visits: 1,
            }
        );
        assert!(renderer.moves.is_empty());
    }

    #[test]
    fn stopped_flag_abandons_search() {
        let maze = generate(Dims(6, 6), 2, Box::new(DepthFirstSearch));
        let progress = ProgressHandle::new();
        progress.stop();
        let report = solve(&maze, progress, &mut NoopRenderer);
        assert!(!report.found);
        assert!(report.path.is_empty());
    }
}

use hashbrown::HashSet;
use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::{GenError, GridGenerator, Random};
use crate::dims::Dims;
use crate::grid::Grid;
use crate::progress::ProgressHandle;
use crate::render::Renderer;

/// Randomized depth-first carve.
///
/// The classic recursive backtracker, run on an explicit stack so deep
/// mazes cannot overflow the call stack. Carving starts at the entrance
/// corner, which keeps the whole layout a function of the seed alone.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl GridGenerator for DepthFirstSearch {
    fn generate(
        &self,
        grid: &mut Grid,
        rng: &mut Random,
        progress: ProgressHandle,
        renderer: &mut dyn Renderer,
    ) -> Result<(), GenError> {
        let cell_count = grid.size().product() as usize;
        progress.lock().from = cell_count;

        let mut visited = HashSet::with_capacity(cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        let mut current = Dims::ZERO;
        visited.insert(current);
        stack.push(current);
        while !stack.is_empty() {
            current = stack.pop().unwrap();
            let unvisited_neighbors = grid
                .neighbors(current)
                .filter(|cell| !visited.contains(cell))
                .collect::<SmallVec<[_; 4]>>();

            if !unvisited_neighbors.is_empty() {
                stack.push(current);
                let chosen = *unvisited_neighbors.choose(rng).unwrap();
                let wall = Grid::which_wall_between(current, chosen).unwrap();
                grid.remove_wall(current, wall);
                renderer.draw_wall(current, wall, false);
                renderer.draw_wall(chosen, wall.reverse_wall(), false);
                visited.insert(chosen);
                stack.push(chosen);
            }

            progress.lock().done = visited.len();
            if progress.is_stopped() {
                return Err(GenError::Stopped);
            }
        }

        Ok(())
    }
}

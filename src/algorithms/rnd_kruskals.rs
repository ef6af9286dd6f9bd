use hashbrown::HashSet;
use rand::seq::SliceRandom as _;

use super::{GenError, GridGenerator, Random};
use crate::dims::Dims;
use crate::grid::{CellWall, Grid};
use crate::progress::ProgressHandle;
use crate::render::Renderer;

/// Randomized Kruskal's: shuffle the interior walls, then knock one down
/// whenever it separates two disjoint cell sets. Same spanning-tree
/// guarantees as the depth-first carve, different texture (shorter, busier
/// corridors).
#[derive(Debug)]
pub struct RndKruskals;

impl GridGenerator for RndKruskals {
    fn generate(
        &self,
        grid: &mut Grid,
        rng: &mut Random,
        progress: ProgressHandle,
        renderer: &mut dyn Renderer,
    ) -> Result<(), GenError> {
        use CellWall::*;

        let size = grid.size();
        let mut walls: Vec<(Dims, CellWall)> = Vec::new();
        let mut sets = Vec::<HashSet<Dims>>::new();
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            if grid.is_in_bounds(pos + Right.to_coord()) {
                walls.push((pos, Right));
            }

            if grid.is_in_bounds(pos + Bottom.to_coord()) {
                walls.push((pos, Bottom));
            }

            sets.push(Some(pos).into_iter().collect());
        }

        let starter_wall_count = walls.len();
        progress.lock().from = starter_wall_count;

        walls.shuffle(rng);

        while let Some((from, wall)) = walls.pop() {
            let to = from + wall.to_coord();

            let from_set = sets.iter().position(|set| set.contains(&from)).unwrap();

            if sets[from_set].contains(&to) {
                continue;
            }

            grid.remove_wall(from, wall);
            renderer.draw_wall(from, wall, false);
            renderer.draw_wall(to, wall.reverse_wall(), false);

            let from_set = sets.swap_remove(from_set);
            let to_set = sets.iter().position(|set| set.contains(&to)).unwrap();
            sets[to_set].extend(from_set);

            progress.lock().done = starter_wall_count - walls.len();
            if progress.is_stopped() {
                return Err(GenError::Stopped);
            }
        }

        Ok(())
    }
}

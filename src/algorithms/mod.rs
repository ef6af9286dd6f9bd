mod depth_first_search;
mod rnd_kruskals;
mod solver;

pub use depth_first_search::DepthFirstSearch;
pub use rnd_kruskals::RndKruskals;
pub use solver::{solve, solve_from, SolveReport};

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::dims::Dims;
use crate::grid::{CellWall, Grid, GridError};
use crate::progress::ProgressHandle;
use crate::render::Renderer;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
    #[error("generation stopped before completion")]
    Stopped,
}

/// Spanning-tree carving algorithm, generic over how the tree is grown.
///
/// Implementations receive a fresh, fully walled grid and may only remove
/// interior walls. After a successful run the open interior walls must form
/// a spanning tree of the grid: `w*h - 1` removals, every cell reachable
/// from every other along exactly one simple path.
pub trait GridGenerator: fmt::Debug + Sync + Send {
    fn generate(
        &self,
        grid: &mut Grid,
        rng: &mut Random,
        progress: ProgressHandle,
        renderer: &mut dyn Renderer,
    ) -> Result<(), GenError>;

    fn guess_progress_complexity(&self, size: Dims) -> usize {
        size.product() as usize
    }
}

/// Finished maze: carved grid plus its entrance and exit cells.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub start: Dims,
    pub end: Dims,
}

/// Front-end over the carving algorithms.
///
/// Owns seed handling and the boundary openings, so every algorithm only
/// ever deals with interior walls. The same size, seed and algorithm always
/// reproduce a bit-identical wall layout.
#[derive(Debug)]
pub struct Generator {
    size: Dims,
    seed: Option<u64>,
    algorithm: Box<dyn GridGenerator>,
}

impl Generator {
    pub fn new(size: Dims) -> Result<Self, GenError> {
        if !size.all_positive() {
            return Err(GenError::InvalidSize(size));
        }

        Ok(Self {
            size,
            seed: None,
            algorithm: Box::new(DepthFirstSearch),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Box<dyn GridGenerator>) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn generate(
        &self,
        progress: ProgressHandle,
        renderer: &mut dyn Renderer,
    ) -> Result<Maze, GenError> {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        log::debug!(
            "generating {}x{} maze with seed {} using {:?}",
            self.size.0,
            self.size.1,
            seed,
            self.algorithm
        );

        let mut grid = Grid::new(self.size)
            .map_err(|GridError::InvalidDimension(size)| GenError::InvalidSize(size))?;

        let start = Dims::ZERO;
        let end = self.size - Dims::ONE;
        grid.open_exterior(start, CellWall::Top);
        grid.open_exterior(end, CellWall::Bottom);
        renderer.draw_wall(start, CellWall::Top, false);
        renderer.draw_wall(end, CellWall::Bottom, false);

        self.algorithm
            .generate(&mut grid, &mut rng, progress.clone(), renderer)?;

        // walls that survived the carve are final now
        for pos in Dims::iter_fill(Dims::ZERO, self.size) {
            for wall in CellWall::ALL {
                if !grid.is_open(pos, wall) {
                    renderer.draw_wall(pos, wall, true);
                }
            }
        }

        progress.lock().finish();

        Ok(Maze { grid, start, end })
    }
}

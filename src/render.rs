use crate::dims::Dims;
use crate::grid::CellWall;

/// Drawing capability injected into generation and solving.
///
/// Calls are fire-and-forget: the algorithms never read anything back, and
/// correctness never depends on what an implementation does with an event.
/// `draw_wall` fires when a wall's state is finalized for display,
/// `draw_move` once per solve-phase transition (`backtrack` marks an undo).
pub trait Renderer {
    fn draw_wall(&mut self, cell: Dims, wall: CellWall, present: bool);
    fn draw_move(&mut self, from: Dims, to: Dims, backtrack: bool);
}

/// Default renderer doing nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_wall(&mut self, _cell: Dims, _wall: CellWall, _present: bool) {}
    fn draw_move(&mut self, _from: Dims, _to: Dims, _backtrack: bool) {}
}

/// Buffers every event instead of drawing. Used by tests and by embedders
/// that want to replay a run at their own pace.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub walls: Vec<(Dims, CellWall, bool)>,
    pub moves: Vec<(Dims, Dims, bool)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_wall(&mut self, cell: Dims, wall: CellWall, present: bool) {
        self.walls.push((cell, wall, present));
    }

    fn draw_move(&mut self, from: Dims, to: Dims, backtrack: bool) {
        self.moves.push((from, to, backtrack));
    }
}

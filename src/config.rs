use serde::{Deserialize, Serialize};

/// Options for turning a grid into a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Reject boards whose outer edge is not entirely wall. Every step the engine takes
    /// is bounds checked either way, this only decides whether a hole in the border is
    /// caught at load time or when a snake first walks through it.
    pub require_wall_border: bool,
    /// Cap on the number of steps taken when tracing a tail to its head. None uses the
    /// number of cells in the grid, which no loop free chain can exceed.
    pub max_trace_steps: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            require_wall_border: true,
            max_trace_steps: None,
        }
    }
}

impl BoardConfig {
    /// Accept boards without a wall border
    pub fn lenient() -> Self {
        Self {
            require_wall_border: false,
            ..Default::default()
        }
    }

    /// the trace cap to use for a grid with `cells` cells
    pub fn trace_limit(&self, cells: usize) -> usize {
        self.max_trace_steps.unwrap_or(cells)
    }
}

//! Browser bindings, enabled by the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::solver::Solution;

/// Result of [`analyze`], as seen from JavaScript.
#[wasm_bindgen]
pub struct Analysis {
    solution: Solution,
}

#[wasm_bindgen]
impl Analysis {
    /// Steps from the start to the farthest point of the loop.
    #[wasm_bindgen(getter, js_name = maxDistance)]
    pub fn max_distance(&self) -> usize {
        self.solution.max_distance
    }

    /// Number of tiles enclosed by the loop.
    #[wasm_bindgen(getter)]
    pub fn enclosed(&self) -> usize {
        self.solution.enclosed
    }

    /// Number of tiles on the loop.
    #[wasm_bindgen(getter, js_name = loopLength)]
    pub fn loop_length(&self) -> usize {
        self.solution.loop_length
    }
}

/// Parse `input` as a pipe grid and solve it, throwing the error message on failure.
#[wasm_bindgen]
pub fn analyze(input: &str) -> Result<Analysis, JsError> {
    let board: Board = input.parse()?;
    let solution = board.solve()?;
    Ok(Analysis { solution })
}

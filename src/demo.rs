use glam::IVec2;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::host::{PlotHost, PlotSurface, SurfaceError};
use crate::jsxgraph::JsxGraph;
use crate::options::BoardOptions;

pub const DEMO_CONTAINER: &str = "box";

pub fn demo_options() -> BoardOptions {
    BoardOptions::new(-2.0, 6.0, 6.0, -2.0, false, true)
}

/// Build the demo construction (one board, one point at `(4, 1)`) on `host`.
pub fn run_demo<H: PlotHost>(
    host: &H,
) -> Result<(Board<H::Surface>, <H::Surface as PlotSurface>::Element), SurfaceError<H>> {
    let board = Board::init_board(host, DEMO_CONTAINER, &demo_options())?;
    let point = board.create_point(IVec2::new(4, 1))?;
    Ok((board, point))
}

/// Demo entry point for the page: draws the demo construction into `#box`.
#[wasm_bindgen(js_name = main)]
pub fn run() -> Result<(), JsValue> {
    run_demo(&JsxGraph)?;
    Ok(())
}

/// `4 * sin(1 / t)`.
///
/// Not defined at `t = 0`: `1 / 0` is infinite and the result is NaN.
#[wasm_bindgen]
pub fn fun(t: f64) -> f64 {
    4.0 * (1.0 / t).sin()
}

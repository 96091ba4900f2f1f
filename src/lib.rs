use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod board;
pub mod demo;
pub mod headless;
pub mod host;
pub mod jsxgraph;
pub mod options;

pub use bindings::JsxBoard;
pub use board::Board;
pub use demo::{fun, run_demo};
pub use headless::{HeadlessHost, HostError};
pub use host::{PlotHost, PlotSurface, SurfaceError};
pub use jsxgraph::{JsBoard, JsxGraph};
pub use options::{BoardAttributes, BoardOptions, BoundingBox, OptionsError};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}

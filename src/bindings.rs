use glam::IVec2;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::jsxgraph::{JsBoard, JsxGraph};
use crate::options::BoardOptions;

/// JavaScript-facing `Board` class backed by the page's JSXGraph.
#[wasm_bindgen(js_name = Board)]
pub struct JsxBoard {
    inner: Board<JsBoard>,
}

#[wasm_bindgen(js_class = Board)]
impl JsxBoard {
    #[wasm_bindgen(js_name = initBoard)]
    pub fn init_board(identifier: &str, options: &BoardOptions) -> Result<JsxBoard, JsValue> {
        let inner = Board::init_board(&JsxGraph, identifier, options)?;
        Ok(Self { inner })
    }

    /// Returns the JSXGraph point element.
    #[wasm_bindgen(js_name = createPoint)]
    pub fn create_point(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        self.inner.create_point(IVec2::new(x, y))
    }

    /// `[left, top, right, bottom]` as JSXGraph currently reports it.
    #[wasm_bindgen(js_name = boundingBox)]
    pub fn bounding_box(&self) -> Result<Vec<f64>, JsValue> {
        Ok(self.inner.bounding_box()?.to_array().to_vec())
    }

    /// The underlying JSXGraph board object.
    #[wasm_bindgen(getter)]
    pub fn raw(&self) -> JsValue {
        self.inner.surface().clone().into()
    }
}

impl JsxBoard {
    pub fn board(&self) -> &Board<JsBoard> {
        &self.inner
    }
}

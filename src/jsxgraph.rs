use glam::IVec2;
use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::host::{PlotHost, PlotSurface};
use crate::options::{BoardAttributes, BoundingBox};

const POINT: &str = "point";

#[wasm_bindgen]
extern "C" {
    /// Board object returned by `JXG.JSXGraph.initBoard`.
    #[derive(Clone, Debug)]
    pub type JsBoard;

    #[wasm_bindgen(catch, js_namespace = ["JXG", "JSXGraph"], js_name = initBoard)]
    fn init_board(container: &str, attributes: &JsValue) -> Result<JsBoard, JsValue>;

    #[wasm_bindgen(catch, method, js_name = createElement)]
    fn create_element(this: &JsBoard, kind: &str, parents: &Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, method, js_name = getBoundingBox)]
    fn get_bounding_box(this: &JsBoard) -> Result<JsValue, JsValue>;
}

/// The global `JXG.JSXGraph` object of the page.
///
/// Every call goes straight through; exceptions thrown by JSXGraph (unknown
/// element id, library not loaded) come back as `Err(JsValue)` untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsxGraph;

impl PlotHost for JsxGraph {
    type Surface = JsBoard;

    fn init_board(&self, container: &str, attributes: &BoardAttributes) -> Result<JsBoard, JsValue> {
        // Plain object, not a Map: JSXGraph reads attributes by property.
        let attributes = attributes.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        init_board(container, &attributes)
    }
}

impl PlotSurface for JsBoard {
    type Element = JsValue;
    type Error = JsValue;

    fn create_point(&self, coords: IVec2) -> Result<JsValue, JsValue> {
        let parents = Array::of2(&coords.x.into(), &coords.y.into());
        self.create_element(POINT, &parents)
    }

    fn bounding_box(&self) -> Result<BoundingBox, JsValue> {
        let values: Vec<f64> = serde_wasm_bindgen::from_value(self.get_bounding_box()?)?;
        BoundingBox::try_from(values.as_slice()).map_err(|e| JsError::from(e).into())
    }
}

use glam::DVec2;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("bounding box needs exactly 4 values (left, top, right, bottom), got {0}")]
    BoundingBoxArity(usize),
}

/// Visible region of a board in user coordinates.
///
/// Order follows JSXGraph: `[left, top, right, bottom]`. With the usual
/// orientation `top > bottom`, but nothing here enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[f64; 4]")]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right, self.bottom)
    }

    /// Inclusive containment test, independent of axis orientation.
    pub fn contains(&self, p: DVec2) -> bool {
        let min = self.top_left().min(self.bottom_right());
        let max = self.top_left().max(self.bottom_right());
        p.cmpge(min).all() && p.cmple(max).all()
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([left, top, right, bottom]: [f64; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_array()
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = OptionsError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let bounds: [f64; 4] = values
            .try_into()
            .map_err(|_| OptionsError::BoundingBoxArity(values.len()))?;
        Ok(bounds.into())
    }
}

/// Settings used once when a board is created.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardOptions {
    bounding_box: BoundingBox,
    pub grid: bool,
    pub axis: bool,
}

/// JSXGraph's own board defaults: `[-5, 5, 5, -5]`, no grid, no axis.
impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            bounding_box: BoundingBox::new(-5.0, 5.0, 5.0, -5.0),
            grid: false,
            axis: false,
        }
    }
}

#[wasm_bindgen]
impl BoardOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64, grid: bool, axis: bool) -> Self {
        Self::with_bounding_box(BoundingBox::new(left, top, right, bottom), grid, axis)
    }

    #[wasm_bindgen]
    pub fn defaults() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter = boundingBox)]
    pub fn bounding_box_values(&self) -> Vec<f64> {
        self.bounding_box.to_array().to_vec()
    }

    /// Throws unless `values` holds exactly four numbers.
    #[wasm_bindgen(js_name = setBoundingBox)]
    pub fn set_bounding_box_values(&mut self, values: &[f64]) -> Result<(), JsError> {
        self.bounding_box = BoundingBox::try_from(values)?;
        Ok(())
    }
}

impl BoardOptions {
    pub fn with_bounding_box(bounding_box: BoundingBox, grid: bool, axis: bool) -> Self {
        Self {
            bounding_box,
            grid,
            axis,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn set_bounding_box(&mut self, bounding_box: BoundingBox) {
        self.bounding_box = bounding_box;
    }

    pub fn attributes(&self) -> BoardAttributes {
        BoardAttributes::from(self)
    }
}

/// Attribute object passed to `JXG.JSXGraph.initBoard`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardAttributes {
    pub bounding_box: BoundingBox,
    pub grid: bool,
    pub axis: bool,
}

impl From<&BoardOptions> for BoardAttributes {
    fn from(options: &BoardOptions) -> Self {
        Self {
            bounding_box: options.bounding_box,
            grid: options.grid,
            axis: options.axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_match_jsxgraph() {
        let options = BoardOptions::default();
        assert_eq!(options.bounding_box().to_array(), [-5.0, 5.0, 5.0, -5.0]);
        assert!(!options.grid);
        assert!(!options.axis);
    }

    #[test]
    fn test_attributes_wire_shape() {
        let options = BoardOptions::new(-2.0, 6.0, 6.0, -2.0, false, true);
        let value = serde_json::to_value(options.attributes()).unwrap();
        assert_eq!(
            value,
            json!({ "boundingBox": [-2.0, 6.0, 6.0, -2.0], "grid": false, "axis": true })
        );
    }

    #[test]
    fn test_bounding_box_arity() {
        assert_eq!(
            BoundingBox::try_from(&[1.0, 2.0, 3.0][..]),
            Err(OptionsError::BoundingBoxArity(3))
        );
        assert_eq!(
            BoundingBox::try_from(&[0.0; 5][..]),
            Err(OptionsError::BoundingBoxArity(5))
        );
        let bbox = BoundingBox::try_from(&[-2.0, 6.0, 6.0, -2.0][..]).unwrap();
        assert_eq!(bbox, BoundingBox::new(-2.0, 6.0, 6.0, -2.0));
    }

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox::new(-2.0, 6.0, 6.0, -2.0);
        assert_eq!(bbox.width(), 8.0);
        assert_eq!(bbox.height(), 8.0);
        assert!(bbox.contains(DVec2::new(4.0, 1.0)));
        assert!(bbox.contains(DVec2::new(-2.0, 6.0)));
        assert!(!bbox.contains(DVec2::new(7.0, 1.0)));

        // Flipped y axis still contains the same region.
        let flipped = BoundingBox::new(-2.0, -2.0, 6.0, 6.0);
        assert!(flipped.contains(DVec2::new(4.0, 1.0)));
    }
}

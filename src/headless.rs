//! In-memory plotting host.
//!
//! Records every board and point instead of drawing them, the way JSXGraph's
//! own "no" renderer runs constructions without a DOM. Useful on the server
//! side and in tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use glam::IVec2;
use thiserror::Error;

use crate::host::{PlotHost, PlotSurface};
use crate::options::{BoardAttributes, BoundingBox};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("no container element with id `{0}`")]
    MissingContainer(String),
}

/// Index of a point within its board, in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(pub usize);

#[derive(Debug)]
struct SurfaceState {
    container: String,
    attributes: BoardAttributes,
    points: Vec<IVec2>,
}

/// Handle to one recorded board. Clones share the same board.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl HeadlessSurface {
    pub fn container(&self) -> String {
        self.state.borrow().container.clone()
    }

    pub fn attributes(&self) -> BoardAttributes {
        self.state.borrow().attributes
    }

    pub fn points(&self) -> Vec<IVec2> {
        self.state.borrow().points.clone()
    }

    pub fn point(&self, id: PointId) -> Option<IVec2> {
        self.state.borrow().points.get(id.0).copied()
    }
}

impl PlotSurface for HeadlessSurface {
    type Element = PointId;
    type Error = HostError;

    fn create_point(&self, coords: IVec2) -> Result<PointId, HostError> {
        let mut state = self.state.borrow_mut();
        state.points.push(coords);
        Ok(PointId(state.points.len() - 1))
    }

    fn bounding_box(&self) -> Result<BoundingBox, HostError> {
        Ok(self.state.borrow().attributes.bounding_box)
    }
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// `None` accepts any container id.
    containers: Option<HashSet<String>>,
    boards: RefCell<Vec<HeadlessSurface>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose page only has the given container ids.
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: Some(ids.into_iter().map(Into::into).collect()),
            boards: RefCell::default(),
        }
    }

    pub fn boards(&self) -> Vec<HeadlessSurface> {
        self.boards.borrow().clone()
    }

    /// Most recent board attached to `container`.
    pub fn board(&self, container: &str) -> Option<HeadlessSurface> {
        self.boards
            .borrow()
            .iter()
            .rev()
            .find(|b| b.state.borrow().container == container)
            .cloned()
    }
}

impl PlotHost for HeadlessHost {
    type Surface = HeadlessSurface;

    fn init_board(
        &self,
        container: &str,
        attributes: &BoardAttributes,
    ) -> Result<HeadlessSurface, HostError> {
        if let Some(ids) = &self.containers {
            if !ids.contains(container) {
                return Err(HostError::MissingContainer(container.to_string()));
            }
        }

        let surface = HeadlessSurface {
            state: Rc::new(RefCell::new(SurfaceState {
                container: container.to_string(),
                attributes: *attributes,
                points: Vec::new(),
            })),
        };
        self.boards.borrow_mut().push(surface.clone());
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BoardOptions;

    #[test]
    fn test_unknown_container_fails() {
        let host = HeadlessHost::with_containers(["box"]);
        let attributes = BoardOptions::default().attributes();
        assert_eq!(
            host.init_board("nope", &attributes).unwrap_err(),
            HostError::MissingContainer("nope".into())
        );
        assert!(host.init_board("box", &attributes).is_ok());
        assert_eq!(host.boards().len(), 1);
    }

    #[test]
    fn test_points_are_recorded_in_order() {
        let host = HeadlessHost::new();
        let surface = host
            .init_board("jxgbox", &BoardOptions::default().attributes())
            .unwrap();

        let a = surface.create_point(IVec2::new(1, 2)).unwrap();
        let b = surface.create_point(IVec2::new(-3, 0)).unwrap();

        assert_eq!(a, PointId(0));
        assert_eq!(b, PointId(1));
        assert_eq!(surface.point(b), Some(IVec2::new(-3, 0)));
        assert_eq!(host.board("jxgbox").unwrap().points().len(), 2);
    }
}

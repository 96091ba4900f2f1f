use glam::IVec2;
use log::{debug, trace};

use crate::host::{PlotHost, PlotSurface};
use crate::options::{BoardOptions, BoundingBox};

/// Handle to a board living inside the host plotting library.
///
/// Only [`Board::init_board`] creates one. The handle holds nothing but the
/// host's surface; all state stays on the host side.
#[derive(Debug)]
pub struct Board<S> {
    surface: S,
}

impl<S: PlotSurface> Board<S> {
    /// Attach a new board to the container `identifier`.
    ///
    /// Host failures (no such container, library not loaded) are returned
    /// as-is.
    pub fn init_board<H>(host: &H, identifier: &str, options: &BoardOptions) -> Result<Self, S::Error>
    where
        H: PlotHost<Surface = S>,
    {
        let attributes = options.attributes();
        debug!(
            "init board `{}`: bbox={:?} grid={} axis={}",
            identifier,
            attributes.bounding_box.to_array(),
            attributes.grid,
            attributes.axis
        );
        let surface = host.init_board(identifier, &attributes)?;
        Ok(Self { surface })
    }

    /// Ask the host for a point at `coords`. No range check.
    pub fn create_point(&self, coords: IVec2) -> Result<S::Element, S::Error> {
        trace!("create point ({}, {})", coords.x, coords.y);
        self.surface.create_point(coords)
    }

    pub fn bounding_box(&self) -> Result<BoundingBox, S::Error> {
        self.surface.bounding_box()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessHost, HostError};

    #[test]
    fn test_init_board_records_options() {
        let host = HeadlessHost::with_containers(["box"]);
        let options = BoardOptions::new(-2.0, 6.0, 6.0, -2.0, false, true);
        let board = Board::init_board(&host, "box", &options).unwrap();

        assert_eq!(
            board.bounding_box().unwrap(),
            BoundingBox::new(-2.0, 6.0, 6.0, -2.0)
        );
        let attributes = board.surface().attributes();
        assert!(!attributes.grid);
        assert!(attributes.axis);
        assert_eq!(board.surface().container(), "box");
    }

    #[test]
    fn test_create_point_adds_one_point() {
        let host = HeadlessHost::new();
        let board = Board::init_board(&host, "box", &BoardOptions::default()).unwrap();
        assert!(board.surface().points().is_empty());

        board.create_point(IVec2::new(4, 1)).unwrap();

        assert_eq!(board.surface().points(), vec![IVec2::new(4, 1)]);
    }

    #[test]
    fn test_point_outside_bounding_box_is_not_rejected() {
        let host = HeadlessHost::new();
        let board = Board::init_board(&host, "box", &BoardOptions::default()).unwrap();
        assert!(board.create_point(IVec2::new(1000, -1000)).is_ok());
    }

    #[test]
    fn test_host_error_propagates() {
        let host = HeadlessHost::with_containers(Vec::<String>::new());
        let err = Board::init_board(&host, "box", &BoardOptions::default()).unwrap_err();
        assert_eq!(err, HostError::MissingContainer("box".into()));
    }
}

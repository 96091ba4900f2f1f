use glam::IVec2;

use crate::options::{BoardAttributes, BoundingBox};

/// A plotting library able to attach boards to named containers.
pub trait PlotHost {
    type Surface: PlotSurface;

    /// Create a board inside the container called `container`.
    fn init_board(
        &self,
        container: &str,
        attributes: &BoardAttributes,
    ) -> Result<Self::Surface, <Self::Surface as PlotSurface>::Error>;
}

/// Error returned by the boards of host `H`.
pub type SurfaceError<H> = <<H as PlotHost>::Surface as PlotSurface>::Error;

/// A live board owned by the host library.
pub trait PlotSurface {
    /// Whatever the host hands back for a new element.
    type Element;
    type Error;

    fn create_point(&self, coords: IVec2) -> Result<Self::Element, Self::Error>;

    fn bounding_box(&self) -> Result<BoundingBox, Self::Error>;
}

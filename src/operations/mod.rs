pub mod group_curves;
pub mod polygonize;
pub mod query;
pub mod reconstruct;

pub use group_curves::{CurveGroups, GroupCurves, JoinedCurve, PolyCurve};
pub use polygonize::{Polygonize, MAX_DIVISIONS};
pub use reconstruct::{Assembled, BuildPolygons, Reconstruction};

pub mod chain;
pub mod edge;
pub mod incidence;
pub mod vertex;
pub mod vertex_index;

pub use chain::{ChainData, ChainId, OrientedEdge};
pub use edge::{EdgeData, EdgeId};
pub use incidence::IncidenceGraph;
pub use vertex::{VertexData, VertexId};
pub use vertex_index::VertexIndex;

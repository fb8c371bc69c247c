pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Edge, Graph, Weight};
pub use directed::DirectedGraph;

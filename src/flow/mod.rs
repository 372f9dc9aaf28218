pub mod edge;
pub mod node;
pub mod snapshot;

pub use edge::*;
pub use node::*;
pub use snapshot::*;

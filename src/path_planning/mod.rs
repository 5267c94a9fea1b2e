// Path Planning algorithms module

pub mod adjacency;
pub mod path_reconstruction;
pub mod search_engine;
pub mod random_walk;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;

pub use adjacency::*;
pub use path_reconstruction::*;
pub use search_engine::*;
pub use random_walk::*;
pub use breadth_first::*;
pub use depth_first::*;
pub use dijkstra::*;

pub(crate) use search_engine::FrontierEntry;

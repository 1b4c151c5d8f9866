mod adjacency;
mod component;
mod geometry;
mod render;
mod state;
mod types;

pub use component::BeaconGraphCanvas;
pub use types::{BeaconLink, BeaconNode, GraphDocument};

pub mod graph;
pub mod logs;
pub mod not_found;

pub mod beacon_graph;
pub mod log_table;

pub mod config;
pub mod explain;
pub mod output;
pub mod render;

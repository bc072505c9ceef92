pub mod compile;
pub mod error;
pub mod exec;
pub mod graph;
pub mod render;
pub mod validate;
pub mod wasm;

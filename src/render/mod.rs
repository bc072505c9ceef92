//! Render phase: CrewConfig → exportable artifacts.
//!
//! Two serializations of the same canonical configuration: a declarative
//! YAML document and an equivalent standalone Python program. Both are
//! deterministic: identical input yields byte-identical output.

mod writer;

pub mod python;
pub mod yaml;

pub use python::render_python;
pub use yaml::render_yaml;

pub mod benchmark;
pub mod geometry;
pub mod mesh;
pub mod object;
pub mod settings;
pub mod volumes;

pub use benchmark::{BenchmarkResult, RunError, Variant, run};
pub use mesh::Mesh;
pub use settings::BenchmarkSettings;
pub use volumes::{BoundingVolumes, BuildProgress, Volumes};

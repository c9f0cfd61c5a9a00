pub mod analysis;
pub mod batch;
pub mod generator;

pub use generator::LogFixtureGenerator;

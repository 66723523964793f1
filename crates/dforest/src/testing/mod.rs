//! Test helpers: seeded synthetic data shared by unit and integration tests.

mod data;

pub use data::{accuracy, random_features, synthetic_quadrants};

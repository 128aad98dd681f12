//! Dense numeric containers (Vector, Matrix).
//!
//! These back the count and TF-IDF document matrices.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

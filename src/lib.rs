//! Reelmatch: content-based movie recommendations in Rust.
//!
//! Reelmatch cleans and merges a movie metadata table with a keywords table
//! into one text description per movie, then recommends the movies whose
//! descriptions are closest to a free-text query under TF-IDF cosine
//! similarity.
//!
//! # Quick Start
//!
//! ```
//! use reelmatch::prelude::*;
//!
//! let movies = vec![
//!     Movie { title: "Jaws".into(), description: "Thriller. shark, beach. A great white terrorizes a resort town.".into() },
//!     Movie { title: "Up".into(), description: "Animation. balloon, old man. An old man ties balloons to his house.".into() },
//! ];
//!
//! let recommender = ContentRecommender::fit(movies).expect("fit should succeed");
//! let picks = recommender.recommend("shark attack at the beach", 1).expect("recommend should succeed");
//! assert_eq!(picks[0].title, "Jaws");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization, similarity
//! - [`data`]: Cleaning and merging the raw movie tables
//! - [`recommend`]: The content-based recommender
//! - [`config`]: Defaults for paths and thresholds

pub mod config;
pub mod data;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{RecommendError, Result};
pub use primitives::{Matrix, Vector};

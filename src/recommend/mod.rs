//! Content-based movie recommendation.
//!
//! Movies are ranked by cosine similarity between the TF-IDF vector of a
//! free-text query and the TF-IDF vectors of their descriptions.
//!
//! # Quick Start
//!
//! ```
//! use reelmatch::data::Movie;
//! use reelmatch::recommend::ContentRecommender;
//!
//! let movies = vec![
//!     Movie { title: "Alien".into(), description: "Horror, Science Fiction. spaceship, monster. A crew is hunted.".into() },
//!     Movie { title: "Heat".into(), description: "Crime, Thriller. heist, detective. A master thief.".into() },
//! ];
//!
//! let recommender = ContentRecommender::fit(movies).expect("fit should succeed");
//! let picks = recommender.recommend("a monster on a spaceship", 1).expect("recommend should succeed");
//! assert_eq!(picks[0].title, "Alien");
//! ```

pub mod content_based;

pub use content_based::{ContentRecommender, Recommendation};

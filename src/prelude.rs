//! Convenience re-exports for common usage.
//!
//! ```
//! use reelmatch::prelude::*;
//! ```

pub use crate::config::PipelineConfig;
pub use crate::data::{prepare, read_processed, Movie};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{ContentRecommender, Recommendation};
pub use crate::text::vectorize::TfidfVectorizer;

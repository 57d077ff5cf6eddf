//! Bone Name Matching Primitives
//!
//! String-level building blocks used by the mapping engine.
//!
//! | Piece | Role | Complexity |
//! |-------|------|------------|
//! | [normalize] | Canonical comparable bone names | O(n) |
//! | [Levenshtein](levenshtein) | Edit distance between names | O(m×n) |
//! | [similarity] | Exact / containment / edit-distance tiers | O(m×n) |
//!
//! # Example
//!
//! ```
//! use rigmap_core::nlp::{bone_similarity, normalize_bone_name};
//!
//! let a = normalize_bone_name("Hand_L");
//! let b = normalize_bone_name("hand.left");
//! assert_eq!(bone_similarity(&a, &b), 1.0);
//! ```

pub mod levenshtein;
pub mod normalize;
pub mod similarity;

pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use normalize::{normalize_bone_name, RIG_PREFIXES};
pub use similarity::{bone_similarity, scored_similarity, ScoreTier, Similarity};

//! Tiered Bone Name Similarity
//!
//! Scores two already-normalized bone names in [0, 1]. The first tier that
//! applies wins:
//! - Exact: identical names score 1.0
//! - Containment: one name inside the other scores
//!   `0.8 + shorter / longer × 0.2`, so "spine" vs "spine_01" lands near 0.93
//! - Edit distance: `1 - levenshtein / max_len` for everything else

use super::levenshtein::levenshtein_similarity;

/// Base score for a substring match before length coverage is added.
pub const CONTAINMENT_BASE: f32 = 0.8;

/// Share of the containment score driven by length coverage.
pub const CONTAINMENT_COVERAGE_WEIGHT: f32 = 0.2;

/// Which scoring tier produced a similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Exact,
    Containment,
    EditDistance,
}

/// A similarity score together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    pub score: f32,
    pub tier: ScoreTier,
}

/// Score two normalized names and report the tier used.
///
/// # Example
/// ```
/// use rigmap_core::nlp::similarity::{scored_similarity, ScoreTier};
///
/// let sim = scored_similarity("hand_left", "hand_left");
/// assert_eq!(sim.tier, ScoreTier::Exact);
///
/// let sim = scored_similarity("spine", "spine_01");
/// assert_eq!(sim.tier, ScoreTier::Containment);
/// assert!(sim.score > 0.9);
/// ```
pub fn scored_similarity(a: &str, b: &str) -> Similarity {
    if a == b {
        return Similarity {
            score: 1.0,
            tier: ScoreTier::Exact,
        };
    }

    if a.contains(b) || b.contains(a) {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let coverage = len_a.min(len_b) as f32 / len_a.max(len_b) as f32;

        return Similarity {
            score: CONTAINMENT_BASE + coverage * CONTAINMENT_COVERAGE_WEIGHT,
            tier: ScoreTier::Containment,
        };
    }

    Similarity {
        score: levenshtein_similarity(a, b),
        tier: ScoreTier::EditDistance,
    }
}

/// Score two normalized bone names in [0, 1].
#[inline]
pub fn bone_similarity(a: &str, b: &str) -> f32 {
    scored_similarity(a, b).score
}

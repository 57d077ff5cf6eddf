//! Generic Auto Mapper - Fuzzy Bone Correspondence
//!
//! Works for arbitrary, unknown rig conventions:
//! - Normalizes every bone name (case, separators, prefixes, side markers)
//! - Scores every target/source pair with the tiered similarity
//! - Keeps the best source per target at or above the acceptance threshold
//!
//! # Complexity
//! O(T × S × L²) for T target bones, S source bones and average name
//! length L. Rigs hold tens to low hundreds of bones, so a linear scan is
//! enough.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::MapperConfig;
use crate::engine::mapping::{BoneMapping, BoneMatch, MatchOrigin};
use crate::nlp::normalize::normalize_bone_name;
use crate::nlp::similarity::scored_similarity;

// ============================================================================
// Constants
// ============================================================================

/// Default minimum similarity for accepting a fuzzy match.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f32 = 0.6;

// ============================================================================
// Auto Mapper
// ============================================================================

/// Fuzzy bone-name mapper.
///
/// # Usage
/// ```
/// use rigmap_core::engine::AutoMapper;
///
/// let mapper = AutoMapper::new();
/// let mapping = mapper.auto_map(&["Hand_L", "Hand_R"], &["hand_left", "hand_right"]);
///
/// assert_eq!(mapping.get("hand_left"), Some("Hand_L"));
/// assert_eq!(mapping.get("hand_right"), Some("Hand_R"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoMapper {
    /// Minimum score for accepting a candidate
    acceptance_threshold: f32,
}

impl Default for AutoMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoMapper {
    /// Create a mapper with the default threshold.
    pub fn new() -> Self {
        Self {
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
        }
    }

    /// Create with custom acceptance threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            acceptance_threshold: threshold,
        }
    }

    pub fn from_config(config: &MapperConfig) -> Self {
        Self::with_threshold(config.acceptance_threshold)
    }

    /// Get current acceptance threshold.
    pub fn acceptance_threshold(&self) -> f32 {
        self.acceptance_threshold
    }

    /// Map every target bone to its most similar source bone.
    ///
    /// Targets without a candidate at or above the threshold are left out.
    pub fn auto_map<S, T>(&self, source_names: &[S], target_names: &[T]) -> BoneMapping
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.auto_map_scored(source_names, target_names)
            .iter()
            .collect()
    }

    /// Like [`auto_map`](Self::auto_map) but keeps the score of every
    /// accepted match, in target order.
    ///
    /// A target name repeated in `target_names` is matched once.
    pub fn auto_map_scored<S, T>(&self, source_names: &[S], target_names: &[T]) -> Vec<BoneMatch>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let sources: Vec<(&str, String)> = source_names
            .iter()
            .map(|name| (name.as_ref(), normalize_bone_name(name.as_ref())))
            .collect();

        let mut seen: HashSet<&str> = HashSet::with_capacity(target_names.len());
        let mut matches = Vec::with_capacity(target_names.len());

        for target in target_names.iter().map(|name| name.as_ref()) {
            if !seen.insert(target) {
                continue;
            }

            match self.best_match(target, &sources) {
                Some(found) => {
                    info!(
                        "MAP: {} -> {} | Score: {:.2}",
                        found.target, found.source, found.score
                    );
                    matches.push(found);
                }
                None => {
                    debug!(bone = target, "No source bone above acceptance threshold");
                }
            }
        }

        debug!(
            sources = sources.len(),
            targets = seen.len(),
            matched = matches.len(),
            threshold = self.acceptance_threshold,
            "Auto mapping complete"
        );

        matches
    }

    /// Scan pre-normalized sources for the best candidate of one target.
    ///
    /// Only a strictly higher score replaces the current best, so among
    /// equal scores the first source in iteration order wins.
    fn best_match(&self, target: &str, sources: &[(&str, String)]) -> Option<BoneMatch> {
        let normalized_target = normalize_bone_name(target);

        let mut best: Option<&str> = None;
        let mut best_score = 0.0_f32;

        for (source, normalized_source) in sources {
            let similarity = scored_similarity(&normalized_target, normalized_source);

            if similarity.score > best_score && similarity.score >= self.acceptance_threshold {
                best_score = similarity.score;
                best = Some(*source);
            }
        }

        best.map(|source| BoneMatch {
            target: target.to_string(),
            source: source.to_string(),
            score: best_score,
            origin: MatchOrigin::Fuzzy,
        })
    }
}

/// Map with the default threshold.
pub fn auto_map<S, T>(source_names: &[S], target_names: &[T]) -> BoneMapping
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    AutoMapper::new().auto_map(source_names, target_names)
}

// ============================================================================
// Tests
// ============================================================================

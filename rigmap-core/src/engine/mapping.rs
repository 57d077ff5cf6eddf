//! Bone Mapping Types
//!
//! Shared result shapes for both mapping paths:
//! - BoneMapping: target bone name -> source bone name
//! - BoneMatch: one accepted correspondence with its score and origin
//! - Bone: a named bone record as handed over by skeleton extraction

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Bone
// ============================================================================

/// A bone record carrying its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bone {
    pub name: String,
}

impl Bone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AsRef<str> for Bone {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Bone {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ============================================================================
// Bone Match
// ============================================================================

/// Which path produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOrigin {
    /// Exact lookup in a convention table
    Direct,
    /// Fuzzy name similarity
    Fuzzy,
}

impl fmt::Display for MatchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOrigin::Direct => f.write_str("direct"),
            MatchOrigin::Fuzzy => f.write_str("fuzzy"),
        }
    }
}

/// A single accepted target -> source correspondence.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneMatch {
    pub target: String,
    pub source: String,
    /// Similarity score; direct matches always carry 1.0
    pub score: f32,
    pub origin: MatchOrigin,
}

impl fmt::Display for BoneMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} | Score: {:.2} ({})",
            self.target, self.source, self.score, self.origin
        )
    }
}

// ============================================================================
// Bone Mapping
// ============================================================================

/// Mapping from target bone name to source bone name.
///
/// A target bone that is absent simply had no acceptable source; that is a
/// normal outcome. Iteration is ordered by target name so two equal
/// mappings always print and compare identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneMapping {
    entries: BTreeMap<String, String>,
}

impl BoneMapping {
    /// Create a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `target -> source`, returning the previous source if any.
    pub fn insert(&mut self, target: impl Into<String>, source: impl Into<String>) -> Option<String> {
        self.entries.insert(target.into(), source.into())
    }

    /// Source bone assigned to `target`.
    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries.get(target).map(String::as_str)
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.entries.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(target, source)` pairs in target-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, s)| (t.as_str(), s.as_str()))
    }

    /// Copy entries from `other` for targets not yet mapped here.
    ///
    /// Existing entries win on conflict. Returns the number of entries added.
    pub fn merge_missing(&mut self, other: &BoneMapping) -> usize {
        let mut added = 0;
        for (target, source) in &other.entries {
            if !self.entries.contains_key(target) {
                self.entries.insert(target.clone(), source.clone());
                added += 1;
            }
        }
        added
    }
}

impl FromIterator<(String, String)> for BoneMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a BoneMatch> for BoneMapping {
    fn from_iter<I: IntoIterator<Item = &'a BoneMatch>>(iter: I) -> Self {
        iter.into_iter()
            .map(|m| (m.target.clone(), m.source.clone()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bone_match_display() {
        let m = BoneMatch {
            target: "mixamorigHips".into(),
            source: "pelvis".into(),
            score: 1.0,
            origin: MatchOrigin::Direct,
        };
        let text = m.to_string();
        assert!(text.contains("mixamorigHips -> pelvis"));
        assert!(text.contains("1.00"));
        assert!(text.contains("direct"));
    }

    #[test]
    fn test_mapping_operations() {
        let mut mapping = BoneMapping::new();
        assert!(mapping.is_empty());

        assert_eq!(mapping.insert("hand_left", "Hand_L"), None);
        assert_eq!(mapping.insert("hand_left", "Hand_L2"), Some("Hand_L".into()));
        mapping.insert("foot_left", "Foot_L");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("hand_left"), Some("Hand_L2"));
        assert!(mapping.contains_target("foot_left"));
        assert!(!mapping.contains_target("head"));

        let targets: Vec<&str> = mapping.iter().map(|(t, _)| t).collect();
        assert_eq!(targets, vec!["foot_left", "hand_left"]);
    }

    #[test]
    fn test_merge_missing_keeps_existing() {
        let mut direct = BoneMapping::new();
        direct.insert("mixamorigHips", "pelvis");

        let mut fuzzy = BoneMapping::new();
        fuzzy.insert("mixamorigHips", "hip_ctrl");
        fuzzy.insert("mixamorigHead", "head");

        assert_eq!(direct.merge_missing(&fuzzy), 1);
        assert_eq!(direct.get("mixamorigHips"), Some("pelvis"));
        assert_eq!(direct.get("mixamorigHead"), Some("head"));
    }

    #[test]
    fn test_bone_conversions() {
        let bone = Bone::from("pelvis");
        assert_eq!(bone.as_ref(), "pelvis");
        assert_eq!(Bone::new(String::from("head")).name, "head");
    }
}

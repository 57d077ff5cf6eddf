//! Specialized Direct Mapper - Exact Convention Lookup
//!
//! When the target skeleton follows a known naming convention, bones are
//! matched through a hand-curated table instead of fuzzy scoring:
//!   - "pelvis"     → "mixamorigHips"
//!   - "upperarm_l" → "mixamorigLeftArm"
//!   - "ball_r"     → "mixamorigRightToeBase"
//!
//! Lookups are exact string equality only. The built-in Mixamo table is
//! checked for duplicate keys and duplicate targets at compile time;
//! runtime tables are checked once when loaded.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use tracing::{debug, info};

use crate::engine::convention::{RecognitionPolicy, SkeletonConvention, MIXAMO_SIGNATURE};
use crate::engine::mapping::{BoneMapping, BoneMatch, MatchOrigin};
use crate::error::{Result, RigmapError};

// ============================================================================
// Mixamo Table
// ============================================================================

/// Canonical source bone name -> Mixamo bone name.
pub const MIXAMO_BONE_TABLE: &[(&str, &str)] = &[
    // Spine chain
    ("pelvis", "mixamorigHips"),
    ("spine_01", "mixamorigSpine"),
    ("spine_02", "mixamorigSpine1"),
    ("spine_03", "mixamorigSpine2"),
    ("neck_01", "mixamorigNeck"),
    ("head", "mixamorigHead"),
    ("head_end", "mixamorigHeadTop_End"),
    // Left arm
    ("clavicle_l", "mixamorigLeftShoulder"),
    ("upperarm_l", "mixamorigLeftArm"),
    ("lowerarm_l", "mixamorigLeftForeArm"),
    ("hand_l", "mixamorigLeftHand"),
    ("thumb_01_l", "mixamorigLeftHandThumb1"),
    ("thumb_02_l", "mixamorigLeftHandThumb2"),
    ("thumb_03_l", "mixamorigLeftHandThumb3"),
    ("index_01_l", "mixamorigLeftHandIndex1"),
    ("index_02_l", "mixamorigLeftHandIndex2"),
    ("index_03_l", "mixamorigLeftHandIndex3"),
    ("middle_01_l", "mixamorigLeftHandMiddle1"),
    ("middle_02_l", "mixamorigLeftHandMiddle2"),
    ("middle_03_l", "mixamorigLeftHandMiddle3"),
    ("ring_01_l", "mixamorigLeftHandRing1"),
    ("ring_02_l", "mixamorigLeftHandRing2"),
    ("ring_03_l", "mixamorigLeftHandRing3"),
    ("pinky_01_l", "mixamorigLeftHandPinky1"),
    ("pinky_02_l", "mixamorigLeftHandPinky2"),
    ("pinky_03_l", "mixamorigLeftHandPinky3"),
    // Right arm
    ("clavicle_r", "mixamorigRightShoulder"),
    ("upperarm_r", "mixamorigRightArm"),
    ("lowerarm_r", "mixamorigRightForeArm"),
    ("hand_r", "mixamorigRightHand"),
    ("thumb_01_r", "mixamorigRightHandThumb1"),
    ("thumb_02_r", "mixamorigRightHandThumb2"),
    ("thumb_03_r", "mixamorigRightHandThumb3"),
    ("index_01_r", "mixamorigRightHandIndex1"),
    ("index_02_r", "mixamorigRightHandIndex2"),
    ("index_03_r", "mixamorigRightHandIndex3"),
    ("middle_01_r", "mixamorigRightHandMiddle1"),
    ("middle_02_r", "mixamorigRightHandMiddle2"),
    ("middle_03_r", "mixamorigRightHandMiddle3"),
    ("ring_01_r", "mixamorigRightHandRing1"),
    ("ring_02_r", "mixamorigRightHandRing2"),
    ("ring_03_r", "mixamorigRightHandRing3"),
    ("pinky_01_r", "mixamorigRightHandPinky1"),
    ("pinky_02_r", "mixamorigRightHandPinky2"),
    ("pinky_03_r", "mixamorigRightHandPinky3"),
    // Left leg
    ("thigh_l", "mixamorigLeftUpLeg"),
    ("calf_l", "mixamorigLeftLeg"),
    ("foot_l", "mixamorigLeftFoot"),
    ("ball_l", "mixamorigLeftToeBase"),
    ("toe_end_l", "mixamorigLeftToe_End"),
    // Right leg
    ("thigh_r", "mixamorigRightUpLeg"),
    ("calf_r", "mixamorigRightLeg"),
    ("foot_r", "mixamorigRightFoot"),
    ("ball_r", "mixamorigRightToeBase"),
    ("toe_end_r", "mixamorigRightToe_End"),
];

const _: () = assert!(
    pairs_are_unique(MIXAMO_BONE_TABLE),
    "MIXAMO_BONE_TABLE repeats a source or target bone"
);

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// No two pairs share a key or a value.
const fn pairs_are_unique(pairs: &[(&str, &str)]) -> bool {
    let mut i = 0;
    while i < pairs.len() {
        let mut j = i + 1;
        while j < pairs.len() {
            if str_eq(pairs[i].0, pairs[j].0) || str_eq(pairs[i].1, pairs[j].1) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Loaded once per process, never mutated.
static MIXAMO_TABLE: LazyLock<Arc<BoneTable>> = LazyLock::new(|| {
    let table = BoneTable::from_unique_pairs(MIXAMO_BONE_TABLE);
    debug!(entries = table.len(), "Loaded Mixamo bone table");
    Arc::new(table)
});

// ============================================================================
// Bone Table
// ============================================================================

/// Immutable source-name -> target-name lookup table.
///
/// Keys and values are both unique, so a direct mapping never assigns two
/// source bones to one target bone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneTable {
    entries: HashMap<String, String>,
}

impl BoneTable {
    /// Build a table, rejecting repeated source or target names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        let mut targets = HashSet::new();

        for (source, target) in pairs {
            let (source, target): (String, String) = (source.into(), target.into());

            if entries.contains_key(&source) {
                return Err(RigmapError::DuplicateTableKey(source));
            }
            if !targets.insert(target.clone()) {
                return Err(RigmapError::DuplicateTableTarget(target));
            }
            entries.insert(source, target);
        }

        Ok(Self { entries })
    }

    /// Build from pairs already proven unique at compile time.
    fn from_unique_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Expected target bone name for a source bone.
    #[inline]
    pub fn expected_target(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Direct Mapper
// ============================================================================

/// Exact-lookup mapper for one known rig convention.
///
/// # Usage
/// ```
/// use rigmap_core::engine::DirectMapper;
///
/// let mapper = DirectMapper::mixamo();
/// assert!(mapper.is_target_convention(&["mixamorigHips", "mixamorigSpine"]));
///
/// let mapping = mapper.direct_map(&["pelvis"], &["mixamorigHips"]);
/// assert_eq!(mapping.get("mixamorigHips"), Some("pelvis"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectMapper {
    convention: SkeletonConvention,
    /// Substring identifying the convention in target bone names
    signature: String,
    table: Arc<BoneTable>,
    recognition: RecognitionPolicy,
}

impl DirectMapper {
    /// Mapper for Mixamo target rigs using the built-in table.
    pub fn mixamo() -> Self {
        Self {
            convention: SkeletonConvention::Mixamo,
            signature: MIXAMO_SIGNATURE.to_string(),
            table: Arc::clone(&MIXAMO_TABLE),
            recognition: RecognitionPolicy::AnyName,
        }
    }

    /// Mapper for a custom convention.
    pub fn new(signature: impl Into<String>, table: BoneTable) -> Self {
        Self {
            convention: SkeletonConvention::Custom,
            signature: signature.into(),
            table: Arc::new(table),
            recognition: RecognitionPolicy::AnyName,
        }
    }

    /// Replace the recognition policy.
    pub fn with_recognition(mut self, recognition: RecognitionPolicy) -> Self {
        self.recognition = recognition;
        self
    }

    /// Convention reported when a target skeleton is recognized.
    pub fn convention(&self) -> SkeletonConvention {
        self.convention
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn table(&self) -> &BoneTable {
        &self.table
    }

    /// Whether `bone_names` look like this convention.
    ///
    /// Case-insensitive signature search; unrelated rigs that happen to
    /// contain the signature are recognized as well.
    pub fn is_target_convention<S: AsRef<str>>(&self, bone_names: &[S]) -> bool {
        self.recognition.recognizes(&self.signature, bone_names)
    }

    /// Map target bones to source bones through the table.
    ///
    /// Source bones missing from the table, or whose expected target is not
    /// in `target_bones`, are skipped.
    pub fn direct_map<S, T>(&self, source_bones: &[S], target_bones: &[T]) -> BoneMapping
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.direct_map_scored(source_bones, target_bones)
            .iter()
            .collect()
    }

    /// Like [`direct_map`](Self::direct_map) but returns the matches in
    /// source order, each scored 1.0.
    pub fn direct_map_scored<S, T>(&self, source_bones: &[S], target_bones: &[T]) -> Vec<BoneMatch>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let targets: HashSet<&str> = target_bones.iter().map(|bone| bone.as_ref()).collect();
        let mut claimed: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        for source in source_bones.iter().map(|bone| bone.as_ref()) {
            let Some(expected) = self.table.expected_target(source) else {
                continue;
            };

            if targets.contains(expected) && claimed.insert(expected) {
                info!("MAP: {} -> {} | Direct", expected, source);
                matches.push(BoneMatch {
                    target: expected.to_string(),
                    source: source.to_string(),
                    score: 1.0,
                    origin: MatchOrigin::Direct,
                });
            }
        }

        debug!(
            signature = %self.signature,
            sources = source_bones.len(),
            targets = targets.len(),
            matched = matches.len(),
            "Direct mapping complete"
        );

        matches
    }
}

/// Whether `bone_names` follow the Mixamo convention.
pub fn is_target_convention<S: AsRef<str>>(bone_names: &[S]) -> bool {
    DirectMapper::mixamo().is_target_convention(bone_names)
}

/// Direct mapping through the built-in Mixamo table.
pub fn direct_map<S, T>(source_bones: &[S], target_bones: &[T]) -> BoneMapping
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    DirectMapper::mixamo().direct_map(source_bones, target_bones)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mapping::Bone;

    #[test]
    fn test_mixamo_table_is_valid() {
        let table = BoneTable::from_pairs(MIXAMO_BONE_TABLE.iter().copied()).unwrap();
        assert_eq!(table.len(), MIXAMO_BONE_TABLE.len());
        assert_eq!(DirectMapper::mixamo().table().len(), MIXAMO_BONE_TABLE.len());
    }

    #[test]
    fn test_every_mixamo_target_carries_signature() {
        for (_, target) in MIXAMO_BONE_TABLE {
            assert!(target.starts_with(MIXAMO_SIGNATURE), "{target}");
        }
    }

    #[test]
    fn test_pairs_are_unique() {
        assert!(pairs_are_unique(&[("a", "x"), ("b", "y")]));
        assert!(!pairs_are_unique(&[("a", "x"), ("a", "y")]));
        assert!(!pairs_are_unique(&[("a", "x"), ("b", "x")]));
        assert!(pairs_are_unique(&[]));
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let err = BoneTable::from_pairs([("pelvis", "Hips"), ("pelvis", "Root")]).unwrap_err();
        assert!(matches!(err, RigmapError::DuplicateTableKey(ref k) if k == "pelvis"));

        let err = BoneTable::from_pairs([("pelvis", "Hips"), ("hip", "Hips")]).unwrap_err();
        assert!(matches!(err, RigmapError::DuplicateTableTarget(ref t) if t == "Hips"));
    }

    #[test]
    fn test_is_target_convention() {
        assert!(is_target_convention(&["mixamorigHips", "mixamorigSpine"]));
        assert!(!is_target_convention(&["Hips", "Spine"]));
        assert!(!is_target_convention::<&str>(&[]));
    }

    #[test]
    fn test_direct_map_present_target() {
        let mapping = direct_map(&["pelvis"], &["mixamorigHips"]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("mixamorigHips"), Some("pelvis"));
    }

    #[test]
    fn test_direct_map_absent_target() {
        let mapping = direct_map(&["pelvis"], &["mixamorigSpine"]);
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_direct_map_skips_unknown_sources() {
        let mapping = direct_map(
            &["pelvis", "tail_01", "hand_l"],
            &["mixamorigHips", "mixamorigLeftHand", "mixamorigTail"],
        );
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("mixamorigLeftHand"), Some("hand_l"));
        assert!(!mapping.contains_target("mixamorigTail"));
    }

    #[test]
    fn test_direct_map_is_case_sensitive() {
        assert!(direct_map(&["Pelvis"], &["mixamorigHips"]).is_empty());
        assert!(direct_map(&["pelvis"], &["MixamorigHips"]).is_empty());
    }

    #[test]
    fn test_direct_map_accepts_bone_records() {
        let source = [Bone::new("spine_01"), Bone::new("neck_01")];
        let target = [Bone::new("mixamorigSpine"), Bone::new("mixamorigNeck")];

        let matches = DirectMapper::mixamo().direct_map_scored(&source, &target);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.score == 1.0 && m.origin == MatchOrigin::Direct));
    }

    #[test]
    fn test_duplicate_source_matched_once() {
        let matches = DirectMapper::mixamo().direct_map_scored(&["head", "head"], &["mixamorigHead"]);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_custom_convention() {
        let table = BoneTable::from_pairs([("pelvis", "DEF-hips"), ("head", "DEF-head")]).unwrap();
        let mapper = DirectMapper::new("def-", table);
        assert_eq!(mapper.convention(), SkeletonConvention::Custom);

        assert!(mapper.is_target_convention(&["DEF-hips", "root"]));
        let mapping = mapper.direct_map(&["pelvis", "head"], &["DEF-hips", "DEF-head"]);
        assert_eq!(mapping.get("DEF-head"), Some("head"));
    }

    #[test]
    fn test_strengthened_recognition() {
        let mapper = DirectMapper::mixamo().with_recognition(RecognitionPolicy::MinFraction(0.5));
        assert!(!mapper.is_target_convention(&["mixamorigHips", "Cube", "Camera"]));
        assert!(mapper.is_target_convention(&["mixamorigHips", "mixamorigSpine", "Camera"]));
    }
}

//! Skeleton Convention Recognition
//!
//! Decides whether a bone collection follows a known naming convention by
//! looking for the convention's signature substring in bone names. This is
//! a heuristic: an unrelated rig that happens to contain the signature is
//! recognized too.

/// Signature substring of Mixamo rigs ("mixamorigHips", "mixamorig:Spine").
pub const MIXAMO_SIGNATURE: &str = "mixamorig";

/// How many bone names must carry the signature for recognition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RecognitionPolicy {
    /// A single matching bone name is enough
    #[default]
    AnyName,
    /// At least this fraction (0, 1] of bone names must match
    MinFraction(f32),
}

impl RecognitionPolicy {
    /// Check `bone_names` against `signature` (case-insensitive).
    ///
    /// An empty collection is never recognized.
    pub fn recognizes<S: AsRef<str>>(&self, signature: &str, bone_names: &[S]) -> bool {
        let signature = signature.to_lowercase();
        let carries_signature =
            |name: &S| name.as_ref().to_lowercase().contains(signature.as_str());

        match *self {
            RecognitionPolicy::AnyName => bone_names.iter().any(carries_signature),
            RecognitionPolicy::MinFraction(fraction) => {
                if bone_names.is_empty() {
                    return false;
                }
                let hits = bone_names.iter().filter(|name| carries_signature(*name)).count();
                hits as f32 / bone_names.len() as f32 >= fraction
            }
        }
    }
}

/// Naming convention a target skeleton was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonConvention {
    /// Mixamo "mixamorig" bone names
    Mixamo,
    /// A caller-supplied convention table
    Custom,
    /// Not recognized; only fuzzy matching applies
    Generic,
}

impl std::fmt::Display for SkeletonConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkeletonConvention::Mixamo => f.write_str("mixamo"),
            SkeletonConvention::Custom => f.write_str("custom"),
            SkeletonConvention::Generic => f.write_str("generic"),
        }
    }
}

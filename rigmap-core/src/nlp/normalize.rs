//! Bone Name Normalizer
//!
//! Canonicalizes raw bone names so that names authored under different rig
//! conventions become comparable:
//!   - "Hand_L" / "hand.l" / "L-Hand"  →  "hand_left" / "hand_left" / "left_hand"
//!   - "jnt_Spine.01"                  →  "spine_01"
//!   - "mixamorigLeftArm"              →  "leftarm"
//!
//! The transform chain is fixed and applied in order:
//! 1. lowercase
//! 2. hyphen, period and whitespace become `_`
//! 3. strip one leading rig prefix token
//! 4. whole-word `left` / `right` become `l` / `r`
//! 5. side markers expand: leading `l_`/`r_`, trailing `_l`/`_r`

/// Rig prefix tokens stripped from the front of a lowercased name.
///
/// Only the first matching token is removed. `mixamorig_` precedes
/// `mixamorig` so the separator goes with it.
pub const RIG_PREFIXES: &[&str] = &["mixamorig_", "mixamorig", "rig_", "bone_", "jnt_", "joint_"];

/// Normalize a bone name into its canonical comparable form.
///
/// The result is transient: it is only ever used for scoring and is never
/// handed back to callers as a bone name.
///
/// # Example
/// ```
/// use rigmap_core::nlp::normalize::normalize_bone_name;
///
/// assert_eq!(normalize_bone_name("Hand_L"), "hand_left");
/// assert_eq!(normalize_bone_name("jnt_Spine.01"), "spine_01");
/// assert_eq!(normalize_bone_name("R-Foot"), "right_foot");
/// ```
pub fn normalize_bone_name(name: &str) -> String {
    let separated: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    let unprefixed = RIG_PREFIXES
        .iter()
        .find_map(|prefix| separated.strip_prefix(*prefix))
        .unwrap_or(&separated);

    let sided = replace_whole_word(unprefixed, "left", "l");
    let sided = replace_whole_word(&sided, "right", "r");

    expand_side_markers(sided)
}

/// Replace `word` only where it is not glued to other word characters.
///
/// Word characters are ASCII alphanumerics and `_`, so `left_arm` keeps its
/// `left` while `left` on its own or `arm:left` does not.
fn replace_whole_word(text: &str, word: &str, replacement: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    for (start, _) in text.match_indices(word) {
        let end = start + word.len();
        let open = start == 0 || !is_word_byte(bytes[start - 1]);
        let close = end == bytes.len() || !is_word_byte(bytes[end]);

        if open && close {
            out.push_str(&text[copied_up_to..start]);
            out.push_str(replacement);
            copied_up_to = end;
        }
    }

    out.push_str(&text[copied_up_to..]);
    out
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Expand short side markers at either end into `left` / `right`.
fn expand_side_markers(name: String) -> String {
    let name = if let Some(rest) = name.strip_prefix("l_") {
        format!("left_{rest}")
    } else if let Some(rest) = name.strip_prefix("r_") {
        format!("right_{rest}")
    } else {
        name
    };

    if let Some(stem) = name.strip_suffix("_l") {
        format!("{stem}_left")
    } else if let Some(stem) = name.strip_suffix("_r") {
        format!("{stem}_right")
    } else {
        name
    }
}

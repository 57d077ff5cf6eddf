//! Levenshtein Distance (Edit Distance)
//!
//! Reference: Levenshtein, V. I. (1966). "Binary codes capable of correcting
//!            deletions, insertions, and reversals"
//!
//! # Time Complexity
//! O(m × n) where m, n are name lengths in chars
//!
//! # Space Complexity
//! O(min(m, n)): only two rows of the DP table are kept
//!
//! # Operations
//! - Insert: cost = 1
//! - Delete: cost = 1
//! - Substitute: cost = 1

/// Compute the Levenshtein edit distance between two names.
///
/// # Algorithm
/// Wagner-Fischer over a conceptual `(m+1) × (n+1)` table with
/// `cell[i][0] = i`, `cell[0][j] = j` and
/// `cell[i][j] = min(cell[i-1][j] + 1, cell[i][j-1] + 1, cell[i-1][j-1] + cost)`.
/// Rows are rolled so only the previous row is held in memory.
///
/// Distances count chars, not bytes.
///
/// # Example
/// ```
/// use rigmap_core::nlp::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("spine_01", "spine_02"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the shorter name on the row axis
    let (rows, cols) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if rows.is_empty() {
        return cols.len();
    }

    let mut prev: Vec<usize> = (0..=rows.len()).collect();
    let mut curr: Vec<usize> = vec![0; rows.len() + 1];

    for (j, &col_char) in cols.iter().enumerate() {
        curr[0] = j + 1;

        for (i, &row_char) in rows.iter().enumerate() {
            let substitution = prev[i] + usize::from(row_char != col_char);
            let deletion = prev[i + 1] + 1;
            let insertion = curr[i] + 1;

            curr[i + 1] = substitution.min(deletion).min(insertion);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[rows.len()]
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// # Formula
/// `similarity = 1.0 - distance / max(len_a, len_b)`
///
/// Two empty names are treated as identical.
#[inline]
pub fn levenshtein_similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f32 / max_len as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        // Empty names
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("", "neck"), 4);

        // Single operations
        assert_eq!(levenshtein_distance("arm", "arn"), 1); // substitution
        assert_eq!(levenshtein_distance("leg", "legs"), 1); // insertion
        assert_eq!(levenshtein_distance("legs", "leg"), 1); // deletion

        // Classic examples
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_distance_is_symmetric() {
        let pairs = [("forearm", "lowerarm"), ("thigh", "upleg"), ("", "hips")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_levenshtein_counts_chars() {
        assert_eq!(levenshtein_distance("épaule", "epaule"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert!((levenshtein_similarity("head", "head") - 1.0).abs() < f32::EPSILON);
        assert!((levenshtein_similarity("", "") - 1.0).abs() < f32::EPSILON);
        assert!((levenshtein_similarity("spine_01", "spine_02") - 0.875).abs() < 0.001);
        assert!(levenshtein_similarity("foot", "elbow") < 0.25);
    }
}

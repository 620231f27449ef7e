// Cosine similarity between document vectors.
//
// TF-IDF weights are never negative, so in practice the result lands in
// [0, 1]. A zero vector (a document with no terms) has no direction and
// therefore no defined cosine; `score` treats that as no similarity.

/// Cosine of the angle between `a` and `b`, clamped to [-1, 1].
///
/// Returns `None` when the lengths differ or either vector has zero
/// magnitude.
pub fn try_cosine(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        None
    } else {
        Some((dot / denom).clamp(-1.0, 1.0))
    }
}

/// Similarity score in [0, 1]; an undefined cosine counts as 0.
pub fn score(a: &[f64], b: &[f64]) -> f64 {
    try_cosine(a, b).unwrap_or(0.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [0.3, 0.4, 0.5];
        assert!((score(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(score(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_zero_vector_is_undefined() {
        assert_eq!(try_cosine(&[0.0, 0.0], &[1.0, 0.0]), None);
        assert_eq!(score(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_length_mismatch_is_undefined() {
        assert_eq!(try_cosine(&[1.0], &[1.0, 0.0]), None);
    }

    #[test]
    fn test_negative_cosine_clamped_for_score() {
        assert_eq!(try_cosine(&[1.0], &[-1.0]), Some(-1.0));
        assert_eq!(score(&[1.0], &[-1.0]), 0.0);
    }
}

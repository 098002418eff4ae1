//! Broadcastable per-item input values.

use serde::{Deserialize, Serialize};

use super::GapSequence;

/// A value given either once for every item or once per item.
///
/// Deserializes from a scalar (`5`) as [`PerItem::Uniform`] and from an
/// array (`[5, 3, 4]`) as [`PerItem::Each`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerItem<T> {
    /// One value broadcast to every item.
    Uniform(T),
    /// One value per item.
    Each(Vec<T>),
}

impl<T: Clone> PerItem<T> {
    /// Expands to exactly `len` values.
    ///
    /// `Each` is returned as-is; callers check [`PerItem::explicit_len`]
    /// against `len` beforehand.
    pub fn expand(&self, len: usize) -> Vec<T> {
        match self {
            Self::Uniform(value) => vec![value.clone(); len],
            Self::Each(values) => values.clone(),
        }
    }
}

impl<T> PerItem<T> {
    /// Number of values when given per item, `None` when uniform.
    pub fn explicit_len(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::Each(values) => Some(values.len()),
        }
    }
}

impl From<f64> for PerItem<f64> {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for PerItem<f64> {
    fn from(values: Vec<f64>) -> Self {
        Self::Each(values)
    }
}

impl From<GapSequence> for PerItem<GapSequence> {
    fn from(gaps: GapSequence) -> Self {
        Self::Uniform(gaps)
    }
}

impl From<Vec<GapSequence>> for PerItem<GapSequence> {
    fn from(gaps: Vec<GapSequence>) -> Self {
        Self::Each(gaps)
    }
}

impl From<Vec<Vec<i64>>> for PerItem<GapSequence> {
    fn from(gaps: Vec<Vec<i64>>) -> Self {
        Self::Each(gaps.into_iter().map(GapSequence::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_expand() {
        let costs = PerItem::Uniform(2.0);
        assert_eq!(costs.expand(3), vec![2.0, 2.0, 2.0]);
        assert_eq!(costs.explicit_len(), None);
    }

    #[test]
    fn test_each_expand() {
        let costs: PerItem<f64> = vec![1.0, 3.0].into();
        assert_eq!(costs.expand(2), vec![1.0, 3.0]);
        assert_eq!(costs.explicit_len(), Some(2));
    }

    #[test]
    fn test_gap_conversions() {
        let gaps: PerItem<GapSequence> = vec![vec![0, 1], vec![0]].into();
        assert_eq!(gaps.explicit_len(), Some(2));
        assert_eq!(gaps.expand(2)[1].offsets(), &[0]);
    }

    #[test]
    fn test_deserialize_scalar_or_array() {
        let uniform: PerItem<f64> = serde_json::from_str("5").unwrap();
        assert_eq!(uniform, PerItem::Uniform(5.0));

        let each: PerItem<f64> = serde_json::from_str("[5, 3]").unwrap();
        assert_eq!(each, PerItem::Each(vec![5.0, 3.0]));

        let one_gap: PerItem<GapSequence> = serde_json::from_str("[0, 1, 3]").unwrap();
        assert_eq!(one_gap, PerItem::Uniform(GapSequence::new(vec![0, 1, 3])));

        let per_task: PerItem<GapSequence> = serde_json::from_str("[[0], [0, 2]]").unwrap();
        assert_eq!(per_task.explicit_len(), Some(2));
    }
}

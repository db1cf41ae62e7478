//! Token count triple shared by every aggregation view

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Prompt, completion and total token counts
///
/// Counts are signed: callers are trusted to pass non-negative values, and
/// negative inputs are carried into the totals unchanged rather than rejected.
/// Arithmetic wraps on overflow so an accumulation never panics halfway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    /// Tokens sent to the model
    pub prompt_tokens: i64,
    /// Tokens generated by the model
    pub completion_tokens: i64,
    /// Always prompt_tokens + completion_tokens
    pub total_tokens: i64,
}

impl TokenCounts {
    /// Zero counts
    pub const ZERO: TokenCounts = TokenCounts {
        prompt_tokens: 0,
        completion_tokens: 0,
        total_tokens: 0,
    };

    /// Create counts for a single call, deriving the total
    pub fn new(prompt_tokens: i64, completion_tokens: i64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.wrapping_add(completion_tokens),
        }
    }

    /// Accumulate another set of counts into this one
    pub fn add(&mut self, other: &TokenCounts) {
        *self = self.combined(other);
    }

    /// Sum of two counts, computed without touching either
    pub fn combined(&self, other: &TokenCounts) -> TokenCounts {
        TokenCounts {
            prompt_tokens: self.prompt_tokens.wrapping_add(other.prompt_tokens),
            completion_tokens: self.completion_tokens.wrapping_add(other.completion_tokens),
            total_tokens: self.total_tokens.wrapping_add(other.total_tokens),
        }
    }

    /// Whether all three counts are zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl AddAssign for TokenCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.add(&rhs);
    }
}

impl std::iter::Sum for TokenCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, c| {
            acc += c;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_derived() {
        let counts = TokenCounts::new(10, 5);
        assert_eq!(counts.total_tokens, 15);

        let counts = TokenCounts::new(0, 0);
        assert_eq!(counts.total_tokens, 0);
        assert!(counts.is_zero());
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let counts = TokenCounts::new(-4, 10);
        assert_eq!(counts.total_tokens, 6);
    }

    #[test]
    fn test_accumulate() {
        let mut acc = TokenCounts::ZERO;
        acc.add(&TokenCounts::new(10, 5));
        acc += TokenCounts::new(3, 2);

        assert_eq!(acc, TokenCounts::new(13, 7));
        assert_eq!(acc.total_tokens, 20);
    }

    #[test]
    fn test_overflow_wraps_every_field() {
        let mut acc = TokenCounts::new(0, i64::MAX - 10);
        acc.add(&TokenCounts::new(5, 20));

        assert_eq!(acc.prompt_tokens, 5);
        assert_eq!(acc.completion_tokens, (i64::MAX - 10).wrapping_add(20));
        assert_eq!(
            acc.total_tokens,
            acc.prompt_tokens.wrapping_add(acc.completion_tokens)
        );

        let counts = TokenCounts::new(i64::MAX, 1);
        assert_eq!(counts.total_tokens, i64::MIN);
    }

    #[test]
    fn test_sum() {
        let total: TokenCounts = [(1, 2), (3, 4), (0, 7)]
            .iter()
            .map(|&(p, c)| TokenCounts::new(p, c))
            .sum();

        assert_eq!(total.prompt_tokens, 4);
        assert_eq!(total.completion_tokens, 13);
        assert_eq!(total.total_tokens, 17);
    }
}

use thiserror::Error;

/// Rejected selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("rank {k} is out of range for {len} elements (expected 1..={len})")]
    RankOutOfRange { k: usize, len: usize },
}

/// Reasons two bags cannot be equalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EqualizeError {
    #[error("bags differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Some value is held an odd number of times more by one bag than the other.
    #[error("value {value} has odd imbalance {imbalance}")]
    Infeasible { value: u64, imbalance: i64 },
    #[error("swap cost does not fit in u64")]
    CostOverflow,
}

/// A strategy or pivot name that does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection strategy {0:?}")]
pub struct StrategyParseError(pub String);

/// Validates a 1-based rank against a slice length.
pub(crate) fn check_rank(k: usize, len: usize) -> Result<(), SelectError> {
    if k == 0 || k > len {
        tracing::debug!(k, len, "rejecting out-of-range rank");
        return Err(SelectError::RankOutOfRange { k, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bounds() {
        assert!(check_rank(1, 1).is_ok());
        assert!(check_rank(3, 3).is_ok());
        assert_eq!(
            check_rank(0, 3),
            Err(SelectError::RankOutOfRange { k: 0, len: 3 })
        );
        assert_eq!(
            check_rank(4, 3),
            Err(SelectError::RankOutOfRange { k: 4, len: 3 })
        );
        assert!(check_rank(1, 0).is_err());
    }

    #[test]
    fn messages() {
        let e = SelectError::RankOutOfRange { k: 5, len: 3 };
        assert_eq!(
            e.to_string(),
            "rank 5 is out of range for 3 elements (expected 1..=3)"
        );
        let e = EqualizeError::Infeasible {
            value: 2,
            imbalance: 3,
        };
        assert_eq!(e.to_string(), "value 2 has odd imbalance 3");
    }
}

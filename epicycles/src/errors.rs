//! Error types for the operations that can be refused.
//!
//! Capacity saturation is intentionally not an error, see
//! [AppendOutcome](crate::sketch::AppendOutcome).

/// Problems found when validating a frequency visiting order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyOrderError {
    /// A frequency outside of `-degree..=degree` was given.
    #[error("frequency {frequency} is outside of the range -{degree}..={degree}")]
    OutOfRange { frequency: i32, degree: usize },
    /// A frequency appears more than once.
    #[error("frequency {0} appears more than once")]
    Duplicate(i32),
    /// A frequency in `-degree..=degree` is not visited.
    #[error("frequency {0} is never visited")]
    Missing(i32),
    /// The zero frequency (offset term) must be visited first since it seeds the chain origin.
    #[error("the zero frequency must be visited first, found {0} first")]
    OffsetNotFirst(i32),
    /// The degree exceeds [MAX_DEGREE](crate::fourier::MAX_DEGREE).
    #[error("degree {degree} exceeds the maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },
}

/// Reasons a commit request is refused. The session state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    /// Not enough points have been sketched to close the curve.
    #[error("at least {required} points are required to commit, only {count} sketched")]
    InsufficientPoints { count: usize, required: usize },
    /// Sketch was already committed, the session must be reset before sketching again.
    #[error("sketch already committed, reset the session to sketch again")]
    AlreadyCommitted,
}

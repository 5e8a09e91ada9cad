use crate::errors::FrequencyOrderError;

/// Largest degree accepted, keeps every frequency representable as an `i32`.
pub const MAX_DEGREE: usize = 1 << 16;

/// Explicit mapping from visiting position to signed frequency.
///
/// The order decides which coefficient becomes which link of the epicycle chain. The canonical
/// order built by [FrequencyOrder::new] visits the offset term first then interleaves positive and
/// negative frequencies of growing magnitude: `0, +1, -1, +2, -2, ..., +N, -N`.
///
/// # Examples
///
/// ```
/// # use epicycles::fourier::*;
/// let order = FrequencyOrder::new(2);
/// assert_eq!(order.frequencies(), &[0, 1, -1, 2, -2]);
/// assert_eq!(order.position_of(-2), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOrder {
    degree: usize,
    frequencies: Vec<i32>,
}

impl FrequencyOrder {
    /// Build the canonical visiting order for `degree`, clamped to [MAX_DEGREE].
    pub fn new(degree: usize) -> Self {
        let degree = if degree > MAX_DEGREE {
            log::warn!("degree {} clamped to {}", degree, MAX_DEGREE);
            MAX_DEGREE
        } else {
            degree
        };
        let mut frequencies = Vec::with_capacity(2 * degree + 1);
        frequencies.push(0);
        for n in 1..=degree as i32 {
            frequencies.push(n);
            frequencies.push(-n);
        }

        debug_assert!(validate_order(&frequencies, degree).is_ok());
        FrequencyOrder {
            degree,
            frequencies,
        }
    }

    /// Build a visiting order from an explicit list of frequencies.
    ///
    /// Every frequency in `-degree..=degree` must appear exactly once and the zero frequency must
    /// be first. `degree` must not exceed [MAX_DEGREE].
    ///
    /// # Examples
    ///
    /// ```
    /// # use epicycles::fourier::*;
    /// # use epicycles::errors::FrequencyOrderError;
    /// assert!(FrequencyOrder::from_frequencies(vec![0, -1, 1], 1).is_ok());
    /// assert_eq!(
    ///     FrequencyOrder::from_frequencies(vec![0, 1, 1], 1),
    ///     Err(FrequencyOrderError::Duplicate(1))
    /// );
    /// ```
    pub fn from_frequencies(
        frequencies: Vec<i32>,
        degree: usize,
    ) -> Result<Self, FrequencyOrderError> {
        validate_order(&frequencies, degree)?;
        Ok(FrequencyOrder {
            degree,
            frequencies,
        })
    }

    /// Highest frequency magnitude visited.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of frequencies visited (`2 * degree + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false, the offset frequency is always visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    #[inline]
    pub fn frequencies(&self) -> &[i32] {
        &self.frequencies
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = i32> + '_ {
        self.frequencies.iter().copied()
    }

    /// Frequency visited at `position`.
    #[inline]
    pub fn frequency_at(&self, position: usize) -> Option<i32> {
        self.frequencies.get(position).copied()
    }

    /// Visiting position of `frequency`, `None` if outside of `-degree..=degree`.
    pub fn position_of(&self, frequency: i32) -> Option<usize> {
        self.frequencies.iter().position(|&f| f == frequency)
    }
}

/// Slot in `-degree..=degree` for `frequency` (`frequency + degree`), `None` if out of range.
#[inline]
pub(crate) fn frequency_slot(frequency: i32, degree: usize) -> Option<usize> {
    let slot = frequency as i64 + degree as i64;
    if slot < 0 || slot > 2 * degree as i64 {
        None
    } else {
        Some(slot as usize)
    }
}

fn validate_order(frequencies: &[i32], degree: usize) -> Result<(), FrequencyOrderError> {
    if degree > MAX_DEGREE {
        return Err(FrequencyOrderError::DegreeTooLarge {
            degree,
            max: MAX_DEGREE,
        });
    }

    let mut seen = vec![false; 2 * degree + 1];
    for &frequency in frequencies {
        let slot = frequency_slot(frequency, degree)
            .ok_or(FrequencyOrderError::OutOfRange { frequency, degree })?;
        if seen[slot] {
            return Err(FrequencyOrderError::Duplicate(frequency));
        }
        seen[slot] = true;
    }

    if let Some(slot) = seen.iter().position(|&s| !s) {
        return Err(FrequencyOrderError::Missing(slot as i32 - degree as i32));
    }

    match frequencies.first() {
        Some(0) => Ok(()),
        Some(&f) => Err(FrequencyOrderError::OffsetNotFirst(f)),
        // unreachable: the zero slot would have been reported missing
        None => Err(FrequencyOrderError::Missing(0)),
    }
}

use crate::error::{ArrayError, Result};
use serde::{Deserialize, Serialize};

/// Lower bound applied to shrink targets
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityFloor {
    /// Shrinking may go below the construction-time capacity
    #[default]
    None,
    /// Shrinking stops at the construction-time capacity
    Initial,
}

/// Growth and shrink thresholds of a [`DynamicArray`](crate::DynamicArray).
///
/// A full array grows to `capacity * growth_factor`. After a deletion, an
/// array with `0 < len < capacity / shrink_threshold` shrinks to
/// `capacity / shrink_divisor`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ResizePolicy {
    #[serde(default = "d_usize::<2>")]
    pub growth_factor: usize,
    #[serde(default = "d_usize::<4>")]
    pub shrink_threshold: usize,
    #[serde(default = "d_usize::<2>")]
    pub shrink_divisor: usize,
    #[serde(default)]
    pub floor: CapacityFloor,
}

impl ResizePolicy {
    pub fn validate(&self) -> Result<()> {
        if self.growth_factor < 2 {
            return Err(ArrayError::invalid(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.shrink_divisor < 2 {
            return Err(ArrayError::invalid(format!(
                "shrink divisor must be at least 2, got {}",
                self.shrink_divisor
            )));
        }
        // A shrunk array must have room left before it hits the growth point
        if self.shrink_threshold <= self.shrink_divisor {
            return Err(ArrayError::invalid(format!(
                "shrink threshold ({}) must be greater than shrink divisor ({})",
                self.shrink_threshold, self.shrink_divisor
            )));
        }
        Ok(())
    }

    /// Capacity to grow to before adding an element, `None` if there is still
    /// a free slot.
    pub fn grow_target(&self, len: usize, capacity: usize) -> Result<Option<usize>> {
        if len < capacity {
            return Ok(None);
        }
        capacity
            .checked_mul(self.growth_factor)
            .map(Some)
            .ok_or(ArrayError::CapacityOverflow { capacity })
    }

    /// Capacity to shrink to after removing an element, `None` if the array
    /// is still dense enough.
    ///
    /// The threshold compares against the exact quotient, so `len = 1` at
    /// capacity 6 is below a quarter and shrinks.
    pub fn shrink_target(&self, len: usize, capacity: usize, initial: usize) -> Option<usize> {
        if len == 0 || len.saturating_mul(self.shrink_threshold) >= capacity {
            return None;
        }
        let target = capacity / self.shrink_divisor;
        let target = match self.floor {
            CapacityFloor::None => target,
            CapacityFloor::Initial => target.max(initial),
        };
        (target < capacity).then_some(target)
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            growth_factor: 2,
            shrink_threshold: 4,
            shrink_divisor: 2,
            floor: CapacityFloor::None,
        }
    }
}

fn d_usize<const VALUE: usize>() -> usize {
    VALUE
}

#[cfg(test)]
mod tests {
    use crate::policy::{CapacityFloor, ResizePolicy};
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, None)]
    #[case(3, 4, None)]
    #[case(4, 4, Some(8))]
    #[case(6, 6, Some(12))]
    fn grows_only_when_full(
        #[case] len: usize,
        #[case] capacity: usize,
        #[case] expected: Option<usize>,
    ) {
        let policy = ResizePolicy::default();
        assert_eq!(policy.grow_target(len, capacity), Ok(expected));
    }

    #[test]
    fn growth_overflow_is_reported() {
        let policy = ResizePolicy::default();
        assert!(policy
            .grow_target(usize::MAX, usize::MAX)
            .is_err_and(|err| err.is_fatal()));
    }

    #[rstest]
    #[case(4, 16, None)]
    #[case(3, 16, Some(8))]
    #[case(1, 8, Some(4))]
    #[case(0, 16, None)]
    #[case(1, 4, None)]
    #[case(1, 6, Some(3))]
    #[case(1, 5, Some(2))]
    #[case(2, 9, Some(4))]
    #[case(2, 8, None)]
    #[case(usize::MAX / 2, usize::MAX, None)]
    fn shrinks_below_quarter(
        #[case] len: usize,
        #[case] capacity: usize,
        #[case] expected: Option<usize>,
    ) {
        let policy = ResizePolicy::default();
        assert_eq!(policy.shrink_target(len, capacity, 16), expected);
    }

    #[test]
    fn initial_floor_clamps_shrink() {
        let policy = ResizePolicy {
            floor: CapacityFloor::Initial,
            ..Default::default()
        };
        assert_eq!(policy.shrink_target(3, 32, 16), Some(16));
        assert_eq!(policy.shrink_target(1, 16, 16), None);
    }

    #[rstest]
    #[case(ResizePolicy { growth_factor: 1, ..Default::default() })]
    #[case(ResizePolicy { shrink_divisor: 1, ..Default::default() })]
    #[case(ResizePolicy { shrink_threshold: 2, ..Default::default() })]
    fn rejects_degenerate_policies(#[case] policy: ResizePolicy) {
        assert!(policy.validate().is_err());
    }

    #[test]
    fn parses_partial_config() {
        let policy: ResizePolicy = toml::from_str(
            r#"
            growth_factor = 3
            floor = "initial"
            "#,
        )
        .expect("Should parse");

        assert_eq!(
            policy,
            ResizePolicy {
                growth_factor: 3,
                floor: CapacityFloor::Initial,
                ..Default::default()
            }
        );
        assert!(policy.validate().is_ok());
    }
}

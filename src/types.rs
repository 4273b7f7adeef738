//! Small value types shared by the block networks and the wrappers

/// A power of two value, guaranteed at the type level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerOfTwo {
    value: usize,
    log2_value: u32,
}

impl PowerOfTwo {
    /// Create a new PowerOfTwo from a value
    /// Returns None if the value is not a power of two
    pub fn new(value: usize) -> Option<Self> {
        if value.is_power_of_two() {
            Some(PowerOfTwo {
                value,
                log2_value: value.trailing_zeros(),
            })
        } else {
            None
        }
    }

    /// Create from a log2 value (e.g., 3 creates 8)
    pub fn from_log2(log2_value: u32) -> Self {
        PowerOfTwo {
            value: 1 << log2_value,
            log2_value,
        }
    }

    /// Get the raw value
    pub fn value(&self) -> usize {
        self.value
    }

    /// Get the log2 of the value
    pub fn log2(&self) -> u32 {
        self.log2_value
    }

    /// Smallest power of two >= n (n = 0 maps to 1)
    pub fn next_power_of_two(n: usize) -> Self {
        Self::from_log2(n.max(1).next_power_of_two().trailing_zeros())
    }
}

/// Number of doubling merge passes needed to grow runs of `run`
/// elements into a single run covering `len` elements.
pub fn merge_pass_count(run: usize, len: usize) -> u32 {
    if run == 0 || len <= run {
        return 0;
    }
    let runs = (len + run - 1) / run;
    PowerOfTwo::next_power_of_two(runs).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two() {
        assert!(PowerOfTwo::new(0).is_none());
        assert!(PowerOfTwo::new(3).is_none());
        assert!(PowerOfTwo::new(12).is_none());

        let p4 = PowerOfTwo::new(4).unwrap();
        assert_eq!(p4.value(), 4);
        assert_eq!(p4.log2(), 2);

        let p16 = PowerOfTwo::from_log2(4);
        assert_eq!(p16.value(), 16);
        assert_eq!(p16.log2(), 4);
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(PowerOfTwo::next_power_of_two(0).value(), 1);
        assert_eq!(PowerOfTwo::next_power_of_two(5).value(), 8);
        assert_eq!(PowerOfTwo::next_power_of_two(8).value(), 8);
    }

    #[test]
    fn test_merge_pass_count() {
        assert_eq!(merge_pass_count(16, 16), 0);
        assert_eq!(merge_pass_count(16, 8), 0);
        assert_eq!(merge_pass_count(16, 32), 1);
        assert_eq!(merge_pass_count(16, 48), 2);
        assert_eq!(merge_pass_count(16, 1 << 15), 11);
    }
}

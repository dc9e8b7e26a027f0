//! Size estimation for combinatorial runs.

use std::fmt;

/// Which enumeration an estimate describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinatoricOperation {
    Permutations,
    Combinations { choose: usize },
}

/// Advisory attached to an estimate whose result set is large.
/// Not an error: the caller decides whether to run the enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    pub operation: CombinatoricOperation,
    pub input_len: usize,
    /// `None` when the count does not fit in `u128`.
    pub expected_count: Option<u128>,
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            CombinatoricOperation::Permutations => write!(
                f,
                "permuting {} codes produces {} sequences; this may take a long time and a lot of memory",
                self.input_len,
                format_count(self.expected_count)
            ),
            CombinatoricOperation::Combinations { choose } => write!(
                f,
                "choosing {} of {} codes produces {} subsets; this may take a long time and a lot of memory",
                choose,
                self.input_len,
                format_count(self.expected_count)
            ),
        }
    }
}

/// Exact expected size of an enumeration, computed before running it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEstimate {
    pub operation: CombinatoricOperation,
    pub input_len: usize,
    /// `None` when the count does not fit in `u128`.
    pub count: Option<u128>,
    pub warning: Option<CapacityWarning>,
}

impl SizeEstimate {
    pub fn requires_confirmation(&self) -> bool {
        self.warning.is_some()
    }

    /// Count clamped into `u64` for listings.
    pub fn count_u64(&self) -> u64 {
        self.count
            .map(|c| u64::try_from(c).unwrap_or(u64::MAX))
            .unwrap_or(u64::MAX)
    }
}

/// `n!`, or `None` on overflow.
pub fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, x| acc.checked_mul(x))
}

/// `C(n, k)`, or `None` on overflow. Zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1).
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}

/// Count with thousands separators; "more than 2^128" on overflow.
pub fn format_count(count: Option<u128>) -> String {
    let Some(count) = count else {
        return "more than 2^128".to_string();
    };
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(3), Some(6));
        assert_eq!(factorial(8), Some(40_320));
        assert_eq!(factorial(31), Some(8_222_838_654_177_922_817_725_562_880_000_000));
        assert_eq!(factorial(40), None);
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(3, 2), Some(3));
        assert_eq!(binomial(5, 3), Some(10));
        assert_eq!(binomial(31, 7), Some(2_629_575));
        assert_eq!(binomial(4, 5), Some(0));
        assert_eq!(binomial(10, 0), Some(1));
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(999)), "999");
        assert_eq!(format_count(Some(40_320)), "40,320");
        assert_eq!(format_count(Some(2_629_575)), "2,629,575");
        assert_eq!(format_count(None), "more than 2^128");
    }
}

//! Per-region dialing plans for phone-number synthesis.

use crate::random::RandomSource;

/// How a region's mobile numbers are written in international format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialingPlan {
    pub region: &'static str,
    pub calling_code: &'static str,
    /// Random digits appended after the local prefix.
    pub trailing_digits: usize,
}

pub const DIALING_PLANS: &[DialingPlan] = &[
    DialingPlan {
        region: "China",
        calling_code: "86",
        trailing_digits: 8,
    },
    DialingPlan {
        region: "Hong Kong",
        calling_code: "852",
        trailing_digits: 7,
    },
    DialingPlan {
        region: "Macao",
        calling_code: "852",
        trailing_digits: 7,
    },
    DialingPlan {
        region: "Taiwan",
        calling_code: "886",
        trailing_digits: 8,
    },
    DialingPlan {
        region: "USA",
        calling_code: "1",
        trailing_digits: 7,
    },
];

/// Digits in a generic international number, after the `+`.
pub const GENERIC_NUMBER_DIGITS: usize = 13;

pub fn dialing_plan(region: &str) -> Option<&'static DialingPlan> {
    DIALING_PLANS.iter().find(|plan| plan.region == region)
}

impl DialingPlan {
    /// `+{calling code}{prefix}{trailing digits}`.
    pub fn format(&self, prefix: &str, rng: &mut impl RandomSource) -> String {
        format!(
            "+{}{prefix}{}",
            self.calling_code,
            rng.digits(self.trailing_digits)
        )
    }
}

/// `+` and 13 digits, the first non-zero.
pub fn generic_phone_number(rng: &mut impl RandomSource) -> String {
    let lead = rng.int_in(1, 9);
    format!("+{lead}{}", rng.digits(GENERIC_NUMBER_DIGITS - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn macao_shares_hong_kong_calling_code() {
        assert_eq!(dialing_plan("Macao").map(|plan| plan.calling_code), Some("852"));
        assert!(dialing_plan("Atlantis").is_none());
    }

    #[test]
    fn formats_with_prefix() {
        let mut rng = SeededRandom::new(11, 0);
        let number = dialing_plan("USA").unwrap().format("212", &mut rng);
        assert!(number.starts_with("+1212"));
        assert_eq!(number.len(), 1 + 1 + 3 + 7);
    }

    #[test]
    fn generic_number_shape() {
        let mut rng = SeededRandom::new(5, 0);
        for _ in 0..100 {
            let number = generic_phone_number(&mut rng);
            assert_eq!(number.len(), 14);
            assert!(number.starts_with('+'));
            assert_ne!(number.as_bytes()[1], b'0');
            assert!(number[1..].bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

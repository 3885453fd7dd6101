/// Reading of an optional passenger count (children, infants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerCount {
    /// Blank or zero: the backend rejects these, so the control is omitted
    Omitted,
    Count(u32),
    /// Not a whole number; left for the backend to report
    Invalid,
}

impl PassengerCount {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return PassengerCount::Omitted;
        }
        match raw.parse::<u32>() {
            Ok(0) => PassengerCount::Omitted,
            Ok(n) => PassengerCount::Count(n),
            Err(_) => PassengerCount::Invalid,
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, PassengerCount::Omitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_zero_are_omitted() {
        assert!(PassengerCount::parse("").is_omitted());
        assert!(PassengerCount::parse("  ").is_omitted());
        assert!(PassengerCount::parse("0").is_omitted());
        assert!(PassengerCount::parse("00").is_omitted());
    }

    #[test]
    fn test_counts() {
        assert_eq!(PassengerCount::parse("2"), PassengerCount::Count(2));
        assert_eq!(PassengerCount::parse("-1"), PassengerCount::Invalid);
        assert_eq!(PassengerCount::parse("two"), PassengerCount::Invalid);
    }
}

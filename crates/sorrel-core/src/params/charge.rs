use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents the charge discretization method used by the solver.
///
/// This enum selects how point charges are spread onto the solver grid.
/// Input decks name the method with the same `spl*` keywords the solver
/// documentation uses; older decks may still carry the numeric codes the
/// keywords replaced, which [`ChargeMethod::from_legacy_code`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChargeMethod {
    /// Trilinear interpolation (linear splines).
    #[default]
    Spl0,
    /// Cubic B-spline discretization.
    Spl2,
    /// Quintic B-spline discretization.
    Spl4,
}

/// One row per supported method: legacy numeric code, input spelling, value.
/// Every conversion reads this table, so the numeric and symbolic input
/// paths cannot drift apart. Row order must follow the enum's declaration
/// order; [`ChargeMethod::row`] indexes by discriminant.
const METHODS: [(u8, &str, ChargeMethod); 3] = [
    (0, "spl0", ChargeMethod::Spl0),
    (1, "spl2", ChargeMethod::Spl2),
    (2, "spl4", ChargeMethod::Spl4),
];

#[derive(Debug, Error)]
#[error("Invalid charge method string")]
pub struct ParseChargeMethodError;

impl ChargeMethod {
    fn row(self) -> (u8, &'static str, ChargeMethod) {
        METHODS[self as usize]
    }

    /// Resolves a deprecated numeric method code from old-style input decks.
    ///
    /// Returns `None` for codes outside the historical `0..=2` assignment.
    pub fn from_legacy_code(code: u8) -> Option<Self> {
        METHODS
            .iter()
            .find(|(legacy, _, _)| *legacy == code)
            .map(|&(_, _, method)| method)
    }

    /// Returns the numeric code this method carried in old-style input decks.
    pub fn legacy_code(self) -> u8 {
        self.row().0
    }
}

impl FromStr for ChargeMethod {
    type Err = ParseChargeMethodError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        METHODS
            .iter()
            .find(|(_, name, _)| *name == lowered)
            .map(|&(_, _, method)| method)
            .ok_or(ParseChargeMethodError)
    }
}

impl fmt::Display for ChargeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_follow_the_declaration_order() {
        for (index, row) in METHODS.iter().enumerate() {
            assert_eq!(row.2 as usize, index);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("spl0".parse::<ChargeMethod>().unwrap(), ChargeMethod::Spl0);
        assert_eq!("SPL2".parse::<ChargeMethod>().unwrap(), ChargeMethod::Spl2);
        assert_eq!("Spl4".parse::<ChargeMethod>().unwrap(), ChargeMethod::Spl4);
    }

    #[test]
    fn from_str_rejects_unknown_methods() {
        assert!("spl1".parse::<ChargeMethod>().is_err());
        assert!("cubic".parse::<ChargeMethod>().is_err());
        assert!("".parse::<ChargeMethod>().is_err());
    }

    #[test]
    fn from_legacy_code_resolves_the_historical_assignment() {
        assert_eq!(ChargeMethod::from_legacy_code(0), Some(ChargeMethod::Spl0));
        assert_eq!(ChargeMethod::from_legacy_code(1), Some(ChargeMethod::Spl2));
        assert_eq!(ChargeMethod::from_legacy_code(2), Some(ChargeMethod::Spl4));
        assert_eq!(ChargeMethod::from_legacy_code(3), None);
    }

    #[test]
    fn legacy_codes_round_trip_through_both_paths() {
        for method in [ChargeMethod::Spl0, ChargeMethod::Spl2, ChargeMethod::Spl4] {
            assert_eq!(
                ChargeMethod::from_legacy_code(method.legacy_code()),
                Some(method)
            );
            assert_eq!(method.to_string().parse::<ChargeMethod>().unwrap(), method);
        }
    }

    #[test]
    fn display_uses_the_input_deck_spelling() {
        assert_eq!(ChargeMethod::Spl0.to_string(), "spl0");
        assert_eq!(ChargeMethod::Spl2.to_string(), "spl2");
        assert_eq!(ChargeMethod::Spl4.to_string(), "spl4");
    }

    #[test]
    fn default_is_trilinear_interpolation() {
        assert_eq!(ChargeMethod::default(), ChargeMethod::Spl0);
    }
}

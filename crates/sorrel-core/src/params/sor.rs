use super::charge::ChargeMethod;
use super::grid::GridCenter;
use crate::input::outcome::{CheckError, ParseOutcome, ParseWarning};
use crate::input::source::TokenSource;
use nalgebra::{Point3, Vector3};
use phf::{Map, phf_map};
use tracing::{debug, warn};

/// Represents the kind of SOR calculation a parameter record configures.
///
/// Only automatically-configured calculations are currently implemented;
/// the consistency check rejects records of any type without a SOR
/// implementation behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SorCalcType {
    /// Grid geometry is derived automatically from the molecule set.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy)]
enum SorKeyword {
    Omega,
    Etol,
    MaxIter,
    Grid,
    Glen,
    Chgm,
    Gcent,
}

static SOR_KEYWORDS: Map<&'static str, SorKeyword> = phf_map! {
    "omega" => SorKeyword::Omega,
    "etol" => SorKeyword::Etol,
    "maxiter" => SorKeyword::MaxIter,
    "grid" => SorKeyword::Grid,
    "glen" => SorKeyword::Glen,
    "chgm" => SorKeyword::Chgm,
    "gcent" => SorKeyword::Gcent,
};

/// Represents the full parameter set for one SOR solver calculation.
///
/// A record starts from documented defaults and is filled incrementally by
/// [`SorParam::parse_keyword`], one keyword statement at a time. Fields whose
/// defaults are not universally safe carry a companion `*_set` flag so the
/// enclosing reader can tell an explicit value from a default once the block
/// has been consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct SorParam {
    /// The kind of calculation this record configures.
    pub calc_type: SorCalcType,
    /// Whether the enclosing reader has completed a parse pass over this record.
    ///
    /// Field parsers never touch this flag; the owner of the statement grammar
    /// raises it once the block is done, and [`SorParam::check`] requires it.
    pub parsed: bool,
    /// SOR relaxation factor, in `[0, 2]`.
    pub omega: f64,
    /// Whether `omega` was explicitly set.
    pub omega_set: bool,
    /// Convergence tolerance for the iteration, strictly positive.
    pub etol: f64,
    /// Maximum number of solver iterations.
    pub max_iter: usize,
    /// Number of grid points along each axis.
    pub grid: Vector3<f64>,
    /// Whether `grid` was explicitly set.
    pub grid_set: bool,
    /// Physical grid extent along each axis, in Angstroms.
    pub glen: Vector3<f64>,
    /// Whether `glen` was explicitly set.
    pub glen_set: bool,
    /// Where the grid is centered.
    pub center: GridCenter,
    /// Whether `center` was explicitly set.
    pub center_set: bool,
    /// Charge discretization method.
    pub chgm: ChargeMethod,
    /// Whether `chgm` was explicitly set.
    pub chgm_set: bool,
}

impl Default for SorParam {
    fn default() -> Self {
        Self {
            calc_type: SorCalcType::Auto,
            parsed: false,
            omega: 0.0,
            omega_set: false,
            etol: 1.0e-6,
            max_iter: 0,
            grid: Vector3::zeros(),
            grid_set: false,
            glen: Vector3::zeros(),
            glen_set: false,
            center: GridCenter::default(),
            center_set: false,
            chgm: ChargeMethod::default(),
            chgm_set: false,
        }
    }
}

impl SorParam {
    /// Creates a record of the given calculation type with default values.
    pub fn new(calc_type: SorCalcType) -> Self {
        Self {
            calc_type,
            ..Self::default()
        }
    }

    /// Consumes one keyword statement from the token source.
    ///
    /// The keyword itself has already been read by the caller; this method
    /// reads the argument tokens that keyword requires. Keyword matching is
    /// ASCII case-insensitive. On `Success` the owning field is updated and
    /// its set flag raised. On a `Warning` the record keeps its previous
    /// values for that field (`grid` and `glen` may keep the slots a partial
    /// sequence already wrote) and the warning has been logged; tokens
    /// consumed before the warning stay consumed. Unrecognized keywords warn
    /// without reading any argument tokens.
    pub fn parse_keyword(&mut self, keyword: &str, tokens: &mut impl TokenSource) -> ParseOutcome {
        debug!("Trying solver keyword '{}'", keyword);
        let matched = SOR_KEYWORDS
            .get(keyword.to_ascii_lowercase().as_str())
            .copied();
        let result = match matched {
            Some(SorKeyword::Omega) => self.parse_omega(tokens),
            Some(SorKeyword::Etol) => self.parse_etol(tokens),
            Some(SorKeyword::MaxIter) => self.parse_maxiter(tokens),
            Some(SorKeyword::Grid) => self.parse_grid(tokens),
            Some(SorKeyword::Glen) => self.parse_glen(tokens),
            Some(SorKeyword::Chgm) => self.parse_chgm(tokens),
            Some(SorKeyword::Gcent) => self.parse_gcent(tokens),
            None => Err(ParseWarning::UnrecognizedKeyword {
                keyword: keyword.to_string(),
            }),
        };
        match result {
            Ok(()) => ParseOutcome::Success,
            Err(warning) => warning.emit(),
        }
    }

    fn parse_omega(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        let value = read_float("omega", tokens)?;
        if !(0.0..=2.0).contains(&value) {
            return Err(ParseWarning::OutOfRange {
                keyword: "omega",
                value: value.to_string(),
                constraint: "must lie in [0, 2]",
            });
        }
        self.omega = value;
        self.omega_set = true;
        Ok(())
    }

    fn parse_etol(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        let value = read_float("etol", tokens)?;
        // Written negated so NaN also fails the constraint.
        if !(value > 0.0) {
            return Err(ParseWarning::OutOfRange {
                keyword: "etol",
                value: value.to_string(),
                constraint: "must be greater than 0",
            });
        }
        self.etol = value;
        Ok(())
    }

    fn parse_maxiter(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        let token = next_required("maxiter", tokens)?;
        match token.parse::<usize>() {
            Ok(value) => {
                self.max_iter = value;
                Ok(())
            }
            Err(_) => Err(ParseWarning::MalformedToken {
                keyword: "maxiter",
                token,
                expected: "unsigned int",
            }),
        }
    }

    fn parse_grid(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        read_triple("grid", &mut self.grid, tokens)?;
        self.grid_set = true;
        Ok(())
    }

    fn parse_glen(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        read_triple("glen", &mut self.glen, tokens)?;
        self.glen_set = true;
        Ok(())
    }

    fn parse_chgm(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        let token = next_required("chgm", tokens)?;
        let method = match token.parse::<u8>() {
            Ok(code) => {
                let method =
                    ChargeMethod::from_legacy_code(code).ok_or(ParseWarning::OutOfRange {
                        keyword: "chgm",
                        value: token,
                        constraint: "matches no charge method code",
                    })?;
                warn!(
                    "Numeric chgm code '{}' is deprecated; spell it '{}' instead",
                    code, method
                );
                method
            }
            Err(_) => token
                .parse::<ChargeMethod>()
                .map_err(|_| ParseWarning::MalformedToken {
                    keyword: "chgm",
                    token,
                    expected: "charge method",
                })?,
        };
        self.chgm = method;
        self.chgm_set = true;
        Ok(())
    }

    // The center variant is staged locally and committed whole; a sum type
    // cannot hold a half-written point the way three loose floats can.
    fn parse_gcent(&mut self, tokens: &mut impl TokenSource) -> Result<(), ParseWarning> {
        let first = next_required("gcent", tokens)?;
        if let Ok(x) = first.parse::<f64>() {
            let y = read_float("gcent", tokens)?;
            let z = read_float("gcent", tokens)?;
            self.center = GridCenter::Point(Point3::new(x, y, z));
            self.center_set = true;
            return Ok(());
        }
        if first.eq_ignore_ascii_case("mol") {
            let token = next_required("gcent", tokens)?;
            let number = match token.parse::<usize>() {
                Ok(number) => number,
                Err(_) => {
                    return Err(ParseWarning::MalformedToken {
                        keyword: "gcent",
                        token,
                        expected: "unsigned int",
                    });
                }
            };
            if number == 0 {
                return Err(ParseWarning::OutOfRange {
                    keyword: "gcent",
                    value: token,
                    constraint: "must reference molecules counting from 1",
                });
            }
            self.center = GridCenter::Molecule(number - 1);
            self.center_set = true;
            return Ok(());
        }
        Err(ParseWarning::MalformedToken {
            keyword: "gcent",
            token: first,
            expected: "float or the literal 'mol'",
        })
    }

    /// Validates record-level coherence after parsing has concluded.
    ///
    /// Unset fields keep their defaults and are accepted; the check demands
    /// only that the enclosing reader completed its parse pass and that the
    /// calculation type has a SOR implementation.
    pub fn check(&self) -> Result<(), CheckError> {
        debug!("Checking solver parameters of type {:?}", self.calc_type);
        if !self.parsed {
            warn!("{}", CheckError::NotParsed);
            return Err(CheckError::NotParsed);
        }
        match self.calc_type {
            SorCalcType::Auto => Ok(()),
        }
    }
}

fn next_required(
    keyword: &'static str,
    tokens: &mut impl TokenSource,
) -> Result<String, ParseWarning> {
    tokens
        .next_token()
        .ok_or(ParseWarning::PrematureEnd { keyword })
}

fn read_float(
    keyword: &'static str,
    tokens: &mut impl TokenSource,
) -> Result<f64, ParseWarning> {
    let token = next_required(keyword, tokens)?;
    match token.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(ParseWarning::MalformedToken {
            keyword,
            token,
            expected: "float",
        }),
    }
}

// Slots are written straight into the record one at a time, so a warning
// mid-sequence leaves the earlier slots updated and the set flag untouched.
fn read_triple(
    keyword: &'static str,
    slots: &mut Vector3<f64>,
    tokens: &mut impl TokenSource,
) -> Result<(), ParseWarning> {
    for axis in 0..3 {
        slots[axis] = read_float(keyword, tokens)?;
    }
    Ok(())
}

//! reduced form of an equation: power of X -> coefficient of "... = 0"
use log::info;
use std::collections::BTreeMap;
use std::fmt;

/// values with magnitude not above EPSILON are treated as zero
pub const EPSILON: f64 = 1e-6;

/// true if the value counts as zero for degree, formatting and solving
pub fn is_negligible(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// coefficients of "left - right = 0"; an absent power has a zero coefficient
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReducedForm {
    /// BTreeMap keeps the powers ordered
    pub coefficients: BTreeMap<u32, f64>,
}

impl ReducedForm {
    pub fn new() -> Self {
        ReducedForm {
            coefficients: BTreeMap::new(),
        }
    }

    pub(crate) fn add_term(&mut self, power: u32, value: f64) {
        *self.coefficients.entry(power).or_insert(0.0) += value;
    }

    /// coefficient of X^power, an absent power is zero
    pub fn coefficient(&self, power: u32) -> f64 {
        self.coefficients.get(&power).copied().unwrap_or(0.0)
    }

    /// highest power with a non negligible coefficient, 0 if there is none
    pub fn degree(&self) -> u32 {
        self.coefficients
            .iter()
            .rev()
            .find(|(_, value)| !is_negligible(**value))
            .map(|(power, _)| *power)
            .unwrap_or(0)
    }

    /// (power, coefficient) in ascending power order, negligible terms skipped
    pub fn significant_terms(&self) -> Vec<(u32, f64)> {
        let mut terms = Vec::new();
        for (power, value) in self.coefficients.iter() {
            if is_negligible(*value) {
                if *value != 0.0 {
                    info!("coefficient {:e} of X^{} is treated as zero", value, power);
                }
                continue;
            }
            terms.push((*power, *value));
        }
        terms
    }
}

impl From<BTreeMap<u32, f64>> for ReducedForm {
    fn from(coefficients: BTreeMap<u32, f64>) -> Self {
        ReducedForm { coefficients }
    }
}

// canonical form "c0 * X^p0 + c1 * X^p1 - c2 * X^p2 = 0"
impl fmt::Display for ReducedForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let terms = self.significant_terms();
        if terms.is_empty() {
            return write!(f, "0 * X^0 = 0");
        }
        for (i, (power, value)) in terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{:.2} * X^{}", value, power)?;
            } else if *value >= 0.0 {
                write!(f, " + {:.2} * X^{}", value, power)?;
            } else {
                write!(f, " - {:.2} * X^{}", value.abs(), power)?;
            }
        }
        write!(f, " = 0")
    }
}

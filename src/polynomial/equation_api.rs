//! `Computor`: one equation, the whole pipeline and its report
//!# Example
//! ```
//! use computor::polynomial::equation_api::Computor;
//! let mut computor = Computor::new("5 * X^0 + 4 * X^1 = 4 * X^0");
//! computor.set_loglevel(Some("off".to_string()));
//! let report = computor.solve().unwrap();
//! assert_eq!(report.degree, 1);
//! println!("{}", report);
//! ```
use crate::Utils::logger::{init_logger, level_filter};
use crate::polynomial::errors::{ComputorError, ParseError};
use crate::polynomial::parse_equation::reduce_equation;
use crate::polynomial::reduced_form::ReducedForm;
use crate::polynomial::solver::{Solution, solve};
use log::info;
use std::fmt;

/// everything printed for a successfully parsed equation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reduced_form: String,
    pub degree: u32,
    pub solution: Solution,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Reduced form: {}", self.reduced_form)?;
        writeln!(f, "Polynomial degree: {}", self.degree)?;
        write!(f, "{}", self.solution)
    }
}

/// owns one equation text, its reduced form and the report of the last successful run
pub struct Computor {
    pub equation: String,
    /// "debug", "info", "warn", "error", "off"/"none"; None means info
    pub loglevel: Option<String>,
    pub reduced: Option<ReducedForm>,
    pub result: Option<Report>,
}

impl Computor {
    pub fn new(equation: &str) -> Self {
        Computor {
            equation: equation.to_string(),
            loglevel: None,
            reduced: None,
            result: None,
        }
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// reduce, format, find the degree and solve; nothing is stored if any step fails
    pub fn solver(&mut self) -> Result<Report, ParseError> {
        let reduced = reduce_equation(&self.equation)?;
        let degree = reduced.degree();
        info!("polynomial degree {}", degree);
        let report = Report {
            reduced_form: reduced.to_string(),
            degree,
            solution: solve(&reduced),
        };
        self.reduced = Some(reduced);
        self.result = Some(report.clone());
        Ok(report)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<Report, ComputorError> {
        if let Some(filter) = level_filter(self.loglevel.as_deref())? {
            if init_logger(filter) {
                info!("solving '{}'", self.equation);
            }
        }
        Ok(self.solver()?)
    }

    pub fn get_result(&self) -> Option<Report> {
        self.result.clone()
    }
}

/// command line contract: exactly one argument (the equation). Returns the text for stdout and the exit code;
/// usage errors exit with 1, parse errors print a single "Error: ..." line and exit with 0
pub fn run(args: &[String], loglevel: Option<String>) -> (String, i32) {
    if args.len() != 1 {
        return ("Usage: computor \"equation\"".to_string(), 1);
    }
    let mut computor = Computor::new(&args[0]);
    computor.set_loglevel(loglevel);
    match computor.solve() {
        Ok(report) => (report.to_string(), 0),
        Err(e) => (format!("Error: {}", e), 0),
    }
}

//! closed form solution of the reduced equation, chosen by its degree
use crate::polynomial::reduced_form::{EPSILON, ReducedForm};
use log::{info, warn};
use num_complex::Complex64;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// every real number solves the equation
    AllReals,
    NoSolution,
    /// a*X + b = 0
    Linear(f64),
    /// discriminant strictly positive
    TwoReal(f64, f64),
    /// discriminant zero
    Repeated(f64),
    /// discriminant strictly negative, the roots are conjugate
    ComplexPair(Complex64, Complex64),
    /// degree above 2
    Unsolvable(u32),
}

/// fixed 6 digits; -0.0 is printed as 0.000000
fn fixed6(value: f64) -> String {
    format!("{:.6}", value + 0.0)
}

fn fixed6_complex(z: &Complex64) -> String {
    format!("{} + {}i", fixed6(z.re), fixed6(z.im))
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Solution::AllReals => write!(f, "Any real number is a solution."),
            Solution::NoSolution => write!(f, "No solution."),
            Solution::Linear(x) => write!(f, "The solution is:\n{}", fixed6(*x)),
            Solution::TwoReal(x1, x2) => write!(
                f,
                "Discriminant is strictly positive, the two solutions are:\n{}\n{}",
                fixed6(*x1),
                fixed6(*x2)
            ),
            Solution::Repeated(x) => {
                write!(f, "Discriminant is zero, the solution is:\n{}", fixed6(*x))
            }
            Solution::ComplexPair(z1, z2) => write!(
                f,
                "Discriminant is strictly negative, the two complex solutions are:\n{}\n{}",
                fixed6_complex(z1),
                fixed6_complex(z2)
            ),
            Solution::Unsolvable(_) => write!(
                f,
                "The polynomial degree is strictly greater than 2, I can't solve."
            ),
        }
    }
}

/// b^2 - 4ac
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// a*X^2 + b*X + c = 0 with a not negligible
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Solution {
    let delta = discriminant(a, b, c);
    info!("quadratic a = {}, b = {}, c = {}, discriminant = {}", a, b, c, delta);
    if delta > EPSILON {
        let sqrt_delta = delta.sqrt();
        Solution::TwoReal((-b + sqrt_delta) / (2.0 * a), (-b - sqrt_delta) / (2.0 * a))
    } else if delta.abs() <= EPSILON {
        Solution::Repeated(-b / (2.0 * a))
    } else {
        let sqrt_delta = Complex64::new(delta, 0.0).sqrt();
        let minus_b = Complex64::new(-b, 0.0);
        Solution::ComplexPair(
            (minus_b + sqrt_delta) / (2.0 * a),
            (minus_b - sqrt_delta) / (2.0 * a),
        )
    }
}

/// a*X + b = 0
pub fn solve_linear(a: f64, b: f64) -> Solution {
    if a.abs() < EPSILON {
        warn!("degenerate linear equation, a = {}", a);
        solve_constant(b)
    } else {
        Solution::Linear(-b / a)
    }
}

/// c = 0
pub fn solve_constant(c: f64) -> Solution {
    if c.abs() < EPSILON {
        Solution::AllReals
    } else {
        Solution::NoSolution
    }
}

/// pick the algorithm by the degree of the reduced form
pub fn solve(reduced: &ReducedForm) -> Solution {
    let degree = reduced.degree();
    match degree {
        0 => solve_constant(reduced.coefficient(0)),
        1 => solve_linear(reduced.coefficient(1), reduced.coefficient(0)),
        2 => solve_quadratic(
            reduced.coefficient(2),
            reduced.coefficient(1),
            reduced.coefficient(0),
        ),
        _ => {
            warn!("polynomial degree {} is above 2, no solution attempted", degree);
            Solution::Unsolvable(degree)
        }
    }
}

//! one-variable polynomial equations up to degree 2
/// error types: parse failures, the side of the equation, api errors
pub mod errors;
/// a module turns an equation string into its reduced form
///
///# Example
/// ```
/// use computor::polynomial::parse_equation::reduce_equation;
/// let reduced = reduce_equation("4 * X^0 + 7 * X^1 - 6 * X^2 = 5 * X^0 + 4 * X^1").unwrap();
/// println!("Reduced form: {}", reduced);
/// assert_eq!(reduced.to_string(), "-1.00 * X^0 + 3.00 * X^1 - 6.00 * X^2 = 0");
/// assert_eq!(reduced.degree(), 2);
/// ```
pub mod parse_equation;
/// coefficient map power -> coefficient, degree and the canonical form
pub mod reduced_form;
/// closed form solutions for degree 0, 1 and 2
pub mod solver;
/// struct owning an equation, runs the pipeline with optional logging
pub mod equation_api;

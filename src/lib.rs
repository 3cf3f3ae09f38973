pub mod batch;
pub mod coefficients;
pub mod config;
pub mod error;
pub mod math;
pub mod solver;


pub use batch::{solve_all, Strategy};
pub use coefficients::{group, CoefficientGrouper, CoefficientTriple, Diagnostic, Grouping};
pub use config::SolverConfig;
pub use solver::{solve, EquationClass, Roots, Solution};

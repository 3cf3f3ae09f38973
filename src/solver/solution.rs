use std::fmt;

use crate::math::format_general;

/// significant digits used when a `Solution` is displayed without an explicit precision
pub const DEFAULT_PRECISION: usize = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EquationClass {
    /// `a = 0, b = 0`
    Identity,
    /// `a = 0, b != 0`
    Linear,
    /// `a != 0`
    Quadratic,
}

/// Real roots of a quadratic, ascending
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Roots {
    No([f64; 0]),
    One([f64; 1]),
    Two([f64; 2]),
}

impl Roots {
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Roots::No(x) => &x[..],
            Roots::One(x) => &x[..],
            Roots::Two(x) => &x[..],
        }
    }
}

/// # Description
/// The outcome of solving one coefficient triple
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Solution {
    /// # Description
    /// `a = 0` and `b = 0`
    /// ## Comments
    /// - reported for every `c`, including the inconsistent `c != 0` case, to stay compatible
    ///   with existing consumers of the output
    Infinite,
    /// `b*x + c = 0` with `b != 0`; a line has no extremum
    Linear { root: f64 },
    /// genuinely quadratic, `extremum` is the x-coordinate of the vertex `-b/(2a)`
    Quadratic { roots: Roots, extremum: f64 },
}

impl Solution {
    pub fn class(&self) -> EquationClass {
        match self {
            Solution::Infinite => EquationClass::Identity,
            Solution::Linear { .. } => EquationClass::Linear,
            Solution::Quadratic { .. } => EquationClass::Quadratic,
        }
    }

    pub fn roots(&self) -> &[f64] {
        match self {
            Solution::Infinite => &[],
            Solution::Linear { root } => std::slice::from_ref(root),
            Solution::Quadratic { roots, .. } => roots.as_slice(),
        }
    }

    pub fn extremum(&self) -> Option<f64> {
        match *self {
            Solution::Quadratic { extremum, .. } => Some(extremum),
            _ => None,
        }
    }
}

/// Renders one output line; `{:.N}` selects `N` significant digits
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);

        match self {
            Solution::Infinite => write!(f, "(inf)"),
            Solution::Linear { root } => write!(f, "({})", format_general(*root, precision)),
            Solution::Quadratic { roots, extremum } => {
                match roots.as_slice() {
                    [] => write!(f, "no roots")?,
                    roots => {
                        let roots = roots
                            .iter()
                            .map(|&x| format_general(x, precision))
                            .collect::<Vec<_>>();
                        write!(f, "({})", roots.join(", "))?
                    }
                }
                write!(f, " Xmin {}", format_general(*extremum, precision))
            }
        }
    }
}

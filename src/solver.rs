use std::cmp::Ordering;

use super::math::{Discriminant, ScaledQuadratic};

mod solution;
pub use solution::*;

/// # Description
/// Classifies `a*x^2 + b*x + c = 0` and computes its real roots and, for a genuine
/// quadratic, the x-coordinate of the vertex.
/// ## Comments
/// - `a` and `b` are compared against zero exactly, user input is never rounded
/// - stays accurate for any finite coefficients, down to subnormals and up to `f64::MAX`
/// - a root or extremum outside f64 range comes out as `inf`/`-inf` or `0`, never NaN
pub fn solve(a: f64, b: f64, c: f64) -> Solution {
    if a == 0.0 && b == 0.0 {
        Solution::Infinite
    } else if a == 0.0 {
        Solution::Linear {
            root: unsigned_zero(-c / b),
        }
    } else {
        solve_quadratic(a, b, c)
    }
}

/// `a` must be non-zero
fn solve_quadratic(a: f64, b: f64, c: f64) -> Solution {
    let scaled = ScaledQuadratic::new(a, b, c);
    if !scaled.is_balanced() {
        return solve_separated(a, b, c);
    }

    let [sa, sb, sc] = scaled.coefs;
    let extremum = unsigned_zero(scaled.unscale(-(0.5 * sb) / sa));
    let discriminant = Discriminant::new(sa, sb, sc);

    let roots = match discriminant.sign() {
        Ordering::Less => Roots::No([]),
        Ordering::Equal => Roots::One([extremum]),
        Ordering::Greater => {
            // q takes the sign of b so `b + sqrt(D)` never cancels; |q| >= sqrt(D)/2 > 0
            let q = -0.5 * (sb + discriminant.sqrt().copysign(sb));
            ascending(
                unsigned_zero(scaled.unscale(q / sa)),
                unsigned_zero(scaled.unscale(sc / q)),
            )
        }
    };

    Solution::Quadratic { roots, extremum }
}

/// # Description
/// `b^2` outweighs `4ac` past any common scaling, the roots are `-b/a` and `-c/b` to within
/// far less than an ulp
/// ## Comments
/// - `b` is non-zero here, and at least one root over/underflows
fn solve_separated(a: f64, b: f64, c: f64) -> Solution {
    Solution::Quadratic {
        roots: ascending(unsigned_zero(-b / a), unsigned_zero(-c / b)),
        extremum: unsigned_zero(-(0.5 * b) / a),
    }
}

fn ascending(x1: f64, x2: f64) -> Roots {
    if x1 <= x2 {
        Roots::Two([x1, x2])
    } else {
        Roots::Two([x2, x1])
    }
}

/// maps `-0.0` to `0.0`, everything else passes through
fn unsigned_zero(x: f64) -> f64 {
    x + 0.0
}

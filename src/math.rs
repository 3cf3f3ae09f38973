pub mod discriminant;
pub mod format;

pub use discriminant::*;
pub use format::*;

/// # Description
/// `a*x^2 + b*x + c` rewritten in `x = 2^exponent * y` and multiplied through by a power of
/// two, so `coefs` describes the same roots in `y` with every coefficient near 1
/// ## Comments
/// - `exponent` puts `a*y^2` and `c` on the same scale, the common factor then brings the
///   largest coefficient into `[1, 2)`
/// - every step multiplies by a power of two, so nothing is rounded unless it under/overflows
/// - a zero or non-finite coefficient takes no part in choosing the exponents
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaledQuadratic {
    pub coefs: [f64; 3],
    pub exponent: i32,
}

impl ScaledQuadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let (ea, eb, ec) = (binary_exponent(a), binary_exponent(b), binary_exponent(c));

        let exponent = match (ea, eb, ec) {
            (Some(ea), _, Some(ec)) => (ec - ea).div_euclid(2),
            (Some(ea), Some(eb), None) => eb - ea,
            _ => 0,
        };

        let common = [
            ea.map(|e| e + 2 * exponent),
            eb.map(|e| e + exponent),
            ec,
        ]
        .iter()
        .flatten()
        .copied()
        .max()
        .map_or(0, |e| -e);

        Self {
            coefs: [
                ldexp(a, 2 * exponent + common),
                ldexp(b, exponent + common),
                ldexp(c, common),
            ],
            exponent,
        }
    }

    /// # Description
    /// `false` when the scaled `a` (or a non-zero scaled `c`) fell out of the normal range
    /// ## Comments
    /// - only happens when `b^2` outweighs `|4ac|` by more than 2^2000, at least one of the
    ///   roots is then beyond f64 range
    pub fn is_balanced(&self) -> bool {
        let [a, _, c] = self.coefs;
        a.is_normal() && (c == 0.0 || c.is_normal())
    }

    /// maps a value of `y` back to `x`
    pub fn unscale(&self, y: f64) -> f64 {
        ldexp(y, self.exponent)
    }

    /// maps a value of `x` to `y`
    pub fn scale(&self, x: f64) -> f64 {
        ldexp(x, -self.exponent)
    }
}

/// `floor(log2(|x|))` read off the bit pattern, `None` for zero, infinities and NaN
pub fn binary_exponent(x: f64) -> Option<i32> {
    if x == 0.0 || !x.is_finite() {
        return None;
    }

    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased == 0 {
        //subnormal, the leading mantissa bit carries the exponent
        let mantissa = bits & ((1u64 << 52) - 1);
        Some(63 - mantissa.leading_zeros() as i32 - 1074)
    } else {
        Some(biased - 1023)
    }
}

/// `x * 2^exp` for any `exp`, applied in steps so no factor over/underflows on its own
pub fn ldexp(mut x: f64, mut exp: i32) -> f64 {
    const STEP: i32 = 1000;
    while exp > STEP {
        x *= 2f64.powi(STEP);
        exp -= STEP;
    }
    while exp < -STEP {
        x *= 2f64.powi(-STEP);
        exp += STEP;
    }
    x * 2f64.powi(exp)
}

/// evaluates `coefs[0]*x^2 + coefs[1]*x + coefs[2]` with Horner's scheme
pub fn eval_quadratic(coefs: [f64; 3], x: f64) -> f64 {
    (coefs[0] * x + coefs[1]) * x + coefs[2]
}

/// # Description
/// `|a*x^2 + b*x + c|` relative to the size of the terms that were summed
/// ## Comments
/// - 0 means `x` is an exact root, values near `f64::EPSILON` mean rounding noise only
pub fn relative_residual(coefs: [f64; 3], x: f64) -> f64 {
    let scaled = ScaledQuadratic::new(coefs[0], coefs[1], coefs[2]);
    let [a, b, c] = scaled.coefs;
    let y = scaled.scale(x);
    let scale = eval_quadratic([a.abs(), b.abs(), c.abs()], y.abs());
    if scale == 0.0 {
        0.0
    } else {
        eval_quadratic([a, b, c], y).abs() / scale
    }
}

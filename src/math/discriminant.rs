use std::cmp::Ordering;

/// discriminants closer to zero than this fraction of `b^2 + |4ac|` count as zero
pub const RELATIVE_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// # Description
/// `b^2 - 4ac` together with the magnitude of the two terms it was built from
/// ## Comments
/// - expects the coefficients of a `math::ScaledQuadratic`, the products are not guarded
///   against overflow here
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Discriminant {
    pub value: f64,
    /// `b^2 + |4ac|`, the scale the rounding noise in `value` is measured against
    pub magnitude: f64,
}

impl Discriminant {
    /// # Description
    /// Kahan's compensated discriminant: when `b^2` and `4ac` nearly cancel, the rounding
    /// error of both products is recovered with fused multiply-adds and added back
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let a4 = 4.0 * a;
        let p = b * b;
        let q = a4 * c;
        let mut value = p - q;

        if 3.0 * value.abs() < p + q.abs() {
            let dp = b.mul_add(b, -p);
            let dq = a4.mul_add(c, -q);
            value = value + (dp - dq);
        }

        Self {
            value,
            magnitude: p + q.abs(),
        }
    }

    /// # Description
    /// sign of the discriminant, with anything inside the tolerance band reported as `Equal`
    pub fn sign(&self) -> Ordering {
        if self.value.abs() <= RELATIVE_TOLERANCE * self.magnitude {
            Ordering::Equal
        } else if self.value > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    pub fn sqrt(&self) -> f64 {
        self.value.max(0.0).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ScaledQuadratic;

    fn discriminant_of(a: f64, b: f64, c: f64) -> Discriminant {
        let [a, b, c] = ScaledQuadratic::new(a, b, c).coefs;
        Discriminant::new(a, b, c)
    }

    #[test]
    fn sign_follows_root_count() {
        assert_eq!(Ordering::Greater, discriminant_of(1.0, -5.0, 6.0).sign());
        assert_eq!(Ordering::Equal, discriminant_of(2.0, -4.0, 2.0).sign());
        assert_eq!(Ordering::Less, discriminant_of(-1.0, -2.0, -3.0).sign());
        assert_eq!(Ordering::Equal, discriminant_of(5.0, 0.0, 0.0).sign());
    }

    #[test]
    fn exact_for_small_integers() {
        let d = Discriminant::new(1.0, -5.0, 6.0);
        assert_eq!(1.0, d.value);
        assert_eq!(49.0, d.magnitude);
        assert_eq!(1.0, d.sqrt());
    }

    #[test]
    fn huge_coefficients_do_not_overflow() {
        // b^2 alone is far beyond f64::MAX
        let d = discriminant_of(1e300, 3e300, 2e300);
        assert!(d.value.is_finite());
        assert_eq!(Ordering::Greater, d.sign());

        let d = discriminant_of(1e300, 2e300, 1e300);
        assert_eq!(Ordering::Equal, d.sign());

        let d = discriminant_of(1e300, 1e300, 1e300);
        assert_eq!(Ordering::Less, d.sign());
    }

    #[test]
    fn tiny_coefficients_do_not_underflow() {
        // b^2 alone underflows to zero without scaling
        let d = discriminant_of(1e-300, 3e-300, 2e-300);
        assert!(d.value > 0.0);
        assert_eq!(Ordering::Greater, d.sign());

        let d = discriminant_of(1e-310, 3e-310, 2e-310);
        assert_eq!(Ordering::Greater, d.sign());

        let d = discriminant_of(1e-300, 1e-300, 1e-300);
        assert_eq!(Ordering::Less, d.sign());
    }

    #[test]
    fn scaled_repeated_root_stays_repeated() {
        for k in 0..30 {
            let scale = 10f64.powi(k * 10 - 150);
            let d = discriminant_of(2.0 * scale, -4.0 * scale, 2.0 * scale);
            assert_eq!(Ordering::Equal, d.sign(), "scale {}", scale);
        }
    }

    #[test]
    fn compensation_recovers_cancelled_bits() {
        // roots 1 and 1 + 2^-26, true discriminant is 2^-52 which the plain products round away
        let r = 1.0 + f64::EPSILON.sqrt();
        let (a, b, c) = (1.0, -(1.0 + r), r);
        assert_eq!(0.0, b * b - 4.0 * a * c);

        let d = Discriminant::new(a, b, c);
        assert_eq!(f64::EPSILON, d.value);
    }
}

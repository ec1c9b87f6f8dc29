//! Pure power-law gamma curves.
//!
//! - 1.8: legacy Apple displays
//! - 2.2: legacy CRT approximation
//! - 563/256: Adobe RGB (1998)
//!
//! Negative inputs are mirrored, `sign(x) * |x|^g`, so the curves are odd
//! functions and invertible over the whole real line.

/// Adobe RGB (1998) gamma, 2 + 51/256.
pub const ADOBE_RGB_GAMMA: f64 = 563.0 / 256.0;

/// EOTF for arbitrary gamma: `sign(v) * |v|^gamma`
///
/// # Example
///
/// ```rust
/// use tricolor_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-3);
/// assert_eq!(gamma_eotf(-0.5, 2.2), -linear);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    v.signum() * v.abs().powf(gamma)
}

/// OETF for arbitrary gamma: `sign(l) * |l|^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use tricolor_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    l.signum() * l.abs().powf(1.0 / gamma)
}

/// Gamma 1.8 EOTF.
#[inline]
pub fn eotf_18(v: f64) -> f64 {
    gamma_eotf(v, 1.8)
}

/// Gamma 1.8 OETF.
#[inline]
pub fn oetf_18(l: f64) -> f64 {
    gamma_oetf(l, 1.8)
}

/// Gamma 2.2 EOTF.
#[inline]
pub fn eotf_22(v: f64) -> f64 {
    gamma_eotf(v, 2.2)
}

/// Gamma 2.2 OETF.
#[inline]
pub fn oetf_22(l: f64) -> f64 {
    gamma_oetf(l, 2.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma22_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = oetf_22(eotf_22(v));
            assert!((v - back).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gamma18_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert!((v - oetf_18(eotf_18(v))).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gamma_identity() {
        assert_eq!(gamma_eotf(0.5, 1.0), 0.5);
        assert_eq!(gamma_oetf(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_negative_mirrored() {
        let pos = gamma_oetf(0.5, ADOBE_RGB_GAMMA);
        let neg = gamma_oetf(-0.5, ADOBE_RGB_GAMMA);
        assert_eq!(pos, -neg, "should mirror: {} vs {}", pos, neg);
        assert_eq!(gamma_eotf(0.0, 2.2), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        for i in -100..=100 {
            let x = i as f64 / 100.0;
            let y = eotf_22(x);
            assert!(y > prev, "not monotonic at x={}: {} <= {}", x, y, prev);
            prev = y;
        }
    }
}

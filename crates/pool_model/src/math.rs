//! Checked fixed-width integer math
//!
//! Reserve magnitudes are u64; every intermediate product or quotient is
//! promoted to u128. All fallible operations return an error instead of
//! wrapping or truncating. No floating point anywhere in this crate.

use crate::ModelError;

/// Multiply two u64 values and return u128
#[inline]
pub fn mul_u64(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Add two u64 values, failing on overflow
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ModelError> {
    a.checked_add(b).ok_or(ModelError::Overflow)
}

/// Subtract b from a, failing on underflow
#[inline]
pub fn sub_u64(a: u64, b: u64) -> Result<u64, ModelError> {
    a.checked_sub(b).ok_or(ModelError::Overflow)
}

/// Divide u128 by u128, rounding down
#[inline]
pub fn div_floor_u128(numerator: u128, denominator: u128) -> Result<u128, ModelError> {
    if denominator == 0 {
        return Err(ModelError::DivisionByZero);
    }
    Ok(numerator / denominator)
}

/// Divide u128 by u128, rounding up
#[inline]
pub fn div_ceil_u128(numerator: u128, denominator: u128) -> Result<u128, ModelError> {
    if denominator == 0 {
        return Err(ModelError::DivisionByZero);
    }
    let q = numerator / denominator;
    let r = numerator % denominator;
    Ok(if r == 0 { q } else { q + 1 })
}

/// Narrow u128 to u64, failing when the value does not fit
#[inline]
pub fn narrow_u64(value: u128) -> Result<u64, ModelError> {
    if value > u64::MAX as u128 {
        return Err(ModelError::Overflow);
    }
    Ok(value as u64)
}

/// Floor integer square root of a u128, Babylonian method
pub fn isqrt_u128(n: u128) -> u128 {
    if n <= 1 {
        return n;
    }
    let mut x0 = n / 2;
    let mut x1 = (x0 + n / x0) / 2;
    while x1 < x0 {
        x0 = x1;
        x1 = (x0 + n / x0) / 2;
    }
    x0
}


// ═══════════════════════════════════════════════════════════════
// KANI FORMAL VERIFICATION PROOFS
// ═══════════════════════════════════════════════════════════════

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// M1: Division rounding modes behave correctly
    ///
    /// Property: div_ceil >= div_floor, and the difference is at most 1
    #[kani::proof]
    #[kani::unwind(3)]
    fn m1_rounding_modes() {
        let numerator: u128 = kani::any();
        let denominator: u128 = kani::any();

        kani::assume(numerator < u128::MAX / 2);
        kani::assume(denominator > 0);

        let ceil = div_ceil_u128(numerator, denominator).unwrap();
        let floor = div_floor_u128(numerator, denominator).unwrap();

        assert!(ceil >= floor, "M1: ceiling must be >= floor");
        assert!(ceil - floor <= 1, "M1: ceiling and floor differ by at most 1");

        if numerator % denominator == 0 {
            assert!(ceil == floor, "M1: exact division has ceil == floor");
        }
    }

    /// M2: Integer square root is the floor root
    ///
    /// Property: r = isqrt(n) satisfies r*r <= n < (r+1)*(r+1)
    #[kani::proof]
    #[kani::unwind(70)]
    fn m2_isqrt_floor() {
        let n: u128 = kani::any();
        kani::assume(n < 1 << 32); // bounded for solver performance

        let r = isqrt_u128(n);

        assert!(r * r <= n, "M2: root squared must not exceed input");
        assert!((r + 1) * (r + 1) > n, "M2: next root squared must exceed input");
    }

    /// M3: Wide multiplication is exact
    #[kani::proof]
    #[kani::unwind(3)]
    fn m3_wide_mul_exact() {
        let a: u64 = kani::any();
        let b: u64 = kani::any();

        let result = mul_u64(a, b);

        assert!(result == (a as u128) * (b as u128), "M3: wide multiply correctness");
    }
}

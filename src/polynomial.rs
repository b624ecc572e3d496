// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! This module contains an implementation of a polynomial in coefficient
//! form over the BLS12-381 scalar field, where each coefficient is
//! represented using a position in the underlying vector.
//!
//! The coefficient form is the slow path of the library: digests are
//! produced from root-form evaluation, while intersection proofs need
//! coefficient-level division and the extended Euclidean algorithm, which
//! have no root-form analogue.

use crate::error::Error;
use core::ops::{Add, AddAssign, Deref, DerefMut, Mul, Neg, Sub, SubAssign};
use dusk_bls12_381::BlsScalar;

/// A dense polynomial over the scalar field.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Polynomial {
    /// Coefficients in ascending order of degree: `coeffs[i]` multiplies
    /// `x^i`. Trailing zeros are stripped by every constructor.
    pub(crate) coeffs: Vec<BlsScalar>,
}

impl Deref for Polynomial {
    type Target = [BlsScalar];

    fn deref(&self) -> &[BlsScalar] {
        &self.coeffs
    }
}

impl DerefMut for Polynomial {
    fn deref_mut(&mut self) -> &mut [BlsScalar] {
        &mut self.coeffs
    }
}

impl Polynomial {
    /// Returns the zero polynomial, stored without any terms.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the constant polynomial `1`.
    pub fn one() -> Self {
        Self {
            coeffs: vec![BlsScalar::one()],
        }
    }

    /// Checks if the given polynomial is zero. The zero polynomial is
    /// normally stored with an empty coefficient vector, but a vector of
    /// explicit zeros counts as well.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|coeff| coeff == &BlsScalar::zero())
    }

    /// Builds a polynomial from a borrowed slice of coefficients.
    pub fn from_coefficients_slice(coeffs: &[BlsScalar]) -> Self {
        Self::from_coefficients_vec(coeffs.to_vec())
    }

    /// Builds a polynomial from a coefficient vector, normalizing the
    /// representation so that a stored leading coefficient is nonzero.
    pub fn from_coefficients_vec(coeffs: Vec<BlsScalar>) -> Self {
        let mut polynomial = Self { coeffs };
        polynomial.strip_trailing_zeros();
        debug_assert!(polynomial
            .coeffs
            .last()
            .map_or(true, |coeff| coeff != &BlsScalar::zero()));

        polynomial
    }

    /// Constructs the monic polynomial `(x - r_1)(x - r_2)...(x - r_n)`
    /// from its roots. An empty list of roots yields the constant
    /// polynomial `1`.
    pub fn from_roots(roots: &[BlsScalar]) -> Self {
        let mut coeffs = vec![BlsScalar::one()];
        for root in roots {
            let mut next = vec![BlsScalar::zero(); coeffs.len() + 1];
            for (i, coeff) in coeffs.iter().enumerate() {
                next[i] -= root * coeff;
                next[i + 1] += coeff;
            }
            coeffs = next;
        }
        // Monic by construction, no truncation needed.
        Self { coeffs }
    }

    /// Returns the degree of the [`Polynomial`]: the position of the
    /// last nonzero coefficient. The zero polynomial has degree zero by
    /// convention.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|coeff| coeff != &BlsScalar::zero())
            .unwrap_or(0)
    }

    /// Cuts the coefficient vector down to its last nonzero entry, the
    /// canonical representation every constructor maintains.
    fn strip_trailing_zeros(&mut self) {
        let terms = self
            .coeffs
            .iter()
            .rposition(|coeff| coeff != &BlsScalar::zero())
            .map_or(0, |position| position + 1);
        self.coeffs.truncate(terms);
    }

    /// Horner evaluation of the polynomial at `point`.
    pub fn evaluate(&self, point: &BlsScalar) -> BlsScalar {
        let mut value = BlsScalar::zero();
        for coeff in self.coeffs.iter().rev() {
            value = value * point + coeff;
        }
        value
    }

    #[inline]
    fn leading_coefficient(&self) -> Option<&BlsScalar> {
        self.coeffs.last()
    }

    /// Long division of `self` by `divisor`, returning the quotient and
    /// the remainder.
    ///
    /// Fails only when `divisor` is the zero polynomial. When the
    /// dividend has strictly smaller degree than the divisor the quotient
    /// is zero and the remainder is the dividend.
    pub fn divide(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisorIsZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let divisor_degree = divisor.degree();
        // The divisor is nonzero, so its leading coefficient is too.
        let lead_inv = divisor
            .leading_coefficient()
            .expect("divisor is not zero")
            .invert()
            .unwrap();

        let mut remainder = self.coeffs.clone();
        let mut quotient =
            vec![BlsScalar::zero(); self.degree() - divisor_degree + 1];

        for k in (0..quotient.len()).rev() {
            let factor = remainder[k + divisor_degree] * lead_inv;
            quotient[k] = factor;
            if factor != BlsScalar::zero() {
                for (i, coeff) in divisor.coeffs.iter().enumerate() {
                    remainder[k + i] -= factor * coeff;
                }
            }
        }

        Ok((
            Polynomial::from_coefficients_vec(quotient),
            Polynomial::from_coefficients_vec(remainder),
        ))
    }

    /// Extended Euclidean algorithm over the field of coefficients.
    ///
    /// Returns `(gcd, u, v)` such that `u * a + v * b == gcd`. The gcd is
    /// not normalized; callers that need a unit gcd must scale `u` and
    /// `v` by the inverse of its constant term.
    pub fn xgcd(
        a: &Polynomial,
        b: &Polynomial,
    ) -> Result<(Polynomial, Polynomial, Polynomial), Error> {
        let mut r0 = a.clone();
        let mut r1 = b.clone();
        let mut s0 = Polynomial::one();
        let mut s1 = Polynomial::zero();
        let mut t0 = Polynomial::zero();
        let mut t1 = Polynomial::one();

        while !r1.is_zero() {
            let (q, r) = r0.divide(&r1)?;
            r0 = core::mem::replace(&mut r1, r);
            let s_next = &s0 - &(&q * &s1);
            s0 = core::mem::replace(&mut s1, s_next);
            let t_next = &t0 - &(&q * &t1);
            t0 = core::mem::replace(&mut t1, t_next);
        }

        Ok((r0, s0, t0))
    }

    /// Divides a [`Polynomial`] by `x - root` using synthetic division,
    /// discarding the remainder. Witness computation only ever divides
    /// out perfect factors, where the remainder is zero anyway.
    pub fn ruffini(&self, root: BlsScalar) -> Polynomial {
        // Constants and the zero polynomial leave nothing to divide.
        if self.coeffs.len() < 2 {
            return Polynomial::zero();
        }

        // Synthetic division walks from the leading coefficient down,
        // carrying `root` times the previous quotient term into the
        // next one. The carry left after index 1 is the remainder.
        let mut quotient = vec![BlsScalar::zero(); self.coeffs.len() - 1];
        let mut carry = BlsScalar::zero();
        for (i, coeff) in self.coeffs.iter().enumerate().skip(1).rev() {
            carry = coeff + root * carry;
            quotient[i - 1] = carry;
        }

        Polynomial::from_coefficients_vec(quotient)
    }
}

impl<'a, 'b> Add<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        let mut sum = self.clone();
        sum += other;
        sum
    }
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, other: &'a Polynomial) {
        if self.coeffs.len() < other.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), BlsScalar::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a += b
        }
        self.strip_trailing_zeros();
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        // Negation cannot introduce or clear zeros, so the normalized
        // representation survives the map untouched.
        let negated = self.coeffs.iter().map(|coeff| -coeff).collect();
        Polynomial { coeffs: negated }
    }
}

impl<'a, 'b> Sub<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, other: &'a Polynomial) -> Polynomial {
        let mut difference = self.clone();
        difference -= other;
        difference
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, other: &'a Polynomial) {
        if self.coeffs.len() < other.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), BlsScalar::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a -= b
        }
        self.strip_trailing_zeros();
    }
}

/// Schoolbook multiplication. Accumulator polynomials stay small (degree
/// bounded by the setup), so the quadratic product is the simplest thing
/// that works.
impl<'a, 'b> Mul<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs =
            vec![BlsScalar::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::from_coefficients_vec(coeffs)
    }
}

impl<'a, 'b> Mul<&'a BlsScalar> for &'b Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: &'a BlsScalar) -> Polynomial {
        // A zero scalar zeroes every term; rebuilding through the
        // constructor strips them back to the canonical zero polynomial.
        let scaled = self.coeffs.iter().map(|coeff| coeff * scalar).collect();
        Polynomial::from_coefficients_vec(scaled)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The trusted setup is the main component of the accumulator: it fixes
//! the secret evaluation point `s`, derives the generators of both
//! source groups and publishes the power vectors `g1 * s^i` and
//! `g2 * s^i`, which is all a verifier ever touches. The secret itself
//! stays inside the setup and is only read by provers, which share trust
//! with the setup holder.

use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::transcript::TranscriptProtocol;
use crate::util;
use dusk_bls12_381::{
    BlsScalar, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective,
};
use merlin::Transcript;
use rand_core::RngCore;
use rayon::prelude::*;

/// Domain tag under which the group generators are derived.
const GENERATOR_DOMAIN: &[u8] = b"expressive-accumulator generators";

/// Trusted setup for the accumulator, available to both the prover and
/// the verifier.
///
/// Holds the secret scalars `s` and `r`, the deterministically derived
/// generators of `G1` and `G2` and the public powers `g * s^i` for
/// `i = 0..=max_degree + 1` in both groups. Constructed once, immutable
/// afterwards, and passed by reference everywhere.
pub struct TrustedSetup {
    secret_s: BlsScalar,
    /// Second setup secret. Reserved for a hiding extension of the
    /// digest; no current proof construction or verification consumes
    /// it.
    #[allow(dead_code)]
    secret_r: BlsScalar,
    max_degree: usize,
    g1: G1Affine,
    g2: G2Affine,
    g2_prepared: G2Prepared,
    g1_powers: Vec<G1Affine>,
    g2_powers: Vec<G2Affine>,
}

impl TrustedSetup {
    /// Builds a setup from externally supplied secrets.
    ///
    /// `max_degree` bounds the degree of every committed polynomial and
    /// therefore the maximum set size of any accumulator using this
    /// setup. The published power vectors reach one past `max_degree` so
    /// that update verification can always form `g * s` terms.
    ///
    /// # Errors
    /// When `max_degree` is zero.
    pub fn from_secrets(
        s: BlsScalar,
        r: BlsScalar,
        max_degree: usize,
    ) -> Result<TrustedSetup, Error> {
        // Cannot commit to constants only
        if max_degree < 1 {
            return Err(Error::DegreeIsZero);
        }

        let (g1, g2) = derive_generators();

        let mut setup = TrustedSetup {
            secret_s: s,
            secret_r: r,
            max_degree,
            g1,
            g2,
            g2_prepared: G2Prepared::from(g2),
            g1_powers: Vec::new(),
            g2_powers: Vec::new(),
        };
        setup.generate_powers();
        Ok(setup)
    }

    /// Builds a setup with secrets sampled from `rng`.
    ///
    /// This method will in most cases be used for testing and
    /// exploration; a deployment derives its secrets in a context it
    /// controls and uses [`TrustedSetup::from_secrets`].
    pub fn setup<R: RngCore>(
        max_degree: usize,
        mut rng: &mut R,
    ) -> Result<TrustedSetup, Error> {
        let s = util::random_scalar(&mut rng);
        let r = util::random_scalar(&mut rng);
        Self::from_secrets(s, r, max_degree)
    }

    /// Precomputes `g1 * s^i` and `g2 * s^i` for `i = 0..=max_degree+1`.
    fn generate_powers(&mut self) {
        let powers_of_s = util::powers_of(&self.secret_s, self.max_degree + 1);
        let (g1, g2) = (self.g1, self.g2);

        let g1_projective: Vec<G1Projective> =
            powers_of_s.par_iter().map(|power| g1 * power).collect();
        let g2_projective: Vec<G2Projective> =
            powers_of_s.par_iter().map(|power| g2 * power).collect();

        let mut g1_powers = vec![G1Affine::identity(); g1_projective.len()];
        G1Projective::batch_normalize(&g1_projective, &mut g1_powers);

        let mut g2_powers = vec![G2Affine::identity(); g2_projective.len()];
        G2Projective::batch_normalize(&g2_projective, &mut g2_powers);

        self.g1_powers = g1_powers;
        self.g2_powers = g2_powers;
    }

    /// Maximum polynomial degree supported by the published powers, and
    /// therefore the maximum set size of an accumulator.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// The `G1` generator.
    pub fn g1_generator(&self) -> G1Affine {
        self.g1
    }

    /// The `G2` generator.
    pub fn g2_generator(&self) -> G2Affine {
        self.g2
    }

    /// The published powers `g1 * s^i`, `i = 0..=max_degree+1`.
    pub fn g1_powers(&self) -> &[G1Affine] {
        &self.g1_powers
    }

    /// The published powers `g2 * s^i`, `i = 0..=max_degree+1`.
    pub fn g2_powers(&self) -> &[G2Affine] {
        &self.g2_powers
    }

    /// Commits to `polynomial` in `G1` over the published powers, without
    /// touching the secret.
    ///
    /// # Errors
    /// When the polynomial degree exceeds the published powers.
    pub fn commit_g1(&self, polynomial: &Polynomial) -> Result<G1Affine, Error> {
        self.check_commit_degree_is_within_bounds(polynomial)?;
        let commitment: G1Projective = polynomial
            .iter()
            .zip(self.g1_powers.iter())
            .map(|(coeff, power)| power * coeff)
            .sum();
        Ok(commitment.into())
    }

    /// Commits to `polynomial` in `G2` over the published powers, without
    /// touching the secret.
    ///
    /// # Errors
    /// When the polynomial degree exceeds the published powers.
    pub fn commit_g2(&self, polynomial: &Polynomial) -> Result<G2Affine, Error> {
        self.check_commit_degree_is_within_bounds(polynomial)?;
        let commitment: G2Projective = polynomial
            .iter()
            .zip(self.g2_powers.iter())
            .map(|(coeff, power)| power * coeff)
            .sum();
        Ok(commitment.into())
    }

    fn check_commit_degree_is_within_bounds(
        &self,
        polynomial: &Polynomial,
    ) -> Result<(), Error> {
        if polynomial.degree() > self.max_degree + 1 {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        Ok(())
    }

    /// The secret evaluation point, readable by provers only.
    pub(crate) fn secret_s(&self) -> &BlsScalar {
        &self.secret_s
    }

    /// The `G2` generator prepared for pairing.
    pub(crate) fn g2_prepared(&self) -> &G2Prepared {
        &self.g2_prepared
    }

    /// `g1 * (s - element)`, assembled from the published powers only.
    pub(crate) fn g1_shifted(&self, element: u64) -> G1Affine {
        (self.g1_powers[1] - self.g1 * BlsScalar::from(element)).into()
    }

    /// `g2 * (s - element)`, assembled from the published powers only.
    pub(crate) fn g2_shifted(&self, element: u64) -> G2Affine {
        (self.g2_powers[1] - self.g2 * BlsScalar::from(element)).into()
    }
}

/// The secrets never leave the setup, so the debug representation only
/// names the public dimensions.
impl std::fmt::Debug for TrustedSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustedSetup")
            .field("max_degree", &self.max_degree)
            .field("g1", &self.g1)
            .field("g2", &self.g2)
            .finish_non_exhaustive()
    }
}

/// Derives the two group generators deterministically from the constant
/// domain tag. The underlying curve library exposes no hash-to-curve, so
/// the generators are tagged-scalar multiples of the canonical ones;
/// every party recomputes the same points.
fn derive_generators() -> (G1Affine, G2Affine) {
    let mut transcript = Transcript::new(GENERATOR_DOMAIN);
    let k1 = transcript.challenge_scalar(b"generator g1");
    let k2 = transcript.challenge_scalar(b"generator g2");
    (
        (G1Affine::generator() * k1).into(),
        (G2Affine::generator() * k2).into(),
    )
}

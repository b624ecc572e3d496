// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Exact set-intersection proofs.
//!
//! For sets `S_A`, `S_B` with intersection `I`, the characteristic
//! polynomials factor as `P_A = I * Q_A` and `P_B = I * Q_B`, where the
//! quotients collect the roots outside the intersection. Two pairing
//! checks force the revealed digest of `I` to divide both accumulated
//! digests; a third check, built from Bézout coefficients
//! `a * Q_A + b * Q_B = 1`, forces the quotients to be coprime. Any
//! common root left out of `I` would land in both quotients and make the
//! Bézout identity unsatisfiable, so `I` is exactly the intersection.

use crate::accumulator::{Accumulator, AccumulatorDigest, AccumulatorGroup};
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::setup::TrustedSetup;
use dusk_bls12_381::{multi_miller_loop, G1Affine, G2Affine, G2Prepared, Gt};
use dusk_bytes::{DeserializableSlice, Serializable};

/// Proof that a revealed digest commits to *exactly* the intersection of
/// two accumulated sets. The intersection is revealed as a digest only,
/// never in plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionProof {
    /// Commitment `g1 * I(s)` to the intersection polynomial.
    pub intersection_digest: G1Affine,
    /// Commitment `g2 * Q_A(s)` to the quotient of set A.
    pub witness_qa: G2Affine,
    /// Commitment `g2 * Q_B(s)` to the quotient of set B.
    pub witness_qb: G2Affine,
    /// Commitment `g1 * a(s)` to the first Bézout coefficient.
    pub witness_a: G1Affine,
    /// Commitment `g1 * b(s)` to the second Bézout coefficient.
    pub witness_b: G1Affine,
    /// Cleared when the prover could not construct the proof.
    pub is_valid: bool,
}

impl IntersectionProof {
    /// The sentinel proof of a prover that could not proceed.
    pub(crate) fn invalid() -> Self {
        Self {
            intersection_digest: G1Affine::identity(),
            witness_qa: G2Affine::identity(),
            witness_qb: G2Affine::identity(),
            witness_a: G1Affine::identity(),
            witness_b: G1Affine::identity(),
            is_valid: false,
        }
    }

    /// Builds the intersection proof for two accumulators.
    ///
    /// Both accumulators must commit in `G1` and be bound to `setup`;
    /// otherwise the sentinel invalid proof is returned.
    pub(crate) fn generate(
        a: &Accumulator<'_>,
        b: &Accumulator<'_>,
        setup: &TrustedSetup,
    ) -> IntersectionProof {
        if a.group() != AccumulatorGroup::G1
            || b.group() != AccumulatorGroup::G1
        {
            return Self::invalid();
        }
        // Digests produced under a foreign setup cannot be related to
        // these powers.
        if !std::ptr::eq(a.setup(), setup) || !std::ptr::eq(b.setup(), setup)
        {
            return Self::invalid();
        }

        let s = setup.secret_s();

        let intersection = a.characteristic().intersection(b.characteristic());
        let diff_a = a.characteristic().difference(&intersection);
        let diff_b = b.characteristic().difference(&intersection);

        let intersection_digest: G1Affine =
            (setup.g1_generator() * intersection.evaluate(s)).into();

        let quotient_a = diff_a.to_polynomial();
        let quotient_b = diff_b.to_polynomial();
        let witness_qa: G2Affine =
            (setup.g2_generator() * quotient_a.evaluate(s)).into();
        let witness_qb: G2Affine =
            (setup.g2_generator() * quotient_b.evaluate(s)).into();

        let (bezout_a, bezout_b) = if diff_a.is_empty() && diff_b.is_empty() {
            // Equal sets: both quotients are the unit polynomial and
            // 0 * Q_A + 1 * Q_B = 1 already.
            (Polynomial::zero(), Polynomial::one())
        } else {
            match bezout_pair(&quotient_a, &quotient_b) {
                Ok(pair) => pair,
                // The difference sets are disjoint by construction, so a
                // non-unit gcd here means the prover state is corrupted.
                Err(_) => return Self::invalid(),
            }
        };

        IntersectionProof {
            intersection_digest,
            witness_qa,
            witness_qb,
            witness_a: (setup.g1_generator() * bezout_a.evaluate(s)).into(),
            witness_b: (setup.g1_generator() * bezout_b.evaluate(s)).into(),
            is_valid: true,
        }
    }

    /// Verifies the proof against the digests of both accumulators.
    ///
    /// All three pairing checks must hold:
    /// 1. `e(A, g2) == e(I, W_QA)` — `I` divides `P_A`,
    /// 2. `e(B, g2) == e(I, W_QB)` — `I` divides `P_B`,
    /// 3. `e(w_a, W_QA) * e(w_b, W_QB) == e(g1, g2)` — the quotients are
    ///    coprime, which rules out any common factor left outside `I`.
    ///
    /// Only `G1` digests are accepted.
    pub fn verify(
        &self,
        digest_a: &AccumulatorDigest,
        digest_b: &AccumulatorDigest,
        setup: &TrustedSetup,
    ) -> bool {
        if !self.is_valid {
            return false;
        }
        let (a, b) = match (digest_a, digest_b) {
            (AccumulatorDigest::G1(a), AccumulatorDigest::G1(b)) => (*a, *b),
            _ => return false,
        };

        let witness_qa = G2Prepared::from(self.witness_qa);
        let witness_qb = G2Prepared::from(self.witness_qb);

        // 1. e(A, g2) == e(I, W_QA)
        let lhs = -a;
        let subset_a = multi_miller_loop(&[
            (&lhs, setup.g2_prepared()),
            (&self.intersection_digest, &witness_qa),
        ])
        .final_exponentiation()
            == Gt::identity();
        if !subset_a {
            return false;
        }

        // 2. e(B, g2) == e(I, W_QB)
        let lhs = -b;
        let subset_b = multi_miller_loop(&[
            (&lhs, setup.g2_prepared()),
            (&self.intersection_digest, &witness_qb),
        ])
        .final_exponentiation()
            == Gt::identity();
        if !subset_b {
            return false;
        }

        // 3. e(w_a, W_QA) * e(w_b, W_QB) == e(g1, g2). The identity
        // a(s) * Q_A(s) + b(s) * Q_B(s) = 1 can only hold at the random
        // point s when it is a polynomial identity, i.e. when the
        // quotients are coprime.
        let negated_generator = -setup.g1_generator();
        multi_miller_loop(&[
            (&self.witness_a, &witness_qa),
            (&self.witness_b, &witness_qb),
            (&negated_generator, setup.g2_prepared()),
        ])
        .final_exponentiation()
            == Gt::identity()
    }
}

impl Serializable<{ 3 * G1Affine::SIZE + 2 * G2Affine::SIZE + 1 }>
    for IntersectionProof
{
    type Error = dusk_bytes::Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        let mut offset = 0;

        buf[offset..offset + G1Affine::SIZE]
            .copy_from_slice(&self.intersection_digest.to_bytes());
        offset += G1Affine::SIZE;
        buf[offset..offset + G2Affine::SIZE]
            .copy_from_slice(&self.witness_qa.to_bytes());
        offset += G2Affine::SIZE;
        buf[offset..offset + G2Affine::SIZE]
            .copy_from_slice(&self.witness_qb.to_bytes());
        offset += G2Affine::SIZE;
        buf[offset..offset + G1Affine::SIZE]
            .copy_from_slice(&self.witness_a.to_bytes());
        offset += G1Affine::SIZE;
        buf[offset..offset + G1Affine::SIZE]
            .copy_from_slice(&self.witness_b.to_bytes());
        offset += G1Affine::SIZE;
        buf[offset] = self.is_valid as u8;

        buf
    }

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let mut offset = 0;

        let intersection_digest =
            G1Affine::from_slice(&buf[offset..offset + G1Affine::SIZE])?;
        offset += G1Affine::SIZE;
        let witness_qa =
            G2Affine::from_slice(&buf[offset..offset + G2Affine::SIZE])?;
        offset += G2Affine::SIZE;
        let witness_qb =
            G2Affine::from_slice(&buf[offset..offset + G2Affine::SIZE])?;
        offset += G2Affine::SIZE;
        let witness_a =
            G1Affine::from_slice(&buf[offset..offset + G1Affine::SIZE])?;
        offset += G1Affine::SIZE;
        let witness_b =
            G1Affine::from_slice(&buf[offset..offset + G1Affine::SIZE])?;
        offset += G1Affine::SIZE;
        let is_valid = match buf[offset] {
            0 => false,
            1 => true,
            _ => return Err(dusk_bytes::Error::InvalidData),
        };

        Ok(Self {
            intersection_digest,
            witness_qa,
            witness_qb,
            witness_a,
            witness_b,
            is_valid,
        })
    }
}

/// Normalizes the extended Euclidean output of two coprime polynomials
/// into coefficients satisfying `a * Q_A + b * Q_B = 1` exactly.
fn bezout_pair(
    quotient_a: &Polynomial,
    quotient_b: &Polynomial,
) -> Result<(Polynomial, Polynomial), Error> {
    let (gcd, u, v) = Polynomial::xgcd(quotient_a, quotient_b)?;
    if gcd.is_zero() || gcd.degree() != 0 {
        return Err(Error::NotCoprime);
    }
    // The gcd is a nonzero constant; scale both coefficients by its
    // inverse so the identity equals one.
    let inverse = gcd[0].invert().unwrap();
    Ok((&u * &inverse, &v * &inverse))
}

#[cfg(test)]
mod test {
    use super::*;
    use dusk_bls12_381::BlsScalar;

    fn roots(elements: &[u64]) -> Vec<BlsScalar> {
        elements.iter().map(|x| BlsScalar::from(*x)).collect()
    }

    #[test]
    fn bezout_pair_satisfies_the_identity() {
        let quotient_a = Polynomial::from_roots(&roots(&[1, 7]));
        let quotient_b = Polynomial::from_roots(&roots(&[2, 8]));

        let (a, b) = bezout_pair(&quotient_a, &quotient_b).unwrap();
        let identity =
            &(&a * &quotient_a) + &(&b * &quotient_b);
        assert_eq!(identity, Polynomial::one());
    }

    #[test]
    fn bezout_pair_rejects_common_roots() {
        let quotient_a = Polynomial::from_roots(&roots(&[1, 9]));
        let quotient_b = Polynomial::from_roots(&roots(&[2, 9]));

        assert_eq!(
            bezout_pair(&quotient_a, &quotient_b),
            Err(Error::NotCoprime)
        );
    }

    #[test]
    fn intersection_proof_bytes_round_trip() {
        let proof = IntersectionProof {
            intersection_digest: G1Affine::generator(),
            witness_qa: G2Affine::generator(),
            witness_qb: G2Affine::generator(),
            witness_a: G1Affine::generator(),
            witness_b: G1Affine::identity(),
            is_valid: true,
        };
        let decoded =
            IntersectionProof::from_bytes(&proof.to_bytes()).unwrap();
        assert_eq!(proof, decoded);
    }
}

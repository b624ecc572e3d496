// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::accumulator::AccumulatorDigest;
use crate::setup::TrustedSetup;
use dusk_bls12_381::{multi_miller_loop, G2Affine, G2Prepared, Gt};
use dusk_bytes::{DeserializableSlice, Serializable};

/// Proof that an element is a member of an accumulated set.
///
/// The witness is the `G2` commitment to the quotient polynomial
/// `W(z) = P(z) / (z - x)`: since `x` is a root of the characteristic
/// polynomial, `P(z) = (z - x) * W(z)` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipProof {
    /// Commitment `g2 * W(s)` to the witness polynomial.
    pub witness: G2Affine,
    /// Whether the prover claims membership at all. A proof for an
    /// absent element carries `false` and never verifies.
    pub is_member: bool,
}

impl MembershipProof {
    /// The sentinel proof for an element outside the set.
    pub(crate) fn absent() -> Self {
        Self {
            witness: G2Affine::identity(),
            is_member: false,
        }
    }

    /// Verifies the proof against `digest`.
    ///
    /// Checks `e(digest, g2) == e(g1 * (s - x), witness)`: the digest
    /// commits to `P(s) = (s - x) * W(s)`, so bilinearity makes both
    /// sides equal exactly when the witness divides out the root `x`.
    /// The term `g1 * (s - x)` is assembled from the published powers.
    /// For a `G2` digest the same relation is checked through
    /// `e(g1, digest)`.
    pub fn verify(
        &self,
        digest: &AccumulatorDigest,
        element: u64,
        setup: &TrustedSetup,
    ) -> bool {
        if !self.is_member {
            return false;
        }

        let witness = G2Prepared::from(self.witness);
        let shifted = setup.g1_shifted(element);

        // Negate the digest side so that both pairings fold into one
        // Miller loop and the product is checked against the identity.
        let result = match digest {
            AccumulatorDigest::G1(point) => {
                let lhs = -point;
                multi_miller_loop(&[
                    (&lhs, setup.g2_prepared()),
                    (&shifted, &witness),
                ])
            }
            AccumulatorDigest::G2(point) => {
                let digest = G2Prepared::from(*point);
                let lhs = -setup.g1_generator();
                multi_miller_loop(&[(&lhs, &digest), (&shifted, &witness)])
            }
        };

        result.final_exponentiation() == Gt::identity()
    }
}

impl Serializable<{ G2Affine::SIZE + 1 }> for MembershipProof {
    type Error = dusk_bytes::Error;

    fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[..G2Affine::SIZE].copy_from_slice(&self.witness.to_bytes());
        buf[G2Affine::SIZE] = self.is_member as u8;
        buf
    }

    fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, Self::Error> {
        let witness = G2Affine::from_slice(&buf[..G2Affine::SIZE])?;
        let is_member = match buf[G2Affine::SIZE] {
            0 => false,
            1 => true,
            _ => return Err(dusk_bytes::Error::InvalidData),
        };
        Ok(Self { witness, is_member })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn membership_proof_bytes_round_trip() {
        let proof = MembershipProof {
            witness: G2Affine::generator(),
            is_member: true,
        };
        let decoded =
            MembershipProof::from_bytes(&proof.to_bytes()).unwrap();
        assert_eq!(proof, decoded);

        let absent = MembershipProof::absent();
        let decoded = MembershipProof::from_bytes(&absent.to_bytes()).unwrap();
        assert_eq!(absent, decoded);
    }

    #[test]
    fn membership_proof_rejects_bad_flag() {
        let mut bytes = MembershipProof::absent().to_bytes();
        bytes[G2Affine::SIZE] = 7;
        assert!(MembershipProof::from_bytes(&bytes).is_err());
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The accumulator owns a set of integers and maintains the invariant
//! `digest == g * P(s)` across every public operation, where `P` is the
//! characteristic polynomial of the set and `g` generates the chosen
//! group. Mutations return update proofs, membership is proven with
//! quotient witnesses, and two accumulators over `G1` can jointly prove
//! their exact intersection.

use crate::characteristic::CharacteristicPolynomial;
use crate::error::Error;
use crate::proof::{
    IntersectionProof, MembershipProof, UpdateOperation, UpdateProof,
};
use crate::setup::TrustedSetup;
use dusk_bls12_381::{G1Affine, G2Affine};
use dusk_bytes::{DeserializableSlice, Serializable};
use std::collections::BTreeSet;

/// Which source group holds the digest of an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorGroup {
    /// Digest lives in `G1` (48-byte commitments, required for
    /// intersection proofs).
    G1,
    /// Digest lives in `G2` (96-byte commitments).
    G2,
}

/// Encoding tag for a `G1` digest.
const DIGEST_TAG_G1: u8 = 1;
/// Encoding tag for a `G2` digest.
const DIGEST_TAG_G2: u8 = 2;

/// A succinct commitment to a set: the single group point `g * P(s)`.
/// The digest of the empty set is the generator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorDigest {
    /// A digest in `G1`.
    G1(G1Affine),
    /// A digest in `G2`.
    G2(G2Affine),
}

impl AccumulatorDigest {
    /// Whether the digest is the identity point of its group. A digest
    /// never reaches the identity through honest accumulation; the check
    /// exists to reject degenerate inputs supplied by a peer.
    pub fn is_identity(&self) -> bool {
        match self {
            Self::G1(point) => point.is_identity().into(),
            Self::G2(point) => point.is_identity().into(),
        }
    }

    /// Canonical encoding: one group tag byte followed by the compressed
    /// point.
    pub fn to_var_bytes(&self) -> Vec<u8> {
        match self {
            Self::G1(point) => {
                let mut bytes = vec![DIGEST_TAG_G1];
                bytes.extend_from_slice(&point.to_bytes());
                bytes
            }
            Self::G2(point) => {
                let mut bytes = vec![DIGEST_TAG_G2];
                bytes.extend_from_slice(&point.to_bytes());
                bytes
            }
        }
    }

    /// Decodes a digest from its canonical encoding. Trailing bytes are
    /// ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<AccumulatorDigest, Error> {
        read_digest(bytes).map(|(digest, _)| digest)
    }
}

/// Reads one digest from the front of `bytes` and returns the remainder
/// of the slice.
pub(crate) fn read_digest(
    bytes: &[u8],
) -> Result<(AccumulatorDigest, &[u8]), Error> {
    let (tag, rest) = match bytes.split_first() {
        Some(split) => split,
        None => return Err(Error::NotEnoughBytes),
    };
    match *tag {
        DIGEST_TAG_G1 => {
            if rest.len() < G1Affine::SIZE {
                return Err(Error::NotEnoughBytes);
            }
            let point = G1Affine::from_slice(&rest[..G1Affine::SIZE])?;
            Ok((AccumulatorDigest::G1(point), &rest[G1Affine::SIZE..]))
        }
        DIGEST_TAG_G2 => {
            if rest.len() < G2Affine::SIZE {
                return Err(Error::NotEnoughBytes);
            }
            let point = G2Affine::from_slice(&rest[..G2Affine::SIZE])?;
            Ok((AccumulatorDigest::G2(point), &rest[G2Affine::SIZE..]))
        }
        _ => Err(Error::InvalidDigestEncoding),
    }
}

/// A dynamic set accumulator bound to a borrowed trusted setup.
///
/// Every mutation re-evaluates the characteristic polynomial at the
/// setup secret and refreshes the digest, so `digest == g * P(s)` holds
/// after every public operation. The digest after operation `n` is a
/// deterministic function of the initial digest and the issued
/// operations `1..n`.
#[derive(Debug)]
pub struct Accumulator<'a> {
    setup: &'a TrustedSetup,
    polynomial: CharacteristicPolynomial,
    group: AccumulatorGroup,
    digest: AccumulatorDigest,
}

impl<'a> Accumulator<'a> {
    /// Creates an empty accumulator over the chosen group. The initial
    /// digest is the generator, the commitment to `P(z) = 1`.
    pub fn new(setup: &'a TrustedSetup, group: AccumulatorGroup) -> Self {
        let digest = match group {
            AccumulatorGroup::G1 => {
                AccumulatorDigest::G1(setup.g1_generator())
            }
            AccumulatorGroup::G2 => {
                AccumulatorDigest::G2(setup.g2_generator())
            }
        };
        Self {
            setup,
            polynomial: CharacteristicPolynomial::new(),
            group,
            digest,
        }
    }

    /// The current digest.
    pub fn digest(&self) -> AccumulatorDigest {
        self.digest
    }

    /// The group the digest lives in.
    pub fn group(&self) -> AccumulatorGroup {
        self.group
    }

    /// The accumulated set.
    pub fn elements(&self) -> &BTreeSet<u64> {
        self.polynomial.elements()
    }

    /// Whether `element` is in the set.
    pub fn contains(&self, element: u64) -> bool {
        self.polynomial.contains(element)
    }

    /// Number of accumulated elements.
    pub fn len(&self) -> usize {
        self.polynomial.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.polynomial.is_empty()
    }

    pub(crate) fn characteristic(&self) -> &CharacteristicPolynomial {
        &self.polynomial
    }

    pub(crate) fn setup(&self) -> &TrustedSetup {
        self.setup
    }

    /// Re-evaluates `P(s)` and refreshes the digest. Called after every
    /// element change.
    fn update_digest(&mut self) {
        let evaluation = self.polynomial.evaluate(self.setup.secret_s());
        self.digest = match self.group {
            AccumulatorGroup::G1 => AccumulatorDigest::G1(
                (self.setup.g1_generator() * evaluation).into(),
            ),
            AccumulatorGroup::G2 => AccumulatorDigest::G2(
                (self.setup.g2_generator() * evaluation).into(),
            ),
        };
    }

    /// Adds `element` to the set and returns the proof of the
    /// transition.
    ///
    /// Adding an element that is already present is a silent no-op at
    /// the set level: the returned proof records identical digests and
    /// is marked invalid, since no transition took place for it to
    /// attest.
    ///
    /// # Errors
    /// When the addition would grow the set beyond the setup max degree.
    pub fn add(&mut self, element: u64) -> Result<UpdateProof, Error> {
        let old_digest = self.digest;

        if self.polynomial.contains(element) {
            return Ok(UpdateProof::no_op(
                UpdateOperation::Add,
                element,
                old_digest,
            ));
        }
        if self.polynomial.len() >= self.setup.max_degree() {
            return Err(Error::CapacityExceeded {
                max_degree: self.setup.max_degree(),
            });
        }

        self.polynomial.add(element);
        self.update_digest();

        Ok(UpdateProof {
            op: UpdateOperation::Add,
            element,
            old_digest,
            new_digest: self.digest,
            membership_proof: None,
            is_valid: true,
        })
    }

    /// Deletes `element` from the set and returns the proof of the
    /// transition. The proof carries a membership proof against the
    /// digest *before* deletion, attesting the right to delete.
    ///
    /// Deleting an element that is not present is a no-op and yields a
    /// proof marked invalid.
    pub fn delete(&mut self, element: u64) -> UpdateProof {
        let old_digest = self.digest;

        let membership_proof = match self.membership_witness(element) {
            Ok(witness) => MembershipProof {
                witness,
                is_member: true,
            },
            Err(_) => {
                return UpdateProof::no_op(
                    UpdateOperation::Delete,
                    element,
                    old_digest,
                )
            }
        };

        self.polynomial.remove(element);
        self.update_digest();

        UpdateProof {
            op: UpdateOperation::Delete,
            element,
            old_digest,
            new_digest: self.digest,
            membership_proof: Some(membership_proof),
            is_valid: true,
        }
    }

    /// Produces the membership proof for `element` against the current
    /// digest: the `G2` commitment to the witness polynomial
    /// `W(z) = P(z) / (z - element)`.
    ///
    /// For an element outside the set the proof carries
    /// `is_member = false` and an identity witness; it will not verify.
    pub fn generate_membership_proof(&self, element: u64) -> MembershipProof {
        match self.membership_witness(element) {
            Ok(witness) => MembershipProof {
                witness,
                is_member: true,
            },
            Err(_) => MembershipProof::absent(),
        }
    }

    /// Commits to the witness polynomial of `element`, the product of
    /// `(s - y)` over every other member.
    fn membership_witness(&self, element: u64) -> Result<G2Affine, Error> {
        if !self.polynomial.contains(element) {
            return Err(Error::NotMember);
        }
        let witness_evaluation = self
            .polynomial
            .evaluate_without(self.setup.secret_s(), element);
        Ok((self.setup.g2_generator() * witness_evaluation).into())
    }

    /// Verifies a membership proof against a digest.
    ///
    /// Checks `e(digest, g2) == e(g1 * (s - element), witness)`; the
    /// left-hand side is mirrored through `e(g1, digest)` for `G2`
    /// digests. Stateless: only the digest, the setup's public powers
    /// and the proof are touched.
    pub fn verify_membership(
        digest: &AccumulatorDigest,
        element: u64,
        proof: &MembershipProof,
        setup: &TrustedSetup,
    ) -> bool {
        proof.verify(digest, element, setup)
    }

    /// Verifies an update proof: the pairing relation between the old
    /// and new digests and, for deletions, the attached membership
    /// proof.
    pub fn verify_update(proof: &UpdateProof, setup: &TrustedSetup) -> bool {
        proof.verify(setup)
    }

    /// Produces a proof that reveals the digest of `S_A ∩ S_B` and
    /// demonstrates it is *exactly* the intersection of the two
    /// accumulated sets.
    ///
    /// Both accumulators must live in `G1` and be bound to `setup`;
    /// otherwise a proof marked invalid is returned.
    pub fn generate_intersection_proof(
        a: &Accumulator<'_>,
        b: &Accumulator<'_>,
        setup: &TrustedSetup,
    ) -> IntersectionProof {
        IntersectionProof::generate(a, b, setup)
    }

    /// Verifies an intersection proof against the digests of the two
    /// accumulators. Accepts only `G1` digests; the intersection
    /// protocol is defined over `G1`.
    pub fn verify_intersection(
        digest_a: &AccumulatorDigest,
        digest_b: &AccumulatorDigest,
        proof: &IntersectionProof,
        setup: &TrustedSetup,
    ) -> bool {
        proof.verify(digest_a, digest_b, setup)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_setup(max_degree: usize) -> TrustedSetup {
        let rng = &mut StdRng::seed_from_u64(0xdecaf);
        TrustedSetup::setup(max_degree, rng)
            .expect("setup creation should not fail")
    }

    #[test]
    fn empty_digest_is_the_generator() {
        let setup = test_setup(8);

        let acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        assert_eq!(
            acc.digest(),
            AccumulatorDigest::G1(setup.g1_generator())
        );

        let acc = Accumulator::new(&setup, AccumulatorGroup::G2);
        assert_eq!(
            acc.digest(),
            AccumulatorDigest::G2(setup.g2_generator())
        );
    }

    #[test]
    fn digest_matches_polynomial_commitment() {
        let setup = test_setup(8);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        for element in [1, 3, 5, 7, 9] {
            acc.add(element).unwrap();
        }

        // The digest equals the commitment to the coefficient form over
        // the published powers.
        let committed = setup
            .commit_g1(&acc.characteristic().to_polynomial())
            .unwrap();
        assert_eq!(acc.digest(), AccumulatorDigest::G1(committed));
    }

    #[test]
    fn add_then_delete_restores_the_digest() {
        let setup = test_setup(8);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        for element in [1, 3, 5] {
            acc.add(element).unwrap();
        }
        let before = acc.digest();

        acc.add(10).unwrap();
        assert_ne!(acc.digest(), before);
        acc.delete(10);
        assert_eq!(acc.digest(), before);
    }

    #[test]
    fn duplicate_add_is_a_noop() {
        let setup = test_setup(8);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        acc.add(7).unwrap();
        let digest = acc.digest();

        let proof = acc.add(7).unwrap();
        assert!(!proof.is_valid);
        assert_eq!(proof.old_digest, proof.new_digest);
        assert_eq!(acc.digest(), digest);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn delete_of_absent_element_is_invalid() {
        let setup = test_setup(8);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        acc.add(1).unwrap();
        let digest = acc.digest();

        let proof = acc.delete(2);
        assert!(!proof.is_valid);
        assert!(proof.membership_proof.is_none());
        assert_eq!(acc.digest(), digest);
    }

    #[test]
    fn capacity_is_enforced() {
        let setup = test_setup(2);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        acc.add(1).unwrap();
        acc.add(2).unwrap();
        assert_eq!(
            acc.add(3),
            Err(Error::CapacityExceeded { max_degree: 2 })
        );
        // A duplicate of an existing member is still a silent no-op.
        assert!(acc.add(2).is_ok());
    }

    #[test]
    fn digest_encoding_round_trip() {
        let setup = test_setup(4);
        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G1);
        acc.add(5).unwrap();

        let bytes = acc.digest().to_var_bytes();
        let decoded = AccumulatorDigest::from_slice(&bytes).unwrap();
        assert_eq!(decoded, acc.digest());

        let mut acc = Accumulator::new(&setup, AccumulatorGroup::G2);
        acc.add(5).unwrap();
        let bytes = acc.digest().to_var_bytes();
        let decoded = AccumulatorDigest::from_slice(&bytes).unwrap();
        assert_eq!(decoded, acc.digest());
    }

    #[test]
    fn digest_decoding_rejects_bad_input() {
        assert_eq!(
            AccumulatorDigest::from_slice(&[]),
            Err(Error::NotEnoughBytes)
        );
        assert_eq!(
            AccumulatorDigest::from_slice(&[9, 0, 0]),
            Err(Error::InvalidDigestEncoding)
        );
        assert_eq!(
            AccumulatorDigest::from_slice(&[DIGEST_TAG_G1, 0, 0]),
            Err(Error::NotEnoughBytes)
        );
    }
}

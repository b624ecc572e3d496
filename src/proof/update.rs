// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::accumulator::{read_digest, AccumulatorDigest};
use crate::error::Error;
use crate::proof::MembershipProof;
use crate::setup::TrustedSetup;
use dusk_bls12_381::{multi_miller_loop, G2Prepared, Gt};
use dusk_bytes::Serializable;

/// The dynamic operation an [`UpdateProof`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperation {
    /// An element was added to the set.
    Add,
    /// An element was deleted from the set.
    Delete,
}

/// Encoding tag for [`UpdateOperation::Add`].
const OP_TAG_ADD: u8 = 1;
/// Encoding tag for [`UpdateOperation::Delete`].
const OP_TAG_DELETE: u8 = 2;

/// Proof of a single accumulator transition. The record is terminal: it
/// is emitted once and never mutates.
///
/// The element itself is part of the record; the verifier reconstructs
/// the algebraic relation between the digests from it, so additions need
/// no extra witness. Deletions carry a membership proof against the old
/// digest, attesting the right to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProof {
    /// Which operation was performed.
    pub op: UpdateOperation,
    /// The element that was added or deleted.
    pub element: u64,
    /// Digest before the operation.
    pub old_digest: AccumulatorDigest,
    /// Digest after the operation.
    pub new_digest: AccumulatorDigest,
    /// For deletions, membership of `element` in the old digest.
    pub membership_proof: Option<MembershipProof>,
    /// Cleared when the operation did not transition the set (adding a
    /// present element, deleting an absent one).
    pub is_valid: bool,
}

impl UpdateProof {
    /// A proof recording that no transition took place.
    pub(crate) fn no_op(
        op: UpdateOperation,
        element: u64,
        digest: AccumulatorDigest,
    ) -> Self {
        Self {
            op,
            element,
            old_digest: digest,
            new_digest: digest,
            membership_proof: None,
            is_valid: false,
        }
    }

    /// Verifies the transition this proof records.
    ///
    /// For an addition, `P_new(s) = P_old(s) * (s - x)` is checked as
    /// `e(A_new, g2) == e(A_old, g2 * (s - x))`. A deletion first checks
    /// the attached membership proof against the old digest and then the
    /// same relation with the roles of the digests swapped. Both sides
    /// mirror through `g1` terms when the digests live in `G2`.
    pub fn verify(&self, setup: &TrustedSetup) -> bool {
        if !self.is_valid {
            return false;
        }
        match self.op {
            UpdateOperation::Add => grows_by_root(
                &self.old_digest,
                &self.new_digest,
                self.element,
                setup,
            ),
            UpdateOperation::Delete => {
                let membership = match &self.membership_proof {
                    Some(proof) => proof,
                    None => return false,
                };
                membership.verify(&self.old_digest, self.element, setup)
                    && grows_by_root(
                        &self.new_digest,
                        &self.old_digest,
                        self.element,
                        setup,
                    )
            }
        }
    }

    /// Serializes the proof as the concatenation of its fields.
    pub fn to_var_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(match self.op {
            UpdateOperation::Add => OP_TAG_ADD,
            UpdateOperation::Delete => OP_TAG_DELETE,
        });
        bytes.push(self.is_valid as u8);
        bytes.extend_from_slice(&self.element.to_be_bytes());
        bytes.extend_from_slice(&self.old_digest.to_var_bytes());
        bytes.extend_from_slice(&self.new_digest.to_var_bytes());
        match &self.membership_proof {
            Some(proof) => {
                bytes.push(1);
                bytes.extend_from_slice(&proof.to_bytes());
            }
            None => bytes.push(0),
        }
        bytes
    }

    /// Deserializes a proof produced by [`UpdateProof::to_var_bytes`].
    pub fn from_slice(bytes: &[u8]) -> Result<UpdateProof, Error> {
        let (op_tag, bytes) = read_byte(bytes)?;
        let op = match op_tag {
            OP_TAG_ADD => UpdateOperation::Add,
            OP_TAG_DELETE => UpdateOperation::Delete,
            _ => return Err(dusk_bytes::Error::InvalidData.into()),
        };
        let (is_valid, bytes) = read_bool(bytes)?;
        let (element, bytes) = read_u64(bytes)?;
        let (old_digest, bytes) = read_digest(bytes)?;
        let (new_digest, bytes) = read_digest(bytes)?;
        let (has_membership, bytes) = read_bool(bytes)?;
        let membership_proof = if has_membership {
            if bytes.len() < MembershipProof::SIZE {
                return Err(Error::NotEnoughBytes);
            }
            let mut buf = [0u8; MembershipProof::SIZE];
            buf.copy_from_slice(&bytes[..MembershipProof::SIZE]);
            Some(MembershipProof::from_bytes(&buf)?)
        } else {
            None
        };

        Ok(UpdateProof {
            op,
            element,
            old_digest,
            new_digest,
            membership_proof,
            is_valid,
        })
    }
}

/// Checks `e(grown, g) == e(base, g * (s - element))` in the digests'
/// group, i.e. that the grown commitment extends the base one by exactly
/// the root `element`.
fn grows_by_root(
    base: &AccumulatorDigest,
    grown: &AccumulatorDigest,
    element: u64,
    setup: &TrustedSetup,
) -> bool {
    let result = match (base, grown) {
        (AccumulatorDigest::G1(base), AccumulatorDigest::G1(grown)) => {
            let lhs = -grown;
            let shifted = G2Prepared::from(setup.g2_shifted(element));
            multi_miller_loop(&[
                (&lhs, setup.g2_prepared()),
                (base, &shifted),
            ])
        }
        (AccumulatorDigest::G2(base), AccumulatorDigest::G2(grown)) => {
            let lhs = -setup.g1_generator();
            let grown = G2Prepared::from(*grown);
            let base = G2Prepared::from(*base);
            let shifted = setup.g1_shifted(element);
            multi_miller_loop(&[(&lhs, &grown), (&shifted, &base)])
        }
        // Digests from different groups cannot be related.
        _ => return false,
    };
    result.final_exponentiation() == Gt::identity()
}

/// Reads a single byte off the front of a slice.
fn read_byte(bytes: &[u8]) -> Result<(u8, &[u8]), Error> {
    match bytes.split_first() {
        Some((byte, rest)) => Ok((*byte, rest)),
        None => Err(Error::NotEnoughBytes),
    }
}

/// Reads a strict boolean byte off the front of a slice.
fn read_bool(bytes: &[u8]) -> Result<(bool, &[u8]), Error> {
    let (byte, rest) = read_byte(bytes)?;
    match byte {
        0 => Ok((false, rest)),
        1 => Ok((true, rest)),
        _ => Err(dusk_bytes::Error::InvalidData.into()),
    }
}

/// Reads a big-endian `u64` off the front of a slice.
fn read_u64(bytes: &[u8]) -> Result<(u64, &[u8]), Error> {
    if bytes.len() < 8 {
        return Err(Error::NotEnoughBytes);
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    Ok((u64::from_be_bytes(buf), &bytes[8..]))
}

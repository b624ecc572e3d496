// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bytes::Serializable;
use expressive_accumulator::prelude::*;

mod common;
use common::{accumulator_with, test_setup};

#[test]
fn membership_proof_round_trips_through_bytes() {
    let setup = test_setup(16);
    let acc = accumulator_with(&setup, &[1, 3, 5]);

    let proof = acc.generate_membership_proof(3);
    let decoded = MembershipProof::from_bytes(&proof.to_bytes())
        .expect("Deserialization shouldn't fail");
    assert_eq!(proof, decoded);

    // The decoded proof still verifies.
    assert!(Accumulator::verify_membership(
        &acc.digest(),
        3,
        &decoded,
        &setup
    ));
}

#[test]
fn addition_proof_round_trips_through_bytes() {
    let setup = test_setup(16);
    let mut acc = accumulator_with(&setup, &[1, 3, 5]);

    let proof = acc
        .add(8)
        .expect("Accumulator capacity shouldn't be exceeded");
    let decoded = UpdateProof::from_slice(&proof.to_var_bytes())
        .expect("Deserialization shouldn't fail");
    assert_eq!(proof, decoded);
    assert!(Accumulator::verify_update(&decoded, &setup));
}

#[test]
fn deletion_proof_round_trips_through_bytes() {
    let setup = test_setup(16);
    let mut acc = accumulator_with(&setup, &[1, 3, 5]);

    let proof = acc.delete(3);
    let decoded = UpdateProof::from_slice(&proof.to_var_bytes())
        .expect("Deserialization shouldn't fail");
    assert_eq!(proof, decoded);
    assert!(Accumulator::verify_update(&decoded, &setup));
}

#[test]
fn intersection_proof_round_trips_through_bytes() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3, 5, 7, 9]);
    let b = accumulator_with(&setup, &[2, 3, 5, 8, 9]);

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    let decoded = IntersectionProof::from_bytes(&proof.to_bytes())
        .expect("Deserialization shouldn't fail");
    assert_eq!(proof, decoded);
    assert!(Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &decoded,
        &setup
    ));
}

#[test]
fn digest_round_trips_in_both_groups() {
    let setup = test_setup(16);

    let g1 = accumulator_with(&setup, &[4, 5]).digest();
    assert_eq!(
        AccumulatorDigest::from_slice(&g1.to_var_bytes())
            .expect("Deserialization shouldn't fail"),
        g1
    );

    let mut acc = Accumulator::new(&setup, AccumulatorGroup::G2);
    acc.add(4)
        .expect("Accumulator capacity shouldn't be exceeded");
    let g2 = acc.digest();
    assert_eq!(
        AccumulatorDigest::from_slice(&g2.to_var_bytes())
            .expect("Deserialization shouldn't fail"),
        g2
    );
}

#[test]
fn truncated_update_proof_is_rejected() {
    let setup = test_setup(16);
    let mut acc = accumulator_with(&setup, &[1, 3, 5]);

    let proof = acc.delete(3);
    let bytes = proof.to_var_bytes();
    assert!(UpdateProof::from_slice(&bytes[..bytes.len() - 1]).is_err());
    assert!(UpdateProof::from_slice(&[]).is_err());
}

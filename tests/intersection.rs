// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use expressive_accumulator::prelude::*;

mod common;
use common::{accumulator_with, test_setup};

#[test]
fn intersection_proof_verifies_and_reveals_the_right_digest() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3, 5, 7, 9]);
    let b = accumulator_with(&setup, &[2, 3, 5, 8, 9]);

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(proof.is_valid);
    assert!(Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));

    // The revealed digest commits to exactly {3, 5, 9}.
    let expected = accumulator_with(&setup, &[3, 5, 9]).digest();
    assert_eq!(
        AccumulatorDigest::G1(proof.intersection_digest),
        expected
    );
}

#[test]
fn disjoint_sets_intersect_in_the_empty_set() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 2]);
    let b = accumulator_with(&setup, &[3, 4]);

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));

    // The empty intersection commits to the constant polynomial 1, i.e.
    // the generator itself.
    assert_eq!(proof.intersection_digest, setup.g1_generator());
}

#[test]
fn equal_sets_intersect_in_themselves() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 2, 3]);
    let b = accumulator_with(&setup, &[1, 2, 3]);

    // Both quotient polynomials degenerate to 1 here; the prover must
    // still produce a Bézout pair for them.
    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(proof.is_valid);
    assert!(Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));
    assert_eq!(AccumulatorDigest::G1(proof.intersection_digest), a.digest());
}

#[test]
fn one_sided_overlap() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 2, 3, 4]);
    let b = accumulator_with(&setup, &[3, 4]);

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));
    assert_eq!(
        AccumulatorDigest::G1(proof.intersection_digest),
        b.digest()
    );
}

#[test]
fn proof_is_bound_to_both_digests() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3, 5, 7, 9]);
    let b = accumulator_with(&setup, &[2, 3, 5, 8, 9]);
    let c = accumulator_with(&setup, &[3, 5]);

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(!Accumulator::verify_intersection(
        &c.digest(),
        &b.digest(),
        &proof,
        &setup
    ));
    assert!(!Accumulator::verify_intersection(
        &a.digest(),
        &c.digest(),
        &proof,
        &setup
    ));
}

#[test]
fn claiming_a_subset_of_the_intersection_is_rejected() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3, 5, 7, 9]);
    let b = accumulator_with(&setup, &[2, 3, 5, 8, 9]);

    // Forge a proof claiming I = {3, 5}, a proper subset of the true
    // intersection {3, 5, 9}. The quotients then both keep the root 9,
    // so the subset checks hold but no Bézout pair can exist; the forger
    // fills in arbitrary coefficient witnesses.
    let claimed = CharacteristicPolynomial::from_elements([3, 5]);
    let quotient_a =
        CharacteristicPolynomial::from_elements([1, 7, 9]).to_polynomial();
    let quotient_b =
        CharacteristicPolynomial::from_elements([2, 8, 9]).to_polynomial();

    let forged = IntersectionProof {
        intersection_digest: setup
            .commit_g1(&claimed.to_polynomial())
            .expect("Commitment shouldn't fail"),
        witness_qa: setup
            .commit_g2(&quotient_a)
            .expect("Commitment shouldn't fail"),
        witness_qb: setup
            .commit_g2(&quotient_b)
            .expect("Commitment shouldn't fail"),
        witness_a: setup.g1_generator(),
        witness_b: setup.g1_generator(),
        is_valid: true,
    };

    assert!(!Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &forged,
        &setup
    ));
}

#[test]
fn claiming_a_superset_of_the_intersection_is_rejected() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3, 5, 7, 9]);
    let b = accumulator_with(&setup, &[2, 3, 5, 8, 9]);

    // Forge a proof claiming I = {1, 3, 5, 9}. The claim is a subset of
    // A but not of B, so the second subset check cannot be satisfied by
    // the honestly-shaped quotient commitment.
    let claimed = CharacteristicPolynomial::from_elements([1, 3, 5, 9]);
    let quotient_a =
        CharacteristicPolynomial::from_elements([7]).to_polynomial();
    let quotient_b =
        CharacteristicPolynomial::from_elements([2, 8]).to_polynomial();

    let forged = IntersectionProof {
        intersection_digest: setup
            .commit_g1(&claimed.to_polynomial())
            .expect("Commitment shouldn't fail"),
        witness_qa: setup
            .commit_g2(&quotient_a)
            .expect("Commitment shouldn't fail"),
        witness_qb: setup
            .commit_g2(&quotient_b)
            .expect("Commitment shouldn't fail"),
        witness_a: setup.g1_generator(),
        witness_b: setup.g1_generator(),
        is_valid: true,
    };

    assert!(!Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &forged,
        &setup
    ));
}

#[test]
fn g2_accumulators_cannot_prove_intersection() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 2]);
    let mut b = Accumulator::new(&setup, AccumulatorGroup::G2);
    b.add(2).expect("Accumulator capacity shouldn't be exceeded");

    let proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    assert!(!proof.is_valid);
    assert!(!Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));
}

#[test]
fn invalidated_proof_is_rejected() {
    let setup = test_setup(16);
    let a = accumulator_with(&setup, &[1, 3]);
    let b = accumulator_with(&setup, &[3, 4]);

    let mut proof = Accumulator::generate_intersection_proof(&a, &b, &setup);
    proof.is_valid = false;
    assert!(!Accumulator::verify_intersection(
        &a.digest(),
        &b.digest(),
        &proof,
        &setup
    ));
}

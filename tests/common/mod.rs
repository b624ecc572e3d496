// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use expressive_accumulator::prelude::*;
use merlin::Transcript;

// Build a trusted setup from deterministic secrets so every test run and
// every helper call sees identical parameters.
pub fn test_setup(max_degree: usize) -> TrustedSetup {
    let mut transcript = Transcript::new(b"expressive-accumulator tests");
    let s = transcript.challenge_scalar(b"test_secret_s");
    let r = transcript.challenge_scalar(b"test_secret_r");
    TrustedSetup::from_secrets(s, r, max_degree)
        .expect("Creation of the trusted setup shouldn't fail")
}

// Accumulate `elements` into a fresh G1 accumulator.
pub fn accumulator_with<'a>(
    setup: &'a TrustedSetup,
    elements: &[u64],
) -> Accumulator<'a> {
    let mut acc = Accumulator::new(setup, AccumulatorGroup::G1);
    for element in elements {
        acc.add(*element)
            .expect("Accumulator capacity shouldn't be exceeded");
    }
    acc
}

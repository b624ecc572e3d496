// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bls12_381::BlsScalar;
use rand_core::RngCore;

/// Returns a vector of scalars of increasing powers of x from x^0 to x^d.
pub(crate) fn powers_of(scalar: &BlsScalar, max_degree: usize) -> Vec<BlsScalar> {
    let mut powers = Vec::with_capacity(max_degree + 1);
    powers.push(BlsScalar::one());
    for i in 1..=max_degree {
        powers.push(powers[i - 1] * scalar);
    }
    powers
}

/// Generates a random scalar using an RNG seed.
pub(crate) fn random_scalar<R: RngCore>(rng: &mut R) -> BlsScalar {
    BlsScalar::from_raw([
        rng.next_u64(),
        rng.next_u64(),
        rng.next_u64(),
        rng.next_u64(),
    ])
}

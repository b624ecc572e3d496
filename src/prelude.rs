// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Collection of functions needed to use the accumulator library.
//!
//! Use this as the only import that you need to interact with the
//! principal data structures of the library.

pub use crate::accumulator::{
    Accumulator, AccumulatorDigest, AccumulatorGroup,
};
pub use crate::characteristic::CharacteristicPolynomial;
pub use crate::error::Error;
pub use crate::polynomial::Polynomial;
pub use crate::proof::{
    IntersectionProof, MembershipProof, UpdateOperation, UpdateProof,
};
pub use crate::setup::TrustedSetup;
pub use crate::transcript::TranscriptProtocol;
// Re-export dusk-bls12_381 scalar type
pub use dusk_bls12_381::BlsScalar;

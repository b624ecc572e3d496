// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Expressive cryptographic set accumulator over the BLS12-381 pairing
//! curve.
//!
//! An accumulator maintains a constant-size commitment (a *digest*) to a
//! finite set of integers: the digest is `g * P(s)` where `P` is the
//! characteristic polynomial of the set, `s` is the secret evaluation
//! point of a KZG-style trusted setup and `g` generates `G1` or `G2`.
//!
//! Against that digest the library proves, with pairing-equation
//! verification independent of the set size:
//!
//! - **membership** of an element, via a quotient-polynomial witness,
//! - **dynamic updates** (additions and deletions), relating the old and
//!   new digests,
//! - **exact set intersection** between two independent accumulators,
//!   via quotient witnesses plus a Bézout-coefficient coprimality
//!   witness.
//!
//! The library is synchronous and keeps no global state; a
//! [`TrustedSetup`](setup::TrustedSetup) is built once and borrowed by
//! every accumulator and verifier.

// Polynomial operator impls mix additions inside multiplications.
#![allow(clippy::suspicious_arithmetic_impl)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod accumulator;
pub mod characteristic;
pub mod error;
pub mod polynomial;
pub mod prelude;
pub mod proof;
pub mod setup;
pub mod transcript;
mod util;

pub use error::Error;

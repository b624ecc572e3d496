// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A collection of all possible errors encountered in the accumulator.

use dusk_bytes::Error as DuskBytesError;

/// Defines all possible errors that can be encountered in the
/// accumulator library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    // Setup errors
    /// This error occurs when the user tries to create a `TrustedSetup`
    /// and supplies the max degree as zero.
    DegreeIsZero,

    // Accumulator errors
    /// This error occurs when an addition would grow the set beyond the
    /// maximum polynomial degree supported by the trusted setup.
    CapacityExceeded {
        /// Maximum degree (and therefore maximum set size) of the setup.
        max_degree: usize,
    },
    /// This error occurs when an operation requires an element to be
    /// present in the set but it is not.
    NotMember,

    // Polynomial engine errors
    /// This error occurs when dividing by the zero polynomial.
    DivisorIsZero,
    /// This error occurs when the extended Euclidean step of the
    /// intersection prover returns a gcd that is not a nonzero constant.
    NotCoprime,
    /// This error occurs when the user tries to commit to a polynomial
    /// whose degree is larger than the powers published by the setup.
    PolynomialDegreeTooLarge,

    // Serialization errors
    /// This error occurs when there are not enough bytes to read out of
    /// a slice during deserialization.
    NotEnoughBytes,
    /// This error occurs when a digest encoding carries an unknown group
    /// tag byte.
    InvalidDigestEncoding,
    /// Dusk-bytes serialization error.
    BytesError(DuskBytesError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegreeIsZero => {
                write!(f, "cannot create a trusted setup with max degree 0")
            }
            Self::CapacityExceeded { max_degree } => write!(
                f,
                "set size would exceed the setup max degree of {}",
                max_degree
            ),
            Self::NotMember => {
                write!(f, "element is not a member of the set")
            }
            Self::DivisorIsZero => {
                write!(f, "cannot divide by the zero polynomial")
            }
            Self::NotCoprime => {
                write!(f, "quotient polynomials are not coprime")
            }
            Self::PolynomialDegreeTooLarge => write!(
                f,
                "setup is not large enough to commit to said polynomial"
            ),
            Self::NotEnoughBytes => {
                write!(f, "not enough bytes left to read")
            }
            Self::InvalidDigestEncoding => {
                write!(f, "digest bytes carry an unknown group tag")
            }
            Self::BytesError(err) => write!(f, "{:?}", err),
        }
    }
}

impl From<DuskBytesError> for Error {
    fn from(bytes_err: DuskBytesError) -> Self {
        Self::BytesError(bytes_err)
    }
}

impl std::error::Error for Error {}

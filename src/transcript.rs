// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Deterministic, domain-separated derivation of scalars from labelled
//! transcripts. The setup uses it to fix its generators; callers may use
//! it to derive secrets from high-entropy labels.

use dusk_bls12_381::BlsScalar;
use merlin::Transcript;

/// Transcript adds an abstraction over the Merlin transcript.
pub trait TranscriptProtocol {
    /// Compute a `label`ed challenge scalar.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> BlsScalar;
}

impl TranscriptProtocol for Transcript {
    fn challenge_scalar(&mut self, label: &'static [u8]) -> BlsScalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        BlsScalar::from_bytes_wide(&buf)
    }
}

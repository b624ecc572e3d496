// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Proof records emitted by the accumulator and their stateless
//! verifiers.
//!
//! Verification takes only digests, the setup's public powers and the
//! proof itself; it never mutates and never surfaces *why* a proof was
//! rejected. Provers that cannot honestly produce a proof return a
//! record with its validity flag cleared instead of erroring.

mod intersection;
mod membership;
mod update;

pub use intersection::IntersectionProof;
pub use membership::MembershipProof;
pub use update::{UpdateOperation, UpdateProof};

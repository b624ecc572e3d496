// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Root-form representation of the characteristic polynomial of a set.
//!
//! A set `S` is represented by the polynomial `P(z) = prod_{x in S}
//! (z - x)`; the empty set maps to the constant polynomial `1`. Keeping
//! the polynomial in root form makes evaluation at a point linear in the
//! set size, which is all the digest path ever needs. The coefficient
//! expansion is only materialized for intersection proofs, where the
//! extended Euclidean algorithm requires it.

use crate::polynomial::Polynomial;
use dusk_bls12_381::BlsScalar;
use std::collections::BTreeSet;

/// The characteristic polynomial of a set of integers, kept in root
/// form: the sorted set of its roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacteristicPolynomial {
    elements: BTreeSet<u64>,
}

impl CharacteristicPolynomial {
    /// Creates the characteristic polynomial of the empty set, `P(z) = 1`.
    pub fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }

    /// Creates the characteristic polynomial of the given set. Duplicates
    /// are silently absorbed.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Adds the root `element`, returning whether the set changed.
    pub fn add(&mut self, element: u64) -> bool {
        self.elements.insert(element)
    }

    /// Removes the root `element`, returning whether it was present.
    pub fn remove(&mut self, element: u64) -> bool {
        self.elements.remove(&element)
    }

    /// Whether `element` is a root.
    pub fn contains(&self, element: u64) -> bool {
        self.elements.contains(&element)
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The underlying sorted set.
    pub fn elements(&self) -> &BTreeSet<u64> {
        &self.elements
    }

    /// Evaluates `P(a) = prod_{x in S} (a - x)`.
    pub fn evaluate(&self, a: &BlsScalar) -> BlsScalar {
        self.elements
            .iter()
            .fold(BlsScalar::one(), |acc, x| acc * (a - BlsScalar::from(*x)))
    }

    /// Evaluates the quotient `P(a) / (a - excluded)`, i.e. the product
    /// over every root except `excluded`. The caller must ensure
    /// `excluded` is a root.
    pub fn evaluate_without(&self, a: &BlsScalar, excluded: u64) -> BlsScalar {
        self.elements
            .iter()
            .filter(|x| **x != excluded)
            .fold(BlsScalar::one(), |acc, x| acc * (a - BlsScalar::from(*x)))
    }

    /// Expands the root form into coefficient form.
    pub fn to_polynomial(&self) -> Polynomial {
        let roots: Vec<BlsScalar> =
            self.elements.iter().map(|x| BlsScalar::from(*x)).collect();
        Polynomial::from_roots(&roots)
    }

    /// The characteristic polynomial of the intersection of both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .intersection(&other.elements)
                .copied()
                .collect(),
        }
    }

    /// The characteristic polynomial of the set difference
    /// `self \ other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self
                .elements
                .difference(&other.elements)
                .copied()
                .collect(),
        }
    }
}

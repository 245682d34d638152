/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::{fmt, ops::Not, sync::Arc};

/// An atomic proposition of a planning domain, such as `At(C1, SFO)`.
///
/// The name is shared, so cloning a fluent is cheap.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fluent(Arc<str>);

impl Fluent {
    /// Creates a fluent from its canonical textual form.
    pub fn new(name: &str) -> Self {
        Fluent(Arc::from(name))
    }

    /// Returns the textual form of this fluent.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fluent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed fluent: either the fluent itself or its negation.
///
/// Negating twice gives back an equal literal, and a literal never equals its negation.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    fluent: Fluent,
    positive: bool,
}

impl Literal {
    /// The literal asserting `fluent`.
    pub fn positive(fluent: Fluent) -> Self {
        Literal {
            fluent,
            positive: true,
        }
    }

    /// The literal asserting `~fluent`.
    pub fn negative(fluent: Fluent) -> Self {
        Literal {
            fluent,
            positive: false,
        }
    }

    /// The literal for `fluent` holding with the given truth value.
    pub fn with_value(fluent: Fluent, value: bool) -> Self {
        Literal {
            fluent,
            positive: value,
        }
    }

    pub fn fluent(&self) -> &Fluent {
        &self.fluent
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns whether `other` is exactly the negation of `self`.
    pub fn is_negation_of(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.fluent == other.fluent
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            fluent: self.fluent,
            positive: !self.positive,
        }
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl From<Fluent> for Literal {
    fn from(fluent: Fluent) -> Self {
        Literal::positive(fluent)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.fluent)
        } else {
            write!(f, "~{}", self.fluent)
        }
    }
}

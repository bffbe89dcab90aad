use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::errors::LocatorError;
use crate::selector::{ControlType, PredicateKey, PredicateValue};

/// How two locator queries are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Combinator {
    /// Both sides must match the same element
    And,
    /// The right side matches inside the subtree rooted at the left match
    Child,
}

impl Combinator {
    fn as_tag(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Child => ">",
        }
    }
}

/// A locator query under construction
///
/// A `Locator` starts from a single `key:value` predicate and grows
/// left-to-right through [`and`](Locator::and) and [`child`](Locator::child).
/// Combination consumes both operands and returns the combined value, so a
/// locator that must survive a combination is cloned at the call site.
/// The accumulated query never shrinks or reorders: `A and B and C` is
/// emitted exactly in construction order, and duplicate predicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locator {
    query: String,
}

impl Locator {
    /// Create a locator from a single predicate
    ///
    /// Reserved keys fail with [`LocatorError::InvalidArgument`]; the
    /// per-key constructors below use supported keys and cannot fail.
    pub fn predicate(
        key: PredicateKey,
        value: impl Into<PredicateValue>,
    ) -> Result<Self, LocatorError> {
        if !key.is_supported() {
            return Err(LocatorError::InvalidArgument(format!(
                "Predicate key \"{key}\" is reserved and not yet supported"
            )));
        }
        Ok(Self::leaf(key, value.into()))
    }

    fn leaf(key: PredicateKey, value: PredicateValue) -> Self {
        let query = format!("{key}:{value}");
        debug!("Built locator predicate: {query}");
        Self { query }
    }

    /// Locator matching on the engine-assigned element ID
    pub fn id(value: impl Into<String>) -> Self {
        Self::leaf(PredicateKey::Id, PredicateValue::Text(value.into()))
    }

    /// Locator matching on the element's window class
    pub fn class(value: impl Into<String>) -> Self {
        Self::leaf(PredicateKey::Class, PredicateValue::Text(value.into()))
    }

    /// Locator matching on the element's name/label
    pub fn name(value: impl Into<String>) -> Self {
        Self::leaf(PredicateKey::Name, PredicateValue::Text(value.into()))
    }

    /// Locator matching on the element's positional offset
    pub fn offset(value: impl Into<String>) -> Self {
        Self::leaf(PredicateKey::Offset, PredicateValue::Text(value.into()))
    }

    /// Locator matching on control type
    pub fn control(control: ControlType) -> Self {
        Self::leaf(PredicateKey::Type, PredicateValue::Control(control))
    }

    /// Shorthand for `control(ControlType::Button)`
    pub fn button() -> Self {
        Self::control(ControlType::Button)
    }

    /// Shorthand for `control(ControlType::Edit)`
    pub fn edit() -> Self {
        Self::control(ControlType::Edit)
    }

    /// Shorthand for `control(ControlType::Combobox)`
    pub fn combobox() -> Self {
        Self::control(ControlType::Combobox)
    }

    fn combine(mut self, op: Combinator, rhs: Locator) -> Self {
        self.query.push(' ');
        self.query.push_str(op.as_tag());
        self.query.push(' ');
        self.query.push_str(&rhs.query);
        self
    }

    /// Require `rhs` to match the same element as this locator
    pub fn and(self, rhs: Locator) -> Self {
        self.combine(Combinator::And, rhs)
    }

    /// Scope `rhs` to the subtree rooted at this locator's match
    ///
    /// This only encodes the relationship in the query text; walking the
    /// subtree is the engine's job.
    pub fn child(self, rhs: Locator) -> Self {
        self.combine(Combinator::Child, rhs)
    }

    /// The accumulated query text
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.query
    }
}

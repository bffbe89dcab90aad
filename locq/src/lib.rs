//! Locator queries for desktop UI automation
//!
//! This crate builds the textual locator queries a UI-automation matching
//! engine consumes to find a control inside a window. A query combines
//! `key:value` predicates (`type:Button`, `id:"ID 1"`) with two combinators:
//! `and` requires all predicates to match the same element, and `>` scopes
//! the right-hand side to the subtree rooted at the left-hand match.
//!
//! The crate only produces the query text; searching and matching happen in
//! the engine on the other side of that string.
//!
//! ```
//! use locq::Locator;
//!
//! let query = Locator::button()
//!     .and(Locator::name("Save As"))
//!     .child(Locator::id("_id_"));
//! assert_eq!(query.as_str(), "type:Button and name:\"Save As\" > id:_id_");
//! ```

pub mod errors;
pub mod locator;
pub mod selector;
#[cfg(test)]
mod tests;

pub use errors::LocatorError;
pub use locator::Locator;
pub use selector::{ControlType, PredicateKey, PredicateValue};

//! `Quote` trait and `SimpleQuote` implementation.
//!
//! Quotes are immutable. A new market value means a new quote, which callers
//! share between term structures through a [`Handle`](ql_core::Handle).

use ql_core::{errors::Error, errors::Result, Handle, Real};
use std::sync::Arc;

/// A market-observable scalar with an identity.
pub trait Quote: std::fmt::Debug + Send + Sync {
    /// Identifier of the observable (e.g. `"spot"`, `"EUR-ESTR-flat"`).
    fn id(&self) -> &str;

    /// Return the value, or `None` if the quote carries no value.
    fn value(&self) -> Option<Real>;

    /// Return `true` if the quote carries a usable value.
    fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// The value, or [`Error::NullValue`] if the quote is empty.
    fn require_value(&self) -> Result<Real> {
        self.value().ok_or(Error::NullValue)
    }
}

/// An immutable market quote holding a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleQuote {
    id: String,
    value: Option<Real>,
}

impl SimpleQuote {
    /// Create a new quote with the given identifier and value.
    pub fn new(id: impl Into<String>, value: Real) -> Self {
        Self {
            id: id.into(),
            value: Some(value),
        }
    }

    /// Create an empty (invalid) quote.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: None,
        }
    }

    /// A copy of this quote with `shift` added to its value. The identifier
    /// is kept, so the bumped quote stands in for the original.
    pub fn bumped(&self, shift: Real) -> Self {
        Self {
            id: self.id.clone(),
            value: self.value.map(|v| v + shift),
        }
    }

    /// Wrap this quote in a shareable handle.
    pub fn into_handle(self) -> Handle<dyn Quote> {
        Handle::from_arc(Arc::new(self) as Arc<dyn Quote>)
    }
}

impl Quote for SimpleQuote {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> Option<Real> {
        self.value
    }
}

/// Read the value behind a quote handle, failing on a null handle or an
/// empty quote.
pub fn handle_value(handle: &Handle<dyn Quote>) -> Result<Real> {
    handle.try_get()?.require_value()
}

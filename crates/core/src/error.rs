//! Domain error taxonomy.
//!
//! Every failure a core operation can produce is one of these tagged
//! variants. The HTTP boundary maps each variant to a status code and a
//! user-facing message; nothing here knows about HTTP.

use thiserror::Error;

/// Errors produced by catalog queries and order building.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A query parameter is unrecognized or failed to parse.
    #[error("invalid query parameter: {0}")]
    InvalidParams(String),

    /// A parameter was given without another parameter it depends on.
    #[error("parameter `{param}` requires `{requires}`")]
    MissingDependency {
        param: &'static str,
        requires: &'static str,
    },

    /// No product with the given id exists in the catalog.
    #[error("no product with id {0}")]
    NotFound(String),

    /// A submitted order contains no line items.
    #[error("order contains no items")]
    EmptyOrder,

    /// An order line item references an id absent from the catalog.
    #[error("order references unknown product id {0}")]
    UnknownProduct(String),
}

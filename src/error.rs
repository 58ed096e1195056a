//! Error types and result handling for ryori operations.
//!
//! All fallible operations in ryori return a [`Result<T>`], a type alias for
//! `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! - **Transport**: the request never produced a response (DNS, timeout,
//!   connection reset)
//! - **Status**: the remote database answered with a non-success HTTP status
//! - **Decode**: the response body was not the expected JSON shape
//! - **Validation**: a search was attempted with invalid input, before any
//!   request was issued
//! - **Not Found**: a named resource is missing
//!
//! A well-formed response with no matching data is *not* an error anywhere in
//! this crate; it is the normal empty-result path and callers render it as
//! such.
//!
//! # Examples
//!
//! ```rust
//! use ryori::{Error, RecipeFinder};
//!
//! # async fn example() {
//! let finder = RecipeFinder::new();
//!
//! match finder.search_by_ingredients().await {
//!     Ok(search) => println!("search finished: {:?}", search),
//!     Err(Error::Validation(msg)) => println!("bad input: {}", msg),
//!     Err(Error::Transport(e)) => println!("network trouble: {}", e),
//!     Err(e) => println!("other error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// Type alias for Results with ryori errors.
///
/// All public APIs in ryori return this Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering every failure mode of the recipe pipeline.
///
/// The first three variants are fetch-boundary failures: they are produced by
/// a single network attempt and are never retried automatically. The caller
/// (usually [`RecipeFinder::dispatch`](crate::RecipeFinder::dispatch))
/// translates them into a user-visible notice instead of propagating a crash.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport itself failed before or during the exchange.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest): DNS
    /// resolution failures, connection timeouts, TLS errors and the like.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote database answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded as the expected JSON envelope.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input was rejected before any request was issued.
    ///
    /// The message is suitable for showing to the user as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ryori::Error;
    ///
    /// let error = Error::validation("Please add at least one ingredient.");
    /// ```
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named resource does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ryori::Error;
    ///
    /// let error = Error::not_found("recipe 52771");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Creates a validation error with the given user-visible message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Creates a not-found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}

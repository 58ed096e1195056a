//! Network utilities: the shared HTTP client and the busy gauge.
//!
//! This module provides the networking infrastructure for ryori:
//!
//! - **HTTP Client**: a global, configured reqwest client with connection
//!   pooling and compression, wrapped by [`HttpClient`]
//! - **Busy Gauge**: a reference-counted "loading" indicator that composes
//!   correctly when fetches overlap
//!
//! Every call performs exactly one network attempt. There is no retry loop
//! and no backoff; a failure surfaces immediately as an error and the user
//! re-triggers the action.
//!
//! # Examples
//!
//! ```rust
//! use ryori::net::HttpClient;
//!
//! # async fn example() -> ryori::Result<()> {
//! let client = HttpClient::new();
//! let value: serde_json::Value = client
//!     .get_json("https://www.themealdb.com/api/json/v1/1/random.php")
//!     .await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{Client, header::HeaderMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Global HTTP client instance with optimized configuration.
///
/// This client is configured with:
/// - 30-second timeout (the only timeout in the crate; per-call overrides do
///   not exist)
/// - Connection pooling (10 idle connections per host)
/// - Compression support (gzip, brotli)
/// - Custom User-Agent header
///
/// The client is created lazily on first use and reused across all HTTP
/// operations.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("Ryori/0.1.0")
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// Reference-counted loading indicator.
///
/// The gauge counts fetches currently in flight. Each fetch holds a
/// [`BusyGuard`] for its duration; the guard increments the count when
/// acquired and decrements it when dropped, on every exit path. Because the
/// state is a count rather than a boolean, overlapping fetches compose: the
/// gauge reads busy while *any* fetch is in flight and idle only when all of
/// them have finished.
///
/// Clones share the same underlying count.
///
/// # Examples
///
/// ```rust
/// use ryori::net::BusyGauge;
///
/// let gauge = BusyGauge::new();
/// assert!(!gauge.is_busy());
///
/// let outer = gauge.begin();
/// let inner = gauge.begin();
/// assert_eq!(gauge.in_flight(), 2);
///
/// drop(inner);
/// assert!(gauge.is_busy());
/// drop(outer);
/// assert!(!gauge.is_busy());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BusyGauge {
    in_flight: Arc<AtomicUsize>,
}

impl BusyGauge {
    /// Creates an idle gauge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as in flight until the returned guard is dropped.
    pub fn begin(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            gauge: self.clone(),
        }
    }

    /// Number of fetches currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// `true` while at least one fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Scoped handle on a [`BusyGauge`]; decrements the count on drop.
#[derive(Debug)]
pub struct BusyGuard {
    gauge: BusyGauge,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.gauge.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Thin wrapper over the shared reqwest client.
///
/// `HttpClient` maps the transport outcomes onto the crate's error taxonomy:
/// a failed exchange becomes [`Error::Transport`](crate::Error::Transport), a
/// non-success status becomes [`Error::Status`](crate::Error::Status), and an
/// undecodable body becomes [`Error::Decode`](crate::Error::Decode). One call
/// means one request.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a client with no extra headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header to all requests made by this client.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ryori::net::HttpClient;
    ///
    /// let client = HttpClient::new().with_header("Accept", "application/json");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Performs a single GET request and returns the raw body.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`](crate::Error::Transport) - the exchange failed
    /// * [`Error::Status`](crate::Error::Status) - non-2xx response
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        let response = CLIENT.get(url).headers(self.headers.clone()).send().await?;

        if !response.status().is_success() {
            return Err(crate::Error::Status(response.status()));
        }

        Ok(response.bytes().await?)
    }

    /// Performs a single GET request and deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Decode`](crate::Error::Decode) - the body is not the
    ///   expected JSON shape
    pub async fn get_json<T>(&self, url: &str) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(url).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

//! [`Error`] type.

/// An error from the HTTP client or from decoding the response.
///
/// The HTTP status is not inspected, so an API-level failure reported in a
/// well-formed body is not an [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Failed to reach the host or to read the response body.
	///
	/// The URL is stripped from the cause, as it carries the access key.
	#[error("couldn't connect to server")]
	ConnectionError(#[source] reqwest::Error),
	/// Failed to parse the response.
	#[error("couldn't parse the response")]
	ResponseParseError(#[source] serde_json::Error),
}

//! [`Request`] builder for the rates endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{Error, Rates};

/// Request parameters.
///
/// Every parameter is optional; [`Request::new`] asks for the latest rates of
/// all currencies against the server's default base.
///
/// # Examples
/// ```
/// # use fixerio::{Request, currency::list::*};
/// let mut request = Request::new();
/// request.base(GBP).symbols([EUR, USD]);
/// assert_eq!(request.url(), "https://data.fixer.io/api/latest?base=GBP&symbols=EUR%2CUSD");
/// ```
///
/// It can also be embedded in configuration:
/// ```
/// # use fixerio::Request;
/// let request: Request = serde_json::from_str(r#"{ "base": "USD", "secure": false }"#).unwrap();
/// assert_eq!(request.url(), "http://data.fixer.io/api/latest?base=USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
	pub(crate) base: Option<String>,
	pub(crate) secure: bool,
	pub(crate) api_key: Option<String>,
	pub(crate) date: Option<NaiveDate>,
	pub(crate) symbols: Vec<String>,
}

impl Request {
	/// Creates a new [`Request`] for the latest rates over HTTPS.
	pub const fn new() -> Self {
		Self {
			base: None,
			secure: true,
			api_key: None,
			date: None,
			symbols: Vec::new(),
		}
	}

	/// Sets the base currency.
	///
	/// The code is sent as-is.
	pub fn base(&mut self, currency: impl Into<String>) -> &mut Self {
		self.base = Some(currency.into());
		self
	}

	/// Sets whether to use `https` (the default) or `http`.
	pub fn secure(&mut self, secure: bool) -> &mut Self {
		self.secure = secure;
		self
	}

	/// Sets the currencies to return, replacing any previous ones.
	///
	/// An empty list returns all currencies.
	pub fn symbols<I>(&mut self, currencies: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.symbols = currencies.into_iter().map(Into::into).collect();
		self
	}

	/// Requests the rates of a past date instead of the latest.
	///
	/// [`None`] goes back to the latest rates.
	pub fn historical(&mut self, date: impl Into<Option<NaiveDate>>) -> &mut Self {
		self.date = date.into();
		self
	}

	/// Sets the [access key](https://fixer.io/documentation#authentication) of the API account.
	pub fn api_key(&mut self, key: impl Into<String>) -> &mut Self {
		self.api_key = Some(key.into());
		self
	}

	/// Fetches the rates.
	///
	/// The HTTP status is not checked: any body that decodes is returned,
	/// so an error reported by the API yields empty [`Rates`].
	#[instrument(skip_all, fields(path = tracing::field::Empty))]
	pub async fn get_rates(&self, client: &reqwest::Client) -> Result<Rates, Error> {
		tracing::Span::current().record("path", self.path().as_str());
		fetch(client, &self.url()).await
	}
}

impl Default for Request {
	#[inline] fn default() -> Self { Self::new() }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<Rates, Error> {
	debug!("requesting rates");
	let response = client.get(url).send().await.map_err(connection_error)?;

	let status = response.status();
	if !status.is_success() {
		warn!(%status, "rates endpoint returned an unsuccessful status");
	}

	let body = response.bytes().await.map_err(connection_error)?;
	let rates = Rates::from_body(&body).map_err(Error::ResponseParseError)?;
	debug!(count = rates.len(), base = rates.base(), date = rates.date(), "received rates");
	Ok(rates)
}

#[inline]
fn connection_error(error: reqwest::Error) -> Error {
	Error::ConnectionError(error.without_url())
}

#[cfg(test)]
mod test {
	use std::error::Error as _;

	use super::*;
	use crate::currency::list::*;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	async fn mock_server(status: u16, body: &str) -> MockServer {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/latest"))
			.respond_with(ResponseTemplate::new(status).set_body_string(body))
			.mount(&server)
			.await;
		server
	}

	/// A client sending every `http` request to `proxy`, standing in for the API host.
	fn client_via(proxy: &str) -> reqwest::Client {
		reqwest::Client::builder()
			.proxy(reqwest::Proxy::http(proxy).unwrap())
			.build()
			.unwrap()
	}

	fn insecure() -> Request {
		let mut request = Request::new();
		request.secure(false);
		request
	}

	#[test]
	fn test_defaults() {
		let request = Request::new();
		assert_eq!(request, Request::default());
		assert!(request.secure);
		assert!(request.base.is_none());
		assert!(request.api_key.is_none());
		assert!(request.date.is_none());
		assert!(request.symbols.is_empty());
	}

	#[test]
	fn test_symbols_replace() {
		let mut request = Request::new();
		request.symbols([EUR, USD]).symbols([GBP]);
		assert_eq!(request.symbols, [GBP]);
		request.symbols(Vec::<String>::new());
		assert!(request.symbols.is_empty());
	}

	#[test]
	fn test_historical_clears() {
		let mut request = Request::new();
		request.historical(NaiveDate::from_ymd_opt(2016, 6, 9));
		assert!(request.date.is_some());
		request.historical(None);
		assert!(request.date.is_none());
	}

	#[test]
	fn test_config_defaults() {
		let request: Request = serde_json::from_str(r#"{
			"api_key": "fake_api_key",
			"date": "2016-06-09",
			"symbols": ["EUR", "GBP"]
		}"#).unwrap();
		assert!(request.secure);
		assert_eq!(request.api_key.as_deref(), Some("fake_api_key"));
		assert_eq!(request.date, NaiveDate::from_ymd_opt(2016, 6, 9));
		assert_eq!(request.symbols, [EUR, GBP]);
		assert_eq!(serde_json::from_str::<Request>("{}").unwrap(), Request::new());
	}

	#[tokio::test]
	async fn test_get_rates() {
		let server = mock_server(200, r#"{
			"success": true,
			"base": "EUR",
			"date": "2016-06-09",
			"rates": { "USD": 1.5, "GBP": 0.75 }
		}"#).await;
		let rates = insecure().get_rates(&client_via(&server.uri())).await.unwrap();
		assert_eq!(rates.base(), EUR);
		assert_eq!(rates.date(), "2016-06-09");
		assert_eq!(rates.get(USD), Some(1.5));
		assert_eq!(rates.get(GBP), Some(0.75));
	}

	#[tokio::test]
	async fn test_get_rates_sends_query() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/latest"))
			.and(query_param("access_key", "fake_api_key"))
			.and(query_param("base", "USD"))
			.and(query_param("symbols", "EUR,GBP"))
			.respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "base": "USD", "rates": { "EUR": 0.5, "GBP": 0.25 } }"#))
			.expect(1)
			.mount(&server)
			.await;

		let mut request = insecure();
		request.api_key("fake_api_key").base(USD).symbols([EUR, GBP]);
		let rates = request.get_rates(&client_via(&server.uri())).await.unwrap();
		assert_eq!(rates.len(), 2);
		assert_eq!(rates.convert(1.0, EUR, GBP), Some(0.5));
	}

	#[tokio::test]
	async fn test_get_rates_historical_path() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/2016-06-09"))
			.respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "date": "2016-06-09", "rates": {} }"#))
			.expect(1)
			.mount(&server)
			.await;

		let mut request = insecure();
		request.historical(NaiveDate::from_ymd_opt(2016, 6, 9));
		let rates = request.get_rates(&client_via(&server.uri())).await.unwrap();
		assert_eq!(rates.date(), "2016-06-09");
	}

	#[tokio::test]
	async fn test_get_rates_ignores_status() {
		let server = mock_server(401, r#"{
			"success": false,
			"error": { "code": 101, "type": "invalid_access_key" }
		}"#).await;
		let rates = insecure().get_rates(&client_via(&server.uri())).await.unwrap();
		assert!(rates.is_empty());
	}

	#[tokio::test]
	async fn test_get_rates_malformed_response() {
		let server = mock_server(200, "<html>not json</html>").await;
		let result = insecure().get_rates(&client_via(&server.uri())).await;
		assert!(matches!(result, Err(Error::ResponseParseError(_))));
	}

	#[tokio::test]
	async fn test_get_rates_connection_error() {
		let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
		let mut request = insecure();
		request.api_key("secret_api_key");

		let error = request.get_rates(&client_via(&format!("http://127.0.0.1:{port}"))).await.unwrap_err();
		assert!(matches!(error, Error::ConnectionError(_)));
		assert_eq!(error.to_string(), "couldn't connect to server");
		let cause = error.source().unwrap().to_string();
		assert!(!cause.contains("secret_api_key"), "{cause}");
	}
}

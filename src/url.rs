//! URL building

use std::{borrow::Cow, collections::BTreeMap};

use ::url::form_urlencoded;

use crate::{Request, API_PATH, HOST};

impl Request {
	/// Renders the URL of the request.
	///
	/// Query parameters are sorted by key (`access_key`, `base`, `symbols`)
	/// whatever order they were set in, and only appear when set and
	/// non-empty. Values are form-encoded, e.g. the commas separating the
	/// symbols are sent as `%2C`.
	///
	/// # Examples
	/// ```
	/// # use fixerio::Request;
	/// assert_eq!(Request::new().url(), "https://data.fixer.io/api/latest");
	/// ```
	pub fn url(&self) -> String {
		let scheme = if self.secure { "https" } else { "http" };
		let mut url = format!("{scheme}://{HOST}{}", self.path());
		if let Some(query) = self.query() {
			url.push('?');
			url.push_str(&query);
		}
		url
	}

	/// The URL path: `/api/latest`, or `/api/YYYY-MM-DD` for historical rates.
	pub(crate) fn path(&self) -> String {
		match self.date {
			Some(date) => format!("/{API_PATH}/{}", date.format("%Y-%m-%d")),
			None => format!("/{API_PATH}/latest"),
		}
	}

	fn query(&self) -> Option<String> {
		let mut params = BTreeMap::<&str, Cow<str>>::new();
		if let Some(key) = non_empty(&self.api_key) {
			params.insert("access_key", Cow::Borrowed(key));
		}
		if let Some(base) = non_empty(&self.base) {
			params.insert("base", Cow::Borrowed(base));
		}
		if !self.symbols.is_empty() {
			params.insert("symbols", Cow::Owned(self.symbols.join(",")));
		}

		if params.is_empty() { return None }
		Some(form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish())
	}
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}

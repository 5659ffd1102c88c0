//! Currency rates container.

use std::collections::HashMap;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Exchange rates as returned by the API.
///
/// Every rate is the price of one unit of [`base`](Rates::base) in that
/// currency.
///
/// Decoding is lenient about the shape of the body: missing or `null` fields
/// are left empty, and anything after the first JSON value is ignored. A rate
/// that does not fit in an `f32` is an error.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rates {
	#[serde(default, deserialize_with = "null_as_default")]
	base: String,
	#[serde(default, deserialize_with = "null_as_default")]
	date: String,
	#[serde(default, deserialize_with = "single_precision")]
	rates: HashMap<String, f32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn single_precision<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, f32>, D::Error> {
	let rates = Option::<HashMap<String, f64>>::deserialize(deserializer)?.unwrap_or_default();
	rates.into_iter()
		.map(|(currency, rate)| {
			if rate.is_finite() && rate.abs() <= f64::from(f32::MAX) {
				Ok((currency, rate as f32))
			} else {
				Err(D::Error::custom(format!("rate {rate} for {currency} overflows f32")))
			}
		})
		.collect()
}

impl Rates {
	/// The base currency echoed by the server.
	#[inline] pub fn base(&self) -> &str { &self.base }
	/// The date of the rates, `YYYY-MM-DD`, echoed by the server.
	#[inline] pub fn date(&self) -> &str { &self.date }
	/// Gets the count of rates.
	#[inline] pub fn len(&self) -> usize { self.rates.len() }
	/// Gets whether there are no rates.
	#[inline] pub fn is_empty(&self) -> bool { self.rates.is_empty() }

	/// Iterates over currency rates, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
		self.rates.iter().map(|(currency, &rate)| (currency.as_str(), rate))
	}

	/// Gets the rate for the given currency, if exists.
	///
	/// The base currency is always `1.0`, whether the server listed it or not.
	pub fn get(&self, currency: &str) -> Option<f32> {
		self.rates.get(currency).copied().or_else(|| {
			(!self.base.is_empty() && self.base == currency).then_some(1.0)
		})
	}

	/// Converts an amount between currencies.
	///
	/// Returns [`None`] if either the `from` or `to` currencies are missing.
	pub fn convert(&self, amount: f32, from: &str, to: &str) -> Option<f32> {
		let from_value = self.get(from)?;
		let to_value = self.get(to)?;
		Some(amount * (to_value / from_value))
	}

	/// Takes the currency to rate mapping.
	#[inline] pub fn into_inner(self) -> HashMap<String, f32> { self.rates }

	/// Decodes a response body, ignoring what follows the first JSON value.
	pub(crate) fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
		Self::deserialize(&mut serde_json::Deserializer::from_slice(body))
	}
}

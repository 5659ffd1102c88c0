//! Currency codes served by fixer.io.
//!
//! [`Request`](crate::Request) takes codes as plain strings and passes them
//! through verbatim, so any code the API accepts works. The constants in
//! [`list`] spare the string literals for the common ones.

/// [ISO 4217](https://en.wikipedia.org/wiki/ISO_4217) codes, as `&'static str`.
pub mod list {
	macro_rules! defcurrencies {
		($($id:ident: $name:literal),* $(,)?) => {
			$(
				#[doc = concat!("`", stringify!($id), "`: ", $name, ".")]
				pub const $id: &str = stringify!($id);
			)*

			/// All the listed codes, in alphabetical order.
			pub const ARRAY: [&str; [$(stringify!($id)),*].len()] = [$($id),*];
		};
	}

	defcurrencies!(
		AUD: "Australian dollar",
		BGN: "Bulgarian lev",
		BRL: "Brazilian real",
		CAD: "Canadian dollar",
		CHF: "Swiss franc",
		CNY: "Chinese yuan",
		CZK: "Czech koruna",
		DKK: "Danish krone",
		EUR: "Euro",
		GBP: "Pound sterling",
		HKD: "Hong Kong dollar",
		HRK: "Croatian kuna",
		HUF: "Hungarian forint",
		IDR: "Indonesian rupiah",
		ILS: "Israeli new shekel",
		INR: "Indian rupee",
		JPY: "Japanese yen",
		KRW: "South Korean won",
		MXN: "Mexican peso",
		MYR: "Malaysian ringgit",
		NOK: "Norwegian krone",
		NZD: "New Zealand dollar",
		PHP: "Philippine peso",
		PLN: "Polish złoty",
		RON: "Romanian leu",
		RUB: "Russian ruble",
		SEK: "Swedish krona",
		SGD: "Singapore dollar",
		THB: "Thai baht",
		TRY: "Turkish lira",
		USD: "United States dollar",
		ZAR: "South African rand",
	);
}

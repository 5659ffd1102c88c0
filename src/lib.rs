//! [fixer.io](https://fixer.io/) API library.
//!
//! Configure a [`Request`], then [fetch](Request::get_rates) its [`Rates`]:
//! ```no_run
//! # async fn run() -> Result<(), fixerio::Error> {
//! use fixerio::{Request, currency::list::*};
//!
//! let client = reqwest::Client::new();
//! let rates = Request::new()
//! 	.api_key("…")
//! 	.base(USD)
//! 	.symbols([EUR, GBP])
//! 	.get_rates(&client)
//! 	.await?;
//! println!("1 USD = {:?} EUR", rates.get(EUR));
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

pub mod currency;

mod error;
pub use error::Error;

mod rates;
pub use rates::Rates;

mod request;
pub use request::Request;

mod url;

/// The API host.
pub const HOST: &str = "data.fixer.io";
/// The API base path, under [`HOST`].
pub const API_PATH: &str = "api";

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fixerio::Request;
use tracing_subscriber::{EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
pub struct Cli {
	/// API access key.
	#[arg(long, env = "FIXER_API_KEY")]
	api_key: Option<String>,
	/// Use plain HTTP (required by free plans).
	#[arg(long)]
	insecure: bool,
	/// Rates of a past date (YYYY-MM-DD) instead of the latest.
	#[arg(long)]
	date: Option<NaiveDate>,
	/// Enable verbose logging.
	#[arg(short, long)]
	verbose: bool,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Rates {
		#[arg(long)]
		base: Option<String>,
		currencies: Vec<String>,
	},
	Convert {
		from: String,
		to: String,
		amount: f32,
	},
	Url {
		#[arg(long)]
		base: Option<String>,
		currencies: Vec<String>,
	},
}

fn init_logging(verbose: bool) {
	let level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::registry()
		.with(fmt::layer().without_time())
		.with(filter)
		.init();
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);
	let client = reqwest::Client::new();

	let mut request = Request::new();
	request.secure(!cli.insecure).historical(cli.date);
	if let Some(key) = cli.api_key { request.api_key(key); }

	match cli.command {
		CliCommand::Rates { base, currencies } => {
			if let Some(base) = base { request.base(base); }
			let rates = request.symbols(currencies).get_rates(&client).await.unwrap();
			println!("Fetched {} rates against {} as of {}", rates.len(), rates.base(), rates.date());
			for (currency, value) in rates.iter() { println!("{currency} {value}"); }
		}
		CliCommand::Convert { from, to, amount } => {
			let rates = request.symbols([from.as_str(), to.as_str()]).get_rates(&client).await.unwrap();
			match rates.convert(amount, &from, &to) {
				Some(converted) => println!("{amount} {from} = {converted} {to}"),
				None => eprintln!("no rate for {from} or {to}"),
			}
		}
		CliCommand::Url { base, currencies } => {
			if let Some(base) = base { request.base(base); }
			println!("{}", request.symbols(currencies).url());
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_parse_date() {
		let cli = Cli::try_parse_from(["cli", "--insecure", "--date", "2016-06-09", "rates", "--base", "GBP", "EUR", "USD"]).unwrap();
		assert!(cli.insecure);
		assert_eq!(cli.date, NaiveDate::from_ymd_opt(2016, 6, 9));
		match cli.command {
			CliCommand::Rates { base, currencies } => {
				assert_eq!(base.as_deref(), Some("GBP"));
				assert_eq!(currencies, ["EUR", "USD"]);
			}
			command => panic!("unexpected command {command:?}"),
		}
	}

	#[test]
	fn test_reject_bad_date() {
		assert!(Cli::try_parse_from(["cli", "--date", "2016-13-40", "url"]).is_err());
	}
}

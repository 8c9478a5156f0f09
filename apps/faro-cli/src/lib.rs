use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use faro_domain::records::{LeadDraft, LeadRecord, TenderRecord};
use faro_service::RelevanceEngine;

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	/// Rule table TOML file.
	#[arg(long, short = 'r', value_name = "FILE")]
	pub rules: PathBuf,
	#[arg(long, default_value = "info")]
	pub log_level: String,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Score every tender in a JSON file and print the results.
	Score {
		#[arg(long, value_name = "FILE")]
		tenders: PathBuf,
	},
	/// Re-score every non-discarded tender and print the batch report.
	Reclassify {
		#[arg(long, value_name = "FILE")]
		tenders: PathBuf,
		/// Where to write the rescored records; omitted means report only.
		#[arg(long, value_name = "FILE")]
		out: Option<PathBuf>,
	},
	/// Check an import batch against the existing leads.
	FindDuplicates {
		#[arg(long, value_name = "FILE")]
		rows: PathBuf,
		#[arg(long, value_name = "FILE")]
		leads: PathBuf,
	},
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	init_tracing(&args.log_level);

	let cfg = faro_config::load(&args.rules)?;
	let engine = RelevanceEngine::new(cfg);

	match args.command {
		Command::Score { tenders } => {
			let mut records: Vec<TenderRecord> = read_json(&tenders)?;

			for tender in &mut records {
				let result = engine.analyze(tender)?;

				println!("{}", serde_json::to_string_pretty(&result)?);
			}

			Ok(())
		},
		Command::Reclassify { tenders, out } => {
			let mut records: Vec<TenderRecord> = read_json(&tenders)?;
			let report = engine.reclassify_all(&mut records)?;

			println!("{}", serde_json::to_string_pretty(&report)?);

			if let Some(out) = out {
				fs::write(&out, serde_json::to_vec_pretty(&records)?)
					.wrap_err_with(|| format!("Failed to write {}.", out.display()))?;
				tracing::info!(path = %out.display(), "Rescored records written.");
			}

			Ok(())
		},
		Command::FindDuplicates { rows, leads } => {
			let rows: Vec<LeadDraft> = read_json(&rows)?;
			let leads: Vec<LeadRecord> = read_json(&leads)?;
			let plan = engine.plan_import(&rows, &leads)?;

			println!("{}", serde_json::to_string_pretty(&plan)?);
			println!("{}", serde_json::to_string_pretty(&plan.summary())?);

			Ok(())
		},
	}
}

fn read_json<T>(path: &PathBuf) -> color_eyre::Result<T>
where
	T: DeserializeOwned,
{
	let raw = fs::read_to_string(path)
		.wrap_err_with(|| format!("Failed to read {}.", path.display()))?;

	serde_json::from_str(&raw)
		.map_err(|err| eyre::eyre!("Failed to parse {}: {err}.", path.display()))
}

fn init_tracing(log_level: &str) {
	let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_consistent() {
		Args::command().debug_assert();
	}
}


use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = faro_cli::Args::parse();

	faro_cli::run(args)
}

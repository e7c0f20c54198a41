use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = hogwarts_api::Args::parse();

	hogwarts_api::run(args).await
}

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = hogwarts_browse::Args::parse();

	hogwarts_browse::run(args).await
}

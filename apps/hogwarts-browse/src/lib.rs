pub mod colour;
pub mod input;
pub mod render;

use std::{io, sync::Arc};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use hogwarts_client::{HttpHouseSource, Session, Settings};
use hogwarts_domain::ColourRecognizer;

use crate::{
	colour::CssColourRecognizer,
	input::{Command, HELP},
};

#[derive(Debug, Parser)]
#[command(
	version = hogwarts_cli::VERSION,
	rename_all = "kebab",
	styles = hogwarts_cli::styles(),
)]
pub struct Args {
	#[command(flatten)]
	pub config: hogwarts_cli::ConfigArgs,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = args.config.load()?;

	init_tracing(&config);

	let source = Arc::new(HttpHouseSource::new(&config.client)?);
	let recognizer = CssColourRecognizer::new()?;
	let (mut session, mut load) =
		Session::mount(Settings::from(&config.browse), recognizer, source);
	let mut search_updates = session.search_updates();
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut stdout = tokio::io::stdout();
	let mut loaded = false;

	tracing::info!(api_base = %config.client.api_base, "Browsing houses.");

	write_frame(&mut stdout, &mut session).await?;

	loop {
		tokio::select! {
			outcome = &mut load, if !loaded => {
				loaded = true;
				session.finish_load(outcome);
			},
			changed = search_updates.changed() => {
				if changed.is_err() {
					break;
				}
			},
			line = lines.next_line() => {
				let Some(line) = line? else {
					break;
				};

				match input::parse(&line) {
					Command::Quit => break,
					Command::Help => {
						stdout.write_all(HELP.as_bytes()).await?;
						stdout.flush().await?;

						continue;
					},
					Command::Unknown(raw) => {
						let hint = format!("Unknown command {raw:?}; try /help.\n");

						stdout.write_all(hint.as_bytes()).await?;
						stdout.flush().await?;

						continue;
					},
					command => {
						apply(&mut session, command);
					},
				}
			},
		}

		write_frame(&mut stdout, &mut session).await?;
	}

	session.teardown();

	tracing::debug!("Browse session closed.");

	Ok(())
}

/// Routes an input command to the session. Returns whether state visibly changed.
pub fn apply<R>(session: &mut Session<R>, command: Command) -> bool
where
	R: ColourRecognizer,
{
	match command {
		Command::Search(text) => {
			session.on_search_input(text);

			true
		},
		Command::Clear => {
			session.on_search_input(String::new());

			true
		},
		Command::Trait { house_id, query } => {
			session.on_trait_input(house_id, query);

			true
		},
		Command::Next => session.next_page(),
		Command::Prev => session.prev_page(),
		Command::Help | Command::Quit | Command::Unknown(_) => false,
	}
}

async fn write_frame<W, R>(out: &mut W, session: &mut Session<R>) -> io::Result<()>
where
	W: AsyncWrite + Unpin,
	R: ColourRecognizer,
{
	let frame = render::render(&session.view());

	out.write_all(frame.as_bytes()).await?;
	out.flush().await
}

fn init_tracing(config: &hogwarts_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

use std::path::PathBuf;

use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

use hogwarts_config::Config;

/// Package version, git sha and target triple, shared by every binary in the workspace.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

/// The `-c/--config` flag every binary takes. Flatten it into the binary's `Args`.
#[derive(Clone, Debug, clap::Args)]
pub struct ConfigArgs {
	/// TOML file with the `[service]`, `[client]` and optional `[browse]` sections.
	#[arg(long = "config", short = 'c', value_name = "FILE")]
	pub path: PathBuf,
}
impl ConfigArgs {
	pub fn load(&self) -> hogwarts_config::Result<Config> {
		hogwarts_config::load(&self.path)
	}
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default() | Effects::BOLD | Effects::UNDERLINE)
		.usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.literal(AnsiColor::Red.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Cyan.on_default() | Effects::ITALIC)
		.error(AnsiColor::Red.on_default() | Effects::BOLD)
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Magenta.on_default())
}

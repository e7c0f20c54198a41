/// One line typed at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	/// Plain text replaces the search box contents.
	Search(String),
	Clear,
	Trait { house_id: String, query: String },
	Next,
	Prev,
	Help,
	Quit,
	Unknown(String),
}

pub const HELP: &str = "\
Type text to search houses by name (3+ characters filter).
  /trait <house-id> [query]  filter one house's traits (empty query shows all)
  /next, /prev               move between pages
  /clear                     empty the search box
  /help                      show this help
  /quit                      exit
";

pub fn parse(line: &str) -> Command {
	let line = line.trim_end_matches(['\r', '\n']);
	let Some(rest) = line.strip_prefix('/') else {
		return Command::Search(line.to_string());
	};
	let (name, args) = match rest.split_once(char::is_whitespace) {
		Some((name, args)) => (name, args.trim_start()),
		None => (rest, ""),
	};

	match name {
		"next" | "n" => Command::Next,
		"prev" | "p" => Command::Prev,
		"clear" => Command::Clear,
		"help" | "h" | "?" => Command::Help,
		"quit" | "q" | "exit" => Command::Quit,
		"trait" | "t" => {
			let (house_id, query) = match args.split_once(char::is_whitespace) {
				Some((house_id, query)) => (house_id, query.trim_start()),
				None => (args, ""),
			};

			if house_id.is_empty() {
				return Command::Unknown(line.to_string());
			}

			Command::Trait { house_id: house_id.to_string(), query: query.to_string() }
		},
		_ => Command::Unknown(line.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_text_is_search_verbatim() {
		assert_eq!(parse("gry\n"), Command::Search("gry".to_string()));
		assert_eq!(parse("  huf "), Command::Search("  huf ".to_string()));
		assert_eq!(parse(""), Command::Search(String::new()));
	}

	#[test]
	fn navigation_commands() {
		assert_eq!(parse("/next"), Command::Next);
		assert_eq!(parse("/p"), Command::Prev);
		assert_eq!(parse("/clear\r\n"), Command::Clear);
		assert_eq!(parse("/quit"), Command::Quit);
	}

	#[test]
	fn trait_command_takes_id_and_rest_of_line() {
		assert_eq!(
			parse("/trait 1 hard work"),
			Command::Trait { house_id: "1".to_string(), query: "hard work".to_string() }
		);
		assert_eq!(
			parse("/t 2"),
			Command::Trait { house_id: "2".to_string(), query: String::new() }
		);
		assert_eq!(parse("/trait"), Command::Unknown("/trait".to_string()));
	}

	#[test]
	fn unknown_commands_are_reported() {
		assert_eq!(parse("/wand"), Command::Unknown("/wand".to_string()));
	}
}

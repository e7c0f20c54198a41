use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
	pub id: String,
	pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
	pub id: String,
	pub name: String,
	/// Raw `"Scarlet and Gold"` on the wire, `"Scarlet, Gold"` once normalized.
	#[serde(alias = "colourSpec")]
	pub house_colours: String,
	pub founder: String,
	pub animal: String,
	#[serde(default)]
	pub traits: Vec<Trait>,
}
impl House {
	/// Rewrites the colour field into the comma-joined working form.
	pub fn normalized(mut self) -> Self {
		self.house_colours = normalize_colours(&self.house_colours);

		self
	}
}

/// Splits on the whole word `and` (any case) and on commas, then joins the trimmed segments with
/// `", "`. Words inside a segment keep single spacing, so `"Emerald Green and Silver"` becomes
/// `"Emerald Green, Silver"`.
pub fn normalize_colours(raw: &str) -> String {
	let mut segments = Vec::new();
	let mut current: Vec<&str> = Vec::new();

	for piece in raw.split(',') {
		for word in piece.split_whitespace() {
			if word.eq_ignore_ascii_case("and") {
				flush(&mut segments, &mut current);

				continue;
			}

			current.push(word);
		}

		flush(&mut segments, &mut current);
	}

	segments.join(", ")
}

fn flush(segments: &mut Vec<String>, current: &mut Vec<&str>) {
	if !current.is_empty() {
		segments.push(current.join(" "));
		current.clear();
	}
}

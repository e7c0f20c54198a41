use regex::Regex;

use hogwarts_domain::ColourRecognizer;

/// CSS Color Module Level 4 named colours, sorted for binary search.
const NAMED_COLOURS: [&str; 148] = [
	"aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
	"blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
	"chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
	"darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
	"darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
	"darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
	"deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
	"fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
	"grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
	"lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
	"lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
	"lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
	"lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
	"mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
	"mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
	"mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
	"orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
	"papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
	"red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
	"seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
	"springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
	"wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Keywords that are colours but not in the named table.
const KEYWORDS: [&str; 2] = ["currentcolor", "transparent"];

/// Recognizes what a CSS engine accepts as a `<color>`: named colours, hex notation and the
/// `rgb()`/`hsl()` functional notations. Expects lowercase input, which is what the colour gate
/// passes.
#[derive(Clone, Debug)]
pub struct CssColourRecognizer {
	hex: Regex,
	functional: Regex,
}
impl CssColourRecognizer {
	pub fn new() -> Result<Self, regex::Error> {
		let hex = Regex::new(r"^#(?:[0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$")?;
		let functional = Regex::new(
			r"^(?:rgba?|hsla?)\(\s*[-+]?(?:\d+\.?\d*|\.\d+)(?:%|deg|rad|turn)?(?:\s*[,\s/]\s*[-+]?(?:\d+\.?\d*|\.\d+)%?){2,3}\s*\)$",
		)?;

		Ok(Self { hex, functional })
	}
}
impl ColourRecognizer for CssColourRecognizer {
	fn is_valid(&self, token: &str) -> bool {
		NAMED_COLOURS.binary_search(&token).is_ok()
			|| KEYWORDS.contains(&token)
			|| self.hex.is_match(token)
			|| self.functional.is_match(token)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn recognizer() -> CssColourRecognizer {
		CssColourRecognizer::new().expect("Colour patterns must compile.")
	}

	#[test]
	fn named_table_is_sorted() {
		assert!(NAMED_COLOURS.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn accepts_named_colours_and_keywords() {
		let css = recognizer();

		for token in ["gold", "black", "silver", "rebeccapurple", "aliceblue", "transparent"] {
			assert!(css.is_valid(token), "{token}");
		}
	}

	#[test]
	fn rejects_non_css_names() {
		let css = recognizer();

		for token in ["scarlet", "bronze", "notacolor", "", "Gold"] {
			assert!(!css.is_valid(token), "{token}");
		}
	}

	#[test]
	fn accepts_hex_lengths_three_four_six_eight() {
		let css = recognizer();

		for token in ["#fff", "#ffff", "#ae0001", "#ae0001cc"] {
			assert!(css.is_valid(token), "{token}");
		}
		for token in ["#ff", "#fffff", "#ggg", "fff"] {
			assert!(!css.is_valid(token), "{token}");
		}
	}

	#[test]
	fn accepts_space_separated_functional_notation() {
		let css = recognizer();

		assert!(css.is_valid("rgb(174 0 1)"));
		assert!(css.is_valid("rgb(174 0 1 / 50%)"));
		assert!(css.is_valid("hsl(120deg 100% 25%)"));
		assert!(!css.is_valid("rgb(174)"));
		assert!(!css.is_valid("rgb(1 2 3"));
	}
}

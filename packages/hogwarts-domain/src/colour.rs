use std::fmt::{self, Display, Formatter};

/// Light-to-dark stops used whenever a colour list is rejected.
pub const FALLBACK_STOPS: [&str; 2] = ["white", "black"];

/// Provided by the rendering environment: does its styling engine accept `token` as a colour?
pub trait ColourRecognizer {
	fn is_valid(&self, token: &str) -> bool;
}
impl<F> ColourRecognizer for F
where
	F: Fn(&str) -> bool,
{
	fn is_valid(&self, token: &str) -> bool {
		self(token)
	}
}

/// Left-to-right linear gradient through `stops`, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
	stops: Vec<String>,
	fallback: bool,
}
impl Gradient {
	pub fn fallback() -> Self {
		Self { stops: FALLBACK_STOPS.iter().map(|s| s.to_string()).collect(), fallback: true }
	}

	pub fn stops(&self) -> &[String] {
		&self.stops
	}

	pub fn is_fallback(&self) -> bool {
		self.fallback
	}

	pub fn css(&self) -> String {
		format!("linear-gradient(to right, {})", self.stops.join(", "))
	}
}
impl Display for Gradient {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.css())
	}
}

/// Comma-split, trimmed, lowercased, non-empty segments of a working colour string.
pub fn candidate_colours(working: &str) -> Vec<String> {
	working
		.split(',')
		.map(|segment| segment.trim().to_lowercase())
		.filter(|segment| !segment.is_empty())
		.collect()
}

/// Accepts the candidate list only when it has at least two entries and the recognizer accepts
/// every one of them; otherwise returns [`Gradient::fallback`].
pub fn gradient<R>(working: &str, recognizer: &R) -> Gradient
where
	R: ColourRecognizer + ?Sized,
{
	let candidates = candidate_colours(working);

	if candidates.len() < 2 {
		return Gradient::fallback();
	}
	if !candidates.iter().all(|token| recognizer.is_valid(token)) {
		return Gradient::fallback();
	}

	Gradient { stops: candidates, fallback: false }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn basic(token: &str) -> bool {
		matches!(token, "red" | "blue" | "scarlet" | "gold" | "#fff")
	}

	#[test]
	fn two_valid_colours_make_a_gradient() {
		let g = gradient("red, blue", &basic);

		assert!(!g.is_fallback());
		assert_eq!(g.stops(), ["red", "blue"]);
		assert_eq!(g.css(), "linear-gradient(to right, red, blue)");
	}

	#[test]
	fn segments_are_trimmed_and_lowercased_before_recognition() {
		let g = gradient("  Scarlet ,GOLD,, #FFF ", &basic);

		assert_eq!(g.stops(), ["scarlet", "gold", "#fff"]);
	}

	#[test]
	fn rejected_inputs_fall_back() {
		for input in ["red", "red, notacolor", "", " , ", "red,"] {
			let g = gradient(input, &basic);

			assert!(g.is_fallback(), "input {input:?}");
			assert_eq!(g.css(), "linear-gradient(to right, white, black)");
		}
	}

	#[test]
	fn recognizer_sees_each_candidate_once_in_order() {
		let seen = std::cell::RefCell::new(Vec::new());
		let recorder = |token: &str| {
			seen.borrow_mut().push(token.to_string());

			true
		};

		gradient("a, b, c", &recorder);

		assert_eq!(*seen.borrow(), vec!["a", "b", "c"]);
	}
}

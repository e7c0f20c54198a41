use std::fmt::Write;

use hogwarts_client::{HouseCard, View};
use hogwarts_domain::PageInfo;

pub const LOADING: &str = "Loading houses...";

/// Draws one frame. The frame never mixes the loading indicator with cards or page controls.
pub fn render(view: &View) -> String {
	let mut out = String::new();

	let _ = writeln!(out, "────────────────────────────────────────");
	let _ = writeln!(out, "Search: {:?}", view.search);

	if view.loading {
		let _ = writeln!(out, "{LOADING}");

		return out;
	}
	if view.cards.is_empty() {
		let _ = writeln!(out, "No houses match.");

		return out;
	}

	for card in &view.cards {
		render_card(&mut out, card);
	}

	if let Some(page) = view.pagination {
		render_pagination(&mut out, page);
	}

	out
}

fn render_card(out: &mut String, card: &HouseCard) {
	let _ = writeln!(out);
	let _ = writeln!(out, "[{}] {:<32} {}", card.id, card.name, card.animal);
	let _ = writeln!(out, "    {}", card.gradient);
	let _ = writeln!(out, "    Founder: {}", card.founder);

	if card.trait_query.is_empty() {
		let _ = writeln!(out, "    Traits:");
	} else {
		let _ = writeln!(out, "    Traits matching {:?}:", card.trait_query);
	}
	for name in &card.traits {
		let _ = writeln!(out, "      - {name}");
	}
}

fn render_pagination(out: &mut String, page: PageInfo) {
	let prev = if page.has_prev() { "< Prev" } else { "  ----" };
	let next = if page.has_next() { "Next >" } else { "----  " };

	let _ = writeln!(out);
	let _ = writeln!(out, "{prev}   Page {} of {}   {next}", page.current_page, page.total_pages);
}

#[cfg(test)]
mod tests {
	use hogwarts_domain::Gradient;

	use super::*;

	fn card() -> HouseCard {
		HouseCard {
			id: "1".to_string(),
			name: "Gryffindor".to_string(),
			animal: "lion".to_string(),
			founder: "Godric".to_string(),
			gradient: Gradient::fallback(),
			trait_query: "bo".to_string(),
			traits: vec!["bold".to_string()],
		}
	}

	#[test]
	fn loading_frame_has_no_cards_or_controls() {
		let frame = render(&View {
			loading: true,
			search: String::new(),
			cards: Vec::new(),
			visible_count: 0,
			pagination: None,
		});

		assert!(frame.contains(LOADING));
		assert!(!frame.contains("Page"));
	}

	#[test]
	fn empty_result_is_distinct_from_loading() {
		let frame = render(&View {
			loading: false,
			search: "xyz".to_string(),
			cards: Vec::new(),
			visible_count: 0,
			pagination: None,
		});

		assert!(frame.contains("No houses match."));
		assert!(!frame.contains(LOADING));
		assert!(!frame.contains("Page"));
	}

	#[test]
	fn card_frame_shows_gradient_traits_and_page() {
		let frame = render(&View {
			loading: false,
			search: "gry".to_string(),
			cards: vec![card()],
			visible_count: 1,
			pagination: PageInfo::new(1, 1),
		});

		assert!(frame.contains("Gryffindor"));
		assert!(frame.contains("linear-gradient(to right, white, black)"));
		assert!(frame.contains("Traits matching \"bo\":"));
		assert!(frame.contains("- bold"));
		assert!(frame.contains("Page 1 of 1"));
	}
}

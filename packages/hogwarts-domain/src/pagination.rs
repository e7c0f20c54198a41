/// Number of pages needed for `visible` items. Zero items means zero pages, not one empty page.
pub fn page_count(visible: usize, page_size: usize) -> usize {
	if page_size == 0 {
		return 0;
	}

	visible.div_ceil(page_size)
}

/// The `current_page` window (1-based) of `items`, clamped to what exists. Page 0 and pages past
/// the end are empty.
pub fn slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
	let Some(index) = current_page.checked_sub(1) else {
		return &[];
	};
	let start = index.saturating_mul(page_size).min(items.len());
	let end = start.saturating_add(page_size).min(items.len());

	&items[start..end]
}

/// What the pagination control renders. Only produced when there is at least one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
	pub current_page: usize,
	pub total_pages: usize,
}
impl PageInfo {
	pub fn new(current_page: usize, total_pages: usize) -> Option<Self> {
		(total_pages > 0).then_some(Self { current_page, total_pages })
	}

	pub fn has_prev(&self) -> bool {
		self.current_page > 1
	}

	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
	current_page: usize,
	page_size: usize,
}
impl PageState {
	/// `page_size` of zero is treated as one.
	pub fn new(page_size: usize) -> Self {
		Self { current_page: 1, page_size: page_size.max(1) }
	}

	pub fn current_page(&self) -> usize {
		self.current_page
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn reset(&mut self) {
		self.current_page = 1;
	}

	/// No-op on the first page.
	pub fn prev(&mut self) -> bool {
		if self.current_page <= 1 {
			return false;
		}

		self.current_page -= 1;

		true
	}

	/// No-op on the last page, or when there are no pages at all.
	pub fn next(&mut self, total_pages: usize) -> bool {
		if self.current_page >= total_pages {
			return false;
		}

		self.current_page += 1;

		true
	}

	/// Pulls the page back into `[1, max(1, total_pages)]`.
	pub fn clamp(&mut self, total_pages: usize) {
		self.current_page = self.current_page.clamp(1, total_pages.max(1));
	}

	pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		slice(items, self.current_page, self.page_size)
	}
}

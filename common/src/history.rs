/// One user input paired with its (possibly still-empty) response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
	pub input: String,
	pub response: String,
}

/// Ordered, append-only list of submissions. Entries are never reordered or
/// deduplicated; a failed submission keeps its empty response permanently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
	entries: Vec<HistoryEntry>,
}

impl History {
	/// Appends a new entry for a submission that has not resolved yet.
	pub fn push_pending(&mut self, input: impl Into<String>) {
		self.entries.push(HistoryEntry { input: input.into(), response: String::new() });
	}

	/// Stores the resolved response into the newest entry. Does nothing on an
	/// empty history.
	pub fn complete_last(&mut self, response: impl Into<String>) {
		if let Some(entry) = self.entries.last_mut() {
			entry.response = response.into();
		}
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

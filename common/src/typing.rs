/// Drives the typing-reveal animation for one response: successive calls to
/// [`advance`](Self::advance) yield the ordered prefixes of the text, one
/// character longer each time. Operates on chars so the reveal never splits a
/// multibyte character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
	chars: Vec<char>,
	shown: usize,
}

impl TypingReveal {
	pub fn new(text: &str) -> Self {
		Self { chars: text.chars().collect(), shown: 0 }
	}

	pub fn is_done(&self) -> bool {
		self.shown >= self.chars.len()
	}

	/// Reveals one more character and returns the new prefix, or `None` once
	/// the full text has been revealed.
	pub fn advance(&mut self) -> Option<String> {
		if self.is_done() {
			return None;
		}
		self.shown += 1;
		Some(self.chars[..self.shown].iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn prefixes(text: &str) -> Vec<String> {
		let mut reveal = TypingReveal::new(text);
		let mut out = Vec::new();
		while let Some(prefix) = reveal.advance() {
			out.push(prefix);
		}
		out
	}

	#[test]
	fn yields_every_prefix_in_order() {
		assert_eq!(prefixes("Hi!"), ["H", "Hi", "Hi!"]);
	}

	#[test]
	fn prefix_count_equals_character_count() {
		let text = "Short summary.";
		let all = prefixes(text);
		assert_eq!(all.len(), text.chars().count());
		assert_eq!(all.last().map(String::as_str), Some(text));
	}

	#[test]
	fn never_splits_multibyte_characters() {
		assert_eq!(prefixes("héllo"), ["h", "hé", "hél", "héll", "héllo"]);
		assert_eq!(prefixes("日本語"), ["日", "日本", "日本語"]);
	}

	#[test]
	fn empty_text_is_done_immediately() {
		let mut reveal = TypingReveal::new("");
		assert!(reveal.is_done());
		assert_eq!(reveal.advance(), None);
	}

	#[test]
	fn advance_after_completion_keeps_returning_none() {
		let mut reveal = TypingReveal::new("ok");
		while reveal.advance().is_some() {}
		assert!(reveal.is_done());
		assert_eq!(reveal.advance(), None);
	}
}

//! Quote store
//!
//! A fixed, ordered list of quotes. Lookups reduce the index modulo the list
//! length, so an out-of-range lookup cannot happen.

/// A single quote and its author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub const fn new(text: &'static str, author: &'static str) -> Self {
        Self { text, author }
    }

    /// Quote text wrapped in typographic quotation marks
    pub fn quoted_text(&self) -> String {
        format!("\u{201C}{}\u{201D}", self.text)
    }

    /// Attribution line shown under the quote
    pub fn attribution(&self) -> String {
        format!("- {}", self.author)
    }
}

/// Built-in quotes, in display order
pub static QUOTES: &[Quote] = &[
    Quote::new(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    Quote::new(
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    Quote::new(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    Quote::new(
        "Imagination is more important than knowledge.",
        "Albert Einstein",
    ),
    Quote::new(
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
    ),
];

/// Ordered, non-empty, immutable quote sequence
#[derive(Debug, Clone, Copy)]
pub struct QuoteList {
    quotes: &'static [Quote],
}

impl QuoteList {
    /// Wrap a static slice, rejecting empty lists and blank entries
    pub fn new(quotes: &'static [Quote]) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::Empty);
        }
        if let Some(index) = quotes
            .iter()
            .position(|q| q.text.trim().is_empty() || q.author.trim().is_empty())
        {
            return Err(QuoteError::Blank { index });
        }
        Ok(Self { quotes })
    }

    /// The built-in quote list, validated at boot
    pub fn builtin() -> Self {
        match Self::new(QUOTES) {
            Ok(list) => list,
            Err(e) => {
                // QUOTES is a non-empty literal, so lookups stay in bounds
                tracing::warn!("Built-in quotes failed validation: {}", e);
                Self { quotes: QUOTES }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Look up a quote; the index wraps around the end of the list
    pub fn get(&self, index: usize) -> &'static Quote {
        &self.quotes[index % self.quotes.len()]
    }
}

/// Errors for malformed quote lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    Empty,
    Blank { index: usize },
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteError::Empty => write!(f, "quote list is empty"),
            QuoteError::Blank { index } => {
                write!(f, "quote {} has an empty text or author", index)
            }
        }
    }
}

impl std::error::Error for QuoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    static BLANK_AUTHOR: &[Quote] = &[Quote::new("Fine", "Someone"), Quote::new("Text", " ")];

    #[test]
    fn builtin_list_is_valid() {
        let list = QuoteList::new(QUOTES).expect("built-in quotes must be valid");
        assert_eq!(list.len(), 5);
        assert_eq!(list.get(0).author, "Steve Jobs");
        assert_eq!(list.get(4).author, "Tony Robbins");
    }

    #[test]
    fn builtin_runs_validation() {
        let validated = QuoteList::new(QUOTES).expect("built-in quotes must be valid");
        let builtin = QuoteList::builtin();
        assert_eq!(builtin.len(), validated.len());
        assert_eq!(builtin.get(2), validated.get(2));
    }

    #[test]
    fn get_wraps_past_the_end() {
        let list = QuoteList::builtin();
        assert_eq!(list.get(5), list.get(0));
        assert_eq!(list.get(7), list.get(2));
        assert_eq!(list.get(usize::MAX), list.get(usize::MAX % 5));
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(QuoteList::new(&[]).unwrap_err(), QuoteError::Empty);
    }

    #[test]
    fn rejects_blank_entries() {
        assert_eq!(
            QuoteList::new(BLANK_AUTHOR).unwrap_err(),
            QuoteError::Blank { index: 1 }
        );
    }

    #[test]
    fn formatting_helpers() {
        let quote = QuoteList::builtin().get(3);
        assert_eq!(
            quote.quoted_text(),
            "\u{201C}Imagination is more important than knowledge.\u{201D}"
        );
        assert_eq!(quote.attribution(), "- Albert Einstein");
    }
}

//! Word-by-word text reveal
//!
//! Splits a string into words and fades them in one after another. Word `i`
//! starts at `i * stagger` and is fully visible `duration` later.

use std::ops::Range;
use std::time::Duration;

/// Delay between the start of consecutive words
pub const WORD_STAGGER: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq)]
pub struct TextReveal {
    words: Vec<String>,
    duration: Duration,
    stagger: Duration,
}

impl TextReveal {
    pub fn new(text: &str, duration: Duration) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
            duration,
            stagger: WORD_STAGGER,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Time until the last word is fully visible
    pub fn total_duration(&self) -> Duration {
        let last = self.words.len().saturating_sub(1) as u32;
        self.stagger * last + self.duration
    }

    /// Opacity (0.0 to 1.0) of word `index` after `elapsed`
    pub fn word_opacity(&self, index: usize, elapsed: Duration) -> f32 {
        if index >= self.words.len() {
            return 0.0;
        }
        let start = self.stagger * index as u32;
        let Some(local) = elapsed.checked_sub(start) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (local.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }

    /// Greedy line breaking: word ranges whose joined length fits `max_chars`.
    ///
    /// A single word longer than `max_chars` gets a line of its own.
    pub fn lines(&self, max_chars: usize) -> Vec<Range<usize>> {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut width = 0;

        for (i, word) in self.words.iter().enumerate() {
            let len = word.chars().count();
            let needed = if i == start { len } else { width + 1 + len };
            if i > start && needed > max_chars {
                lines.push(start..i);
                start = i;
                width = len;
            } else {
                width = needed;
            }
        }
        if start < self.words.len() {
            lines.push(start..self.words.len());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> TextReveal {
        TextReveal::new(
            "Imagination is more important than knowledge.",
            Duration::from_secs(2),
        )
    }

    #[test]
    fn splits_on_whitespace() {
        let reveal = TextReveal::new("  two   words ", Duration::from_secs(1));
        assert_eq!(reveal.words(), ["two", "words"]);
    }

    #[test]
    fn words_start_staggered() {
        let reveal = reveal();
        assert_eq!(reveal.word_opacity(0, Duration::ZERO), 0.0);
        assert_eq!(reveal.word_opacity(1, Duration::from_millis(200)), 0.0);
        assert!((reveal.word_opacity(0, Duration::from_secs(1)) - 0.5).abs() < 1e-5);
        assert_eq!(reveal.word_opacity(0, Duration::from_secs(2)), 1.0);
        assert!(reveal.word_opacity(5, Duration::from_secs(2)) < 1.0);
    }

    #[test]
    fn completes_after_total_duration() {
        let reveal = reveal();
        // 6 words: 5 * 200ms + 2s
        assert_eq!(reveal.total_duration(), Duration::from_millis(3000));
        assert!(!reveal.is_complete(Duration::from_millis(2999)));
        assert!(reveal.is_complete(Duration::from_millis(3000)));
        assert_eq!(reveal.word_opacity(5, Duration::from_millis(3000)), 1.0);
    }

    #[test]
    fn out_of_range_word_is_hidden() {
        assert_eq!(reveal().word_opacity(99, Duration::from_secs(60)), 0.0);
    }

    #[test]
    fn empty_text_is_immediately_complete_after_duration() {
        let reveal = TextReveal::new("", Duration::from_secs(2));
        assert!(reveal.words().is_empty());
        assert_eq!(reveal.total_duration(), Duration::from_secs(2));
        assert!(reveal.lines(10).is_empty());
    }

    #[test]
    fn line_breaking() {
        let reveal = reveal();
        // "Imagination is more" = 19, adding " important" would be 29
        assert_eq!(reveal.lines(20), vec![0..3, 3..5, 5..6]);
        assert_eq!(reveal.lines(200), vec![0..6]);
        // Every word alone when the limit is tiny
        assert_eq!(reveal.lines(1).len(), 6);
    }
}

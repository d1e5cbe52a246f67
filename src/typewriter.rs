use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared switch that stops a [`Typewriter`] from emitting anything further.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Reveals `text` one character per tick as successively longer prefixes.
///
/// The sequence is finite and cannot be rewound: once the full text has been
/// produced, or the typewriter was cancelled, `next` keeps returning `None`.
#[derive(Debug)]
pub struct Typewriter {
    text: String,
    // byte offset just past each char
    ends: Vec<usize>,
    emitted: usize,
    cancel: CancelHandle,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            ends,
            emitted: 0,
            cancel: CancelHandle::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once the whole text has been emitted.
    pub fn is_finished(&self) -> bool {
        self.emitted == self.ends.len()
    }

    /// The most recently emitted prefix, empty before the first tick.
    pub fn current(&self) -> &str {
        match self.emitted {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_cancelled() || self.is_finished() {
            return None;
        }
        self.emitted += 1;
        Some(self.current().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_cancelled() {
            return (0, Some(0));
        }
        let left = self.ends.len() - self.emitted;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_ticks_then_stop() {
        let mut tw = Typewriter::new("AB");
        assert_eq!(tw.next().as_deref(), Some("A"));
        assert_eq!(tw.next().as_deref(), Some("AB"));
        assert!(tw.is_finished());
        assert_eq!(tw.next(), None);
        assert_eq!(tw.next(), None);
    }

    #[test]
    fn test_collects_all_prefixes() {
        let frames: Vec<String> = Typewriter::new("Dev").collect();
        assert_eq!(frames, vec!["D", "De", "Dev"]);
    }

    #[test]
    fn test_cancel_after_first_tick() {
        let mut tw = Typewriter::new("AB");
        let handle = tw.cancel_handle();
        assert_eq!(tw.next().as_deref(), Some("A"));
        handle.cancel();
        assert!(tw.is_cancelled());
        assert_eq!(tw.next(), None);
        assert_eq!(tw.current(), "A");
        assert_eq!(tw.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_cancel_before_start() {
        let tw = Typewriter::new("hello");
        tw.cancel();
        assert_eq!(tw.count(), 0);
    }

    #[test]
    fn test_empty_text() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_finished());
        assert_eq!(tw.next(), None);
        assert_eq!(tw.current(), "");
    }

    #[test]
    fn test_multibyte_chars() {
        let frames: Vec<String> = Typewriter::new("é✓a").collect();
        assert_eq!(frames, vec!["é", "é✓", "é✓a"]);
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.size_hint(), (3, Some(3)));
        tw.next();
        assert_eq!(tw.size_hint(), (2, Some(2)));
    }
}

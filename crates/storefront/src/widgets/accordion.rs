//! Single-open accordion (FAQ panel).

/// Tracks which of `len` entries is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    /// Icon shown on a closed entry.
    pub const CLOSED_ICON: char = '+';
    /// Icon shown on the open entry.
    pub const OPEN_ICON: char = '−';

    /// An accordion over `len` entries, all closed.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Close every entry, then open `index` unless it was the open one.
    /// Out-of-range indices just close everything.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.open == Some(index);
        self.open = None;
        if !was_open && index < self.len {
            self.open = Some(index);
        }
    }

    /// Currently open entry.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Whether entry `index` is open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Icon for entry `index`.
    #[must_use]
    pub fn icon(&self, index: usize) -> char {
        if self.is_open(index) {
            Self::OPEN_ICON
        } else {
            Self::CLOSED_ICON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_entry_open() {
        let mut faq = Accordion::new(3);
        faq.toggle(0);
        assert!(faq.is_open(0));
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert_eq!(faq.icon(2), '−');
        assert_eq!(faq.icon(0), '+');
    }

    #[test]
    fn test_toggle_open_entry_closes_it() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open(), None);
    }

    #[test]
    fn test_out_of_range_closes_all() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        faq.toggle(7);
        assert_eq!(faq.open(), None);
    }
}

//! Rotating image slider.

/// Index of the visible slide out of `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slider {
    current: usize,
    len: usize,
}

impl Slider {
    /// A slider over `len` slides showing the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Show slide `n`, clamped to the last slide.
    pub fn go_to(&mut self, n: usize) {
        self.current = n.min(self.len.saturating_sub(1));
    }

    /// Auto-advance to the next slide, wrapping to the first.
    pub const fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    /// Horizontal offset of the slide strip, in percent.
    #[must_use]
    pub const fn offset_percent(&self) -> usize {
        self.current * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut slider = Slider::new(3);
        slider.advance();
        slider.advance();
        assert_eq!(slider.current(), 2);
        slider.advance();
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_empty_slider_never_moves() {
        let mut slider = Slider::new(0);
        slider.advance();
        slider.go_to(4);
        assert_eq!(slider.current(), 0);
        assert!(slider.is_empty());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut slider = Slider::new(3);
        slider.go_to(1);
        assert_eq!(slider.current(), 1);
        assert_eq!(slider.offset_percent(), 100);
        slider.go_to(10);
        assert_eq!(slider.current(), 2);
    }
}

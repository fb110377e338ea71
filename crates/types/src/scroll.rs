/// A snapshot of the document's vertical scroll geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical offset from the top of the document.
    pub scroll_top: f64,
    /// Full height of the document content.
    pub scroll_height: f64,
    /// Height of the visible viewport.
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// The distance that can actually be scrolled. Zero or negative when the
    /// content fits in the viewport.
    pub fn scrollable_height(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrollable_height() {
        assert_eq!(ScrollMetrics::new(0.0, 3000.0, 800.0).scrollable_height(), 2200.0);
        assert_eq!(ScrollMetrics::new(0.0, 600.0, 800.0).scrollable_height(), -200.0);
    }
}

//! The reading progress bar.

use log::trace;
use margin_traits::{View, ViewError};
use margin_types::ScrollMetrics;

/// Percentage of the scrollable distance already scrolled, in `[0, 100]`.
///
/// A page that fits in the viewport has nothing to scroll and reports `0`.
/// Overscroll (negative offsets, or offsets past the end during elastic
/// bounce) is clamped.
pub fn scroll_percent(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable_height();
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.scroll_top.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Writes the scroll percentage as the width of the progress element.
#[derive(Debug, Clone)]
pub struct ScrollProgress<N> {
    bar: N,
}

impl<N: Clone> ScrollProgress<N> {
    pub fn new(bar: N) -> Self {
        Self { bar }
    }

    /// Reads the current scroll position and updates the bar. Returns the
    /// percentage written.
    pub fn update<V: View<Node = N>>(&self, view: &mut V) -> Result<f64, ViewError> {
        let percent = scroll_percent(&view.scroll_metrics());
        trace!("Scroll progress {}%", percent);
        view.set_style_property(&self.bar, "width", &format!("{}%", percent))?;
        Ok(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use margin_dom::Document;

    #[test]
    fn test_top_and_bottom_of_page() {
        assert_eq!(scroll_percent(&ScrollMetrics::new(0.0, 3000.0, 1000.0)), 0.0);
        assert_eq!(scroll_percent(&ScrollMetrics::new(2000.0, 3000.0, 1000.0)), 100.0);
        assert_eq!(scroll_percent(&ScrollMetrics::new(500.0, 3000.0, 1000.0)), 25.0);
    }

    #[test]
    fn test_unscrollable_page_reports_zero() {
        assert_eq!(scroll_percent(&ScrollMetrics::new(0.0, 800.0, 800.0)), 0.0);
        assert_eq!(scroll_percent(&ScrollMetrics::new(0.0, 600.0, 800.0)), 0.0);
        assert_eq!(scroll_percent(&ScrollMetrics::new(0.0, f64::NAN, 800.0)), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(scroll_percent(&ScrollMetrics::new(-40.0, 3000.0, 1000.0)), 0.0);
        assert_eq!(scroll_percent(&ScrollMetrics::new(2100.0, 3000.0, 1000.0)), 100.0);
    }

    #[test]
    fn test_update_writes_width() {
        let mut doc = Document::default();
        let root = doc.root();
        let bar = doc.append_element(root, "div", &[("id", "progress")]).unwrap();
        doc.set_scroll(ScrollMetrics::new(1000.0, 3000.0, 1000.0));

        let progress = ScrollProgress::new(bar);
        assert_eq!(progress.update(&mut doc).unwrap(), 50.0);
        assert_eq!(doc.style(bar, "width"), Some("50%"));

        doc.set_scroll_top(0.0);
        progress.update(&mut doc).unwrap();
        assert_eq!(doc.style(bar, "width"), Some("0%"));
    }
}

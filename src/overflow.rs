//! Now-playing overflow detection and the marquee that scrolls oversized text.

mod marquee;

pub use marquee::Marquee;

/// Supplies the two widths the overflow decision needs, in terminal columns.
pub trait MeasurementProvider {
    /// Natural width of the text, unclipped.
    fn content_width(&self) -> usize;
    /// Width available to the text.
    fn container_width(&self) -> usize;
}

/// Fixed measurement, e.g. taken from the layout of the last frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub content: usize,
    pub container: usize,
}

impl MeasurementProvider for Measurement {
    fn content_width(&self) -> usize {
        self.content
    }

    fn container_width(&self) -> usize {
        self.container
    }
}

#[derive(Debug, Default)]
pub struct OverflowDetector {
    overflowing: bool,
}

impl OverflowDetector {
    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    /// Re-measure and store whether the content is wider than its container.
    pub fn check<M: MeasurementProvider + ?Sized>(&mut self, m: &M) -> bool {
        self.overflowing = m.content_width() > m.container_width();
        self.overflowing
    }
}

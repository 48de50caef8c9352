use unicode_width::UnicodeWidthChar;

/// Scroll state of an overflowing line.
///
/// The text is treated as a ring of `text + gap` glyphs; each step shifts
/// the visible window one glyph to the left. Windows are cut by terminal
/// column width, so double-width glyphs count twice.
#[derive(Debug, Default, Clone)]
pub struct Marquee {
    offset: usize,
}

impl Marquee {
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn step(&mut self, text: &str, gap: usize) {
        let period = text.chars().count() + gap;
        self.offset = if period == 0 {
            0
        } else {
            (self.offset + 1) % period
        };
    }

    /// The `width` columns visible at the current offset, padded with spaces
    /// when a double-width glyph does not fit at the right edge.
    pub fn window(&self, text: &str, gap: usize, width: usize) -> String {
        let ring: Vec<char> = text.chars().chain(std::iter::repeat_n(' ', gap)).collect();
        if width == 0 || ring.iter().all(|c| c.width().unwrap_or(0) == 0) {
            return String::new();
        }
        let mut out = String::new();
        let mut used = 0;
        for &c in ring.iter().cycle().skip(self.offset % ring.len()) {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            out.push(c);
            used += w;
            if used == width {
                break;
            }
        }
        out.extend(std::iter::repeat_n(' ', width - used));
        out
    }
}

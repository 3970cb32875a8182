use unicode_width::UnicodeWidthStr;

pub struct TextMetrics {
    pub char_width: f64,
    pub font_size: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            font_size: 12.0,
            padding_x: 4.0,
            padding_y: 2.0,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> f64 {
        let width = UnicodeWidthStr::width(text);
        width as f64 * self.char_width
    }

    /// Size of the backing pill drawn behind a path label.
    pub fn label_box(&self, text: &str) -> (f64, f64) {
        let width = self.text_width(text) + self.padding_x * 2.0;
        let height = self.font_size + self.padding_y * 2.0;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        let m = TextMetrics::default();
        assert_eq!(m.text_width("BLR-MAA"), 7.0 * 7.0);
    }

    #[test]
    fn test_unicode_width() {
        let m = TextMetrics::default();
        // 全角文字は幅2
        assert_eq!(m.text_width("東京"), 4.0 * 7.0);
    }

    #[test]
    fn test_label_box() {
        let m = TextMetrics::default();
        let (w, h) = m.label_box("ABC-DEF");
        assert_eq!(w, 49.0 + 8.0);
        assert_eq!(h, 16.0);
    }
}

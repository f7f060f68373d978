/// The two built-in faces the canvas exposes. Both are among the 14
/// standard PDF fonts, available in every viewer without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// Resource name used in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// BaseFont name for the font dictionary.
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Width of one character in 1/1000 em units, from the Adobe AFM
    /// data for ASCII 32..=126. Characters outside that range get the
    /// space width.
    pub fn char_width(&self, ch: char) -> u16 {
        let code = ch as u32;
        if !(32..=126).contains(&code) {
            return 278;
        }
        let index = (code - 32) as usize;
        match self {
            Font::Helvetica => HELVETICA[index],
            Font::HelveticaBold => HELVETICA_BOLD[index],
        }
    }

    /// Width of a string in points at the given size.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 =
            text.chars().map(|ch| self.char_width(ch) as u32).sum();
        units as f64 * size / 1000.0
    }
}

// AFM widths for ASCII 32..=126, ten codes per row starting at the
// code named in the margin.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // 32
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // 42
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // 52
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // 62
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 72
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 82
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // 92
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 102
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 112
    500, 334, 260, 334, 584,                          // 122
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, // 32
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // 42
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, // 52
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // 62
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // 72
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // 82
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // 92
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 102
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // 112
    500, 389, 280, 389, 584,                          // 122
];

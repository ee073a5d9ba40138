use egui::Color32;

/// Smallest selectable stroke width
pub const MIN_WIDTH: f32 = 1.0;
/// Largest selectable stroke width
pub const MAX_WIDTH: f32 = 10.0;
pub const DEFAULT_WIDTH: f32 = 5.0;

/// The fixed set of colors offered by the doodle color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteColor {
    #[default]
    Black,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Brown,
}

impl PaletteColor {
    /// All palette entries in picker order
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Black,
        PaletteColor::Pink,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Mint,
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Indigo,
        PaletteColor::Purple,
        PaletteColor::Brown,
    ];

    pub fn color32(self) -> Color32 {
        match self {
            PaletteColor::Black => Color32::BLACK,
            PaletteColor::Pink => Color32::from_rgb(255, 45, 85),
            PaletteColor::Red => Color32::from_rgb(255, 59, 48),
            PaletteColor::Orange => Color32::from_rgb(255, 149, 0),
            PaletteColor::Yellow => Color32::from_rgb(255, 204, 0),
            PaletteColor::Green => Color32::from_rgb(52, 199, 89),
            PaletteColor::Mint => Color32::from_rgb(0, 199, 190),
            PaletteColor::Cyan => Color32::from_rgb(50, 173, 230),
            PaletteColor::Blue => Color32::from_rgb(0, 122, 255),
            PaletteColor::Indigo => Color32::from_rgb(88, 86, 214),
            PaletteColor::Purple => Color32::from_rgb(175, 82, 222),
            PaletteColor::Brown => Color32::from_rgb(162, 132, 94),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Pink => "Pink",
            PaletteColor::Red => "Red",
            PaletteColor::Orange => "Orange",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Green => "Green",
            PaletteColor::Mint => "Mint",
            PaletteColor::Cyan => "Cyan",
            PaletteColor::Blue => "Blue",
            PaletteColor::Indigo => "Indigo",
            PaletteColor::Purple => "Purple",
            PaletteColor::Brown => "Brown",
        }
    }
}

/// Clamp a requested width into the selectable range
pub fn clamp_width(width: f32) -> f32 {
    width.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Paint attributes used for the next stroke.
///
/// Changing the brush never touches strokes that already exist, they keep
/// the color and width they were started with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: PaletteColor,
    width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: PaletteColor::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Brush {
    pub fn new(color: PaletteColor, width: f32) -> Self {
        let mut brush = Self::default();
        brush.set_color(color);
        brush.set_width(width);
        brush
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width, clamped to `[MIN_WIDTH, MAX_WIDTH]`. NaN and infinities are ignored.
    pub fn set_width(&mut self, width: f32) {
        if width.is_finite() {
            self.width = clamp_width(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = Brush::default();
        assert_eq!(brush.color(), PaletteColor::Black);
        assert_eq!(brush.width(), 5.0);
    }

    #[test]
    fn test_width_is_clamped() {
        let mut brush = Brush::default();
        brush.set_width(0.2);
        assert_eq!(brush.width(), MIN_WIDTH);
        brush.set_width(42.0);
        assert_eq!(brush.width(), MAX_WIDTH);
        brush.set_width(7.0);
        assert_eq!(brush.width(), 7.0);
    }

    #[test]
    fn test_non_finite_width_ignored() {
        let mut brush = Brush::new(PaletteColor::Red, 3.0);
        brush.set_width(f32::NAN);
        brush.set_width(f32::INFINITY);
        assert_eq!(brush.width(), 3.0);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in PaletteColor::ALL.iter().enumerate() {
            for b in &PaletteColor::ALL[i + 1..] {
                assert_ne!(a.color32(), b.color32(), "{} vs {}", a.name(), b.name());
            }
        }
    }
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Bar colour of both charts (`#0083B8`).
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0x83, 0xB8);

/// Colour of the rating stars.
pub const STAR: Color32 = Color32::from_rgb(0xF5, 0xB7, 0x01);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Bar colours for `n` bars: the accent colour when `distinct` is off,
/// otherwise one palette colour per bar.
pub fn bar_colors(n: usize, distinct: bool) -> Vec<Color32> {
    if distinct {
        generate_palette(n)
    } else {
        vec![ACCENT; n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn single_colour_bars_use_accent() {
        assert_eq!(bar_colors(3, false), vec![ACCENT; 3]);
        assert_eq!(bar_colors(3, true).len(), 3);
    }
}

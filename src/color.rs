use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::alerts::Severity;
use crate::data::model::Pollutant;

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
            // Start at cyan so the first bar matches the header colour.
            let hue = (190.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Bar colour for a pollutant.
pub fn pollutant_color(pollutant: Pollutant) -> Color32 {
    generate_palette(Pollutant::ALL.len())[pollutant.index()]
}

/// Bars over their safe limit are drawn in this colour.
pub const ALERT_COLOR: Color32 = Color32::from_rgb(211, 47, 47);

pub const HEADER_BG: Color32 = Color32::from_rgb(0xe0, 0xf7, 0xfa);
pub const HEADER_TITLE: Color32 = Color32::from_rgb(0x00, 0x60, 0x64);
pub const HEADER_SUBTITLE: Color32 = Color32::from_rgb(0x00, 0x79, 0x6b);

/// Status colour for a severity level.
pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Good => Color32::from_rgb(46, 125, 50),
        Severity::Moderate => Color32::from_rgb(249, 168, 37),
        Severity::Hazardous => ALERT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colors = generate_palette(Pollutant::ALL.len());
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }
}

use ratatui::style::Color;

use crate::logic::SentimentVariant;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used as text color on bright badges.
    pub crust: Color,
    /// Subtle surface color for borders.
    pub surface2: Color,
    /// Muted overlay color for secondary text and neutral badges.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for the loading indicator.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Foreground of the selected table row.
    pub lavender: Color,
}

impl Theme {
    /// What: Badge background color for a sentiment variant.
    ///
    /// Inputs:
    /// - `variant`: Derived sentiment variant
    ///
    /// Output:
    /// - Green for success, red for danger, muted overlay for neutral
    #[must_use]
    pub const fn badge_color(&self, variant: SentimentVariant) -> Color {
        match variant {
            SentimentVariant::Success => self.green,
            SentimentVariant::Danger => self.red,
            SentimentVariant::Neutral => self.overlay1,
        }
    }
}

/// Catppuccin Mocha.
pub(crate) const DEFAULT_THEME: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    crust: Color::Rgb(17, 17, 27),       // #11111b
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    green: Color::Rgb(166, 227, 161),    // #a6e3a1
    red: Color::Rgb(243, 139, 168),      // #f38ba8
    lavender: Color::Rgb(180, 190, 254), // #b4befe
};

/// Resolved runtime settings.
///
/// `base_url` is the only recognized option; it has no compiled-in default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the interaction-history service.
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_are_distinct_per_variant() {
        let th = DEFAULT_THEME;
        let colors = [
            th.badge_color(SentimentVariant::Success),
            th.badge_color(SentimentVariant::Danger),
            th.badge_color(SentimentVariant::Neutral),
        ];
        assert_eq!(colors[0], th.green);
        assert_eq!(colors[1], th.red);
        assert_eq!(colors[2], th.overlay1);
        assert_ne!(colors[0], colors[1]);
    }
}

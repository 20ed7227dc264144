//! Clinical color palette and preset styles.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the screening UI.
pub struct Theme;

impl Theme {
    /// Indigo - primary accent
    pub const PRIMARY: Color = Color::Rgb(99, 102, 241); // #6366F1

    /// Lighter indigo for focus highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(165, 180, 252); // #A5B4FC

    /// Emerald - negative finding / healthy
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Rose - positive finding / error
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    /// Amber - pending states
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Primary text
    pub const TEXT: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text
    pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    #[must_use]
    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Style for a verdict: positive findings in rose, negative in emerald.
    #[must_use]
    pub fn verdict(positive: bool) -> Style {
        if positive {
            Self::danger()
        } else {
            Self::success()
        }
    }
}

//! Light and dark colour palettes.

use softdesk_core::types::Color;

use super::table::ButtonKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub desktop_background: Color,
    pub titlebar_focused: Color,
    pub titlebar_unfocused: Color,
    /// Painted under each window's canvas.
    pub content_background: Color,
    pub close_button: Color,
    pub maximize_button: Color,
    pub minimize_button: Color,
    pub debug_outline: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        desktop_background: Color(0xFF1E1E1E),
        titlebar_focused: Color(0xFFE8E8E8),
        titlebar_unfocused: Color(0xFFF0F0F0),
        content_background: Color(0xFFF5F5F7),
        close_button: Color(0xFFFF5F56),
        maximize_button: Color(0xFF27C93F),
        minimize_button: Color(0xFFFEBD2E),
        debug_outline: Color(0xFFFF00FF),
    };

    pub const DARK: Theme = Theme {
        desktop_background: Color(0xFF1E1E1E),
        titlebar_focused: Color(0xFF3C3C3C),
        titlebar_unfocused: Color(0xFF2A2A2A),
        content_background: Color(0xFF1E1E1E),
        close_button: Color(0xFFFF5F56),
        maximize_button: Color(0xFF27C93F),
        minimize_button: Color(0xFFFEBD2E),
        debug_outline: Color(0xFF00FFFF),
    };

    pub const fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode {
            Theme::DARK
        } else {
            Theme::LIGHT
        }
    }

    pub const fn titlebar(&self, focused: bool) -> Color {
        if focused {
            self.titlebar_focused
        } else {
            self.titlebar_unfocused
        }
    }

    /// Colour of the built-in button sprite.
    pub const fn button(&self, kind: ButtonKind) -> Color {
        match kind {
            ButtonKind::Close => self.close_button,
            ButtonKind::Maximize => self.maximize_button,
            ButtonKind::Minimize => self.minimize_button,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::LIGHT
    }
}

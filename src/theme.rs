//! Centralized theme configuration for all UI components.
//!
//! Render files reference `theme::module::CONSTANT` rather than hardcoding
//! `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Shared across widgets
pub mod palette {
    use super::*;

    // Cursor style for every textarea
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Header line with session status
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const USER: Color = Color::Rgb(107, 203, 119);
    pub const LOGGED_OUT: Color = Color::Rgb(130, 133, 158);
    pub const LOADING: Color = Color::Rgb(255, 217, 61);
}

/// Filter input
pub mod filter {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(255, 217, 61);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const PLACEHOLDER: Style = Style::new().fg(Color::Rgb(90, 92, 119));
}

/// Blog list pane
pub mod blogs {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);

    pub const TITLE: Color = Color::Rgb(236, 236, 244);
    pub const AUTHOR: Color = Color::Rgb(130, 133, 158);
    pub const DETAIL: Color = Color::Rgb(130, 133, 158);
    pub const LIKES: Color = Color::Rgb(255, 107, 157);
    pub const URL: Color = Color::Rgb(0, 217, 255);

    pub const SELECTED: Style = Style::new()
        .bg(Color::Rgb(45, 45, 72))
        .add_modifier(Modifier::BOLD);
    pub const SELECTED_INDICATOR: &str = "▶ ";
    pub const EMPTY: Color = Color::Rgb(90, 92, 119);
}

/// Login and new-blog forms
pub mod form {
    use super::*;

    pub const BORDER: Color = Color::Rgb(107, 203, 119);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const FIELD_ACTIVE_BORDER: Color = Color::Rgb(255, 217, 61);
    pub const FIELD_INACTIVE_BORDER: Color = Color::Rgb(90, 92, 119);
    pub const FIELD_TEXT: Color = Color::Rgb(236, 236, 244);

    pub const DELETE_BORDER: Color = Color::Rgb(224, 108, 117);
}

/// Keyboard hints
pub mod hints {
    use super::*;

    pub const KEY: Color = Color::Rgb(255, 217, 61);
    pub const TEXT: Color = Color::Rgb(130, 133, 158);
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(107, 203, 119),
        border: Color::Rgb(140, 230, 150),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

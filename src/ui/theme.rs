use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub muted: Color,
    pub trace: Color,      // actuation trace
    pub reference: Color,  // setpoint line
    pub annotation: Color, // override annotations
    pub accent: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    trace: Color::Rgb(137, 180, 250),      // Blue
    reference: Color::Rgb(243, 139, 168),  // Red
    annotation: Color::Rgb(250, 179, 135), // Orange
    accent: Color::Rgb(166, 227, 161),     // Green
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
};

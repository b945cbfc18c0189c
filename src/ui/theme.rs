use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub type_name: Color,    // Cyan for type names
    pub used_byte: Color,    // Diagram cell occupied by data
    pub padding_byte: Color, // Diagram cell lost to alignment
    pub offset_gutter: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for input line
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    used_byte: Color::Rgb(166, 227, 161),      // Green cells hold data
    padding_byte: Color::Rgb(243, 139, 168),   // Red cells are wasted
    offset_gutter: Color::Rgb(108, 112, 134),
};

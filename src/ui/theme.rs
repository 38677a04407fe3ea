use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,
    pub number: Color,
    pub variable: Color,
    pub function: Color,
    pub operator: Color,
    pub curve: Color,
    pub axis: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    variable: Color::Rgb(148, 226, 213),       // Cyan for x
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    operator: Color::Rgb(137, 180, 250),       // Blue for operators
    curve: Color::Rgb(166, 227, 161),          // Green plot line
    axis: Color::Rgb(108, 112, 134),           // Grey axes
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
};

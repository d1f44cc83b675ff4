use ratatui::style::Color;

/// Nord palette with the semantic aliases the widget draws with.
pub struct NordTheme {
    // Polar Night
    pub nord0: Color, // #2E3440 background
    pub nord1: Color, // #3B4252 dropdown background
    pub nord3: Color, // #4C566A muted text, placeholder

    // Snow Storm
    pub nord4: Color, // #D8DEE9 main text
    pub nord6: Color, // #ECEFF4 active row text

    // Frost
    pub nord8: Color,  // #88C0D0 focused border
    pub nord9: Color,  // #81A1C1 avatar badges
    pub nord10: Color, // #5E81AC active row background

    // Aurora
    pub nord13: Color, // #EBCB8B loading indicator
    pub nord14: Color, // #A3BE8C committed value
}

impl Default for NordTheme {
    fn default() -> Self {
        Self {
            nord0: Color::Rgb(46, 52, 64),
            nord1: Color::Rgb(59, 66, 82),
            nord3: Color::Rgb(76, 86, 106),
            nord4: Color::Rgb(216, 222, 233),
            nord6: Color::Rgb(236, 239, 244),
            nord8: Color::Rgb(136, 192, 208),
            nord9: Color::Rgb(129, 161, 193),
            nord10: Color::Rgb(94, 129, 172),
            nord13: Color::Rgb(235, 203, 139),
            nord14: Color::Rgb(163, 190, 140),
        }
    }
}

impl NordTheme {
    pub fn bg(&self) -> Color {
        self.nord0
    }
    pub fn bg_secondary(&self) -> Color {
        self.nord1
    }
    pub fn muted(&self) -> Color {
        self.nord3
    }
    pub fn fg(&self) -> Color {
        self.nord4
    }
    pub fn fg_white(&self) -> Color {
        self.nord6
    }
    pub fn frost_ice(&self) -> Color {
        self.nord8
    }
    pub fn frost_blue(&self) -> Color {
        self.nord9
    }
    pub fn frost_dark(&self) -> Color {
        self.nord10
    }
    pub fn yellow(&self) -> Color {
        self.nord13
    }
    pub fn green(&self) -> Color {
        self.nord14
    }

    // Logic aliases
    pub fn focused_border(&self) -> Color {
        self.frost_ice()
    }
    pub fn active_row_bg(&self) -> Color {
        self.frost_dark()
    }
    pub fn active_row_fg(&self) -> Color {
        self.fg_white()
    }
}

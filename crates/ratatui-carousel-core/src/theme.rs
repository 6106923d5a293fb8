use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub border: Style,
    pub border_focused: Style,
    pub control: Style,
    pub control_disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            border: Style::default().dark_gray(),
            border_focused: Style::default().cyan(),
            control: Style::default().bold(),
            control_disabled: Style::default().dark_gray(),
        }
    }
}

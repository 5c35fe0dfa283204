use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub input: Style,
    pub ghost: Style,
    pub placeholder: Style,

    pub list_item: Style,
    pub list_selected: Style,

    pub header_logo: Style,
    pub header: Style,
    pub footer: Style,
    pub key_binding: Style,
    pub status_info: Style,
    pub status_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            input: Style::default().fg(Color::White),
            ghost: Style::default().fg(Color::Rgb(100, 100, 100)),
            placeholder: Style::default()
                .fg(Color::Rgb(100, 100, 100))
                .add_modifier(Modifier::ITALIC),

            list_item: Style::default().fg(Color::Rgb(180, 180, 180)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

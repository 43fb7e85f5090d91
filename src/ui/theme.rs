use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub label: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub selected: Style,
    pub header: Style,
    pub badge: Style,
    pub danger: Style,
    pub nav: Style,
    pub nav_active: Style,
    pub nav_focused: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Blue).bold(),
            subtitle: Style::new().color(Color::DarkGrey),
            label: Style::new().bold(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            placeholder: Style::new().color(Color::DarkGrey).dim(),
            focused: Style::new().color(Color::Cyan).bold(),
            selected: Style::new().background(Color::Blue).color(Color::White),
            header: Style::new().color(Color::Cyan).bold(),
            badge: Style::new().color(Color::Magenta),
            danger: Style::new().color(Color::Red).bold(),
            nav: Style::new().color(Color::White),
            nav_active: Style::new().color(Color::Magenta).bold().underline(),
            nav_focused: Style::new().background(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

use crate::core::navigation::NavState;
use crate::core::router::{Route, View};
use crate::terminal::TerminalSize;
use crate::ui::frame::Frame;
use crate::ui::layout::{center_offset, wrap_text};
use crate::ui::span::Span;
use crate::ui::theme::Theme;

pub const APP_TITLE: &str = "My Routing App";
pub const NOT_FOUND_HEADING: &str = "Page Not Found";

const KEY_HINTS: &str = "1/2/3 or h/a/c open  Left/Right move  Enter open  Backspace back  q quit";

pub struct PageContent {
    pub heading: &'static str,
    pub body: &'static str,
}

pub fn page_content(route: Route) -> PageContent {
    match route {
        Route::Home => PageContent {
            heading: "Welcome Home!",
            body: "Explore our app and learn more about how React Router works. \
                   Enjoy seamless navigation and smooth user experience!",
        },
        Route::About => PageContent {
            heading: "About Us",
            body: "We are passionate about creating amazing React apps with clean code, \
                   beautiful UI, and smooth navigation. React Router makes it easy to \
                   organize pages efficiently.",
        },
        Route::Contact => PageContent {
            heading: "Contact Us",
            body: "Got questions? Reach out to us anytime at example@mail.com. \
                   We're here to help and provide support for all your app needs.",
        },
    }
}

/// Title plus one entry per link. Only styles vary between pages: the
/// active route is highlighted and the focused link gets a background.
pub fn render_nav_bar(nav: &NavState, theme: &Theme) -> Frame {
    let mut frame = Frame::new();
    let active = nav.active_route();
    let focused = nav.focused_link();

    let mut spans = vec![Span::new(" "), Span::styled(APP_TITLE, theme.title), Span::new("   ")];
    for (idx, route) in Route::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", theme.hint));
        }
        let mut style = if active == Some(route) {
            theme.nav_active
        } else {
            theme.nav
        };
        if focused == route {
            style = style.merge(theme.nav_focused);
        }
        spans.push(Span::styled(format!(" {} ", route.link_label()), style));
    }
    frame.push_spans(spans);
    frame
}

pub fn render_page(view: &View, theme: &Theme, width: usize) -> Frame {
    let mut frame = Frame::new();
    let (heading, body) = match view {
        View::Page(route) => {
            let content = page_content(*route);
            (content.heading.to_string(), content.body.to_string())
        }
        View::NotFound(path) => (
            NOT_FOUND_HEADING.to_string(),
            format!("Nothing is routed at {path}."),
        ),
    };

    let text_width = width.saturating_sub(4).clamp(1, 72);
    frame.push_spans([
        Span::new(" ".repeat(center_offset(&heading, width))),
        Span::styled(heading, theme.title),
    ]);
    frame.blank();
    for line in wrap_text(&body, text_width) {
        frame.push_spans([Span::new(" ".repeat(center_offset(&line, width))), Span::new(line)]);
    }
    frame
}

pub fn render_routes(nav: &NavState, theme: &Theme, size: TerminalSize) -> Frame {
    let width = size.width as usize;
    let mut frame = render_nav_bar(nav, theme);
    frame.push_spans([Span::styled("─".repeat(width.max(1)), theme.hint)]);
    frame.blank();
    frame.extend(render_page(&nav.view(), theme, width));
    frame.blank();
    for line in wrap_text(KEY_HINTS, width.max(1)) {
        frame.push_spans([Span::new(" "), Span::styled(line, theme.hint)]);
    }
    frame
}

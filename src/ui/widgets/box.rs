use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Warning,
    Error,
}

/// Bordered panel; content width is measured without ANSI escapes.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn pick(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_style(style: BoxStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.content.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();
        let inner_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2;

        let b = Borders::pick(supports_unicode);
        let paint = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.repeat(inner_width),
            b.top_right
        )));
        out.push('\n');

        for line in lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&paint(b.vertical));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(b.vertical));
            out.push('\n');
        }

        out.push_str(&paint(&format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner_width),
            b.bottom_right
        )));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

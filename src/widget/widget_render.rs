//! Widget rendering
//!
//! Draws the bound input and, when open, the suggestion menu flush below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthChar;

use super::Widget;
use crate::input::input_render;
use crate::menu::{MenuEntry, NO_RESULTS_MESSAGE, header_text};
use crate::suggestion::Suggestion;
use crate::widgets::popup;

const CURSOR_MARKER: &str = "► ";
const PLAIN_MARKER: &str = "  ";
const DETAIL_INDENT: &str = "    ";

/// Render the input and remember its area for menu positioning
pub fn render_input(widget: &mut Widget, frame: &mut Frame, area: Rect) {
    widget.set_input_area(area);
    let focused = widget.is_focused();
    input_render::render_field(widget.input_mut(), frame, area, focused);
}

/// Render the menu popup; call after everything it may overlap
///
/// The clipped popup area is recorded on the menu for click hit testing.
pub fn render_menu(widget: &mut Widget, frame: &mut Frame) {
    if !widget.menu.is_open() {
        return;
    }

    let origin = match widget.menu.position().or_else(|| widget.input_area().map(below)) {
        Some(origin) => origin,
        None => return,
    };
    let area = popup::popup_below_anchor(origin, widget.menu.height(), frame.area());
    widget.menu.set_drawn_area(area);
    if area.height == 0 || area.width == 0 {
        return;
    }

    let menu = widget.menu();

    let inner_width = area.width.saturating_sub(2) as usize;
    let query = widget.value();
    let highlight = widget.options().highlight;
    let cursor = menu.cursor();

    let mut suggestion_index = 0;
    let items: Vec<ListItem> = menu
        .entries()
        .iter()
        .map(|entry| match entry {
            MenuEntry::Header { zipcode } => ListItem::new(Line::from(Span::styled(
                header_text(zipcode),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))),
            MenuEntry::NoResults => ListItem::new(Line::from(Span::styled(
                NO_RESULTS_MESSAGE,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))),
            MenuEntry::Suggestion(suggestion) => {
                let selected = cursor == Some(suggestion_index);
                suggestion_index += 1;
                suggestion_item(suggestion, selected, highlight.then_some(query), inner_width)
            }
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, area);
}

fn below(anchor: Rect) -> Rect {
    Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width: anchor.width,
        height: 0,
    }
}

/// Two-line item: name, credential and specialty; then address and NPI
fn suggestion_item<'a>(
    suggestion: &'a Suggestion,
    selected: bool,
    query: Option<&str>,
    width: usize,
) -> ListItem<'a> {
    let (base, emphasis, detail) = if selected {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (
            Style::default().fg(Color::White).bg(Color::Black),
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray).bg(Color::Black),
        )
    };

    let marker = if selected { CURSOR_MARKER } else { PLAIN_MARKER };
    let mut title = vec![Span::styled(marker, base)];
    title.extend(highlight_spans(&suggestion.display_name(), query, base, emphasis));
    if !suggestion.credential.is_empty() {
        title.push(Span::styled(format!(", {}", suggestion.credential), base));
    }
    if !suggestion.specialty.is_empty() {
        title.push(Span::styled(format!("  {}", suggestion.specialty), detail));
    }

    let mut address = suggestion.address_line.clone();
    let locality = suggestion.locality();
    if !locality.is_empty() {
        if !address.is_empty() {
            address.push_str(", ");
        }
        address.push_str(&locality);
    }
    let details = format!("{}{}  NPI: {}", DETAIL_INDENT, address, suggestion.npi);

    ListItem::new(Text::from(vec![
        Line::from(title),
        Line::from(Span::styled(truncate_to_width(&details, width), detail)),
    ]))
}

/// Split `text` into spans, emphasizing case-insensitive matches of each
/// whitespace-separated term of `query`
pub fn highlight_spans(
    text: &str,
    query: Option<&str>,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'static>> {
    let terms: Vec<String> = query
        .map(|q| q.split_whitespace().map(str::to_ascii_lowercase).collect())
        .unwrap_or_default();
    if terms.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    // ASCII lowercasing keeps byte offsets, so match offsets index `text` directly
    let haystack = text.to_ascii_lowercase();
    let mut marked = vec![false; text.len()];
    for term in &terms {
        let mut start = 0;
        while let Some(found) = haystack[start..].find(term.as_str()) {
            let begin = start + found;
            let end = begin + term.len();
            marked[begin..end].iter_mut().for_each(|m| *m = true);
            start = end;
        }
    }

    let mut spans = Vec::new();
    let mut run_start = 0;
    for (index, _) in text.char_indices().skip(1) {
        if marked[index] != marked[run_start] {
            spans.push(styled_run(&text[run_start..index], marked[run_start], base, emphasis));
            run_start = index;
        }
    }
    if run_start < text.len() {
        spans.push(styled_run(&text[run_start..], marked[run_start], base, emphasis));
    }
    spans
}

fn styled_run(text: &str, emphasized: bool, base: Style, emphasis: Style) -> Span<'static> {
    Span::styled(text.to_string(), if emphasized { emphasis } else { base })
}

/// Cut `text` to at most `max_width` display columns, ending in "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "widget_render_tests.rs"]
mod widget_render_tests;

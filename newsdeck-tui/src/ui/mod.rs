//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Nothing in here mutates state or performs I/O beyond drawing.

pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use libnewsdeck::Category;

use crate::app::AppState;
use theme::Theme;

/// Render the application UI
///
/// Main rendering entry point: lays out the category tabs, search box,
/// status line, headline list and hint bar, then any overlays.
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::for_mode(state.theme);
    let area = frame.area();

    // Paint the themed background first
    let background = Block::default().style(Style::default().bg(theme.background).fg(theme.text));
    frame.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Loading / error line
            Constraint::Min(3),    // Headline list
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_tabs(frame, chunks[0], state, &theme);
    render_search(frame, chunks[1], state, &theme);
    render_status_line(frame, chunks[2], state, &theme);
    render_headlines(frame, chunks[3], state, &theme);
    render_hints(frame, chunks[4], state, &theme);

    if let Some(ref article) = state.detail {
        render_detail_overlay(frame, area, article, &theme);
    }

    if state.help_visible {
        render_help_overlay(frame, area, &theme);
    }
}

/// Category tab bar. The selected tab is highlighted; switching tabs
/// refetches but the category itself never reaches the provider.
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let selected = Category::ALL
        .iter()
        .position(|c| *c == state.query.category)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Top News Headlines ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .style(Style::default().fg(theme.dim))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Search box. Border lights up while it owns input; every edit refetches.
fn render_search(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let border_color = if state.searching() {
        theme.accent
    } else {
        theme.border
    };

    let content = if state.query.search_text.is_empty() && !state.searching() {
        Line::from(Span::styled(
            "Search for news...",
            Style::default().fg(theme.dim),
        ))
    } else if state.searching() {
        Line::from(vec![
            Span::raw(state.query.search_text.clone()),
            Span::styled("█", Style::default().fg(theme.accent)),
        ])
    } else {
        Line::from(state.query.search_text.clone())
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(search, area);
}

/// One line for fetch feedback. Loading and a leftover error can show at
/// the same time, matching how the page always displayed them.
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    if state.loading {
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(theme.loading),
        ));
    }

    if let Some(ref error) = state.error {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The headline list. Two lines per card: title, then description.
fn render_headlines(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .articles
        .iter()
        .map(|article| {
            let title = Line::from(Span::styled(
                article.title.clone(),
                Style::default().fg(theme.text),
            ));
            let description = Line::from(Span::styled(
                article.description_display().to_string(),
                Style::default().fg(theme.dim),
            ));
            ListItem::new(Text::from(vec![title, description]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Headlines ({}) ", state.articles.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selection_bg)
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(state.current_article().map(|_| state.cursor));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Key hints for the current input mode.
fn render_hints(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.searching() {
        "type to search  Enter: submit  Esc: back"
    } else if state.detail_open() {
        "Esc: close  o: open in browser  q: quit"
    } else {
        "/: search  1-4: category  j/k: move  Enter: details  o: open  t: theme  ?: help  q: quit"
    };

    let line = Paragraph::new(Span::styled(hints, Style::default().fg(theme.dim)));
    frame.render_widget(line, area);
}

/// Detail view for one article, centered over the list.
fn render_detail_overlay(
    frame: &mut Frame,
    area: Rect,
    article: &libnewsdeck::Article,
    theme: &Theme,
) {
    let popup_area = centered_rect(70, 70, area);

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                article.source.name.clone(),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("  By {}", article.author_display()),
                Style::default().fg(theme.dim),
            ),
        ]),
    ];

    let published = article.published_display();
    if !published.is_empty() {
        lines.push(Line::from(Span::styled(
            published,
            Style::default().fg(theme.dim),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(article.description_display().to_string()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        article.url.clone(),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED),
    )));

    // Terminals cannot show the image itself; the link still belongs in
    // the detail view.
    if let Some(ref image) = article.url_to_image {
        lines.push(Line::from(Span::styled(
            format!("Image: {image}"),
            Style::default().fg(theme.dim),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: close  o: open in browser",
        Style::default().fg(theme.dim),
    )));

    let detail = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Article ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.background).fg(theme.text))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}

/// Help overlay listing every keybinding.
fn render_help_overlay(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Browsing:"),
        Line::from("  j / Down    - Next headline"),
        Line::from("  k / Up      - Previous headline"),
        Line::from("  Enter       - Article details"),
        Line::from("  o           - Open link in browser"),
        Line::from("  1-4         - Switch category tab"),
        Line::from(""),
        Line::from("Search:"),
        Line::from("  /           - Focus the search box"),
        Line::from("  Enter       - Search again"),
        Line::from("  Esc         - Back to the list"),
        Line::from(""),
        Line::from("Other:"),
        Line::from("  t           - Toggle light/dark theme"),
        Line::from("  ?           - Toggle this help"),
        Line::from("  q / Ctrl+C  - Quit"),
        Line::from(""),
        Line::from("Press Esc or ? to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.background).fg(theme.text))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

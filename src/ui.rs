use crate::analytics::{self, AnalyticsSummary};
use crate::entities::{Booking, Provider};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Providers,
    Bookings,
    Analytics,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Providers => Page::Bookings,
            Page::Bookings => Page::Analytics,
            Page::Analytics => Page::Providers,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Providers => Page::Analytics,
            Page::Bookings => Page::Providers,
            Page::Analytics => Page::Bookings,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Providers => "Providers",
            Page::Bookings => "Bookings",
            Page::Analytics => "Analytics",
        }
    }
}

/// Read-only snapshot of the store for browsing
pub struct App {
    pub providers: Vec<Provider>,
    pub bookings: Vec<Booking>,
    pub summary: Option<AnalyticsSummary>,
    pub current_page: Page,
    pub provider_state: TableState,
    pub booking_state: TableState,
    pub show_detail: bool,
}

impl App {
    pub fn new(providers: Vec<Provider>, bookings: Vec<Booking>) -> Self {
        let summary = analytics::summarize(&bookings, &providers);

        let mut provider_state = TableState::default();
        if !providers.is_empty() {
            provider_state.select(Some(0));
        }

        let mut booking_state = TableState::default();
        if !bookings.is_empty() {
            booking_state.select(Some(0));
        }

        Self {
            providers,
            bookings,
            summary,
            current_page: Page::Providers,
            provider_state,
            booking_state,
            show_detail: false,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_provider(&self) -> Option<&Provider> {
        self.provider_state.selected().and_then(|i| self.providers.get(i))
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    fn active_table(&mut self) -> Option<(&mut TableState, usize)> {
        match self.current_page {
            Page::Providers => Some((&mut self.provider_state, self.providers.len())),
            Page::Bookings => Some((&mut self.booking_state, self.bookings.len())),
            Page::Analytics => None,
        }
    }

    pub fn next(&mut self) {
        if let Some((state, len)) = self.active_table() {
            if len == 0 {
                return;
            }
            let i = match state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        if let Some((state, len)) = self.active_table() {
            if len == 0 {
                return;
            }
            let i = match state.selected() {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            };
            state.select(Some(i));
        }
    }

    pub fn available_count(&self) -> usize {
        self.providers.iter().filter(|p| p.available).count()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Dashboard error: {:?}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_detail && app.current_page == Page::Providers {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_providers(f, content_chunks[0], app);
        render_provider_detail(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::Providers => render_providers(f, chunks[1], app),
            Page::Bookings => render_bookings(f, chunks[1], app),
            Page::Analytics => render_analytics(f, chunks[1], app),
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Providers, Page::Bookings, Page::Analytics];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Providers: {} ({} available)", app.providers.len(), app.available_count()),
        Style::default().fg(Color::Green),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Bookings: {}", app.bookings.len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    Row::new(cells).style(Style::default().bg(Color::DarkGray)).height(1)
}

fn render_providers(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = app.providers.iter().map(|p| {
        let color = if p.available { Color::Green } else { Color::Red };
        Row::new(vec![
            Cell::from(p.id.clone()),
            Cell::from(truncate(&p.name, 18)),
            Cell::from(truncate(&p.service, 18)),
            Cell::from(p.language.clone()),
            Cell::from(format!("{:.2}", p.rating)),
            Cell::from(p.reviews.len().to_string()),
            Cell::from(p.availability_label()).style(Style::default().fg(color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(12),
        ],
    )
    .header(header_row(&["Id", "Name", "Service", "Language", "Rating", "Reviews", "Availability"]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Providers "),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.provider_state);
}

fn render_bookings(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = app.bookings.iter().map(|b| {
        Row::new(vec![
            Cell::from(b.id.clone()),
            Cell::from(truncate(&b.tourist, 18)),
            Cell::from(truncate(&b.provider_name, 16)),
            Cell::from(truncate(&b.service, 16)),
            Cell::from(b.language.clone()),
            Cell::from(b.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::from(b.status.as_str()).style(Style::default().fg(Color::Green)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Min(10),
        ],
    )
    .header(header_row(&["Id", "Tourist", "Provider", "Service", "Language", "Created", "Status"]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Bookings "),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.booking_state);
}

fn render_analytics(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut content = vec![Line::from(""), Line::from(Span::styled("  Analytics Summary", title_style)), Line::from("")];

    match &app.summary {
        None => content.push(Line::from("  No bookings yet; analytics will appear after bookings.")),
        Some(summary) => {
            content.push(Line::from(format!("  Total bookings: {}", summary.total_bookings)));
            content.push(Line::from(""));

            let sections = [
                ("By language", summary.by_language.entries().to_vec()),
                ("Top services", summary.by_service.most_common(crate::config::analytics::TOP_N)),
                ("Top providers", summary.by_provider.most_common(crate::config::analytics::TOP_N)),
            ];
            for (label, entries) in sections {
                content.push(Line::from(Span::styled(format!("  {}", label), Style::default().fg(Color::Yellow))));
                for (key, count) in entries {
                    content.push(Line::from(format!("    {:<20} {}", key, count)));
                }
                content.push(Line::from(""));
            }

            if let Some(avg) = summary.average_rating {
                content.push(Line::from(format!("  Average provider rating: {:.2}", avg)));
            }
        }
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Analytics "),
    );
    f.render_widget(paragraph, area);
}

fn render_provider_detail(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![];

    match app.selected_provider() {
        None => lines.push(Line::from("No provider selected")),
        Some(p) => {
            let label = Style::default().fg(Color::Yellow);
            lines.push(Line::from(vec![Span::styled("Name: ", label), Span::raw(p.name.clone())]));
            lines.push(Line::from(vec![Span::styled("Service: ", label), Span::raw(p.service.clone())]));
            lines.push(Line::from(vec![Span::styled("Language: ", label), Span::raw(p.language.clone())]));
            lines.push(Line::from(vec![Span::styled("Rating: ", label), Span::raw(format!("{:.2}", p.rating))]));
            lines.push(Line::from(vec![Span::styled("Status: ", label), Span::raw(p.availability_label())]));
            if let Some(loc) = &p.location {
                lines.push(Line::from(vec![
                    Span::styled("Location: ", label),
                    Span::raw(format!("{:.2}, {:.2}", loc.lat, loc.lng)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Reviews ({})", p.reviews.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for review in p.reviews.iter().rev() {
                lines.push(Line::from(format!(
                    "  ⭐{} {} {}",
                    review.rating,
                    review.ts.format("%Y-%m-%d"),
                    truncate(&review.comment, 40)
                )));
            }
        }
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Provider Details "),
    );
    f.render_widget(detail, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let position = match app.current_page {
        Page::Providers => format!(
            " Row: {}/{} ",
            app.provider_state.selected().map(|i| i + 1).unwrap_or(0),
            app.providers.len()
        ),
        Page::Bookings => format!(
            " Row: {}/{} ",
            app.booking_state.selected().map(|i| i + 1).unwrap_or(0),
            app.bookings.len()
        ),
        Page::Analytics => " Summary ".to_string(),
    };

    let key = Style::default().fg(Color::Yellow);
    let status_spans = vec![
        Span::styled(position, Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled("Enter", key),
        Span::raw(" Details | "),
        Span::styled("Tab", key),
        Span::raw(" Page | "),
        Span::styled("↑/↓", key),
        Span::raw(" Nav | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::default_providers;

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Providers.next(), Page::Bookings);
        assert_eq!(Page::Analytics.next(), Page::Providers);
        assert_eq!(Page::Providers.previous(), Page::Analytics);
        assert_eq!(Page::Bookings.title(), "Bookings");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new(default_providers(), Vec::new());
        assert_eq!(app.selected_provider().unwrap().id, "p1");

        app.previous();
        assert_eq!(app.selected_provider().unwrap().id, "p3");
        app.next();
        assert_eq!(app.selected_provider().unwrap().id, "p1");

        // no bookings: navigation is a no-op
        app.next_page();
        app.next();
        assert_eq!(app.booking_state.selected(), None);
    }

    #[test]
    fn test_summary_and_counts() {
        let providers = default_providers();
        let bookings = vec![Booking::confirmed("A", &providers[0], None, None)];
        let mut app = App::new(providers, bookings);
        app.providers[2].available = false;

        assert!(app.summary.is_some());
        assert_eq!(app.available_count(), 2);
        assert_eq!(app.booking_state.selected(), Some(0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long provider name", 10), "a very ...");
    }
}

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::selection::SelectableItem;
use crate::ui::app::{App, FocusPane, ShowcaseTab};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg)), area);

    if app.is_booting() {
        render_boot_splash(frame, app, area);
        return;
    }

    // Main layout: Header + Playground + Showcase + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Header
            Constraint::Percentage(45), // Terminal + API
            Constraint::Min(6),         // Showcase
            Constraint::Length(2),      // Footer
        ])
        .split(area);

    render_header(frame, app, main_chunks[0]);

    let playground = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    render_terminal_panel(frame, app, playground[0]);
    render_api_panel(frame, app, playground[1]);
    render_showcase(frame, app, main_chunks[2]);
    render_footer(frame, app, main_chunks[3]);

    if app.show_help {
        render_help_modal(frame, app);
    }
}

fn pane_block<'a>(app: &App, pane: FocusPane, title: &'a str) -> Block<'a> {
    let border_color = if app.focus == pane {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(app.theme.bg).fg(app.theme.fg))
}

/// A clickable-looking label; the active one is drawn filled.
fn button<'a>(theme: &Theme, label: impl Into<String>, active: bool) -> Span<'a> {
    let style = if active {
        Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    Span::styled(format!(" {} ", label.into()), style)
}

fn render_boot_splash(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let popup = centered_rect(50, 30, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(3)])
        .split(popup);

    let text = vec![
        Line::from(Span::styled(
            app.profile.identity.name.as_str(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Booting portfolio...",
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .gauge_style(Style::default().fg(theme.accent).bg(theme.accent_soft))
        .ratio(app.boot.progress());
    frame.render_widget(gauge, chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let identity = &app.profile.identity;
    let separator = Span::styled("  ·  ", Style::default().fg(theme.fg_dim));

    let mut tags: Vec<Span> = Vec::new();
    for tag in &app.profile.hero_tags {
        tags.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(theme.fg_dim),
        ));
        tags.push(Span::raw(" "));
    }

    let text = vec![
        Line::from(vec![
            Span::styled(
                identity.name.as_str(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::raw(identity.role.as_str()),
            separator.clone(),
            Span::raw(identity.experience.as_str()),
            separator,
            Span::raw(identity.location.as_str()),
        ]),
        Line::from(tags),
    ];

    let header = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" folio ")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg).fg(theme.fg)),
    );

    frame.render_widget(header, area);
}

fn render_terminal_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.active_command();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.post)),
            Span::styled("● ", Style::default().fg(theme.warning)),
            Span::styled("●", Style::default().fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}@portfolio", app.profile.identity.handle()),
                Style::default().fg(theme.accent),
            ),
            Span::styled("  ~/java", Style::default().fg(theme.fg_dim)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}", active.command),
            Style::default().fg(theme.accent),
        )),
    ];
    lines.extend(
        active
            .output
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), Style::default().fg(theme.fg)))),
    );
    lines.push(Line::from(""));

    let mut buttons = Vec::new();
    for (i, command) in app.terminal.items().iter().enumerate() {
        let label = format!("{} {}", i + 1, command.label());
        buttons.push(button(theme, label, app.terminal.is_active(command.id())));
        buttons.push(Span::raw(" "));
    }
    lines.push(Line::from(buttons));

    let paragraph = Paragraph::new(lines)
        .block(pane_block(app, FocusPane::Terminal, " cmd.exe "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_api_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = pane_block(app, FocusPane::Api, " api playground ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(inner);

    render_request_list(frame, app, columns[0]);
    render_request_details(frame, app, columns[1]);
}

fn render_request_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut lines = vec![
        Line::from(Span::styled(
            "REQUESTS",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for request in app.api.items() {
        let row_style = if app.api.is_active(request.id()) {
            Style::default().bg(theme.accent_soft)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<5}", request.method),
                row_style
                    .fg(theme.method_color(request.method))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(request.short_url(), row_style.fg(theme.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_request_details(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let request = app.active_request();
    let copied = app.copy_feedback.is_copied();

    let status_style = match app.response_body() {
        Some(_) => Style::default().fg(theme.success),
        None => Style::default().fg(theme.warning),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                request.method.to_string(),
                Style::default()
                    .fg(theme.method_color(request.method))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(request.url.as_str()),
        ]),
        Line::from(vec![
            button(theme, format!("[c] {}", app.copy_label()), copied),
            Span::raw(" "),
            button(theme, "[s] Send", false),
        ]),
        Line::from(""),
        Line::from(Span::styled(request.curl.as_str(), Style::default().fg(theme.fg_dim))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Response  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(app.response_status(), status_style),
        ]),
    ];

    match app.response_body() {
        Some(body) => {
            lines.extend(
                body.iter()
                    .map(|line| Line::from(Span::styled(line.as_str(), Style::default().fg(theme.fg)))),
            );
        }
        None => lines.push(Line::from(Span::styled(
            "Press Send to simulate the API response.",
            Style::default().fg(theme.fg_dim),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        request.description.as_str(),
        Style::default()
            .fg(theme.fg_dim)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area.inner(ratatui::layout::Margin::new(1, 0)));
}

fn render_showcase(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = pane_block(app, FocusPane::Showcase, " showcase ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<&str> = app.showcase.items().iter().map(|tab| tab.label()).collect();
    let tabs = Tabs::new(titles)
        .select(app.showcase.active_index())
        .style(Style::default().fg(theme.fg_dim))
        .highlight_style(
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(theme.fg_dim)));
    frame.render_widget(tabs, chunks[0]);

    let lines = match app.active_tab() {
        ShowcaseTab::Projects => project_lines(app),
        ShowcaseTab::Profile => profile_lines(app),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.showcase_scroll, 0));
    frame.render_widget(paragraph, chunks[1]);
}

fn heading<'a>(theme: &Theme, text: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet<'a>(theme: &Theme, text: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(theme.accent)),
        Span::styled(text, Style::default().fg(theme.fg)),
    ])
}

fn project_lines(app: &App) -> Vec<Line<'_>> {
    let theme = &app.theme;
    let mut lines = Vec::new();

    for project in &app.profile.projects {
        lines.push(Line::from(vec![
            Span::styled(
                project.title.as_str(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", project.period),
                Style::default().fg(theme.fg_dim),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            project.summary.as_str(),
            Style::default().fg(theme.fg_dim),
        )));
        lines.extend(project.impacts.iter().map(|impact| bullet(theme, impact)));
        lines.push(Line::from(Span::styled(
            format!("  {}", project.stack.join(" · ")),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(""));
    }

    lines
}

fn profile_lines(app: &App) -> Vec<Line<'_>> {
    let theme = &app.theme;
    let profile = &app.profile;
    let identity = &profile.identity;
    let mut lines = Vec::new();

    if !profile.about.is_empty() {
        lines.push(heading(theme, "About"));
        lines.extend(profile.about.iter().map(|p| Line::from(p.as_str())));
        lines.push(Line::from(""));
    }

    for highlight in &profile.highlights {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", highlight.title),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(highlight.description.as_str(), Style::default().fg(theme.fg_dim)),
        ]));
    }
    if !profile.highlights.is_empty() {
        lines.push(Line::from(""));
    }

    if !profile.skill_groups.is_empty() {
        lines.push(heading(theme, "Skills"));
        for group in &profile.skill_groups {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", group.category),
                    Style::default().fg(theme.accent),
                ),
                Span::raw(group.items.join(", ")),
            ]));
        }
        lines.push(Line::from(""));
    }

    if !profile.achievements.is_empty() {
        lines.push(heading(theme, "Milestones & recognition"));
        lines.extend(profile.achievements.iter().map(|a| bullet(theme, a)));
        lines.push(Line::from(""));
    }

    if !profile.recent_focus.is_empty() {
        lines.push(heading(theme, "Recent focus"));
        lines.extend(profile.recent_focus.iter().map(|f| bullet(theme, f)));
        lines.push(Line::from(""));
    }

    lines.push(heading(theme, "Contact"));
    for (label, value) in [
        ("email", identity.mailto()),
        ("phone", identity.tel()),
        ("linkedin", identity.linkedin.clone()),
        ("resume", identity.resume.clone()),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<9}"), Style::default().fg(theme.fg_dim)),
            Span::styled(value, Style::default().fg(theme.fg)),
        ]));
    }

    lines
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let identity = &app.profile.identity;

    let help_text = match app.focus {
        FocusPane::Terminal => format!(
            "[←→/hl] Command  {} Jump  [Tab] Switch  [?] Help  [Q] Quit",
            jump_hint(app.terminal.len())
        ),
        FocusPane::Api => {
            "[↑↓/jk] Request  [s/Enter] Send  [c] Copy cURL  [Tab] Switch  [?] Help  [Q] Quit"
                .to_string()
        }
        FocusPane::Showcase => {
            "[←→/hl] Tab  [↑↓/jk] Scroll  [Tab] Switch  [t] Theme  [?] Help  [Q] Quit".to_string()
        }
    };

    let year = chrono::Local::now().year();
    let lines = vec![
        Line::from(vec![
            Span::styled(identity.email.as_str(), Style::default().fg(theme.fg)),
            Span::styled("  ·  ", Style::default().fg(theme.fg_dim)),
            Span::styled(identity.phone.as_str(), Style::default().fg(theme.fg)),
            Span::styled("  ·  ", Style::default().fg(theme.fg_dim)),
            Span::styled(identity.linkedin_display(), Style::default().fg(theme.fg)),
            Span::styled(
                format!("    © {year} {}", identity.name),
                Style::default().fg(theme.fg_dim),
            ),
        ]),
        Line::from(Span::styled(help_text, Style::default().fg(theme.fg_dim))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Number keys that reach an item: `[1]`, `[1-4]`, capped at `[1-9]`.
fn jump_hint(items: usize) -> String {
    match items.min(9) {
        0 | 1 => "[1]".to_string(),
        last => format!("[1-{last}]"),
    }
}

fn render_help_modal(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 60, frame.area());

    let bindings = [
        ("Tab / Shift+Tab", "Switch pane"),
        ("←→ ↑↓ / hjkl", "Previous / next item"),
        ("1-9", "Jump to item"),
        ("s / Enter", "Send the active request"),
        ("c / y", "Copy the active cURL command"),
        ("[ / ]", "Toggle showcase tab"),
        ("t", "Cycle theme"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let mut lines = vec![heading(theme, "Key bindings"), Line::from("")];
    for (keys, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<18}"), Style::default().fg(theme.accent)),
            Span::styled(action, Style::default().fg(theme.fg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Theme: {}", theme.name),
        Style::default().fg(theme.fg_dim),
    )));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" help ")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg).fg(theme.fg)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A rectangle of `percent_x` × `percent_y` centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

//! Ratatui renderer for the console dashboard.
//!
//! Maps a [`ConsoleScreenViewModel`] to widgets. No decisions are made
//! here; everything worth deciding was decided by the presenter.

use crate::presentation::view_models::{
    CodeDetailViewModel, ConsoleScreenViewModel, GenerateFormViewModel, NoticeLevel,
};
use anyhow::Result;
use codegate_core::PageItem;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};
use std::io::{self, Stdout};

/// Owns the terminal for the lifetime of the console; restores it on drop.
pub struct ConsoleTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl ConsoleTerminal {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Ctrl+C must restore the terminal even mid-draw
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        Ok(Self { terminal })
    }

    pub fn draw(&mut self, vm: &ConsoleScreenViewModel) -> Result<()> {
        self.terminal.draw(|frame| ui(frame, vm))?;
        Ok(())
    }
}

impl Drop for ConsoleTerminal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn ui(frame: &mut Frame, vm: &ConsoleScreenViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // table
            Constraint::Length(1), // pagination rail
            Constraint::Length(2), // status bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0], vm);
    render_table(frame, chunks[1], vm);
    render_rail(frame, chunks[2], vm);
    render_status_bar(frame, chunks[3], vm);

    if let Some(form) = &vm.form {
        render_form_modal(frame, form);
    }

    if let Some(detail) = &vm.modal {
        render_detail_modal(frame, detail);
    }
}

fn render_title(frame: &mut Frame, area: Rect, vm: &ConsoleScreenViewModel) {
    let mut spans = vec![Span::styled(
        " CODEGATE ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if !vm.authenticated {
        spans.push(Span::styled(
            "  not authenticated",
            Style::default().fg(Color::Red),
        ));
    }
    if vm.busy {
        spans.push(Span::styled(
            "  loading…",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, vm: &ConsoleScreenViewModel) {
    let header = Row::new(vec!["ID", "CODE", "STATUS", "ACCOUNTS", "CREATED", "EXPIRES"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = vm.list.rows.iter().enumerate().map(|(index, row)| {
        let status_style = if row.status.is_enabled() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };

        let cells = vec![
            Cell::from(row.id.to_string()),
            Cell::from(row.code.clone()),
            Cell::from(Span::styled(row.status.to_string(), status_style)),
            Cell::from(format!("{}/{}", row.accounts_used, row.max_accounts)),
            Cell::from(row.created_at.format("%Y-%m-%d %H:%M").to_string()),
            Cell::from(row.expires_at.format("%Y-%m-%d %H:%M").to_string()),
        ];

        let row_widget = Row::new(cells);
        if Some(index) == vm.selected {
            row_widget.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row_widget
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(17),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("activation codes"));

    frame.render_widget(table, area);
}

fn render_rail(frame: &mut Frame, area: Rect, vm: &ConsoleScreenViewModel) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for item in &vm.list.rail.items {
        match item {
            PageItem::Page(n) if *n == vm.list.rail.page => spans.push(Span::styled(
                format!("[{}]", n),
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
            )),
            PageItem::Page(n) => spans.push(Span::raw(n.to_string())),
            PageItem::Ellipsis(_) => spans.push(Span::raw("…")),
        }
        spans.push(Span::raw(" "));
    }

    if let Some((start, end)) = vm.list.item_range {
        spans.push(Span::styled(
            format!("  showing {}-{} of {}", start, end, vm.list.total),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, vm: &ConsoleScreenViewModel) {
    let notice_line = match &vm.notice {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Success => Style::default().fg(Color::Green),
                NoticeLevel::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(format!(" {}", notice.text), style))
        }
        None => Line::from(""),
    };

    let hints = Line::from(Span::styled(
        " ↑/↓ select  ←/→ page  enter details  g generate  t toggle  r reload  q quit",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(vec![notice_line, hints]).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// Centered popup occupying the given percentage of the frame.
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

fn render_form_modal(frame: &mut Frame, form: &GenerateFormViewModel) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let submit_line = if form.submitting {
        Line::from(Span::styled(
            "generating…",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "enter submit   esc cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        Line::from(format!("duration:     {} days  (d to cycle)", form.duration_days)),
        Line::from(format!("max accounts: {}  (+/- to adjust)", form.max_accounts)),
        Line::from(""),
        submit_line,
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("generate activation code"),
    );
    frame.render_widget(paragraph, area);
}

fn render_detail_modal(frame: &mut Frame, detail: &CodeDetailViewModel) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![
            Span::raw("code: "),
            Span::styled(
                detail.code.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   status: {}", detail.status)),
            Span::raw(format!(
                "   accounts: {}/{}",
                detail.accounts_total, detail.max_accounts
            )),
        ]),
        Line::from(""),
    ];

    if detail.accounts.is_empty() {
        lines.push(Line::from(Span::styled(
            "no provisioned accounts",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for account in &detail.accounts {
        lines.push(Line::from(Span::styled(
            format!("account #{}", account.id),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for field in &account.fields {
            lines.push(Line::from(format!("  {:<16} {}", field.label, field.value)));
        }
        lines.push(Line::from(""));
    }

    let footer = if detail.controls_hidden {
        "esc close".to_string()
    } else {
        format!(
            "page {}/{}   ←/→ accounts page   esc close",
            detail.accounts_page, detail.accounts_total_pages
        )
    };
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("activation code details"),
    );
    frame.render_widget(paragraph, area);
}

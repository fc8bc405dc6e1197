//! Stats tab view - combined build totals

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Lines rendered by the stats paragraph: header, spacer, eight stat
/// rows, spacer, summary footer. Scrolling is clamped to this range.
pub const LINE_COUNT: usize = 12;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let totals = app.totals();

    let mut lines = vec![
        Line::from(Span::styled(
            "═══ Combined Stats ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (stat, value) in totals.entries() {
        let value_color = if value > 0 {
            Color::Green
        } else if value < 0 {
            Color::Red
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", stat.name()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:+}", value),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  {} equipped · {}",
            app.loadout.len(),
            if app.mounted { "mounted" } else { "on foot" }
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let scroll = app.stats_scroll.min(lines.len().saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stats "))
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

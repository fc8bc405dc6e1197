//! Loadout tab view - the equipped build, dashboard style

use crate::app::App;
use crate::ui::rarity_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_slots(f, app, chunks[0]);
    draw_rider(f, app, chunks[1]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    if app.loadout.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No items equipped.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (category, item) in app.loadout.entries() {
        let mut spans = vec![
            Span::styled(
                format!("  {:10}", category),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                item.name.clone(),
                Style::default().fg(rarity_color(item.rarity.as_deref())),
            ),
        ];
        if let Some(rarity) = &item.rarity {
            spans.push(Span::styled(
                format!("  ({})", rarity),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Equipped Items "),
    );
    f.render_widget(paragraph, area);
}

fn draw_rider(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    let character = app.loadout.get("char");
    let horse = app.loadout.get("horse");

    lines.push(Line::from(Span::styled(
        "═══ Rider ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(match character {
        Some(card) => Line::from(Span::styled(
            format!("  Character: {}", card.name),
            Style::default().fg(Color::White),
        )),
        None => Line::from(Span::styled(
            "  No character equipped",
            Style::default().fg(Color::DarkGray),
        )),
    });
    lines.push(match horse {
        Some(card) => Line::from(Span::styled(
            format!("  Horse: {}", card.name),
            Style::default().fg(Color::White),
        )),
        None => Line::from(Span::styled(
            "  No horse equipped",
            Style::default().fg(Color::DarkGray),
        )),
    });

    lines.push(Line::from(""));
    let (mounted_label, mounted_color) = if app.mounted {
        ("Mounted", Color::Green)
    } else {
        ("On foot", Color::Gray)
    };
    lines.push(Line::from(vec![
        Span::styled("  [m] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            mounted_label,
            Style::default().fg(mounted_color).add_modifier(Modifier::BOLD),
        ),
    ]));

    // Horse bonuses only count while mounted
    if let Some(horse_card) = horse {
        if let Some(horse_sheet) = app.catalog.horse(&horse_card.name) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "═══ Horse Bonus ═══",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for attr in &horse_sheet.attributes {
                if attr.trait_type == "Bonus" {
                    let style = if app.mounted {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    lines.push(Line::from(Span::styled(
                        format!("  {}", attr.value),
                        style,
                    )));
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Rider "));
    f.render_widget(paragraph, area);
}

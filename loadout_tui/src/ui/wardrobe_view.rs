//! Wardrobe tab view - browse the owned collection and equip items

use crate::app::App;
use crate::ui::rarity_color;
use loadout_core::ItemCard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    // Split into three columns: categories, item list, preview
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_categories(f, app, chunks[0]);
    draw_items(f, app, chunks[1]);
    draw_preview(f, app, chunks[2]);
}

fn draw_categories(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    for (i, category) in app.taxonomy.categories.iter().enumerate() {
        let is_selected = i == app.selected_category;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, category.label),
            style,
        )));
    }

    let category = app.current_category();
    if !category.subcategories.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [s] Subcategory:",
            Style::default().fg(Color::DarkGray),
        )));

        let mut spans: Vec<Span> = vec![Span::raw("  ")];
        for (i, sub) in category.subcategories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            let style = if i == app.selected_subcategory {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(sub.label.clone(), style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Categories "),
    );
    f.render_widget(paragraph, area);
}

fn draw_items(f: &mut Frame, app: &App, area: Rect) {
    let items = app.filtered_items();
    let mut lines: Vec<Line> = vec![];

    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing owned in this category",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, item) in items.iter().enumerate() {
        let is_selected = i == app.selected_item;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let mut spans = vec![
            Span::styled(prefix, style),
            Span::styled(
                format!("{:24}", item.name),
                Style::default().fg(rarity_color(item.rarity.as_deref())),
            ),
        ];
        if app.loadout.is_equipped(item) {
            spans.push(Span::styled(
                " [equipped]",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(spans));
    }

    let category = app.current_category();
    let title = format!(" {} ({}) ", category.label, items.len());
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let items = app.filtered_items();
    let lines = match items.get(app.selected_item) {
        Some(item) => preview_lines(item, app.loadout.is_equipped(item)),
        None => vec![Line::from(Span::styled(
            "  No item selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Preview "));
    f.render_widget(paragraph, area);
}

fn preview_lines(item: &ItemCard, equipped: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        item.name.clone(),
        Style::default()
            .fg(rarity_color(item.rarity.as_deref()))
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(rarity) = &item.rarity {
        lines.push(Line::from(Span::styled(
            rarity.clone(),
            Style::default().fg(rarity_color(Some(rarity))),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Token #{}", item.token_id),
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(url) = item.image_url() {
        lines.push(Line::from(Span::styled(
            url,
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    for attr in &item.attributes {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", attr.trait_type),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(attr.value.clone(), Style::default().fg(Color::White)),
        ]));
    }

    if equipped {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Equipped",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

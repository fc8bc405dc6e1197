//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-4", "Jump to tab (Wardrobe/Loadout/Stats/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Wardrobe ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←/h  →/l", "Previous/next category"),
        key_line("s", "Cycle subcategory (Attire and Weapons)"),
        key_line("Enter", "Equip selected item into its category slot"),
        key_line("u", "Unequip the selected item's category slot"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Build ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("m", "Toggle mounted (gates the horse bonus)"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ How Stats Combine ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Total = character base + item modifiers (+ horse bonus while mounted)"),
        Line::from(""),
        Line::from("  Item modifiers are parsed from attribute values shaped"),
        Line::from("  like \"+2 Charm\" or \"-1 Grit\". Values that don't parse,"),
        Line::from("  or name a stat outside the canonical eight, are ignored."),
        Line::from(""),
        Line::from("  One item per category: equipping into an occupied slot"),
        Line::from("  replaces the previous item."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:18}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

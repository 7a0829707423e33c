use chrono::{DateTime, Utc};

use flashdeck_lib::flashcards::{format_interval, Card};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
}

/// Wrap text in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// When a card is due, relative to `now`
pub fn due_label(card: &Card, now: DateTime<Utc>) -> String {
    if card.is_due(now) {
        return "due".to_string();
    }

    let remaining = card.next_review - now;
    let days = remaining.num_days();
    if days >= 1 {
        format!("in {}", format_interval(u32::try_from(days).unwrap_or(u32::MAX)))
    } else if remaining.num_hours() >= 1 {
        format!("in {}h", remaining.num_hours())
    } else {
        format!("in {}m", remaining.num_minutes().max(1))
    }
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let kept: String = single_line.chars().take(width.saturating_sub(1)).collect();
    format!("{}\u{2026}", kept)
}

/// Render cards as an aligned table
pub fn render_cards(cards: &[&Card], now: DateTime<Utc>, use_color: bool) -> String {
    let front_width = cards.iter().map(|c| c.front.chars().count()).max().unwrap_or(5).clamp(5, 32);
    let back_width = cards.iter().map(|c| c.back.chars().count()).max().unwrap_or(4).clamp(4, 32);

    let mut lines = Vec::with_capacity(cards.len() + 2);
    lines.push(format!(
        "{:<fw$} {:<bw$} {:>8} {:>4} {}",
        "Front", "Back", "Interval", "Reps", "Next",
        fw = front_width,
        bw = back_width,
    ));
    lines.push(format!(
        "{} {} {} {} {}",
        "\u{2500}".repeat(front_width),
        "\u{2500}".repeat(back_width),
        "\u{2500}".repeat(8),
        "\u{2500}".repeat(4),
        "\u{2500}".repeat(8),
    ));

    for card in cards {
        let due = due_label(card, now);
        let due = if card.is_due(now) {
            paint(&due, Color::YELLOW, use_color)
        } else {
            paint(&due, Color::DIM, use_color)
        };
        lines.push(format!(
            "{:<fw$} {:<bw$} {:>8} {:>4} {}",
            truncate(&card.front, front_width),
            truncate(&card.back, back_width),
            format_interval(card.interval),
            card.repetitions,
            due,
            fw = front_width,
            bw = back_width,
        ));
    }

    lines.join("\n")
}

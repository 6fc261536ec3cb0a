use crate::constants::*;
use crate::state::CardView;
use pushform_util::Position;
use std::fmt::Write;

/// Escape text for use as element content or attribute value
fn text(s: &str) -> String {
    ammonia::clean_text(s)
}

/// Render one notification card
///
/// Title and message are inserted as text, never as markup.
pub fn render_card(card: &CardView) -> String {
    let classes = card
        .classes
        .iter()
        .map(|c| text(c))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="{classes}" data-id="{}" style="opacity: {}; transform: {}">"#,
        card.id.0, card.opacity, card.transform,
    );
    let _ = write!(out, r#"<div class="notification-header">{}</div>"#, text(&card.title));
    let _ = write!(out, r#"<div class="notification-content">{}</div>"#, text(&card.message));
    if let Some(width) = card.indicator_width {
        let _ = write!(out, r#"<div class="notification-indicator" style="width: {width:.1}%"></div>"#);
    }
    let _ = write!(out, r#"<button class="notification-close">{CLOSE_LABEL}</button>"#);
    out.push_str("</div>");
    out
}

/// Render the container of one position with its cards
pub fn render_container(position: Position, cards: &[CardView]) -> String {
    let mut out = format!(r#"<div class="{CONTAINER_CLASS} {position}">"#);
    for card in cards {
        out.push_str(&render_card(card));
    }
    out.push_str("</div>");
    out
}

/// Render every container in page order
pub fn render_board(containers: &[(Position, Vec<CardView>)]) -> String {
    containers
        .iter()
        .map(|(position, cards)| render_container(*position, cards))
        .collect::<Vec<_>>()
        .join("\n")
}

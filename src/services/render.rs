use crate::domain::{GameRecord, WidgetPayload};

/// Steam logo from the Nerd Fonts set.
pub const STATUS_TEXT: &str = "\u{f1b6} ";
/// Sale tag from the Nerd Fonts set.
pub const STATUS_ALT: &str = "\u{f00ad} ";
pub const TOOLTIP_HEADER: &str = "\t\t<span size=\"x-large\">Steam Sales</span>\t\t\n";

pub fn render_payload(games: &[GameRecord]) -> WidgetPayload {
    WidgetPayload {
        text: STATUS_TEXT.to_string(),
        alt: STATUS_ALT.to_string(),
        tooltip: render_tooltip(games),
    }
}

pub fn render_tooltip(games: &[GameRecord]) -> String {
    let mut tooltip = String::from(TOOLTIP_HEADER);
    for game in games {
        tooltip.push_str(&render_line(game));
    }
    tooltip
}

fn render_line(game: &GameRecord) -> String {
    let name = escape_markup(&game.name);
    if game.is_free {
        format!("<small>{} is FREE!</small>\n", name)
    } else {
        format!(
            "<small>{}: {}({}%)</small>\n",
            name, game.price, game.discount
        )
    }
}

/// Pango markup only trips over a bare `&` in store titles.
fn escape_markup(name: &str) -> String {
    name.replace('&', "&amp;")
}

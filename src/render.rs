//! ASCII board renderer with optional ANSI colors.

use crate::game::{BOARD_SIZE, Coord, Game, KnightId, KnightStatus};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GRAY: &str = "\x1b[90m";

/// ANSI color for each knight.
const fn knight_color(id: KnightId) -> &'static str {
    match id {
        KnightId::Red => "\x1b[31m",
        KnightId::Blue => "\x1b[34m",
        KnightId::Green => "\x1b[32m",
        KnightId::Yellow => "\x1b[33m",
    }
}

/// Render the board and a per-entity summary.
///
/// Output format:
/// ```text
///     0 1 2 3 4 5 6 7
///   ┌─────────────────┐
/// 0 │ . . . . . . . Y │
/// 1 │ . . . . . . . . │
/// 2 │ . . R . . d . . │
/// ...
///   └─────────────────┘
///
/// Legend: R B G Y=Knight  x=Dead knight  a d m h=Item  .=Empty
///
/// red     LIVE     (2, 2)  axe          3/1
/// axe     (2, 2)   equipped
/// ```
#[must_use]
pub fn render_ascii(game: &Game, colored: bool) -> String {
    let mut output = String::new();

    render_board(&mut output, game, colored);
    output.push_str("\nLegend: R B G Y=Knight  x=Dead knight  a d m h=Item  .=Empty\n\n");
    render_summary(&mut output, game);

    output
}

/// Render the board grid.
fn render_board(output: &mut String, game: &Game, colored: bool) {
    output.push_str("   ");
    for col in 0..BOARD_SIZE {
        output.push_str(&format!(" {col}"));
    }
    output.push('\n');

    let border = "─".repeat(usize::from(BOARD_SIZE) * 2 + 1);
    output.push_str(&format!("  ┌{border}┐\n"));
    for row in 0..BOARD_SIZE {
        output.push_str(&format!("{row} │ "));
        for col in 0..BOARD_SIZE {
            render_tile(output, game, Coord::new(row, col), colored);
            output.push(' ');
        }
        output.push_str("│\n");
    }
    output.push_str(&format!("  └{border}┘\n"));
}

/// Render a single tile: live knight, then dead knight, then loose item.
fn render_tile(output: &mut String, game: &Game, tile: Coord, colored: bool) {
    let paint = |output: &mut String, style: &str, symbol: char| {
        if colored {
            output.push_str(&format!("{style}{symbol}{RESET}"));
        } else {
            output.push(symbol);
        }
    };

    if let Some(knight) = game.live_knights().find(|k| k.position == Some(tile)) {
        let style = format!("{BOLD}{}", knight_color(knight.id));
        paint(output, &style, knight.id.code());
    } else if let Some(knight) = game
        .knights
        .iter()
        .find(|k| k.status == KnightStatus::Dead && k.position == Some(tile))
    {
        paint(output, knight_color(knight.id), 'x');
    } else if let Some(item) = game
        .items
        .iter()
        .find(|i| !i.equipped && i.position == tile)
    {
        paint(output, DIM, item.id.code().to_ascii_lowercase());
    } else {
        paint(output, GRAY, '.');
    }
}

/// Render one line per knight, then one line per item.
fn render_summary(output: &mut String, game: &Game) {
    for knight in &game.knights {
        let position = knight
            .position
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let item = knight.item.map_or("-", |id| id.name());
        output.push_str(&format!(
            "{:<8}{:<9}{position:<8}{item:<13}{}/{}\n",
            knight.id.color(),
            knight.status,
            knight.attack,
            knight.defense
        ));
    }
    for item in &game.items {
        let state = if item.equipped { "equipped" } else { "on floor" };
        output.push_str(&format!(
            "{:<12}{:<8}{state}\n",
            item.name(),
            item.position.to_string()
        ));
    }
}

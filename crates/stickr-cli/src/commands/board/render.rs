//! Board drawing.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use stickr_board::{BoardSession, Clipboard, ToastLevel};
use stickr_core::types::StickerColor;

use super::Mode;

const CELL_HEIGHT: u16 = 5;
const MIN_CELL_WIDTH: u16 = 10;
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 3;
const HELP: &str =
    "n new  arrows move  enter copy  c color  d delete  r rename  t theme  s share  D delete folder  x dismiss  q quit";

fn sticker_color(color: StickerColor) -> Color {
    match color {
        StickerColor::Yellow => Color::Yellow,
        StickerColor::Pink => Color::Magenta,
        StickerColor::Blue => Color::Blue,
        StickerColor::Green => Color::Green,
        StickerColor::Purple => Color::DarkMagenta,
    }
}

/// Redraw the whole screen.
pub fn draw<W: Write, C: Clipboard>(
    out: &mut W,
    session: &BoardSession<C>,
    mode: &Mode,
    (width, height): (u16, u16),
) -> io::Result<()> {
    let folder = session.folder();
    let (fg, bg) = if folder.dark_mode {
        (Color::White, Color::Black)
    } else {
        (Color::Reset, Color::Reset)
    };

    queue!(
        out,
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(clip(&folder.name, usize::from(width))),
        SetAttribute(Attribute::NormalIntensity),
        SetAttribute(Attribute::Dim),
        Print(format!("  {}", session.share_url())),
        SetAttribute(Attribute::NormalIntensity),
    )?;

    draw_grid(out, session, (width, height))?;
    draw_footer(out, session, mode, (width, height), (fg, bg))?;

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    out.flush()
}

fn draw_grid<W: Write, C: Clipboard>(
    out: &mut W,
    session: &BoardSession<C>,
    (width, height): (u16, u16),
) -> io::Result<()> {
    let stickers = session.stickers();
    if stickers.is_empty() {
        return queue!(
            out,
            MoveTo(0, HEADER_ROWS),
            Print("No stickers yet. Press n to add one.")
        );
    }

    let columns = session.controller().columns().max(1);
    let cell_width = cell_width(width, columns);
    let inner = usize::from(cell_width.saturating_sub(2));
    let visible_rows = usize::from(
        (height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) / CELL_HEIGHT).max(1),
    );
    let focused = session.focus().index_in(stickers);
    let first_row = first_visible_row(focused, columns, visible_rows);

    for (index, sticker) in stickers.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let x = to_u16(index % columns).saturating_mul(cell_width);
        let y = HEADER_ROWS.saturating_add(to_u16(row).saturating_mul(CELL_HEIGHT));
        let is_focused = focused == Some(index);

        queue!(
            out,
            SetBackgroundColor(sticker_color(sticker.color().color())),
            SetForegroundColor(Color::Black),
        )?;
        if is_focused {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }

        let lines = wrap_lines(&sticker.content, inner, usize::from(CELL_HEIGHT - 1));
        for line in 0..CELL_HEIGHT - 1 {
            let text = lines.get(usize::from(line)).map(String::as_str).unwrap_or("");
            queue!(
                out,
                MoveTo(x, y + line),
                Print(format!(" {text:<inner$} ")),
            )?;
        }
        queue!(out, SetAttribute(Attribute::NoReverse), ResetColor)?;
    }

    Ok(())
}

fn draw_footer<W: Write, C: Clipboard>(
    out: &mut W,
    session: &BoardSession<C>,
    mode: &Mode,
    (width, height): (u16, u16),
    (fg, bg): (Color, Color),
) -> io::Result<()> {
    let width = usize::from(width);
    let prompt_row = height.saturating_sub(3);
    let toast_row = height.saturating_sub(2);
    let help_row = height.saturating_sub(1);

    queue!(out, SetForegroundColor(fg), SetBackgroundColor(bg))?;

    let prompt = match mode {
        Mode::Rename(buffer) => Some(format!("Rename folder: {buffer}_")),
        Mode::ConfirmDeleteFolder => {
            Some("Delete this folder and all its stickers? (y/N)".to_string())
        }
        Mode::Board if session.focus().is_composing() => {
            let last = session.draft().rsplit('\n').next().unwrap_or("");
            Some(format!("New sticker (enter save, alt+enter newline, esc cancel): {last}_"))
        }
        Mode::Board => None,
    };
    if let Some(prompt) = prompt {
        queue!(out, MoveTo(0, prompt_row), Print(clip(&prompt, width)))?;
    }

    if let Some(toast) = session.toasts().latest() {
        let color = match toast.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        };
        queue!(
            out,
            MoveTo(0, toast_row),
            SetForegroundColor(color),
            Print(clip(&toast.message, width)),
            SetForegroundColor(fg),
        )?;
    }

    queue!(
        out,
        MoveTo(0, help_row),
        SetAttribute(Attribute::Dim),
        Print(clip(HELP, width)),
        SetAttribute(Attribute::NormalIntensity),
    )
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Width of one grid cell, never narrower than `MIN_CELL_WIDTH`.
fn cell_width(width: u16, columns: usize) -> u16 {
    (width / to_u16(columns.max(1))).max(MIN_CELL_WIDTH)
}

/// First grid row to draw so the focused sticker stays on screen.
fn first_visible_row(focused: Option<usize>, columns: usize, visible_rows: usize) -> usize {
    let focused_row = focused.map_or(0, |index| index / columns.max(1));
    focused_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Split content into at most `max_lines` lines of `width` characters.
fn wrap_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let chars: Vec<char> = paragraph.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
        if lines.len() >= max_lines {
            break;
        }
    }
    lines.truncate(max_lines);
    lines
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_splits_long_lines_and_keeps_breaks() {
        let lines = wrap_lines("abcdefgh\nij", 3, 10);
        assert_eq!(lines, vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_lines_stops_at_max_lines() {
        let lines = wrap_lines("one\ntwo\nthree\nfour\nfive", 10, 3);
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_focused_row_stays_visible() {
        assert_eq!(first_visible_row(None, 4, 2), 0);
        assert_eq!(first_visible_row(Some(3), 4, 2), 0);
        assert_eq!(first_visible_row(Some(8), 4, 2), 1);
        assert_eq!(first_visible_row(Some(13), 4, 1), 3);
    }

    #[test]
    fn test_cell_width_handles_any_column_count() {
        assert_eq!(cell_width(80, 4), 20);
        assert_eq!(cell_width(80, 0), 80);
        assert_eq!(cell_width(80, 65_536), MIN_CELL_WIDTH);
        assert_eq!(cell_width(20, 4), MIN_CELL_WIDTH);
    }

    #[test]
    fn test_clip_counts_characters() {
        assert_eq!(clip("héllo", 2), "hé");
    }
}

use crate::board::Board;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout};

pub(crate) const GLYPH_ALIVE: char = 'X';
pub(crate) const GLYPH_DEAD: char = '.';

pub(crate) struct TermGuard {
    pub(crate) out: Stdout,
}

impl TermGuard {
    pub(crate) fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub(crate) struct Hud {
    pub(crate) running: bool,
    pub(crate) delay_ms: u128,
    pub(crate) generation: u64,
}

/// Paint the whole board, top-to-bottom, left-to-right.
pub(crate) fn draw_board(out: &mut Stdout, board: &Board) -> io::Result<()> {
    let mut frame = String::with_capacity(board.rows() * (board.cols() + 2));
    board.for_each(|c| {
        frame.push(if c.cell.alive { GLYPH_ALIVE } else { GLYPH_DEAD });
        if c.x + 1 == c.board.cols() {
            frame.push_str("\r\n");
        }
    });
    queue!(
        out,
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::White),
        SetBackgroundColor(Color::Black),
        Print(frame)
    )
}

/// Inverse-video status line on row `y`, padded to the terminal width.
pub(crate) fn draw_hud(out: &mut Stdout, y: u16, width: u16, hud: &Hud) -> io::Result<()> {
    let mut line = format!(
        "Status = {} ('s' to toggle) | Delay = {} ms ('<' '>' adjust) | Generation = {} | 'r' randomize | 'q' quit",
        if hud.running { "running" } else { "paused" },
        hud.delay_ms,
        hud.generation
    );
    let w = width as usize;
    line.truncate(w);
    if line.len() < w {
        line.push_str(&" ".repeat(w - line.len()));
    }
    queue!(
        out,
        cursor::MoveTo(0, y),
        SetForegroundColor(Color::Black),
        SetBackgroundColor(Color::White),
        Print(line),
        ResetColor
    )
}

use crate::board::Board;
use crate::input::{self, Action};
use crate::render::{self, Hud, TermGuard};
use crate::Args;
use anyhow::Context;
use crossterm::terminal;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{Stdout, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Bottom row is reserved for the status line.
const HUD_ROWS: u16 = 1;

pub(crate) struct App {
    board: Board,
    rng: StdRng,
    running: bool,
    delay: Duration,
    delay_step: Duration,
    generation: u64,
    cols: u16,
    rows: u16,
    should_quit: bool,
}

pub(crate) fn run(args: &Args) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(wall_clock_seed);
    let mut tg = TermGuard::new().context("terminal init")?;
    let mut app = App::init(args, seed)?;
    app.run(&mut tg.out)
}

impl App {
    fn init(args: &Args, seed: u64) -> anyhow::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut board = Board::new(rows.saturating_sub(HUD_ROWS) as usize, cols as usize)
            .context("board allocation")?;
        let mut rng = StdRng::seed_from_u64(seed);
        board.randomize(&mut rng);
        Ok(Self {
            board,
            rng,
            running: true,
            delay: Duration::from_millis(args.ms),
            delay_step: Duration::from_millis(args.step),
            generation: 0,
            cols,
            rows,
            should_quit: false,
        })
    }

    fn run(&mut self, out: &mut Stdout) -> anyhow::Result<()> {
        while !self.should_quit {
            self.resize_if_needed()?;

            if self.running {
                self.board.compute_next_generation()?;
                self.board.commit_generation();
                self.generation += 1;
            }

            render::draw_board(out, &self.board)?;
            render::draw_hud(
                out,
                self.rows.saturating_sub(HUD_ROWS),
                self.cols,
                &Hud {
                    running: self.running,
                    delay_ms: self.delay.as_millis(),
                    generation: self.generation,
                },
            )?;
            out.flush()?;

            for action in input::wait_actions(self.delay)? {
                self.apply(action);
            }
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.running = !self.running,
            Action::Slower => self.delay += self.delay_step,
            Action::Faster => self.delay = self.delay.saturating_sub(self.delay_step),
            Action::Randomize => self.board.randomize(&mut self.rng),
        }
    }

    /// Refit to the terminal: a resize gets a fresh, re-randomized board.
    fn resize_if_needed(&mut self) -> anyhow::Result<()> {
        let (cols, rows) = terminal::size()?;
        if cols == self.cols && rows == self.rows {
            return Ok(());
        }
        self.cols = cols;
        self.rows = rows;
        self.board = Board::new(rows.saturating_sub(HUD_ROWS) as usize, cols as usize)
            .context("board allocation after resize")?;
        self.board.randomize(&mut self.rng);
        Ok(())
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

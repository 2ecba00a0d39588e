//! Raw mode setup and teardown.

use super::Draw;
use std::io::{self, stdout, Stdout, Write};
use termion::raw::{IntoRawMode, RawTerminal};
use termion::{clear, color, cursor};

/// Holds the terminal in raw mode; restores it when dropped.
pub struct Terminal {
    stdout: RawTerminal<Stdout>,
}

impl Terminal {
    pub const HELP: &'static str = "s/Enter: Start  e: Evaluate  q/Esc: Quit";

    pub fn set_up(title: &str) -> io::Result<Self> {
        let mut stdout = stdout().into_raw_mode()?;
        write!(
            stdout,
            "{}{}{}{}{}",
            color::Fg(Draw::<Stdout>::default_fg()),
            color::Bg(Draw::<Stdout>::default_bg()),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Hide,
        )?;
        write!(
            stdout,
            "{}{title}  {}{}",
            color::Fg(color::LightYellow),
            color::Fg(color::LightBlack),
            Self::HELP,
        )?;
        stdout.flush()?;
        Ok(Self { stdout })
    }

    fn restore(&mut self) -> io::Result<()> {
        write!(
            self.stdout,
            "{}{}{}{}{}",
            color::Fg(color::Reset),
            color::Bg(color::Reset),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Show,
        )?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(%error, "failed to restore terminal");
        }
    }
}

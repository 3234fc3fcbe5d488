use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::view::{Line, truncate};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block for the next event, then drain whatever else is already pending.
    pub fn poll(&self) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Draw rows starting at `scroll`, focused rows in reverse video.
    pub fn draw(&mut self, lines: &[Line], scroll: usize) -> io::Result<()> {
        let (width, height) = self.size()?;

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        for (row, line) in lines.iter().skip(scroll).take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            if line.focused {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            if line.target.is_some() {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.stdout,
                Print(truncate(&line.text, width as usize)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

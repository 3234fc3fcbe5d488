mod cli;
mod page;
mod pointer;
mod terminal;
mod view;

use std::fs::{self, File};
use std::io;
use std::path::Path;

use clap::Parser;
use collapse::{BinderConfig, ToggleBinder};
use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};
use pagedom::{
    Document, DomError, Event, FocusState, Key, Modifiers, MouseButton, NodeId, parse_tabindex,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::Args;
use crate::pointer::ClickTracker;
use crate::terminal::Terminal;
use crate::view::Line;

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Set up file logging
    let log_file = File::create(&args.log)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let binder = load_binder(args.config.as_deref())?;
    let mut doc = Document::new(page::build(args.panels));
    binder.initialize(&mut doc);

    let mut app = App {
        doc,
        binder,
        focus: FocusState::new(),
        clicks: ClickTracker::default(),
        scroll: 0,
    };
    let mut term = Terminal::new()?;

    loop {
        let rows = app.rows()?;
        term.draw(&rows, app.scroll)?;

        for event in term.poll()? {
            if let Flow::Quit = app.handle(&event, &rows).map_err(io::Error::other)? {
                log::info!("quit");
                return Ok(());
            }
        }
    }
}

fn load_binder(path: Option<&Path>) -> io::Result<ToggleBinder> {
    let Some(path) = path else {
        return Ok(ToggleBinder::default());
    };
    let json = fs::read_to_string(path)?;
    let config = BinderConfig::from_json(&json).map_err(io::Error::other)?;
    log::info!("loaded config from {}", path.display());
    ToggleBinder::new(config).map_err(io::Error::other)
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App {
    doc: Document,
    binder: ToggleBinder,
    focus: FocusState,
    clicks: ClickTracker,
    scroll: usize,
}

impl App {
    fn rows(&self) -> io::Result<Vec<Line>> {
        view::lines(&self.doc, &self.binder, self.focus.focused()).map_err(io::Error::other)
    }

    fn handle(&mut self, event: &CtEvent, rows: &[Line]) -> Result<Flow, DomError> {
        match event {
            CtEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    return Ok(Flow::Continue);
                }
                let key: Key = key_event.code.into();
                let modifiers: Modifiers = key_event.modifiers.into();

                // Unfocused keys go to the page root, like a browser's body.
                let target = self.focus.focused().unwrap_or(self.doc.root());
                let outcome = self.doc.dispatch(target, Event::Key { key, modifiers })?;
                if outcome.default_prevented {
                    return Ok(Flow::Continue);
                }
                Ok(self.default_key_action(key, modifiers, rows.len()))
            }
            CtEvent::Mouse(mouse) => {
                let row = self.scroll + mouse.row as usize;
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = rows.get(row).and_then(|l| l.target);
                        if let Some(target) = target {
                            if let Some(focusable) = self.focusable_ancestor(target)? {
                                self.focus.focus(focusable);
                            }
                        }
                        self.clicks.press(target, button.into());
                    }
                    MouseEventKind::Up(button) => {
                        let button: MouseButton = button.into();
                        let target = rows.get(row).and_then(|l| l.target);
                        if let Some(target) = self.clicks.release(target, button) {
                            self.doc.dispatch(target, Event::Click { button })?;
                        }
                    }
                    MouseEventKind::ScrollDown => self.scroll_by(1, rows.len()),
                    MouseEventKind::ScrollUp => self.scroll_by(-1, rows.len()),
                    _ => {}
                }
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    /// What the environment does with a key nobody prevented.
    fn default_key_action(&mut self, key: Key, modifiers: Modifiers, row_count: usize) -> Flow {
        match key {
            Key::Char('q') | Key::Escape => return Flow::Quit,
            Key::Tab if modifiers.shift => {
                self.focus.focus_prev(&self.doc);
            }
            Key::BackTab => {
                self.focus.focus_prev(&self.doc);
            }
            Key::Tab => {
                self.focus.focus_next(&self.doc);
            }
            Key::SPACE | Key::Down | Key::PageDown => self.scroll_by(1, row_count),
            Key::Up | Key::PageUp => self.scroll_by(-1, row_count),
            _ => {}
        }
        Flow::Continue
    }

    fn scroll_by(&mut self, delta: isize, row_count: usize) {
        let max = row_count.saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Nearest element (self included) that can take keyboard focus.
    fn focusable_ancestor(&self, node: NodeId) -> Result<Option<NodeId>, DomError> {
        for id in self.doc.tree().ancestors_inclusive(node)? {
            let focusable = self
                .doc
                .get_attribute(id, "tabindex")?
                .and_then(parse_tabindex)
                .is_some();
            if focusable {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}

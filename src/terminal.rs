use std::io;

use console::{Key, Term};

/// What a menu needs from a terminal: one key at a time, and a way to replace
/// whatever is on screen with a freshly rendered frame.
pub trait Terminal {
    /// Whether keys can actually be read. Without a tty `read_key` returns
    /// immediately instead of blocking.
    fn is_interactive(&self) -> bool;
    fn read_key(&mut self) -> io::Result<Key>;
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// Real terminal on stdout.
///
/// `Term::read_key` switches the tty into raw mode for the duration of a single
/// read and restores it before returning, on the error path too, so no raw-mode
/// state outlives a call.
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }

    /// Hides the cursor until the returned guard is dropped.
    pub fn hidden_cursor(&self) -> io::Result<CursorGuard> {
        self.term.hide_cursor()?;
        Ok(CursorGuard { term: self.term.clone() })
    }
}

impl Terminal for ConsoleTerminal {
    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.term.read_key()
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.write_str(frame)?;
        self.term.flush()
    }
}

pub struct CursorGuard {
    term: Term,
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}

// ── Scripted terminal (tests) ─────────────────────────────────────────────────

/// Feeds a fixed key sequence and records every presented frame.
#[cfg(test)]
pub struct ScriptedTerminal {
    keys: std::collections::VecDeque<Key>,
    interactive: bool,
    pub frames: Vec<String>,
}

#[cfg(test)]
impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self { keys: keys.into_iter().collect(), interactive: true, frames: Vec::new() }
    }

    /// A terminal whose output is redirected away from a tty.
    pub fn detached() -> Self {
        Self { interactive: false, ..Self::new(Vec::new()) }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
impl Terminal for ScriptedTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(console::strip_ansi_codes(frame).into_owned());
        Ok(())
    }
}

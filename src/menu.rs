//! Cursor-driven list selection shared by every wizard screen.
//!
//! A screen is a list of [`MenuItem`]s plus a [`Screen`] description. The
//! [`Menu`] state machine consumes one [`MenuKey`] at a time: arrows move a
//! clamped cursor, space flips the item under the cursor on toggle screens,
//! and enter ends the loop with the cursor index.

use std::io;

use console::{style, Key};

use crate::{
    catalog::{Feature, Plugin, Theme},
    locale::Language,
    terminal::Terminal,
    ui,
};

// ── Keys ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Toggle,
    Confirm,
    Ignored,
}

impl MenuKey {
    pub fn classify(key: &Key) -> Self {
        match key {
            Key::ArrowUp | Key::Char('k') => MenuKey::Up,
            Key::ArrowDown | Key::Char('j') => MenuKey::Down,
            Key::Char(' ') => MenuKey::Toggle,
            Key::Enter | Key::Char('\n') | Key::Char('\r') => MenuKey::Confirm,
            _ => MenuKey::Ignored,
        }
    }
}

// ── Items ─────────────────────────────────────────────────────────────────────

/// Anything that can be shown as one row of a menu.
pub trait MenuItem {
    fn label(&self, lang: Language) -> &str;

    fn description(&self, _lang: Language) -> Option<&str> {
        None
    }

    /// Checkbox state; only consulted on toggle screens.
    fn is_selected(&self) -> bool {
        false
    }

    fn toggle(&mut self) {}
}

impl MenuItem for Language {
    fn label(&self, _lang: Language) -> &str {
        self.strings().lang_name
    }
}

impl MenuItem for Feature {
    fn label(&self, lang: Language) -> &str {
        self.label.get(lang)
    }

    fn description(&self, lang: Language) -> Option<&str> {
        Some(self.description.get(lang))
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

impl MenuItem for Theme {
    fn label(&self, _lang: Language) -> &str {
        self.name
    }
}

impl MenuItem for Plugin {
    fn label(&self, _lang: Language) -> &str {
        self.name
    }

    fn description(&self, lang: Language) -> Option<&str> {
        Some(self.description.get(lang))
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Pick exactly one row; space does nothing.
    Choice,
    /// Flip any number of checkboxes, then confirm.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Confirmed(usize),
}

#[derive(Debug, Clone)]
pub struct Menu {
    cursor: usize,
    len: usize,
    mode: MenuMode,
}

impl Menu {
    /// `len` must be non-zero; `start` is clamped into range.
    pub fn new(len: usize, mode: MenuMode, start: usize) -> Self {
        debug_assert!(len > 0, "menus need at least one item");
        Self { cursor: start.min(len.saturating_sub(1)), len, mode }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle<T: MenuItem>(&mut self, key: MenuKey, items: &mut [T]) -> Outcome {
        match key {
            MenuKey::Up => self.cursor = self.cursor.saturating_sub(1),
            MenuKey::Down => self.cursor = (self.cursor + 1).min(self.len.saturating_sub(1)),
            MenuKey::Toggle if self.mode == MenuMode::Toggle => {
                if let Some(item) = items.get_mut(self.cursor) {
                    item.toggle();
                }
            }
            MenuKey::Confirm => return Outcome::Confirmed(self.cursor),
            MenuKey::Toggle | MenuKey::Ignored => {}
        }
        Outcome::Continue
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum Header<'a> {
    /// Small centered program banner.
    Banner(&'a str),
    /// Wide box with a localized screen title.
    Title(&'a str),
}

/// Static parts of a screen, redrawn on every iteration.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub header: Header<'a>,
    pub hint: Option<&'a str>,
    pub mode: MenuMode,
    pub lang: Language,
}

/// Builds the full frame for one iteration of the menu loop.
pub fn render<T: MenuItem>(screen: &Screen<'_>, items: &[T], cursor: usize) -> String {
    let mut out = match screen.header {
        Header::Banner(text) => ui::banner_box(text),
        Header::Title(text) => ui::header_box(text),
    };

    for (i, item) in items.iter().enumerate() {
        let label = item.label(screen.lang);
        let text = match screen.mode {
            MenuMode::Toggle => {
                let mark = if item.is_selected() { "X" } else { " " };
                format!("[{}] {}", mark, label)
            }
            MenuMode::Choice => label.to_string(),
        };

        if i == cursor {
            out.push_str(&format!(
                "{}{}",
                style("  ▸ ").yellow(),
                style(format!(" {} ", text)).yellow().reverse()
            ));
            if let Some(desc) = item.description(screen.lang).filter(|d| !d.is_empty()) {
                out.push_str(&format!("{}", style(format!(" ← {}", desc)).blue()));
            }
        } else {
            out.push_str("    ");
            out.push_str(&text);
        }
        out.push('\n');
    }

    if let Some(hint) = screen.hint {
        out.push('\n');
        out.push_str(&format!("{}", style(hint).yellow()));
        out.push('\n');
    }

    out
}

/// Runs one screen until the user confirms; returns the confirmed index.
///
/// Toggle screens mutate `items` in place as keys arrive. Fails with
/// `NotConnected` up front when `term` cannot deliver keys.
pub fn run<T, D>(
    term: &mut D,
    screen: &Screen<'_>,
    items: &mut [T],
    start: usize,
) -> io::Result<usize>
where
    T: MenuItem,
    D: Terminal + ?Sized,
{
    if !term.is_interactive() {
        return Err(io::Error::new(
            io::ErrorKind::NotConnected,
            "menus need an interactive terminal",
        ));
    }

    let mut menu = Menu::new(items.len(), screen.mode, start);
    loop {
        term.present(&render(screen, items, menu.cursor()))?;
        let key = MenuKey::classify(&term.read_key()?);
        if let Outcome::Confirmed(index) = menu.handle(key, items) {
            return Ok(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_features, default_plugins, default_themes};
    use crate::terminal::ScriptedTerminal;

    fn toggle_screen() -> Screen<'static> {
        Screen {
            header: Header::Title(" Select Plugins "),
            hint: Some("hint"),
            mode: MenuMode::Toggle,
            lang: Language::English,
        }
    }

    #[test]
    fn keys_are_classified() {
        assert_eq!(MenuKey::classify(&Key::ArrowUp), MenuKey::Up);
        assert_eq!(MenuKey::classify(&Key::ArrowDown), MenuKey::Down);
        assert_eq!(MenuKey::classify(&Key::Char(' ')), MenuKey::Toggle);
        assert_eq!(MenuKey::classify(&Key::Enter), MenuKey::Confirm);
        assert_eq!(MenuKey::classify(&Key::Char('q')), MenuKey::Ignored);
        assert_eq!(MenuKey::classify(&Key::Escape), MenuKey::Ignored);
        assert_eq!(MenuKey::classify(&Key::ArrowLeft), MenuKey::Ignored);
    }

    #[test]
    fn cursor_stays_in_bounds_for_any_walk() {
        let mut items = default_themes();
        let len = items.len();
        let mut menu = Menu::new(len, MenuMode::Choice, 0);

        // xorshift walk; long runs in either direction hit both ends.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let key = if seed & 1 == 0 { MenuKey::Up } else { MenuKey::Down };
            assert_eq!(menu.handle(key, &mut items), Outcome::Continue);
            assert!(menu.cursor() < len);
        }
    }

    #[test]
    fn cursor_clamps_instead_of_wrapping() {
        let mut items = default_themes();
        let mut menu = Menu::new(items.len(), MenuMode::Choice, 0);
        menu.handle(MenuKey::Up, &mut items);
        assert_eq!(menu.cursor(), 0);
        for _ in 0..10 {
            menu.handle(MenuKey::Down, &mut items);
        }
        assert_eq!(menu.cursor(), items.len() - 1);
    }

    #[test]
    fn start_index_is_clamped() {
        assert_eq!(Menu::new(3, MenuMode::Choice, 9).cursor(), 2);
    }

    #[test]
    fn toggle_flips_only_the_item_under_cursor() {
        for target in 0..default_features().len() {
            let mut items = default_features();
            let before: Vec<bool> = items.iter().map(|f| f.selected).collect();
            let mut menu = Menu::new(items.len(), MenuMode::Toggle, target);

            menu.handle(MenuKey::Toggle, &mut items);

            for (i, item) in items.iter().enumerate() {
                assert_eq!(item.selected, before[i] ^ (i == target), "item {i}");
            }
        }
    }

    #[test]
    fn toggle_is_a_no_op_on_choice_screens() {
        let mut items = default_plugins();
        let mut menu = Menu::new(items.len(), MenuMode::Choice, 1);
        menu.handle(MenuKey::Toggle, &mut items);
        assert!(items.iter().all(|p| p.selected));
    }

    #[test]
    fn confirm_reports_cursor() {
        let mut items = default_themes();
        let mut menu = Menu::new(items.len(), MenuMode::Choice, 0);
        menu.handle(MenuKey::Down, &mut items);
        menu.handle(MenuKey::Ignored, &mut items);
        assert_eq!(menu.handle(MenuKey::Confirm, &mut items), Outcome::Confirmed(1));
    }

    #[test]
    fn render_marks_checkboxes_and_highlight() {
        let mut items = default_plugins();
        items[1].selected = false;
        let frame = render(&toggle_screen(), &items, 1);
        let plain = console::strip_ansi_codes(&frame).into_owned();

        assert!(plain.contains("    [X] NERDTree\n"));
        assert!(plain.contains("  ▸  [ ] Vim-Airline  ← Beautiful status bar\n"));
        assert!(plain.contains("    [X] Auto-Pairs\n"));
        assert!(!plain.contains("Auto-close brackets"));
        assert!(plain.trim_end().ends_with("hint"));
    }

    #[test]
    fn render_choice_rows_have_no_checkbox() {
        let screen = Screen {
            header: Header::Banner("Vim Config Wizard"),
            hint: None,
            mode: MenuMode::Choice,
            lang: Language::Russian,
        };
        let frame = render(&screen, &Language::ALL[..], 0);
        let plain = console::strip_ansi_codes(&frame).into_owned();
        assert!(plain.contains("Vim Config Wizard"));
        assert!(plain.contains("  ▸  English \n"));
        assert!(plain.contains("    Русский\n"));
        assert!(!plain.contains('['));
    }

    #[test]
    fn run_loops_until_confirm() {
        let mut items = default_plugins();
        let mut term = ScriptedTerminal::new([
            Key::ArrowDown,
            Key::Char(' '),
            Key::Char('x'),
            Key::ArrowDown,
            Key::ArrowUp,
            Key::Enter,
            Key::ArrowDown,
        ]);

        let index = run(&mut term, &toggle_screen(), &mut items, 0).unwrap();

        assert_eq!(index, 1);
        assert!(!items[1].selected);
        assert_eq!(term.frames.len(), 6);
        assert_eq!(term.remaining(), 1);
    }

    #[test]
    fn run_surfaces_input_errors() {
        let mut items = default_themes();
        let mut term = ScriptedTerminal::new([Key::ArrowDown]);
        let screen = Screen { mode: MenuMode::Choice, ..toggle_screen() };
        let err = run(&mut term, &screen, &mut items, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn run_refuses_a_terminal_without_tty() {
        let mut items = default_themes();
        let mut term = ScriptedTerminal::detached();
        let screen = Screen { mode: MenuMode::Choice, ..toggle_screen() };

        let err = run(&mut term, &screen, &mut items, 0).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        assert!(term.frames.is_empty());
    }
}

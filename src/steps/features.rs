use tracing::info;

use crate::{
    error::WizardError,
    menu::{self, Header, MenuMode, Screen},
    session::SelectionSession,
    terminal::Terminal,
};

/// Feature checklist; flips `selected` flags on the session's features.
pub fn run(term: &mut impl Terminal, session: &mut SelectionSession) -> Result<(), WizardError> {
    let s = session.language.strings();
    let screen = Screen {
        header: Header::Title(s.title_features),
        hint: Some(s.hint_nav),
        mode: MenuMode::Toggle,
        lang: session.language,
    };

    menu::run(term, &screen, &mut session.features, 0)?;

    info!(
        selected = session.selected_features().count(),
        total = session.features.len(),
        "features chosen"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::terminal::ScriptedTerminal;
    use console::Key;

    #[test]
    fn space_turns_mouse_support_off() {
        let mut term =
            ScriptedTerminal::new([Key::ArrowDown, Key::ArrowDown, Key::Char(' '), Key::Enter]);
        let mut session = SelectionSession::default();

        run(&mut term, &mut session).unwrap();

        let off: Vec<&str> = session
            .features
            .iter()
            .filter(|f| !f.selected)
            .map(|f| f.label.en)
            .collect();
        assert_eq!(off, vec!["Mouse Support"]);
    }

    #[test]
    fn screen_speaks_the_session_language() {
        let mut term = ScriptedTerminal::new([Key::Enter]);
        let mut session = SelectionSession { language: Language::Russian, ..Default::default() };

        run(&mut term, &mut session).unwrap();

        let frame = &term.frames[0];
        assert!(frame.contains("Настройка функций"));
        assert!(frame.contains("[X] Привычное Копирование"));
        assert!(frame.contains("Пробел: Выбор"));
    }
}

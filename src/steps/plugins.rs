use tracing::info;

use crate::{
    error::WizardError,
    menu::{self, Header, MenuMode, Screen},
    session::SelectionSession,
    terminal::Terminal,
};

/// Plugin checklist; flips `selected` flags on the session's plugins.
pub fn run(term: &mut impl Terminal, session: &mut SelectionSession) -> Result<(), WizardError> {
    let s = session.language.strings();
    let screen = Screen {
        header: Header::Title(s.title_plugins),
        hint: Some(s.hint_nav),
        mode: MenuMode::Toggle,
        lang: session.language,
    };

    menu::run(term, &screen, &mut session.plugins, 0)?;

    let chosen: Vec<&str> = session.selected_plugins().map(|p| p.name).collect();
    info!(plugins = ?chosen, "plugins chosen");
    Ok(())
}

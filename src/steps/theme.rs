use tracing::info;

use crate::{
    error::WizardError,
    menu::{self, Header, MenuMode, Screen},
    session::SelectionSession,
    terminal::Terminal,
};

/// Single-choice colour scheme picker; starts on the current theme.
pub fn run(term: &mut impl Terminal, session: &mut SelectionSession) -> Result<(), WizardError> {
    let screen = Screen {
        header: Header::Title(session.language.strings().title_themes),
        hint: None,
        mode: MenuMode::Choice,
        lang: session.language,
    };

    let start = session.theme_index;
    let index = menu::run(term, &screen, &mut session.themes, start)?;
    session.choose_theme(index);

    info!(theme = session.theme().name, "theme chosen");
    Ok(())
}

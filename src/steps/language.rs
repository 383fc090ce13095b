use tracing::info;

use crate::{
    error::WizardError,
    locale::Language,
    menu::{self, Header, MenuMode, Screen},
    session::SelectionSession,
    terminal::Terminal,
};

const BANNER: &str = "Vim Config Wizard";

/// First screen: picks the UI language for the rest of the wizard.
pub fn run(term: &mut impl Terminal, session: &mut SelectionSession) -> Result<(), WizardError> {
    let mut languages = Language::ALL;
    let screen = Screen {
        header: Header::Banner(BANNER),
        hint: None,
        mode: MenuMode::Choice,
        lang: session.language,
    };

    let index = menu::run(term, &screen, &mut languages, 0)?;
    session.language = languages[index];

    info!(lang = session.language.code(), "language chosen");
    Ok(())
}

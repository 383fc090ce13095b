mod catalog;
mod cmd;
mod config;
mod error;
mod locale;
mod logging;
mod menu;
mod session;
mod steps;
mod terminal;
mod ui;
mod vimrc;

use tracing::debug;

use config::WizardConfig;
use error::WizardError;
use session::SelectionSession;
use terminal::{ConsoleTerminal, Terminal};

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    logging::init();

    if let Err(e) = run() {
        if e.is_interrupt() {
            // Ctrl-C: leave like an unhandled SIGINT would, without a report.
            println!();
            std::process::exit(130);
        }
        println!();
        ui::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), WizardError> {
    let config = WizardConfig::from_env();
    debug!(
        home = %config.home.display(),
        vimrc = %config.vimrc.display(),
        host_os = ?config.host_os,
        "resolved configuration"
    );

    let mut session = SelectionSession::default();

    // ── Menus ─────────────────────────────────────────────────────────────────
    {
        let mut term = ConsoleTerminal::stdout();
        if !term.is_interactive() {
            return Err(WizardError::NotInteractive);
        }
        let _cursor = term.hidden_cursor()?;

        steps::language::run(&mut term, &mut session)?;
        steps::features::run(&mut term, &mut session)?;
        steps::theme::run(&mut term, &mut session)?;
        steps::plugins::run(&mut term, &mut session)?;
    }

    // ── Generate + install ────────────────────────────────────────────────────
    let s = session.language.strings();
    ui::print_header(s.title_install);

    steps::generate::run(&config, &session)?;
    let report = steps::install::run(&config, s)?;

    ui::print_done(s.done_msg, s.run_vim_msg);
    if !report.succeeded() {
        ui::print_info(s.install_later);
    }

    Ok(())
}

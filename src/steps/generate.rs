use tracing::info;

use crate::{
    config::WizardConfig,
    error::WizardError,
    locale::Strings,
    session::SelectionSession,
    ui,
    vimrc::{self, WriteReport},
};

/// Renders the session into `.vimrc`, backing up whatever was there before.
pub fn run(config: &WizardConfig, session: &SelectionSession) -> Result<WriteReport, WizardError> {
    let s = session.language.strings();

    let contents = vimrc::render(session, config);
    let report = vimrc::write(config, &contents)?;

    if let Some(notice) = backup_notice(&report, s) {
        ui::print_warning(notice);
    }
    ui::print_success(&format!("{} {}", s.config_written, config.vimrc.display()));

    info!(
        path = %config.vimrc.display(),
        backed_up = report.backed_up,
        "configuration generated"
    );
    Ok(report)
}

/// The line telling the user where the previous file went, if there was one.
fn backup_notice(report: &WriteReport, s: &'static Strings) -> Option<&'static str> {
    report.backed_up.then_some(s.backup_msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::HostOs, locale::Language};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fresh_home_prints_no_backup_notice() {
        let dir = TempDir::new().unwrap();
        let cfg = WizardConfig::with_home(dir.path(), HostOs::Other);
        let session = SelectionSession::default();

        let report = run(&cfg, &session).unwrap();

        assert_eq!(backup_notice(&report, Language::English.strings()), None);
        assert!(!cfg.backup_path().exists());
        assert!(fs::read_to_string(&cfg.vimrc).unwrap().starts_with("set nocompatible\n"));
    }

    #[test]
    fn existing_vimrc_gets_localized_notice() {
        let dir = TempDir::new().unwrap();
        let cfg = WizardConfig::with_home(dir.path(), HostOs::Other);
        fs::write(&cfg.vimrc, "set old\n").unwrap();
        let session = SelectionSession { language: Language::Russian, ..Default::default() };

        let report = run(&cfg, &session).unwrap();

        assert_eq!(
            backup_notice(&report, session.language.strings()),
            Some("[!] Старый .vimrc сохранен в .backup")
        );
        assert_eq!(fs::read_to_string(cfg.backup_path()).unwrap(), "set old\n");
    }
}

use std::fs;

use dialoguer::Confirm;
use tracing::warn;

use crate::{
    cmd, config::WizardConfig, error::WizardError, locale::Strings, ui,
};

/// How far plugin installation got.
#[derive(Debug)]
pub struct InstallReport {
    pub bootstrap: Result<(), WizardError>,
    /// `None` when the user chose not to run the install after a failed bootstrap.
    pub plugins: Option<Result<(), WizardError>>,
}

impl InstallReport {
    pub fn succeeded(&self) -> bool {
        self.bootstrap.is_ok() && matches!(self.plugins, Some(Ok(())))
    }
}

// ── Command lines ─────────────────────────────────────────────────────────────

/// `curl -fLo <autoload>/plug.vim --create-dirs <url>`
fn fetch_args(config: &WizardConfig) -> Vec<String> {
    vec![
        "-fLo".to_string(),
        config.plug_vim_path().display().to_string(),
        "--create-dirs".to_string(),
        config.plug_url.clone(),
    ]
}

/// `vim -i NONE -u <vimrc> +PlugInstall +qall`
fn install_args(config: &WizardConfig) -> Vec<String> {
    vec![
        "-i".to_string(),
        "NONE".to_string(),
        "-u".to_string(),
        config.vimrc.display().to_string(),
        "+PlugInstall".to_string(),
        "+qall".to_string(),
    ]
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Downloads vim-plug, then lets Vim install the declared plugins.
///
/// Neither failure stops the wizard: each outcome is reported and returned.
/// When the download fails the user decides whether to try the install anyway.
pub fn run(config: &WizardConfig, s: &Strings) -> Result<InstallReport, WizardError> {
    ui::print_info(s.plug_check);
    let bootstrap = fetch_plug_vim(config, s);
    match &bootstrap {
        Ok(()) => ui::print_success(s.plug_ready),
        Err(e) => ui::print_warning(&format!("{}: {}", s.plug_failed, e)),
    }

    if bootstrap.is_err()
        && !Confirm::new()
            .with_prompt(s.install_anyway)
            .default(true)
            .interact()?
    {
        ui::print_warning(s.install_skipped);
        return Ok(InstallReport { bootstrap, plugins: None });
    }

    ui::print_info(s.plug_installing);
    let plugins = cmd::run_with_spinner(
        &config.editor_program,
        &as_strs(&install_args(config)),
        config.install_timeout,
        s.plug_wait,
    );
    match &plugins {
        Ok(()) => ui::print_success(s.plug_installed),
        Err(e) => ui::print_warning(&format!("{}: {}", s.install_failed, e)),
    }

    Ok(InstallReport { bootstrap, plugins: Some(plugins) })
}

fn fetch_plug_vim(config: &WizardConfig, s: &Strings) -> Result<(), WizardError> {
    if let Err(e) = fs::create_dir_all(&config.autoload_dir) {
        warn!(dir = %config.autoload_dir.display(), error = %e, "cannot create autoload dir");
        return Err(e.into());
    }

    cmd::run_with_spinner(
        &config.fetch_program,
        &as_strs(&fetch_args(config)),
        config.fetch_timeout,
        s.plug_check,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostOs;

    #[test]
    fn fetch_targets_autoload_dir() {
        let cfg = WizardConfig::with_home("/home/ann", HostOs::Other);
        assert_eq!(
            fetch_args(&cfg),
            vec![
                "-fLo",
                "/home/ann/.vim/autoload/plug.vim",
                "--create-dirs",
                "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim",
            ]
        );
    }

    #[test]
    fn install_runs_vim_against_generated_file() {
        let cfg = WizardConfig::with_home("/home/ann", HostOs::Other);
        assert_eq!(
            install_args(&cfg),
            vec!["-i", "NONE", "-u", "/home/ann/.vimrc", "+PlugInstall", "+qall"]
        );
    }

    #[test]
    fn report_success_needs_both_steps() {
        let ok = InstallReport { bootstrap: Ok(()), plugins: Some(Ok(())) };
        assert!(ok.succeeded());

        let skipped = InstallReport {
            bootstrap: Err(WizardError::CommandNotFound("curl".into())),
            plugins: None,
        };
        assert!(!skipped.succeeded());

        let failed = InstallReport {
            bootstrap: Ok(()),
            plugins: Some(Err(WizardError::TimedOut("vim".into(), 600))),
        };
        assert!(!failed.succeeded());
    }

    #[cfg(unix)]
    #[test]
    fn missing_fetch_program_is_reported_not_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cfg = WizardConfig::with_home(dir.path(), HostOs::Other);
        cfg.fetch_program = "definitely-not-curl-42".to_string();

        let result = fetch_plug_vim(&cfg, crate::locale::Language::English.strings());

        assert!(matches!(result, Err(WizardError::CommandNotFound(_))));
        assert!(cfg.autoload_dir.is_dir());
    }
}

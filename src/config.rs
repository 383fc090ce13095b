use std::path::{Path, PathBuf};
use std::time::Duration;

const PLUG_VIM_URL: &str =
    "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim";

/// Operating-system family, as far as clipboard mappings care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Other,
}

impl HostOs {
    /// Detects the family of the machine we are running on.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => HostOs::MacOs,
            _ => HostOs::Other,
        }
    }
}

/// Fixed paths and external programs used by the wizard.
/// Built once in `main` and handed to every step by reference.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub home: PathBuf,
    pub vimrc: PathBuf,
    pub autoload_dir: PathBuf,
    /// Directory literal written into `plug#begin(...)`; expanded by Vim, not by us.
    pub plugin_dir: String,
    pub plug_url: String,
    pub fetch_program: String,
    pub editor_program: String,
    pub fetch_timeout: Duration,
    pub install_timeout: Duration,
    pub host_os: HostOs,
}

impl WizardConfig {
    /// Resolves the home directory, falling back to `.` when it is unknown.
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_home(home, HostOs::detect())
    }

    pub fn with_home(home: impl Into<PathBuf>, host_os: HostOs) -> Self {
        let home = home.into();
        Self {
            vimrc: home.join(".vimrc"),
            autoload_dir: home.join(".vim").join("autoload"),
            home,
            plugin_dir: "~/.vim/plugged".to_string(),
            plug_url: PLUG_VIM_URL.to_string(),
            fetch_program: "curl".to_string(),
            editor_program: "vim".to_string(),
            fetch_timeout: Duration::from_secs(120),
            install_timeout: Duration::from_secs(600),
            host_os,
        }
    }

    /// `<vimrc>.backup`, overwritten on every run that finds an existing file.
    pub fn backup_path(&self) -> PathBuf {
        append_suffix(&self.vimrc, ".backup")
    }

    pub fn plug_vim_path(&self) -> PathBuf {
        self.autoload_dir.join("plug.vim")
    }
}

pub(crate) fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_home() {
        let cfg = WizardConfig::with_home("/home/ann", HostOs::Other);
        assert_eq!(cfg.vimrc, PathBuf::from("/home/ann/.vimrc"));
        assert_eq!(cfg.backup_path(), PathBuf::from("/home/ann/.vimrc.backup"));
        assert_eq!(
            cfg.plug_vim_path(),
            PathBuf::from("/home/ann/.vim/autoload/plug.vim")
        );
    }

    #[test]
    fn os_family_from_name() {
        assert_eq!(HostOs::from_os_name("macos"), HostOs::MacOs);
        assert_eq!(HostOs::from_os_name("linux"), HostOs::Other);
        assert_eq!(HostOs::from_os_name("freebsd"), HostOs::Other);
    }
}

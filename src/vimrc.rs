//! `.vimrc` generation.
//!
//! [`render`] turns a finished [`SelectionSession`] into file contents and is
//! fully deterministic for a given session and host OS. [`write`] backs up any
//! existing file and swaps the new contents in through a staging file.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    catalog::Fragment,
    config::{append_suffix, HostOs, WizardConfig},
    error::WizardError,
    session::SelectionSession,
};

const PREAMBLE: &[&str] = &["set nocompatible", "syntax on"];

const CLIPBOARD_MACOS: &[&str] = &["set clipboard=unnamed", "vnoremap <C-c> \"+y"];

const CLIPBOARD_OTHER: &[&str] = &[
    "set clipboard=unnamedplus",
    "vnoremap <C-c> \"+y",
    "nnoremap <C-v> \"+p",
    "inoremap <C-v> <C-r>+",
    "vnoremap <C-v> \"+p",
];

/// What [`write`] did besides writing the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    pub backed_up: bool,
}

// ── Rendering ─────────────────────────────────────────────────────────────────

pub fn render(session: &SelectionSession, config: &WizardConfig) -> String {
    let mut out = String::new();

    for line in PREAMBLE {
        push_line(&mut out, line);
    }

    let mut native_clipboard = false;
    for feature in session.selected_features() {
        match feature.fragment {
            Fragment::Literal(text) => push_line(&mut out, text),
            Fragment::NativeClipboard => native_clipboard = true,
        }
    }

    if native_clipboard {
        out.push('\n');
        push_line(&mut out, "\" --- Copy/Paste Logic ---");
        let lines = match config.host_os {
            HostOs::MacOs => CLIPBOARD_MACOS,
            HostOs::Other => CLIPBOARD_OTHER,
        };
        for line in lines {
            push_line(&mut out, line);
        }
    }

    let theme = session.theme();

    out.push('\n');
    push_line(&mut out, &format!("call plug#begin('{}')", config.plugin_dir));
    if !theme.repo.is_empty() {
        push_line(&mut out, &plug_line(theme.repo));
    }
    for plugin in session.selected_plugins() {
        push_line(&mut out, &plug_line(plugin.repo));
    }
    push_line(&mut out, "call plug#end()");

    if !theme.command.is_empty() {
        push_line(&mut out, &format!("silent! {}", theme.command));
    }

    for binding in session.selected_plugins().filter_map(|p| p.key_binding) {
        push_line(&mut out, binding);
    }

    out
}

fn plug_line(repo: &str) -> String {
    format!("Plug '{}'", repo)
}

fn push_line(out: &mut String, line: &str) {
    let _ = writeln!(out, "{}", line);
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Writes `contents` to the configured `.vimrc`.
///
/// An existing file is first copied to `<vimrc>.backup`, replacing any older
/// backup. The new contents land in a staging file next to the real target
/// and are then renamed over it, so the target is either the old file or the
/// complete new one. A symlinked `.vimrc` stays a symlink; the file it points
/// at is the one replaced.
pub fn write(config: &WizardConfig, contents: &str) -> Result<WriteReport, WizardError> {
    let target = resolve_target(&config.vimrc)?;

    let backed_up = if target.exists() {
        let backup = config.backup_path();
        fs::copy(&target, &backup)?;
        info!(backup = %backup.display(), "existing vimrc backed up");
        true
    } else {
        false
    };

    let staging = append_suffix(&target, ".tmp");
    fs::write(&staging, contents)?;
    if let Err(e) = fs::rename(&staging, &target) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    debug!(path = %target.display(), bytes = contents.len(), "vimrc written");

    Ok(WriteReport { backed_up })
}

/// Follows `path` through symlinks to the file that should receive the contents.
/// A dangling link resolves to the path it names.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(real) => Ok(real),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let link = fs::read_link(path)?;
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                Ok(base.join(link))
            }
            Err(e) => Err(e),
        },
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

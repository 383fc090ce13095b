use crate::locale::Language;

// ── Localized text ────────────────────────────────────────────────────────────

/// A short piece of text available in every supported language.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub ru: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, ru: &'static str) -> Self {
        Self { en, ru }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.en,
            Language::Russian => self.ru,
        }
    }
}

// ── Features ──────────────────────────────────────────────────────────────────

/// What a feature contributes to the generated `.vimrc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// Emitted verbatim; may span several lines.
    Literal(&'static str),
    /// Clipboard mappings, chosen per host OS at generation time.
    NativeClipboard,
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub label: Localized,
    pub description: Localized,
    pub fragment: Fragment,
    pub selected: bool,
}

impl Feature {
    const fn new(label: Localized, description: Localized, fragment: Fragment) -> Self {
        Self { label, description, fragment, selected: true }
    }
}

pub fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            Localized::new("Native Copy/Paste", "Привычное Копирование"),
            Localized::new(
                "Ctrl+C/V for Laptop, Cmd+C/V for Mac",
                "Ctrl+C/V для ноутбуков, Cmd+C/V для Mac",
            ),
            Fragment::NativeClipboard,
        ),
        Feature::new(
            Localized::new("Line Numbers", "Номера строк"),
            Localized::new("Show line numbers on the left", "Показывать номера строк слева"),
            Fragment::Literal("set number"),
        ),
        Feature::new(
            Localized::new("Mouse Support", "Поддержка мыши"),
            Localized::new("Allow scrolling and clicking", "Разрешить клики и скролл"),
            Fragment::Literal("set mouse=a"),
        ),
        Feature::new(
            Localized::new("Smart Indent", "Умные отступы"),
            Localized::new("Auto-indent for code blocks", "Авто-отступы для кода"),
            Fragment::Literal("set smartindent"),
        ),
        Feature::new(
            Localized::new("Auto-Tab (4 spaces)", "Авто-таб (4 пробела)"),
            Localized::new("Use spaces instead of tabs", "Использовать пробелы вместо табуляции"),
            Fragment::Literal("set expandtab\nset tabstop=4\nset shiftwidth=4"),
        ),
    ]
}

// ── Themes ────────────────────────────────────────────────────────────────────

/// A colour scheme. Empty `repo`/`command` means "keep Vim's default".
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub repo: &'static str,
    pub command: &'static str,
}

pub fn default_themes() -> Vec<Theme> {
    vec![
        Theme { name: "Dracula (Dark)", repo: "dracula/vim", command: "colorscheme dracula" },
        Theme { name: "Gruvbox (Retro)", repo: "morhetz/gruvbox", command: "colorscheme gruvbox" },
        Theme { name: "Nord (Arctic)", repo: "arcticicestudio/nord-vim", command: "colorscheme nord" },
        Theme { name: "None", repo: "", command: "" },
    ]
}

// ── Plugins ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Plugin {
    pub name: &'static str,
    pub repo: &'static str,
    pub description: Localized,
    /// Mapping written after the plug block when the plugin is selected.
    pub key_binding: Option<&'static str>,
    pub selected: bool,
}

pub fn default_plugins() -> Vec<Plugin> {
    vec![
        Plugin {
            name: "NERDTree",
            repo: "preservim/nerdtree",
            description: Localized::new("File explorer (Ctrl+n)", "Проводник файлов (Ctrl+n)"),
            key_binding: Some("map <C-n> :NERDTreeToggle<CR>"),
            selected: true,
        },
        Plugin {
            name: "Vim-Airline",
            repo: "vim-airline/vim-airline",
            description: Localized::new("Beautiful status bar", "Красивая статус-строка"),
            key_binding: None,
            selected: true,
        },
        Plugin {
            name: "Auto-Pairs",
            repo: "jiangmiao/auto-pairs",
            description: Localized::new("Auto-close brackets", "Авто-закрытие скобок"),
            key_binding: None,
            selected: true,
        },
        Plugin {
            name: "Vim-Commentary",
            repo: "tpope/vim-commentary",
            description: Localized::new("Quick comments (gcc)", "Быстрое комментирование"),
            key_binding: None,
            selected: true,
        },
    ]
}

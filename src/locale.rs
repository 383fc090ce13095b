/// UI languages the wizard can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Order in which languages are offered on the first screen.
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::English => &EN,
            Language::Russian => &RU,
        }
    }
}

/// Every user-visible message, for one language.
#[derive(Debug)]
pub struct Strings {
    pub lang_name: &'static str,
    pub title_features: &'static str,
    pub title_themes: &'static str,
    pub title_plugins: &'static str,
    pub title_install: &'static str,
    pub hint_nav: &'static str,
    pub backup_msg: &'static str,
    pub config_written: &'static str,
    pub plug_check: &'static str,
    pub plug_ready: &'static str,
    pub plug_failed: &'static str,
    pub plug_installing: &'static str,
    pub plug_wait: &'static str,
    pub plug_installed: &'static str,
    pub install_failed: &'static str,
    pub install_anyway: &'static str,
    pub install_skipped: &'static str,
    pub install_later: &'static str,
    pub done_msg: &'static str,
    pub run_vim_msg: &'static str,
}

static EN: Strings = Strings {
    lang_name: "English",
    title_features: " Feature Configuration ",
    title_themes: " Select Color Scheme ",
    title_plugins: " Select Plugins ",
    title_install: " Installation ",
    hint_nav: "Arrows: Navigate | Space: Toggle | Enter: Next",
    backup_msg: "[!] Old .vimrc backed up to .backup",
    config_written: "Configuration written to",
    plug_check: "[*] Checking plugin manager...",
    plug_ready: "Plugin manager is in place.",
    plug_failed: "Could not download the plugin manager",
    plug_installing: "[*] Installing plugins inside Vim...",
    plug_wait: "Please wait, this may take a minute...",
    plug_installed: "Plugins installed.",
    install_failed: "Plugin installation did not complete",
    install_anyway: "Try to install plugins anyway?",
    install_skipped: "Plugin installation skipped.",
    install_later: "Open Vim and run :PlugInstall to finish setting up plugins.",
    done_msg: "─── ALL DONE! ───",
    run_vim_msg: "Run 'vim' to start.",
};

static RU: Strings = Strings {
    lang_name: "Русский",
    title_features: " Настройка функций ",
    title_themes: " Выберите цветовую схему ",
    title_plugins: " Выберите плагины ",
    title_install: " Установка ",
    hint_nav: "Стрелки: Навигация | Пробел: Выбор | Enter: Далее",
    backup_msg: "[!] Старый .vimrc сохранен в .backup",
    config_written: "Конфигурация записана в",
    plug_check: "[*] Проверка менеджера плагинов...",
    plug_ready: "Менеджер плагинов установлен.",
    plug_failed: "Не удалось загрузить менеджер плагинов",
    plug_installing: "[*] Установка плагинов в Vim...",
    plug_wait: "Пожалуйста, подождите, это займет около минуты...",
    plug_installed: "Плагины установлены.",
    install_failed: "Установка плагинов не завершилась",
    install_anyway: "Все равно попробовать установить плагины?",
    install_skipped: "Установка плагинов пропущена.",
    install_later: "Откройте Vim и выполните :PlugInstall, чтобы завершить установку.",
    done_msg: "─── ГОТОВО! ───",
    run_vim_msg: "Запустите 'vim' для начала работы.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_has_its_own_table() {
        assert_eq!(Language::English.strings().lang_name, "English");
        assert_eq!(Language::Russian.strings().lang_name, "Русский");
        assert_eq!(Language::ALL[0].code(), "en");
        assert_eq!(Language::ALL[1].code(), "ru");
    }
}

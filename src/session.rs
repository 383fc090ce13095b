use crate::catalog::{self, Feature, Plugin, Theme};
use crate::locale::Language;

// ── Selection state ───────────────────────────────────────────────────────────

/// Everything the user picked across the wizard screens.
/// Created with the default catalog, mutated by each step, read once by the generator.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    pub language: Language,
    pub features: Vec<Feature>,
    pub themes: Vec<Theme>,
    /// Index into `themes`; always in range.
    pub theme_index: usize,
    pub plugins: Vec<Plugin>,
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self {
            language: Language::English,
            features: catalog::default_features(),
            themes: catalog::default_themes(),
            theme_index: 0,
            plugins: catalog::default_plugins(),
        }
    }
}

impl SelectionSession {
    pub fn theme(&self) -> &Theme {
        &self.themes[self.theme_index]
    }

    /// Sets the chosen theme, clamping out-of-range indices to the last entry.
    pub fn choose_theme(&mut self, index: usize) {
        self.theme_index = index.min(self.themes.len().saturating_sub(1));
    }

    pub fn selected_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.selected)
    }

    pub fn selected_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().filter(|p| p.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pick_first_theme_and_english() {
        let s = SelectionSession::default();
        assert_eq!(s.language, Language::English);
        assert_eq!(s.theme_index, 0);
        assert_eq!(s.theme().repo, "dracula/vim");
    }

    #[test]
    fn choose_theme_clamps() {
        let mut s = SelectionSession::default();
        s.choose_theme(99);
        assert_eq!(s.theme_index, s.themes.len() - 1);
    }

    #[test]
    fn selected_iterators_follow_flags() {
        let mut s = SelectionSession::default();
        s.plugins[0].selected = false;
        s.features[2].selected = false;
        assert_eq!(s.selected_plugins().count(), s.plugins.len() - 1);
        assert_eq!(s.selected_features().count(), s.features.len() - 1);
        assert_eq!(s.selected_plugins().next().unwrap().name, "Vim-Airline");
    }
}

pub mod features;
pub mod generate;
pub mod install;
pub mod language;
pub mod plugins;
pub mod theme;

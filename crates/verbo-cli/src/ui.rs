use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

fn resolve(flags: &GlobalFlags, stdout_tty: bool, stderr_tty: bool, no_color: bool) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && table && !flags.quiet && !no_color,
    };

    // Bars draw on stderr, so stdout may be piped.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_tty && !flags.quiet,
    };

    UiPrefs {
        table_color,
        progress,
        term_width: None,
    }
}

pub fn init(flags: &GlobalFlags) {
    let mut prefs = resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    prefs.term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode, progress: ProgressMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            catalog: None,
            color,
            progress,
        }
    }

    #[test]
    fn color_only_applies_to_tables() {
        let json = flags(OutputFormat::Json, ColorMode::Always, ProgressMode::Auto);
        assert!(!resolve(&json, true, true, false).table_color);

        let table = flags(OutputFormat::Table, ColorMode::Always, ProgressMode::Auto);
        assert!(resolve(&table, false, false, true).table_color);
    }

    #[test]
    fn auto_color_respects_tty_and_no_color() {
        let table = flags(OutputFormat::Table, ColorMode::Auto, ProgressMode::Auto);
        assert!(resolve(&table, true, true, false).table_color);
        assert!(!resolve(&table, false, true, false).table_color);
        assert!(!resolve(&table, true, true, true).table_color);
    }

    #[test]
    fn progress_modes() {
        let auto = flags(OutputFormat::Json, ColorMode::Auto, ProgressMode::Auto);
        assert!(resolve(&auto, false, true, false).progress);
        assert!(!resolve(&auto, true, false, false).progress);

        let on = flags(OutputFormat::Json, ColorMode::Auto, ProgressMode::On);
        assert!(resolve(&on, false, false, false).progress);

        let mut quiet = on;
        quiet.quiet = true;
        assert!(!resolve(&quiet, true, true, false).progress);
    }
}

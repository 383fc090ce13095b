use console::{measure_text_width, style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const HEADER_INNER: usize = 50;
const BANNER_INNER: usize = 26;

// ── Boxes ─────────────────────────────────────────────────────────────────────

/// Rounded red box around a bold cyan title, left-aligned.
///
/// ```text
/// ╭──────────────────────────────────────────────────╮
/// │  Select Plugins                                  │
/// ╰──────────────────────────────────────────────────╯
/// ```
pub fn header_box(title: &str) -> String {
    let pad = HEADER_INNER.saturating_sub(measure_text_width(title) + 1);
    boxed(&format!(" {}{}", style(title).cyan().bold(), " ".repeat(pad)), HEADER_INNER)
}

/// Centered program banner shown above the language menu.
pub fn banner_box(title: &str) -> String {
    let free = BANNER_INNER.saturating_sub(measure_text_width(title));
    let left = free / 2;
    let line = format!("{}{}{}", " ".repeat(left), title, " ".repeat(free - left));
    boxed(&line, BANNER_INNER)
}

fn boxed(content: &str, inner: usize) -> String {
    let rule = "─".repeat(inner);
    format!(
        "{}\n{}{}{}\n{}\n",
        style(format!("╭{}╮", rule)).red(),
        style("│").red(),
        content,
        style("│").red(),
        style(format!("╰{}╯", rule)).red(),
    )
}

/// Clears the screen and prints a boxed title.
pub fn print_header(title: &str) {
    let _ = Term::stdout().clear_screen();
    print!("{}", header_box(title));
    println!();
}

// ── Feedback messages ─────────────────────────────────────────────────────────

/// Green ✓ — operation completed successfully.
pub fn print_success(msg: &str) {
    println!("  {}  {}", style("✓").green().bold(), style(msg).green());
}

/// Blue → — neutral info / progress note.
pub fn print_info(msg: &str) {
    println!("  {}  {}", style("→").blue().bold(), msg);
}

/// Yellow ⚠  — non-fatal notice.
pub fn print_warning(msg: &str) {
    println!("  {}  {}", style("⚠").yellow().bold(), style(msg).yellow());
}

/// Red ✗ — error (written to stderr).
pub fn print_error(msg: &str) {
    eprintln!("  {}  {}", style("✗").red().bold(), style(msg).red());
}

/// Closing banner: bold green headline plus a plain follow-up line.
pub fn print_done(headline: &str, follow_up: &str) {
    println!();
    println!("{}", style(headline).green().bold());
    println!("{}", follow_up);
}

// ── Spinner ───────────────────────────────────────────────────────────────────

/// Returns a running braille spinner.
/// Call `pb.finish_and_clear()` when the work is over.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan.bold}  {msg}  {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

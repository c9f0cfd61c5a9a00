use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Red, ICON_ERR), msg);
}

/// Section header, framed by a ruler line above and below.
pub fn header<T: fmt::Display>(msg: T) {
    let ruler = "=".repeat(60);
    let style = Style::new().bold().fg(Colour::Blue);
    println!("{}", style.paint(&ruler));
    println!("{}", style.paint(msg.to_string()));
    println!("{}", style.paint(&ruler));
}

/// Progress line for a batch step, e.g. `[2/5] Generating tampering logs (5)`.
pub fn step<T: fmt::Display>(current: usize, total: usize, msg: T) {
    println!();
    println!(
        "{} {}",
        Style::new().bold().paint(format!("[{current}/{total}]")),
        msg
    );
}

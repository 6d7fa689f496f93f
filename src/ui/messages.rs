//! User-facing terminal output. Everything the CLI says goes through here,
//! except the log sheet itself, which is printed raw.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

fn tagged<T: fmt::Display>(style: Style, icon: &str, msg: T) -> String {
    format!("{} {}", style.paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue.bold(), "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green.bold(), "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow.bold(), "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red.bold(), "❌", msg));
}

/// Section header, e.g. before a log sheet
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}", Colour::Blue.bold().paint(format!("=== {} ===", msg)));
}

/// `• label: value` with the label highlighted
pub fn field<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("{} {}", Colour::Cyan.paint(format!("• {}:", label)), value);
}

/// Warn with `prompt` and read a y/N answer from stdin. Anything but
/// `y`/`yes` (or a read error) is a no.
pub fn confirm(prompt: &str, question: &str) -> bool {
    warning(prompt);
    print!("{} [y/N]: ", question);
    io::stdout().flush().ok();

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

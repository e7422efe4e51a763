use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy)]
enum Level {
    Status,
    Success,
    Info,
    Warn,
    Error,
}

fn style_for(level: Level) -> Style {
    let style = Style::new().bold();
    match level {
        Level::Status => style.fg_color(Some(AnsiColor::Cyan.into())),
        Level::Success => style.fg_color(Some(AnsiColor::Green.into())),
        Level::Info => style.fg_color(Some(AnsiColor::Blue.into())),
        Level::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
        Level::Error => style.fg_color(Some(AnsiColor::Red.into())),
    }
}

fn emit(level: Level, label: &str, message: &str) {
    let to_stderr = matches!(level, Level::Warn | Level::Error);
    let tty = if to_stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };
    let use_color = tty && std::env::var_os("NO_COLOR").is_none();

    let padded = format!("{:>width$}", label, width = LABEL_WIDTH);
    let line = if use_color {
        let style = style_for(level);
        format!("{}{padded}{} {message}", style.render(), style.render_reset())
    } else {
        format!("{padded} {message}")
    };

    if to_stderr {
        let _ = writeln!(io::stderr().lock(), "{line}");
    } else {
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}

pub fn status(label: &str, message: impl Display) {
    emit(Level::Status, label, &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    emit(Level::Success, label, &message.to_string());
}

pub fn info(message: impl Display) {
    emit(Level::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    emit(Level::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    emit(Level::Error, "Error", &message.to_string());
}

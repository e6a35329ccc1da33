//! Formatting of a single exception record.

use std::any::type_name;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::records::{MAX_CHUNK_LEN, truncate_to_boundary};

/// e.g. `7/03/2026 4:5:9.042 PM`, followed by the zone name.
pub const DATE_FORMAT: &str = "%-d/%m/%Y %-I:%-M:%-S.%3f %p";

/// One record, alive only between formatting and the durable write.
pub struct LogRecord {
    pub date: DateTime<Local>,
    /// IANA zone name, e.g. `Europe/Berlin`. The UTC offset is used when unknown.
    pub zone: Option<String>,
    pub class: String,
    pub stack: String,
    pub exception: String,
}

impl LogRecord {
    /// Capture a record now. The stack is the logger's call site, not the error's.
    pub fn capture<E: Error + ?Sized>(class: &str, error: &E) -> Self {
        Self {
            date: Local::now(),
            zone: iana_time_zone::get_timezone().ok(),
            class: class.to_owned(),
            stack: Backtrace::force_capture().to_string(),
            exception: render_error(error),
        }
    }

    pub fn date_text(&self) -> String {
        let zone = match &self.zone {
            Some(zone) => zone.clone(),
            None => self.date.format("%:z").to_string(),
        };
        format!("{} {}", self.date.format(DATE_FORMAT), zone)
    }

    /// Render the record. The stack is cut first so the whole record fits in one chunk.
    pub fn render(&self) -> String {
        let date = self.date_text();
        let fixed = format!("Date: {date}\nClass: {}\nStack Element: \nException: ", self.class);
        let room = MAX_CHUNK_LEN.saturating_sub(fixed.len() + self.exception.len());
        format!(
            "Date: {}\nClass: {}\nStack Element: {}\nException: {}",
            date,
            self.class,
            truncate_to_boundary(&self.stack, room),
            self.exception
        )
    }
}

/// Canonical name of the type reporting an error.
pub fn class_name<T: ?Sized>() -> &'static str {
    type_name::<T>()
}

/// `Type: message` followed by one `Caused by:` line per source.
pub fn render_error<E: Error + ?Sized>(error: &E) -> String {
    let mut out = format!("{}: {}", error_type_name(error), error);
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}

// Trait objects hide the concrete type, so fall back to the head of its `Debug` output.
fn error_type_name<E: Error + ?Sized>(error: &E) -> String {
    if !type_name::<E>().starts_with("dyn ") {
        return short_type_name::<E>();
    }
    let debug = format!("{error:?}");
    let head: String = debug
        .chars()
        .take_while(|&c| c.is_alphanumeric() || c == '_' || c == ':')
        .collect();
    match head.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' => shorten_path(&head),
        _ => "Error".to_owned(),
    }
}

// Keeps the last path segment of each component, so `a::b::Err<c::D>` reads `Err<D>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(&shorten_path(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(&shorten_path(&segment));
    out
}

// Standard library errors keep their public module: `std::io::error::Error` -> `io::Error`.
fn shorten_path(path: &str) -> String {
    let parts: Vec<&str> = path.split("::").collect();
    let last = parts.last().copied().unwrap_or("");
    if parts.len() >= 3 && matches!(parts[0], "std" | "core" | "alloc") && last == "Error" {
        return format!("{}::{}", parts[1], last);
    }
    last.to_owned()
}

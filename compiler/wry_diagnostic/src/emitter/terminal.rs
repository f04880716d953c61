//! Human-readable diagnostics for a terminal.
//!
//! ```text
//! error[E6004]: division by zero
//!   --> main.wry:2:5
//!    |
//!  2 | y = x / 0
//!    |     ^^^^^ division by zero here
//!   = help: check the divisor before dividing
//! ```
//!
//! Without source text, labels fall back to raw byte ranges.

use std::io::{self, Write};

use crate::source_map::SourceMap;
use crate::{Diagnostic, Label, LabelStyle, Severity};

use super::DiagnosticEmitter;

/// Colour choice from `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to emit ANSI escapes; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Roles a piece of output can be painted in.
#[derive(Clone, Copy)]
enum Paint {
    Error,
    Warning,
    Context,
    Help,
    Emphasis,
}

impl Paint {
    fn ansi(self) -> &'static str {
        match self {
            Paint::Error => "\x1b[1;31m",
            Paint::Warning => "\x1b[1;33m",
            Paint::Context => "\x1b[1;34m",
            Paint::Help => "\x1b[1;32m",
            Paint::Emphasis => "\x1b[1m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Paint::Error,
            Severity::Warning => Paint::Warning,
        }
    }

    fn for_label(style: LabelStyle, severity: Severity) -> Self {
        match style {
            LabelStyle::Primary => Paint::for_severity(severity),
            LabelStyle::Secondary => Paint::Context,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Writes diagnostics as text, optionally coloured.
///
/// Write errors are ignored: diagnostics are best-effort output on a
/// failing run.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceMap>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels as `name:line:col` with a source snippet.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.source = Some(SourceMap::new(name, text));
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, paint: Paint, text: &str) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", paint.ansi())
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.paint(
            Paint::for_severity(diagnostic.severity),
            diagnostic.severity.as_str(),
        );
        self.paint(Paint::Emphasis, &format!("[{}]", diagnostic.code));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_label(&mut self, label: &Label, severity: Severity) {
        let paint = Paint::for_label(label.style, severity);
        let arrow = match label.style {
            LabelStyle::Primary => "-->",
            LabelStyle::Secondary => ":::",
        };

        let Some(source) = &self.source else {
            let _ = write!(self.writer, "  {arrow} {}: ", label.span);
            self.paint(paint, &label.message);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.locate(label.span.start);
        let location = format!("{}:{line}:{col}", source.name());
        let snippet = source.line(line).map(str::to_owned);
        let _ = writeln!(self.writer, "  {arrow} {location}");

        let Some(snippet) = snippet else {
            return;
        };
        let line_no = line.to_string();
        let gutter = " ".repeat(line_no.len());
        let indent = " ".repeat(col.saturating_sub(1) as usize);
        let underline = label
            .style
            .underline()
            .to_string()
            .repeat(underline_len(&snippet, col, label.span.len()));

        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {line_no} | {snippet}");
        let _ = write!(self.writer, " {gutter} | {indent}");
        self.paint(paint, &format!("{underline} {}", label.message));
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, paint: Paint, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.paint(paint, kind);
        let _ = writeln!(self.writer, ": {text}");
    }
}

/// Underline width for a span starting at 1-based `col`: at least one
/// character, never past the end of `line`.
fn underline_len(line: &str, col: u32, span_len: u32) -> usize {
    let available = line
        .chars()
        .count()
        .saturating_sub(col.saturating_sub(1) as usize);
    (span_len as usize).min(available).max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label, diagnostic.severity);
        }
        for note in &diagnostic.notes {
            self.write_trailer("note", Paint::Emphasis, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", Paint::Help, suggestion);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

//! Diagnostic construction and rendering.
//!
//! The shape here mirrors a typical compiler diagnostic: a severity, a headline message, spans
//! labeled either `Primary` or `Secondary`, and optional free-form help text.

use codespan_reporting::{
    term,
    term::termcolor::{ColorChoice, StandardStream},
};
use tracing::warn;

use crate::{
    source::InMemorySourceMap,
    span::{Span, SourceId, Spanned},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LabelStyle {
    /// The crux of the problem.
    Primary,
    /// Additional context shown alongside a primary label.
    Secondary,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub style: LabelStyle,
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(style: LabelStyle, span: impl Spanned, message: impl Into<String>) -> Self {
        Self {
            style,
            span: span.span(),
            message: message.into(),
        }
    }

    pub fn primary(span: impl Spanned, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Primary, span, message)
    }

    pub fn secondary(span: impl Spanned, message: impl Into<String>) -> Self {
        Self::new(LabelStyle::Secondary, span, message)
    }
}

/// Diagnostic severity, ordered so that a higher variant always outranks a lower one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Hint,
    Info,
    Warning,
    Error,
}

/// Describes a single problem found while scanning or validating a token stream.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub help: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            labels: vec![],
            help: None,
            notes: vec![],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Converts to a `codespan_reporting` diagnostic ready for [`term::emit`].
    pub fn to_codespan(&self) -> codespan_reporting::diagnostic::Diagnostic<SourceId> {
        codespan_reporting::diagnostic::Diagnostic {
            severity: match self.severity {
                Severity::Hint => codespan_reporting::diagnostic::Severity::Help,
                Severity::Info => codespan_reporting::diagnostic::Severity::Note,
                Severity::Warning => codespan_reporting::diagnostic::Severity::Warning,
                Severity::Error => codespan_reporting::diagnostic::Severity::Error,
            },
            code: None,
            message: self.message.clone(),
            labels: self
                .labels
                .iter()
                .map(|label| codespan_reporting::diagnostic::Label {
                    style: match label.style {
                        LabelStyle::Primary => codespan_reporting::diagnostic::LabelStyle::Primary,
                        LabelStyle::Secondary => {
                            codespan_reporting::diagnostic::LabelStyle::Secondary
                        }
                    },
                    file_id: label.span.source_id,
                    range: label.span.to_range(),
                    message: label.message.clone(),
                })
                .collect(),
            notes: self
                .help
                .iter()
                .cloned()
                .chain(self.notes.iter().cloned())
                .collect(),
        }
    }

    pub fn emit_to_stderr(
        &self,
        files: &InMemorySourceMap,
    ) -> Result<(), codespan_reporting::files::Error> {
        term::emit(
            &mut StandardStream::stderr(ColorChoice::Auto),
            &term::Config::default(),
            files,
            &self.to_codespan(),
        )
    }
}

/// Anything that can collect diagnostics as they're produced.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for () {
    fn emit(&mut self, _: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Keeps only the most severe diagnostic seen so far, logging the rest as dropped.
impl DiagnosticSink for Option<Diagnostic> {
    fn emit(&mut self, new: Diagnostic) {
        *self = Some(match self.take() {
            None => new,
            Some(old) if new.severity > old.severity => new,
            Some(old) => {
                warn!("new diagnostic dropped from Option<Diagnostic>");
                old
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_sink_keeps_the_more_severe_diagnostic() {
        let mut sink: Option<Diagnostic> = None;
        sink.emit(Diagnostic::warning("a warning"));
        assert_eq!(sink.as_ref().unwrap().severity, Severity::Warning);

        sink.emit(Diagnostic::error("an error"));
        assert_eq!(sink.as_ref().unwrap().message, "an error");

        sink.emit(Diagnostic::warning("a later warning"));
        assert_eq!(sink.as_ref().unwrap().message, "an error");
    }

    #[test]
    fn vec_sink_collects_every_diagnostic() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::error("one"));
        sink.emit(Diagnostic::error("two"));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn severity_ordering_places_error_highest() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Hint);
    }
}

//! The fixed table of debugger operations and their command-string
//! templates.
//!
//! A host formats one of these templates and writes it verbatim to the
//! debugger's stdin. Templates carry placeholders filled from the host's
//! current state: `%f` the current file, `%l` the current line, `%p` a
//! numeric argument, `%e` the expression at point, `%%` a literal percent.
//!
//! # Examples
//!
//! ```
//! use markmodem::{CommandContext, DebuggerCommand};
//!
//! let cx = CommandContext {
//!     file: Some("prog.awk"),
//!     line: Some(5),
//!     ..CommandContext::default()
//! };
//! assert_eq!(DebuggerCommand::Break.expand(&cx).unwrap(), "break prog.awk:5");
//! ```

use thiserror::Error;

/// A named debugger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DebuggerCommand {
    Break,
    TempBreak,
    RemoveBreak,
    Step,
    StepInstruction,
    Next,
    NextInstruction,
    Continue,
    Finish,
    FrameUp,
    FrameDown,
    PrintExpression,
    Run,
    UntilLine,
    EvalStatement,
}

impl DebuggerCommand {
    /// Every table entry, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Break,
        Self::TempBreak,
        Self::RemoveBreak,
        Self::Step,
        Self::StepInstruction,
        Self::Next,
        Self::NextInstruction,
        Self::Continue,
        Self::Finish,
        Self::FrameUp,
        Self::FrameDown,
        Self::PrintExpression,
        Self::Run,
        Self::UntilLine,
        Self::EvalStatement,
    ];

    /// The literal command-string template sent to the debugger.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Break => "break %f:%l",
            Self::TempBreak => "tbreak %f:%l",
            Self::RemoveBreak => "clear %f:%l",
            Self::Step => "step %p",
            Self::StepInstruction => "stepi %p",
            Self::Next => "next %p",
            Self::NextInstruction => "nexti %p",
            Self::Continue => "continue",
            Self::Finish => "finish",
            Self::FrameUp => "up %p",
            Self::FrameDown => "down %p",
            Self::PrintExpression => "print %e",
            Self::Run => "run",
            Self::UntilLine => "until %l",
            Self::EvalStatement => "eval %e",
        }
    }

    /// Expand this command's template against `cx`.
    ///
    /// # Errors
    ///
    /// See [`expand`].
    pub fn expand(self, cx: &CommandContext<'_>) -> Result<String, TemplateError> {
        expand(self.template(), cx)
    }
}

/// Host-side state the placeholders draw from.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext<'a> {
    /// Current source file, for `%f`.
    pub file: Option<&'a str>,
    /// Current source line, for `%l`.
    pub line: Option<u32>,
    /// Numeric argument (e.g. a repeat count), for `%p`.
    pub arg: Option<i64>,
    /// Expression at point, for `%e`.
    pub expr: Option<&'a str>,
}

/// A template could not be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder `%{0}` in command template")]
    UnknownPlaceholder(char),
    #[error("no value available for placeholder `%{0}`")]
    MissingValue(char),
    #[error("dangling `%` at end of command template")]
    TrailingPercent,
}

/// Substitute `%f`, `%l`, `%p`, `%e` and `%%` in `template` from `cx`.
///
/// A missing numeric argument renders `%p` as the empty string (a
/// count-less `step %p` legitimately becomes `step `); a missing file,
/// line, or expression is an error.
///
/// # Errors
///
/// [`TemplateError::MissingValue`] when `%f`/`%l`/`%e` has no value in
/// `cx`; [`TemplateError::UnknownPlaceholder`] for any other `%x`;
/// [`TemplateError::TrailingPercent`] when the template ends in `%`.
pub fn expand(template: &str, cx: &CommandContext<'_>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('f') => out.push_str(cx.file.ok_or(TemplateError::MissingValue('f'))?),
            Some('l') => {
                let line = cx.line.ok_or(TemplateError::MissingValue('l'))?;
                out.push_str(&line.to_string());
            }
            Some('e') => out.push_str(cx.expr.ok_or(TemplateError::MissingValue('e'))?),
            Some('p') => {
                if let Some(arg) = cx.arg {
                    out.push_str(&arg.to_string());
                }
            }
            Some('%') => out.push('%'),
            Some(other) => return Err(TemplateError::UnknownPlaceholder(other)),
            None => return Err(TemplateError::TrailingPercent),
        }
    }
    Ok(out)
}

//! Interactive-prompt detection, independent of marker scanning.

/// The literal prompt the debugger prints when it is ready for a command.
///
/// A host checks its accumulated display text after each delivery: once
/// the final line is exactly the prompt, the previous command has finished
/// executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPattern {
    literal: String,
}

impl Default for PromptPattern {
    fn default() -> Self {
        Self::new("dgawk> ")
    }
}

impl PromptPattern {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// True when the final (unterminated) line of `text` is exactly the
    /// prompt, i.e. the debugger is waiting for input.
    #[must_use]
    pub fn ends_with_prompt(&self, text: &str) -> bool {
        text.rsplit('\n').next().is_some_and(|last| last == self.literal)
    }
}

/// Why an object literal could not be materialized.
///
/// Offsets are byte offsets into the text handed to the failing function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("unrecognized input {fragment:?} at offset {offset}")]
    Lex { offset: usize, fragment: String },

    #[error("unbalanced {found} at offset {offset}")]
    Unbalanced { offset: usize, found: String },

    #[error("literal starting at offset {offset} is never closed")]
    Unterminated { offset: usize },

    #[error("{message} at offset {offset}")]
    Syntax { offset: usize, message: String },

    #[error("nesting deeper than {limit} levels at offset {offset}")]
    TooDeep { offset: usize, limit: usize },
}

impl LiteralError {
    pub fn offset(&self) -> usize {
        match self {
            LiteralError::Lex { offset, .. }
            | LiteralError::Unbalanced { offset, .. }
            | LiteralError::Unterminated { offset }
            | LiteralError::Syntax { offset, .. }
            | LiteralError::TooDeep { offset, .. } => *offset,
        }
    }

    /// Rebase the offset onto an enclosing text that starts `base` bytes earlier.
    pub fn shifted(mut self, base: usize) -> Self {
        match &mut self {
            LiteralError::Lex { offset, .. }
            | LiteralError::Unbalanced { offset, .. }
            | LiteralError::Unterminated { offset }
            | LiteralError::Syntax { offset, .. }
            | LiteralError::TooDeep { offset, .. } => *offset += base,
        }
        self
    }
}

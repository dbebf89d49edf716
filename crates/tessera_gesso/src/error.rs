//! Markup diagnostics.

use thiserror::Error;
use tessera_carton::CompactString;

/// A problem found while parsing a markup fragment.
///
/// Parsing always recovers; these are reported alongside the parsed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GessoError {
    #[error("unterminated comment at byte {0}")]
    UnterminatedComment(usize),

    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),

    #[error("unexpected end tag </{tag}> at byte {offset}")]
    UnexpectedEndTag { tag: CompactString, offset: usize },

    #[error("element <{0}> is not closed")]
    UnclosedElement(CompactString),
}

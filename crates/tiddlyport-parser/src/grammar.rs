//! Grammar trait implemented once per source dialect

use crate::ast::{Dialect, Document, Inline};
use crate::error::ParseFailure;

/// A dialect's block grammar plus the inline grammar it applies to
/// paragraph-sized units.
///
/// Block parsing either consumes the whole body or returns a
/// [`ParseFailure`]. Inline parsing never fails: input outside the covered
/// constructs comes back as text.
pub trait Grammar: Send + Sync {
    /// Dialect this grammar reads
    fn dialect(&self) -> Dialect;

    /// Parse a whole note body
    fn parse(&self, text: &str) -> Result<Document, ParseFailure>;

    /// Parse a single inline unit
    fn parse_inline(&self, text: &str) -> Vec<Inline>;
}

//! Keyword lookup table.
//!
//! The table is immutable once built and shared process-wide behind a
//! [`OnceLock`], so it can be read concurrently by lexers running on
//! independent inputs. [`init`] forces construction up front; otherwise the
//! first lookup builds it lazily.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// The PSL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `main`
    Main,
    /// `export`
    Export,
    /// `return`
    Return,
}

impl KeywordKind {
    /// The keyword's source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            KeywordKind::F32 => "f32",
            KeywordKind::F64 => "f64",
            KeywordKind::Main => "main",
            KeywordKind::Export => "export",
            KeywordKind::Return => "return",
        }
    }

    /// Whether this keyword can open a function declaration.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            KeywordKind::Main | KeywordKind::F32 | KeywordKind::F64
        )
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// Mapping from keyword spelling to [`KeywordKind`].
pub struct KeywordTable {
    entries: FxHashMap<&'static str, KeywordKind>,
}

impl KeywordTable {
    fn build() -> Self {
        let mut entries = FxHashMap::default();
        for kind in [
            KeywordKind::F32,
            KeywordKind::F64,
            KeywordKind::Main,
            KeywordKind::Export,
            KeywordKind::Return,
        ] {
            entries.insert(kind.spelling(), kind);
        }
        Self { entries }
    }

    /// The process-wide table, built on first access.
    pub fn global() -> &'static KeywordTable {
        static TABLE: OnceLock<KeywordTable> = OnceLock::new();
        TABLE.get_or_init(KeywordTable::build)
    }

    /// Look up a word; `None` if it is not a keyword.
    ///
    /// Recognition is exact-match: `f321` or `Main` are not keywords.
    #[inline]
    pub fn find(&self, word: &str) -> Option<KeywordKind> {
        self.entries.get(word).copied()
    }

    /// Number of keywords in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (it never is once built).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Force construction of the global keyword table.
///
/// Idempotent; later calls are no-ops. Lexers created with
/// [`Lexer::new`](super::Lexer::new) will also build the table lazily, so
/// calling this is optional.
pub fn init() {
    let table = KeywordTable::global();
    log::debug!("keyword table ready ({} entries)", table.len());
}

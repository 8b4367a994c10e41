use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── SYMBOL ────────────────────────────────────────────────────────────────────
//

/// An opaque, displayable token the user memorizes.
///
/// Symbols carry no structure; two symbols are the same symbol when their text
/// is identical.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

//
// ─── SHUFFLE SEAM ──────────────────────────────────────────────────────────────
//

/// Source of random permutations for the session reducer.
///
/// Implementations must produce a permutation of the input slice (no symbol
/// added or lost). The reducer never inspects how the order was chosen.
pub trait Shuffle {
    fn shuffle(&mut self, symbols: &mut [Symbol]);
}

//
// ─── POOL ──────────────────────────────────────────────────────────────────────
//

/// Errors raised while building a [`SymbolPool`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolPoolError {
    #[error("symbol at position {index} is blank")]
    Blank { index: usize },

    #[error("symbol {symbol} appears more than once")]
    Duplicate { symbol: String },

    #[error("pool has {len} symbols, at least {min} are required")]
    TooSmall { len: usize, min: usize },
}

/// Emoji shipped with the memory test.
pub const DEFAULT_SYMBOLS: [&str; 30] = [
    "🎨", "🎭", "🎪", "🎯", "🎲", "🎸", "🎹", "🎺", "🎻", "🎬", "📚", "📖", "✏️", "🔬", "🔭",
    "💡", "🌟", "⭐", "🌈", "🦋", "🐝", "🌸", "🌺", "🍀", "🎃", "🎄", "🎁", "🎈", "🎉", "🎊",
];

/// Validated set of distinct symbols a session samples from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// Smallest pool that can fill a full target sequence.
    pub const MIN_LEN: usize = crate::model::SEQUENCE_LEN;

    /// Build a pool from raw symbol text, keeping the given order.
    ///
    /// Surrounding whitespace is trimmed from each entry.
    ///
    /// # Errors
    ///
    /// Returns `SymbolPoolError::Blank` for empty entries,
    /// `SymbolPoolError::Duplicate` when a symbol repeats and
    /// `SymbolPoolError::TooSmall` when fewer than [`Self::MIN_LEN`] remain.
    pub fn new<I, S>(symbols: I) -> Result<Self, SymbolPoolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Symbol> = Vec::new();
        for (index, raw) in symbols.into_iter().enumerate() {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                return Err(SymbolPoolError::Blank { index });
            }
            let symbol = Symbol::new(trimmed);
            if out.contains(&symbol) {
                return Err(SymbolPoolError::Duplicate {
                    symbol: trimmed.to_string(),
                });
            }
            out.push(symbol);
        }

        if out.len() < Self::MIN_LEN {
            return Err(SymbolPoolError::TooSmall {
                len: out.len(),
                min: Self::MIN_LEN,
            });
        }

        Ok(Self { symbols: out })
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Draw `len` distinct symbols: permute the whole pool, keep the head.
    #[must_use]
    pub fn sample(&self, len: usize, shuffler: &mut dyn Shuffle) -> Vec<Symbol> {
        let mut drawn = self.symbols.clone();
        shuffler.shuffle(&mut drawn);
        drawn.truncate(len);
        drawn
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().copied().map(Symbol::from).collect(),
        }
    }
}

impl FromStr for SymbolPool {
    type Err = SymbolPoolError;

    /// Parses a comma-separated list such as `"a, b, c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split(','))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

//! Sweep domains and the classification symbol registry.
//!
//! The registry maps C symbol names to the core implementations and
//! reproduces the integer-domain clamp the ABI boundary applies, so fixture
//! replay exercises exactly the semantics the cdylib exports.

use crate::error::HarnessError;

/// Lower bound of the implementation sweep domain.
pub const SWEEP_MIN: i32 = -128;

/// Upper bound of the implementation sweep domain.
///
/// Covers the mandatory -1..=256 boundary inputs with margin on both sides
/// for sign-extension mistakes.
pub const SWEEP_MAX: i32 = 320;

/// Host ctype tables are only defined for EOF plus the signed/unsigned char
/// range; host-differential runs must stay inside these bounds. Conversions
/// compare over a narrower domain still, see [`Symbol::host_parity_domain`].
pub const HOST_TABLE_MIN: i32 = -128;
pub const HOST_TABLE_MAX: i32 = 255;

/// Full implementation sweep domain.
pub fn sweep_domain() -> std::ops::RangeInclusive<i32> {
    SWEEP_MIN..=SWEEP_MAX
}

/// Domain over which host parity is well-defined.
pub fn host_domain() -> std::ops::RangeInclusive<i32> {
    HOST_TABLE_MIN..=HOST_TABLE_MAX
}

/// What a registry entry computes.
#[derive(Clone, Copy)]
pub enum SymbolKind {
    /// Predicate: 0 outside the byte domain, else 0/1 membership.
    Classify(fn(u8) -> bool),
    /// Conversion: identity outside the byte domain.
    Convert(fn(u8) -> u8),
}

/// One exported C symbol and its core implementation.
#[derive(Clone, Copy)]
pub struct Symbol {
    pub name: &'static str,
    pub kind: SymbolKind,
}

impl Symbol {
    /// Evaluate the symbol over the full integer domain with the ABI clamp.
    pub fn eval(&self, c: i32) -> i32 {
        let Ok(byte) = u8::try_from(c) else {
            return match self.kind {
                SymbolKind::Classify(_) => 0,
                SymbolKind::Convert(_) => c,
            };
        };
        match self.kind {
            SymbolKind::Classify(f) => i32::from(f(byte)),
            SymbolKind::Convert(f) => i32::from(f(byte)),
        }
    }

    /// True when the symbol is a predicate rather than a conversion.
    pub fn is_classify(&self) -> bool {
        matches!(self.kind, SymbolKind::Classify(_))
    }

    /// Inputs over which host parity is well-defined for this symbol.
    ///
    /// Predicates answer false over the whole host table, sign-extended
    /// negatives included. The host conversion tables instead alias
    /// -128..=-2 to their unsigned counterparts (`tolower(-128)` is 128 on
    /// glibc), a legacy behavior the identity contract deliberately does not
    /// reproduce, so conversions compare only at EOF and the byte domain.
    pub fn host_parity_domain(
        &self,
    ) -> std::iter::Chain<std::ops::RangeInclusive<i32>, std::ops::RangeInclusive<i32>> {
        match self.kind {
            SymbolKind::Classify(_) => (HOST_TABLE_MIN..=-1).chain(0..=HOST_TABLE_MAX),
            SymbolKind::Convert(_) => (-1..=-1).chain(0..=HOST_TABLE_MAX),
        }
    }

    /// True when the host reference is comparable for this input.
    pub fn host_parity_defined(&self, c: i32) -> bool {
        if !host_domain().contains(&c) {
            return false;
        }
        self.is_classify() || c >= -1
    }
}

use ferroctype_core::ctype;

/// Every exported classification and conversion symbol, in symbol order.
pub const SYMBOLS: &[Symbol] = &[
    Symbol { name: "isalnum", kind: SymbolKind::Classify(ctype::is_alnum) },
    Symbol { name: "isalpha", kind: SymbolKind::Classify(ctype::is_alpha) },
    Symbol { name: "isblank", kind: SymbolKind::Classify(ctype::is_blank) },
    Symbol { name: "iscntrl", kind: SymbolKind::Classify(ctype::is_cntrl) },
    Symbol { name: "isdigit", kind: SymbolKind::Classify(ctype::is_digit) },
    Symbol { name: "isgraph", kind: SymbolKind::Classify(ctype::is_graph) },
    Symbol { name: "islower", kind: SymbolKind::Classify(ctype::is_lower) },
    Symbol { name: "isprint", kind: SymbolKind::Classify(ctype::is_print) },
    Symbol { name: "ispunct", kind: SymbolKind::Classify(ctype::is_punct) },
    Symbol { name: "isspace", kind: SymbolKind::Classify(ctype::is_space) },
    Symbol { name: "isupper", kind: SymbolKind::Classify(ctype::is_upper) },
    Symbol { name: "isxdigit", kind: SymbolKind::Classify(ctype::is_xdigit) },
    Symbol { name: "tolower", kind: SymbolKind::Convert(ctype::to_lower) },
    Symbol { name: "toupper", kind: SymbolKind::Convert(ctype::to_upper) },
];

/// Look up a registry entry by C symbol name.
pub fn lookup(name: &str) -> Result<&'static Symbol, HarnessError> {
    SYMBOLS
        .iter()
        .find(|sym| sym.name == name)
        .ok_or_else(|| HarnessError::UnknownSymbol(name.to_string()))
}

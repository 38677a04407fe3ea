//! Built-in unary functions
//!
//! The function table is fixed: ten real-valued functions of one argument.
//! Every function has a canonical name and, for some, an English alias
//! (`tg` / `tan`, `arcsin` / `asin`, ...). Both spellings resolve to the same
//! [`Function`], so the compiled program never depends on which one was used.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::fmt;

/// A built-in function of one real argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Cos,
    Sin,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Ln,
    Lg,
    Abs,
}

/// All functions in table order.
pub const FUNCTIONS: [Function; 10] = [
    Function::Cos,
    Function::Sin,
    Function::Tan,
    Function::Cot,
    Function::Asin,
    Function::Acos,
    Function::Atan,
    Function::Ln,
    Function::Lg,
    Function::Abs,
];

/// Accepted spellings. Lookup is case-sensitive.
const NAMES: [(&str, Function); 16] = [
    ("cos", Function::Cos),
    ("sin", Function::Sin),
    ("tg", Function::Tan),
    ("tan", Function::Tan),
    ("ctg", Function::Cot),
    ("cot", Function::Cot),
    ("arcsin", Function::Asin),
    ("asin", Function::Asin),
    ("arccos", Function::Acos),
    ("acos", Function::Acos),
    ("arctg", Function::Atan),
    ("atan", Function::Atan),
    ("ln", Function::Ln),
    ("log", Function::Ln),
    ("lg", Function::Lg),
    ("abs", Function::Abs),
];

lazy_static! {
    static ref BY_NAME: FxHashMap<&'static str, Function> = NAMES.iter().copied().collect();
}

impl Function {
    /// Resolve a function name, returning `None` for unknown identifiers.
    pub fn lookup(name: &str) -> Option<Function> {
        BY_NAME.get(name).copied()
    }

    /// Position of this function in [`FUNCTIONS`].
    pub fn index(self) -> usize {
        match self {
            Function::Cos => 0,
            Function::Sin => 1,
            Function::Tan => 2,
            Function::Cot => 3,
            Function::Asin => 4,
            Function::Acos => 5,
            Function::Atan => 6,
            Function::Ln => 7,
            Function::Lg => 8,
            Function::Abs => 9,
        }
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Function::Cos => "cos",
            Function::Sin => "sin",
            Function::Tan => "tg",
            Function::Cot => "ctg",
            Function::Asin => "arcsin",
            Function::Acos => "arccos",
            Function::Atan => "arctg",
            Function::Ln => "ln",
            Function::Lg => "lg",
            Function::Abs => "abs",
        }
    }

    /// Apply the function. Out-of-domain arguments yield NaN or infinities,
    /// never a panic.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Function::Cos => x.cos(),
            Function::Sin => x.sin(),
            Function::Tan => x.tan(),
            Function::Cot => 1.0 / x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Ln => x.ln(),
            Function::Lg => x.log10(),
            Function::Abs => x.abs(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_index() {
        for (i, func) in FUNCTIONS.iter().enumerate() {
            assert_eq!(func.index(), i);
        }
    }

    #[test]
    fn test_canonical_names_resolve() {
        for func in FUNCTIONS {
            assert_eq!(Function::lookup(func.name()), Some(func));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Function::lookup("tan"), Some(Function::Tan));
        assert_eq!(Function::lookup("cot"), Some(Function::Cot));
        assert_eq!(Function::lookup("asin"), Some(Function::Asin));
        assert_eq!(Function::lookup("log"), Some(Function::Ln));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Function::lookup("Sin"), None);
        assert_eq!(Function::lookup("COS"), None);
        assert_eq!(Function::lookup("foo"), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Function::Abs.apply(-3.5), 3.5);
        assert!((Function::Lg.apply(1000.0) - 3.0).abs() < 1e-12);
        assert!((Function::Cot.apply(std::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-12);
        assert!(Function::Ln.apply(-1.0).is_nan());
        assert!(Function::Asin.apply(2.0).is_nan());
    }
}

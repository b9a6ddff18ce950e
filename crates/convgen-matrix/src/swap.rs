//! Wire-word byte-order handling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte-order handling applied to wire words during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapMode {
    /// Wire words are already in host byte order; no swap call is emitted.
    Native,
    /// Wire words are byte-reversed relative to host order; every wire-side
    /// value passes through the byte-swap primitive exactly once.
    Swapped,
}

impl SwapMode {
    /// Both swap modes, native first (the enumeration order).
    pub const ALL: [SwapMode; 2] = [SwapMode::Native, SwapMode::Swapped];

    /// Token distinguishing the variants in converter names.
    pub fn token(&self) -> &'static str {
        match self {
            SwapMode::Native => "nswap",
            SwapMode::Swapped => "bswap",
        }
    }

    /// The byte-swap primitive referenced by emitted code, if any.
    pub fn swap_fn(&self) -> Option<&'static str> {
        match self {
            SwapMode::Native => None,
            SwapMode::Swapped => Some("sdr::byteswap"),
        }
    }

    /// Wrap a wire-word expression in the swap call.
    ///
    /// Both structural skeletons and both conversion directions route
    /// wire-side values through here; this is the single point where the
    /// swap is applied.
    pub fn wrap(&self, expr: &str) -> String {
        match self.swap_fn() {
            Some(swap) => format!("{}({})", swap, expr),
            None => expr.to_owned(),
        }
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(SwapMode::Native.token(), "nswap");
        assert_eq!(SwapMode::Swapped.token(), "bswap");
    }

    #[test]
    fn test_native_has_no_swap_primitive() {
        assert_eq!(SwapMode::Native.swap_fn(), None);
        assert_eq!(SwapMode::Swapped.swap_fn(), Some("sdr::byteswap"));
    }

    #[test]
    fn test_wrap_leaves_native_untouched() {
        assert_eq!(SwapMode::Native.wrap("input[i]"), "input[i]");
    }

    #[test]
    fn test_wrap_applies_swap_once() {
        assert_eq!(
            SwapMode::Swapped.wrap("input[j++]"),
            "sdr::byteswap(input[j++])"
        );
    }

    #[test]
    fn test_declared_order() {
        assert_eq!(SwapMode::ALL, [SwapMode::Native, SwapMode::Swapped]);
    }
}

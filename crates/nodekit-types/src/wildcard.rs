use std::fmt;

use serde::{Serialize, Serializer};

/// Socket-type marker that matches any declared type.
///
/// Host type checks reject a connection when `declared != actual`. This
/// sentinel defeats that check from the left-hand side: its `ne` is `false`
/// against every operand, while `==` stays structural (`Wildcard == "*"`,
/// `Wildcard == Wildcard`). The asymmetry is deliberate; hosts that compare
/// tokens through `!=` must always see a match. New code should prefer
/// [`types_compatible`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wildcard;

impl Wildcard {
    /// The wire token the sentinel stands for.
    pub const TOKEN: &'static str = "*";
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::TOKEN)
    }
}

impl Serialize for Wildcard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::TOKEN)
    }
}

impl PartialEq for Wildcard {
    fn eq(&self, _other: &Wildcard) -> bool {
        true
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, _other: &Wildcard) -> bool {
        false
    }
}

impl Eq for Wildcard {}

impl PartialEq<str> for Wildcard {
    fn eq(&self, other: &str) -> bool {
        other == Self::TOKEN
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, _other: &str) -> bool {
        false
    }
}

impl PartialEq<&str> for Wildcard {
    fn eq(&self, other: &&str) -> bool {
        *other == Self::TOKEN
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, _other: &&str) -> bool {
        false
    }
}

impl PartialEq<String> for Wildcard {
    fn eq(&self, other: &String) -> bool {
        other == Self::TOKEN
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, _other: &String) -> bool {
        false
    }
}

/// Explicit compatibility check between two socket-type tokens.
///
/// True when either side is the wildcard token or the tokens are equal.
pub fn types_compatible(declared: &str, actual: &str) -> bool {
    declared == Wildcard::TOKEN || actual == Wildcard::TOKEN || declared == actual
}

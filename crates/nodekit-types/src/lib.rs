pub mod wildcard;

pub use wildcard::{Wildcard, types_compatible};

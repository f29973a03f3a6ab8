pub mod list;
pub mod random;

pub use list::exclusive_list;
pub use random::{InvalidRange, random_int, random_int_default};

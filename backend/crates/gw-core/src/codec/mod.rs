//! Wire codec: hex transaction strings, node byte representations, and
//! JSON shaping for clients that cannot hold 64-bit integers.

pub mod bytes;
pub mod hex;
pub mod json;

pub mod landmark;
pub mod layout;
pub mod plot;
pub mod rng;

pub use landmark::*;
pub use layout::*;
pub use plot::*;
pub use rng::*;

#[allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast, clippy::manual_range_contains)]
mod wide {
    uint::construct_uint! {
        /// 256-bit unsigned integer for seeds, token ids and packed blueprints.
        pub struct U256(4);
    }
}

pub use wide::U256;

/// Seeds are plain 256-bit values threaded through every draw.
pub type Seed = U256;

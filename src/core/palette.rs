//! Named color tokens a note can carry.
//!
//! The store accepts any token; this list is what the color picker offers.

pub const PALETTE: &[&str] = &[
    "white", "red", "orange", "yellow", "green", "teal", "blue", "darkblue", "purple", "pink",
    "brown", "gray",
];

pub fn is_known(token: &str) -> bool {
    PALETTE.contains(&token)
}

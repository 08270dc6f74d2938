//! Terminal output for the `pantry` binary.
//!
//! Library code never prints; commands render through these views and
//! primitives, honoring the capabilities in [`context::UiContext`].

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

//! Shared presentation helpers: style constants, button builders, and the
//! recommendation renderings.

pub mod buttons;
pub mod recommend;
pub mod style;

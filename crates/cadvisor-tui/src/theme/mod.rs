//! Visual theme: colors and icon set

pub mod icons;
pub mod palette;

pub use icons::IconSet;

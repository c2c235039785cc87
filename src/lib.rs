//! Visual design tokens for the web interface: colors, type scale,
//! shadows, spacing and responsive breakpoints.
//!
//! The bundled default theme is available as [`theme::DEFAULT_THEME`].

pub mod theme;

mod css;

mod error;
pub use error::ThemeError;

mod assets;
pub use assets::*;

//! Theme tokens: colors, typography, shadows, spacing and breakpoints.
//!
//! A [`Theme`] is plain immutable data. The bundled default is parsed once
//! on first access through [`DEFAULT_THEME`] and shared by every reader.
//! Size-keyed token maps always hold exactly the keys `xs, sm, md, lg, xl`.

mod schema;
pub use schema::*;

mod deserializers;
pub use deserializers::MAX_PRIMARY_SHADE;

mod overrides;

mod scale;
pub use scale::*;

mod kinds;
pub use kinds::*;

//! Generic presentational primitives used by the admin components.

mod button;
mod checkbox;
mod icon;

pub use button::{Button, ButtonVariant, IconButton};
pub use checkbox::Checkbox;
pub use icon::{Icon, IconName};

pub mod runtime;
pub mod theme;
pub mod view;
pub mod widgets;
pub mod wizard;

pub use runtime::run;
pub use theme::{Theme, ThemeVariant};

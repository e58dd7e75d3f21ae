//! ShadCN-style reusable UI components.
//!
//! Each component renders an HTML string. Text that may come from a user is
//! escaped by the component; `children` arguments are trusted markup.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`card`], [`card_header`], [`card_title`], [`card_content`]: Card container
//! - [`input`], [`textarea`]: Text fields
//! - [`badge`]: Status badge/tag
//! - [`progress`]: Progress bar
//! - [`Icon`]: Inline SVG icons

mod badge;
mod button;
mod card;
mod icons;
mod input;
mod progress;

pub use badge::badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{card, card_content, card_header, card_title};
pub use icons::Icon;
pub use input::{Field, input, textarea};
pub use progress::progress;

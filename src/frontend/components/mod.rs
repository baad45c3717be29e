//! Reusable UI components for the TruView site

mod alert;
mod button;
mod container;
mod feature_card;
mod footer;
mod glass_card;
mod input;
mod nav;
mod page_frame;

pub use alert::{Alert, AlertVariant, ErrorAlert};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use container::Container;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use glass_card::GlassCard;
pub use input::{TextArea, TextInput};
pub use nav::{Nav, use_menu_toggle};
pub use page_frame::PageFrame;

//! Reusable UI components

pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod common;
pub mod container;
pub mod date_range_picker;
pub mod header;
pub mod input;
pub mod loading;
pub mod modal;
pub mod scrollbar;
pub mod select;
pub mod textarea;
pub mod user_card;

pub use alert::Alert;
pub use avatar::{Avatar, AvatarShape, ImageStatus};
pub use badge::Badge;
pub use button::{Button, ButtonKind};
pub use card::{Card, CardVariant, Padding};
pub use container::{Container, MaxWidth};
pub use date_range_picker::DateRangePicker;
pub use header::{Header, NavItem};
pub use input::{Input, InputKind};
pub use loading::{Loading, LoadingVariant};
pub use modal::{Modal, ModalSize};
pub use scrollbar::ListScrollbar;
pub use select::{Select, SelectOption, SelectValue};
pub use textarea::Textarea;
pub use user_card::UserCard;

//! Widget implementations for the Orientar component library.
//!
//! Each widget is a presentational building block of the site: the header
//! and footer frames, content cards, the dropdown selector, and the text
//! and layout primitives they compose with.

pub mod button;
pub mod card;
pub mod column;
pub mod container;
pub mod dropdown;
pub mod footer;
pub mod header;
pub mod icon;
pub mod image;
pub mod input;
pub mod row;
pub mod typography;

pub use button::{Button, ButtonClicked, ButtonPriority};
pub use card::{Card, CardButtonClicked, CardKind};
pub use column::Column;
pub use container::Container;
pub use dropdown::{Dropdown, DropdownChanged, DropdownOption};
pub use footer::{Footer, FooterColumn, FooterLink, FooterLinkSelected, SubscribeRequested};
pub use header::{Header, LogoutRequested, NavItem, NavSelected};
pub use icon::{Icon, IconName};
pub use image::{Image, ImageFit};
pub use input::{Input, InputChanged, InputSubmitted};
pub use row::{CrossAxisAlignment, MainAxisAlignment, Row};
pub use typography::{Typography, TypographyVariant};

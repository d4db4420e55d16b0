//! Testing harness for Orientar component trees.
//!
//! Drives widgets through the same event path the browser bridge uses:
//! build a tree, mount it in a [`Harness`], then click, type, and press
//! keys against it and assert on what the tree reports back.
//!
//! ```
//! use orientar_test::Harness;
//! use orientar_widgets::{Button, ButtonClicked};
//!
//! let mut harness = Harness::new(Button::new("Entrar").with_test_id("login"));
//! harness.click("#login");
//! assert!(harness.last_message::<ButtonClicked>().is_some());
//! ```
//!
//! The [`A11yChecker`] audits the same trees for WCAG 2.1 violations, and
//! [`aria_from_widget`] / [`aria_for_dropdown`] derive the ARIA attribute
//! sets a host document should carry for them.

mod a11y;
mod harness;
mod selector;

pub use a11y::{
    aria_for_dropdown, aria_from_widget, role_name, A11yChecker, A11yReport, A11yViolation,
    AriaAttributes, ContrastResult, Impact, MIN_TOUCH_TARGET_SIZE,
};
pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};

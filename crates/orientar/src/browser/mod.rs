//! Browser runtime bridging Orientar widgets to the DOM.
//!
//! Everything in here targets wasm32; the logic these modules lean on
//! (option ingestion, key mapping, ARIA snapshots) lives in
//! [`crate::adapter`] and is tested natively.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;

#[cfg(target_arch = "wasm32")]
pub use app::App;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
#[cfg(target_arch = "wasm32")]
pub use element::DropdownElement;

//! Orientar: canvas-rendered components for a university guidance site.
//!
//! This crate is the browser bridge. It re-exports the core types and
//! the widget set, converts DOM events, renders draw commands to a
//! Canvas2D context, and hosts the dropdown widget behind a custom
//! element. Everything that does not need a DOM (option normalization,
//! key mapping, ARIA projection) lives in [`adapter`] and compiles and
//! tests on any target.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { DropdownElement } from './orientar.js';
//!
//! await init();
//! customElements.define(DropdownElement.tagName(), class extends HTMLElement {
//!     static observedAttributes = DropdownElement.observedAttributes();
//!     constructor() { super(); this.inner = new DropdownElement(this); }
//!     connectedCallback() { this.inner.connected(); }
//!     disconnectedCallback() { this.inner.disconnected(); }
//!     attributeChangedCallback(name, _old, value) {
//!         this.inner.attributeChanged(name, value);
//!     }
//! });
//! ```

pub use orientar_core::*;
pub use orientar_widgets as widgets;

pub mod adapter;
pub mod browser;

pub use adapter::{
    key_from_code, normalize_options, ChangeDetail, DropdownAria, ElementSpec, OptionsError,
};

#[cfg(target_arch = "wasm32")]
pub use browser::{App, Canvas2DRenderer, DropdownElement};

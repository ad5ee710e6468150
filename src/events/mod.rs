//! Event hand-off from the keyboard hook to the UI thread.
//!
//! The low-level keyboard hook runs in a context the engine does not control,
//! so it never touches engine state. It builds an immutable event, publishes
//! it on the bus and posts a wake message; the UI thread drains the bus.
//!
//! ```text
//! ┌──────────────────┐   publish()   ┌───────────┐   drain()   ┌───────────┐
//! │  Keyboard hook   │ ────────────▶ │  EventBus │ ──────────▶ │ OsdEngine │
//! │ (WH_KEYBOARD_LL) │  + PostMessage│  (mpsc)   │  UI thread  │           │
//! └──────────────────┘               └───────────┘             └───────────┘
//! ```

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::{KeyStateEvent, OsdEvent, ToggleKey};

//! Press-driven move/scroll mode state machine with LED feedback.
//!
//! This module provides the [`ModeCoordinator`], which owns the logical
//! trackball mode and keeps the trackball hardware in step with it. A key
//! binding fires [`ModeCoordinator::on_pressed()`] with one of three
//! parameters; the coordinator works out the new mode and, when the mode
//! actually changes, pushes it to the trackball together with the LED color
//! configured for that mode.
//!
//! # Transitions
//!
//! ```text
//!                 MOVE_TOGGLE
//!           ┌──────────────────────┐
//!           │                      ▼
//!        [Move]                [Scroll]
//!           ▲                      │
//!           └──────────────────────┘
//!                 MOVE_TOGGLE
//!
//! SCROLL_SET: Move → Scroll, Scroll stays Scroll (no side effects)
//! MOVE_SET:   Scroll → Move, Move stays Move     (no side effects)
//! ```
//!
//! # Hardware drift
//!
//! Hardware updates are best-effort. If writing the mode or LED fails, the
//! coordinator keeps the new logical mode and reports the error; it never
//! rolls back. Without a ready trackball the coordinator still tracks the
//! mode, it just has nothing to notify.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. The optional `defmt` feature enables structured
//! logging for embedded targets.

mod binding;
mod config;
mod coordinator;
mod error;
mod link;

pub use binding::{ModeBinding, MOVE_SET, MOVE_TOGGLE, SCROLL_SET};
pub use config::ModeConfig;
pub use coordinator::ModeCoordinator;
pub use error::ModeError;
pub use link::TrackballLink;

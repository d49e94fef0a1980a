//! Move/scroll mode coordination for the Pimoroni PIM447 trackball.
//!
//! See [`mode_coordinator`] for the state machine and the
//! [`TrackballLink`](mode_coordinator::TrackballLink) seam it drives.

#![cfg_attr(not(test), no_std)]

pub mod mode_coordinator;

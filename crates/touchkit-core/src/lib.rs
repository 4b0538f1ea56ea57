//! Hardware-independent core library for touchkit
//!
//! This crate contains the platform-agnostic pieces of a small touchscreen
//! button toolkit: font metrics and label layout, rectangle / arrow / label /
//! numeric buttons with a press state machine, and a fixed-capacity registry
//! that hit-tests touch coordinates and dispatches press callbacks.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod framebuffer;
pub mod ui;

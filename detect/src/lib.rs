//! Detection core of the wireless fencing prototype.
//!
//! The weapon's sense line carries a square-wave carrier whose frequency
//! encodes what the tip is touching. This crate counts the carrier edges,
//! estimates the frequency over rolling windows, classifies it into the
//! scoring bands, debounces the tip switch, and turns press/release pairs
//! into touch events. It is meant to be driven by a firmware polling loop
//! plus one edge interrupt, but runs just as well on the host for tests.
//!
//! ```text
//!  (edge ISR)                          (1 kHz control loop)
//!      |                                       |
//!      V                                       V
//! [ PulseCounter ] --takes--> { Snapshot } --> [ Detector ]
//!                                               |  |    |
//!                                   [ Switch ]--+  |    +--> TouchEvent
//!                                [ Estimator ]-----+    +--> Reading
//! ```
//!
//! The firmware owns the clock and the pins; everything handed in is raw.
//! Everything handed back out is a plain value the reporter can consume.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod band;
pub mod config;
pub mod counter;
pub mod detector;
pub mod estimator;
pub mod event;
pub mod snapshot;
pub mod switch;

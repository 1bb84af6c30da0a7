//! # Twilight Clock Library
//!
//! Internal library for the `twilight-clock` binary.
//!
//! This library exists to enable testing of the face and the almanac, and
//! keeps CLI dispatch (main.rs) apart from application logic.
//!
//! ## Architecture
//!
//! - **Almanac**: `geo` computes rise and set times for any zenith, converts
//!   them to local time and derives the moon phase
//! - **Face**: `face` turns those times into the banded 24-hour dial and draws
//!   it onto any `RenderSurface`, with `Canvas` as the in-memory bitmap
//! - **State**: `state` persists the last reported location
//! - **Configuration**: `config` for TOML-based display settings
//! - **Commands**: `commands` for the CLI subcommands (times, render, watch, location)
//! - **Infrastructure**: signal handling, the injectable clock, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod face;
pub mod geo;
pub mod signals;
pub mod state;
pub mod time_source;

//! State Module - Polled input state
//!
//! The adapters that translate raw window events into state the update
//! loop can poll:
//!
//! - **Keyboard** - Toggle locks, latched most-recent key press
//! - **Mouse** - Cell coordinates, held buttons, one-shot clicks
//! - **Input** - Crossterm bridge: conversion, polling, routing

mod input;
mod keyboard;
mod mouse;

pub use input::*;
pub use keyboard::*;
pub use mouse::*;

//! WebAssembly bindings for the lib2600 emulator.
//!
//! This module exposes the console to JavaScript so a browser page can load a
//! cartridge, run frames and blit the result to a canvas.

pub mod api;

pub use api::Atari2600Wasm;

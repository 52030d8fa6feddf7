//! WASM API for the Atari 2600 emulator.
//!
//! Provides JavaScript-callable interfaces for loading cartridges, running
//! frames and inspecting CPU state.

use crate::{Atari2600, ExecutionError, TimingConfig};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(error: ExecutionError) -> Self {
        JsError::new(&error.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Atari2600Wasm {
    console: Atari2600,
}

#[wasm_bindgen]
impl Atari2600Wasm {
    /// Create a console with NTSC timing and an empty cartridge slot
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Atari2600Wasm {
            console: Atari2600::new(TimingConfig::ntsc()),
        }
    }

    /// Insert a cartridge image and reset
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.console.load_rom(rom);
    }

    pub fn reset(&mut self) {
        self.console.reset();
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.console.step()?)
    }

    /// Run until the current frame completes
    pub fn run_frame(&mut self) -> Result<(), JsError> {
        self.console.run_frame()?;
        Ok(())
    }

    /// Blank the picture; emulation state is untouched
    pub fn clear_frame_buffer(&mut self) {
        self.console.clear_frame_buffer();
    }

    /// Raw TIA colour values, 160x192 bytes
    pub fn frame_buffer(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.console.frame_buffer().pixels())
    }

    /// RGBA8 pixels ready for `ImageData`, 160x192x4 bytes
    pub fn frame_rgba(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.console.frame_buffer().to_rgba().as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.console.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.console.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.console.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.console.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.console.cpu().sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.console.cpu().status()
    }

    /// Cycle count as f64 (JavaScript numbers are doubles)
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.console.cpu().cycles() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn scanline(&self) -> u32 {
        self.console.scanline()
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> f64 {
        self.console.frame_count() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.console.is_halted()
    }
}

impl Default for Atari2600Wasm {
    fn default() -> Self {
        Self::new()
    }
}

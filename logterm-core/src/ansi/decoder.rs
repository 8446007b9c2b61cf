//! Escape-sequence decoder
//!
//! Per-byte state machine that separates literal characters from
//! `ESC [ params m` color sequences. Literal characters are forwarded to a
//! [`ColorSink`] together with color updates; the decoder itself never
//! fails and never blocks.
//!
//! ```text
//!            ESC              '['
//!   Normal ───────► Escape ───────► ControlSequence
//!     ▲               │ other            │ digit / ';' (stay)
//!     │   replay raw  │                  │ other: run command
//!     └───────────────┴──────────────────┘
//! ```
//!
//! Capacity limits: the parameter list holds [`MAX_PARAMS`] values and the
//! raw byte buffer [`MAX_RAW_BYTES`] bytes. Extra parameters are dropped
//! (the ones that fit are still applied), extra raw bytes are not retained,
//! and the value accumulator saturates at `u16::MAX`.

use heapless::Vec;

use super::palette::{AnsiColor, Rgb};

/// Escape byte
pub const ESC: u8 = 0x1B;

/// Second byte of a Control Sequence Introducer
pub const CSI: u8 = b'[';

/// Select Graphic Rendition command byte
pub const SGR: u8 = b'm';

/// Maximum parameters kept for one control sequence
pub const MAX_PARAMS: usize = 10;

/// Maximum bytes buffered while inside an escape sequence
pub const MAX_RAW_BYTES: usize = 10;

/// Consumer of decoded output
///
/// The decoder reports color changes as they are parsed and hands every
/// literal byte to `emit_character`. Implementations decide what the
/// "current" colors mean for the emitted character.
pub trait ColorSink {
    /// Foreground color changed
    fn set_foreground(&mut self, color: Rgb);

    /// Background color changed
    fn set_background(&mut self, color: Rgb);

    /// A literal character was decoded
    fn emit_character(&mut self, c: u8);
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    fn set_foreground(&mut self, color: Rgb) {
        (**self).set_foreground(color)
    }

    fn set_background(&mut self, color: Rgb) {
        (**self).set_background(color)
    }

    fn emit_character(&mut self, c: u8) {
        (**self).emit_character(c)
    }
}

/// Decoder parse state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Passing literal characters through
    Normal,
    /// Saw ESC, waiting for '['
    Escape,
    /// Inside `ESC [`, collecting parameters
    ControlSequence,
}

/// ANSI color escape decoder
#[derive(Debug, Clone)]
pub struct AnsiDecoder<S> {
    sink: S,
    state: DecoderState,
    value: u16,
    params: Vec<u16, MAX_PARAMS>,
    raw: Vec<u8, MAX_RAW_BYTES>,
}

impl<S: ColorSink> AnsiDecoder<S> {
    /// Create a decoder that forwards its output to `sink`
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            state: DecoderState::Normal,
            value: 0,
            params: Vec::new(),
            raw: Vec::new(),
        }
    }

    /// Current parse state
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Get access to the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the decoder and return its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Abandon any partial sequence without emitting it
    pub fn reset(&mut self) {
        self.state = DecoderState::Normal;
        self.value = 0;
        self.params.clear();
        self.raw.clear();
    }

    /// Feed multiple bytes to the decoder
    pub fn process_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.process_byte(byte);
        }
    }

    /// Feed a single byte to the decoder
    pub fn process_byte(&mut self, c: u8) {
        match self.state {
            DecoderState::Normal => {
                if c == ESC {
                    self.buffer_raw(c);
                    self.state = DecoderState::Escape;
                } else {
                    self.sink.emit_character(c);
                }
            }
            DecoderState::Escape => {
                self.buffer_raw(c);
                if c == CSI {
                    self.state = DecoderState::ControlSequence;
                } else {
                    self.replay_raw();
                }
            }
            DecoderState::ControlSequence => {
                self.buffer_raw(c);
                match c {
                    b'0'..=b'9' => {
                        self.value = self
                            .value
                            .saturating_mul(10)
                            .saturating_add(u16::from(c - b'0'));
                    }
                    b';' => self.push_param(),
                    _ => {
                        self.push_param();
                        self.handle_command(c);
                        self.finish_sequence();
                    }
                }
            }
        }
    }

    fn buffer_raw(&mut self, c: u8) {
        // Only the Escape state replays, and it never holds more than two bytes
        let _ = self.raw.push(c);
    }

    /// Emit everything seen since ESC as literal text
    fn replay_raw(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Malformed escape, replaying {} bytes", self.raw.len());

        for &byte in self.raw.iter() {
            self.sink.emit_character(byte);
        }
        self.raw.clear();
        self.state = DecoderState::Normal;
    }

    fn push_param(&mut self) {
        if self.params.push(self.value).is_err() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Dropping SGR parameter {}: list full", self.value);
        }
        self.value = 0;
    }

    fn handle_command(&mut self, command: u8) {
        match command {
            SGR => {
                for &param in self.params.iter() {
                    apply_sgr(&mut self.sink, param);
                }
            }
            _ => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Ignoring CSI command {=u8:#x}", command);
            }
        }
    }

    fn finish_sequence(&mut self) {
        self.params.clear();
        self.raw.clear();
        self.value = 0;
        self.state = DecoderState::Normal;
    }
}

/// Apply one SGR parameter to the sink
fn apply_sgr<S: ColorSink>(sink: &mut S, value: u16) {
    if value == 0 {
        sink.set_foreground(AnsiColor::White.normal());
        sink.set_background(AnsiColor::Black.normal());
        return;
    }

    let Some(color) = AnsiColor::from_index((value % 10) as u8) else {
        return;
    };

    match value / 10 {
        3 => sink.set_foreground(color.normal()),
        4 => sink.set_background(color.normal()),
        9 => sink.set_foreground(color.bright()),
        10 => sink.set_background(color.bright()),
        _ => {}
    }
}

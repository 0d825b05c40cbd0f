//! Error types for palette operations

use std::fmt;

/// Color channel, used to point at the offending parameter in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Error type for palette generation and construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Channel bit depth outside 1..=8
    InvalidChannelDepth {
        /// Channel the depth was given for
        channel: Channel,
        /// The rejected depth
        bits: u8,
    },
    /// No colors provided
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidChannelDepth { channel, bits } => {
                write!(
                    f,
                    "invalid {} channel depth: {} bits (expected 1..=8)",
                    channel, bits
                )
            }
            PaletteError::Empty => write!(f, "palette cannot be empty"),
        }
    }
}

impl std::error::Error for PaletteError {}

//! Interleaved channel selector.
//!
//! Operations in radon-rs run once per channel so that color planes are
//! processed independently. [`Channel`] names the plane and converts to the
//! 0-based interleave offset used by [`Image`](crate::Image).
//!
//! For gray images `Red` addresses the luminance plane and, for gray+alpha,
//! `Green` addresses the alpha plane: the selector is positional.

use std::fmt;

/// One interleaved plane of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Offset 0.
    Red,
    /// Offset 1.
    Green,
    /// Offset 2.
    Blue,
    /// Offset 3.
    Alpha,
}

impl Channel {
    /// All channels in interleave order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Returns the 0-based interleave offset.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    /// Iterates the first `count` channels (clamped to 4).
    ///
    /// ```rust
    /// use radon_core::Channel;
    ///
    /// let rgb: Vec<_> = Channel::iter(3).collect();
    /// assert_eq!(rgb, [Channel::Red, Channel::Green, Channel::Blue]);
    /// ```
    pub fn iter(count: usize) -> impl Iterator<Item = Channel> {
        Self::ALL.into_iter().take(count)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
        };
        f.write_str(name)
    }
}

//! Parsed forms of the string tokens used throughout the catalog.
//!
//! Catalog lookups stay string-keyed (exact, case-sensitive match); these types
//! are for consumers that need the numeric dimensions behind a token, such as
//! hosts that feed width/height into an image pipeline.

use std::{fmt, str::FromStr};

use anyhow::{Context, Result, bail};

/// Ratio selected when a node is first created.
pub const DEFAULT_RATIO: &str = "16:9";

/// Resolution selected when a node is first created.
pub const DEFAULT_RESOLUTION: &str = "1920x1080";

/// A pixel dimension pair, parsed from a `"<width>x<height>"` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Floor both dimensions to the nearest multiple of `multiple`.
    ///
    /// Latent-space pipelines conventionally want multiples of 8. A zero
    /// multiple leaves the resolution unchanged.
    pub fn align_down(self, multiple: u32) -> Self {
        if multiple == 0 {
            return self;
        }
        Self {
            width: (self.width / multiple) * multiple,
            height: (self.height / multiple) * multiple,
        }
    }
}

impl FromStr for Resolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .split_once('x')
            .with_context(|| format!("resolution token \"{}\" is not of the form <width>x<height>", s))?;
        Ok(Self {
            width: parse_dimension(width, s)?,
            height: parse_dimension(height, s)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An aspect-ratio class, parsed from a `"<w>:<h>"` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub w: u32,
    pub h: u32,
}

impl AspectRatio {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

impl FromStr for AspectRatio {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .with_context(|| format!("ratio token \"{}\" is not of the form <w>:<h>", s))?;
        Ok(Self {
            w: parse_dimension(w, s)?,
            h: parse_dimension(h, s)?,
        })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

// u32::from_str accepts a leading '+', which is not a valid token character.
fn parse_dimension(part: &str, token: &str) -> Result<u32> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        bail!("token \"{}\" contains a non-numeric dimension \"{}\"", token, part);
    }
    let value: u32 = part
        .parse()
        .with_context(|| format!("dimension \"{}\" in token \"{}\" is out of range", part, token))?;
    if value == 0 {
        bail!("dimension in token \"{}\" must be positive", token);
    }
    Ok(value)
}

// ABOUTME: Rectangle scaling helper for fitting one box inside another.
// ABOUTME: Dimensions parses and prints the WIDTHxHEIGHT form used on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of a rectangle, in whole units (usually pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`, e.g. `1920x1080`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let width = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
        let height = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
        Ok(Self { width, height })
    }
}

/// Scales `inner` proportionally so it fits inside `container`.
///
/// The result touches the container on at least one side; it may be larger
/// than `inner`. Fractional sizes are truncated. A zero-sized `inner` gives 0x0.
pub fn dimensions_to_fit(inner: Dimensions, container: Dimensions) -> Dimensions {
    if inner.width == 0 || inner.height == 0 {
        return Dimensions::default();
    }

    let scale = f64::min(
        f64::from(container.width) / f64::from(inner.width),
        f64::from(container.height) / f64::from(inner.height),
    );

    Dimensions {
        width: (scale * f64::from(inner.width)) as u32,
        height: (scale * f64::from(inner.height)) as u32,
    }
}

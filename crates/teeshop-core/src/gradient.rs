//! Pointer-reactive background gradient.
//!
//! [`paint`] maps a pointer position inside the viewport to a two-stop slate
//! gradient that points toward the cursor. [`FrameScheduler`] coalesces
//! pointer events so the gradient is recomputed at most once per frame with
//! the most recent position.

/// Pointer position in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An HSL color; saturation and lightness are percentages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({:.1} {:.1}% {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A linear gradient from a dark stop at 0% to a bright stop at 100%
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    /// Direction in degrees, pointing from the viewport center toward the pointer
    pub angle: f64,
    pub dark: Hsl,
    pub bright: Hsl,
}

impl GradientSpec {
    /// CSS `background` value
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Shortest round-trip digits; -0 prints as 0
        let angle = self.angle + 0.0;
        write!(
            f,
            "linear-gradient({}deg, {} 0%, {} 100%)",
            angle, self.dark, self.bright
        )
    }
}

// Slate blue-grey range
const BASE_HUE: f64 = 225.0;
const HUE_SWING: f64 = 6.0;

/// Normalize a coordinate into [0, 1]; a degenerate axis reads as its midpoint.
fn normalize(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() || !value.is_finite() {
        return 0.5;
    }
    (value / extent).clamp(0.0, 1.0)
}

/// Compute the background gradient for a pointer position.
///
/// - hue drifts slightly with horizontal position
/// - saturation peaks at the horizontal center
/// - the bright stop dims and the dark stop lifts as the pointer moves down
pub fn paint(pointer: Point, viewport: Viewport) -> GradientSpec {
    let nx = normalize(pointer.x, viewport.width);
    let ny = normalize(pointer.y, viewport.height);

    let center = viewport.center();
    let dy = pointer.y - center.y;
    let dx = pointer.x - center.x;
    let angle = if dx.is_finite() && dy.is_finite() {
        dy.atan2(dx).to_degrees()
    } else {
        0.0
    };

    let base_hue = BASE_HUE + (nx - 0.5) * HUE_SWING;
    let center_boost = 1.0 - (nx - 0.5).abs() * 2.0;

    GradientSpec {
        angle,
        dark: Hsl {
            hue: base_hue - 6.0,
            saturation: 8.0 + center_boost * 22.0,
            lightness: 12.0 + ny * 18.0,
        },
        bright: Hsl {
            hue: base_hue + 4.0,
            saturation: 10.0 + center_boost * 18.0,
            lightness: 85.0 - ny * 25.0,
        },
    }
}

/// Coalesces rapid updates into at most one pending frame.
///
/// Each [`schedule`](Self::schedule) overwrites the latest value; only the
/// first call after a frame fires asks the caller to request a new frame.
/// When the frame fires, [`take_frame`](Self::take_frame) hands back the most
/// recent value. Intermediate values are dropped, not queued.
#[derive(Debug, Clone)]
pub struct FrameScheduler<T: Copy> {
    latest: T,
    pending: bool,
    /// Set once any value has been scheduled
    scheduled: bool,
}

impl<T: Copy> FrameScheduler<T> {
    pub fn new(initial: T) -> Self {
        Self {
            latest: initial,
            pending: false,
            scheduled: false,
        }
    }

    /// Record a new value. Returns `true` when the caller must request a frame.
    pub fn schedule(&mut self, value: T) -> bool {
        self.latest = value;
        self.scheduled = true;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called when the frame fires; yields the latest value if a frame was pending.
    pub fn take_frame(&mut self) -> Option<T> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.latest)
    }

    /// Swap the starting value for a better one, unless a real value has
    /// already been scheduled. Returns the value to paint now.
    ///
    /// A pending frame is left untouched.
    pub fn reseed(&mut self, initial: T) -> T {
        if !self.scheduled {
            self.latest = initial;
        }
        self.latest
    }

    /// Most recently scheduled value, pending or not
    pub fn latest(&self) -> T {
        self.latest
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

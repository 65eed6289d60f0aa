//! Device ↔ domain coordinate mapping
//!
//! Three spaces are involved:
//! - domain: (time step, money)
//! - content: device units before pan/zoom, produced by the linear scales
//!   and offset by the viewport insets
//! - device: what the pointer reports, `transform.apply(content)`
//!
//! The viewport size is always an explicit input.

use serde::{Deserialize, Serialize};

use crate::model::Datum;

/// Space reserved around the plot area, in device units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            insets: Insets::default(),
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.left - self.insets.right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.top - self.insets.bottom).max(1.0)
    }
}

/// Affine map from a domain interval onto a range interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    /// A degenerate domain is widened by one unit on each side
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.0 == domain.1 {
            (domain.0 - 1.0, domain.1 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r0 == r1 {
            return d0;
        }
        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Bounds on the zoom factor and the per-notch wheel step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    /// Multiplier applied per wheel notch when zooming in
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 10.0,
            step: 1.1,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Pan/zoom state: `device = content * scale + translate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub fn identity() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale_x + self.translate_x,
            y * self.scale_y + self.translate_y,
        )
    }

    pub fn invert(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.translate_x) / self.scale_x,
            (y - self.translate_y) / self.scale_y,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// Multiply the scale by `factor`, keeping the content under the device
    /// point `(x, y)` in place
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64, limits: &ZoomLimits) {
        let (cx, cy) = self.invert(x, y);
        self.scale_x = limits.clamp(self.scale_x * factor);
        self.scale_y = limits.clamp(self.scale_y * factor);
        self.translate_x = x - cx * self.scale_x;
        self.translate_y = y - cy * self.scale_y;
    }
}

/// Domain rectangle currently visible in the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainRect {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Scales derived from a series and a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub x: LinearScale,
    pub y: LinearScale,
    pub viewport: Viewport,
}

impl ChartGeometry {
    /// Fit the x and y extents of `data` to the plot area. Device y grows
    /// downwards, so the y range is inverted.
    pub fn fit(data: &[Datum], viewport: Viewport) -> Self {
        let x_extent = extent(data.iter().map(|d| d.x as f64));
        let y_extent = extent(data.iter().map(|d| d.y));
        Self {
            x: LinearScale::new(x_extent, (0.0, viewport.plot_width())),
            y: LinearScale::new(y_extent, (viewport.plot_height(), 0.0)),
            viewport,
        }
    }

    pub fn to_device(&self, transform: &ZoomTransform, x: f64, y: f64) -> (f64, f64) {
        transform.apply(
            self.x.map(x) + self.viewport.insets.left,
            self.y.map(y) + self.viewport.insets.top,
        )
    }

    pub fn device_x(&self, transform: &ZoomTransform, x: f64) -> f64 {
        self.to_device(transform, x, 0.0).0
    }

    pub fn domain_x(&self, transform: &ZoomTransform, device_x: f64) -> f64 {
        let (cx, _) = transform.invert(device_x, 0.0);
        self.x.invert(cx - self.viewport.insets.left)
    }

    pub fn domain_y(&self, transform: &ZoomTransform, device_y: f64) -> f64 {
        let (_, cy) = transform.invert(0.0, device_y);
        self.y.invert(cy - self.viewport.insets.top)
    }

    /// Domain bounds covered by the whole viewport, low to high on each axis
    pub fn visible_domain(&self, transform: &ZoomTransform) -> DomainRect {
        let x0 = self.domain_x(transform, 0.0);
        let x1 = self.domain_x(transform, self.viewport.width);
        let y0 = self.domain_y(transform, self.viewport.height);
        let y1 = self.domain_y(transform, 0.0);
        DomainRect {
            x: (x0.min(x1), x0.max(x1)),
            y: (y0.min(y1), y0.max(y1)),
        }
    }
}

/// (min, max) of the values, or (0, 0) when there are none
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0))
}

//! Grids (2D and 3D) and 3D axes.

use serde_json::{Value, json};

use super::{Numeric, OptionBuilder};

/// Cartesian grid (`grid`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOpts {
    pos_left: Option<String>,
    pos_top: Option<String>,
    pos_right: Option<String>,
    pos_bottom: Option<String>,
    width: Option<Numeric>,
    height: Option<Numeric>,
}

impl GridOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pos_left(mut self, pos_left: impl Into<String>) -> Self {
        self.pos_left = Some(pos_left.into());
        self
    }

    #[must_use]
    pub fn pos_top(mut self, pos_top: impl Into<String>) -> Self {
        self.pos_top = Some(pos_top.into());
        self
    }

    #[must_use]
    pub fn pos_right(mut self, pos_right: impl Into<String>) -> Self {
        self.pos_right = Some(pos_right.into());
        self
    }

    #[must_use]
    pub fn pos_bottom(mut self, pos_bottom: impl Into<String>) -> Self {
        self.pos_bottom = Some(pos_bottom.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Numeric>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Numeric>) -> Self {
        self.height = Some(height.into());
        self
    }
}

impl OptionBuilder for GridOpts {
    fn opts(&self) -> Value {
        json!({
            "left": self.pos_left,
            "top": self.pos_top,
            "right": self.pos_right,
            "bottom": self.pos_bottom,
            "width": self.width,
            "height": self.height,
        })
    }
}

/// 3D grid (`grid3D`) with its view control.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid3DOpts {
    width: Numeric,
    height: Numeric,
    depth: Numeric,
    is_rotate: bool,
    rotate_speed: Numeric,
    rotate_sensitivity: Numeric,
}

impl Default for Grid3DOpts {
    fn default() -> Self {
        Self {
            width: Numeric::Int(200),
            height: Numeric::Int(100),
            depth: Numeric::Int(80),
            is_rotate: false,
            rotate_speed: Numeric::Int(10),
            rotate_sensitivity: Numeric::Int(1),
        }
    }
}

impl Grid3DOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Numeric>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Numeric>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn depth(mut self, depth: impl Into<Numeric>) -> Self {
        self.depth = depth.into();
        self
    }

    /// Rotate the scene automatically.
    #[must_use]
    pub const fn rotate(mut self, is_rotate: bool) -> Self {
        self.is_rotate = is_rotate;
        self
    }

    /// Degrees per second.
    #[must_use]
    pub fn rotate_speed(mut self, rotate_speed: impl Into<Numeric>) -> Self {
        self.rotate_speed = rotate_speed.into();
        self
    }

    #[must_use]
    pub fn rotate_sensitivity(mut self, rotate_sensitivity: impl Into<Numeric>) -> Self {
        self.rotate_sensitivity = rotate_sensitivity.into();
        self
    }
}

impl OptionBuilder for Grid3DOpts {
    fn opts(&self) -> Value {
        json!({
            "boxWidth": self.width,
            "boxHeight": self.height,
            "boxDepth": self.depth,
            "viewControl": {
                "autoRotate": self.is_rotate,
                "autoRotateSpeed": self.rotate_speed,
                "rotateSensitivity": self.rotate_sensitivity,
            },
        })
    }
}

/// 3D axis (`xAxis3D` / `yAxis3D` / `zAxis3D`).
#[derive(Debug, Clone, PartialEq)]
pub struct Axis3DOpts {
    data: Option<Vec<Value>>,
    type_: Option<String>,
    name: Option<String>,
    name_size: Numeric,
    name_gap: Numeric,
    min: Option<Value>,
    max: Option<Value>,
    interval: Option<Value>,
    margin: Numeric,
}

impl Default for Axis3DOpts {
    fn default() -> Self {
        Self {
            data: None,
            type_: None,
            name: None,
            name_size: Numeric::Int(16),
            name_gap: Numeric::Int(20),
            min: None,
            max: None,
            interval: None,
            margin: Numeric::Int(8),
        }
    }
}

impl Axis3DOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Category data.
    #[must_use]
    pub fn data<I, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.data = Some(data.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Font size of the axis name (`nameTextStyle.fontSize`).
    #[must_use]
    pub fn name_size(mut self, name_size: impl Into<Numeric>) -> Self {
        self.name_size = name_size.into();
        self
    }

    #[must_use]
    pub fn name_gap(mut self, name_gap: impl Into<Numeric>) -> Self {
        self.name_gap = name_gap.into();
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Label interval (`axisLabel.interval`).
    #[must_use]
    pub fn interval(mut self, interval: impl Into<Value>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Label margin (`axisLabel.margin`).
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Numeric>) -> Self {
        self.margin = margin.into();
        self
    }
}

impl OptionBuilder for Axis3DOpts {
    fn opts(&self) -> Value {
        json!({
            "data": self.data,
            "name": self.name,
            "nameGap": self.name_gap,
            "nameTextStyle": {"fontSize": self.name_size},
            "type": self.type_,
            "min": self.min,
            "max": self.max,
            "axisLabel": {"margin": self.margin, "interval": self.interval},
        })
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;

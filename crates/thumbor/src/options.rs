//! Option types accepted by the image builder.
//!
//! Every enum has a default variant that produces no output in the
//! operation path. `Display` gives the token the server expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Keep the source format.
    #[default]
    None,
    /// WebP output.
    Webp,
    /// JPEG output.
    Jpeg,
    /// PNG output.
    Png,
    /// GIF output.
    Gif,
}

impl ImageFormat {
    /// Token used inside the `format(...)` filter, `None` for the default.
    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Webp => Some("webp"),
            Self::Jpeg => Some("jpeg"),
            Self::Png => Some("png"),
            Self::Gif => Some("gif"),
        }
    }
}

/// Horizontal anchor for cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Center of the image.
    #[default]
    Center,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Vertical anchor for cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Middle of the image.
    #[default]
    Middle,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

/// Border trimming, keyed on the colour of a reference pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrimOption {
    /// No trimming.
    #[default]
    None,
    /// Trim using the top-left pixel colour.
    TopLeft,
    /// Trim using the bottom-right pixel colour.
    BottomRight,
}

impl TrimOption {
    /// Path segment for this option, `None` when trimming is off.
    #[must_use]
    pub fn segment(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::TopLeft => Some("trim"),
            Self::BottomRight => Some("trim:bottom-right"),
        }
    }
}

/// Target container when converting an animated GIF to video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GifVideoOption {
    /// Server default (mp4).
    #[default]
    None,
    /// WebM video.
    Webm,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("none"))
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Middle => "middle",
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

impl fmt::Display for GifVideoOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "",
            Self::Webm => "webm",
        })
    }
}

/// A single filter descriptor, rendered as `name(arg1,arg2,...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    name: String,
    args: Vec<String>,
}

impl Filter {
    /// Create a filter without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Append several arguments in order.
    #[must_use]
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    /// `grayscale()`
    #[must_use]
    pub fn grayscale() -> Self {
        Self::new("grayscale")
    }

    /// `format(...)`
    #[must_use]
    pub fn format(format: ImageFormat) -> Option<Self> {
        format.token().map(|token| Self::new("format").arg(token))
    }

    /// `gifv()` or `gifv(webm)`
    #[must_use]
    pub fn gifv(option: GifVideoOption) -> Self {
        match option {
            GifVideoOption::None => Self::new("gifv"),
            GifVideoOption::Webm => Self::new("gifv").arg(option),
        }
    }

    /// Filter name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filter arguments, in insertion order
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(","))
    }
}

impl From<&str> for Filter {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Filter {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

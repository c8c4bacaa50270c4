//! Fluent builder for a single image URL.

use crate::client::Thumbor;
use crate::error::Result;
use crate::options::{
    Filter, GifVideoOption, HorizontalAlign, ImageFormat, TrimOption, VerticalAlign,
};

/// Accumulates image operations and serializes them into a Thumbor path.
///
/// Segments are emitted in a fixed order so the server derives the same
/// path when it checks the signature:
///
/// ```text
/// meta/trim/[-]Wx[-]H/halign/valign/smart/filters:f1():f2()/source
/// ```
///
/// Any segment left at its default is skipped, so an untouched builder
/// serializes to the bare source URL.
///
/// # Example
///
/// ```
/// use thumbor_url::{HorizontalAlign, ImageFormat, Thumbor, VerticalAlign};
///
/// let thumbor = Thumbor::with_secret_key("http://localhost/", "secret_key")?;
/// let url = thumbor
///     .build_image("http://myUrl/myimage.jpg")
///     .resize(300, 300)
///     .to_url()?;
/// assert_eq!(url, "dDRIn5qUtwPceuMImU2cCkEGRec=/300x300/http://myUrl/myimage.jpg");
///
/// let path = thumbor
///     .build_image("http://myUrl/myimage.jpg")
///     .resize(-300, 200)
///     .align(HorizontalAlign::Left, VerticalAlign::Top)
///     .smart(true)
///     .format(ImageFormat::Webp)
///     .path();
/// assert_eq!(path, "-300x200/left/top/smart/filters:format(webp)/http://myUrl/myimage.jpg");
/// # Ok::<(), thumbor_url::ThumborError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ThumborImage {
    thumbor: Thumbor,
    image_url: String,
    width: u32,
    height: u32,
    flip_horizontal: bool,
    flip_vertical: bool,
    smart: bool,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
    trim: TrimOption,
    format: ImageFormat,
    gifv: Option<GifVideoOption>,
    filters: Vec<Filter>,
    meta_only: bool,
}

impl ThumborImage {
    pub(crate) fn new(thumbor: Thumbor, image_url: String) -> Self {
        Self {
            thumbor,
            image_url,
            width: 0,
            height: 0,
            flip_horizontal: false,
            flip_vertical: false,
            smart: false,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            trim: TrimOption::default(),
            format: ImageFormat::default(),
            gifv: None,
            filters: Vec::new(),
            meta_only: false,
        }
    }

    /// Resize to `width` x `height`.
    ///
    /// `0` keeps the aspect ratio on that axis. A negative width flips the
    /// image horizontally and a negative height flips it vertically; the
    /// flip flags are replaced on every call.
    pub fn resize(mut self, width: i32, height: i32) -> Self {
        self.width = width.unsigned_abs();
        self.height = height.unsigned_abs();
        self.flip_horizontal = width < 0;
        self.flip_vertical = height < 0;
        self
    }

    /// Mirror the image horizontally.
    pub fn flip_horizontal(mut self, flip: bool) -> Self {
        self.flip_horizontal = flip;
        self
    }

    /// Mirror the image vertically.
    pub fn flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    /// Let the server pick the crop using feature detection.
    pub fn smart(mut self, smart: bool) -> Self {
        self.smart = smart;
        self
    }

    /// Anchor point for cropping.
    pub fn align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    /// Trim uniform borders.
    pub fn trim(mut self, trim: TrimOption) -> Self {
        self.trim = trim;
        self
    }

    /// Append a filter. Filters are applied in call order.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Convert the output to `format`. [`ImageFormat::None`] keeps the source format.
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Convert an animated GIF into a video.
    pub fn gifv(mut self, option: GifVideoOption) -> Self {
        self.gifv = Some(option);
        self
    }

    /// Request JSON metadata instead of the image.
    pub fn meta_only(mut self) -> Self {
        self.meta_only = true;
        self
    }

    /// The unsigned operation path, i.e. the message that gets signed.
    #[must_use]
    pub fn path(&self) -> String {
        let mut segments: Vec<String> = Vec::new();

        if self.meta_only {
            segments.push("meta".to_string());
        }

        if let Some(trim) = self.trim.segment() {
            segments.push(trim.to_string());
        }

        if self.has_resize() {
            segments.push(format!(
                "{}{}x{}{}",
                if self.flip_horizontal { "-" } else { "" },
                self.width,
                if self.flip_vertical { "-" } else { "" },
                self.height,
            ));
        }

        if self.horizontal_align != HorizontalAlign::Center {
            segments.push(self.horizontal_align.to_string());
        }

        if self.vertical_align != VerticalAlign::Middle {
            segments.push(self.vertical_align.to_string());
        }

        if self.smart {
            segments.push("smart".to_string());
        }

        let filters: Vec<String> = self
            .filters
            .iter()
            .cloned()
            .chain(Filter::format(self.format))
            .chain(self.gifv.map(Filter::gifv))
            .map(|filter| filter.to_string())
            .collect();

        if !filters.is_empty() {
            segments.push(format!("filters:{}", filters.join(":")));
        }

        segments.push(self.image_url.clone());
        segments.join("/")
    }

    /// Signed URL relative to the server: `{token}/{path}`, or the unsafe
    /// URL when the factory has no key.
    ///
    /// # Errors
    /// Returns [`ThumborError::Signing`](crate::ThumborError::Signing) if the
    /// path cannot be signed.
    pub fn to_url(&self) -> Result<String> {
        self.thumbor.relative_url(&self.path())
    }

    /// Absolute URL including the server base URL.
    ///
    /// The server URL is prepended as-is, so it is expected to end with `/`
    /// (`http://host/thumbor/`, not `http://host/thumbor`). Bare hosts are
    /// normalised to a trailing `/` when the factory is built. In unsafe mode
    /// this is the same string as [`ThumborImage::to_url`].
    ///
    /// # Errors
    /// Returns [`ThumborError::Signing`](crate::ThumborError::Signing) if the
    /// path cannot be signed.
    pub fn to_full_url(&self) -> Result<String> {
        self.thumbor.absolute_url(&self.path())
    }

    fn has_resize(&self) -> bool {
        self.width != 0
            || self.height != 0
            || self.flip_horizontal
            || self.flip_vertical
            || self.smart
    }
}

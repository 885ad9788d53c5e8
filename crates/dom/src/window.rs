//! DOM Window object: viewport dimensions and media queries.

use tracing::debug;

/// Screen orientation as reported by `(orientation: ...)` media queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Browser window object.
#[derive(Clone, Debug)]
pub struct Window {
    /// Inner dimensions.
    pub inner_width: u32,
    pub inner_height: u32,
    /// `document.documentElement.clientWidth`.
    pub document_client_width: u32,
    /// Width taken by a vertical scrollbar, excluded from the client width.
    pub scrollbar_width: u32,
}

impl Window {
    pub fn new() -> Self {
        Self::with_size(1280, 720)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            inner_width: width,
            inner_height: height,
            document_client_width: width,
            scrollbar_width: 0,
        }
    }

    /// Effective viewport width: the larger of the document client width and
    /// the window inner width.
    pub fn viewport_width(&self) -> u32 {
        self.document_client_width.max(self.inner_width)
    }

    /// Resize window.
    pub fn resize_to(&mut self, width: u32, height: u32) {
        debug!(width, height, "window resized");
        self.inner_width = width;
        self.inner_height = height;
        self.document_client_width = width.saturating_sub(self.scrollbar_width);
    }

    pub fn orientation(&self) -> Orientation {
        if self.inner_height >= self.inner_width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Match media query.
    pub fn match_media(&self, query: &str) -> MediaQueryList {
        MediaQueryList {
            media: query.to_string(),
            matches: self.evaluate_media_query(query),
        }
    }

    fn evaluate_media_query(&self, query: &str) -> bool {
        let query = query.trim().trim_start_matches('(').trim_end_matches(')');
        let Some((feature, value)) = query.split_once(':') else {
            return false;
        };
        let value = value.trim();

        match feature.trim() {
            "orientation" => match value {
                "portrait" => self.orientation() == Orientation::Portrait,
                "landscape" => self.orientation() == Orientation::Landscape,
                _ => false,
            },
            "min-width" => parse_px(value).map_or(false, |w| self.viewport_width() as f32 >= w),
            "max-width" => parse_px(value).map_or(false, |w| self.viewport_width() as f32 <= w),
            _ => false,
        }
    }
}

fn parse_px(value: &str) -> Option<f32> {
    value.strip_suffix("px")?.trim().parse().ok()
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

/// Media query list.
#[derive(Clone, Debug)]
pub struct MediaQueryList {
    pub media: String,
    pub matches: bool,
}

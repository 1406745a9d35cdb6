// Designer-page project gallery: thumbnails tint a shared preview panel.

pub const PREVIEW_COLORS: [&str; 5] = ["#7a00db", "#00a86b", "#ff6b35", "#0066cc", "#ffc107"];
pub const HOVER_OPACITY: f64 = 0.7;

/// Style to apply to the preview panel. `color` is `None` when there is no
/// color to show (no active thumbnail, or an index without a mapping).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewStyle {
    pub color: Option<&'static str>,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    active: Option<usize>,
}

impl GalleryState {
    pub fn new(active: Option<usize>) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn click(&mut self, index: usize) -> PreviewStyle {
        self.active = Some(index);
        PreviewStyle {
            color: PREVIEW_COLORS.get(index).copied(),
            opacity: 1.0,
        }
    }

    /// Hovering the active thumbnail changes nothing.
    pub fn enter(&self, index: usize) -> Option<PreviewStyle> {
        (self.active != Some(index)).then(|| PreviewStyle {
            color: PREVIEW_COLORS.get(index).copied(),
            opacity: HOVER_OPACITY,
        })
    }

    pub fn leave(&self, index: usize) -> Option<PreviewStyle> {
        (self.active != Some(index)).then(|| PreviewStyle {
            color: self.active.and_then(|i| PREVIEW_COLORS.get(i).copied()),
            opacity: 1.0,
        })
    }
}

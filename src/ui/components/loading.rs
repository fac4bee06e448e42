//! Animated loading indicator

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::theme::{ClassList, ExtendedSize, LoadingColor, Theme};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
}

impl LoadingVariant {
    fn class_name(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Dots => "dots",
            Self::Pulse => "pulse",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Loading {
    pub variant: LoadingVariant,
    pub size: ExtendedSize,
    pub color: LoadingColor,
    pub text: Option<String>,
    /// Clear the whole area and center the indicator over it
    pub overlay: bool,
    pub class_name: String,
    tick: usize,
}

impl Loading {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: LoadingVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ExtendedSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn color(mut self, color: LoadingColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("loading")
            .modifier(self.variant.class_name())
            .modifier(self.size.class_name())
            .modifier(self.color.class_name())
            .modifier_if(self.overlay, "overlay")
            .extra(&self.class_name)
    }

    /// Current animation frame, widened for the larger sizes
    pub fn frame(&self, theme: &Theme) -> String {
        let loading = theme.icons.icons().loading;
        let frames = match self.variant {
            LoadingVariant::Spinner => loading.spinner,
            LoadingVariant::Dots => loading.dots,
            LoadingVariant::Pulse => loading.pulse,
        };
        let frame = IconService::frame(frames, self.tick);
        match self.size {
            ExtendedSize::Lg | ExtendedSize::Xl => format!("{frame} {frame}"),
            _ => frame.to_string(),
        }
    }

    pub fn line(&self, theme: &Theme) -> Line<'static> {
        let styles = theme.styles();
        let mut spans = vec![Span::styled(self.frame(theme), styles.loading(self.color))];
        if let Some(text) = &self.text {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(text.clone(), styles.muted()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let line = self.line(theme);
        if self.overlay {
            f.render_widget(Clear, rect);
            let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
            let area = LayoutManager::centered_fixed(width, 1, rect);
            f.render_widget(Paragraph::new(line), area);
        } else {
            f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
        }
    }
}

//! User avatar with an initials fallback

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use super::common::{is_activation, left_click};
use crate::theme::{ClassList, ExtendedSize, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::text::get_initials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

impl AvatarShape {
    fn class_name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rounded => "rounded",
        }
    }

    fn caps(self) -> (&'static str, &'static str) {
        match self {
            Self::Circle => ("(", ")"),
            Self::Square => ("[", "]"),
            Self::Rounded => ("{", "}"),
        }
    }
}

/// Load state of the avatar image, reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Avatar {
    pub src: Option<String>,
    pub alt: String,
    pub size: ExtendedSize,
    pub shape: AvatarShape,
    /// Name the initials are taken from
    pub fallback: Option<String>,
    pub class_name: String,
    status: ImageStatus,
    on_click: Option<Action>,
    focused: bool,
    area: Rect,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            src: None,
            alt: "Avatar".to_string(),
            size: ExtendedSize::default(),
            shape: AvatarShape::default(),
            fallback: None,
            class_name: String::new(),
            status: ImageStatus::default(),
            on_click: None,
            focused: false,
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn src(mut self, src: Option<String>) -> Self {
        self.src = src;
        self.status = ImageStatus::Loading;
        self
    }

    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    #[must_use]
    pub fn size(mut self, size: ExtendedSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    /// Make the avatar pressable
    #[must_use]
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }

    pub fn image_loaded(&mut self) {
        self.status = ImageStatus::Loaded;
    }

    pub fn image_failed(&mut self) {
        self.status = ImageStatus::Failed;
    }

    /// Whether the image glyph is drawn instead of initials
    pub fn shows_image(&self) -> bool {
        self.src.is_some() && self.status != ImageStatus::Failed
    }

    pub fn initials(&self) -> String {
        get_initials(self.fallback.as_deref().unwrap_or_default())
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("avatar")
            .modifier(self.size.class_name())
            .modifier(self.shape.class_name())
            .modifier_if(self.is_clickable(), "clickable")
            .modifier_if(!self.shows_image(), "fallback")
            .extra(&self.class_name)
    }

    pub fn label(&self, theme: &Theme) -> String {
        let (open, close) = self.shape.caps();
        let pad = match self.size {
            ExtendedSize::Xs | ExtendedSize::Sm => "",
            ExtendedSize::Md => " ",
            ExtendedSize::Lg => "  ",
            ExtendedSize::Xl => "   ",
        };
        let content = if self.shows_image() {
            theme.icons.icons().ui.image.to_string()
        } else {
            self.initials()
        };
        format!("{open}{pad}{content}{pad}{close}")
    }

    pub fn span(&self, theme: &Theme) -> Span<'static> {
        let styles = theme.styles();
        let style = match self.status {
            _ if self.focused => styles.selection(),
            ImageStatus::Loading if self.src.is_some() => styles.muted(),
            _ => styles.accent(),
        };
        Span::styled(self.label(theme), style)
    }

    pub fn width(&self, theme: &Theme) -> u16 {
        u16::try_from(Span::raw(self.label(theme)).width()).unwrap_or(u16::MAX)
    }

    fn click(&self) -> Action {
        self.on_click.clone().unwrap_or(Action::None)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Avatar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if is_activation(&key) {
            self.click()
        } else {
            Action::None
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match left_click(&mouse) {
            Some((column, row)) if LayoutManager::hit(self.area, column, row) => self.click(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        self.area = Rect::new(rect.x, rect.y, self.width(theme).min(rect.width), rect.height.min(1));
        f.render_widget(Paragraph::new(self.span(theme)), self.area);
    }

    fn on_focus(&mut self) -> Action {
        self.focused = self.is_clickable();
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_image_falls_back_to_initials() {
        let theme = Theme::default();
        let mut avatar = Avatar::new()
            .src(Some("https://example.com/a.png".to_string()))
            .fallback("John Doe")
            .size(ExtendedSize::Sm);
        assert_eq!(avatar.label(&theme), "([img])");
        avatar.image_failed();
        assert_eq!(avatar.label(&theme), "(JD)");
    }

    #[test]
    fn missing_name_shows_placeholder() {
        let avatar = Avatar::new().size(ExtendedSize::Xs).shape(AvatarShape::Square);
        assert_eq!(avatar.label(&Theme::default()), "[?]");
    }
}

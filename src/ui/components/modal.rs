//! Centered dialog over a backdrop

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{create_block, left_click};
use crate::constants::{MODAL_WIDTH_LG, MODAL_WIDTH_MD, MODAL_WIDTH_SM, MODAL_WIDTH_XL};
use crate::theme::{ClassList, Theme};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Width as a percentage of the screen
    pub fn percent(self) -> u16 {
        match self {
            Self::Sm => MODAL_WIDTH_SM,
            Self::Md => MODAL_WIDTH_MD,
            Self::Lg => MODAL_WIDTH_LG,
            Self::Xl => MODAL_WIDTH_XL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub open: bool,
    pub title: Option<String>,
    pub size: ModalSize,
    pub show_close_button: bool,
    pub close_on_backdrop_click: bool,
    pub class_name: String,
    on_close: Action,
    area: Rect,
    close_area: Rect,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            open: false,
            title: None,
            size: ModalSize::default(),
            show_close_button: true,
            close_on_backdrop_click: true,
            class_name: String::new(),
            on_close: Action::ModalClosed,
            area: Rect::default(),
            close_area: Rect::default(),
        }
    }
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    #[must_use]
    pub fn close_on_backdrop_click(mut self, close: bool) -> Self {
        self.close_on_backdrop_click = close;
        self
    }

    /// Action emitted when the dialog asks to close
    #[must_use]
    pub fn on_close(mut self, action: Action) -> Self {
        self.on_close = action;
        self
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("modal")
            .modifier(self.size.class_name())
            .modifier_if(self.open, "open")
            .extra(&self.class_name)
    }

    /// Dialog rect for a body of `body_height` rows inside `screen`
    pub fn dialog_area(&self, screen: Rect, body_height: u16) -> Rect {
        let width = (u32::from(screen.width) * u32::from(self.size.percent()) / 100) as u16;
        LayoutManager::centered_fixed(width.max(20), body_height.saturating_add(2), screen)
    }

    /// The host owns `open`; closing only reports the request
    fn request_close(&self) -> Action {
        if self.open {
            self.on_close.clone()
        } else {
            Action::None
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => self.request_close(),
            _ => Action::None,
        }
    }

    pub fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if self.show_close_button && LayoutManager::hit(self.close_area, column, row) {
            self.request_close()
        } else if !LayoutManager::hit(self.area, column, row) && self.close_on_backdrop_click {
            self.request_close()
        } else {
            Action::None
        }
    }

    /// Draw the dialog frame; returns the body area, or `None` while closed
    pub fn render_frame(&mut self, f: &mut Frame, screen: Rect, body_height: u16, theme: &Theme) -> Option<Rect> {
        if !self.open {
            self.area = Rect::default();
            self.close_area = Rect::default();
            return None;
        }
        let area = self.dialog_area(screen, body_height);
        self.area = area;
        let block = create_block(self.title.as_deref(), theme, true);
        let body = LayoutManager::pad(block.inner(area), 1, 0);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        self.close_area = if self.show_close_button && area.width > 4 {
            let glyph = Rect::new(area.x + area.width - 3, area.y, 1, 1);
            let close = Span::styled(theme.icons.close(), theme.styles().accent());
            f.render_widget(Paragraph::new(close), glyph);
            glyph
        } else {
            Rect::default()
        };
        Some(body)
    }
}

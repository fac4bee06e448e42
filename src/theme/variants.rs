//! Semantic classifications shared by components and stylesheets

use serde::{Deserialize, Serialize};

/// Visual emphasis of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl BadgeVariant {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertVariant {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Three step size scale used by buttons, fields, badges and alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Horizontal padding in columns on each side of a label
    #[must_use]
    pub fn padding(self) -> u16 {
        match self {
            Self::Sm => 0,
            Self::Md => 1,
            Self::Lg => 2,
        }
    }
}

/// Five step scale for avatars and loading indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendedSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ExtendedSize {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Width in columns of a boxed element at this size
    #[must_use]
    pub fn columns(self) -> u16 {
        match self {
            Self::Xs => 3,
            Self::Sm => 4,
            Self::Md => 6,
            Self::Lg => 8,
            Self::Xl => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingColor {
    #[default]
    Primary,
    Secondary,
    White,
}

impl LoadingColor {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::White => "white",
        }
    }
}

/// Interaction state of a focusable control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub focused: bool,
    pub disabled: bool,
    pub error: bool,
}

impl ControlState {
    #[must_use]
    pub fn new(focused: bool, disabled: bool, error: bool) -> Self {
        Self {
            focused,
            disabled,
            error,
        }
    }
}

//! BEM-style class lists
//!
//! Components describe themselves as `block block--modifier` lists. The
//! stylesheets never read these strings, but hosts and tests use them to assert
//! which classification a component resolved to.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    block: String,
    classes: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new(block: &str) -> Self {
        let mut list = Self {
            block: block.to_string(),
            classes: Vec::new(),
        };
        list.push(block);
        list
    }

    fn push(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Append a `block--modifier` class
    #[must_use]
    pub fn modifier(mut self, modifier: &str) -> Self {
        if !modifier.is_empty() {
            let class = format!("{}--{modifier}", self.block);
            self.push(&class);
        }
        self
    }

    #[must_use]
    pub fn modifier_if(self, condition: bool, modifier: &str) -> Self {
        if condition {
            self.modifier(modifier)
        } else {
            self
        }
    }

    /// Append caller supplied classes verbatim, ignoring blanks
    #[must_use]
    pub fn extra(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.push(class);
        }
        self
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Semantic description of a carousel part, for screen-reader bridges and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibleNode {
    pub role: &'static str,
    pub role_description: Option<&'static str>,
    /// Text announced instead of (or in addition to) what is drawn.
    pub label: Option<String>,
    pub disabled: bool,
}

impl AccessibleNode {
    pub fn new(role: &'static str) -> Self {
        Self {
            role,
            role_description: None,
            label: None,
            disabled: false,
        }
    }

    pub fn with_role_description(mut self, description: &'static str) -> Self {
        self.role_description = Some(description);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

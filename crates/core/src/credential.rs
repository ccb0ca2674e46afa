const MASK_CHAR: char = '•';

/// API key entered by the user, plus whether it is shown in clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credential {
    key: String,
    visible: bool,
}

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            visible: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// An empty key counts as absent.
    pub fn is_present(&self) -> bool {
        !self.key.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// The key as it should be displayed: in clear, or masked one glyph per char.
    pub fn display(&self) -> String {
        if self.visible {
            self.key.clone()
        } else {
            self.key.chars().map(|_| MASK_CHAR).collect()
        }
    }
}

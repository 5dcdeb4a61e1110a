use serde::{Deserialize, Serialize};

/// Settings every header cell starts from before node data is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSettings {
    pub label: &'static str,
    pub colspan: u32,
    pub hidden: bool,
}

/// Template used for the placeholder cells trailing a spanning header.
pub const HEADER_DEFAULT_SETTINGS: HeaderSettings = HeaderSettings {
    label: "",
    colspan: 1,
    hidden: false,
};

impl Default for HeaderSettings {
    fn default() -> Self {
        HEADER_DEFAULT_SETTINGS
    }
}

/// Payload carried by each node of a header tree.
///
/// The colspan and label are computed upstream; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderNodeData {
    /// Display text (may be empty)
    #[serde(default)]
    pub label: String,
    /// Number of flattened columns the visible cell occupies. Must be at least 1.
    #[serde(default = "default_colspan")]
    pub colspan: u32,
    /// The node itself is a collapsed/suppressed cell
    #[serde(default)]
    pub hidden: bool,
    /// Depth of the node, used verbatim as the matrix row index
    pub header_level: usize,
}

fn default_colspan() -> u32 {
    HEADER_DEFAULT_SETTINGS.colspan
}

impl HeaderNodeData {
    /// Visible header spanning `colspan` columns at `header_level`.
    pub fn new(label: impl Into<String>, colspan: u32, header_level: usize) -> Self {
        Self {
            label: label.into(),
            colspan,
            hidden: false,
            header_level,
        }
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

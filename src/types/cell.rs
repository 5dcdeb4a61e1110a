use serde::{Deserialize, Serialize};

use super::{HeaderNodeData, HEADER_DEFAULT_SETTINGS};

/// Render settings for one header cell of the flattened matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDescriptor {
    /// Display text; empty for placeholders
    pub label: String,
    /// Columns this cell covers; always 1 for placeholders
    pub colspan: u32,
    /// Colspan of the header node that produced this cell
    pub orig_colspan: u32,
    /// Cell is not drawn (collapsed header or covered by a spanning cell)
    pub hidden: bool,
}

impl CellDescriptor {
    /// The visible cell a header node contributes at its own column.
    pub fn primary(data: &HeaderNodeData) -> Self {
        Self {
            label: data.label.clone(),
            colspan: data.colspan,
            orig_colspan: data.colspan,
            hidden: data.hidden,
        }
    }

    /// A ghost cell covered by a header spanning `orig_colspan` columns.
    pub fn placeholder(orig_colspan: u32) -> Self {
        Self {
            label: HEADER_DEFAULT_SETTINGS.label.to_owned(),
            colspan: HEADER_DEFAULT_SETTINGS.colspan,
            orig_colspan,
            hidden: true,
        }
    }

    /// Whether this cell was generated to fill a spanning header's columns.
    pub fn is_placeholder(&self) -> bool {
        self.hidden && self.colspan == HEADER_DEFAULT_SETTINGS.colspan && self.orig_colspan > 1
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_copies_node_data() {
        let data = HeaderNodeData::new("Sales", 4, 1).hidden(true);
        let cell = CellDescriptor::primary(&data);

        assert_eq!(cell.label, "Sales");
        assert_eq!(cell.colspan, 4);
        assert_eq!(cell.orig_colspan, 4);
        assert!(cell.hidden);
        assert!(!cell.is_placeholder());
    }

    #[test]
    fn test_placeholder_uses_template_but_keeps_orig_colspan() {
        let cell = CellDescriptor::placeholder(3);

        assert_eq!(cell.label, "");
        assert_eq!(cell.colspan, 1);
        assert_eq!(cell.orig_colspan, 3);
        assert!(cell.hidden);
        assert!(cell.is_placeholder());
    }

    #[test]
    fn test_serializes_orig_colspan_in_camel_case() {
        let json = serde_json::to_value(CellDescriptor::placeholder(2)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"label": "", "colspan": 1, "origColspan": 2, "hidden": true})
        );
    }
}

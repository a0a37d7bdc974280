//! Export payload formatting

use crate::domain::error::ExportError;

use super::item::ExportedItem;

/// Serialize captured items as a pretty JSON array of `{title, mp4}` records.
pub fn render_export(items: &[ExportedItem]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(items).map_err(|e| ExportError::SerializeError(e.to_string()))
}

/// Parse a previously rendered export
pub fn parse_export(payload: &str) -> Result<Vec<ExportedItem>, ExportError> {
    serde_json::from_str(payload).map_err(|e| ExportError::SerializeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_export_is_empty_array() {
        assert_eq!(render_export(&[]).unwrap(), "[]");
    }

    #[test]
    fn export_keeps_order_and_field_names() {
        let items = vec![
            ExportedItem::new("A", "https://bluetiger.cdn/a.mp4"),
            ExportedItem::new("박형준 3-2", "https://bluetiger.cdn/b.mp4"),
        ];
        let payload = render_export(&items).unwrap();

        assert!(payload.contains(r#""title": "A""#));
        assert!(payload.contains(r#""mp4": "https://bluetiger.cdn/a.mp4""#));
        assert!(payload.find("a.mp4").unwrap() < payload.find("b.mp4").unwrap());
        assert_eq!(parse_export(&payload).unwrap(), items);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_export("not json").is_err());
    }
}

use crate::error::{ParseError, ParseErrorKind};
use crate::types::Catalog;

/// Parse a YAML (or JSON) catalog snapshot into an unvalidated [`Catalog`].
///
/// Performs deserialization and type mapping only.
/// Does NOT validate catalog consistency or apply normalization.
pub fn parse(input: &str) -> Result<Catalog, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Syntax, "empty input"));
    }

    check_multi_document(input)?;

    // YAML → serde_json::Value → Catalog, so unknown root keys can be
    // rejected before typed deserialization.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_saphyr_error(&msg), msg)
    })?;

    let Some(obj) = value.as_object() else {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "catalog root must be a mapping",
        ));
    };

    for key in obj.keys() {
        if key != "product" {
            return Err(ParseError {
                path: Some(key.clone()),
                ..ParseError::new(
                    ParseErrorKind::TypeMismatch,
                    format!("unknown top-level field: {}", key),
                )
            });
        }
    }

    let catalog: Catalog = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_json_error(&msg), msg)
    })?;

    Ok(catalog)
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for (line_num, line) in input.lines().enumerate() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    line: Some(line_num + 1),
                    column: Some(1),
                    ..ParseError::new(
                        ParseErrorKind::Syntax,
                        "multi-document YAML is not supported",
                    )
                });
            }
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

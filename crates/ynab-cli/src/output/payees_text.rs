use std::io;

use serde_json::Value;

use super::format::{Column, render_table_or_blocks, terminal_width, text};

pub fn render_payees(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("payees output requires rows"))?;
    let query = text(data, "query");

    if rows.is_empty() {
        return Ok(if query.is_empty() {
            "No payees.".to_string()
        } else {
            format!("No payees match \"{query}\".")
        });
    }

    let columns = [Column::left("Payee"), Column::left("Id")];
    let table_rows = rows
        .iter()
        .map(|row| vec![text(row, "name"), text(row, "id")])
        .collect::<Vec<_>>();
    let mut lines = vec![format!("Payees ({}):", rows.len())];
    lines.extend(render_table_or_blocks(
        &columns,
        &table_rows,
        terminal_width(),
        "Payee",
    ));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_payees;

    #[test]
    fn lists_matches() {
        let rendered = render_payees(&json!({
            "query": "food",
            "rows": [{"id": "p1", "name": "Whole Foods", "transfer_account_id": null}]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Payees (1):"));
            assert!(text.contains("Whole Foods"));
        }
    }

    #[test]
    fn no_match_echoes_query() {
        let rendered = render_payees(&json!({"query": "zzz", "rows": []}));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert_eq!(text, "No payees match \"zzz\".");
        }
    }
}

use std::io;

use serde_json::Value;

use super::format::{Column, money, render_table_or_blocks, terminal_width, text, yes_no};

pub fn render_accounts(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("accounts output requires rows"))?;

    let mut lines = vec![format!(
        "On-budget balance: {}",
        money(data, "on_budget_balance")
    )];

    if rows.is_empty() {
        lines.push(String::new());
        lines.push("No open accounts.".to_string());
        return Ok(lines.join("\n"));
    }

    let include_closed = data
        .get("include_closed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let mut columns = vec![
        Column::left("Name"),
        Column::left("Type"),
        Column::left("On budget"),
        Column::right("Balance"),
    ];
    if include_closed {
        columns.push(Column::left("Closed"));
    }
    let table_rows = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                text(row, "name"),
                text(row, "account_type"),
                yes_no(row, "on_budget"),
                money(row, "balance"),
            ];
            if include_closed {
                cells.push(yes_no(row, "closed"));
            }
            cells
        })
        .collect::<Vec<_>>();

    lines.push(String::new());
    lines.push(format!("Accounts ({}):", rows.len()));
    lines.extend(render_table_or_blocks(
        &columns,
        &table_rows,
        terminal_width(),
        "Account",
    ));
    Ok(lines.join("\n"))
}

use std::io;

use serde_json::Value;

use super::format::{
    Column, key_value_rows, money, render_table_or_blocks, terminal_width, text, yes_no,
};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;
    let include_unapproved = data
        .get("include_unapproved")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if rows.is_empty() {
        let mut message = "No matching transactions.".to_string();
        if !include_unapproved {
            message.push_str(" Pass --all to include unapproved ones.");
        }
        return Ok(message);
    }

    let mut columns = vec![
        Column::left("Date"),
        Column::left("Payee"),
        Column::left("Category"),
        Column::left("Account"),
        Column::right("Amount"),
    ];
    if include_unapproved {
        columns.push(Column::left("Approved"));
    }
    let table_rows = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                text(row, "date"),
                text(row, "payee"),
                text(row, "category"),
                text(row, "account"),
                money(row, "amount"),
            ];
            if include_unapproved {
                cells.push(yes_no(row, "approved"));
            }
            cells
        })
        .collect::<Vec<_>>();

    let mut lines = vec![format!("{} (newest first):", scope_title(data))];
    lines.extend(render_table_or_blocks(
        &columns,
        &table_rows,
        terminal_width(),
        "Transaction",
    ));
    Ok(lines.join("\n"))
}

pub fn render_created_transaction(data: &Value) -> io::Result<String> {
    let transaction = data
        .get("transaction")
        .ok_or_else(|| io::Error::other("transaction create output requires transaction"))?;

    let mut lines = vec!["Transaction created.".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Id:", text(transaction, "id")),
            ("Date:", text(transaction, "date")),
            ("Amount:", money(transaction, "amount")),
            ("Payee:", text(transaction, "payee")),
            ("Account:", text(transaction, "account")),
            ("Approved:", yes_no(transaction, "approved")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

fn scope_title(data: &Value) -> String {
    let scope = data.get("scope").cloned().unwrap_or(Value::Null);
    match (text(&scope, "kind").as_str(), text(&scope, "id")) {
        ("account", id) => format!("Transactions in account {id}"),
        ("category", id) => format!("Transactions in category {id}"),
        _ => "Transactions".to_string(),
    }
}

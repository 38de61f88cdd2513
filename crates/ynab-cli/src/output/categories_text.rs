use std::io;

use serde_json::Value;

use super::format::{Column, money, render_table_or_blocks, rows_of, terminal_width, text};

pub fn render_categories(data: &Value) -> io::Result<String> {
    let groups = data
        .get("groups")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("categories output requires groups"))?;
    if groups.is_empty() {
        return Ok("No visible categories.".to_string());
    }

    let mut lines = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}:", text(group, "name")));
        let categories = rows_of(group, "categories");
        if categories.is_empty() {
            lines.push("  (no visible categories)".to_string());
        } else {
            lines.extend(category_table(categories));
        }
    }
    Ok(lines.join("\n"))
}

pub(super) fn category_table(categories: &[Value]) -> Vec<String> {
    let columns = [
        Column::left("Category"),
        Column::right("Budgeted"),
        Column::right("Activity"),
        Column::right("Available"),
    ];
    let rows = categories
        .iter()
        .map(|category| {
            vec![
                text(category, "name"),
                money(category, "budgeted"),
                money(category, "activity"),
                money(category, "available"),
            ]
        })
        .collect::<Vec<_>>();
    render_table_or_blocks(&columns, &rows, terminal_width(), "Category")
}

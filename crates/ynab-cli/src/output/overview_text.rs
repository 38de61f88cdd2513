use std::io;

use serde_json::Value;

use super::format::{
    Column, key_value_rows, money, render_table_or_blocks, rows_of, terminal_width, text,
};

pub fn render_user(data: &Value) -> io::Result<String> {
    let id = data
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("user output requires id"))?;
    Ok(format!("Authenticated as user {id}."))
}

pub fn render_budgets(data: &Value) -> io::Result<String> {
    let rows = rows_of(data, "rows");
    if rows.is_empty() {
        return Ok("No budgets found for this token.".to_string());
    }

    let columns = [
        Column::left("Name"),
        Column::left("Id"),
        Column::left("Currency"),
        Column::left("Last month"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "name"),
                text(row, "id"),
                text(row, "currency"),
                text(row, "last_month"),
            ]
        })
        .collect::<Vec<_>>();

    let mut lines = vec![format!("Budgets ({}):", rows.len())];
    lines.extend(render_table_or_blocks(
        &columns,
        &table_rows,
        terminal_width(),
        "Budget",
    ));
    lines.push(String::new());
    lines.push("Pass `--budget <ID>` to any command to pick one.".to_string());
    Ok(lines.join("\n"))
}

pub fn render_summary(data: &Value) -> io::Result<String> {
    let budget = data
        .get("budget")
        .ok_or_else(|| io::Error::other("summary output requires budget"))?;

    let mut lines = vec![
        format!("{} ({})", text(budget, "name"), text(data, "currency")),
        String::new(),
    ];
    let account_count = data
        .get("on_budget_account_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    lines.extend(key_value_rows(
        &[
            ("Month:", text(data, "month")),
            ("On-budget balance:", money(data, "on_budget_balance")),
            ("On-budget accounts:", account_count.to_string()),
            ("Income:", money(data, "income")),
            ("Budgeted:", money(data, "budgeted")),
            ("Activity:", money(data, "activity")),
            ("To be budgeted:", money(data, "to_be_budgeted")),
            ("Age of money:", age_of_money(data)),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_month(data: &Value) -> io::Result<String> {
    let month = data
        .get("month")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("month output requires month"))?;

    let mut lines = vec![format!("Budget month {month}:"), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Income:", money(data, "income")),
            ("Budgeted:", money(data, "budgeted")),
            ("Activity:", money(data, "activity")),
            ("To be budgeted:", money(data, "to_be_budgeted")),
            ("Age of money:", age_of_money(data)),
        ],
        2,
    ));
    if let Some(note) = data.get("note").and_then(Value::as_str) {
        lines.push(format!("  Note:  {note}"));
    }

    let categories = rows_of(data, "categories");
    if !categories.is_empty() {
        lines.push(String::new());
        lines.push("Categories:".to_string());
        lines.extend(super::categories_text::category_table(categories));
    }
    Ok(lines.join("\n"))
}

fn age_of_money(data: &Value) -> String {
    match data.get("age_of_money").and_then(Value::as_i64) {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_budgets, render_month, render_summary, render_user};

    fn money(milliunits: i64, formatted: &str) -> serde_json::Value {
        json!({"milliunits": milliunits, "formatted": formatted})
    }

    #[test]
    fn user_requires_an_id() {
        assert!(render_user(&json!({})).is_err());
        let rendered = render_user(&json!({"id": "u-1"}));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert_eq!(text, "Authenticated as user u-1.");
        }
    }

    #[test]
    fn budgets_list_names_and_ids() {
        let rendered = render_budgets(&json!({
            "total": 1,
            "rows": [{"id": "b-1", "name": "Household", "currency": "USD", "last_month": "2024-01-01"}]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Budgets (1):"));
            assert!(text.contains("Household"));
            assert!(text.contains("b-1"));
        }

        let empty = render_budgets(&json!({"total": 0, "rows": []}));
        assert!(empty.is_ok());
        if let Ok(text) = empty {
            assert_eq!(text, "No budgets found for this token.");
        }
    }

    #[test]
    fn summary_lists_formatted_money() {
        let rendered = render_summary(&json!({
            "budget": {"id": "b-1", "name": "Household"},
            "currency": "USD",
            "month": "2024-01-01",
            "on_budget_balance": money(1_750_000, "$1,750.00"),
            "on_budget_account_count": 2,
            "income": money(3_000_000, "$3,000.00"),
            "budgeted": money(2_500_000, "$2,500.00"),
            "activity": money(-1_200_500, "-$1,200.50"),
            "to_be_budgeted": money(500_000, "$500.00"),
            "age_of_money": null
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Household (USD)"));
            assert!(text.contains("On-budget balance:   $1,750.00"));
            assert!(text.contains("-$1,200.50"));
            assert!(text.contains("Age of money:        n/a"));
        }
    }

    #[test]
    fn month_includes_categories() {
        let rendered = render_month(&json!({
            "budget_id": "b-1",
            "month": "2024-02-01",
            "note": null,
            "income": money(0, "$0.00"),
            "budgeted": money(0, "$0.00"),
            "activity": money(0, "$0.00"),
            "to_be_budgeted": money(0, "$0.00"),
            "age_of_money": 1,
            "categories": [{
                "id": "c1",
                "name": "Rent",
                "budgeted": money(900_000, "$900.00"),
                "activity": money(0, "$0.00"),
                "available": money(900_000, "$900.00")
            }]
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Budget month 2024-02-01:"));
            assert!(text.contains("1 day"));
            assert!(text.contains("Categories:"));
            assert!(text.contains("Rent"));
        }
    }
}

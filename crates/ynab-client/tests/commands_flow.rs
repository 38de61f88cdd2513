mod support;

use serde_json::{Value, json};
use support::{FakeBudgetApi, date, euro};
use ynab_client::commands::transactions;
use ynab_client::commands::{AccountsParams, PayeesParams, TransactionsParams};
use ynab_client::normalize::TransactionDraft;
use ynab_client::{BudgetCommand, Session, execute};

fn session() -> Session {
    Session::new("budget-1")
}

fn row_ids(data: &Value) -> Vec<String> {
    data["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn accounts_hide_closed_and_total_open_on_budget_balances() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::GetAccounts(AccountsParams::default()),
    )
    .await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "accounts");
        assert_eq!(row_ids(&envelope.data), vec!["checking", "savings", "mortgage"]);
        assert_eq!(envelope.data["on_budget_balance"]["milliunits"], json!(1_750_000));
        assert_eq!(envelope.data["on_budget_balance"]["formatted"], json!("$1,750.00"));
    }
    assert_eq!(api.calls(), vec!["accounts:budget-1"]);
}

#[tokio::test]
async fn accounts_can_include_closed_without_changing_the_total() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::GetAccounts(AccountsParams {
            include_closed: true,
        }),
    )
    .await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(row_ids(&envelope.data).len(), 4);
        assert_eq!(envelope.data["on_budget_balance"]["milliunits"], json!(1_750_000));
    }
}

#[tokio::test]
async fn transactions_are_approved_and_newest_first() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::GetTransactions(TransactionsParams {
            limit: Some(2),
            ..TransactionsParams::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "transactions");
        assert_eq!(row_ids(&envelope.data), vec!["t3", "t2"]);
        assert_eq!(envelope.data["limit"], json!(2));
        assert_eq!(envelope.data["scope"]["kind"], json!("budget"));
        assert_eq!(envelope.data["rows"][0]["amount"]["formatted"], json!("-$4.50"));
    }
}

#[tokio::test]
async fn transactions_can_include_unapproved_and_scope_by_account() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::GetTransactions(TransactionsParams {
            account_id: Some("acct-1".to_string()),
            include_unapproved: true,
            ..TransactionsParams::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(row_ids(&envelope.data), vec!["pending", "t3", "t2", "t1"]);
        assert_eq!(envelope.data["scope"]["id"], json!("acct-1"));
        assert_eq!(envelope.data["limit"], json!(20));
    }
    assert_eq!(
        api.calls(),
        vec!["transactions:budget-1:Account(\"acct-1\")"]
    );
}

#[tokio::test]
async fn transactions_reject_account_and_category_together_before_fetching() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::GetTransactions(TransactionsParams {
            account_id: Some("a".to_string()),
            category_id: Some("c".to_string()),
            ..TransactionsParams::default()
        }),
    )
    .await;

    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "invalid_argument");
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn categories_drop_hidden_groups_and_categories() {
    let api = FakeBudgetApi::default();
    let result = execute(&api, &session(), BudgetCommand::GetCategories).await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        let groups = envelope.data["groups"].as_array().cloned().unwrap_or_default();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["name"], json!("Bills"));
        assert_eq!(groups[0]["categories"][0]["name"], json!("Rent"));
        assert_eq!(groups[0]["categories"].as_array().map(Vec::len), Some(1));
    }
}

#[tokio::test]
async fn month_lists_visible_categories_only() {
    let api = FakeBudgetApi::default();
    let command = BudgetCommand::from_named("get_month", Some(json!({"month": "2024-01"})));
    assert!(command.is_ok());
    let Ok(command) = command else { return };

    let result = execute(&api, &session(), command).await;
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "month");
        assert_eq!(envelope.data["month"], json!("2024-01-01"));
        assert_eq!(envelope.data["to_be_budgeted"]["formatted"], json!("$500.00"));
        assert_eq!(envelope.data["categories"].as_array().map(Vec::len), Some(1));
    }
    assert_eq!(api.calls(), vec!["month:budget-1:Month(2024-01-01)"]);
}

#[tokio::test]
async fn summary_combines_budget_accounts_and_current_month() {
    let mut api = FakeBudgetApi::default();
    api.budget.currency_format = Some(euro());
    let result = execute(&api, &session(), BudgetCommand::GetSummary).await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "summary");
        assert_eq!(envelope.data["budget"]["name"], json!("Household"));
        assert_eq!(envelope.data["currency"], json!("EUR"));
        assert_eq!(envelope.data["on_budget_account_count"], json!(2));
        assert_eq!(envelope.data["on_budget_balance"]["formatted"], json!("1.750,00€"));
        assert_eq!(envelope.data["age_of_money"], json!(42));
    }
    let mut calls = api.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec!["accounts:budget-1", "budget:budget-1", "month:budget-1:Current"]
    );
}

#[tokio::test]
async fn summary_fails_when_any_part_fails() {
    let api = FakeBudgetApi::failing_on("accounts");
    let result = execute(&api, &session(), BudgetCommand::GetSummary).await;

    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "remote_error");
        assert_eq!(error.message, "internal_server_error: stub failure");
    }
}

#[tokio::test]
async fn payees_match_case_insensitively_and_skip_deleted() {
    let api = FakeBudgetApi::default();
    let result = execute(
        &api,
        &session(),
        BudgetCommand::SearchPayees(PayeesParams {
            query: "FOOD".to_string(),
            limit: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "payees");
        assert_eq!(row_ids(&envelope.data), vec!["p1"]);
    }
}

#[tokio::test]
async fn user_and_budgets_pass_through() {
    let api = FakeBudgetApi::default();

    let user = execute(&api, &session(), BudgetCommand::GetUser).await;
    assert!(user.is_ok());
    if let Ok(envelope) = user {
        assert_eq!(envelope.command, "user");
        assert_eq!(envelope.data["id"], json!("user-1"));
    }

    let budgets = execute(&api, &session(), BudgetCommand::GetBudgets).await;
    assert!(budgets.is_ok());
    if let Ok(envelope) = budgets {
        assert_eq!(envelope.data["total"], json!(1));
        assert_eq!(row_ids(&envelope.data), vec!["budget-1"]);
    }
}

#[tokio::test]
async fn create_sends_rounded_milliunits_and_defaults() {
    let api = FakeBudgetApi::default();
    let draft = TransactionDraft {
        account_id: Some("acct-1".to_string()),
        amount: Some("-12.3451".to_string()),
        payee_name: Some("  Corner Shop ".to_string()),
        memo: Some("   ".to_string()),
        ..TransactionDraft::default()
    };

    let result = transactions::create(&api, &session(), draft, date("2024-03-05")).await;
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "transaction create");
        assert_eq!(envelope.data["transaction"]["id"], json!("created-1"));
        assert_eq!(envelope.data["transaction"]["amount"]["milliunits"], json!(-12_345));
    }

    let created = api.created();
    assert_eq!(created.len(), 1);
    if let Some(sent) = created.first() {
        assert_eq!(sent.date, date("2024-03-05"));
        assert_eq!(sent.amount.value(), -12_345);
        assert_eq!(sent.payee_name.as_deref(), Some("Corner Shop"));
        assert_eq!(sent.memo, None);
        assert!(sent.approved);
    }
}

#[tokio::test]
async fn create_without_account_never_reaches_the_api() {
    let api = FakeBudgetApi::default();
    let draft = TransactionDraft {
        amount: Some("5".to_string()),
        ..TransactionDraft::default()
    };

    let result = transactions::create(&api, &session(), draft, date("2024-03-05")).await;
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "validation_error");
        assert_eq!(error.message, "missing account id");
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn create_with_bad_amount_never_reaches_the_api() {
    let api = FakeBudgetApi::default();
    let draft = TransactionDraft {
        account_id: Some("acct-1".to_string()),
        amount: Some("twelve".to_string()),
        ..TransactionDraft::default()
    };

    let result = transactions::create(&api, &session(), draft, date("2024-03-05")).await;
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.message, "invalid amount");
    }
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn remote_failures_surface_unchanged() {
    let api = FakeBudgetApi::failing_on("payees");
    let result = execute(
        &api,
        &session(),
        BudgetCommand::SearchPayees(PayeesParams::default()),
    )
    .await;

    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "remote_error");
        assert_eq!(error.data.map(|data| data["status"].clone()), Some(json!(500)));
    }
}

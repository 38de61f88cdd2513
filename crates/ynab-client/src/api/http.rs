use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::wire::{
    AccountsData, BudgetSettingsData, BudgetsData, CategoriesData, DataEnvelope, ErrorEnvelope,
    MonthData, PayeesData, SaveTransactionBody, TransactionData, TransactionsData, UserData,
};
use super::{BudgetApi, MonthSelector, TransactionScope, TransactionsRequest};
use crate::normalize::OutboundTransaction;
use crate::records::{
    AccountRecord, BudgetSummary, CategoryGroup, MonthDetail, PayeeRecord, TransactionRecord,
    UserRecord,
};
use crate::settings::Settings;
use crate::{ClientError, ClientResult};

const USER_AGENT: &str = concat!("ynab-cli/", env!("CARGO_PKG_VERSION"));

/// Ids the API resolves itself instead of matching a budget's own id.
const BUDGET_ALIASES: [&str; 2] = ["last-used", "default"];

/// [`BudgetApi`] over the YNAB v1 REST API.
#[derive(Clone, Debug)]
pub struct HttpBudgetApi {
    http: Client,
    base_url: Url,
    token: String,
}

impl HttpBudgetApi {
    /// Fails with a configuration error when no token is configured or the
    /// API URL cannot be parsed.
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let token = settings.api_token()?.to_string();
        let base_url = Url::parse(&settings.api_url).map_err(|error| {
            ClientError::configuration(&format!("invalid api_url `{}`: {error}", settings.api_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::configuration(&format!(
                "invalid api_url `{}`: not an http(s) base URL",
                settings.api_url
            )));
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| ClientError::transport(&error.to_string()))?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Appends `segments` to the base URL, one path segment each. `/`, `?`
    /// and `#` inside a segment are percent-encoded.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::invalid_argument(&format!("invalid id `{bad}`")));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::configuration("api_url cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url).bearer_auth(&self.token)
    }

    async fn get_data<T>(&self, segments: &[&str], query: &[(&str, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        let request = self.request(Method::GET, url).query(query);
        self.send(Method::GET, &path, request).await
    }

    async fn post_data<B, T>(&self, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let path = url.path().to_string();
        let request = self.request(Method::POST, url).json(body);
        self.send(Method::POST, &path, request).await
    }

    async fn send<T>(&self, method: Method, path: &str, request: RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|error| ClientError::transport(&error.to_string()))?;
        tracing::debug!(%method, path, status = response.status().as_u16(), "ynab api response");
        read_data(response).await
    }
}

async fn read_data<T>(response: Response) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return response
            .json::<DataEnvelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|error| ClientError::transport(&format!("unreadable response: {error}")));
    }

    let fallback_name = status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_lowercase()
        .replace(' ', "_");
    let error = match response.json::<ErrorEnvelope>().await {
        Ok(body) => ClientError::remote(
            status.as_u16(),
            body.error.id.as_deref(),
            &body.error.name,
            &body.error.detail,
        ),
        Err(_) => ClientError::remote(
            status.as_u16(),
            None,
            &fallback_name,
            &format!("HTTP {}", status.as_u16()),
        ),
    };
    tracing::warn!(status = status.as_u16(), message = %error.message, "ynab api error");
    Err(error)
}

/// Picks `budget_id` out of the budget list. Aliases resolve to the most
/// recently modified budget.
fn select_budget(budgets: Vec<BudgetSummary>, budget_id: &str) -> Option<BudgetSummary> {
    if BUDGET_ALIASES.contains(&budget_id) {
        return budgets
            .into_iter()
            .max_by(|a, b| a.last_modified_on.cmp(&b.last_modified_on));
    }
    budgets.into_iter().find(|budget| budget.id == budget_id)
}

#[async_trait]
impl BudgetApi for HttpBudgetApi {
    async fn user(&self) -> ClientResult<UserRecord> {
        let data: UserData = self.get_data(&["user"], &[]).await?;
        Ok(data.user)
    }

    async fn budgets(&self) -> ClientResult<Vec<BudgetSummary>> {
        let data: BudgetsData = self.get_data(&["budgets"], &[]).await?;
        Ok(data.budgets)
    }

    /// Name from the budget list, currency from the settings endpoint.
    async fn budget(&self, budget_id: &str) -> ClientResult<BudgetSummary> {
        let settings_path = ["budgets", budget_id, "settings"];
        let list_path = ["budgets"];
        let (settings, list) = tokio::try_join!(
            self.get_data::<BudgetSettingsData>(&settings_path, &[]),
            self.get_data::<BudgetsData>(&list_path, &[]),
        )?;
        let mut budget = select_budget(list.budgets, budget_id).ok_or_else(|| {
            ClientError::remote(404, None, "resource_not_found", "budget not in budget list")
        })?;
        if settings.settings.currency_format.is_some() {
            budget.currency_format = settings.settings.currency_format;
        }
        Ok(budget)
    }

    async fn accounts(&self, budget_id: &str) -> ClientResult<Vec<AccountRecord>> {
        let data: AccountsData = self
            .get_data(&["budgets", budget_id, "accounts"], &[])
            .await?;
        Ok(data.accounts)
    }

    async fn transactions(
        &self,
        budget_id: &str,
        request: &TransactionsRequest,
    ) -> ClientResult<Vec<TransactionRecord>> {
        let segments = match &request.scope {
            TransactionScope::Budget => vec!["budgets", budget_id, "transactions"],
            TransactionScope::Account(account_id) => {
                vec!["budgets", budget_id, "accounts", account_id.as_str(), "transactions"]
            }
            TransactionScope::Category(category_id) => {
                vec![
                    "budgets",
                    budget_id,
                    "categories",
                    category_id.as_str(),
                    "transactions",
                ]
            }
        };
        let mut query = Vec::new();
        if let Some(since) = request.since_date {
            query.push(("since_date", since.format("%Y-%m-%d").to_string()));
        }
        let data: TransactionsData = self.get_data(&segments, &query).await?;
        Ok(data.transactions)
    }

    async fn category_groups(&self, budget_id: &str) -> ClientResult<Vec<CategoryGroup>> {
        let data: CategoriesData = self
            .get_data(&["budgets", budget_id, "categories"], &[])
            .await?;
        Ok(data.category_groups)
    }

    async fn month(&self, budget_id: &str, month: MonthSelector) -> ClientResult<MonthDetail> {
        let month = match month {
            MonthSelector::Current => "current".to_string(),
            MonthSelector::Month(first_day) => first_day.format("%Y-%m-%d").to_string(),
        };
        let data: MonthData = self
            .get_data(&["budgets", budget_id, "months", month.as_str()], &[])
            .await?;
        Ok(data.month)
    }

    async fn payees(&self, budget_id: &str) -> ClientResult<Vec<PayeeRecord>> {
        let data: PayeesData = self
            .get_data(&["budgets", budget_id, "payees"], &[])
            .await?;
        Ok(data.payees)
    }

    async fn create_transaction(
        &self,
        budget_id: &str,
        transaction: &OutboundTransaction,
    ) -> ClientResult<TransactionRecord> {
        let body = SaveTransactionBody { transaction };
        let data: TransactionData = self
            .post_data(&["budgets", budget_id, "transactions"], &body)
            .await?;
        Ok(data.transaction)
    }
}

use crate::ClientResult;
use crate::api::BudgetApi;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoriesData, CategoryGroupRow, CategoryRow};
use crate::normalize::group_visible_categories;
use crate::settings::Session;

pub async fn run(api: &dyn BudgetApi, session: &Session) -> ClientResult<SuccessEnvelope> {
    let groups = group_visible_categories(api.category_groups(&session.budget_id).await?);

    let data = CategoriesData {
        budget_id: session.budget_id.clone(),
        groups: groups
            .into_iter()
            .map(|group| CategoryGroupRow {
                categories: group
                    .categories
                    .iter()
                    .map(|category| CategoryRow::from_record(category, &session.currency))
                    .collect(),
                id: group.id,
                name: group.name,
            })
            .collect(),
    };

    success("categories", data)
}

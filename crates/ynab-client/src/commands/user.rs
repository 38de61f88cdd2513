use crate::ClientResult;
use crate::api::BudgetApi;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::UserData;

pub async fn run(api: &dyn BudgetApi) -> ClientResult<SuccessEnvelope> {
    let user = api.user().await?;
    success("user", UserData { id: user.id })
}

pub mod api;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod normalize;
pub mod records;
pub mod settings;

pub use api::{BudgetApi, HttpBudgetApi};
pub use commands::{BudgetCommand, execute};
pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use settings::{Session, Settings};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

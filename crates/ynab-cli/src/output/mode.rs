use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::User { json }
        | Commands::Budgets { json }
        | Commands::Accounts { json, .. }
        | Commands::Transactions { json, .. }
        | Commands::Categories { json }
        | Commands::Summary { json }
        | Commands::Month { json, .. }
        | Commands::Add { json, .. }
        | Commands::Payees { json, .. }
        | Commands::Call { json, .. }
        | Commands::Shell { json } => OutputMode::from_flag(*json),
    }
}

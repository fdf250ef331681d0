mod handle_action;
mod run_lookup;

pub use handle_action::{ActionResponse, HandleLookupActionUseCase, LookupAction};
pub use run_lookup::RunLookupUseCase;

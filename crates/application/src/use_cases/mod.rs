pub mod lookup;

pub use lookup::{ActionResponse, HandleLookupActionUseCase, LookupAction, RunLookupUseCase};

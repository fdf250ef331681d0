use ferrous_lookup_application::services::ResolverAdapter;
use ferrous_lookup_application::use_cases::{HandleLookupActionUseCase, RunLookupUseCase};
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::HickoryDnsClient;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub run_lookup: Arc<RunLookupUseCase>,
    pub handle_action: Arc<HandleLookupActionUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(HickoryDnsClient::new(&config.dns)?);
        let resolver = Arc::new(ResolverAdapter::new(client));
        let run_lookup = Arc::new(RunLookupUseCase::new(resolver));

        info!("Lookup use cases ready");

        Ok(Self {
            handle_action: Arc::new(HandleLookupActionUseCase::new(run_lookup.clone())),
            run_lookup,
        })
    }
}

//! Scenario world: client, fixtures, and per-scenario response history.
//!
//! Cucumber constructs a fresh world for every scenario, which is the
//! history-reset semantics the harness relies on.

use cucumber::World;
use restcheck_domain::RequestSpec;
use restcheck_harness::{
    ApiClient, FixtureStore, HarnessConfig, HarnessResult, ScenarioContext, Verifier,
};

/// State shared by the step definitions within one scenario.
#[derive(Debug, World)]
#[world(init = Self::build)]
pub struct ApiWorld {
    client: ApiClient,
    fixtures: FixtureStore,
    /// Responses received so far in this scenario, in order.
    pub ctx: ScenarioContext,
}

impl ApiWorld {
    fn build() -> HarnessResult<Self> {
        let config = HarnessConfig::from_env();
        Ok(Self {
            client: ApiClient::new(&config)?,
            fixtures: FixtureStore::new(&config),
            ctx: ScenarioContext::new(),
        })
    }

    /// Issues the request and records the response; a transport failure
    /// fails the step.
    pub async fn send(&mut self, spec: RequestSpec) {
        match self.client.execute(&spec).await {
            Ok(response) => self.ctx.record(response),
            Err(e) => panic!("request failed: {e}"),
        }
    }

    /// A verifier over this world's fixture store.
    pub fn verifier(&self) -> Verifier<'_> {
        Verifier::new(&self.fixtures)
    }

    /// Turns a harness result into a step outcome.
    pub fn check(result: HarnessResult<()>) {
        if let Err(e) = result {
            panic!("{e}");
        }
    }
}

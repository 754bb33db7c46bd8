use charts_core::{ChartsConfig, ConfigError, HomeLoader, HomeState, HttpChartsClient};
use charts_ui::HomeView;
use dioxus::prelude::*;
use tracing::{error, warn};

/// Client for the configured data source, falling back to the defaults if
/// the configuration is unusable.
pub(crate) fn data_client() -> Result<HttpChartsClient, ConfigError> {
    match HttpChartsClient::new(ChartsConfig::load()) {
        Ok(client) => Ok(client),
        Err(e) => {
            warn!("Invalid charts configuration, using defaults: {}", e);
            HttpChartsClient::new(ChartsConfig::default())
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut state = use_signal(HomeState::default);

    // Scoped to this page: leaving it drops the task and any in-flight fetches
    use_future(move || async move {
        let client = match data_client() {
            Ok(client) => client,
            Err(e) => {
                error!("No usable chart data source: {}", e);
                state.write().fail_all();
                return;
            }
        };

        let loader = HomeLoader::new(client);
        let mut local = HomeState::default();
        loader
            .load_with(&mut local, |snapshot| state.set(snapshot.clone()))
            .await;
    });

    rsx! {
        HomeView { state }
    }
}

use dioxus::prelude::*;

use crate::shared::hooks::{use_app_config, use_key_value_store};
use crate::shared::logging::log_unmounted_skip;
use crate::shared::services::ApiService;
use crate::shared::state::{DashboardPhase, MountGuard, load_current_user};

/// Resolves the signed-in user once, on mount.
///
/// Starts in `Loading` and settles on `Authenticated` or `Redirecting`. The
/// result is discarded if the component unmounted while the request was in
/// flight.
pub fn use_dashboard_session() -> Signal<DashboardPhase> {
    let config = use_app_config();
    let store = use_key_value_store();
    let mut phase = use_signal(|| DashboardPhase::Loading);

    let guard = use_hook(MountGuard::new);
    use_drop({
        let guard = guard.clone();
        move || guard.release()
    });

    use_effect(move || {
        let config = config.clone();
        let store = store.clone();
        let guard = guard.clone();

        spawn(async move {
            let api = ApiService::with_base_url(config.api_base_url.clone());
            let result = load_current_user(&*store, &api, &config.token_key).await;

            if !guard.is_mounted() {
                log_unmounted_skip();
                return;
            }
            phase.set(DashboardPhase::from_result(result));
        });
    });

    phase
}

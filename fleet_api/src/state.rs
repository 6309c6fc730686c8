use fleet_maintenance::classifier::SharedClassifier;
use fleet_routing::config::RouteConfig;

pub struct AppState {
    pub route_config: RouteConfig,

    /// Loaded once at startup; `None` when no usable model file was found.
    pub classifier: Option<SharedClassifier>,
}

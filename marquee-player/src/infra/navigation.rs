use marquee_contracts::{DetailRoute, NavigationTarget};
use marquee_model::MediaId;
use parking_lot::Mutex;

/// Router stand-in for the headless binary: records the route it would open.
#[derive(Debug, Default)]
pub struct LogNavigator {
    opened: Mutex<Vec<DetailRoute>>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<DetailRoute> {
        self.opened.lock().clone()
    }
}

impl NavigationTarget for LogNavigator {
    fn navigate_to_detail(&self, id: MediaId) {
        let route = DetailRoute(id);
        log::info!("Navigate to {route}");
        self.opened.lock().push(route);
    }
}

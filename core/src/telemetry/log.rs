use log::info;

/// Component-labeled logger used by the ranking engine and the workflow
/// driver. The backend (env_logger) is initialized by the binary.
pub struct LogManager {
    component: &'static str,
}

impl LogManager {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn record(&self, message: &str) {
        info!("{}: {}", self.component, message);
    }
}

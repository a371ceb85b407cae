use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards core log lines to `tracing` under the `cafe` target, tagged with
/// the component that produced them.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("core")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cafe", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cafe", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cafe", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cafe", component = self.component, "{}", message);
    }
}

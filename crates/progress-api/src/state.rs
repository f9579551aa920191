use std::sync::Arc;

use jiff::tz::TimeZone;

use progress_report::window::ReportingCalendar;
use progress_storage::JsonStore;

use crate::config::ServiceConfig;
use crate::notify::LogNotifier;
use crate::workflow::ReportContext;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub config: Arc<ServiceConfig>,
    pub notifier: Arc<LogNotifier>,
    pub tz: TimeZone,
}

impl AppState {
    pub fn new(config: ServiceConfig, tz: TimeZone) -> Self {
        Self {
            store: Arc::new(JsonStore::new(config.data_dir.clone())),
            config: Arc::new(config),
            notifier: Arc::new(LogNotifier),
            tz,
        }
    }

    /// A calendar anchored at today in the configured zone.
    pub fn calendar(&self) -> ReportingCalendar {
        ReportingCalendar::now_in(self.tz.clone())
    }

    pub fn report_context(&self) -> ReportContext {
        ReportContext {
            organization: self.config.organization.clone(),
            calendar: self.calendar(),
            generated_at: jiff::Timestamp::now(),
        }
    }
}

use crate::config::AppConfig;
use crate::services::api::ReservationsApi;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn ReservationsApi>,
}

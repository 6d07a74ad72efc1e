use super::Repositories;
use crm_housekeeping_application::ports::Clock;
use crm_housekeeping_application::use_cases::{
    CheckHealthUseCase, CleanupInactiveCustomersUseCase, RestockLowStockProductsUseCase,
    SeedSampleDataUseCase, SendOrderRemindersUseCase,
};
use crm_housekeeping_domain::{Config, InactivityPolicy, RestockPolicy};
use crm_housekeeping_infrastructure::system::SystemClock;
use std::sync::Arc;

pub struct UseCases {
    pub clock: Arc<dyn Clock>,
    pub cleanup_customers: Arc<CleanupInactiveCustomersUseCase>,
    pub order_reminders: Arc<SendOrderRemindersUseCase>,
    pub restock: Arc<RestockLowStockProductsUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
    pub seed: Arc<SeedSampleDataUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

        Self {
            cleanup_customers: Arc::new(CleanupInactiveCustomersUseCase::new(
                repos.customer.clone(),
                clock.clone(),
                InactivityPolicy::new(config.cleanup.inactivity_days),
            )),
            order_reminders: Arc::new(SendOrderRemindersUseCase::new(
                repos.order.clone(),
                clock.clone(),
                config.reminders.lookback_days,
            )),
            restock: Arc::new(RestockLowStockProductsUseCase::new(
                repos.product.clone(),
                RestockPolicy::new(config.stock.threshold, config.stock.increment),
            )),
            check_health: Arc::new(CheckHealthUseCase::new(repos.health.clone())),
            seed: Arc::new(SeedSampleDataUseCase::new(
                repos.customer.clone(),
                repos.product.clone(),
                repos.order.clone(),
            )),
            clock,
        }
    }
}

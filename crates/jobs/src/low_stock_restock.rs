use crate::log_line::stamp;
use crate::runner::{record, HousekeepingJob, JobOutcome};
use async_trait::async_trait;
use crm_housekeeping_application::ports::{ActivityLog, Clock};
use crm_housekeeping_application::use_cases::RestockLowStockProductsUseCase;
use std::sync::Arc;
use tracing::error;

pub struct LowStockRestockJob {
    restock: Arc<RestockLowStockProductsUseCase>,
    activity_log: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
}

impl LowStockRestockJob {
    pub fn new(
        restock: Arc<RestockLowStockProductsUseCase>,
        activity_log: Arc<dyn ActivityLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            restock,
            activity_log,
            clock,
        }
    }
}

#[async_trait]
impl HousekeepingJob for LowStockRestockJob {
    fn name(&self) -> &'static str {
        "restock"
    }

    async fn run_once(&self) -> JobOutcome {
        let ts = stamp(self.clock.now());

        match self.restock.execute().await {
            Ok(products) => {
                let mut lines = Vec::with_capacity(products.len() + 2);
                lines.push(format!(
                    "{} Successfully updated {} low-stock products",
                    ts,
                    products.len()
                ));
                lines.push(format!("{} Updated {} products:", ts, products.len()));
                lines.extend(
                    products
                        .iter()
                        .map(|p| format!("{} - {}: New stock level: {}", ts, p.name, p.stock)),
                );
                record(self.activity_log.as_ref(), lines, None).await
            }
            Err(e) => {
                error!(error = %e, "Low-stock restock failed");
                let lines = vec![format!("{} Error executing low-stock update: {}", ts, e)];
                record(self.activity_log.as_ref(), lines, Some(e.to_string())).await
            }
        }
    }
}

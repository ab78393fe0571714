use crate::config::CheckoutConfig;
use crate::domain::checkout::{CheckoutClientConfig, CheckoutEvent};
use crate::services::{ServiceError, ServiceResult};

/// Public checkout settings for the storefront, without the client secret.
pub fn client_config(config: Option<&CheckoutConfig>) -> ServiceResult<CheckoutClientConfig> {
    config
        .map(CheckoutClientConfig::from)
        .ok_or(ServiceError::CheckoutDisabled)
}

/// Record a callback reported by the checkout button.
pub fn record_event(event: &CheckoutEvent) -> ServiceResult<()> {
    match event {
        CheckoutEvent::CreateOrder(data) => {
            log::info!("Checkout order requested (source: {:?})", data.payment_source);
        }
        CheckoutEvent::Approve(data) => {
            if data.order_id.trim().is_empty() {
                return Err(ServiceError::Form("approved order has no id".to_string()));
            }
            log::info!("Checkout order {} approved", data.order_id);
        }
        CheckoutEvent::Cancel(data) => {
            log::info!("Checkout order {} cancelled by buyer", data.order_id);
        }
        CheckoutEvent::Error(data) => {
            log::warn!("Checkout widget reported an error: {}", data.message);
        }
    }

    Ok(())
}

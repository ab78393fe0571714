//! Shapes exchanged with the PayPal checkout button.
//!
//! Field names follow the JavaScript SDK (`clientId`, `orderID`, ...) so the
//! storefront can pass these values to the widget untouched.

use serde::{Deserialize, Serialize};

use crate::config::{CheckoutConfig, PaymentEnvironment};

/// Payment intent requested when the SDK script is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutIntent {
    #[default]
    Capture,
    Authorize,
}

/// Funding sources that can be toggled on the button stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSource {
    Paypal,
    Venmo,
    Paylater,
    Card,
    Credit,
}

/// Options used to load the SDK script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOptions {
    pub client_id: String,
    pub currency: String,
    pub intent: CheckoutIntent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enable_funding: Vec<FundingSource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disable_funding: Vec<FundingSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Gold,
    Blue,
    Silver,
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    #[default]
    Rect,
    Pill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLabel {
    #[default]
    Paypal,
    Checkout,
    Buynow,
    Pay,
}

/// Visual options of the rendered button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub layout: ButtonLayout,
    pub color: ButtonColor,
    pub shape: ButtonShape,
    pub label: ButtonLabel,
    /// Height in pixels; the widget accepts 25 to 55.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<bool>,
}

/// Public checkout settings handed to the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutClientConfig {
    pub environment: PaymentEnvironment,
    pub options: ScriptOptions,
    pub style: ButtonStyle,
}

impl From<&CheckoutConfig> for CheckoutClientConfig {
    fn from(config: &CheckoutConfig) -> Self {
        Self {
            environment: config.environment,
            options: ScriptOptions {
                client_id: config.client_id.clone(),
                currency: config.currency.clone(),
                intent: CheckoutIntent::default(),
                enable_funding: Vec::new(),
                disable_funding: vec![FundingSource::Credit, FundingSource::Card],
            },
            style: ButtonStyle {
                layout: ButtonLayout::Vertical,
                color: ButtonColor::Black,
                shape: ButtonShape::Rect,
                label: ButtonLabel::Checkout,
                height: None,
                tagline: Some(false),
            },
        }
    }
}

/// Data passed to the `createOrder` callback.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<FundingSource>,
}

/// Data passed to the `onApprove` callback once the buyer approves payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveData {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "payerID", default, skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,
    #[serde(rename = "paymentID", default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(
        rename = "facilitatorAccessToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub facilitator_access_token: Option<String>,
}

/// Data passed to the `onCancel` callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelData {
    #[serde(rename = "orderID")]
    pub order_id: String,
}

/// Error surfaced through the `onError` callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutErrorData {
    pub message: String,
}

/// Any callback the button can fire, as reported back by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum CheckoutEvent {
    CreateOrder(CreateOrderData),
    Approve(ApproveData),
    Cancel(CancelData),
    Error(CheckoutErrorData),
}

impl CheckoutEvent {
    /// PayPal order id the event refers to, when it carries one.
    pub fn order_id(&self) -> Option<&str> {
        match self {
            CheckoutEvent::Approve(data) => Some(&data.order_id),
            CheckoutEvent::Cancel(data) => Some(&data.order_id),
            CheckoutEvent::CreateOrder(_) | CheckoutEvent::Error(_) => None,
        }
    }
}

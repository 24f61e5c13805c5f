//! Payment-processor integration for Apologia.
//!
//! The [`PaymentGateway`] trait is the seam between handlers and the
//! processor: production wires in [`StripeGateway`] (plain REST over
//! `reqwest`, no SDK), tests substitute a mock. Webhook signature
//! verification lives in [`webhook`] and has no HTTP dependency at all.

pub mod error;
pub mod gateway;
pub mod stripe;
pub mod webhook;

pub use error::{Error, Result};
pub use gateway::{
  CheckoutRequest, CheckoutSession, PaymentGateway, PaymentIntent,
  PaymentIntentRequest, PortalSession,
};
pub use stripe::StripeGateway;

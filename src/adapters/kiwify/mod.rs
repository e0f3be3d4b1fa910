//! Kiwify payment vendor adapter (webhooks only).
//!
//! Kiwify hosts its own checkout, so there is no order gateway here. The
//! school id travels in the checkout link's tracking parameters.

mod webhook_decoder;
mod wire_types;

pub use webhook_decoder::KiwifyWebhookDecoder;
pub use wire_types::{KiwifyTracking, KiwifyWebhook};

use crate::{
    config::TransportConfig,
    domain::{ContactMessage, SubmissionReceipt},
    error::{PortfolioError, Result},
    transport::SubmissionPort,
};
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Stand-in for a network call: waits, then succeeds with a fixed probability
pub struct SimulatedTransport {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedTransport {
    const DELIVERED: &'static str = "Thank you for your message! I'll get back to you soon.";
    const FAILURE: &'static str = "Network error";

    /// Rates outside `[0, 1]` are clamped; NaN never succeeds
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            tracing::warn!("success rate is NaN, every submission will fail");
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_rate,
        }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.delay(), config.success_rate)
    }

    /// Uniform sample in `[0, 1)` taken from the random low bits of a v4 UUID
    fn roll() -> f64 {
        let bits = (Uuid::new_v4().as_u128() & u128::from(u32::MAX)) as u32;
        f64::from(bits) / (f64::from(u32::MAX) + 1.0)
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::from_config(&TransportConfig::default())
    }
}

#[async_trait]
impl SubmissionPort for SimulatedTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;

        if Self::roll() < self.success_rate {
            let receipt = SubmissionReceipt::new(Self::DELIVERED);
            tracing::info!(id = %receipt.id, subject = %message.subject, "contact message delivered");
            Ok(receipt)
        } else {
            tracing::warn!(subject = %message.subject, "simulated delivery failure");
            Err(PortfolioError::SubmissionFailed(Self::FAILURE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "Just saying hello.".to_string(),
        }
    }

    #[test]
    fn test_roll_is_in_unit_interval() {
        for _ in 0..1000 {
            let roll = SimulatedTransport::roll();
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_succeeds_after_delay() {
        let transport = SimulatedTransport::new(Duration::from_millis(2000), 1.0);
        let start = Instant::now();

        let receipt = transport.submit(&message()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.message, SimulatedTransport::DELIVERED);
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_fails_with_zero_rate() {
        let transport = SimulatedTransport::new(Duration::from_millis(10), 0.0);
        let err = transport.submit(&message()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::SubmissionFailed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mixed_rate_yields_both_outcomes() {
        let transport = SimulatedTransport::new(Duration::ZERO, 0.5);
        let mut delivered = 0;
        for _ in 0..200 {
            if transport.submit(&message()).await.is_ok() {
                delivered += 1;
            }
        }
        assert!(delivered > 0 && delivered < 200);
    }

    #[test]
    fn test_rate_is_clamped() {
        assert_eq!(SimulatedTransport::new(Duration::ZERO, 3.0).success_rate, 1.0);
        assert_eq!(SimulatedTransport::new(Duration::ZERO, -1.0).success_rate, 0.0);
    }

    #[test]
    fn test_nan_rate_becomes_zero() {
        let transport = SimulatedTransport::new(Duration::ZERO, f64::NAN);
        assert_eq!(transport.success_rate, 0.0);
    }

    #[test]
    fn test_default_uses_reference_settings() {
        let transport = SimulatedTransport::default();
        assert_eq!(transport.delay, Duration::from_millis(2000));
        assert_eq!(transport.success_rate, 0.8);
    }
}

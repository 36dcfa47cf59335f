use crate::dom;
use storefront_core::Clock;

/// Monotonic page clock backed by `performance.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        dom::window()
            .and_then(|win| win.performance())
            .map_or(0, |perf| perf.now().max(0.0).ceil() as u64)
    }
}

use serde::Serialize;

/// Static description of one rental mechanism, rendered by the
/// "How It Works" view.
///
/// Both instances live as compile-time constants in the engine's catalog;
/// steps, advantages, and disadvantages must render in array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalMethod {
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

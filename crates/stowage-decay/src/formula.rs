use stowage_core::config::DecayConfig;
use stowage_core::ContextItem;

/// Exponential relevance decay.
///
/// ```text
/// effective_rate = decay_rate × category_modifier
/// decayed = max(floor, relevance × e^(-effective_rate × hours))
/// ```
///
/// Instructions carry a 0.0 modifier, so their relevance never decays.
/// The floor keeps every item minimally recoverable.
pub fn decayed_relevance(item: &ContextItem, hours: f64, config: &DecayConfig) -> f64 {
    let modifier = config.modifiers.for_category(item.category);
    let effective_rate = item.decay_rate * modifier;
    let decayed = item.relevance * (-effective_rate * hours.max(0.0)).exp();
    decayed.max(config.relevance_floor)
}

//! Cost Calculator
//!
//! Computes call cost from total token counts using a static per-model price
//! table. Prices are blended input/output rates in USD per million tokens.

use std::collections::HashMap;

/// Rate applied to models missing from the table (USD per million tokens)
pub const FALLBACK_PRICE_PER_MILLION: f64 = 2.0;

/// Default pricing data (USD per million tokens)
const DEFAULT_PRICING: &[(&str, f64)] = &[
    // Anthropic
    ("anthropic/claude-3.5-sonnet", 9.0),
    ("anthropic/claude-3-haiku", 0.75),
    ("anthropic/claude-3-opus", 45.0),
    // OpenAI
    ("openai/gpt-4o", 7.5),
    ("openai/gpt-4o-mini", 0.375),
    ("openai/gpt-4-turbo", 20.0),
    // DeepSeek
    ("deepseek/deepseek-coder", 0.21),
    ("deepseek/deepseek-chat", 0.21),
    // Meta
    ("meta-llama/llama-3.3-70b-instruct", 0.6),
    // Google
    ("google/gemini-pro-1.5", 3.75),
];

/// Cost calculator over a model price table.
#[derive(Debug, Clone)]
pub struct CostCalculator {
    /// USD per million tokens, keyed by model id
    prices: HashMap<String, f64>,
    fallback_per_million: f64,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CostCalculator {
    /// Create a calculator with the default price table.
    pub fn new() -> Self {
        Self {
            prices: DEFAULT_PRICING
                .iter()
                .map(|(model, price)| (model.to_string(), *price))
                .collect(),
            fallback_per_million: FALLBACK_PRICE_PER_MILLION,
        }
    }

    /// Add or replace the price of a model.
    pub fn with_price(mut self, model: impl Into<String>, per_million: f64) -> Self {
        self.prices.insert(model.into(), per_million);
        self
    }

    /// Replace the rate used for unknown models.
    pub fn with_fallback(mut self, per_million: f64) -> Self {
        self.fallback_per_million = per_million;
        self
    }

    /// Price per million tokens for a model, if the table knows it.
    ///
    /// Exact ids win; otherwise the longest table entry that prefixes the id
    /// matches, so versioned ids (`openai/gpt-4o-2024-08-06`) resolve.
    pub fn get_pricing(&self, model: &str) -> Option<f64> {
        if let Some(price) = self.prices.get(model) {
            return Some(*price);
        }
        self.prices
            .iter()
            .filter(|(known, _)| model.starts_with(known.as_str()))
            .max_by_key(|(known, _)| known.len())
            .map(|(_, price)| *price)
    }

    /// USD per token for a model, falling back to the default rate.
    pub fn price_per_token(&self, model: &str) -> f64 {
        self.get_pricing(model).unwrap_or(self.fallback_per_million) / 1_000_000.0
    }

    /// Cost in USD of `tokens` tokens on `model`.
    pub fn calculate_cost(&self, model: &str, tokens: u64) -> f64 {
        tokens as f64 * self.price_per_token(model)
    }
}

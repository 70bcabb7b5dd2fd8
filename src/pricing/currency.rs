//! Currency conversion and formatting
//!
//! Conversion uses the catalog's static USD to KES rate. Amounts are whole
//! units with thousands grouping, e.g. `KES 7,482`.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{Currency, Tier};

/// Convert a USD amount into `currency` using the catalog rate
pub fn convert_currency(amount_usd: u64, currency: Currency) -> u64 {
    convert_with_rate(amount_usd, currency, config::catalog().usd_to_kes())
}

/// Convert a USD amount with an explicit USD to KES rate
pub fn convert_with_rate(amount_usd: u64, currency: Currency, usd_to_kes: f64) -> u64 {
    match currency {
        Currency::Usd => amount_usd,
        Currency::Kes => (amount_usd as f64 * usd_to_kes).round() as u64,
    }
}

/// Group digits in threes: 1290000 -> "1,290,000"
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Convert and format a USD amount for display
pub fn format_price(amount_usd: u64, currency: Currency) -> String {
    format!(
        "{}{}",
        currency.symbol(),
        format_amount(convert_currency(amount_usd, currency))
    )
}

/// A revenue bracket choice shown by the questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueOption {
    pub id: Tier,
    pub label: String,
}

/// Monthly revenue bracket bounds in USD (lower, upper)
const REVENUE_BRACKETS: [(Tier, Option<u64>, u64); 4] = [
    (Tier::Tier1, None, 10_000),
    (Tier::Tier2, Some(11_000), 30_000),
    (Tier::Tier3, Some(31_000), 60_000),
    (Tier::Tier4, Some(61_000), 99_000),
];

/// Revenue bracket options labelled in the display currency
pub fn revenue_options(currency: Currency) -> Vec<RevenueOption> {
    REVENUE_BRACKETS
        .iter()
        .map(|&(tier, lower, upper)| {
            let label = match currency {
                Currency::Usd => match lower {
                    None => format!("Less than ${}K", upper / 1000),
                    Some(lower) => format!("${}K - ${}K", lower / 1000, upper / 1000),
                },
                Currency::Kes => match lower {
                    None => format!("Less than {}", format_price(upper, currency)),
                    Some(lower) => format!(
                        "{} - {}",
                        format_price(lower, currency),
                        format_price(upper, currency)
                    ),
                },
            };

            RevenueOption { id: tier, label }
        })
        .collect()
}

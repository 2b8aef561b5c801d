//! Price + Tax Calculator

use crate::error::{DemoError, DemoResult};
use crate::input::{display_number, parse_float_prefix};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    pub price: f64,
    /// Percent, e.g. 10.0 for 10%
    pub rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl TaxBreakdown {
    pub fn rate_label(&self) -> String {
        display_number(self.rate)
    }
}

pub fn calculate_tax(price: f64, rate: f64) -> f64 {
    price * (rate / 100.0)
}

fn valid_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse price and rate fields and compute tax and total.
pub fn calculate_total(price_raw: &str, rate_raw: &str) -> DemoResult<TaxBreakdown> {
    let price = valid_amount(parse_float_prefix(price_raw)).ok_or(DemoError::InvalidAmounts)?;
    let rate = valid_amount(parse_float_prefix(rate_raw)).ok_or(DemoError::InvalidAmounts)?;

    let tax = calculate_tax(price, rate);
    Ok(TaxBreakdown {
        price,
        rate,
        tax,
        total: price + tax,
    })
}

/// en-US dollar formatting: `$1,234.50`, half-up to the cent.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    let dollars = (cents / 100.0).trunc();
    let remainder = (cents - dollars * 100.0) as u32;

    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(&format!("{:.0}", dollars)), remainder)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

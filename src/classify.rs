//! Age and Number Classifiers

use crate::error::{DemoError, DemoResult};
use crate::input::{display_number, parse_float_prefix, parse_int_prefix};

const MAX_AGE: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCategory {
    Child,
    Teenager,
    Adult,
    Senior,
}

impl AgeCategory {
    /// Half-open buckets: [0,13) [13,20) [20,65) [65,..)
    pub fn for_age(age: i64) -> Self {
        match age {
            a if a < 13 => AgeCategory::Child,
            a if a < 20 => AgeCategory::Teenager,
            a if a < 65 => AgeCategory::Adult,
            _ => AgeCategory::Senior,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Child => "Child",
            AgeCategory::Teenager => "Teenager",
            AgeCategory::Adult => "Adult",
            AgeCategory::Senior => "Senior",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AgeCategory::Child => "green",
            AgeCategory::Teenager => "blue",
            AgeCategory::Adult => "purple",
            AgeCategory::Senior => "orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeReport {
    pub age: i64,
    pub category: AgeCategory,
}

/// Validate the raw age field and bucket it.
pub fn classify_age(raw: &str) -> DemoResult<AgeReport> {
    let age = parse_int_prefix(raw).ok_or(DemoError::InvalidAge)?;
    if !(0..=MAX_AGE).contains(&age) {
        return Err(DemoError::InvalidAge);
    }
    Ok(AgeReport {
        age,
        category: AgeCategory::for_age(age),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn label(self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
            Sign::Zero => "zero",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Sign::Positive => "📈",
            Sign::Negative => "📉",
            Sign::Zero => "⚪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberReport {
    pub value: f64,
    pub sign: Sign,
    /// Only set for non-zero integers
    pub parity: Option<Parity>,
}

impl NumberReport {
    /// `positive (even)`, `negative`, `zero` ...
    pub fn description(&self) -> String {
        let suffix = match self.parity {
            Some(Parity::Even) => " (even)",
            Some(Parity::Odd) => " (odd)",
            None => "",
        };
        format!("{}{}", self.sign.label(), suffix)
    }

    /// Shortest display form; negative zero prints as `0`.
    pub fn display_value(&self) -> String {
        display_number(self.value)
    }
}

pub fn classify_number(raw: &str) -> DemoResult<NumberReport> {
    let value = parse_float_prefix(raw).ok_or(DemoError::InvalidNumber)?;

    let sign = if value > 0.0 {
        Sign::Positive
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Zero
    };

    let is_integer = value.is_finite() && value.fract() == 0.0;
    let parity = (is_integer && value != 0.0).then(|| {
        if value % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    });

    Ok(NumberReport { value, sign, parity })
}

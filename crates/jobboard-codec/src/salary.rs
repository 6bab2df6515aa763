//! Salary bands (`salary_range_c`).
//!
//! Text fallback accepts the shapes people type by hand, such as
//! `50000-80000` or `$50,000 - $80,000`.

use jobboard_core::job::SalaryRange;

use serde_json::Value;

use crate::{TextCodec, json_or_else, scalar_int, to_json};

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹'];

fn parse_text(text: &str) -> SalaryRange {
  let cleaned: String = text
    .chars()
    .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
    .collect();

  let parts: Vec<&str> = cleaned.split('-').collect();
  match parts.as_slice() {
    [min, max] => match (min.parse(), max.parse()) {
      (Ok(min), Ok(max)) => SalaryRange::new(min, max),
      _ => SalaryRange::default(),
    },
    _ => SalaryRange::default(),
  }
}

/// `{min, max}` with each bound read leniently; any other document is an
/// unstated range.
fn from_json(value: Value) -> SalaryRange {
  match value {
    Value::Object(map) => SalaryRange::new(
      scalar_int(map.get("min")).unwrap_or(0),
      scalar_int(map.get("max")).unwrap_or(0),
    ),
    _ => SalaryRange::default(),
  }
}

impl TextCodec for SalaryRange {
  fn decode(raw: Option<&str>) -> Self {
    json_or_else(raw, from_json, parse_text)
  }

  fn encode(&self) -> String { to_json(self) }
}

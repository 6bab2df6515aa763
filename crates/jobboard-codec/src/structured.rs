//! Line-oriented lists: work history and interview rounds.
//!
//! A JSON document is read as an array of objects, member by member. Elements
//! that are not objects are dropped. The fallback reading treats every
//! non-blank line of non-JSON text as one entry whose only meaningful field is
//! the line itself.

use jobboard_core::{application::Interview, candidate::ExperienceEntry};
use serde_json::{Map, Value};

use crate::{TextCodec, json_or_else, scalar_int, scalar_text, to_json};

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
  text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn objects<T>(
  value: Value,
  read: impl Fn(&Map<String, Value>) -> T,
) -> Vec<T> {
  match value {
    Value::Array(items) => {
      items.iter().filter_map(Value::as_object).map(read).collect()
    }
    _ => Vec::new(),
  }
}

fn experience(entry: &Map<String, Value>) -> ExperienceEntry {
  let defaults = ExperienceEntry::from_line("");
  ExperienceEntry {
    position: scalar_text(entry.get("position")).unwrap_or_default(),
    company:  scalar_text(entry.get("company")).unwrap_or_default(),
    duration: scalar_int(entry.get("duration"))
      .and_then(|years| u32::try_from(years).ok())
      .unwrap_or(defaults.duration),
  }
}

fn interview(entry: &Map<String, Value>) -> Interview {
  let defaults = Interview::from_line("");
  Interview {
    date:  scalar_text(entry.get("date")).unwrap_or_default(),
    kind:  scalar_text(entry.get("type"))
      .filter(|kind| !kind.trim().is_empty())
      .unwrap_or(defaults.kind),
    notes: scalar_text(entry.get("notes")).unwrap_or_default(),
  }
}

impl TextCodec for Vec<ExperienceEntry> {
  fn decode(raw: Option<&str>) -> Self {
    json_or_else(raw, |value| objects(value, experience), |text| {
      non_blank_lines(text).map(ExperienceEntry::from_line).collect()
    })
  }

  fn encode(&self) -> String { to_json(self) }
}

impl TextCodec for Vec<Interview> {
  fn decode(raw: Option<&str>) -> Self {
    json_or_else(raw, |value| objects(value, interview), |text| {
      non_blank_lines(text).map(Interview::from_line).collect()
    })
  }

  fn encode(&self) -> String { to_json(self) }
}

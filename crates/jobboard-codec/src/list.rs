//! Comma-separated lists (`skills_c`, `Tags`).

/// Split on commas, trim each entry, drop entries left empty.
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
  raw
    .unwrap_or_default()
    .split(',')
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Join with `,`, applying the same trimming as [`decode_list`] so the stored
/// form is canonical.
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
  items
    .iter()
    .map(|item| item.as_ref().trim())
    .filter(|item| !item.is_empty())
    .collect::<Vec<_>>()
    .join(",")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn drops_blank_entries() {
    assert_eq!(
      decode_list(Some(" Rust, ,SQL ,,  Go")),
      vec!["Rust", "SQL", "Go"]
    );
    assert!(decode_list(None).is_empty());
    assert!(decode_list(Some(" , ")).is_empty());
  }

  #[test]
  fn decoded_lists_round_trip() {
    let decoded = decode_list(Some("a, b,c"));
    assert_eq!(encode_list(&decoded), "a,b,c");
    assert_eq!(decode_list(Some(&encode_list(&decoded))), decoded);
  }
}

//! Open enums over the backend's free-text picklist columns.
//!
//! The backend stores picklist values as plain strings and accepts values
//! outside the set the UI offers, so every generated enum keeps an
//! `Other(String)` escape hatch and never fails to decode.

/// Declare a picklist enum whose variants map to fixed backend labels.
///
/// Matching is ASCII case-insensitive; unknown labels land in `Other`
/// verbatim. Exactly one variant must carry `#[default]`.
macro_rules! label_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
    }
  ) => {
    $(#[$meta])*
    #[derive(
      Debug, Clone, PartialEq, Eq, Hash, Default,
      serde::Serialize, serde::Deserialize,
    )]
    #[serde(from = "String", into = "String")]
    pub enum $name {
      $( $(#[$vmeta])* $variant, )+
      /// A label outside the known set, kept verbatim.
      Other(String),
    }

    impl $name {
      /// The label written to the backend column.
      pub fn as_str(&self) -> &str {
        match self {
          $( Self::$variant => $label, )+
          Self::Other(label) => label.as_str(),
        }
      }
    }

    impl From<&str> for $name {
      fn from(label: &str) -> Self {
        $(
          if label.eq_ignore_ascii_case($label) {
            return Self::$variant;
          }
        )+
        Self::Other(label.to_owned())
      }
    }

    impl From<String> for $name {
      fn from(label: String) -> Self { Self::from(label.as_str()) }
    }

    impl From<$name> for String {
      fn from(value: $name) -> Self { value.as_str().to_owned() }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }
  };
}

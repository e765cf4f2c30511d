use std::borrow::Borrow;

/// The textual key of a grammar node.
///
/// An `Id` is either a single character (ex: `'v'`, matched by `-v`) or a multi-character name (ex: `"verbose"`, matched by `--verbose`).
/// Two ids are equal iff their text matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Create an id from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id is a single character.
    pub fn is_short(&self) -> bool {
        self.0.chars().count() == 1
    }
}

impl From<char> for Id {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Id::from('v'), "v", true)]
    #[case(Id::from("v"), "v", true)]
    #[case(Id::from("verbose"), "verbose", false)]
    #[case(Id::new(String::from("std")), "std", false)]
    fn id_text(#[case] id: Id, #[case] expected: &str, #[case] short: bool) {
        assert_eq!(id.as_str(), expected);
        assert_eq!(id, expected);
        assert_eq!(id.is_short(), short);
    }

    #[test]
    fn id_equality() {
        assert_eq!(Id::from('x'), Id::from("x"));
        assert_ne!(Id::from('x'), Id::from("exe"));
        assert_ne!(Id::from("exe"), Id::from("Exe"));
    }

    #[test]
    fn id_display() {
        assert_eq!(Id::from('v').to_string(), "v");
        assert_eq!(format!("'{}'", Id::from("verbose")), "'verbose'");
    }
}

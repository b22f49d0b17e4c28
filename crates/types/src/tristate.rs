use serde::{Deserialize, Serialize};

/// A boolean that may also be left unset.
///
/// `NotSet` is the identity element when styles are merged: it never
/// overrides an explicit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    #[default]
    NotSet,
    False,
    True,
}

impl TriState {
    pub const fn from_bool(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }

    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(v) => Self::from_bool(v),
            None => TriState::NotSet,
        }
    }

    pub const fn to_option(self) -> Option<bool> {
        match self {
            TriState::NotSet => None,
            TriState::False => Some(false),
            TriState::True => Some(true),
        }
    }

    pub const fn to_bool_or_else(self, default: bool) -> bool {
        match self {
            TriState::NotSet => default,
            TriState::False => false,
            TriState::True => true,
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, TriState::NotSet)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        Self::from_option(value)
    }
}

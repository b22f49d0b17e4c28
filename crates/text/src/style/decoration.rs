use quill_types::TriState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text decoration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Pairs this decoration with a state, for use as a style applicable.
    pub fn with_state(self, state: impl Into<TriState>) -> DecorationAndState {
        DecorationAndState {
            decoration: self,
            state: state.into(),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationAndState {
    pub decoration: Decoration,
    pub state: TriState,
}

/// The tri-state of every decoration, indexed by [`Decoration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecorationMap([TriState; 5]);

impl DecorationMap {
    pub const EMPTY: DecorationMap = DecorationMap([TriState::NotSet; 5]);

    /// A map with every decoration set to `state`.
    pub const fn uniform(state: TriState) -> Self {
        DecorationMap([state; 5])
    }

    pub const fn get(&self, decoration: Decoration) -> TriState {
        self.0[decoration as usize]
    }

    pub fn set(&mut self, decoration: Decoration, state: TriState) {
        self.0[decoration as usize] = state;
    }

    pub fn with(mut self, decoration: Decoration, state: TriState) -> Self {
        self.set(decoration, state);
        self
    }

    /// True when no decoration is explicitly set.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|state| !state.is_set())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Decoration, TriState)> + '_ {
        Decoration::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

impl FromIterator<(Decoration, TriState)> for DecorationMap {
    fn from_iter<I: IntoIterator<Item = (Decoration, TriState)>>(iter: I) -> Self {
        let mut map = DecorationMap::EMPTY;
        for (decoration, state) in iter {
            map.set(decoration, state);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_get_set() {
        let map = DecorationMap::EMPTY
            .with(Decoration::Bold, TriState::True)
            .with(Decoration::Italic, TriState::False);
        assert_eq!(map.get(Decoration::Bold), TriState::True);
        assert_eq!(map.get(Decoration::Italic), TriState::False);
        assert_eq!(map.get(Decoration::Obfuscated), TriState::NotSet);
        assert!(!map.is_empty());
        assert!(DecorationMap::default().is_empty());
    }

    #[test]
    fn test_from_iter_and_names() {
        let map: DecorationMap = [(Decoration::Underlined, TriState::True)].into_iter().collect();
        assert_eq!(map.iter().filter(|(_, s)| s.is_set()).count(), 1);
        assert_eq!(Decoration::from_name("strikethrough"), Some(Decoration::Strikethrough));
        assert_eq!(serde_json::to_string(&Decoration::Bold).unwrap(), "\"bold\"");
    }
}

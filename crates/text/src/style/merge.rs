//! Merge strategies and the attribute groups that take part in a merge.

use super::{Style, StyleBuilder};
use bitflags::bitflags;
use quill_types::TriState;
use serde::{Deserialize, Serialize};

/// Decides whether a value from the source style replaces the target's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Set values of the source always win.
    #[default]
    Always,
    /// Nothing is merged.
    Never,
    /// Source values are only used where the target has none.
    IfAbsentOnTarget,
}

impl MergeStrategy {
    fn accepts<T>(self, target: &Option<T>) -> bool {
        match self {
            MergeStrategy::Always => true,
            MergeStrategy::Never => false,
            MergeStrategy::IfAbsentOnTarget => target.is_none(),
        }
    }

    fn accepts_state(self, target: TriState) -> bool {
        match self {
            MergeStrategy::Always => true,
            MergeStrategy::Never => false,
            MergeStrategy::IfAbsentOnTarget => !target.is_set(),
        }
    }
}

bitflags! {
    /// The attribute groups of a [`Style`] that take part in a merge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Merges: u8 {
        const COLOR = 1;
        const SHADOW_COLOR = 1 << 1;
        const DECORATIONS = 1 << 2;
        /// Click and hover events.
        const EVENTS = 1 << 3;
        const INSERTION = 1 << 4;
        const FONT = 1 << 5;
    }
}

impl Merges {
    pub const fn colors_and_decorations() -> Self {
        Merges::COLOR
            .union(Merges::SHADOW_COLOR)
            .union(Merges::DECORATIONS)
    }
}

impl Default for Merges {
    fn default() -> Self {
        Merges::all()
    }
}

/// Overwrites `target` with `value` when present and accepted by the strategy.
fn merge_option<T: Clone>(target: &mut Option<T>, value: &Option<T>, strategy: MergeStrategy) {
    if let Some(value) = value
        && strategy.accepts(target)
    {
        *target = Some(value.clone());
    }
}

impl StyleBuilder {
    /// Merges `that` into this builder using `Always` over every part.
    pub fn merge(&mut self, that: &Style) -> &mut Self {
        self.merge_with(that, MergeStrategy::Always, Merges::all())
    }

    pub fn merge_with(
        &mut self,
        that: &Style,
        strategy: MergeStrategy,
        parts: Merges,
    ) -> &mut Self {
        if strategy == MergeStrategy::Never || parts.is_empty() || that.is_empty() {
            return self;
        }

        if parts.contains(Merges::COLOR) {
            merge_option(&mut self.style.color, &that.color, strategy);
        }
        if parts.contains(Merges::SHADOW_COLOR) {
            merge_option(&mut self.style.shadow_color, &that.shadow_color, strategy);
        }
        if parts.contains(Merges::DECORATIONS) {
            for (decoration, state) in that.decorations.iter() {
                if state.is_set()
                    && strategy.accepts_state(self.style.decorations.get(decoration))
                {
                    self.style.decorations.set(decoration, state);
                }
            }
        }
        if parts.contains(Merges::EVENTS) {
            merge_option(&mut self.style.click_event, &that.click_event, strategy);
            merge_option(&mut self.style.hover_event, &that.hover_event, strategy);
        }
        if parts.contains(Merges::INSERTION) {
            merge_option(&mut self.style.insertion, &that.insertion, strategy);
        }
        if parts.contains(Merges::FONT) {
            merge_option(&mut self.style.font, &that.font, strategy);
        }
        self
    }
}

impl Style {
    /// Merges `that` over this style: every attribute set in `that` wins.
    pub fn merge(&self, that: &Style) -> Style {
        self.merge_with(that, MergeStrategy::Always, Merges::all())
    }

    pub fn merge_with(&self, that: &Style, strategy: MergeStrategy, parts: Merges) -> Style {
        if strategy == MergeStrategy::Never || parts.is_empty() || that.is_empty() {
            return self.clone();
        }
        let mut builder = self.to_builder();
        builder.merge_with(that, strategy, parts);
        builder.build()
    }

    /// Returns a copy of this style without the attributes it shares with
    /// `parent`, i.e. what this style adds on top of an inherited style.
    pub fn unmerge(&self, parent: &Style) -> Style {
        if self.is_empty() {
            return self.clone();
        }

        let mut style = self.clone();
        if style.color == parent.color {
            style.color = None;
        }
        if style.shadow_color == parent.shadow_color {
            style.shadow_color = None;
        }
        if style.font == parent.font {
            style.font = None;
        }
        for (decoration, state) in self.decorations.iter() {
            if state == parent.decorations.get(decoration) {
                style.decorations.set(decoration, TriState::NotSet);
            }
        }
        if style.click_event == parent.click_event {
            style.click_event = None;
        }
        if style.hover_event == parent.hover_event {
            style.hover_event = None;
        }
        if style.insertion == parent.insertion {
            style.insertion = None;
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ClickEvent;
    use crate::style::Decoration;
    use quill_types::{Key, NamedTextColor, ShadowColor, TextColor};

    fn sample() -> Style {
        Style::builder()
            .color(NamedTextColor::Gold)
            .shadow_color(ShadowColor::from_argb(0x80, 0, 0, 0))
            .decoration(Decoration::Bold, TriState::True)
            .click_event(ClickEvent::RunCommand("/help".into()))
            .insertion("ins".to_string())
            .font(Key::minecraft("uniform").unwrap())
            .build()
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let style = sample();
        let strategies =
            [MergeStrategy::Always, MergeStrategy::Never, MergeStrategy::IfAbsentOnTarget];
        for strategy in strategies {
            assert_eq!(style.merge_with(&Style::empty(), strategy, Merges::all()), style);
            assert_eq!(
                style.merge_with(&Style::empty(), strategy, Merges::colors_and_decorations()),
                style
            );
        }
    }

    #[test]
    fn test_if_absent_keeps_target_decoration() {
        let target = Style::empty().with_decoration(Decoration::Bold, TriState::True);
        let source = Style::empty().with_decoration(Decoration::Bold, TriState::False);

        let kept = target.merge_with(&source, MergeStrategy::IfAbsentOnTarget, Merges::all());
        assert_eq!(kept.decoration(Decoration::Bold), TriState::True);

        let overridden = target.merge_with(&source, MergeStrategy::Always, Merges::all());
        assert_eq!(overridden.decoration(Decoration::Bold), TriState::False);
    }

    #[test]
    fn test_merge_respects_parts() {
        let target = Style::empty().with_color(NamedTextColor::Red);
        let source = sample();
        let merged = target.merge_with(&source, MergeStrategy::Always, Merges::DECORATIONS);
        assert_eq!(merged.color(), Some(NamedTextColor::Red.into()));
        assert!(merged.has_decoration(Decoration::Bold));
        assert_eq!(merged.insertion(), None);
        assert_eq!(merged.click_event(), None);
    }

    #[test]
    fn test_never_is_noop() {
        let target = Style::empty().with_color(NamedTextColor::Red);
        assert_eq!(target.merge_with(&sample(), MergeStrategy::Never, Merges::all()), target);
    }

    #[test]
    fn test_not_set_never_overrides() {
        let target = Style::empty().with_decoration(Decoration::Italic, TriState::False);
        let merged = target.merge(&Style::empty().with_color(TextColor::new(0x123456)));
        assert_eq!(merged.decoration(Decoration::Italic), TriState::False);
        assert_eq!(merged.color(), Some(TextColor::new(0x123456)));
    }

    #[test]
    fn test_unmerge_inverts_merge() {
        let parent = sample();
        let extra = Style::empty()
            .with_color(NamedTextColor::Aqua)
            .with_decoration(Decoration::Bold, TriState::True)
            .with_decoration(Decoration::Italic, TriState::True);
        let child = parent.merge(&extra);
        let diff = child.unmerge(&parent);

        // Bold was already set on the parent, so only color and italic remain.
        let expected = Style::empty()
            .with_color(NamedTextColor::Aqua)
            .with_decoration(Decoration::Italic, TriState::True);
        assert_eq!(diff, expected);
    }

    #[test]
    fn test_unmerge_against_empty_is_identity() {
        let style = sample();
        assert_eq!(style.unmerge(&Style::empty()), style);
        assert!(style.unmerge(&style).is_empty());
    }
}

//! Immutable bundles of visual and interactive text attributes.
//!
//! A [`Style`] never changes once built. Every `with_*` derivation returns a
//! new value and leaves the receiver untouched; [`StyleBuilder`] is the
//! mutable staging object used to assemble one.

pub mod decoration;
pub mod merge;

pub use decoration::{Decoration, DecorationAndState, DecorationMap};
pub use merge::{MergeStrategy, Merges};

use crate::event::{ClickEvent, HoverEvent};
use quill_types::{Key, NamedTextColor, ShadowColor, TextColor, TriState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    color: Option<TextColor>,
    shadow_color: Option<ShadowColor>,
    font: Option<Key>,
    decorations: DecorationMap,
    click_event: Option<ClickEvent>,
    hover_event: Option<HoverEvent>,
    insertion: Option<String>,
}

impl Style {
    /// The canonical style with every attribute unset.
    pub const EMPTY: Style = Style {
        color: None,
        shadow_color: None,
        font: None,
        decorations: DecorationMap::EMPTY,
        click_event: None,
        hover_event: None,
        insertion: None,
    };

    pub const fn empty() -> Style {
        Style::EMPTY
    }

    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder { style: self.clone() }
    }

    /// Builds a style by applying each applicable in order.
    pub fn style_of(applicables: &[&dyn StyleBuilderApplicable]) -> Style {
        let mut builder = Style::builder();
        for applicable in applicables {
            builder.apply(*applicable);
        }
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.shadow_color.is_none()
            && self.font.is_none()
            && self.decorations.is_empty()
            && self.click_event.is_none()
            && self.hover_event.is_none()
            && self.insertion.is_none()
    }

    /// Copies this style into a builder seeded according to `strategy`, runs
    /// `consumer` on it and returns the result.
    pub fn edit_with(
        &self,
        strategy: MergeStrategy,
        consumer: impl FnOnce(&mut StyleBuilder),
    ) -> Style {
        let mut builder = Style::builder();
        builder.merge_with(self, strategy, Merges::all());
        consumer(&mut builder);
        builder.build()
    }

    pub fn edit(&self, consumer: impl FnOnce(&mut StyleBuilder)) -> Style {
        self.edit_with(MergeStrategy::Always, consumer)
    }

    fn derive(&self, change: impl FnOnce(&mut Style)) -> Style {
        let mut style = self.clone();
        change(&mut style);
        style
    }

    // --- Color ---

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn with_color(&self, color: impl Into<Option<TextColor>>) -> Style {
        let color = color.into();
        self.derive(|s| s.color = color)
    }

    pub fn color_if_absent(&self, color: impl Into<Option<TextColor>>) -> Style {
        if self.color.is_some() {
            return self.clone();
        }
        self.with_color(color)
    }

    pub fn shadow_color(&self) -> Option<ShadowColor> {
        self.shadow_color
    }

    pub fn with_shadow_color(&self, shadow_color: impl Into<Option<ShadowColor>>) -> Style {
        let shadow_color = shadow_color.into();
        self.derive(|s| s.shadow_color = shadow_color)
    }

    pub fn shadow_color_if_absent(&self, shadow_color: impl Into<Option<ShadowColor>>) -> Style {
        if self.shadow_color.is_some() {
            return self.clone();
        }
        self.with_shadow_color(shadow_color)
    }

    // --- Font ---

    pub fn font(&self) -> Option<&Key> {
        self.font.as_ref()
    }

    pub fn with_font(&self, font: impl Into<Option<Key>>) -> Style {
        let font = font.into();
        self.derive(|s| s.font = font)
    }

    // --- Decorations ---

    pub fn decoration(&self, decoration: Decoration) -> TriState {
        self.decorations.get(decoration)
    }

    /// True only when the decoration is explicitly enabled.
    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.decorations.get(decoration) == TriState::True
    }

    pub fn decorations(&self) -> DecorationMap {
        self.decorations
    }

    pub fn decorate(&self, decoration: Decoration) -> Style {
        self.with_decoration(decoration, TriState::True)
    }

    pub fn with_decoration(&self, decoration: Decoration, state: impl Into<TriState>) -> Style {
        let state = state.into();
        self.derive(|s| s.decorations.set(decoration, state))
    }

    pub fn decoration_if_absent(
        &self,
        decoration: Decoration,
        state: impl Into<TriState>,
    ) -> Style {
        if self.decorations.get(decoration).is_set() {
            return self.clone();
        }
        self.with_decoration(decoration, state)
    }

    /// Sets each listed decoration; decorations not listed keep their state.
    pub fn with_decorations(
        &self,
        decorations: impl IntoIterator<Item = (Decoration, TriState)>,
    ) -> Style {
        self.derive(|s| {
            for (decoration, state) in decorations {
                s.decorations.set(decoration, state);
            }
        })
    }

    // --- Events ---

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    pub fn with_click_event(&self, event: impl Into<Option<ClickEvent>>) -> Style {
        let event = event.into();
        self.derive(|s| s.click_event = event)
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.hover_event.as_ref()
    }

    pub fn with_hover_event(&self, event: impl Into<Option<HoverEvent>>) -> Style {
        let event = event.into();
        self.derive(|s| s.hover_event = event)
    }

    // --- Insertion ---

    /// Text inserted into the chat input when the text is shift-clicked.
    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    pub fn with_insertion(&self, insertion: impl Into<Option<String>>) -> Style {
        let insertion = insertion.into();
        self.derive(|s| s.insertion = insertion)
    }

    /// True when the style carries a click event, hover event or insertion.
    pub fn is_interactive(&self) -> bool {
        self.click_event.is_some() || self.hover_event.is_some() || self.insertion.is_some()
    }
}

/// Mutable staging object for a [`Style`].
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    pub fn color(&mut self, color: impl Into<Option<TextColor>>) -> &mut Self {
        self.style.color = color.into();
        self
    }

    pub fn color_if_absent(&mut self, color: impl Into<Option<TextColor>>) -> &mut Self {
        if self.style.color.is_none() {
            self.style.color = color.into();
        }
        self
    }

    pub fn shadow_color(&mut self, shadow_color: impl Into<Option<ShadowColor>>) -> &mut Self {
        self.style.shadow_color = shadow_color.into();
        self
    }

    pub fn shadow_color_if_absent(
        &mut self,
        shadow_color: impl Into<Option<ShadowColor>>,
    ) -> &mut Self {
        if self.style.shadow_color.is_none() {
            self.style.shadow_color = shadow_color.into();
        }
        self
    }

    pub fn font(&mut self, font: impl Into<Option<Key>>) -> &mut Self {
        self.style.font = font.into();
        self
    }

    pub fn decorate(&mut self, decoration: Decoration) -> &mut Self {
        self.decoration(decoration, TriState::True)
    }

    pub fn decoration(&mut self, decoration: Decoration, state: impl Into<TriState>) -> &mut Self {
        self.style.decorations.set(decoration, state.into());
        self
    }

    pub fn decoration_if_absent(
        &mut self,
        decoration: Decoration,
        state: impl Into<TriState>,
    ) -> &mut Self {
        if !self.style.decorations.get(decoration).is_set() {
            self.style.decorations.set(decoration, state.into());
        }
        self
    }

    pub fn decorations(
        &mut self,
        decorations: impl IntoIterator<Item = (Decoration, TriState)>,
    ) -> &mut Self {
        for (decoration, state) in decorations {
            self.style.decorations.set(decoration, state);
        }
        self
    }

    pub fn click_event(&mut self, event: impl Into<Option<ClickEvent>>) -> &mut Self {
        self.style.click_event = event.into();
        self
    }

    pub fn hover_event(&mut self, event: impl Into<Option<HoverEvent>>) -> &mut Self {
        self.style.hover_event = event.into();
        self
    }

    pub fn insertion(&mut self, insertion: impl Into<Option<String>>) -> &mut Self {
        self.style.insertion = insertion.into();
        self
    }

    pub fn apply(&mut self, applicable: &dyn StyleBuilderApplicable) -> &mut Self {
        applicable.style_apply(self);
        self
    }

    /// Clears every attribute.
    pub fn reset(&mut self) -> &mut Self {
        self.style = Style::EMPTY;
        self
    }

    /// The style staged so far.
    pub fn current(&self) -> &Style {
        &self.style
    }

    pub fn build(&self) -> Style {
        self.style.clone()
    }
}

/// Something that can be applied to a [`StyleBuilder`].
pub trait StyleBuilderApplicable {
    fn style_apply(&self, builder: &mut StyleBuilder);
}

impl StyleBuilderApplicable for TextColor {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.color(*self);
    }
}

impl StyleBuilderApplicable for NamedTextColor {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.color(*self);
    }
}

impl StyleBuilderApplicable for ShadowColor {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.shadow_color(*self);
    }
}

impl StyleBuilderApplicable for Decoration {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.decorate(*self);
    }
}

impl StyleBuilderApplicable for DecorationAndState {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.decoration(self.decoration, self.state);
    }
}

impl StyleBuilderApplicable for ClickEvent {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.click_event(self.clone());
    }
}

impl StyleBuilderApplicable for HoverEvent {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.hover_event(self.clone());
    }
}

impl StyleBuilderApplicable for Style {
    fn style_apply(&self, builder: &mut StyleBuilder) {
        builder.merge(self);
    }
}

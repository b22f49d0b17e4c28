//! Per-variant builders for [`Component`].
//!
//! `ComponentBuilder<C>` is parameterized by the content payload it stages,
//! so each variant gets its own content setters while sharing the style and
//! children API.

use super::{
    Component, ComponentLike, Content, KeybindContent, NbtContent, ScoreContent, SelectorContent,
    TextContent, TranslatableContent, TranslationArgument, VirtualContent,
};
use crate::event::{ClickEvent, HoverEvent};
use crate::style::{Decoration, MergeStrategy, Merges, Style, StyleBuilder, StyleBuilderApplicable};
use quill_types::{BlockPos, Key, ShadowColor, TextColor, TriState};

#[derive(Debug, Clone)]
pub struct ComponentBuilder<C> {
    content: C,
    style: StyleBuilder,
    children: Vec<Component>,
}

impl<C: Into<Content> + Clone> ComponentBuilder<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            style: StyleBuilder::default(),
            children: Vec::new(),
        }
    }

    fn from_component(content: C, component: &Component) -> Self {
        Self {
            content,
            style: component.style().to_builder(),
            children: component.children().to_vec(),
        }
    }

    // --- Children ---

    pub fn append(mut self, component: impl ComponentLike) -> Self {
        self.children.push(component.as_component());
        self
    }

    pub fn append_all<I>(mut self, components: I) -> Self
    where
        I: IntoIterator,
        I::Item: ComponentLike,
    {
        self.children.extend(components.into_iter().map(|c| c.as_component()));
        self
    }

    pub fn append_newline(self) -> Self {
        self.append(Component::newline())
    }

    pub fn append_space(self) -> Self {
        self.append(Component::space())
    }

    /// Replaces the staged children.
    pub fn children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn staged_children(&self) -> &[Component] {
        &self.children
    }

    /// Maps each direct child.
    pub fn map_children(mut self, mut f: impl FnMut(&Component) -> Component) -> Self {
        self.children = self.children.iter().map(&mut f).collect();
        self
    }

    /// Maps every descendant in pre-order: a child is mapped first, then the
    /// children of the mapped result.
    pub fn map_children_deep(mut self, mut f: impl FnMut(&Component) -> Component) -> Self {
        self.children = self.children.iter().map(|c| map_deep(c, &mut f)).collect();
        self
    }

    // --- Style ---

    pub fn style(mut self, style: Style) -> Self {
        self.style = style.to_builder();
        self
    }

    pub fn style_with(mut self, consumer: impl FnOnce(&mut StyleBuilder)) -> Self {
        consumer(&mut self.style);
        self
    }

    pub fn color(mut self, color: impl Into<Option<TextColor>>) -> Self {
        self.style.color(color);
        self
    }

    pub fn color_if_absent(mut self, color: impl Into<Option<TextColor>>) -> Self {
        self.style.color_if_absent(color);
        self
    }

    pub fn shadow_color(mut self, shadow_color: impl Into<Option<ShadowColor>>) -> Self {
        self.style.shadow_color(shadow_color);
        self
    }

    pub fn font(mut self, font: impl Into<Option<Key>>) -> Self {
        self.style.font(font);
        self
    }

    pub fn decorate(mut self, decoration: Decoration) -> Self {
        self.style.decorate(decoration);
        self
    }

    pub fn decoration(mut self, decoration: Decoration, state: impl Into<TriState>) -> Self {
        self.style.decoration(decoration, state);
        self
    }

    pub fn click_event(mut self, event: impl Into<Option<ClickEvent>>) -> Self {
        self.style.click_event(event);
        self
    }

    pub fn hover_event(mut self, event: impl Into<Option<HoverEvent>>) -> Self {
        self.style.hover_event(event);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<Option<String>>) -> Self {
        self.style.insertion(insertion);
        self
    }

    pub fn apply(mut self, applicable: &dyn StyleBuilderApplicable) -> Self {
        self.style.apply(applicable);
        self
    }

    /// Merges the style of `that` into the staged style.
    pub fn merge_style(self, that: &Component) -> Self {
        self.merge_style_with(that, MergeStrategy::Always, Merges::all())
    }

    pub fn merge_style_with(
        mut self,
        that: &Component,
        strategy: MergeStrategy,
        parts: Merges,
    ) -> Self {
        self.style.merge_with(that.style(), strategy, parts);
        self
    }

    pub fn reset_style(mut self) -> Self {
        self.style.reset();
        self
    }

    /// Applies `consumer` to this builder's style and to the style of every
    /// descendant.
    pub fn apply_deep(self, consumer: impl Fn(&mut StyleBuilder)) -> Self {
        let mut this = self.style_with(&consumer);
        this.children = this
            .children
            .iter()
            .map(|c| {
                map_deep(c, &mut |node: &Component| node.with_style(node.style().edit(&consumer)))
            })
            .collect();
        this
    }

    pub fn build(self) -> Component {
        Component::from_parts(self.content, self.style.build(), self.children)
    }
}

fn map_deep(component: &Component, f: &mut impl FnMut(&Component) -> Component) -> Component {
    let mapped = f(component);
    if mapped.children().is_empty() {
        return mapped;
    }
    let children: Vec<Component> = mapped.children().iter().map(|c| map_deep(c, f)).collect();
    mapped.with_children(children)
}

impl<C: Into<Content> + Clone> ComponentLike for ComponentBuilder<C> {
    fn as_component(&self) -> Component {
        self.clone().build()
    }
}

impl<C: Into<Content> + Clone> From<ComponentBuilder<C>> for Component {
    fn from(builder: ComponentBuilder<C>) -> Self {
        builder.build()
    }
}

// --- Per-variant content setters ---

impl ComponentBuilder<TextContent> {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content.content = content.into();
        self
    }

    pub fn content_str(&self) -> &str {
        &self.content.content
    }
}

impl ComponentBuilder<TranslatableContent> {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.content.key = key.into();
        self
    }

    pub fn argument(mut self, argument: impl Into<TranslationArgument>) -> Self {
        self.content.arguments.push(argument.into());
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = TranslationArgument>) -> Self {
        self.content.arguments = arguments.into_iter().collect();
        self
    }

    pub fn fallback(mut self, fallback: impl Into<Option<String>>) -> Self {
        self.content.fallback = fallback.into();
        self
    }
}

impl ComponentBuilder<ScoreContent> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.content.name = name.into();
        self
    }

    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.content.objective = objective.into();
        self
    }
}

impl ComponentBuilder<SelectorContent> {
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.content.pattern = pattern.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<Option<Component>>) -> Self {
        self.content.separator = separator.into();
        self
    }
}

impl ComponentBuilder<KeybindContent> {
    pub fn keybind(mut self, keybind: impl Into<String>) -> Self {
        self.content.keybind = keybind.into();
        self
    }
}

impl<S: Clone> ComponentBuilder<NbtContent<S>>
where
    NbtContent<S>: Into<Content>,
{
    pub fn nbt_path(mut self, nbt_path: impl Into<String>) -> Self {
        self.content.nbt_path = nbt_path.into();
        self
    }

    pub fn interpret(mut self, interpret: bool) -> Self {
        self.content.interpret = interpret;
        self
    }

    pub fn separator(mut self, separator: impl Into<Option<Component>>) -> Self {
        self.content.separator = separator.into();
        self
    }

    pub fn source(mut self, source: S) -> Self {
        self.content.source = source;
        self
    }
}

// --- Entry points ---

impl Component {
    pub fn text_builder() -> ComponentBuilder<TextContent> {
        ComponentBuilder::new(TextContent::default())
    }

    pub fn translatable_builder(key: impl Into<String>) -> ComponentBuilder<TranslatableContent> {
        ComponentBuilder::new(TranslatableContent {
            key: key.into(),
            arguments: Vec::new(),
            fallback: None,
        })
    }

    pub fn score_builder(
        name: impl Into<String>,
        objective: impl Into<String>,
    ) -> ComponentBuilder<ScoreContent> {
        ComponentBuilder::new(ScoreContent {
            name: name.into(),
            objective: objective.into(),
        })
    }

    pub fn selector_builder(pattern: impl Into<String>) -> ComponentBuilder<SelectorContent> {
        ComponentBuilder::new(SelectorContent {
            pattern: pattern.into(),
            separator: None,
        })
    }

    pub fn keybind_builder(keybind: impl Into<String>) -> ComponentBuilder<KeybindContent> {
        ComponentBuilder::new(KeybindContent {
            keybind: keybind.into(),
        })
    }

    pub fn block_nbt_builder(pos: BlockPos) -> ComponentBuilder<NbtContent<BlockPos>> {
        ComponentBuilder::new(NbtContent::new("", pos))
    }

    pub fn entity_nbt_builder(selector: impl Into<String>) -> ComponentBuilder<NbtContent<String>> {
        ComponentBuilder::new(NbtContent::new("", selector.into()))
    }

    pub fn storage_nbt_builder(storage: Key) -> ComponentBuilder<NbtContent<Key>> {
        ComponentBuilder::new(NbtContent::new("", storage))
    }

    /// A builder for this component's concrete variant, seeded with its
    /// content, style and children.
    pub fn to_builder(&self) -> AnyComponentBuilder {
        match self.content() {
            Content::Text(c) => {
                AnyComponentBuilder::Text(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::Translatable(c) => {
                AnyComponentBuilder::Translatable(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::Score(c) => {
                AnyComponentBuilder::Score(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::Selector(c) => {
                AnyComponentBuilder::Selector(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::Keybind(c) => {
                AnyComponentBuilder::Keybind(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::BlockNbt(c) => {
                AnyComponentBuilder::BlockNbt(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::EntityNbt(c) => {
                AnyComponentBuilder::EntityNbt(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::StorageNbt(c) => {
                AnyComponentBuilder::StorageNbt(ComponentBuilder::from_component(c.clone(), self))
            }
            Content::Virtual(c) => {
                AnyComponentBuilder::Virtual(ComponentBuilder::from_component(c.clone(), self))
            }
        }
    }
}

/// A builder for any content variant, as returned by [`Component::to_builder`].
#[derive(Debug, Clone)]
pub enum AnyComponentBuilder {
    Text(ComponentBuilder<TextContent>),
    Translatable(ComponentBuilder<TranslatableContent>),
    Score(ComponentBuilder<ScoreContent>),
    Selector(ComponentBuilder<SelectorContent>),
    Keybind(ComponentBuilder<KeybindContent>),
    BlockNbt(ComponentBuilder<NbtContent<BlockPos>>),
    EntityNbt(ComponentBuilder<NbtContent<String>>),
    StorageNbt(ComponentBuilder<NbtContent<Key>>),
    Virtual(ComponentBuilder<VirtualContent>),
}

impl AnyComponentBuilder {
    pub fn build(self) -> Component {
        match self {
            AnyComponentBuilder::Text(b) => b.build(),
            AnyComponentBuilder::Translatable(b) => b.build(),
            AnyComponentBuilder::Score(b) => b.build(),
            AnyComponentBuilder::Selector(b) => b.build(),
            AnyComponentBuilder::Keybind(b) => b.build(),
            AnyComponentBuilder::BlockNbt(b) => b.build(),
            AnyComponentBuilder::EntityNbt(b) => b.build(),
            AnyComponentBuilder::StorageNbt(b) => b.build(),
            AnyComponentBuilder::Virtual(b) => b.build(),
        }
    }

    pub fn into_text(self) -> Option<ComponentBuilder<TextContent>> {
        match self {
            AnyComponentBuilder::Text(b) => Some(b),
            _ => None,
        }
    }
}

//! The immutable component tree.
//!
//! A [`Component`] is a shared node of content, style and ordered children.
//! Cloning is a reference-count bump; every edit builds a new node that
//! shares the untouched subtrees of the old one.

pub mod builder;
mod compact;
pub mod content;
pub mod iter;

pub use builder::{AnyComponentBuilder, ComponentBuilder};
pub use content::{
    Content, ContentKind, KeybindContent, NbtContent, Number, ScoreContent, SelectorContent,
    TextContent,
    TranslatableContent, TranslationArgument, VirtualComponentRenderer, VirtualContent,
};
pub use iter::{ComponentIter, ComponentIteratorFlags, ComponentIteratorKind};

use crate::event::{ClickEvent, HoverEvent};
use crate::flatten::ComponentFlattener;
use crate::style::{Decoration, MergeStrategy, Merges, Style, StyleBuilder};
use quill_types::{BlockPos, Key, ShadowColor, TextColor, TriState};
use std::fmt;
use std::sync::{Arc, LazyLock};

static EMPTY: LazyLock<Component> = LazyLock::new(|| Component::text(""));
static NEWLINE: LazyLock<Component> = LazyLock::new(|| Component::text("\n"));
static SPACE: LazyLock<Component> = LazyLock::new(|| Component::text(" "));

struct ComponentInner {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

/// An immutable node in a display-text tree.
#[derive(Clone)]
pub struct Component(Arc<ComponentInner>);

impl Component {
    pub fn from_parts(content: impl Into<Content>, style: Style, children: Vec<Component>) -> Self {
        Component(Arc::new(ComponentInner {
            content: content.into(),
            style,
            children,
        }))
    }

    // --- Constructors ---

    /// An empty text component.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    pub fn newline() -> Self {
        NEWLINE.clone()
    }

    pub fn space() -> Self {
        SPACE.clone()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::text_styled(content, Style::EMPTY)
    }

    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::from_parts(
            TextContent {
                content: content.into(),
            },
            style,
            Vec::new(),
        )
    }

    pub fn translatable(
        key: impl Into<String>,
        arguments: impl IntoIterator<Item = TranslationArgument>,
    ) -> Self {
        Self::from_parts(
            TranslatableContent {
                key: key.into(),
                arguments: arguments.into_iter().collect(),
                fallback: None,
            },
            Style::EMPTY,
            Vec::new(),
        )
    }

    pub fn translatable_with_fallback(
        key: impl Into<String>,
        fallback: impl Into<String>,
        arguments: impl IntoIterator<Item = TranslationArgument>,
    ) -> Self {
        Self::from_parts(
            TranslatableContent {
                key: key.into(),
                arguments: arguments.into_iter().collect(),
                fallback: Some(fallback.into()),
            },
            Style::EMPTY,
            Vec::new(),
        )
    }

    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Self::from_parts(
            ScoreContent {
                name: name.into(),
                objective: objective.into(),
            },
            Style::EMPTY,
            Vec::new(),
        )
    }

    pub fn selector(pattern: impl Into<String>) -> Self {
        Self::from_parts(
            SelectorContent {
                pattern: pattern.into(),
                separator: None,
            },
            Style::EMPTY,
            Vec::new(),
        )
    }

    pub fn keybind(keybind: impl Into<String>) -> Self {
        Self::from_parts(
            KeybindContent {
                keybind: keybind.into(),
            },
            Style::EMPTY,
            Vec::new(),
        )
    }

    pub fn block_nbt(nbt_path: impl Into<String>, pos: BlockPos) -> Self {
        Self::from_parts(NbtContent::new(nbt_path, pos), Style::EMPTY, Vec::new())
    }

    pub fn entity_nbt(nbt_path: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::from_parts(NbtContent::new(nbt_path, selector.into()), Style::EMPTY, Vec::new())
    }

    pub fn storage_nbt(nbt_path: impl Into<String>, storage: Key) -> Self {
        Self::from_parts(NbtContent::new(nbt_path, storage), Style::EMPTY, Vec::new())
    }

    pub fn virtual_component(renderer: Arc<dyn VirtualComponentRenderer>) -> Self {
        Self::from_parts(VirtualContent::new(renderer), Style::EMPTY, Vec::new())
    }

    // --- Accessors ---

    pub fn content(&self) -> &Content {
        &self.0.content
    }

    pub fn kind(&self) -> ContentKind {
        self.0.content.kind()
    }

    pub fn style(&self) -> &Style {
        &self.0.style
    }

    pub fn children(&self) -> &[Component] {
        &self.0.children
    }

    /// The text of a text component.
    pub fn text_content(&self) -> Option<&str> {
        self.0.content.as_text().map(|t| t.content.as_str())
    }

    /// The key of a translatable component.
    pub fn translation_key(&self) -> Option<&str> {
        self.0.content.as_translatable().map(|t| t.key.as_str())
    }

    pub fn has_styling(&self) -> bool {
        !self.0.style.is_empty()
    }

    /// True when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // --- Structural edits ---

    pub fn with_content(&self, content: impl Into<Content>) -> Component {
        Self::from_parts(content, self.0.style.clone(), self.0.children.clone())
    }

    /// Replaces the children with a copy of `children`.
    pub fn with_children(&self, children: impl IntoIterator<Item = Component>) -> Component {
        Self::from_parts(
            self.0.content.clone(),
            self.0.style.clone(),
            children.into_iter().collect(),
        )
    }

    pub fn append(&self, component: impl ComponentLike) -> Component {
        let mut children = self.0.children.clone();
        children.push(component.as_component());
        Self::from_parts(self.0.content.clone(), self.0.style.clone(), children)
    }

    pub fn append_newline(&self) -> Component {
        self.append(Component::newline())
    }

    pub fn append_space(&self) -> Component {
        self.append(Component::space())
    }

    // --- Style ---

    pub fn with_style(&self, style: Style) -> Component {
        if style == self.0.style {
            return self.clone();
        }
        Self::from_parts(self.0.content.clone(), style, self.0.children.clone())
    }

    /// Edits the style through a builder seeded with the current style.
    pub fn style_with(&self, consumer: impl FnOnce(&mut StyleBuilder)) -> Component {
        self.style_with_strategy(consumer, MergeStrategy::Always)
    }

    pub fn style_with_strategy(
        &self,
        consumer: impl FnOnce(&mut StyleBuilder),
        strategy: MergeStrategy,
    ) -> Component {
        self.with_style(self.0.style.edit_with(strategy, consumer))
    }

    /// Merges the style of `that` into this component's style.
    pub fn merge_style(&self, that: &Component) -> Component {
        self.merge_style_parts(that, Merges::all())
    }

    pub fn merge_style_parts(&self, that: &Component, parts: Merges) -> Component {
        self.with_style(self.0.style.merge_with(&that.0.style, MergeStrategy::Always, parts))
    }

    pub fn color(&self) -> Option<TextColor> {
        self.0.style.color()
    }

    pub fn with_color(&self, color: impl Into<Option<TextColor>>) -> Component {
        self.with_style(self.0.style.with_color(color))
    }

    pub fn color_if_absent(&self, color: impl Into<Option<TextColor>>) -> Component {
        self.with_style(self.0.style.color_if_absent(color))
    }

    pub fn shadow_color(&self) -> Option<ShadowColor> {
        self.0.style.shadow_color()
    }

    pub fn with_shadow_color(&self, shadow_color: impl Into<Option<ShadowColor>>) -> Component {
        self.with_style(self.0.style.with_shadow_color(shadow_color))
    }

    pub fn font(&self) -> Option<&Key> {
        self.0.style.font()
    }

    pub fn with_font(&self, font: impl Into<Option<Key>>) -> Component {
        self.with_style(self.0.style.with_font(font))
    }

    pub fn decoration(&self, decoration: Decoration) -> TriState {
        self.0.style.decoration(decoration)
    }

    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.0.style.has_decoration(decoration)
    }

    pub fn decorate(&self, decoration: Decoration) -> Component {
        self.with_style(self.0.style.decorate(decoration))
    }

    pub fn with_decoration(&self, decoration: Decoration, state: impl Into<TriState>) -> Component {
        self.with_style(self.0.style.with_decoration(decoration, state))
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.0.style.click_event()
    }

    pub fn with_click_event(&self, event: impl Into<Option<ClickEvent>>) -> Component {
        self.with_style(self.0.style.with_click_event(event))
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.0.style.hover_event()
    }

    pub fn with_hover_event(&self, event: impl Into<Option<HoverEvent>>) -> Component {
        self.with_style(self.0.style.with_hover_event(event))
    }

    pub fn insertion(&self) -> Option<&str> {
        self.0.style.insertion()
    }

    pub fn with_insertion(&self, insertion: impl Into<Option<String>>) -> Component {
        self.with_style(self.0.style.with_insertion(insertion))
    }

    // --- Traversal ---

    pub fn iter(
        &self,
        kind: ComponentIteratorKind,
        flags: ComponentIteratorFlags,
    ) -> ComponentIter {
        ComponentIter::new(self.clone(), kind, flags)
    }

    /// Depth-first traversal including hover text and entity names.
    pub fn iter_depth_first(&self) -> ComponentIter {
        self.iter(ComponentIteratorKind::DepthFirst, ComponentIteratorFlags::DEFAULT)
    }

    /// True when `other` occurs in this tree, hover text included.
    pub fn contains(&self, other: &Component) -> bool {
        self.iter(
            ComponentIteratorKind::DepthFirst,
            ComponentIteratorFlags::INCLUDE_HOVER_SHOW_TEXT_COMPONENT,
        )
        .any(|c| c.ptr_eq(other) || c == *other)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.content == other.0.content
                && self.0.style == other.0.style
                && self.0.children == other.0.children)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Component");
        s.field("content", &self.0.content);
        if !self.0.style.is_empty() {
            s.field("style", &self.0.style);
        }
        if !self.0.children.is_empty() {
            s.field("children", &self.0.children);
        }
        s.finish()
    }
}

/// Plain text as produced by [`ComponentFlattener::basic`].
impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ComponentFlattener::basic().flatten_to_string(self))
    }
}

impl Default for Component {
    fn default() -> Self {
        Component::empty()
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}

/// Anything that can be turned into a [`Component`].
pub trait ComponentLike {
    fn as_component(&self) -> Component;
}

impl ComponentLike for Component {
    fn as_component(&self) -> Component {
        self.clone()
    }
}

impl ComponentLike for str {
    fn as_component(&self) -> Component {
        Component::text(self)
    }
}

impl ComponentLike for String {
    fn as_component(&self) -> Component {
        Component::text(self.as_str())
    }
}

impl ComponentLike for TranslationArgument {
    fn as_component(&self) -> Component {
        TranslationArgument::as_component(self)
    }
}

impl<T: ComponentLike + ?Sized> ComponentLike for &T {
    fn as_component(&self) -> Component {
        (**self).as_component()
    }
}

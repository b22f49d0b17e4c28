//! The closed set of content variants a [`Component`] can hold.

use super::Component;
use quill_types::{BlockPos, Key};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Tag of a [`Content`] variant; the key of flattener mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Translatable,
    Score,
    Selector,
    Keybind,
    BlockNbt,
    EntityNbt,
    StorageNbt,
    Virtual,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        ContentKind::Text,
        ContentKind::Translatable,
        ContentKind::Score,
        ContentKind::Selector,
        ContentKind::Keybind,
        ContentKind::BlockNbt,
        ContentKind::EntityNbt,
        ContentKind::StorageNbt,
        ContentKind::Virtual,
    ];

    pub const fn is_nbt(self) -> bool {
        matches!(
            self,
            ContentKind::BlockNbt | ContentKind::EntityNbt | ContentKind::StorageNbt
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatableContent {
    pub key: String,
    pub arguments: Vec<TranslationArgument>,
    pub fallback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreContent {
    pub name: String,
    pub objective: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorContent {
    pub pattern: String,
    pub separator: Option<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindContent {
    pub keybind: String,
}

/// NBT lookup shared by the block, entity and storage variants; `S` is the
/// source the path is resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtContent<S> {
    pub nbt_path: String,
    pub interpret: bool,
    pub separator: Option<Component>,
    pub source: S,
}

impl<S> NbtContent<S> {
    pub fn new(nbt_path: impl Into<String>, source: S) -> Self {
        Self {
            nbt_path: nbt_path.into(),
            interpret: false,
            separator: None,
            source,
        }
    }
}

/// Produces the component a virtual node stands for.
pub trait VirtualComponentRenderer: Send + Sync {
    fn apply(&self) -> Component;

    /// Plain text used when the renderer is not consulted.
    fn fallback_string(&self) -> String {
        String::new()
    }
}

/// A component rendered lazily; equality is renderer identity.
#[derive(Clone)]
pub struct VirtualContent {
    renderer: Arc<dyn VirtualComponentRenderer>,
}

impl VirtualContent {
    pub fn new(renderer: Arc<dyn VirtualComponentRenderer>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &Arc<dyn VirtualComponentRenderer> {
        &self.renderer
    }
}

impl PartialEq for VirtualContent {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.renderer, &other.renderer)
    }
}

impl fmt::Debug for VirtualContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualContent")
            .field("fallback", &self.renderer.fallback_string())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(TextContent),
    Translatable(TranslatableContent),
    Score(ScoreContent),
    Selector(SelectorContent),
    Keybind(KeybindContent),
    BlockNbt(NbtContent<BlockPos>),
    EntityNbt(NbtContent<String>),
    StorageNbt(NbtContent<Key>),
    Virtual(VirtualContent),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Text(_) => ContentKind::Text,
            Content::Translatable(_) => ContentKind::Translatable,
            Content::Score(_) => ContentKind::Score,
            Content::Selector(_) => ContentKind::Selector,
            Content::Keybind(_) => ContentKind::Keybind,
            Content::BlockNbt(_) => ContentKind::BlockNbt,
            Content::EntityNbt(_) => ContentKind::EntityNbt,
            Content::StorageNbt(_) => ContentKind::StorageNbt,
            Content::Virtual(_) => ContentKind::Virtual,
        }
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            Content::Text(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_translatable(&self) -> Option<&TranslatableContent> {
        match self {
            Content::Translatable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_score(&self) -> Option<&ScoreContent> {
        match self {
            Content::Score(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_selector(&self) -> Option<&SelectorContent> {
        match self {
            Content::Selector(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_keybind(&self) -> Option<&KeybindContent> {
        match self {
            Content::Keybind(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_virtual(&self) -> Option<&VirtualContent> {
        match self {
            Content::Virtual(c) => Some(c),
            _ => None,
        }
    }

    /// The NBT path of any of the three NBT variants.
    pub fn nbt_path(&self) -> Option<&str> {
        match self {
            Content::BlockNbt(c) => Some(&c.nbt_path),
            Content::EntityNbt(c) => Some(&c.nbt_path),
            Content::StorageNbt(c) => Some(&c.nbt_path),
            _ => None,
        }
    }

    pub(crate) fn is_empty_text(&self) -> bool {
        matches!(self, Content::Text(t) if t.content.is_empty())
    }
}

macro_rules! content_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(content: $ty) -> Self {
                    Content::$variant(content)
                }
            }
        )*
    };
}

content_from!(
    Text(TextContent),
    Translatable(TranslatableContent),
    Score(ScoreContent),
    Selector(SelectorContent),
    Keybind(KeybindContent),
    BlockNbt(NbtContent<BlockPos>),
    EntityNbt(NbtContent<String>),
    StorageNbt(NbtContent<Key>),
    Virtual(VirtualContent),
);

/// A numeric translation argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A value substituted into a translatable component's placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationArgument {
    Bool(bool),
    Numeric(Number),
    Component(Component),
}

impl TranslationArgument {
    /// The argument as a component; primitives become plain text.
    pub fn as_component(&self) -> Component {
        match self {
            TranslationArgument::Bool(b) => Component::text(b.to_string()),
            TranslationArgument::Numeric(n) => Component::text(n.to_string()),
            TranslationArgument::Component(c) => c.clone(),
        }
    }

    pub fn component(&self) -> Option<&Component> {
        match self {
            TranslationArgument::Component(c) => Some(c),
            _ => None,
        }
    }
}

impl From<bool> for TranslationArgument {
    fn from(value: bool) -> Self {
        TranslationArgument::Bool(value)
    }
}

impl From<i32> for TranslationArgument {
    fn from(value: i32) -> Self {
        TranslationArgument::Numeric(Number::Int(value.into()))
    }
}

impl From<i64> for TranslationArgument {
    fn from(value: i64) -> Self {
        TranslationArgument::Numeric(Number::Int(value))
    }
}

impl From<f64> for TranslationArgument {
    fn from(value: f64) -> Self {
        TranslationArgument::Numeric(Number::Float(value))
    }
}

impl From<Component> for TranslationArgument {
    fn from(value: Component) -> Self {
        TranslationArgument::Component(value)
    }
}

impl From<&str> for TranslationArgument {
    fn from(value: &str) -> Self {
        TranslationArgument::Component(Component::text(value))
    }
}

impl From<String> for TranslationArgument {
    fn from(value: String) -> Self {
        TranslationArgument::Component(Component::text(value))
    }
}

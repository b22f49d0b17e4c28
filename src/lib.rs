//! Immutable styled text components.
//!
//! `quill` re-exports the leaf value types of [`quill_types`] and the
//! component model of [`quill_text`]. Most code only needs the [`prelude`].

pub use quill_text as text;
pub use quill_types as types;

pub use quill_text::{
    ClickEvent, Component, ComponentBuilder, ComponentFlattener, ComponentLike, ContentKind,
    Decoration, FlattenerListener, HoverEvent, JoinConfiguration, MAX_EXPANSION_DEPTH,
    MergeStrategy, Merges, PatternReplacementResult, Style, StyleBuilder, TextError,
    TextReplacementConfig, TranslatableRenderer, TranslationArgument, TranslationRegistry,
    Translator,
};
pub use quill_types::{
    BlockPos, Key, NamedTextColor, ParseError, ShadowColor, TextColor, TriState,
};

pub mod prelude {
    pub use quill_text::component::{ComponentIteratorFlags, ComponentIteratorKind};
    pub use quill_text::{
        ClickEvent, Component, ComponentFlattener, ComponentLike, Decoration, HoverEvent,
        JoinConfiguration, MergeStrategy, Merges, Style, StyleBuilderApplicable,
        TextReplacementConfig, TranslationArgument,
    };
    pub use quill_types::{Key, NamedTextColor, ShadowColor, TextColor, TriState};
}

pub mod component;
pub mod error;
pub mod event;
pub mod flatten;
pub mod join;
pub mod replace;
pub mod style;
pub mod translation;

pub use component::{
    AnyComponentBuilder, Component, ComponentBuilder, ComponentIter, ComponentIteratorFlags,
    ComponentIteratorKind, ComponentLike, Content, ContentKind, TranslationArgument,
    VirtualComponentRenderer,
};
pub use error::TextError;
pub use event::{ClickEvent, HoverAction, HoverEvent, ShowEntity, ShowItem};
pub use flatten::{
    ComponentFlattener, ComponentFlattenerBuilder, FlattenerListener, MAX_EXPANSION_DEPTH,
};
pub use join::{JoinConfiguration, JoinConfigurationBuilder};
pub use replace::{
    PatternReplacementResult, TextReplacementConfig, TextReplacementConfigBuilder,
};
pub use style::{
    Decoration, DecorationAndState, DecorationMap, MergeStrategy, Merges, Style, StyleBuilder,
    StyleBuilderApplicable,
};
pub use translation::{MessageFormat, TranslatableRenderer, TranslationRegistry, Translator};

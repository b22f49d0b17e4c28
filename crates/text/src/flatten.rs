//! Linearizes a component tree into text through a listener.
//!
//! Every node is announced with the style it resolves to (its own style merged
//! over the styles of its ancestors), then its content is mapped to a string
//! by the handler registered for its [`ContentKind`].

use crate::component::{Component, Content, ContentKind};
use crate::error::{Result, TextError};
use crate::style::Style;
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::sync::{Arc, LazyLock};

/// Receives the output of [`ComponentFlattener::flatten`].
pub trait FlattenerListener {
    /// Called before a node's content with its resolved style.
    fn push_style(&mut self, _style: &Style) {}

    fn component(&mut self, text: &str);

    /// Called after a node's content and children with the style passed to
    /// the matching `push_style`.
    fn pop_style(&mut self, _style: &Style) {}

    /// Polled between nodes; returning `false` ends the walk.
    fn should_continue(&self) -> bool {
        true
    }
}

impl FlattenerListener for String {
    fn component(&mut self, text: &str) {
        self.push_str(text);
    }
}

type SimpleMapper = Arc<dyn Fn(&Component) -> String + Send + Sync>;
type ComplexMapper = Arc<dyn Fn(&Component, &mut dyn FnMut(Component)) + Send + Sync>;

#[derive(Clone)]
enum Handler {
    Simple(SimpleMapper),
    /// Expands a node into components that are flattened in its place.
    Complex(ComplexMapper),
}

static BASIC: LazyLock<ComponentFlattener> = LazyLock::new(|| {
    ComponentFlattener::builder()
        .mapper(ContentKind::Text, |c| c.text_content().unwrap_or_default().to_string())
        .mapper(ContentKind::Translatable, |c| match c.content() {
            Content::Translatable(t) => t.fallback.clone().unwrap_or_else(|| t.key.clone()),
            _ => String::new(),
        })
        .mapper(ContentKind::Keybind, |c| match c.content() {
            Content::Keybind(k) => k.keybind.clone(),
            _ => String::new(),
        })
        .mapper(ContentKind::Score, |_| String::new())
        .mapper(ContentKind::Selector, |c| match c.content() {
            Content::Selector(s) => s.pattern.clone(),
            _ => String::new(),
        })
        .mapper(ContentKind::BlockNbt, nbt_path)
        .mapper(ContentKind::EntityNbt, nbt_path)
        .mapper(ContentKind::StorageNbt, nbt_path)
        .mapper(ContentKind::Virtual, |c| match c.content() {
            Content::Virtual(v) => v.renderer().fallback_string(),
            _ => String::new(),
        })
        .finish()
});

static TEXT_ONLY: LazyLock<ComponentFlattener> = LazyLock::new(|| {
    ComponentFlattener::builder()
        .mapper(ContentKind::Text, |c| c.text_content().unwrap_or_default().to_string())
        .finish()
});

fn nbt_path(component: &Component) -> String {
    component.content().nbt_path().unwrap_or_default().to_string()
}

/// Expansion depth at which complex mappers stop when no nesting limit is set.
pub const MAX_EXPANSION_DEPTH: usize = 512;

/// One pending unit of the flattening walk.
enum Step {
    Enter {
        component: Component,
        context: Rc<Style>,
        depth: usize,
    },
    Exit(Rc<Style>),
}

#[derive(Clone, Default)]
pub struct ComponentFlattener {
    mappers: HashMap<ContentKind, Handler>,
    unknown_mapper: Option<SimpleMapper>,
    nesting_limit: Option<NonZeroUsize>,
}

impl ComponentFlattener {
    pub fn builder() -> ComponentFlattenerBuilder {
        ComponentFlattenerBuilder::default()
    }

    /// Maps every content kind to its most natural plain-text form.
    pub fn basic() -> &'static ComponentFlattener {
        &BASIC
    }

    /// Emits the content of text nodes only.
    pub fn text_only() -> &'static ComponentFlattener {
        &TEXT_ONLY
    }

    pub fn to_builder(&self) -> ComponentFlattenerBuilder {
        ComponentFlattenerBuilder {
            mappers: self.mappers.clone(),
            unknown_mapper: self.unknown_mapper.clone(),
            nesting_limit: self.nesting_limit.map(NonZeroUsize::get),
        }
    }

    pub fn nesting_limit(&self) -> Option<NonZeroUsize> {
        self.nesting_limit
    }

    /// Walks `component` depth-first, feeding `listener`.
    ///
    /// The walk keeps its own stack, so tree depth is bounded by memory only.
    /// Complex expansion stops at the nesting limit, or at
    /// [`MAX_EXPANSION_DEPTH`] when none is set.
    pub fn flatten(&self, component: &Component, listener: &mut dyn FlattenerListener) {
        let limit = self.nesting_limit.map_or(MAX_EXPANSION_DEPTH, NonZeroUsize::get);
        let mut steps = vec![Step::Enter {
            component: component.clone(),
            context: Rc::new(Style::EMPTY),
            depth: 0,
        }];

        while let Some(step) = steps.pop() {
            match step {
                Step::Exit(resolved) => listener.pop_style(&resolved),
                Step::Enter { .. } if !listener.should_continue() => {
                    // Only the pops of nodes already entered still run.
                    for pending in steps.drain(..).rev() {
                        if let Step::Exit(resolved) = pending {
                            listener.pop_style(&resolved);
                        }
                    }
                }
                Step::Enter {
                    component,
                    context,
                    depth,
                } => {
                    let resolved = Rc::new(context.merge(component.style()));
                    listener.push_style(&resolved);
                    let nested = self.map_content(&component, listener, depth, limit);

                    steps.push(Step::Exit(Rc::clone(&resolved)));
                    for child in component.children().iter().rev() {
                        steps.push(Step::Enter {
                            component: child.clone(),
                            context: Rc::clone(&resolved),
                            depth,
                        });
                    }
                    for expanded in nested.into_iter().rev() {
                        steps.push(Step::Enter {
                            component: expanded,
                            context: Rc::clone(&resolved),
                            depth: depth + 1,
                        });
                    }
                }
            }
        }
    }

    pub fn flatten_to_string(&self, component: &Component) -> String {
        let mut out = String::new();
        self.flatten(component, &mut out);
        out
    }

    /// Emits the text of simple and unknown kinds; returns the expansion of
    /// complex kinds.
    fn map_content(
        &self,
        component: &Component,
        listener: &mut dyn FlattenerListener,
        depth: usize,
        limit: usize,
    ) -> Vec<Component> {
        match self.mappers.get(&component.kind()) {
            Some(Handler::Simple(mapper)) => listener.component(&mapper(component)),
            Some(Handler::Complex(_)) if depth >= limit => {
                log::debug!(
                    "Nesting limit {} reached, skipping expansion of {:?} content",
                    limit,
                    component.kind()
                );
            }
            Some(Handler::Complex(mapper)) => {
                let mut nested = Vec::new();
                mapper(component, &mut |c| nested.push(c));
                return nested;
            }
            None => {
                if let Some(mapper) = &self.unknown_mapper {
                    listener.component(&mapper(component));
                }
            }
        }
        Vec::new()
    }
}

impl fmt::Debug for ComponentFlattener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.mappers.keys().collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        f.debug_struct("ComponentFlattener")
            .field("mapped_kinds", &kinds)
            .field("has_unknown_mapper", &self.unknown_mapper.is_some())
            .field("nesting_limit", &self.nesting_limit)
            .finish()
    }
}

#[derive(Clone, Default)]
pub struct ComponentFlattenerBuilder {
    mappers: HashMap<ContentKind, Handler>,
    unknown_mapper: Option<SimpleMapper>,
    nesting_limit: Option<usize>,
}

impl ComponentFlattenerBuilder {
    /// Registers a mapper producing the text for one content kind.
    pub fn mapper<F>(mut self, kind: ContentKind, mapper: F) -> Self
    where
        F: Fn(&Component) -> String + Send + Sync + 'static,
    {
        self.mappers.insert(kind, Handler::Simple(Arc::new(mapper)));
        self
    }

    /// Registers a mapper that hands any number of components to its sink;
    /// each is flattened one nesting level deeper.
    pub fn complex_mapper<F>(mut self, kind: ContentKind, mapper: F) -> Self
    where
        F: Fn(&Component, &mut dyn FnMut(Component)) + Send + Sync + 'static,
    {
        self.mappers.insert(kind, Handler::Complex(Arc::new(mapper)));
        self
    }

    pub fn unknown_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Component) -> String + Send + Sync + 'static,
    {
        self.unknown_mapper = Some(Arc::new(mapper));
        self
    }

    pub fn nesting_limit(mut self, limit: usize) -> Self {
        self.nesting_limit = Some(limit);
        self
    }

    /// Removes the configured limit. Expansion still stops at
    /// [`MAX_EXPANSION_DEPTH`], so a mapper that keeps expanding into itself
    /// terminates.
    pub fn no_nesting_limit(mut self) -> Self {
        self.nesting_limit = None;
        self
    }

    pub fn build(self) -> Result<ComponentFlattener> {
        let nesting_limit = match self.nesting_limit {
            Some(limit) => {
                Some(NonZeroUsize::new(limit).ok_or(TextError::InvalidNestingLimit(limit))?)
            }
            None => None,
        };
        Ok(ComponentFlattener {
            nesting_limit,
            ..self.finish()
        })
    }

    fn finish(self) -> ComponentFlattener {
        ComponentFlattener {
            mappers: self.mappers,
            unknown_mapper: self.unknown_mapper,
            nesting_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TranslationArgument;
    use crate::style::Decoration;
    use quill_types::NamedTextColor;

    #[derive(Default)]
    struct Recorder {
        stack: Vec<Style>,
        pushes: usize,
        pops: usize,
        text: String,
        budget: Option<usize>,
    }

    impl FlattenerListener for Recorder {
        fn push_style(&mut self, style: &Style) {
            self.pushes += 1;
            self.stack.push(style.clone());
        }

        fn component(&mut self, text: &str) {
            self.text.push_str(text);
            if let Some(budget) = self.budget.as_mut() {
                *budget = budget.saturating_sub(1);
            }
        }

        fn pop_style(&mut self, style: &Style) {
            self.pops += 1;
            assert_eq!(self.stack.pop().as_ref(), Some(style));
        }

        fn should_continue(&self) -> bool {
            self.budget != Some(0)
        }
    }

    fn sample() -> Component {
        Component::text("a")
            .with_color(NamedTextColor::Red)
            .append(
                Component::text("b")
                    .decorate(Decoration::Bold)
                    .append(Component::keybind("key.jump")),
            )
            .append(Component::translatable("chat.k", Vec::new()))
    }

    #[test]
    fn test_basic_flattener() {
        assert_eq!(ComponentFlattener::basic().flatten_to_string(&sample()), "abkey.jumpchat.k");
        assert_eq!(ComponentFlattener::text_only().flatten_to_string(&sample()), "ab");
    }

    #[test]
    fn test_push_pop_balance() {
        let mut recorder = Recorder::default();
        ComponentFlattener::basic().flatten(&sample(), &mut recorder);
        assert_eq!(recorder.pushes, 4);
        assert_eq!(recorder.pushes, recorder.pops);
        assert!(recorder.stack.is_empty());
    }

    #[test]
    fn test_resolved_style_inherits() {
        struct Styles(Vec<Style>);
        impl FlattenerListener for Styles {
            fn push_style(&mut self, style: &Style) {
                self.0.push(style.clone());
            }
            fn component(&mut self, _: &str) {}
        }

        let mut styles = Styles(Vec::new());
        ComponentFlattener::basic().flatten(&sample(), &mut styles);
        let keybind_style = &styles.0[2];
        assert_eq!(keybind_style.color(), Some(NamedTextColor::Red.into()));
        assert!(keybind_style.has_decoration(Decoration::Bold));
        assert!(!styles.0[3].has_decoration(Decoration::Bold));
    }

    #[test]
    fn test_early_termination_stays_balanced() {
        let mut recorder = Recorder {
            budget: Some(1),
            ..Recorder::default()
        };
        ComponentFlattener::basic().flatten(&sample(), &mut recorder);
        assert_eq!(recorder.text, "a");
        assert_eq!(recorder.pushes, recorder.pops);
    }

    #[test]
    fn test_complex_mapper_and_nesting_limit() {
        // Every translatable expands into its arguments, which may be translatable again.
        let expand_args = |c: &Component, sink: &mut dyn FnMut(Component)| {
            if let Content::Translatable(t) = c.content() {
                for argument in &t.arguments {
                    sink(argument.as_component());
                }
            }
        };
        let nested = Component::translatable(
            "outer",
            [TranslationArgument::from(Component::translatable(
                "inner",
                [TranslationArgument::from("deep")],
            ))],
        );

        let unlimited = ComponentFlattener::basic()
            .to_builder()
            .complex_mapper(ContentKind::Translatable, expand_args)
            .build()
            .unwrap();
        assert_eq!(unlimited.flatten_to_string(&nested), "deep");

        let limited = unlimited.to_builder().nesting_limit(1).build().unwrap();
        assert_eq!(limited.flatten_to_string(&nested), "");

        let mut recorder = Recorder::default();
        limited.flatten(&nested, &mut recorder);
        assert_eq!(recorder.pushes, 2);
        assert_eq!(recorder.pushes, recorder.pops);
    }

    #[test]
    fn test_self_expansion_stops_without_a_limit() {
        let flattener = ComponentFlattener::builder()
            .mapper(ContentKind::Text, |c| c.text_content().unwrap_or_default().to_string())
            .complex_mapper(ContentKind::Selector, |c, sink| {
                sink(Component::text("<"));
                sink(c.clone());
            })
            .no_nesting_limit()
            .build()
            .unwrap();

        let mut recorder = Recorder::default();
        flattener.flatten(&Component::selector("@s"), &mut recorder);
        assert_eq!(recorder.text, "<".repeat(MAX_EXPANSION_DEPTH));
        assert_eq!(recorder.pushes, recorder.pops);
    }

    #[test]
    fn test_unknown_mapper() {
        let flattener = ComponentFlattener::builder()
            .mapper(ContentKind::Text, |c| c.text_content().unwrap_or_default().to_string())
            .unknown_mapper(|c| format!("<{:?}>", c.kind()))
            .build()
            .unwrap();
        let tree = Component::text("x").append(Component::score("p", "o"));
        assert_eq!(flattener.flatten_to_string(&tree), "x<Score>");
    }

    #[test]
    fn test_zero_nesting_limit_rejected() {
        let result = ComponentFlattener::builder().nesting_limit(0).build();
        assert!(matches!(result, Err(TextError::InvalidNestingLimit(0))));
    }
}

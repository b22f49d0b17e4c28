//! Pattern-driven rewriting of the text in a component tree.
//!
//! The engine walks a tree in a fixed order (a node's own text, its component
//! translation arguments, its children, then its hover content) and consults
//! the configured condition for every match. A [`PatternReplacementResult::Stop`]
//! ends the walk for the whole remaining tree.

use crate::component::{
    Component, ComponentBuilder, Content, TextContent, TranslatableContent, TranslationArgument,
};
use crate::error::{Result, TextError};
use crate::style::{MergeStrategy, Merges, Style};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::Arc;

/// What to do with a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternReplacementResult {
    Replace,
    /// Leave this match as is and keep scanning.
    Continue,
    /// Leave this match and stop processing the entire tree.
    Stop,
}

type Condition = Arc<dyn Fn(&Captures<'_>, usize, usize) -> PatternReplacementResult + Send + Sync>;
type Replacement =
    Arc<dyn Fn(&Captures<'_>, ComponentBuilder<TextContent>) -> Option<Component> + Send + Sync>;

#[derive(Clone)]
pub struct TextReplacementConfig {
    pattern: Regex,
    condition: Condition,
    replacement: Replacement,
    replace_inside_hover_events: bool,
}

impl TextReplacementConfig {
    pub fn builder() -> TextReplacementConfigBuilder {
        TextReplacementConfigBuilder::default()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replace_inside_hover_events(&self) -> bool {
        self.replace_inside_hover_events
    }

    pub fn to_builder(&self) -> TextReplacementConfigBuilder {
        TextReplacementConfigBuilder {
            pattern: Some(PatternSource::Compiled(self.pattern.clone())),
            condition: Some(self.condition.clone()),
            replacement: Some(self.replacement.clone()),
            replace_inside_hover_events: self.replace_inside_hover_events,
        }
    }
}

impl fmt::Debug for TextReplacementConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextReplacementConfig")
            .field("pattern", &self.pattern.as_str())
            .field("replace_inside_hover_events", &self.replace_inside_hover_events)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum PatternSource {
    Compiled(Regex),
    Source(String),
}

#[derive(Clone)]
pub struct TextReplacementConfigBuilder {
    pattern: Option<PatternSource>,
    condition: Option<Condition>,
    replacement: Option<Replacement>,
    replace_inside_hover_events: bool,
}

impl Default for TextReplacementConfigBuilder {
    fn default() -> Self {
        Self {
            pattern: None,
            condition: None,
            replacement: None,
            replace_inside_hover_events: true,
        }
    }
}

impl TextReplacementConfigBuilder {
    /// Matches `literal` exactly; no character is treated as a metacharacter.
    pub fn match_literal(mut self, literal: &str) -> Self {
        self.pattern = Some(PatternSource::Source(regex::escape(literal)));
        self
    }

    /// Matches a regular expression, compiled by [`build`](Self::build).
    pub fn match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(PatternSource::Source(pattern.into()));
        self
    }

    pub fn match_regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(PatternSource::Compiled(regex));
        self
    }

    /// Replaces at most `times` matches, then stops.
    pub fn times(self, times: usize) -> Self {
        self.condition(move |_, _, replaced| {
            if replaced >= times {
                PatternReplacementResult::Stop
            } else {
                PatternReplacementResult::Replace
            }
        })
    }

    pub fn once(self) -> Self {
        self.times(1)
    }

    /// Decides per match, given the match, the match count (including this
    /// one) and the number of replacements made so far.
    pub fn condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Captures<'_>, usize, usize) -> PatternReplacementResult + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    pub fn replacement(self, replacement: impl Into<Component>) -> Self {
        let replacement = replacement.into();
        self.replacement_match_fn(move |_, _| Some(replacement.clone()))
    }

    pub fn replacement_text(self, replacement: impl Into<String>) -> Self {
        let replacement = replacement.into();
        self.replacement_fn(move |builder| Some(builder.content(replacement.clone()).build()))
    }

    /// Produces the replacement from a text builder holding the matched text.
    /// Returning `None` removes the match.
    pub fn replacement_fn<F>(self, replacement: F) -> Self
    where
        F: Fn(ComponentBuilder<TextContent>) -> Option<Component> + Send + Sync + 'static,
    {
        self.replacement_match_fn(move |_, builder| replacement(builder))
    }

    pub fn replacement_match_fn<F>(mut self, replacement: F) -> Self
    where
        F: Fn(&Captures<'_>, ComponentBuilder<TextContent>) -> Option<Component>
            + Send
            + Sync
            + 'static,
    {
        self.replacement = Some(Arc::new(replacement));
        self
    }

    pub fn replace_inside_hover_events(mut self, replace: bool) -> Self {
        self.replace_inside_hover_events = replace;
        self
    }

    pub fn build(self) -> Result<TextReplacementConfig> {
        let pattern = match self.pattern.ok_or(TextError::MissingPattern)? {
            PatternSource::Compiled(regex) => regex,
            PatternSource::Source(source) => Regex::new(&source)?,
        };
        let replacement = self.replacement.ok_or(TextError::MissingReplacement)?;
        let condition: Condition = match self.condition {
            Some(condition) => condition,
            None => Arc::new(always_replace),
        };

        Ok(TextReplacementConfig {
            pattern,
            condition,
            replacement,
            replace_inside_hover_events: self.replace_inside_hover_events,
        })
    }
}

fn always_replace(_: &Captures<'_>, _: usize, _: usize) -> PatternReplacementResult {
    PatternReplacementResult::Replace
}

enum Segment {
    Text(String),
    Replaced(Option<Component>),
}

struct Replacer<'a> {
    config: &'a TextReplacementConfig,
    matches: usize,
    replaced: usize,
    running: bool,
}

impl<'a> Replacer<'a> {
    fn new(config: &'a TextReplacementConfig) -> Self {
        Self {
            config,
            matches: 0,
            replaced: 0,
            running: true,
        }
    }

    fn render(&mut self, component: &Component) -> Component {
        if !self.running {
            return component.clone();
        }
        let before = self.replaced;

        let segments = match component.content() {
            Content::Text(text) => self.split(&text.content),
            _ => None,
        };

        let content = match component.content() {
            Content::Translatable(translatable)
                if translatable.arguments.iter().any(|a| a.component().is_some()) =>
            {
                let arguments = translatable
                    .arguments
                    .iter()
                    .map(|argument| match argument {
                        TranslationArgument::Component(c) => {
                            TranslationArgument::Component(self.render(c))
                        }
                        other => other.clone(),
                    })
                    .collect();
                Content::Translatable(TranslatableContent {
                    arguments,
                    ..translatable.clone()
                })
            }
            other => other.clone(),
        };

        let children: Vec<Component> =
            component.children().iter().map(|c| self.render(c)).collect();

        let style = match component.hover_event() {
            Some(hover) if self.config.replace_inside_hover_events => {
                let hover = hover.map_components(|c| self.render(c));
                component.style().with_hover_event(hover)
            }
            _ => component.style().clone(),
        };

        if self.replaced == before {
            return component.clone();
        }
        match segments {
            Some(segments) => assemble(segments, style, children),
            None => Component::from_parts(content, style, children),
        }
    }

    /// Splits `text` around replaced matches; `None` when nothing was replaced.
    fn split(&mut self, text: &str) -> Option<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for captures in self.config.pattern.captures_iter(text) {
            let Some(found) = captures.get(0) else {
                continue;
            };
            self.matches += 1;
            match (self.config.condition)(&captures, self.matches, self.replaced) {
                PatternReplacementResult::Replace => {
                    self.replaced += 1;
                    segments.push(Segment::Text(text[cursor..found.start()].to_string()));
                    let builder = Component::text_builder().content(found.as_str());
                    segments.push(Segment::Replaced((self.config.replacement)(&captures, builder)));
                    cursor = found.end();
                }
                PatternReplacementResult::Continue => {}
                PatternReplacementResult::Stop => {
                    log::trace!("Text replacement stopped after {} matches", self.matches);
                    self.running = false;
                    break;
                }
            }
        }

        if segments.is_empty() {
            return None;
        }
        segments.push(Segment::Text(text[cursor..].to_string()));
        Some(segments)
    }
}

/// Rebuilds a text node from its split content. A replacement spanning the
/// whole content takes the node's place and inherits its style where unset.
fn assemble(segments: Vec<Segment>, style: Style, children: Vec<Component>) -> Component {
    if let [Segment::Text(before), Segment::Replaced(replacement), Segment::Text(after)] =
        segments.as_slice()
        && before.is_empty()
        && after.is_empty()
    {
        return match replacement {
            Some(replacement) => {
                let merged = replacement
                    .style()
                    .merge_with(&style, MergeStrategy::IfAbsentOnTarget, Merges::all());
                let mut nested = replacement.children().to_vec();
                nested.extend(children);
                Component::from_parts(replacement.content().clone(), merged, nested)
            }
            None => Component::from_parts(TextContent::default(), style, children),
        };
    }

    let mut segments = segments.into_iter();
    let leading = match segments.next() {
        Some(Segment::Text(text)) => text,
        _ => String::new(),
    };
    let mut nested: Vec<Component> = segments
        .filter_map(|segment| match segment {
            Segment::Text(text) if text.is_empty() => None,
            Segment::Text(text) => Some(Component::text(text)),
            Segment::Replaced(replacement) => replacement,
        })
        .collect();
    nested.extend(children);
    Component::from_parts(TextContent { content: leading }, style, nested)
}

impl Component {
    /// Returns a copy of this tree with matches of `config` replaced.
    ///
    /// Recurses once per tree level, hover content included.
    pub fn replace_text(&self, config: &TextReplacementConfig) -> Component {
        Replacer::new(config).render(self)
    }

    /// Builds a config with `configure` and applies it.
    pub fn replace_text_with(
        &self,
        configure: impl FnOnce(TextReplacementConfigBuilder) -> TextReplacementConfigBuilder,
    ) -> Result<Component> {
        let config = configure(TextReplacementConfig::builder()).build()?;
        Ok(self.replace_text(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HoverEvent;
    use crate::style::Decoration;
    use quill_types::NamedTextColor;

    fn literal(from: &str, to: &str) -> TextReplacementConfigBuilder {
        TextReplacementConfig::builder().match_literal(from).replacement_text(to)
    }

    #[test]
    fn test_times_limits_replacements() {
        let tree = Component::text("aaa");
        let once = tree.replace_text(&literal("a", "b").once().build().unwrap());
        assert_eq!(once.to_string(), "baa");

        let all = tree.replace_text(&literal("a", "b").build().unwrap());
        assert_eq!(all.to_string(), "bbb");
        assert_eq!(tree.to_string(), "aaa");
    }

    #[test]
    fn test_stop_halts_whole_tree() {
        let tree = Component::text("aaa").append(Component::text("a"));
        let config = literal("a", "b")
            .condition(|_, count, _| {
                if count == 1 {
                    PatternReplacementResult::Replace
                } else {
                    PatternReplacementResult::Stop
                }
            })
            .build()
            .unwrap();
        assert_eq!(tree.replace_text(&config).to_string(), "baaa");
    }

    #[test]
    fn test_continue_skips_match() {
        let config = literal("a", "b")
            .condition(|_, count, _| {
                if count % 2 == 0 {
                    PatternReplacementResult::Continue
                } else {
                    PatternReplacementResult::Replace
                }
            })
            .build()
            .unwrap();
        assert_eq!(Component::text("aaaa").replace_text(&config).to_string(), "baba");
    }

    #[test]
    fn test_literal_is_quoted() {
        let tree = Component::text("1+1=2, 11=2");
        let replaced = tree.replace_text(&literal("1+1", "two").build().unwrap());
        assert_eq!(replaced.to_string(), "two=2, 11=2");
    }

    #[test]
    fn test_whole_match_keeps_style() {
        let tree = Component::text("hello").with_color(NamedTextColor::Red);
        let config = TextReplacementConfig::builder()
            .match_literal("hello")
            .replacement(Component::text("bye").decorate(Decoration::Bold))
            .build()
            .unwrap();
        let replaced = tree.replace_text(&config);
        assert_eq!(replaced.text_content(), Some("bye"));
        assert_eq!(replaced.color(), Some(NamedTextColor::Red.into()));
        assert!(replaced.has_decoration(Decoration::Bold));
    }

    #[test]
    fn test_partial_match_splits_into_children() {
        let tree = Component::text("say hi now").with_color(NamedTextColor::Blue);
        let replaced = tree.replace_text(&literal("hi", "hello").build().unwrap());
        assert_eq!(replaced.text_content(), Some("say "));
        assert_eq!(replaced.children().len(), 2);
        assert_eq!(replaced.color(), Some(NamedTextColor::Blue.into()));
        assert_eq!(replaced.to_string(), "say hello now");
    }

    #[test]
    fn test_capture_groups_reach_replacement() {
        let config = TextReplacementConfig::builder()
            .match_pattern(r"(\w+)@(\w+)")
            .replacement_match_fn(|caps, builder| {
                Some(builder.content(format!("{} at {}", &caps[1], &caps[2])).build())
            })
            .build()
            .unwrap();
        let replaced = Component::text("mail bob@example").replace_text(&config);
        assert_eq!(replaced.to_string(), "mail bob at example");
    }

    #[test]
    fn test_none_removes_match() {
        let config = TextReplacementConfig::builder()
            .match_literal("x")
            .replacement_fn(|_| None)
            .build()
            .unwrap();
        assert_eq!(Component::text("axbxc").replace_text(&config).to_string(), "abc");
    }

    #[test]
    fn test_hover_text_replacement_is_optional() {
        let tree =
            Component::text("a").with_hover_event(HoverEvent::show_text(Component::text("a")));
        let hover_text = |c: &Component| match c.hover_event() {
            Some(HoverEvent::ShowText(text)) => text.to_string(),
            _ => String::new(),
        };

        let inside = tree.replace_text(&literal("a", "b").build().unwrap());
        assert_eq!(hover_text(&inside), "b");

        let config = literal("a", "b").replace_inside_hover_events(false).build().unwrap();
        let outside = tree.replace_text(&config);
        assert_eq!(hover_text(&outside), "a");
        assert_eq!(outside.to_string(), "b");
    }

    #[test]
    fn test_translatable_arguments_are_rewritten() {
        let tree = Component::translatable("greet", [TranslationArgument::from("abc")]);
        let replaced = tree.replace_text(&literal("b", "_").build().unwrap());
        let args = &replaced.content().as_translatable().unwrap().arguments;
        assert_eq!(args[0].as_component().to_string(), "a_c");
    }

    #[test]
    fn test_arguments_then_children_then_hover() {
        let tree = Component::translatable("k", [TranslationArgument::from("x")])
            .append(Component::text("x"))
            .with_hover_event(HoverEvent::show_text(Component::text("x")));
        let replaced_parts = |times: usize| {
            let replaced = tree.replace_text(&literal("x", "y").times(times).build().unwrap());
            let argument = &replaced.content().as_translatable().unwrap().arguments[0];
            let hover = match replaced.hover_event() {
                Some(HoverEvent::ShowText(text)) => text.to_string(),
                _ => String::new(),
            };
            [argument.as_component().to_string(), replaced.children()[0].to_string(), hover]
        };

        assert_eq!(replaced_parts(1), ["y", "x", "x"]);
        assert_eq!(replaced_parts(2), ["y", "y", "x"]);
        assert_eq!(replaced_parts(3), ["y", "y", "y"]);
    }

    #[test]
    fn test_unchanged_tree_is_shared() {
        let tree = Component::text("nothing here");
        let replaced = tree.replace_text(&literal("zzz", "y").build().unwrap());
        assert!(replaced.ptr_eq(&tree));
    }

    #[test]
    fn test_build_errors() {
        assert!(matches!(
            TextReplacementConfig::builder().replacement_text("x").build(),
            Err(TextError::MissingPattern)
        ));
        assert!(matches!(
            TextReplacementConfig::builder().match_literal("x").build(),
            Err(TextError::MissingReplacement)
        ));
        assert!(matches!(
            TextReplacementConfig::builder().match_pattern("(").replacement_text("x").build(),
            Err(TextError::InvalidPattern(_))
        ));
    }
}

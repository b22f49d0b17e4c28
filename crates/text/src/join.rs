//! Splicing a sequence of components into one, with separators.

use crate::component::{Component, ComponentLike, TextContent};
use crate::style::Style;
use std::fmt;
use std::sync::Arc;

type Convertor = Arc<dyn Fn(&dyn ComponentLike) -> Component + Send + Sync>;
type Predicate = Arc<dyn Fn(&dyn ComponentLike) -> bool + Send + Sync>;

fn convert_as_component(like: &dyn ComponentLike) -> Component {
    like.as_component()
}

fn include_all(_: &dyn ComponentLike) -> bool {
    true
}

/// Describes how [`Component::join`] assembles its output.
#[derive(Clone)]
pub struct JoinConfiguration {
    prefix: Option<Component>,
    suffix: Option<Component>,
    separator: Option<Component>,
    last_separator: Option<Component>,
    last_separator_if_serial: Option<Component>,
    convertor: Convertor,
    predicate: Predicate,
    parent_style: Style,
}

impl Default for JoinConfiguration {
    fn default() -> Self {
        JoinConfigurationBuilder::default().build()
    }
}

impl JoinConfiguration {
    pub fn builder() -> JoinConfigurationBuilder {
        JoinConfigurationBuilder::default()
    }

    pub fn to_builder(&self) -> JoinConfigurationBuilder {
        JoinConfigurationBuilder { config: self.clone() }
    }

    // --- Presets ---

    pub fn no_separators() -> Self {
        Self::default()
    }

    pub fn separator(separator: impl ComponentLike) -> Self {
        Self::builder().separator(separator).build()
    }

    pub fn separators(separator: impl ComponentLike, last_separator: impl ComponentLike) -> Self {
        Self::builder()
            .separator(separator)
            .last_separator(last_separator)
            .build()
    }

    pub fn newlines() -> Self {
        Self::separator(Component::newline())
    }

    pub fn spaces() -> Self {
        Self::separator(Component::space())
    }

    /// Comma separated, optionally followed by a space.
    pub fn commas(spaces: bool) -> Self {
        Self::separator(if spaces { ", " } else { "," })
    }

    /// `[a, b, c]`
    pub fn array_like() -> Self {
        Self::builder().prefix("[").suffix("]").separator(", ").build()
    }

    // --- Accessors ---

    pub fn prefix(&self) -> Option<&Component> {
        self.prefix.as_ref()
    }

    pub fn suffix(&self) -> Option<&Component> {
        self.suffix.as_ref()
    }

    pub fn separator_component(&self) -> Option<&Component> {
        self.separator.as_ref()
    }

    pub fn last_separator(&self) -> Option<&Component> {
        self.last_separator.as_ref()
    }

    pub fn last_separator_if_serial(&self) -> Option<&Component> {
        self.last_separator_if_serial.as_ref()
    }

    pub fn parent_style(&self) -> &Style {
        &self.parent_style
    }

    /// Joins `items`: kept elements are converted, separated and wrapped in
    /// a text component carrying the parent style.
    pub fn join<I>(&self, items: I) -> Component
    where
        I: IntoIterator,
        I::Item: ComponentLike,
    {
        let kept: Vec<Component> = items
            .into_iter()
            .filter(|item| (self.predicate)(item))
            .map(|item| (self.convertor)(&item))
            .collect();
        let count = kept.len();

        let mut children = Vec::with_capacity(count * 2 + 2);
        children.extend(self.prefix.iter().cloned());
        for (index, component) in kept.into_iter().enumerate() {
            if index > 0
                && let Some(separator) = self.separator_before(index, count)
            {
                children.push(separator.clone());
            }
            children.push(component);
        }
        children.extend(self.suffix.iter().cloned());

        Component::from_parts(TextContent::default(), self.parent_style.clone(), children)
    }

    /// The separator placed before the element at `index` of `count`.
    fn separator_before(&self, index: usize, count: usize) -> Option<&Component> {
        if index + 1 < count {
            return self.separator.as_ref();
        }
        let serial = if count > 2 {
            self.last_separator_if_serial.as_ref()
        } else {
            None
        };
        serial
            .or(self.last_separator.as_ref())
            .or(self.separator.as_ref())
    }
}

impl fmt::Debug for JoinConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinConfiguration")
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("separator", &self.separator)
            .field("last_separator", &self.last_separator)
            .field("last_separator_if_serial", &self.last_separator_if_serial)
            .field("parent_style", &self.parent_style)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct JoinConfigurationBuilder {
    config: JoinConfiguration,
}

impl Default for JoinConfigurationBuilder {
    fn default() -> Self {
        Self {
            config: JoinConfiguration {
                prefix: None,
                suffix: None,
                separator: None,
                last_separator: None,
                last_separator_if_serial: None,
                convertor: Arc::new(convert_as_component),
                predicate: Arc::new(include_all),
                parent_style: Style::EMPTY,
            },
        }
    }
}

impl JoinConfigurationBuilder {
    pub fn prefix(mut self, prefix: impl ComponentLike) -> Self {
        self.config.prefix = Some(prefix.as_component());
        self
    }

    pub fn suffix(mut self, suffix: impl ComponentLike) -> Self {
        self.config.suffix = Some(suffix.as_component());
        self
    }

    pub fn separator(mut self, separator: impl ComponentLike) -> Self {
        self.config.separator = Some(separator.as_component());
        self
    }

    /// Used before the last element instead of the separator.
    pub fn last_separator(mut self, last_separator: impl ComponentLike) -> Self {
        self.config.last_separator = Some(last_separator.as_component());
        self
    }

    /// Used before the last element when there are more than two elements.
    pub fn last_separator_if_serial(mut self, last_separator: impl ComponentLike) -> Self {
        self.config.last_separator_if_serial = Some(last_separator.as_component());
        self
    }

    pub fn convertor<F>(mut self, convertor: F) -> Self
    where
        F: Fn(&dyn ComponentLike) -> Component + Send + Sync + 'static,
    {
        self.config.convertor = Arc::new(convertor);
        self
    }

    /// Elements for which `predicate` is false are left out.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn ComponentLike) -> bool + Send + Sync + 'static,
    {
        self.config.predicate = Arc::new(predicate);
        self
    }

    pub fn parent_style(mut self, style: Style) -> Self {
        self.config.parent_style = style;
        self
    }

    pub fn build(self) -> JoinConfiguration {
        self.config
    }
}

impl Component {
    pub fn join<I>(config: &JoinConfiguration, items: I) -> Component
    where
        I: IntoIterator,
        I::Item: ComponentLike,
    {
        config.join(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Decoration;
    use quill_types::NamedTextColor;

    fn serial() -> JoinConfiguration {
        JoinConfiguration::builder()
            .separator(", ")
            .last_separator_if_serial(", and ")
            .build()
    }

    #[test]
    fn test_serial_separator_needs_three() {
        assert_eq!(Component::join(&serial(), ["A", "B", "C"]).to_string(), "A, B, and C");
        assert_eq!(Component::join(&serial(), ["A", "B"]).to_string(), "A, B");
        assert_eq!(Component::join(&serial(), ["A"]).to_string(), "A");
    }

    #[test]
    fn test_last_separator() {
        let config = JoinConfiguration::separators(", ", " and ");
        assert_eq!(config.join(["A", "B"]).to_string(), "A and B");
        assert_eq!(config.join(["A", "B", "C"]).to_string(), "A, B and C");
    }

    #[test]
    fn test_prefix_suffix_and_empty_input() {
        let config = JoinConfiguration::array_like();
        assert_eq!(config.join(["1", "2"]).to_string(), "[1, 2]");
        assert_eq!(config.join(Vec::<Component>::new()).to_string(), "[]");
        assert_eq!(JoinConfiguration::no_separators().join(["a", "b"]).to_string(), "ab");
    }

    #[test]
    fn test_predicate_filters_before_separators() {
        let config = JoinConfiguration::commas(true)
            .to_builder()
            .predicate(|like| !like.as_component().to_string().is_empty())
            .build();
        assert_eq!(config.join(["a", "", "b", ""]).to_string(), "a, b");
    }

    #[test]
    fn test_convertor_and_parent_style() {
        let config = JoinConfiguration::spaces()
            .to_builder()
            .convertor(|like| like.as_component().decorate(Decoration::Bold))
            .parent_style(Style::empty().with_color(NamedTextColor::Gray))
            .build();
        let joined = config.join(["x", "y"]);
        assert_eq!(joined.color(), Some(NamedTextColor::Gray.into()));
        assert!(joined.children()[0].has_decoration(Decoration::Bold));
        assert!(!joined.children()[1].has_decoration(Decoration::Bold));
        assert_eq!(joined.to_string(), "x y");
    }

    #[test]
    fn test_newlines() {
        assert_eq!(JoinConfiguration::newlines().join(["a", "b"]).to_string(), "a\nb");
    }
}

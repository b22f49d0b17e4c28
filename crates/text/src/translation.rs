//! Server-side rendering of translatable components.
//!
//! A [`TranslationRegistry`] maps keys to per-locale [`MessageFormat`]s; a
//! [`TranslatableRenderer`] rewrites every translatable node it can resolve
//! into plain text nodes with the arguments substituted.

use crate::component::{Component, Content, TextContent, TranslatableContent, TranslationArgument};
use crate::error::{Result, TextError};
use crate::style::{MergeStrategy, Merges};
use itertools::Itertools;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{anychar, char, digit1};
use nom::combinator::{consumed, map, map_res};
use nom::multi::many0;
use nom::sequence::{delimited, terminated};
use quill_types::ParseError;
use std::collections::HashMap;

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    /// A placeholder for the argument at `index`; `raw` is its source text,
    /// emitted as is when the argument is missing.
    Argument { index: usize, raw: String },
}

enum RawPiece<'a> {
    Literal(&'a str),
    Indexed(usize, &'a str),
    Next(&'a str),
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>()).parse(input)
}

/// `{0}`
fn indexed_placeholder(input: &str) -> IResult<&str, RawPiece<'_>> {
    map(consumed(delimited(char('{'), index, char('}'))), |(raw, i)| {
        RawPiece::Indexed(i, raw)
    })
    .parse(input)
}

/// `%1$s`, numbered from one.
fn explicit_placeholder<'a>(input: &'a str) -> IResult<&'a str, RawPiece<'a>> {
    map_res(
        consumed(delimited(char('%'), index, tag("$s"))),
        |(raw, i): (&'a str, usize)| match i.checked_sub(1) {
            Some(i) => Ok(RawPiece::Indexed(i, raw)),
            None => Err(()),
        },
    )
    .parse(input)
}

fn message_piece(input: &str) -> IResult<&str, RawPiece<'_>> {
    alt((
        map(tag("%%"), |_| RawPiece::Literal("%")),
        explicit_placeholder,
        map(tag("%s"), RawPiece::Next),
        indexed_placeholder,
        map(take_till1(|c: char| c == '{' || c == '%'), RawPiece::Literal),
        map(consumed(anychar), |(raw, _)| RawPiece::Literal(raw)),
    ))
    .parse(input)
}

fn message_pattern(input: &str) -> IResult<&str, Vec<RawPiece<'_>>> {
    terminated(many0(message_piece), nom::combinator::eof).parse(input)
}

/// A parsed translation pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormat {
    pattern: String,
    pieces: Vec<Piece>,
}

impl MessageFormat {
    /// Parses `{N}` placeholders, `%s` (sequential) and `%N$s` (explicit)
    /// placeholders, and `%%` as a literal percent sign. Anything else is
    /// literal text.
    pub fn parse(pattern: &str) -> std::result::Result<Self, ParseError> {
        let (_, raw) = message_pattern(pattern).map_err(|e| ParseError::Parse(e.to_string()))?;

        let mut next = 0;
        let pieces = raw
            .into_iter()
            .map(|piece| match piece {
                RawPiece::Literal(text) => Piece::Literal(text.to_string()),
                RawPiece::Indexed(index, raw) => Piece::Argument {
                    index,
                    raw: raw.to_string(),
                },
                RawPiece::Next(raw) => {
                    next += 1;
                    Piece::Argument {
                        index: next - 1,
                        raw: raw.to_string(),
                    }
                }
            })
            .coalesce(|a, b| match (a, b) {
                (Piece::Literal(mut left), Piece::Literal(right)) => {
                    left.push_str(&right);
                    Ok(Piece::Literal(left))
                }
                (a, b) => Err((a, b)),
            })
            .collect();

        Ok(Self {
            pattern: pattern.to_string(),
            pieces,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The pattern as components with `arguments` substituted.
    pub fn render(&self, arguments: &[Component]) -> Vec<Component> {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => Component::text(text.as_str()),
                Piece::Argument { index, raw } => arguments
                    .get(*index)
                    .cloned()
                    .unwrap_or_else(|| Component::text(raw.as_str())),
            })
            .collect()
    }
}

/// Resolves a translation key for a locale.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, locale: &str) -> Option<MessageFormat>;
}

/// Lowercases and uses `_` as separator: `en-US` becomes `en_us`.
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('-', "_").to_ascii_lowercase()
}

/// Caller-owned store of translations keyed by translation key and locale.
#[derive(Debug, Clone)]
pub struct TranslationRegistry {
    default_locale: String,
    translations: HashMap<String, HashMap<String, MessageFormat>>,
}

impl TranslationRegistry {
    pub fn new(default_locale: &str) -> Self {
        Self {
            default_locale: normalize_locale(default_locale),
            translations: HashMap::new(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn register(&mut self, key: &str, locale: &str, pattern: &str) -> Result<()> {
        let locale = normalize_locale(locale);
        let format = MessageFormat::parse(pattern)?;
        let by_locale = self.translations.entry(key.to_string()).or_default();
        if by_locale.contains_key(&locale) {
            return Err(TextError::duplicate_translation(key, locale));
        }
        log::trace!("Registered translation '{}' for locale '{}'", key, locale);
        by_locale.insert(locale, format);
        Ok(())
    }

    /// Registers every `(key, pattern)` pair for `locale`, stopping at the
    /// first failure.
    pub fn register_all<'a>(
        &mut self,
        locale: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<()> {
        let mut count = 0;
        for (key, pattern) in entries {
            self.register(key, locale, pattern)?;
            count += 1;
        }
        log::debug!("Registered {} translations for locale '{}'", count, normalize_locale(locale));
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    pub fn unregister(&mut self, key: &str) -> bool {
        self.translations.remove(key).is_some()
    }
}

impl Translator for TranslationRegistry {
    /// Tries the exact locale, then its language alone, then the default locale.
    fn translate(&self, key: &str, locale: &str) -> Option<MessageFormat> {
        let by_locale = self.translations.get(key)?;
        let locale = normalize_locale(locale);
        let language = locale.split('_').next().unwrap_or_default();
        [locale.as_str(), language, self.default_locale.as_str()]
            .into_iter()
            .find_map(|candidate| by_locale.get(candidate))
            .cloned()
    }
}

/// Rewrites translatable and virtual nodes of a tree for one locale.
pub struct TranslatableRenderer<'a, T: Translator + ?Sized> {
    translator: &'a T,
}

impl<'a, T: Translator + ?Sized> TranslatableRenderer<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self { translator }
    }

    pub fn render(&self, component: &Component, locale: &str) -> Component {
        let children: Vec<Component> =
            component.children().iter().map(|c| self.render(c, locale)).collect();
        let style = match component.hover_event() {
            Some(hover) => component
                .style()
                .with_hover_event(hover.map_components(|c| self.render(c, locale))),
            None => component.style().clone(),
        };

        match component.content() {
            Content::Translatable(translatable) => {
                let Some(format) = self.translator.translate(&translatable.key, locale) else {
                    log::trace!("No translation for '{}' in locale '{}'", translatable.key, locale);
                    let arguments = translatable
                        .arguments
                        .iter()
                        .map(|argument| match argument {
                            TranslationArgument::Component(c) => {
                                TranslationArgument::Component(self.render(c, locale))
                            }
                            other => other.clone(),
                        })
                        .collect();
                    let content = TranslatableContent {
                        arguments,
                        ..translatable.clone()
                    };
                    return Component::from_parts(content, style, children);
                };

                let arguments: Vec<Component> = translatable
                    .arguments
                    .iter()
                    .map(|argument| self.render(&argument.as_component(), locale))
                    .collect();
                let mut pieces = format.render(&arguments);
                pieces.extend(children);
                Component::from_parts(TextContent::default(), style, pieces)
            }
            Content::Virtual(virtual_content) => {
                let rendered = self.render(&virtual_content.renderer().apply(), locale);
                let merged = rendered
                    .style()
                    .merge_with(&style, MergeStrategy::IfAbsentOnTarget, Merges::all());
                let mut nested = rendered.children().to_vec();
                nested.extend(children);
                Component::from_parts(rendered.content().clone(), merged, nested)
            }
            other => Component::from_parts(other.clone(), style, children),
        }
    }
}

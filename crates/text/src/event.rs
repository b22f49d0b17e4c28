//! Click and hover events embedded in a [`Style`](crate::style::Style).

use crate::component::Component;
use quill_types::Key;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Action performed when the client clicks styled text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ClickEvent {
    OpenUrl(String),
    OpenFile(String),
    RunCommand(String),
    SuggestCommand(String),
    ChangePage(i32),
    CopyToClipboard(String),
}

impl ClickEvent {
    pub fn action(&self) -> &'static str {
        match self {
            ClickEvent::OpenUrl(_) => "open_url",
            ClickEvent::OpenFile(_) => "open_file",
            ClickEvent::RunCommand(_) => "run_command",
            ClickEvent::SuggestCommand(_) => "suggest_command",
            ClickEvent::ChangePage(_) => "change_page",
            ClickEvent::CopyToClipboard(_) => "copy_to_clipboard",
        }
    }

    pub fn value(&self) -> String {
        match self {
            ClickEvent::OpenUrl(v)
            | ClickEvent::OpenFile(v)
            | ClickEvent::RunCommand(v)
            | ClickEvent::SuggestCommand(v)
            | ClickEvent::CopyToClipboard(v) => v.clone(),
            ClickEvent::ChangePage(page) => page.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

impl fmt::Display for HoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowItem {
    pub item: Key,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowEntity {
    pub kind: Key,
    pub id: Uuid,
    pub name: Option<Component>,
}

/// Content shown when the client hovers over styled text.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    ShowText(Component),
    ShowItem(ShowItem),
    ShowEntity(ShowEntity),
}

impl HoverEvent {
    pub fn show_text(text: impl Into<Component>) -> Self {
        HoverEvent::ShowText(text.into())
    }

    pub fn show_item(item: Key, count: i32) -> Self {
        HoverEvent::ShowItem(ShowItem { item, count })
    }

    pub fn show_entity(kind: Key, id: Uuid, name: Option<Component>) -> Self {
        HoverEvent::ShowEntity(ShowEntity { kind, id, name })
    }

    pub fn action(&self) -> HoverAction {
        match self {
            HoverEvent::ShowText(_) => HoverAction::ShowText,
            HoverEvent::ShowItem(_) => HoverAction::ShowItem,
            HoverEvent::ShowEntity(_) => HoverAction::ShowEntity,
        }
    }

    /// The component carried by this event, if any.
    pub fn component(&self) -> Option<&Component> {
        match self {
            HoverEvent::ShowText(text) => Some(text),
            HoverEvent::ShowEntity(entity) => entity.name.as_ref(),
            HoverEvent::ShowItem(_) => None,
        }
    }

    /// Rebuilds the event with `f` applied to every carried component.
    pub fn map_components(&self, mut f: impl FnMut(&Component) -> Component) -> HoverEvent {
        match self {
            HoverEvent::ShowText(text) => HoverEvent::ShowText(f(text)),
            HoverEvent::ShowEntity(entity) => HoverEvent::ShowEntity(ShowEntity {
                kind: entity.kind.clone(),
                id: entity.id,
                name: entity.name.as_ref().map(f),
            }),
            HoverEvent::ShowItem(_) => self.clone(),
        }
    }
}

impl From<Component> for HoverEvent {
    fn from(text: Component) -> Self {
        HoverEvent::ShowText(text)
    }
}

impl From<Component> for Option<HoverEvent> {
    fn from(text: Component) -> Self {
        Some(HoverEvent::ShowText(text))
    }
}

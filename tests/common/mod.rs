pub mod assertions;
pub mod fixtures;

use quill::{FlattenerListener, Style};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A single callback received by [`RecordingListener`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlattenEvent {
    Push(Style),
    Text(String),
    Pop(Style),
}

/// Records every flattener callback and checks push/pop nesting as it goes.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub events: Vec<FlattenEvent>,
    stack: Vec<Style>,
    pub mismatched_pops: usize,
    pub max_depth: usize,
    text_budget: Option<usize>,
}

impl RecordingListener {
    /// A listener that asks the flattener to stop after `count` text callbacks.
    pub fn stopping_after(count: usize) -> Self {
        Self {
            text_budget: Some(count),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                FlattenEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn push_count(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, FlattenEvent::Push(_))).count()
    }

    pub fn pop_count(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, FlattenEvent::Pop(_))).count()
    }

    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.mismatched_pops == 0 && self.push_count() == self.pop_count()
    }

    /// Each emitted text paired with the style active when it was emitted.
    pub fn styled_text(&self) -> Vec<(Style, String)> {
        let mut active: Vec<&Style> = Vec::new();
        let mut out: Vec<(Style, String)> = Vec::new();
        for event in &self.events {
            match event {
                FlattenEvent::Push(style) => active.push(style),
                FlattenEvent::Pop(_) => {
                    active.pop();
                }
                FlattenEvent::Text(text) if text.is_empty() => {}
                FlattenEvent::Text(text) => {
                    let style = active.last().map(|s| (*s).clone()).unwrap_or_default();
                    match out.last_mut() {
                        Some((last_style, last_text)) if *last_style == style => {
                            last_text.push_str(text)
                        }
                        _ => out.push((style, text.clone())),
                    }
                }
            }
        }
        out
    }
}

impl FlattenerListener for RecordingListener {
    fn push_style(&mut self, style: &Style) {
        self.stack.push(style.clone());
        self.max_depth = self.max_depth.max(self.stack.len());
        self.events.push(FlattenEvent::Push(style.clone()));
    }

    fn component(&mut self, text: &str) {
        self.events.push(FlattenEvent::Text(text.to_string()));
        if let Some(budget) = self.text_budget.as_mut() {
            *budget = budget.saturating_sub(1);
        }
    }

    fn pop_style(&mut self, style: &Style) {
        if self.stack.pop().as_ref() != Some(style) {
            self.mismatched_pops += 1;
        }
        self.events.push(FlattenEvent::Pop(style.clone()));
    }

    fn should_continue(&self) -> bool {
        self.text_budget != Some(0)
    }
}

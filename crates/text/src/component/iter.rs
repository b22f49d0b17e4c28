use super::Component;
use crate::event::HoverEvent;
use bitflags::bitflags;
use std::collections::VecDeque;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentIteratorKind {
    /// Pre-order: a node, then each of its referenced components in turn.
    #[default]
    DepthFirst,
    /// Level order.
    BreadthFirst,
}

bitflags! {
    /// Referenced components that are walked as if they were children.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentIteratorFlags: u8 {
        const INCLUDE_HOVER_SHOW_ENTITY_NAME = 1;
        const INCLUDE_HOVER_SHOW_TEXT_COMPONENT = 1 << 1;
        const INCLUDE_TRANSLATABLE_COMPONENT_ARGUMENTS = 1 << 2;
    }
}

impl ComponentIteratorFlags {
    pub const DEFAULT: Self =
        Self::INCLUDE_HOVER_SHOW_ENTITY_NAME.union(Self::INCLUDE_HOVER_SHOW_TEXT_COMPONENT);
}

impl Default for ComponentIteratorFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Read-only walk over a component tree.
#[derive(Debug, Clone)]
pub struct ComponentIter {
    queue: VecDeque<Component>,
    kind: ComponentIteratorKind,
    flags: ComponentIteratorFlags,
}

impl ComponentIter {
    pub fn new(
        root: Component,
        kind: ComponentIteratorKind,
        flags: ComponentIteratorFlags,
    ) -> Self {
        Self {
            queue: VecDeque::from([root]),
            kind,
            flags,
        }
    }
}

/// Children, then component arguments, then the hover component.
fn referenced(component: &Component, flags: ComponentIteratorFlags) -> Vec<Component> {
    let mut out = component.children().to_vec();

    if flags.contains(ComponentIteratorFlags::INCLUDE_TRANSLATABLE_COMPONENT_ARGUMENTS)
        && let Some(translatable) = component.content().as_translatable()
    {
        out.extend(translatable.arguments.iter().filter_map(|a| a.component()).cloned());
    }

    match component.hover_event() {
        Some(HoverEvent::ShowText(text))
            if flags.contains(ComponentIteratorFlags::INCLUDE_HOVER_SHOW_TEXT_COMPONENT) =>
        {
            out.push(text.clone());
        }
        Some(HoverEvent::ShowEntity(entity))
            if flags.contains(ComponentIteratorFlags::INCLUDE_HOVER_SHOW_ENTITY_NAME) =>
        {
            out.extend(entity.name.iter().cloned());
        }
        _ => {}
    }
    out
}

impl Iterator for ComponentIter {
    type Item = Component;

    fn next(&mut self) -> Option<Component> {
        let next = self.queue.pop_front()?;
        let refs = referenced(&next, self.flags);
        match self.kind {
            ComponentIteratorKind::DepthFirst => {
                for component in refs.into_iter().rev() {
                    self.queue.push_front(component);
                }
            }
            ComponentIteratorKind::BreadthFirst => self.queue.extend(refs),
        }
        Some(next)
    }
}

impl FusedIterator for ComponentIter {}

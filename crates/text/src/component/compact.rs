//! Tree compaction: strips style a node inherits anyway.
//!
//! Every node, its content and its position are kept. A flattener calls its
//! mappers with the same content in the same order and pushes the same
//! resolved styles before and after, whatever those mappers do.

use super::Component;
use crate::style::Style;

impl Component {
    pub fn compact(&self) -> Component {
        self.compact_with(&Style::EMPTY)
    }

    /// Compacts this tree as if it were rendered beneath `parent`.
    ///
    /// Recurses once per tree level. Untouched subtrees are shared with the
    /// receiver.
    pub fn compact_with(&self, parent: &Style) -> Component {
        let own_style = self.style().unmerge(parent);
        let context = parent.merge(&own_style);

        let children: Vec<Component> =
            self.children().iter().map(|child| child.compact_with(&context)).collect();
        let children_shared = children
            .iter()
            .zip(self.children())
            .all(|(compacted, original)| compacted.ptr_eq(original));

        if children_shared {
            return self.with_style(own_style);
        }
        Component::from_parts(self.content().clone(), own_style, children)
    }
}

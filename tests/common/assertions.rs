use quill::{Component, ComponentFlattener, ContentKind};

use super::RecordingListener;

/// A flattener that brackets every text node, so merged or dropped text
/// nodes show up in the output.
pub fn bracketing_flattener() -> ComponentFlattener {
    ComponentFlattener::builder()
        .mapper(ContentKind::Text, |c| format!("[{}]", c.text_content().unwrap_or_default()))
        .unknown_mapper(|c| format!("<{:?}>", c.kind()))
        .build()
        .expect("a flattener without a nesting limit always builds")
}

/// Flattens `component` with `flattener` into a fresh recording listener.
pub fn record(flattener: &ComponentFlattener, component: &Component) -> RecordingListener {
    let mut listener = RecordingListener::default();
    flattener.flatten(component, &mut listener);
    listener
}

/// Assert that a component flattens to the given plain text with the basic flattener
#[macro_export]
macro_rules! assert_flattens_to {
    ($component:expr, $text:expr) => {
        let component = &$component;
        let flattened = quill::ComponentFlattener::basic().flatten_to_string(component);
        assert_eq!(
            flattened, $text,
            "Component should flatten to '{}', but produced '{}'\nTree: {:?}",
            $text, flattened, component
        );
    };
}

/// Assert that two trees flatten to the same text under the same resolved styles
#[macro_export]
macro_rules! assert_renders_identically {
    ($left:expr, $right:expr) => {
        let (left_tree, right_tree) = (&$left, &$right);
        let flattener = quill::ComponentFlattener::basic();
        let left = $crate::common::assertions::record(flattener, left_tree);
        let right = $crate::common::assertions::record(flattener, right_tree);
        assert_eq!(left.text(), right.text(), "Flattened text differs");
        assert_eq!(
            left.styled_text(),
            right.styled_text(),
            "Styled text runs differ\nLeft: {:?}\nRight: {:?}",
            left_tree,
            right_tree
        );
    };
}

/// Assert that a flattening run produced balanced push/pop calls
#[macro_export]
macro_rules! assert_balanced {
    ($listener:expr) => {
        assert!(
            $listener.is_balanced(),
            "Unbalanced flattening: {} pushes, {} pops, {} mismatched",
            $listener.push_count(),
            $listener.pop_count(),
            $listener.mismatched_pops
        );
    };
}

/// Assert that `flattener` produces the same text and the same callback
/// sequence, pushed styles included, for both trees
#[macro_export]
macro_rules! assert_same_flattening {
    ($flattener:expr, $left:expr, $right:expr) => {
        let flattener = &$flattener;
        let (left_tree, right_tree) = (&$left, &$right);
        let left = $crate::common::assertions::record(flattener, left_tree);
        let right = $crate::common::assertions::record(flattener, right_tree);
        assert_eq!(
            flattener.flatten_to_string(left_tree),
            flattener.flatten_to_string(right_tree),
            "Flattened text differs"
        );
        assert_eq!(
            left.events, right.events,
            "Flattener callbacks differ\nLeft: {:?}\nRight: {:?}",
            left_tree, right_tree
        );
    };
}

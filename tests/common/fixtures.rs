use quill::{ClickEvent, Component, Decoration, HoverEvent, NamedTextColor, Style};

/// Children repeat styles their parent already sets.
pub fn redundant_styles() -> Component {
    let red = Style::empty().with_color(NamedTextColor::Red);
    Component::text_styled("a", red.clone())
        .append(Component::text_styled("b", red.clone()))
        .append(Component::text_styled("c", red.decorate(Decoration::Bold)))
}

/// An empty text child sitting between two styled siblings.
pub fn with_empty_child() -> Component {
    Component::text("x")
        .append(Component::text_styled("y", Style::empty().with_color(NamedTextColor::Blue)))
        .append(Component::empty())
        .append(Component::text("z").decorate(Decoration::Italic))
}

/// Nothing in this tree can be removed without changing how it renders.
pub fn no_redundancy() -> Component {
    Component::text_styled("head", Style::empty().with_color(NamedTextColor::Gold))
        .append(Component::text("one").with_color(NamedTextColor::Green).decorate(Decoration::Bold))
        .append(
            Component::text("two")
                .with_click_event(ClickEvent::RunCommand("/help".into()))
                .with_hover_event(HoverEvent::show_text("tip")),
        )
}

/// A chain of `depth` nested text nodes, alternating colors.
pub fn deep_tree(depth: usize) -> Component {
    let colors = [NamedTextColor::Red, NamedTextColor::Green, NamedTextColor::Blue];
    let mut current = Component::text(format!("leaf{depth}"));
    for level in (0..depth).rev() {
        current = Component::text(format!("n{level} "))
            .with_color(colors[level % colors.len()])
            .append(current);
    }
    current
}

/// A root with `width` children, each holding a few styled words.
pub fn wide_tree(width: usize) -> Component {
    let children = (0..width).map(|i| {
        let color = if i % 2 == 0 { NamedTextColor::Aqua } else { NamedTextColor::Yellow };
        Component::text(format!("item {i}: "))
            .with_color(color)
            .append(Component::text("the quick brown fox").decorate(Decoration::Bold))
            .append(Component::text(" jumps over the lazy dog"))
    });
    Component::text_styled("", Style::empty().with_color(NamedTextColor::White))
        .with_children(children)
}

/// Adjacent text siblings sharing one style.
pub fn equal_siblings() -> Component {
    let green = Style::empty().with_color(NamedTextColor::Green);
    Component::text_styled("", Style::empty().decorate(Decoration::Bold)).with_children([
        Component::text_styled("one ", green.clone()),
        Component::text_styled("two ", green.clone()),
        Component::text_styled("three", green),
    ])
}

/// An empty, non-interactive text node wrapping a single child.
pub fn single_child_wrapper() -> Component {
    Component::text("")
        .decorate(Decoration::Italic)
        .append(
            Component::text("only")
                .with_color(NamedTextColor::Red)
                .decorate(Decoration::Italic),
        )
}

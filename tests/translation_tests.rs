mod common;

use common::TestResult;
use quill::prelude::*;
use quill::text::translation::MessageFormat;
use quill::{TextError, TranslatableRenderer, TranslationRegistry, Translator};

fn registry() -> Result<TranslationRegistry, TextError> {
    let mut registry = TranslationRegistry::new("en_us");
    registry.register_all(
        "en_us",
        [
            ("item.count", "%s x%s"),
            ("list.header", "Inventory of {0}:"),
        ],
    )?;
    registry.register("list.header", "nb_no", "Inventaret til {0}:")?;
    Ok(registry)
}

/// Resolves every key to an uppercase echo of itself.
struct Shouting;

impl Translator for Shouting {
    fn translate(&self, key: &str, _locale: &str) -> Option<MessageFormat> {
        MessageFormat::parse(&format!("{}!", key.to_uppercase())).ok()
    }
}

#[test]
fn test_render_tree_for_locales() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let registry = registry()?;
    let renderer = TranslatableRenderer::new(&registry);
    let message = Component::translatable("list.header", [TranslationArgument::from("Alex")])
        .append_newline()
        .append(Component::translatable(
            "item.count",
            [TranslationArgument::from("Apple"), TranslationArgument::from(3)],
        ));

    assert_flattens_to!(renderer.render(&message, "en-US"), "Inventory of Alex:\nApple x3");
    assert_flattens_to!(renderer.render(&message, "nb_NO"), "Inventaret til Alex:\nApple x3");
    assert_flattens_to!(renderer.render(&message, "nb"), "Inventory of Alex:\nApple x3");
    Ok(())
}

#[test]
fn test_rendered_output_survives_compaction() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let registry = registry()?;
    let message = Component::translatable(
        "item.count",
        [
            TranslationArgument::from(Component::text("Sword").with_color(NamedTextColor::Aqua)),
            TranslationArgument::from(1),
        ],
    )
    .with_color(NamedTextColor::Gray);

    let rendered = TranslatableRenderer::new(&registry).render(&message, "en_us");
    let compacted = rendered.compact();
    assert_renders_identically!(rendered, compacted);
    assert_eq!(compacted.color(), Some(NamedTextColor::Gray.into()));
    Ok(())
}

#[test]
fn test_custom_translator() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let renderer = TranslatableRenderer::new(&Shouting);
    let joined = JoinConfiguration::commas(true).join([
        Component::translatable("yes", Vec::new()),
        Component::translatable("no", Vec::new()),
    ]);
    assert_flattens_to!(renderer.render(&joined, "any"), "YES!, NO!");

    let dynamic: &dyn Translator = &Shouting;
    assert_flattens_to!(
        TranslatableRenderer::new(dynamic).render(&Component::translatable("ok", Vec::new()), "en"),
        "OK!"
    );
    Ok(())
}

#[test]
fn test_duplicate_registration_is_reported() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut registry = registry()?;
    let err = registry.register("item.count", "EN_US", "%s times %s");
    assert!(matches!(
        err,
        Err(TextError::DuplicateTranslation { ref key, .. }) if key == "item.count"
    ));
    assert!(registry.contains("item.count"));
    Ok(())
}

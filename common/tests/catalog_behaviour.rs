//! Behaviour-driven coverage for catalog merges, fallback and locale
//! selection.
//!
//! Scenarios mirror how hosts override bundled strings and how plugins add
//! partial locales that lean on the English defaults.

use std::cell::RefCell;
use std::str::FromStr;

use lexis_common::i18n::testing::FixedDetector;
use lexis_common::i18n::{
    LocaleRequest, LocaleSelection, LocaleSource, MessageCatalog, MessageNode, MessageTree,
    Messages,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

mod support;
use support::{StepText, key_path};

#[derive(Default)]
struct CatalogWorld {
    catalog: RefCell<Option<MessageCatalog>>,
    detector: RefCell<FixedDetector>,
    selection: RefCell<Option<LocaleSelection>>,
}

impl CatalogWorld {
    fn with_catalog<T>(&self, action: impl FnOnce(&mut MessageCatalog) -> T) -> T {
        let mut borrow = self.catalog.borrow_mut();
        let catalog = borrow
            .as_mut()
            .unwrap_or_else(|| panic!("the catalog should have been created"));
        action(catalog)
    }

    fn selection(&self) -> LocaleSelection {
        self.selection
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("a locale should have been selected"))
    }
}

#[derive(Debug)]
struct StepSource(LocaleSource);

impl FromStr for StepSource {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "explicit" => Ok(Self(LocaleSource::Explicit)),
            "detected" => Ok(Self(LocaleSource::Detected)),
            "fallback" => Ok(Self(LocaleSource::Fallback)),
            other => Err(format!("unknown locale source '{other}'")),
        }
    }
}

fn tree_for(path: &[String], value: String) -> Option<MessageTree> {
    let (last, parents) = path.split_last()?;
    let leaf = MessageTree::from_iter([(last.clone(), MessageNode::from(value))]);
    Some(parents.iter().rev().fold(leaf, |child, segment| {
        MessageTree::from_iter([(segment.clone(), child)])
    }))
}

#[fixture]
fn world() -> CatalogWorld {
    CatalogWorld::default()
}

#[given("the built-in catalog")]
fn built_in_catalog(world: &CatalogWorld) {
    let catalog = MessageCatalog::with_defaults()
        .unwrap_or_else(|error| panic!("built-in bundle should parse: {error}"));
    world.catalog.borrow_mut().replace(catalog);
}

#[given("the detector has no answer")]
fn detector_reports_nothing(world: &CatalogWorld) {
    *world.detector.borrow_mut() = FixedDetector::new(None);
}

#[given("the detector reports {locale}")]
fn detector_reports(world: &CatalogWorld, locale: StepText) {
    *world.detector.borrow_mut() = FixedDetector::new(Some(locale.as_ref()));
}

#[when("the {locale} message {key} is overridden with {value}")]
fn override_message(world: &CatalogWorld, locale: StepText, key: StepText, value: StepText) {
    let path = key_path(key.as_ref());
    let tree = tree_for(&path, value.into_inner())
        .unwrap_or_else(|| panic!("override keys must not be empty"));
    world.with_catalog(|catalog| {
        catalog.add_messages(Messages::from([(locale.into_inner(), tree)]));
    });
}

#[when("the user switches to locale {locale}")]
fn set_active_locale(world: &CatalogWorld, locale: StepText) {
    world.with_catalog(|catalog| catalog.set_locale(locale.as_ref()));
}

#[when("the locale {request} is selected")]
fn select_locale(world: &CatalogWorld, request: StepText) {
    let parsed = request
        .as_ref()
        .parse::<LocaleRequest>()
        .unwrap_or_else(|error| panic!("invalid locale request: {error}"));
    let detector = world.detector.borrow().clone();
    let selection = world.with_catalog(|catalog| catalog.select_locale(&parsed, &detector));
    world.selection.borrow_mut().replace(selection);
}

#[then("resolving {key} in {locale} yields {expected}")]
fn resolves_to(world: &CatalogWorld, key: StepText, locale: StepText, expected: StepText) {
    let path = key_path(key.as_ref());
    let resolved = world.with_catalog(|catalog| {
        catalog
            .resolve(locale.as_ref(), path.as_slice())
            .map(str::to_owned)
    });
    assert_eq!(resolved.as_deref(), Some(expected.as_ref()));
}

#[then("resolving {key} in {locale} is absent")]
fn resolves_to_nothing(world: &CatalogWorld, key: StepText, locale: StepText) {
    let path = key_path(key.as_ref());
    let resolved = world.with_catalog(|catalog| {
        catalog
            .resolve(locale.as_ref(), path.as_slice())
            .map(str::to_owned)
    });
    assert_eq!(resolved, None);
}

#[then("the active locale is {expected}")]
fn active_locale_is(world: &CatalogWorld, expected: StepText) {
    let locale = world.with_catalog(|catalog| catalog.locale().to_owned());
    assert_eq!(locale, expected.as_ref());
}

#[then("the locale source is {expected}")]
fn locale_source_is(world: &CatalogWorld, expected: StepSource) {
    assert_eq!(world.selection().source(), expected.0);
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn scenario_override_keeps_siblings(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn scenario_missing_locale_falls_back(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn scenario_missing_path_appears(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 3)]
fn scenario_inner_namespace_absent(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 4)]
fn scenario_auto_selection_detects(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 5)]
fn scenario_auto_selection_falls_back(world: CatalogWorld) {
    let _ = world;
}

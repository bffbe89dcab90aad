use locq::{Locator, LocatorError, PredicateKey};
use tracing::{debug, Level};

fn main() -> Result<(), LocatorError> {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(Level::DEBUG)
        .init();

    // example catalog, in construction order
    let catalog = [
        Locator::id(" 1 ").and(Locator::name("")),
        Locator::id("ID 4"),
        Locator::id("ID 1")
            .and(Locator::class("CLASS 2"))
            .and(Locator::name("NAME 3")),
        Locator::button()
            .and(Locator::class("CLASS 332"))
            .and(Locator::name("NAME-4"))
            .child(Locator::id("_id_")),
        Locator::combobox(),
        Locator::button().and(Locator::id("U")),
        Locator::edit().child(Locator::name("").and(Locator::button()).and(Locator::id("I"))),
        Locator::edit()
            .and(Locator::combobox())
            .and(Locator::button())
            .child(Locator::edit()),
    ];

    for (num, loc) in catalog.iter().enumerate() {
        println!("loc {} = '{loc}'", num + 1);
    }

    // engine-facing callers usually hold plain key tags; parsing validates
    // them before a query is built
    let key: PredicateKey = "class".parse()?;
    let scoped = Locator::button().child(Locator::predicate(key, "TitleBar 1")?);
    debug!("scoped query: {scoped}");

    Ok(())
}

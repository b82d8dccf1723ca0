//! Page rendering.
//!
//! Every page is a plain HTML string assembled from catalogue records. Free
//! text fields that mention other entities go through the [`EntityLinker`];
//! related-name lists (a civilization's leaders, a unit's civilizations)
//! link by slug. An unresolved name renders the collection's not-found
//! message as an ordinary page, never an error status.

use codex_data::{Catalog, Collection};

use crate::linker::EntityLinker;
use crate::slug::slugify;

/// Landing page: one entry per collection.
pub fn home(catalog: &Catalog) -> String {
    let mut items = String::new();
    for collection in Collection::ALL {
        items.push_str(&format!(
            "<li><a href=\"/{seg}\">{title}</a> ({count})</li>\n",
            seg = collection.path_segment(),
            title = collection.title(),
            count = catalog.names(collection).count(),
        ));
    }
    shell(
        "Imperium Codex",
        &format!("<h1>Imperium Codex</h1>\n<ul class=\"collections\">\n{items}</ul>"),
    )
}

/// Index page for one collection: every entity name, linked by slug.
pub fn collection_index(catalog: &Catalog, collection: Collection) -> String {
    let mut items = String::new();
    for name in catalog.names(collection) {
        items.push_str(&format!(
            "<li><a href=\"/{seg}/{slug}\">{name}</a></li>\n",
            seg = collection.path_segment(),
            slug = slugify(name),
        ));
    }
    shell(
        collection.title(),
        &format!(
            "<h1>{title}</h1>\n<ul class=\"index\">\n{items}</ul>",
            title = collection.title()
        ),
    )
}

/// Detail page for one entity, resolved from a route parameter.
pub fn detail(
    catalog: &Catalog,
    linker: &EntityLinker,
    collection: Collection,
    param: &str,
) -> String {
    let Some(key) = catalog.resolve(collection, param) else {
        return not_found(collection);
    };
    match collection {
        Collection::Civilizations => civilization(catalog, linker, key),
        Collection::Leaders => leader(catalog, linker, key),
        Collection::Units => unit(catalog, linker, key),
        Collection::Resources => resource(catalog, linker, key),
        Collection::Wonders => wonder(catalog, linker, key),
        Collection::VictoryTypes => victory(catalog, linker, key),
    }
}

fn civilization(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.civilizations[key];
    let heading = match record.icon.as_deref() {
        Some(icon) => format!("{icon} {key}"),
        None => key.to_string(),
    };
    let body = format!(
        "<article>\n<h1>{heading}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {leaders}{victories}{units}{wonders}{relations}</article>",
        description = linker.link(&record.description),
        leaders = section(
            "Leaders",
            &name_list(&record.leaders, Collection::Leaders)
        ),
        victories = section(
            "Victory Types",
            &name_list(&record.victory_types, Collection::VictoryTypes)
        ),
        units = section(
            "Unique Units",
            &name_list(&record.unique_units, Collection::Units)
        ),
        wonders = section(
            "Wonders",
            &name_list(&record.wonders, Collection::Wonders)
        ),
        relations = section(
            "Historical Relations",
            &format!("<p>{}</p>", linker.link(&record.historical_relations))
        ),
    );
    shell(key, &body)
}

fn leader(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.leaders[key];
    let abilities: String = record
        .abilities
        .iter()
        .map(|a| format!("<li>{a}</li>\n"))
        .collect();
    let body = format!(
        "<article>\n<h1>{key}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {civ}{abilities}{tendency}</article>",
        description = linker.link(&record.description),
        civ = section(
            "Civilization",
            &format!(
                "<p><a href=\"/civilizations/{}\">{}</a></p>",
                slugify(&record.civilization),
                record.civilization
            )
        ),
        abilities = section("Unique Abilities", &format!("<ul>\n{abilities}</ul>")),
        tendency = section(
            "Leadership Tendencies",
            &format!("<p>{}</p>", record.tendency)
        ),
    );
    shell(key, &body)
}

fn unit(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.units[key];
    let body = format!(
        "<article>\n<h1>{key}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {category}{strength}{civs}{context}{strategies}</article>",
        description = linker.link(&record.description),
        category = section("Type", &format!("<p>{}</p>", record.category)),
        strength = section("Strength", &format!("<p>{}</p>", record.strength)),
        civs = section(
            "Civilizations",
            &name_list(&record.civilizations, Collection::Civilizations)
        ),
        context = section(
            "Historical Context",
            &format!("<p>{}</p>", record.historical_context)
        ),
        strategies = section("Strategies", &format!("<p>{}</p>", record.strategies)),
    );
    shell(key, &body)
}

fn resource(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.resources[key];
    let body = format!(
        "<article>\n<h1>{key}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {uses}{found}{context}{trivia}{civs}</article>",
        description = linker.link(&record.description),
        uses = section("Uses", &format!("<p>{}</p>", linker.link(&record.uses))),
        found = section("Found In", &format!("<p>{}</p>", record.found_in)),
        context = section(
            "Historical Context",
            &format!("<p>{}</p>", linker.link(&record.historical_context))
        ),
        trivia = section("Trivia", &format!("<p>{}</p>", linker.link(&record.trivia))),
        civs = section(
            "Benefiting Civilizations",
            &name_list(&record.civilizations, Collection::Civilizations)
        ),
    );
    shell(key, &body)
}

fn wonder(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.wonders[key];
    let body = format!(
        "<article>\n<h1>{key}</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {civ}{benefits}{context}{trivia}</article>",
        description = linker.link(&record.description),
        civ = section(
            "Civilization",
            &format!(
                "<p><a href=\"/civilizations/{}\">{}</a></p>",
                slugify(&record.civilization),
                record.civilization
            )
        ),
        benefits = section(
            "Benefits",
            &format!("<p>{}</p>", linker.link(&record.benefits))
        ),
        context = section(
            "Historical Context",
            &format!("<p>{}</p>", linker.link(&record.historical_context))
        ),
        trivia = section("Trivia", &format!("<p>{}</p>", linker.link(&record.trivia))),
    );
    shell(key, &body)
}

fn victory(catalog: &Catalog, linker: &EntityLinker, key: &str) -> String {
    let record = &catalog.victory_types[key];
    let body = format!(
        "<article>\n<h1>{key} Victory</h1>\n\
         <p class=\"description\">{description}</p>\n\
         {civs}</article>",
        description = linker.link(&record.description),
        civs = section(
            &format!("Best Civilizations for {key} Victory"),
            &name_list(&record.best_civilizations, Collection::Civilizations)
        ),
    );
    shell(&format!("{key} Victory"), &body)
}

/// Not-found body for a detail page; rendered as a normal page.
pub fn not_found(collection: Collection) -> String {
    shell(
        "Not Found",
        &format!(
            "<p class=\"not-found\">{} not found.</p>",
            collection.singular()
        ),
    )
}

fn name_list(names: &[String], collection: Collection) -> String {
    let items: String = names
        .iter()
        .map(|name| {
            format!(
                "<li><a href=\"/{seg}/{slug}\">{name}</a></li>\n",
                seg = collection.path_segment(),
                slug = slugify(name),
            )
        })
        .collect();
    format!("<ul>\n{items}</ul>")
}

fn section(heading: &str, inner: &str) -> String {
    format!("<section>\n<h2>{heading}</h2>\n{inner}\n</section>\n")
}

fn shell(title: &str, body: &str) -> String {
    let mut nav = String::from("<a href=\"/\">Home</a>");
    for collection in Collection::ALL {
        nav.push_str(&format!(
            " | <a href=\"/{}\">{}</a>",
            collection.path_segment(),
            collection.title()
        ));
    }
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} — Imperium Codex</title>\n</head>\n<body>\n\
         <nav>{nav}</nav>\n{body}\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_data::{load_catalog, Catalog, CatalogSource};

    fn fixtures() -> (Catalog, EntityLinker) {
        let catalog = load_catalog(CatalogSource::Embedded).unwrap();
        let linker = EntityLinker::from_catalog(&catalog);
        (catalog, linker)
    }

    #[test]
    fn detail_links_description_prose() {
        let (catalog, linker) = fixtures();
        let page = detail(&catalog, &linker, Collection::Wonders, "the-great-library");
        assert!(page.contains("<h1>The Great Library</h1>"));
        // "Egypt" appears in the wonder's historical context and must be linked.
        assert!(page.contains(r#"<a href="/civilizations/Egypt">Egypt</a>"#));
    }

    #[test]
    fn detail_resolves_dashed_lowercase_param() {
        let (catalog, linker) = fixtures();
        let page = detail(&catalog, &linker, Collection::Leaders, "julius-caesar");
        assert!(page.contains("<h1>Julius Caesar</h1>"));
        assert!(page.contains(r#"<a href="/civilizations/rome">Rome</a>"#));
    }

    #[test]
    fn unknown_name_renders_not_found_message() {
        let (catalog, linker) = fixtures();
        let page = detail(&catalog, &linker, Collection::Civilizations, "nonexistent-civ");
        assert!(page.contains("Civilization not found."));
        let page = detail(&catalog, &linker, Collection::Units, "nonexistent-unit");
        assert!(page.contains("Unit not found."));
    }

    #[test]
    fn index_links_by_slug() {
        let (catalog, _) = fixtures();
        let page = collection_index(&catalog, Collection::Civilizations);
        assert!(page.contains(r#"<a href="/civilizations/united-kingdom">United Kingdom</a>"#));
    }

    #[test]
    fn victory_page_lists_best_civilizations() {
        let (catalog, linker) = fixtures();
        let page = detail(&catalog, &linker, Collection::VictoryTypes, "domination");
        assert!(page.contains("<h1>Domination Victory</h1>"));
        assert!(page.contains(r#"<a href="/civilizations/rome">Rome</a>"#));
    }

    #[test]
    fn home_lists_every_collection() {
        let (catalog, _) = fixtures();
        let page = home(&catalog);
        for collection in Collection::ALL {
            assert!(page.contains(collection.title()));
        }
    }
}

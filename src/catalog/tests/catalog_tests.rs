use super::*;

#[test]
fn all_returns_the_full_catalog_in_order() {
    let catalog = CatalogStore::new();
    let movies = catalog.all();
    assert_eq!(movies.len(), 8);
    assert_eq!(movies[0].id, "star1");
    assert_eq!(movies[7].id, "trans5");
}

#[test]
fn get_finds_exact_id_only() {
    let catalog = CatalogStore::new();
    let movie = catalog.get("trans3").expect("trans3");
    assert_eq!(movie.title, "Transformers: Dark of the Moon");
    assert!(catalog.get("star99").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let catalog = CatalogStore::new();
    let hits = catalog.search("STAR WARS");
    assert_eq!(hits.len(), 3);
    assert!(hits
        .iter()
        .all(|movie| movie.title.to_lowercase().contains("star wars")));
}

#[test]
fn search_with_no_match_is_empty() {
    let catalog = CatalogStore::new();
    assert!(catalog.search("jurassic").is_empty());
}

#[test]
fn empty_query_matches_every_title() {
    // The "blank input shows everything" policy lives in the gallery
    // controller; the raw query treats "" as a universal substring.
    let catalog = CatalogStore::new();
    assert_eq!(catalog.search("").len(), 8);
}

#[test]
fn by_category_preserves_catalog_order() {
    let catalog = CatalogStore::new();
    let action = catalog.by_category("action");
    let ids: Vec<&str> = action.iter().map(|movie| movie.id.as_str()).collect();
    assert_eq!(ids, ["trans1", "trans2", "trans3", "trans4", "trans5"]);
    assert!(action.iter().all(|movie| movie.category == "action"));
}

#[test]
fn unknown_category_is_empty() {
    let catalog = CatalogStore::new();
    assert!(catalog.by_category("documentary").is_empty());
}

#[test]
fn related_excludes_current_and_caps_results() {
    let catalog = CatalogStore::new();
    let related = catalog.related("trans2", "action", 3);
    let ids: Vec<&str> = related.iter().map(|movie| movie.id.as_str()).collect();
    assert_eq!(ids, ["trans1", "trans3", "trans4"]);
    assert!(related
        .iter()
        .all(|movie| movie.id != "trans2" && movie.category == "action"));
}

#[test]
fn related_in_sparse_category_returns_what_exists() {
    let catalog = CatalogStore::new();
    let related = catalog.related("star1", "sci-fi", 3);
    let ids: Vec<&str> = related.iter().map(|movie| movie.id.as_str()).collect();
    assert_eq!(ids, ["star2", "star3"]);
}

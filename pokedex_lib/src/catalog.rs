//! Catalog-level filtering: pseudo-type exclusion and name search.

use pokeapi_client::types::NamedResource;

use crate::view::TypeDescriptor;

/// Types the upstream lists that have no gameplay members.
pub const EXCLUDED_TYPES: &[&str] = &["unknown", "shadow"];

pub fn is_excluded_type(name: &str) -> bool {
    EXCLUDED_TYPES.contains(&name)
}

/// Descriptors for every listed type except [`EXCLUDED_TYPES`], upstream
/// order preserved.
pub fn type_descriptors(types: &[NamedResource]) -> Vec<TypeDescriptor> {
    types
        .iter()
        .filter(|t| !is_excluded_type(&t.name))
        .map(|t| TypeDescriptor::new(&t.name))
        .collect()
}

/// Case-insensitive substring match over a name catalog, catalog order
/// preserved. A blank query matches nothing.
pub fn filter_catalog(catalog: &[NamedResource], query: &str) -> Vec<NamedResource> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<NamedResource> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            })
            .collect()
    }

    #[test]
    fn excludes_pseudo_types() {
        let descriptors = type_descriptors(&named(&["fire", "water", "unknown", "shadow"]));
        assert_eq!(
            descriptors,
            vec![
                TypeDescriptor {
                    name: "fire".to_string(),
                    display_name: "Fire".to_string()
                },
                TypeDescriptor {
                    name: "water".to_string(),
                    display_name: "Water".to_string()
                },
            ]
        );
    }

    #[test]
    fn exclusion_list_is_exact() {
        assert!(is_excluded_type("unknown"));
        assert!(is_excluded_type("shadow"));
        assert!(!is_excluded_type("ghost"));
        assert!(!is_excluded_type("dark"));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = named(&["pikachu", "raichu", "pichu", "bulbasaur"]);
        let names: Vec<_> = filter_catalog(&catalog, "CHU")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["pikachu", "raichu", "pichu"]);
    }

    #[test]
    fn filter_blank_query_matches_nothing() {
        let catalog = named(&["pikachu"]);
        assert!(filter_catalog(&catalog, "   ").is_empty());
    }

    #[test]
    fn filter_no_match() {
        let catalog = named(&["pikachu"]);
        assert!(filter_catalog(&catalog, "mew").is_empty());
    }
}

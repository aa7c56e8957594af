use pokedex_lib::catalog::type_descriptors;
use pokedex_lib::detail::{merge_detail, SpeciesLookup};
use pokedex_lib::types::{NamedResourceList, Pokemon, Species};
use pokedex_lib::{ListPage, Summary};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
    let path = workspace_root()
        .join("pokeapi_client/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture deserializes")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn assert_valid(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator =
        jsonschema::draft202012::new(&schema).unwrap_or_else(|e| panic!("{schema_name}: {e}"));
    if let Err(e) = validator.validate(data) {
        panic!("data failed validation against {schema_name}: {e}");
    }
}

fn assert_invalid(schema_name: &str, data: &Value, reason: &str) {
    let schema = load_schema(schema_name);
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(data).is_err(), "{reason}");
}

fn pikachu_detail() -> Value {
    let pokemon: Pokemon = load_fixture("pikachu.json");
    let species: Species = load_fixture("pikachu_species.json");
    serde_json::to_value(merge_detail(&pokemon, &SpeciesLookup::Loaded(species))).unwrap()
}

fn starter_page() -> Value {
    let pikachu: Pokemon = load_fixture("pikachu.json");
    let charizard: Pokemon = load_fixture("charizard.json");
    let items = vec![
        Summary::from(&pikachu),
        Summary::from(&charizard),
        Summary::minimal(132, "ditto"),
    ];
    serde_json::to_value(ListPage::new(items, 1302, 1, 20)).unwrap()
}

// ---------------------------------------------------------------------------
// Positive validation: serialized view models conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_detail_conforms_to_schema() {
    assert_valid("detail.schema.json", &pikachu_detail());
}

#[test]
fn test_detail_with_defaults_conforms_to_schema() {
    let charizard: Pokemon = load_fixture("charizard.json");
    let record = merge_detail(&charizard, &SpeciesLookup::Unavailable);
    let data = serde_json::to_value(record).unwrap();
    assert!(data["spriteUrl"].is_null());
    assert!(data["genus"].is_null());
    assert_valid("detail.schema.json", &data);
}

#[test]
fn test_detail_without_english_species_text_conforms_to_schema() {
    let pokemon: Pokemon = load_fixture("pikachu.json");
    let species: Species = load_fixture("species_no_english.json");
    let record = merge_detail(&pokemon, &SpeciesLookup::Loaded(species));
    assert_valid("detail.schema.json", &serde_json::to_value(record).unwrap());
}

#[test]
fn test_list_page_conforms_to_schema() {
    assert_valid("list_page.schema.json", &starter_page());
}

#[test]
fn test_empty_list_page_conforms_to_schema() {
    let data = serde_json::to_value(ListPage::empty(20)).unwrap();
    assert_valid("list_page.schema.json", &data);
}

#[test]
fn test_type_list_conforms_to_schema() {
    let types: NamedResourceList = load_fixture("types.json");
    let data = serde_json::to_value(type_descriptors(&types.results)).unwrap();
    assert_eq!(data.as_array().map(Vec::len), Some(2));
    assert_valid("type_list.schema.json", &data);
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_detail_schema_rejects_missing_required_field() {
    let mut data = pikachu_detail();
    data.as_object_mut()
        .expect("detail is an object")
        .remove("displayName");
    assert_invalid(
        "detail.schema.json",
        &data,
        "schema should reject detail missing displayName",
    );
}

#[test]
fn test_detail_schema_rejects_snake_case_fields() {
    let mut data = pikachu_detail();
    let obj = data.as_object_mut().expect("detail is an object");
    let sprite = obj.remove("spriteUrl").unwrap_or(Value::Null);
    obj.insert("sprite_url".to_string(), sprite);
    assert_invalid(
        "detail.schema.json",
        &data,
        "schema should reject snake_case field names",
    );
}

#[test]
fn test_list_page_schema_rejects_oversized_page() {
    let mut data = starter_page();
    data["pageSize"] = Value::Number(500.into());
    assert_invalid(
        "list_page.schema.json",
        &data,
        "schema should reject pageSize above the cap",
    );
}

#[test]
fn test_list_page_schema_rejects_bad_summary() {
    let mut data = starter_page();
    data["items"][0]["types"] = Value::String("electric".to_string());
    assert_invalid(
        "list_page.schema.json",
        &data,
        "schema should reject types that are not an array",
    );
}

#[test]
fn test_type_list_schema_rejects_pseudo_types() {
    let data = serde_json::json!([{ "name": "shadow", "displayName": "Shadow" }]);
    assert_invalid(
        "type_list.schema.json",
        &data,
        "schema should reject pseudo-types",
    );
}

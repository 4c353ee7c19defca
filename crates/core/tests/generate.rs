//! End-to-end generation from a collection export fixture.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use valigen_common::Inflector;
use valigen_core::{CollectionDescriptor, Templates, generate, generate_from_json, parse_collections};

const FIXTURE: &str = include_str!("fixtures/pb_schema.json");

fn collections() -> Vec<CollectionDescriptor> {
    parse_collections(FIXTURE).expect("fixture should parse")
}

fn render(collections: &[CollectionDescriptor]) -> String {
    generate(collections, &Inflector::new(), &Templates::default())
}

/// Text between a collection's section banner and the next banner (or the registry).
fn section<'a>(output: &'a str, title: &str) -> &'a str {
    let banner = format!("\n{title} COLLECTION\n");
    let start = output
        .find(&banner)
        .unwrap_or_else(|| panic!("no section for {title}"))
        + banner.len();
    let rest = &output[start..];
    let end = rest
        .find("/*=====")
        .or_else(|| rest.find("// Central registry"))
        .unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn test_fixture_parses_and_skips_nulls() {
    let collections = collections();
    let names: Vec<&str> = collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["users", "todos"]);
    assert!(collections[1].fields.iter().all(|f| !f.name.is_empty()));
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_from_json(FIXTURE, &Inflector::new(), &Templates::default()).unwrap();
    let second = generate_from_json(FIXTURE, &Inflector::new(), &Templates::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_output_block_order() {
    let output = render(&collections());
    let positions: Vec<usize> = [
        "import * as v from \"valibot\";",
        "export const Collections = {",
        "const systemFieldsSchema",
        "\nUSERS COLLECTION\n",
        "\nTODOS COLLECTION\n",
        "export const registry = {",
        "export type ResponseTypes = {",
        "export type TypedPocketBase",
    ]
    .iter()
    .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "blocks out of order: {positions:?}"
    );
}

#[test]
fn test_reordering_input_reorders_sections() {
    let mut collections = collections();
    collections.reverse();
    let output = render(&collections);

    let todos = output.find("\nTODOS COLLECTION\n").unwrap();
    let users = output.find("\nUSERS COLLECTION\n").unwrap();
    assert!(todos < users);

    assert!(output.contains("export const Collections = {\n  Todo: 'todos',\n  User: 'users',\n} as const;"));
    assert!(output.contains("export type ResponseTypes = {\n  todos: Todo;\n  users: User;\n};"));
}

#[test]
fn test_auth_collection_section() {
    let output = render(&collections());
    let users = section(&output, "USERS");

    assert!(users.contains("  ...systemFieldsSchema('users').entries,\n"));
    assert!(users.contains("  email: optionalTextResponse(emailSchema),\n"));
    assert!(users.contains("  email: emailSchema,\n"));
    assert!(users.contains("  emailVisibility: v.optional(v.boolean()),\n"));
    assert!(users.contains(
        "  name: v.optional(v.pipe(v.string(), v.maxLength(255, \"Input must be at most 255 characters\"))),\n"
    ));
    assert!(users.contains("  avatar: optionalTextResponse(fileNameSchema),\n"));
    assert!(users.contains(
        "'Please select one of the following file types: JPEG or PNG or SVG+XML or GIF or WEBP'"
    ));

    // system and hidden fields
    for skipped in ["  id:", "  password:", "  tokenKey:", "  created:", "  updated:"] {
        assert!(!users.contains(skipped), "{skipped} should be skipped");
    }

    assert!(users.contains("// No expand relations defined for User\nexport type UserExpand = {};"));
    assert!(users.contains("export const createUserSchema = createAuthSchema(userInput);"));
    assert!(users.contains("export const updateUserSchema = updateAuthSchema(userInput);"));
}

#[test]
fn test_base_collection_section() {
    let output = render(&collections());
    let todos = section(&output, "TODOS");

    assert!(todos.contains(
        "  title: v.pipe(v.string(), v.minLength(3, \"Input must be at least 3 characters\"), v.maxLength(120, \"Input must be at most 120 characters\")),\n"
    ));
    assert!(todos.contains("  status: v.array(v.string()),\n"));
    assert!(todos.contains("  status: stringEnum('Due', 'In progress', 'Completed'),\n"));
    assert!(todos.contains(
        "  priority: v.optional(v.pipe(v.number(), v.integer(\"Only integers are allowed.\"), v.minValue(1, \"Input must be greater than 0\"), v.maxValue(5, \"Input must be lower than 6\"))),\n"
    ));
    assert!(todos.contains("  due: optionalTextResponse(isoDateStringSchema),\n"));
    assert!(todos.contains(
        "  attachments: v.optional(v.array(v.pipe(fileSchema, v.maxSize(1024 * 1024 * 10, 'Please select a file smaller than 10 MB'))), []),\n"
    ));
    assert!(todos.contains("  link: v.optional(onlyDomains('github.com')),\n"));
    assert!(todos.contains("  location: v.optional(geoPointSchema),\n"));
    assert!(todos.contains("  description: optionalTextResponse(editorSchema),\n"));

    // reserved word is quoted, plain identifier is not
    assert!(todos.contains("  'class': optionalTextResponse(v.string()),\n"));
    assert!(!todos.contains("  class:"));
    assert!(todos.contains("  title: "));

    assert!(todos.contains("export const createTodoSchema = createBaseSchema(todoInput);"));
}

#[test]
fn test_relation_expand_types() {
    let output = render(&collections());
    let todos = section(&output, "TODOS");

    assert!(todos.contains("export type TodoExpand = {\n  owner?: User;\n  watchers?: User[];\n};"));
    assert!(todos.contains("export type Todo = TodoFields & Expand<Partial<TodoExpand>>;"));

    // unresolved target keeps its schemas but gets no expand entry
    assert!(todos.contains("  project: optionalTextResponse(v.pipe(v.string(), v.length(15, \"Input must be exactly 15\"), v.brand('Relation'))),\n"));
    assert!(todos.contains("  project: v.optional(v.pipe(v.string(), v.length(15, \"Input must be exactly 15\"), v.brand('Relation'))),\n"));
    assert!(!todos.contains("project?:"));
}

#[test]
fn test_template_overrides() {
    let templates = Templates::default()
        .with_preamble("import * as v from 'valibot';")
        .with_tail("");
    let output = generate(&collections(), &Inflector::new(), &templates);

    assert!(output.starts_with("import * as v from 'valibot';\n\n// All available PocketBase collections"));
    assert!(output.ends_with("  todos: Todo;\n};\n"));
}

#[test]
fn test_underscore_system_collection_names() {
    let json = r#"[{
        "id": "pbc_4275539003",
        "name": "_authOrigins",
        "type": "base",
        "system": true,
        "fields": [
            {"id": "text_fp", "name": "fingerprint", "type": "text", "required": true}
        ]
    }]"#;
    let output = generate_from_json(json, &Inflector::new(), &Templates::default()).unwrap();

    assert!(output.contains("export const authOriginResponse = v.object({"));
    assert!(output.contains("export const authOriginInput = v.object({"));
    assert!(output.contains("export type AuthOriginFields = v.InferOutput<typeof authOriginResponse>;"));
    assert!(output.contains("export const createAuthOriginSchema = createBaseSchema(authOriginInput);"));
    assert!(output.contains("response: authOriginResponse,"));
    assert!(output.contains("_authOrigins: AuthOrigin;"));
    assert!(!output.contains("AuthOriginResponse"));
}

#[test]
fn test_empty_export() {
    let output = generate_from_json("[]", &Inflector::new(), &Templates::default()).unwrap();
    assert!(output.contains("export const Collections = {\n} as const;"));
    assert!(output.contains("export const registry = {\n} as const;"));
    assert!(!output.contains(" COLLECTION\n"));
}

#[test]
fn test_invalid_export_is_rejected() {
    let err = generate_from_json("{\"collections\": []}", &Inflector::new(), &Templates::default())
        .unwrap_err();
    assert!(err.to_string().contains("Failed to parse collection export"));
}

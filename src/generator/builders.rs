//! Content builders, one per artifact type.
//!
//! Each builder takes the canonical subject name plus the namespace for its
//! category and returns a fully-built placeholder map together with the
//! derived destination file name. Maps are complete before any substitution
//! happens and no value contains another placeholder token, so replacement
//! order never matters.

use std::collections::BTreeMap;

use super::naming::{
    pluralize, to_camel_case, to_kebab_case, to_snake_case, to_studly_case, SubjectName,
};

/// Test category, selecting the destination root and namespace segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Model and migration tests (`tests/Unit`)
    Unit,
    /// Controller and route tests (`tests/Feature`)
    Feature,
}

impl Category {
    /// Namespace segment for this category.
    pub fn segment(&self) -> &'static str {
        match self {
            Category::Unit => "Unit",
            Category::Feature => "Feature",
        }
    }
}

/// The four artifact types the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// Model unit test
    Model,
    /// Controller feature test
    Controller,
    /// Migration unit test
    Migration,
    /// Route feature test
    Routes,
}

impl ArtifactKind {
    /// All artifact kinds in the fixed generation order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Model,
        ArtifactKind::Controller,
        ArtifactKind::Migration,
        ArtifactKind::Routes,
    ];

    /// Stub file name this kind resolves.
    pub fn stub_name(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model.test.stub",
            ArtifactKind::Controller => "controller.test.stub",
            ArtifactKind::Migration => "migration.test.stub",
            ArtifactKind::Routes => "route.test.stub",
        }
    }

    /// Category the generated file belongs to.
    pub fn category(&self) -> Category {
        match self {
            ArtifactKind::Model | ArtifactKind::Migration => Category::Unit,
            ArtifactKind::Controller | ArtifactKind::Routes => Category::Feature,
        }
    }

    /// Short label for log and progress output.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Migration => "migration",
            ArtifactKind::Routes => "route",
        }
    }
}

/// A fully-built placeholder map plus the derived destination file name.
#[derive(Debug, Clone)]
pub struct BuiltArtifact {
    /// File name under the category's destination directory
    pub file_name: String,
    /// Placeholder token to replacement value, complete before substitution
    pub replacements: BTreeMap<String, String>,
}

/// Build the placeholder map for an artifact kind.
pub fn build(kind: ArtifactKind, subject: &SubjectName, namespace: &str) -> BuiltArtifact {
    match kind {
        ArtifactKind::Model => build_model_test(subject, namespace),
        ArtifactKind::Controller => build_controller_test(subject, namespace),
        ArtifactKind::Migration => build_migration_test(subject, namespace),
        ArtifactKind::Routes => build_route_test(subject, namespace),
    }
}

/// REST actions covered by generated controller tests.
///
/// A closed set mapped to (expected status, assertion body) pairs, so there
/// is no string-keyed dispatch anywhere in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestAction {
    /// List the collection
    Index,
    /// Fetch one record
    Show,
    /// Create a record
    Store,
    /// Update a record
    Update,
    /// Delete a record
    Destroy,
}

impl RestAction {
    /// All actions in the order their test methods are emitted.
    pub const ALL: [RestAction; 5] = [
        RestAction::Index,
        RestAction::Show,
        RestAction::Store,
        RestAction::Update,
        RestAction::Destroy,
    ];

    /// HTTP status the generated test asserts for this action.
    pub fn expected_status(&self) -> u16 {
        match self {
            RestAction::Index | RestAction::Show | RestAction::Update => 200,
            RestAction::Store => 201,
            RestAction::Destroy => 204,
        }
    }

    fn method_name(&self, model_snake: &str) -> String {
        match self {
            RestAction::Index => format!("test_can_list_{}", pluralize(model_snake)),
            RestAction::Show => format!("test_can_show_{model_snake}"),
            RestAction::Store => format!("test_can_create_{model_snake}"),
            RestAction::Update => format!("test_can_update_{model_snake}"),
            RestAction::Destroy => format!("test_can_delete_{model_snake}"),
        }
    }
}

/// Static illustrative fillable set; real schema discovery is out of scope.
const FILLABLE_FIELDS: [&str; 5] = ["name", "email", "title", "description", "status"];

/// Columns every generated migration test asserts.
const MIGRATION_COLUMNS: [&str; 3] = ["id", "created_at", "updated_at"];

fn build_model_test(subject: &SubjectName, namespace: &str) -> BuiltArtifact {
    let model = subject.studly();
    let mut replacements = BTreeMap::new();
    replacements.insert("{{ModelName}}".to_string(), model.to_string());
    replacements.insert("{{modelName}}".to_string(), subject.camel());
    replacements.insert("{{model_name}}".to_string(), subject.snake());
    replacements.insert("{{table_name}}".to_string(), pluralize(&subject.snake()));
    replacements.insert("{{namespace}}".to_string(), namespace.to_string());
    replacements.insert("{{fillable_fields}}".to_string(), fillable_fields());
    replacements.insert("{{test_data}}".to_string(), test_data(model));
    BuiltArtifact {
        file_name: format!("{model}Test.php"),
        replacements,
    }
}

fn build_controller_test(subject: &SubjectName, namespace: &str) -> BuiltArtifact {
    let controller = subject.studly();
    // Strip one trailing "Controller"; a bare or absent suffix keeps the
    // full name so "Post" and "PostController" both derive model "Post".
    let model = match controller.strip_suffix("Controller") {
        Some(stem) if !stem.is_empty() => stem,
        _ => controller,
    };
    let mut replacements = BTreeMap::new();
    replacements.insert("{{ControllerName}}".to_string(), controller.to_string());
    replacements.insert("{{ModelName}}".to_string(), model.to_string());
    replacements.insert("{{modelName}}".to_string(), to_camel_case(model));
    replacements.insert("{{model_name}}".to_string(), to_snake_case(model));
    replacements.insert(
        "{{route_prefix}}".to_string(),
        pluralize(&to_kebab_case(model)),
    );
    replacements.insert("{{namespace}}".to_string(), namespace.to_string());
    replacements.insert(
        "{{test_methods}}".to_string(),
        controller_test_methods(model),
    );
    BuiltArtifact {
        file_name: format!("{controller}Test.php"),
        replacements,
    }
}

fn build_migration_test(subject: &SubjectName, namespace: &str) -> BuiltArtifact {
    let table = pluralize(&subject.snake());
    let class_name = to_studly_case(&table);
    let mut replacements = BTreeMap::new();
    replacements.insert("{{ClassName}}".to_string(), class_name.clone());
    replacements.insert("{{table_name}}".to_string(), table.clone());
    replacements.insert("{{namespace}}".to_string(), namespace.to_string());
    replacements.insert("{{column_tests}}".to_string(), column_tests(&table));
    BuiltArtifact {
        file_name: format!("{class_name}MigrationTest.php"),
        replacements,
    }
}

fn build_route_test(subject: &SubjectName, namespace: &str) -> BuiltArtifact {
    let resource = subject.studly();
    let route_prefix = pluralize(&subject.kebab());
    let mut replacements = BTreeMap::new();
    replacements.insert("{{ResourceName}}".to_string(), resource.to_string());
    replacements.insert("{{route_prefix}}".to_string(), route_prefix.clone());
    replacements.insert("{{namespace}}".to_string(), namespace.to_string());
    replacements.insert(
        "{{route_tests}}".to_string(),
        route_test_methods(&route_prefix),
    );
    BuiltArtifact {
        file_name: format!("{resource}RouteTest.php"),
        replacements,
    }
}

fn fillable_fields() -> String {
    format!("'{}'", FILLABLE_FIELDS.join("', '"))
}

fn test_data(model: &str) -> String {
    format!(
        "[\n            'name' => 'Test {model}',\n            'email' => 'test@example.com',\n            'status' => 'active',\n        ]"
    )
}

fn controller_test_methods(model: &str) -> String {
    let route = pluralize(&to_kebab_case(model));
    let var = to_camel_case(model);
    let snake = to_snake_case(model);
    RestAction::ALL
        .iter()
        .map(|action| controller_test_method(*action, model, &route, &var, &snake))
        .collect()
}

fn controller_test_method(
    action: RestAction,
    model: &str,
    route: &str,
    var: &str,
    snake: &str,
) -> String {
    let name = action.method_name(snake);
    let status = action.expected_status();
    let body = match action {
        RestAction::Index => format!(
            "        $response = $this->get(route('{route}.index'));\n\
             \x20       $response->assertStatus({status});"
        ),
        RestAction::Show => format!(
            "        ${var} = {model}::factory()->create();\n\
             \x20       $response = $this->get(route('{route}.show', ${var}));\n\
             \x20       $response->assertStatus({status});"
        ),
        RestAction::Store => format!(
            "        $data = {model}::factory()->make()->toArray();\n\
             \x20       $response = $this->post(route('{route}.store'), $data);\n\
             \x20       $response->assertStatus({status});\n\
             \x20       $this->assertDatabaseHas('{route}', $data);"
        ),
        RestAction::Update => format!(
            "        ${var} = {model}::factory()->create();\n\
             \x20       $data = {model}::factory()->make()->toArray();\n\
             \x20       $response = $this->put(route('{route}.update', ${var}), $data);\n\
             \x20       $response->assertStatus({status});\n\
             \x20       $this->assertDatabaseHas('{route}', $data);"
        ),
        RestAction::Destroy => format!(
            "        ${var} = {model}::factory()->create();\n\
             \x20       $response = $this->delete(route('{route}.destroy', ${var}));\n\
             \x20       $response->assertStatus({status});\n\
             \x20       $this->assertDatabaseMissing('{route}', [${var}->getKeyName() => ${var}->getKey()]);"
        ),
    };
    format!("\n    public function {name}()\n    {{\n{body}\n    }}\n")
}

fn column_tests(table: &str) -> String {
    let mut out = format!("\n        $this->assertTrue(Schema::hasTable('{table}'));");
    for column in MIGRATION_COLUMNS {
        out.push_str(&format!(
            "\n        $this->assertTrue(Schema::hasColumn('{table}', '{column}'));"
        ));
    }
    out
}

/// Route probes emitted for a resource: (verb, targets a single item).
const ROUTE_PROBES: [(&str, bool); 5] = [
    ("get", false),
    ("post", false),
    ("get", true),
    ("put", true),
    ("delete", true),
];

/// Synthesize the five route-existence test methods.
///
/// Every method asserts the same five-way disjunction: the resource counts
/// as routed when any of its conventional named routes is registered. A
/// per-verb check is deliberately not synthesized; see DESIGN.md.
fn route_test_methods(route_prefix: &str) -> String {
    let snake_prefix = route_prefix.replace('-', "_");
    let disjunction = ["index", "show", "store", "update", "destroy"]
        .iter()
        .map(|action| format!("Route::has('{route_prefix}.{action}')"))
        .collect::<Vec<_>>()
        .join(" || ");
    ROUTE_PROBES
        .iter()
        .map(|(verb, item)| {
            let name = if *item {
                format!("test_{verb}_{snake_prefix}_{snake_prefix}_route_exists")
            } else {
                format!("test_{verb}_{snake_prefix}_route_exists")
            };
            format!(
                "\n    public function {name}()\n    {{\n        $this->assertTrue({disjunction});\n    }}\n"
            )
        })
        .collect()
}

//! Runs the generated client: selections, documents, variables and decoding.

use clientgen_fixture::graphql::enumeration::Role;
use clientgen_fixture::graphql::input::CreateUserInput;
use clientgen_fixture::graphql::mutation::{CreateUserMutation, DeleteUserMutation};
use clientgen_fixture::graphql::projection::{SearchResultProjection, UserProjection};
use clientgen_fixture::graphql::query::{UsersQuery, VersionQuery};
use clientgen_fixture::graphql::r#type::{Node, UserDTO};
use clientgen_fixture::graphql::support::{GraphQLOperation, Selection};
use clientgen_fixture::graphql::union::SearchResult;
use serde_json::{Value, json};

fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "role": "ADMIN",
        "posts": [],
        "bestFriend": null,
        "createdAt": null,
        "profile": null
    })
}

fn create_user(name: &str) -> CreateUserMutation {
    CreateUserMutation::builder()
        .input(CreateUserInput::builder().name(name).build().unwrap())
        .projection(|user| user.id().name())
        .build()
        .unwrap()
}

#[test]
fn leaves_render_once_in_first_selection_order() {
    let projection = UserProjection::default().name().id().name();
    assert_eq!(projection.render(), "name id");
    assert_eq!(projection, UserProjection::default().name().id());
}

#[test]
fn nested_selections_render_after_leaves() {
    let projection = UserProjection::default()
        .posts(|posts| posts.title().id())
        .id()
        .best_friend(|friend| friend.name());

    assert_eq!(
        projection.render(),
        "id posts { title id } bestFriend { name }"
    );
}

#[test]
fn abstract_selections_lead_with_typename() {
    let projection = SearchResultProjection::default().on_post(|post| post.title());
    assert_eq!(projection.render(), "__typename ... on Post { title }");
    assert_eq!(SearchResultProjection::default().render(), "__typename");
}

#[test]
fn mutation_document_and_request_body() {
    let mutation = create_user("Ada");

    assert_eq!(
        mutation.operation(),
        "mutation CreateUser($input: CreateUserInput!) { createUser(input: $input) { id name } }"
    );
    assert_eq!(mutation.input.name, "Ada");
    assert_eq!(mutation.projection, UserProjection::default().id().name());

    let body = mutation.request_body().unwrap();
    assert_eq!(body["operationName"], "CreateUser");
    assert_eq!(body["variables"], json!({ "input": { "name": "Ada" } }));
}

#[test]
fn scalar_operations_have_no_selection() {
    assert_eq!(
        VersionQuery::builder().build().unwrap().operation(),
        "query Version { version }"
    );

    let delete = DeleteUserMutation::builder().id("u1").build().unwrap();
    assert_eq!(
        delete.operation(),
        "mutation DeleteUser($id: ID!) { deleteUser(id: $id) }"
    );
    assert_eq!(Value::Object(delete.variables().unwrap()), json!({ "id": "u1" }));
}

#[test]
fn unset_optional_arguments_are_not_sent() {
    let defaults = UsersQuery::builder()
        .projection(|user| user.id())
        .build()
        .unwrap();
    assert!(defaults.variables().unwrap().is_empty());
    assert_eq!(defaults.first, None);

    let filtered = UsersQuery::builder()
        .first(5)
        .role(Role::Admin)
        .projection(|user| user.id())
        .build()
        .unwrap();
    assert_eq!(
        Value::Object(filtered.variables().unwrap()),
        json!({ "first": 5, "role": "ADMIN" })
    );
}

#[test]
fn builders_name_the_first_missing_value() {
    let err = CreateUserMutation::builder()
        .projection(|user| user.id())
        .build()
        .unwrap_err();
    assert_eq!(err.type_name(), "CreateUserMutation");
    assert_eq!(err.field(), "input");

    let err = CreateUserMutation::builder()
        .input(CreateUserInput::builder().name("Ada").build().unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err.field(), "projection");

    let err = CreateUserInput::builder().email("ada@example.com").build().unwrap_err();
    assert_eq!(err.to_string(), "CreateUserInput: missing required field 'name'");
}

#[test]
fn input_serializes_wire_names_and_skips_unset_fields() {
    let manager = CreateUserInput::builder().name("Grace").build().unwrap();
    let input = CreateUserInput::builder()
        .name("Ada")
        .role(Role::Admin)
        .manager(manager)
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "name": "Ada", "role": "ADMIN", "manager": { "name": "Grace" } })
    );
}

#[test]
fn responses_decode_into_value_types() {
    let data = json!({ "createUser": user_json("u1", "Ada") });
    let user = CreateUserMutation::parse_response(&data).unwrap().unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.role, Role::Admin);
    assert!(user.best_friend.is_none());

    assert!(CreateUserMutation::parse_response(&json!({})).unwrap().is_none());
    assert!(CreateUserMutation::parse_response(&json!({ "createUser": { "id": 1 } })).is_err());
}

#[test]
fn list_responses_decode_every_element() {
    let data = json!({ "users": [user_json("u1", "Ada"), user_json("u2", "Grace")] });
    let users: Vec<UserDTO> = UsersQuery::parse_response(&data).unwrap();
    let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
}

#[test]
fn unions_dispatch_on_typename() {
    let mut post = json!({
        "id": "p1",
        "title": "Notes",
        "author": user_json("u1", "Ada"),
        "legacyId": null
    });
    post["__typename"] = json!("Post");

    let result: SearchResult = serde_json::from_value(post).unwrap();
    assert_eq!(result.typename(), "Post");
    match result {
        SearchResult::Post(post) => assert_eq!(post.author.name, "Ada"),
        other => panic!("expected a post, got {other:?}"),
    }

    let unknown = json!({ "__typename": "Comment", "id": "c1" });
    assert!(serde_json::from_value::<SearchResult>(unknown).is_err());
}

#[test]
fn object_values_convert_into_their_interfaces() {
    let user: UserDTO = serde_json::from_value(user_json("u1", "Ada")).unwrap();
    let node: Node = user.into();
    assert_eq!(node.typename(), "User");
    assert_eq!(serde_json::to_value(&node).unwrap()["__typename"], "User");
}

#[test]
fn enums_round_trip_their_wire_names() {
    assert_eq!("MEMBER".parse::<Role>().unwrap(), Role::Member);
    assert!("member".parse::<Role>().is_err());
    assert_eq!(Role::Admin.to_string(), "ADMIN");
    assert_eq!(Role::ALL.len(), 3);
}

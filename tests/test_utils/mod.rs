//! Test utilities and fixtures for workboard tests
#![allow(dead_code)]

use serde_json::{json, Value};
use workboard::data::{Board, Column, Item};
use workboard::integrations::github::{FieldValue, ItemContent, ProjectItem};

/// Single-select `Status` value
pub fn status(name: &str) -> FieldValue {
    FieldValue::SingleSelect {
        field: Some("Status".to_string()),
        name: Some(name.to_string()),
    }
}

/// Issue in repository "cli" carrying the given field values
pub fn issue(number: u64, title: &str, field_values: Vec<FieldValue>) -> ProjectItem {
    ProjectItem {
        content: ItemContent::Issue {
            number,
            title: title.to_string(),
            repository: "cli".to_string(),
        },
        field_values,
    }
}

/// Issue whose only field value is the given Status
pub fn issue_with_status(number: u64, status_name: &str) -> ProjectItem {
    issue(number, &format!("Issue {}", number), vec![status(status_name)])
}

pub fn column(name: &str, items: Vec<Item>) -> Column {
    Column {
        name: name.to_string(),
        items,
    }
}

/// Three-column board used by the rendering tests
pub fn sample_board() -> Board {
    Board {
        columns: vec![
            column(
                "Prioritized",
                vec![
                    Item::new(354, "cli", "GitHub Project Experiment"),
                    Item::new(339, "cli", "Assess primer design"),
                ],
            ),
            column("In Progress", vec![Item::new(393, "cli", "Initial FAQ")]),
            column("Done", vec![Item::new(402, "cli", "Document retro")]),
        ],
    }
}

/// GraphQL item node JSON, as returned inside `projectV2.items.nodes`
pub fn item_node_json(number: u64, title: &str, repo: &str, status: Option<&str>) -> Value {
    let mut field_values = vec![json!({
        "__typename": "ProjectV2ItemFieldTextValue",
        "field": { "name": "Title" }
    })];
    if let Some(status) = status {
        field_values.push(json!({
            "__typename": "ProjectV2ItemFieldSingleSelectValue",
            "name": status,
            "field": { "name": "Status" }
        }));
    }

    json!({
        "content": {
            "__typename": "Issue",
            "number": number,
            "title": title,
            "repository": { "name": repo }
        },
        "fieldValues": { "nodes": field_values }
    })
}

/// Full `ProjectItems` response body wrapping the given item nodes
pub fn items_response_json(
    nodes: Vec<Value>,
    has_next_page: bool,
    end_cursor: Option<&str>,
) -> Value {
    json!({
        "data": {
            "owner": {
                "projectV2": {
                    "items": {
                        "pageInfo": {
                            "hasNextPage": has_next_page,
                            "endCursor": end_cursor
                        },
                        "nodes": nodes
                    }
                }
            }
        }
    })
}

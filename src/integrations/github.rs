use crate::config::Config;
use crate::data::Item;
use crate::integrations::HTTP_CLIENT;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// GitHub caps connection pages at 100 nodes
const MAX_PAGE_SIZE: u32 = 100;

/// Repository name shown for draft issues, which live only in the project
pub const DRAFT_REPO: &str = "draft";

// ─────────────────────────────────────────────────────────────────────────────
// Raw project items
// ─────────────────────────────────────────────────────────────────────────────

/// What a project item points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    Issue {
        number: u64,
        title: String,
        repository: String,
    },
    PullRequest {
        number: u64,
        title: String,
        repository: String,
    },
    DraftIssue {
        title: String,
    },
    /// Content the token cannot see
    Redacted,
}

/// One field value on a project item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    SingleSelect {
        field: Option<String>,
        /// Display name of the selected option
        name: Option<String>,
    },
    Other {
        field: Option<String>,
    },
}

impl FieldValue {
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::SingleSelect { field, .. } | Self::Other { field } => field.as_deref(),
        }
    }

    /// Selected option, for single-select values only
    pub fn selected_option(&self) -> Option<&str> {
        match self {
            Self::SingleSelect { name, .. } => name.as_deref(),
            Self::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub content: ItemContent,
    pub field_values: Vec<FieldValue>,
}

impl ProjectItem {
    /// Board item for this entry
    pub fn to_item(&self) -> Item {
        match &self.content {
            ItemContent::Issue {
                number,
                title,
                repository,
            }
            | ItemContent::PullRequest {
                number,
                title,
                repository,
            } => Item::new(*number, repository.as_str(), title.as_str()),
            ItemContent::DraftIssue { title } => Item::new(0, DRAFT_REPO, title.as_str()),
            ItemContent::Redacted => Item::new(0, "", "(redacted)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    Organization,
}

impl OwnerKind {
    /// Root query field for this kind of owner
    fn query_field(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Organization => "organization",
        }
    }
}

/// A resolved user or organization login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub login: String,
    pub kind: OwnerKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectItemsResult {
    pub items: Vec<ProjectItem>,
}

/// One page of project items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsPage {
    pub items: Vec<ProjectItem>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphQL response structures
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryOwnerData {
    repository_owner: Option<RepositoryOwnerNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryOwnerNode {
    #[serde(rename = "__typename")]
    typename: String,
    login: String,
}

#[derive(Debug, Deserialize)]
struct ProjectOwnerData {
    owner: Option<ProjectOwnerNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectOwnerNode {
    project_v2: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
struct ProjectNode {
    items: ItemConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemConnection {
    page_info: PageInfo,
    nodes: Vec<ItemNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemNode {
    content: Option<ContentNode>,
    field_values: FieldValueConnection,
}

#[derive(Debug, Deserialize)]
struct ContentNode {
    #[serde(rename = "__typename")]
    typename: String,
    number: Option<u64>,
    title: Option<String>,
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FieldValueConnection {
    nodes: Vec<FieldValueNode>,
}

#[derive(Debug, Deserialize)]
struct FieldValueNode {
    #[serde(rename = "__typename")]
    typename: String,
    name: Option<String>,
    field: Option<FieldNode>,
}

#[derive(Debug, Deserialize)]
struct FieldNode {
    name: Option<String>,
}

impl From<ItemNode> for ProjectItem {
    fn from(node: ItemNode) -> Self {
        let content = match node.content {
            Some(c) => {
                let title = c.title.unwrap_or_default();
                let repository = c.repository.map(|r| r.name).unwrap_or_default();
                let number = c.number.unwrap_or(0);
                match c.typename.as_str() {
                    "Issue" => ItemContent::Issue {
                        number,
                        title,
                        repository,
                    },
                    "PullRequest" => ItemContent::PullRequest {
                        number,
                        title,
                        repository,
                    },
                    "DraftIssue" => ItemContent::DraftIssue { title },
                    _ => ItemContent::Redacted,
                }
            }
            None => ItemContent::Redacted,
        };

        let field_values = node
            .field_values
            .nodes
            .into_iter()
            .map(|v| {
                let field = v.field.and_then(|f| f.name);
                if v.typename == "ProjectV2ItemFieldSingleSelectValue" {
                    FieldValue::SingleSelect {
                        field,
                        name: v.name,
                    }
                } else {
                    FieldValue::Other { field }
                }
            })
            .collect();

        Self {
            content,
            field_values,
        }
    }
}

fn check_errors(errors: &[GraphQLError]) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    anyhow::bail!("GitHub GraphQL returned errors: {}", messages.join("; "))
}

/// Parse a `repositoryOwner` response.
pub fn parse_owner(body: Value) -> Result<Owner> {
    let response: GraphQLResponse<RepositoryOwnerData> =
        serde_json::from_value(body).context("Unexpected owner response shape")?;
    check_errors(&response.errors)?;

    let node = response
        .data
        .and_then(|d| d.repository_owner)
        .context("owner not found")?;

    let kind = match node.typename.as_str() {
        "User" => OwnerKind::User,
        "Organization" => OwnerKind::Organization,
        other => anyhow::bail!("unsupported owner type {}", other),
    };

    Ok(Owner {
        login: node.login,
        kind,
    })
}

/// Parse one page of a `projectV2.items` response.
pub fn parse_items_page(body: Value) -> Result<ItemsPage> {
    let response: GraphQLResponse<ProjectOwnerData> =
        serde_json::from_value(body).context("Unexpected project items response shape")?;
    check_errors(&response.errors)?;

    let project = response
        .data
        .and_then(|d| d.owner)
        .context("owner not found")?
        .project_v2
        .context("project not found")?;

    Ok(ItemsPage {
        items: project.items.nodes.into_iter().map(ProjectItem::from).collect(),
        has_next_page: project.items.page_info.has_next_page,
        end_cursor: project.items.page_info.end_cursor,
    })
}

fn items_query(kind: OwnerKind) -> String {
    format!(
        r#"
        query ProjectItems($login: String!, $number: Int!, $first: Int!, $after: String) {{
            owner: {field}(login: $login) {{
                projectV2(number: $number) {{
                    items(first: $first, after: $after) {{
                        pageInfo {{
                            hasNextPage
                            endCursor
                        }}
                        nodes {{
                            content {{
                                __typename
                                ... on Issue {{ number title repository {{ name }} }}
                                ... on PullRequest {{ number title repository {{ name }} }}
                                ... on DraftIssue {{ title }}
                            }}
                            fieldValues(first: 20) {{
                                nodes {{
                                    __typename
                                    ... on ProjectV2ItemFieldSingleSelectValue {{
                                        name
                                        field {{ ... on ProjectV2FieldCommon {{ name }} }}
                                    }}
                                    ... on ProjectV2ItemFieldTextValue {{
                                        field {{ ... on ProjectV2FieldCommon {{ name }} }}
                                    }}
                                }}
                            }}
                        }}
                    }}
                }}
            }}
        }}
    "#,
        field = kind.query_field()
    )
}

fn resolve_token(config: &Config) -> Option<String> {
    config
        .tokens
        .github
        .clone()
        .or_else(|| std::env::var("GH_TOKEN").ok())
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// GraphQL client for GitHub Projects
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let token = resolve_token(config).context(
            "no GitHub token: set tokens.github in the config file, or GH_TOKEN / GITHUB_TOKEN",
        )?;
        Ok(Self::with_token(&config.github.api_url, token))
    }

    pub fn with_token(api_url: &str, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.to_string(),
            token: token.into(),
        }
    }

    async fn graphql(&self, query: &str, variables: Value) -> Result<Value> {
        let response = HTTP_CLIENT
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "workboard")
            .json(&serde_json::json!({"query": query, "variables": variables}))
            .send()
            .await
            .context("GitHub request failed")?;

        let status = response.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            anyhow::bail!("GitHub API rate limited: {}", status);
        }
        if !status.is_success() {
            anyhow::bail!("GitHub API error: {}", status);
        }

        response
            .json()
            .await
            .context("Failed to decode GitHub response")
    }

    /// Resolve a login to a user or organization.
    pub async fn owner(&self, login: &str) -> Result<Owner> {
        let query = r#"
            query RepositoryOwner($login: String!) {
                repositoryOwner(login: $login) {
                    __typename
                    login
                }
            }
        "#;

        let body = self
            .graphql(query, serde_json::json!({ "login": login }))
            .await?;
        parse_owner(body)
    }

    /// Fetch up to `limit` items of the owner's project `number`.
    pub async fn project_items(
        &self,
        owner: &Owner,
        number: u32,
        limit: u32,
    ) -> Result<ProjectItemsResult> {
        let query = items_query(owner.kind);
        let mut items = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let remaining = limit.saturating_sub(items.len() as u32);
            if remaining == 0 {
                break;
            }

            let variables = serde_json::json!({
                "login": owner.login,
                "number": number,
                "first": remaining.min(MAX_PAGE_SIZE),
                "after": after,
            });

            let page = parse_items_page(self.graphql(&query, variables).await?)?;
            tracing::debug!(
                count = page.items.len(),
                has_next_page = page.has_next_page,
                "Fetched project items page"
            );
            items.extend(page.items);

            match page.end_cursor {
                Some(cursor) if page.has_next_page => after = Some(cursor),
                _ => break,
            }
        }

        Ok(ProjectItemsResult { items })
    }
}

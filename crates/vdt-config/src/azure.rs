//! Azure DevOps pipeline environment.
//!
//! Azure Pipelines exposes the pull request context as predefined
//! environment variables. They are read once, at the process boundary, into
//! typed optional fields; nothing downstream touches `std::env`.

use std::env;

/// OAuth token the pipeline grants when "Allow scripts to access the OAuth
/// token" is enabled.
pub const ACCESS_TOKEN_VAR: &str = "SYSTEM_ACCESSTOKEN";
/// Set only for pull-request-triggered runs.
pub const PULL_REQUEST_ID_VAR: &str = "SYSTEM_PULLREQUEST_PULLREQUESTID";
/// Organization collection URL, with trailing slash.
pub const COLLECTION_URI_VAR: &str = "SYSTEM_TEAMFOUNDATIONCOLLECTIONURI";
/// Team project GUID.
pub const PROJECT_ID_VAR: &str = "SYSTEM_TEAMPROJECTID";
/// Repository name within the project.
pub const REPOSITORY_NAME_VAR: &str = "BUILD_REPOSITORY_NAME";

/// Pull request context of the current pipeline run.
///
/// Every field is optional: outside Azure Pipelines, or outside a
/// pull-request trigger, some or all variables are simply absent. Presence
/// of the token and the PR id decides whether feedback publishing applies;
/// the remaining fields are required only once a request is actually built.
#[derive(Debug, Clone, Default)]
pub struct AzureDevOpsEnv {
    pub access_token: Option<String>,
    pub pull_request_id: Option<String>,
    pub collection_uri: Option<String>,
    pub project_id: Option<String>,
    pub repository_name: Option<String>,
}

impl AzureDevOpsEnv {
    /// Read the pipeline variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the context from an arbitrary variable lookup.
    ///
    /// This is the seam tests use instead of mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            access_token: lookup(ACCESS_TOKEN_VAR),
            pull_request_id: lookup(PULL_REQUEST_ID_VAR),
            collection_uri: lookup(COLLECTION_URI_VAR),
            project_id: lookup(PROJECT_ID_VAR),
            repository_name: lookup(REPOSITORY_NAME_VAR),
        }
    }

    /// Whether this run has a pull request to publish to.
    #[must_use]
    pub const fn has_pull_request(&self) -> bool {
        self.access_token.is_some() && self.pull_request_id.is_some()
    }
}

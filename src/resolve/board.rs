//! Board ID resolution.
//!
//! The projects API cannot look a board up by URL, so the owner's boards are
//! listed and scanned for an exact `html_url` match. The first match in listing
//! order wins.

use tracing::{debug, info};

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse, ProjectData};
use crate::error::ProjectError;
use crate::github::{unexpected_response, validate_response};
use crate::types::{OwnerPath, ProjectId, ProjectScope, RepoId};

/// Page size for organization board listings. Only this one page is read.
pub const ORG_PROJECTS_PER_PAGE: u32 = 200;

/// Resolves the numeric ID of the board at `target_url`.
///
/// # Errors
///
/// - `Unsupported` for user-owned boards
/// - `NotFound` if the repository has no boards, or no board has that URL
/// - `RateLimited`/`RemoteFailure` from the listing call
pub async fn resolve_project_id<G: GitHubInterpreter>(
    github: &G,
    scope: ProjectScope,
    owner: &OwnerPath,
    target_url: &str,
) -> Result<ProjectId, ProjectError> {
    match scope {
        ProjectScope::Repository => {
            let repo = RepoId::new(&owner.parent_resource, &owner.parent_name);
            project_id_by_repo(github, &repo, target_url).await
        }
        ProjectScope::Organization => {
            project_id_by_org(github, &owner.parent_name, target_url).await
        }
        ProjectScope::User => Err(ProjectError::unsupported(
            "User project is not supported yet",
        )),
    }
}

async fn project_id_by_repo<G: GitHubInterpreter>(
    github: &G,
    repo: &RepoId,
    target_url: &str,
) -> Result<ProjectId, ProjectError> {
    let effect = GitHubEffect::ListRepoProjects { repo: repo.clone() };
    let projects = list_projects(github, effect).await?;

    if projects.is_empty() {
        return Err(ProjectError::not_found(format!(
            "There are no projects on the repository {repo}"
        )));
    }

    find_project(&projects, target_url)
}

async fn project_id_by_org<G: GitHubInterpreter>(
    github: &G,
    org: &str,
    target_url: &str,
) -> Result<ProjectId, ProjectError> {
    let effect = GitHubEffect::ListOrgProjects {
        org: org.to_string(),
        per_page: ORG_PROJECTS_PER_PAGE,
    };
    let projects = list_projects(github, effect).await?;

    find_project(&projects, target_url)
}

async fn list_projects<G: GitHubInterpreter>(
    github: &G,
    effect: GitHubEffect,
) -> Result<Vec<ProjectData>, ProjectError> {
    match validate_response(github.interpret(effect).await)? {
        GitHubResponse::Projects(projects) => Ok(projects),
        other => Err(unexpected_response("project list", &other)),
    }
}

fn find_project(projects: &[ProjectData], target_url: &str) -> Result<ProjectId, ProjectError> {
    for project in projects {
        debug!(url = %project.html_url, "Checking project");
    }

    let found = projects
        .iter()
        .find(|p| p.html_url == target_url)
        .filter(|p| !p.id.is_unset());

    match found {
        Some(project) => {
            info!(name = %project.name, "Project found");
            debug!(project_id = %project.id, "Project ID");
            Ok(project.id)
        }
        None => Err(ProjectError::not_found(format!(
            "No such a project url: {target_url}"
        ))),
    }
}

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Fixed project description returned by `GET /api/project-info`.
///
/// Everything but `last_deployment` is constant; the timestamp is the
/// current wall-clock time, not an actual deployment record.
#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    technologies: [&'static str; 6],
    status: &'static str,
    uptime: &'static str,
    #[serde(rename = "lastDeployment")]
    last_deployment: String,
}

pub const TECHNOLOGIES: [&str; 6] = ["Jenkins", "Docker", "AWS", "Terraform", "Ansible", "Node.js"];

/// Project info endpoint
pub async fn project_info() -> Json<ProjectInfo> {
    Json(ProjectInfo {
        name: "Jenkins CI/CD Pipeline Project",
        version: "1.0.0",
        description: "Automated CI/CD pipeline with Jenkins, Docker, and AWS deployment",
        technologies: TECHNOLOGIES,
        status: "Production Ready",
        uptime: "99.9%",
        last_deployment: Utc::now().to_rfc3339(),
    })
}

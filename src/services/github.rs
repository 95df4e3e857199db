//! Thin client for the public GitHub REST API.
//!
//! Every call degrades instead of failing: repo listings fall back to a static
//! showcase, profiles to `None`, languages and topics to empty collections.
//! Errors are only ever logged.

use std::collections::HashMap;

use chrono::{DateTime, Datelike};
use gloo_net::http::Request;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const ACCEPT_TOPICS: &str = "application/vnd.github.mercy-preview+json";
const MAX_REPOS: usize = 12;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("GitHub API error: {0}")]
    Status(u16),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Internal,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Deserialize)]
struct TopicList {
    names: Vec<String>,
}

pub fn repos_url(username: &str) -> String {
    format!(
        "{}/users/{}/repos?type=public&sort=updated&per_page=50",
        config::get_github_api_base(),
        urlencoding::encode(username)
    )
}

pub fn user_url(username: &str) -> String {
    format!("{}/users/{}", config::get_github_api_base(), urlencoding::encode(username))
}

fn repo_url(username: &str, repo: &str, tail: &str) -> String {
    format!(
        "{}/repos/{}/{}/{}",
        config::get_github_api_base(),
        urlencoding::encode(username),
        urlencoding::encode(repo),
        tail
    )
}

async fn get_json<T: DeserializeOwned>(url: &str, accept: &str) -> Result<T, GithubError> {
    debug!("GET {}", url);
    let response = Request::get(url).header("Accept", accept).send().await?;
    if !response.ok() {
        return Err(GithubError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

/// Forks out, most starred first, at most twelve.
pub fn curate_repos(mut repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    repos.retain(|repo| !repo.name.contains("fork"));
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(MAX_REPOS);
    repos
}

pub async fn fetch_user_repos(username: &str) -> Vec<GitHubRepo> {
    match get_json::<Vec<GitHubRepo>>(&repos_url(username), ACCEPT_V3).await {
        Ok(repos) => curate_repos(repos),
        Err(e) => {
            error!("Error fetching GitHub repos: {}", e);
            fallback_repos()
        }
    }
}

pub async fn fetch_user_profile(username: &str) -> Option<GitHubUser> {
    match get_json::<GitHubUser>(&user_url(username), ACCEPT_V3).await {
        Ok(user) => Some(user),
        Err(e) => {
            error!("Error fetching GitHub user: {}", e);
            None
        }
    }
}

pub async fn fetch_repo_languages(username: &str, repo: &str) -> HashMap<String, u64> {
    match get_json(&repo_url(username, repo, "languages"), ACCEPT_V3).await {
        Ok(languages) => languages,
        Err(e) => {
            error!("Error fetching languages for {}: {}", repo, e);
            HashMap::new()
        }
    }
}

pub async fn fetch_repo_topics(username: &str, repo: &str) -> Vec<String> {
    match get_json::<TopicList>(&repo_url(username, repo, "topics"), ACCEPT_TOPICS).await {
        Ok(list) => list.names,
        Err(e) => {
            error!("Error fetching topics for {}: {}", repo, e);
            Vec::new()
        }
    }
}

/// Fills in topics for repos the listing returned without any.
pub async fn enrich_topics(username: &str, mut repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    for repo in repos.iter_mut().filter(|r| r.topics.is_empty()) {
        repo.topics = fetch_repo_topics(username, &repo.name).await;
    }
    repos
}

pub fn language_color(language: Option<&str>) -> &'static str {
    match language {
        Some("TypeScript") => "#3b82f6",
        Some("JavaScript") => "#eab308",
        Some("Python") => "#22c55e",
        Some("Node.js") => "#16a34a",
        Some("React") => "#06b6d4",
        Some("Vue.js") => "#10b981",
        Some("Dart") => "#60a5fa",
        Some("Shell") => "#4b5563",
        Some("HTML") => "#f97316",
        Some("CSS") => "#a855f7",
        Some("Java") => "#ef4444",
        Some("C#") => "#9333ea",
        Some("PHP") => "#6366f1",
        Some("Go") => "#0891b2",
        Some("Rust") => "#ea580c",
        _ => "#6b7280",
    }
}

/// Languages by share of bytes, largest first. Ties sort by name.
pub fn language_breakdown(languages: &HashMap<String, u64>) -> Vec<(String, f64)> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<(String, f64)> = languages
        .iter()
        .map(|(name, bytes)| (name.clone(), *bytes as f64 * 100.0 / total as f64))
        .collect();
    shares.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    shares
}

const MONTHS_PT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// `2024-01-15T10:00:00Z` becomes `15 de jan. de 2024`. Unparseable input is
/// returned as is.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_PT[date.month0() as usize],
            date.year()
        ),
        Err(_) => iso.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn showcase(
    id: u64,
    name: &str,
    full_name: &str,
    description: &str,
    homepage: Option<&str>,
    stars: u32,
    forks: u32,
    language: &str,
    topics: &[&str],
    updated_at: &str,
    created_at: &str,
    size: u64,
    open_issues: u32,
) -> GitHubRepo {
    GitHubRepo {
        id,
        name: name.to_string(),
        full_name: full_name.to_string(),
        description: Some(description.to_string()),
        html_url: format!("https://github.com/{}", full_name),
        homepage: homepage.map(str::to_string),
        stargazers_count: stars,
        forks_count: forks,
        language: Some(language.to_string()),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        updated_at: updated_at.to_string(),
        created_at: created_at.to_string(),
        size,
        open_issues_count: open_issues,
        default_branch: "main".to_string(),
        visibility: Visibility::Public,
    }
}

pub fn fallback_repos() -> Vec<GitHubRepo> {
    vec![
        showcase(
            1,
            "digaotech-portfolio",
            "digaotech/portfolio",
            "Website moderno e responsivo desenvolvido com React e TypeScript",
            Some("https://digaotech.com"),
            45,
            12,
            "TypeScript",
            &["react", "typescript", "tailwind", "portfolio"],
            "2024-01-15T10:00:00Z",
            "2023-12-01T10:00:00Z",
            2048,
            2,
        ),
        showcase(
            2,
            "automation-suite",
            "digaotech/automation-suite",
            "Suite completa de ferramentas para automação de processos empresariais",
            None,
            78,
            23,
            "Python",
            &["python", "automation", "rpa", "selenium"],
            "2024-01-20T14:30:00Z",
            "2023-11-15T09:00:00Z",
            3584,
            5,
        ),
        showcase(
            3,
            "api-gateway-microservices",
            "digaotech/api-gateway",
            "Gateway de APIs com autenticação, rate limiting e monitoramento",
            Some("https://api.digaotech.com"),
            92,
            31,
            "Node.js",
            &["nodejs", "microservices", "api-gateway", "docker"],
            "2024-01-25T11:45:00Z",
            "2023-10-20T16:20:00Z",
            4096,
            3,
        ),
        showcase(
            4,
            "react-ai-chatbot",
            "digaotech/react-ai-chatbot",
            "Chatbot inteligente com IA para atendimento automatizado",
            None,
            156,
            47,
            "JavaScript",
            &["react", "ai", "chatbot", "openai"],
            "2024-01-28T08:15:00Z",
            "2023-09-10T14:30:00Z",
            2560,
            8,
        ),
        showcase(
            5,
            "flutter-ecommerce-app",
            "digaotech/flutter-ecommerce",
            "App mobile de e-commerce com Flutter e Firebase",
            None,
            203,
            68,
            "Dart",
            &["flutter", "firebase", "ecommerce", "mobile"],
            "2024-01-30T19:20:00Z",
            "2023-08-05T11:15:00Z",
            5120,
            12,
        ),
        showcase(
            6,
            "devops-kubernetes-setup",
            "digaotech/k8s-setup",
            "Configuração completa de ambiente Kubernetes para produção",
            None,
            134,
            42,
            "Shell",
            &["kubernetes", "devops", "docker", "helm"],
            "2024-01-22T13:10:00Z",
            "2023-07-18T10:45:00Z",
            1024,
            4,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u32) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            stargazers_count: stars,
            ..fallback_repos()[0].clone()
        }
    }

    #[test]
    fn curate_drops_forks_and_keeps_the_top_twelve() {
        let mut repos: Vec<GitHubRepo> = (0..15).map(|i| repo(&format!("repo-{}", i), i)).collect();
        repos.push(repo("some-fork", 1_000));
        let curated = curate_repos(repos);

        assert_eq!(curated.len(), 12);
        assert!(curated.iter().all(|r| !r.name.contains("fork")));
        assert_eq!(curated[0].stargazers_count, 14);
        assert!(curated.windows(2).all(|w| w[0].stargazers_count >= w[1].stargazers_count));
    }

    #[test]
    fn listing_payload_tolerates_missing_fields() {
        let payload = r#"[{
            "id": 7,
            "name": "site",
            "full_name": "digaotech/site",
            "description": null,
            "html_url": "https://github.com/digaotech/site",
            "homepage": null,
            "stargazers_count": 3,
            "forks_count": 0,
            "language": null,
            "updated_at": "2024-02-01T00:00:00Z"
        }]"#;
        let repos: Vec<GitHubRepo> = serde_json::from_str(payload).unwrap();
        assert_eq!(repos[0].name, "site");
        assert!(repos[0].topics.is_empty());
        assert_eq!(repos[0].visibility, Visibility::Public);
        assert_eq!(language_color(repos[0].language.as_deref()), "#6b7280");
    }

    #[test]
    fn urls_escape_path_segments() {
        assert_eq!(
            repos_url("digaotech"),
            "https://api.github.com/users/digaotech/repos?type=public&sort=updated&per_page=50"
        );
        assert_eq!(user_url("a b"), "https://api.github.com/users/a%20b");
        assert_eq!(
            repo_url("digaotech", "site", "languages"),
            "https://api.github.com/repos/digaotech/site/languages"
        );
    }

    #[test]
    fn dates_render_in_portuguese() {
        assert_eq!(format_date("2024-01-15T10:00:00Z"), "15 de jan. de 2024");
        assert_eq!(format_date("2023-12-01T10:00:00Z"), "1 de dez. de 2023");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn breakdown_is_sorted_by_share() {
        let languages: HashMap<String, u64> = serde_json::from_str(
            r#"{"Rust": 600, "TypeScript": 300, "CSS": 100}"#,
        )
        .unwrap();
        let shares = language_breakdown(&languages);
        assert_eq!(shares[0].0, "Rust");
        assert!((shares[0].1 - 60.0).abs() < 1e-9);
        assert_eq!(shares[2].0, "CSS");
        assert!(language_breakdown(&HashMap::new()).is_empty());
    }

    #[test]
    fn fallback_showcase_is_complete() {
        let repos = fallback_repos();
        assert_eq!(repos.len(), 6);
        assert!(repos.iter().all(|r| !r.topics.is_empty() && r.language.is_some()));
        assert_eq!(language_color(Some("Rust")), "#ea580c");
    }
}

use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::services::github::{
    enrich_topics, fetch_repo_languages, fetch_user_profile, fetch_user_repos, format_date,
    language_breakdown, language_color, GitHubRepo, GitHubUser,
};

struct FeaturedProject {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tech: [&'static str; 4],
}

const FEATURED: [FeaturedProject; 3] = [
    FeaturedProject {
        title: "E-commerce Moderno",
        description: "Plataforma completa de e-commerce com React, Node.js, Stripe e dashboard administrativo.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        tech: ["React", "Node.js", "MongoDB", "Stripe"],
    },
    FeaturedProject {
        title: "Sistema de Gestão",
        description: "ERP completo para pequenas e médias empresas com controle de estoque, vendas e financeiro.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        tech: ["Vue.js", "Laravel", "MySQL", "Docker"],
    },
    FeaturedProject {
        title: "App de Delivery",
        description: "Aplicativo mobile para delivery com geolocalização, pagamentos online e sistema de avaliações.",
        image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        tech: ["React Native", "Firebase", "Maps API", "PayPal"],
    },
];

fn featured_card(project: &FeaturedProject) -> Html {
    html! {
        <div class="card featured-card">
            <div class="featured-image">
                <img src={project.image} alt={project.title} />
            </div>
            <div class="featured-body">
                <h4>{project.title}</h4>
                <p>{project.description}</p>
                <div class="tags">
                    { for project.tech.iter().map(|tech| html! { <span class="tag">{*tech}</span> }) }
                </div>
                <div class="featured-links">
                    <a href="#">{"Demo"}</a>
                    <a href="#">{"Código"}</a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RepoCardProps {
    pub repo: GitHubRepo,
}

#[function_component(RepoCard)]
pub fn repo_card(props: &RepoCardProps) -> Html {
    let repo = &props.repo;
    let languages = use_state(|| None::<Vec<(String, f64)>>);

    let load_languages = {
        let languages = languages.clone();
        let name = repo.name.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if languages.is_some() {
                languages.set(None);
                return;
            }
            let languages = languages.clone();
            let name = name.clone();
            spawn_local(async move {
                let bytes = fetch_repo_languages(config::get_github_username(), &name).await;
                languages.set(Some(language_breakdown(&bytes)));
            });
        })
    };

    let language = repo.language.as_deref();
    let dot_style = format!("background: {};", language_color(language));

    html! {
        <div class="card repo-card">
            <div class="repo-header">
                <h4>{repo.name.clone()}</h4>
                <a href={repo.html_url.clone()} target="_blank" rel="noopener noreferrer">{"↗"}</a>
            </div>
            <p class="repo-description">
                {repo.description.clone().unwrap_or_else(|| "Sem descrição".to_string())}
            </p>
            <div class="repo-meta">
                {
                    if let Some(language) = language {
                        html! {
                            <span class="repo-language">
                                <span class="language-dot" style={dot_style}></span>
                                {language.to_string()}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
                <span>{format!("★ {}", repo.stargazers_count)}</span>
                <span>{format!("⑂ {}", repo.forks_count)}</span>
            </div>
            <div class="tags">
                { for repo.topics.iter().take(3).map(|topic| html! { <span class="tag">{topic.clone()}</span> }) }
            </div>
            <div class="repo-footer">
                <span class="repo-updated">{format!("Atualizado em {}", format_date(&repo.updated_at))}</span>
                <button class="link-button" onclick={load_languages}>
                    { if languages.is_some() { "Ocultar linguagens" } else { "Linguagens" } }
                </button>
            </div>
            {
                match &*languages {
                    Some(shares) if shares.is_empty() => html! {
                        <p class="repo-languages">{"Sem dados de linguagens"}</p>
                    },
                    Some(shares) => html! {
                        <ul class="repo-languages">
                            { for shares.iter().map(|(name, share)| html! {
                                <li>
                                    <span class="language-dot" style={format!("background: {};", language_color(Some(name.as_str())))}></span>
                                    {format!("{} {:.1}%", name, share)}
                                </li>
                            }) }
                        </ul>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn profile_strip(user: &GitHubUser) -> Html {
    html! {
        <a class="github-profile" href={user.html_url.clone()} target="_blank" rel="noopener noreferrer">
            <img src={user.avatar_url.clone()} alt={user.login.clone()} />
            <span>{format!("@{}", user.login)}</span>
            <span>{format!("{} repositórios", user.public_repos)}</span>
            <span>{format!("{} seguidores", user.followers)}</span>
        </a>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let repos = use_state(Vec::<GitHubRepo>::new);
    let profile = use_state(|| None::<GitHubUser>);
    let loading = use_state(|| true);

    {
        let repos = repos.clone();
        let profile = profile.clone();
        let loading = loading.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                let username = config::get_github_username();
                let listed = fetch_user_repos(username).await;
                let listed = enrich_topics(username, listed).await;
                gloo_console::log!(format!("Loaded {} repositories", listed.len()));
                repos.set(listed);
                loading.set(false);
                profile.set(fetch_user_profile(username).await);
            });
            || ()
        }, ());
    }

    let repo_view = if *loading {
        html! {
            <div class="repo-loading">
                <div class="spinner"></div>
                <p>{"Carregando projetos do GitHub..."}</p>
            </div>
        }
    } else {
        html! {
            <div class="repo-grid">
                { for repos.iter().map(|repo| html! { <RepoCard key={repo.id} repo={repo.clone()} /> }) }
            </div>
        }
    };

    html! {
        <section id="projects" class="section muted">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Nossos "}<span class="gradient-text">{"Projetos"}</span></h2>
                    <div class="divider"></div>
                    <p>{"Conheça alguns dos projetos que desenvolvemos para nossos clientes e contribuições open source."}</p>
                </div>

                <h3 class="subsection-title">{"Projetos em Destaque"}</h3>
                <div class="featured-grid">
                    { for FEATURED.iter().map(featured_card) }
                </div>

                <div class="subsection-header">
                    <h3 class="subsection-title">{"Repositórios no GitHub"}</h3>
                    {
                        match &*profile {
                            Some(user) => profile_strip(user),
                            None => html! {},
                        }
                    }
                </div>
                {repo_view}

                <div class="center">
                    <a class="button-outline"
                        href={format!("https://github.com/{}", config::get_github_username())}
                        target="_blank" rel="noopener noreferrer">
                        {"Ver todos no GitHub"}
                    </a>
                </div>
            </div>
        </section>
    }
}

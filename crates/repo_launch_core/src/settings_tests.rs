use super::*;

fn octocat_target() -> LaunchTarget {
    LaunchTarget::new("octocat", "hello-world")
}

#[test]
fn test_default_settings() {
    let settings = LaunchSettings::default();

    assert_eq!(settings.default_repository_name, "3d-data-grid-visualization");
    assert_eq!(settings.default_branch, "main");
    assert_eq!(settings.web_host, "github.com");
    assert!(!settings.private);
}

#[test]
fn test_repository_and_remote_urls() {
    let settings = LaunchSettings::default();
    let target = octocat_target();

    assert_eq!(
        settings.repository_url(&target),
        "https://github.com/octocat/hello-world"
    );
    assert_eq!(
        settings.remote_url(&target),
        "https://github.com/octocat/hello-world.git"
    );
}

#[test]
fn test_urls_follow_configured_host() {
    let settings = LaunchSettings {
        web_host: "github.example.com".to_string(),
        ..Default::default()
    };
    let target = octocat_target();

    assert_eq!(
        settings.repository_url(&target),
        "https://github.example.com/octocat/hello-world"
    );
    assert_eq!(settings.new_repository_url(), "https://github.example.com/new");
}

#[test]
fn test_pages_url() {
    let settings = LaunchSettings::default();

    assert_eq!(
        settings.pages_url(&octocat_target()),
        "https://octocat.github.io/hello-world"
    );
}

#[test]
fn test_target_full_name() {
    assert_eq!(octocat_target().full_name(), "octocat/hello-world");
}

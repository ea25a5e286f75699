use super::*;

fn some(s: &str) -> Option<String> {
    Some(s.to_owned())
}

#[test]
fn origin_is_returned_verbatim() {
    assert_eq!(
        resolve_base_url_from(some("https://exams.example.com"), some("ignored.dev"), None),
        "https://exams.example.com"
    );
}

#[test]
fn site_url_wins_over_deployment_url() {
    assert_eq!(
        resolve_base_url_from(None, some("https://exams.example.com"), some("exam-prep-abc.host.app")),
        "https://exams.example.com/"
    );
}

#[test]
fn deployment_url_gets_scheme_and_slash() {
    assert_eq!(
        resolve_base_url_from(None, None, some("exam-prep-abc.host.app")),
        "https://exam-prep-abc.host.app/"
    );
}

#[test]
fn empty_values_fall_through() {
    assert_eq!(
        resolve_base_url_from(None, some(""), some("  ")),
        FALLBACK_BASE_URL
    );
    assert_eq!(resolve_base_url_from(None, None, None), "http://localhost:3000/");
}

#[test]
fn trailing_slashes_collapse_to_one() {
    assert_eq!(resolve_base_url_from(None, some("http://localhost:8080//"), None), "http://localhost:8080/");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn env_lookup_uses_site_url_var() {
    // SAFETY: test-only env mutation with a variable no other test reads.
    unsafe {
        std::env::set_var(SITE_URL_VAR, "site-from-env.example.org");
    }
    let resolved = resolve_base_url();
    unsafe {
        std::env::remove_var(SITE_URL_VAR);
    }
    assert_eq!(resolved, "https://site-from-env.example.org/");
}

//! Route computation for discovered documents.

/// Convert a document id to its path below the docs route.
///
/// Examples:
/// - `index` -> `""`
/// - `guide` -> `"guide"`
/// - `domain/index` -> `"domain"`
/// - `domain/setup` -> `"domain/setup"`
pub(crate) fn id_to_doc_path(id: &str) -> &str {
    if id == "index" {
        ""
    } else if let Some(dir) = id.strip_suffix("/index") {
        dir
    } else {
        id
    }
}

/// Apply a front matter slug to a document id.
///
/// Absolute slugs (`/x`) replace the whole path; relative slugs replace the
/// last segment of the id.
pub(crate) fn slug_doc_path(id: &str, slug: &str) -> String {
    if slug.starts_with('/') {
        return slug.to_owned();
    }
    match id.rsplit_once('/') {
        Some((dir, _)) => format!("{dir}/{slug}"),
        None => slug.to_owned(),
    }
}

/// Join the site base URL, the docs route base path and a document path.
///
/// Empty segments are collapsed so the result always starts with a single
/// `/`. Directory-like routes (empty document path) end with `/`.
///
/// ```
/// use docnav_scan::document_route;
///
/// assert_eq!(document_route("/notes/", "/", "intro"), "/notes/intro");
/// assert_eq!(document_route("/", "/docs", "a/b"), "/docs/a/b");
/// assert_eq!(document_route("/notes/", "/", ""), "/notes/");
/// ```
pub fn document_route(base_url: &str, route_base_path: &str, doc_path: &str) -> String {
    let segments: Vec<&str> = [base_url, route_base_path, doc_path]
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut route = format!("/{}", segments.join("/"));
    if doc_path.trim_matches('/').is_empty() && route != "/" {
        route.push('/');
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_to_doc_path() {
        assert_eq!(id_to_doc_path("index"), "");
        assert_eq!(id_to_doc_path("guide"), "guide");
        assert_eq!(id_to_doc_path("domain/index"), "domain");
        assert_eq!(id_to_doc_path("domain/setup"), "domain/setup");
        assert_eq!(id_to_doc_path("index/index"), "index");
    }

    #[test]
    fn test_slug_doc_path() {
        assert_eq!(slug_doc_path("intro", "/"), "/");
        assert_eq!(slug_doc_path("week1/lecture", "/lectures/one"), "/lectures/one");
        assert_eq!(slug_doc_path("week1/lecture", "first"), "week1/first");
        assert_eq!(slug_doc_path("lecture", "first"), "first");
    }

    #[test]
    fn test_document_route() {
        assert_eq!(
            document_route("/bioinformatics-note/", "/", "intro"),
            "/bioinformatics-note/intro"
        );
        assert_eq!(
            document_route("/bioinformatics-note/", "/", "tutorial-basics/create-a-document"),
            "/bioinformatics-note/tutorial-basics/create-a-document"
        );
        assert_eq!(document_route("/", "/docs", "guide"), "/docs/guide");
        assert_eq!(document_route("/", "/", ""), "/");
        assert_eq!(document_route("/base/", "/", "/"), "/base/");
        assert_eq!(document_route("", "", "a//b"), "/a/b");
    }
}

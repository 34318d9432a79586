/// Slash-path helpers for workspace-relative labels
///
/// Generated file paths and execution roots are slash-separated strings, not
/// OS paths, so these operate on `/` directly regardless of platform.

/// Directory component of a slash-separated path. A path with no slash lives
/// in the current directory, spelled `"."`.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Final component of a slash-separated path.
pub(crate) fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Detect an execution root of the form `.../external/<workspace>` and return
/// the workspace name. Roots that are empty, too short, or shaped differently
/// are not external builds.
pub(crate) fn external_workspace(exec_root: &str) -> Option<&str> {
    let mut segments = exec_root.rsplit('/');
    let last = segments.next()?;
    let parent = segments.next()?;
    (parent == "external" && !last.is_empty()).then_some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("foo/bar/a.java"), "foo/bar");
        assert_eq!(dirname("foo/a.java"), "foo");
        assert_eq!(dirname("a.java"), ".");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("foo/bar/a.java"), "a.java");
        assert_eq!(basename("a.java"), "a.java");
    }

    #[test]
    fn test_external_workspace_absolute_root() {
        let root = "/tmp/_x/452e264843978a138d8e9cb8305e394a/external/com_google_protobuf";
        assert_eq!(external_workspace(root), Some("com_google_protobuf"));
    }

    #[test]
    fn test_external_workspace_relative_root() {
        assert_eq!(external_workspace("external/proto_googleapis"), Some("proto_googleapis"));
    }

    #[test]
    fn test_external_workspace_non_matching() {
        assert_eq!(external_workspace(""), None);
        assert_eq!(external_workspace("external"), None);
        assert_eq!(external_workspace("/home/user/workspace"), None);
        assert_eq!(external_workspace("/x/external/"), None);
        assert_eq!(external_workspace("/x/externals/ws"), None);
    }
}

use std::path::{Component, Path};

/// Render `path` relative to `root` with `/` separators.
///
/// Catalog references must not depend on where the tool was started from or
/// on the host's separator, so both the `./` prefix and the root are stripped.
pub fn relative_display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Finds every GraphQL file located at or under each of `paths`.
///
/// Directories are searched recursively for files ending in one of
/// `graphql_file_exts`. A single explicitly-named file is always used, whatever
/// its extension.
pub(crate) fn find_schema_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} schema paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Failed to search for schema files at/under {path:#?}",
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }

            let matches_ext = entry_path.extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| graphql_file_exts.contains(&*ext));
            if matches_ext {
                log::trace!("Found schema file at {entry_path:#?}.");
                file_paths.push(std::fs::canonicalize(entry_path)?);
            }
        }
    }

    if file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding to load {only_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(std::fs::canonicalize(only_path)?);
    }

    // Stable load order so type extensions and error locations are
    // reproducible across runs.
    file_paths.sort();
    file_paths.dedup();

    log::debug!("Found {} schema files.", file_paths.len());
    Ok(file_paths)
}

use ignore::WalkBuilder;
use std::io;
use std::path::PathBuf;

/// Walk paths and yield candidate file paths.
///
/// Hidden files are skipped and gitignore rules are honored, which also
/// keeps the attribute files themselves (dot-files) out of the rewrite set.
pub fn walk_paths(paths: &[String]) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut files = vec![];

    for path in paths {
        let walker = WalkBuilder::new(path)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build();

        files.extend(walker.filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(io::Error::other(e.to_string()))),
        }));
    }

    files.into_iter()
}

//! Multi-root resource resolution
//!
//! Assets are referenced by logical filename and may live in several places
//! depending on how the site is launched: next to the binary, under the
//! asset subdirectory, or one level up in a hosted checkout. The resolver
//! probes a fixed ordered list of candidate directories and returns the
//! first hit. Existence-check failure is an expected outcome, not an error;
//! callers decide the fallback policy (remote URL for images, an inline
//! notice for documents).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Default name of the asset subdirectory, as authored on disk
pub const DEFAULT_ASSET_DIR: &str = "Projects";

/// Ordered list of candidate directories for resource resolution
///
/// The order is fixed at construction and never re-sorted, so repeated
/// resolutions against the same file set are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    roots: Vec<PathBuf>,
}

impl SearchRoots {
    /// Build the candidate list for a site root.
    ///
    /// For each base directory the asset subdirectory is probed in both the
    /// authored case and lower case, reproducing the path ambiguity between
    /// local checkouts and hosted deployments. Bases in order:
    ///
    /// 1. the site root itself
    /// 2. the current working directory
    /// 3. the running binary's directory
    /// 4. one parent level above the site root
    ///
    /// No dedup and no normalization beyond these variants; candidates are
    /// probed strictly in order.
    pub fn discover(site_root: &Path, asset_dir: &str) -> Self {
        let mut roots = Vec::new();
        push_with_variants(&mut roots, site_root.to_path_buf(), asset_dir);
        if let Ok(cwd) = std::env::current_dir() {
            push_with_variants(&mut roots, cwd, asset_dir);
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
        {
            push_with_variants(&mut roots, exe_dir, asset_dir);
        }
        if let Some(parent) = site_root.parent() {
            push_with_variants(&mut roots, parent.to_path_buf(), asset_dir);
        }

        Self { roots }
    }

    /// Use an explicit, pre-ordered root list (tests and config overrides)
    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Append extra roots after the discovered set, preserving their order
    pub fn with_extra_roots<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.roots.extend(extra);
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Candidate paths for a logical name, in probe order
    pub fn candidates<'a>(
        &'a self,
        logical_name: &'a str,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.roots.iter().map(move |root| root.join(logical_name))
    }
}

fn push_with_variants(roots: &mut Vec<PathBuf>, base: PathBuf, asset_dir: &str) {
    let lower = asset_dir.to_lowercase();
    roots.push(base.join(asset_dir));
    roots.push(base.join(lower));
    roots.push(base);
}

/// Outcome of a resolution attempt
///
/// `NotFound` is a handled condition, not an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolvedResource {
    /// The first existing candidate, with its chosen source location
    Found { path: PathBuf },
    /// All candidates exhausted
    NotFound,
}

impl ResolvedResource {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedResource::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedResource::Found { path } => Some(path),
            ResolvedResource::NotFound => None,
        }
    }
}

/// Resolve a logical filename against the search roots.
///
/// Iterates candidates strictly in order and returns the first whose
/// existence check succeeds. No retries, no caching.
pub fn resolve(logical_name: &str, roots: &SearchRoots) -> ResolvedResource {
    for candidate in roots.candidates(logical_name) {
        if candidate.is_file() {
            trace!("resolved {:?} -> {}", logical_name, candidate.display());
            return ResolvedResource::Found { path: candidate };
        }
    }
    debug!("resource not found in any search root: {:?}", logical_name);
    ResolvedResource::NotFound
}

/// Resolve and read a resource's bytes in one step.
///
/// Used by the document save control; images never go through this path
/// (the renderer fetches them itself, locally or via the remote URL).
pub fn read_bytes(logical_name: &str, roots: &SearchRoots) -> Result<Vec<u8>> {
    match resolve(logical_name, roots) {
        ResolvedResource::Found { path } => Ok(std::fs::read(path)?),
        ResolvedResource::NotFound => Err(Error::resource_not_found(logical_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_orders_site_root_variants_first() {
        let roots = SearchRoots::discover(Path::new("/srv/site"), DEFAULT_ASSET_DIR);
        let paths = roots.roots();
        assert_eq!(paths[0], Path::new("/srv/site/Projects"));
        assert_eq!(paths[1], Path::new("/srv/site/projects"));
        assert_eq!(paths[2], Path::new("/srv/site"));
    }

    #[test]
    fn test_discover_includes_parent_variants() {
        let roots = SearchRoots::discover(Path::new("/srv/site"), DEFAULT_ASSET_DIR);
        let paths = roots.roots();
        // Parent variants come last, after cwd and exe-dir variants.
        let tail = &paths[paths.len() - 3..];
        assert_eq!(tail[0], Path::new("/srv/Projects"));
        assert_eq!(tail[1], Path::new("/srv/projects"));
        assert_eq!(tail[2], Path::new("/srv"));
    }

    #[test]
    fn test_resolve_first_candidate_wins() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        std::fs::write(dir_a.path().join("resume.pdf"), b"from a").unwrap();
        std::fs::write(dir_b.path().join("resume.pdf"), b"from b").unwrap();

        let roots = SearchRoots::from_roots(vec![
            dir_a.path().to_path_buf(),
            dir_b.path().to_path_buf(),
        ]);

        let resolved = resolve("resume.pdf", &roots);
        assert_eq!(resolved.path().unwrap(), dir_a.path().join("resume.pdf"));
    }

    #[test]
    fn test_resolve_falls_through_to_later_roots() {
        let empty = TempDir::new().unwrap();
        let full = TempDir::new().unwrap();
        std::fs::write(full.path().join("kali closed.jpg"), b"jpeg").unwrap();

        let roots = SearchRoots::from_roots(vec![
            empty.path().to_path_buf(),
            full.path().to_path_buf(),
        ]);

        let resolved = resolve("kali closed.jpg", &roots);
        assert_eq!(
            resolved.path().unwrap(),
            full.path().join("kali closed.jpg")
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        std::fs::write(dir_a.path().join("x.pdf"), b"a").unwrap();
        std::fs::write(dir_b.path().join("x.pdf"), b"b").unwrap();

        let roots = SearchRoots::from_roots(vec![
            dir_a.path().to_path_buf(),
            dir_b.path().to_path_buf(),
        ]);

        let first = resolve("x.pdf", &roots);
        for _ in 0..5 {
            assert_eq!(resolve("x.pdf", &roots), first);
        }
    }

    #[test]
    fn test_resolve_not_found_is_marker_not_error() {
        let empty = TempDir::new().unwrap();
        let roots = SearchRoots::from_roots(vec![empty.path().to_path_buf()]);

        let resolved = resolve("missing.pdf", &roots);
        assert_eq!(resolved, ResolvedResource::NotFound);
        assert!(!resolved.is_found());
        assert!(resolved.path().is_none());
    }

    #[test]
    fn test_resolve_ignores_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("resume.pdf")).unwrap();

        let roots = SearchRoots::from_roots(vec![dir.path().to_path_buf()]);
        assert_eq!(resolve("resume.pdf", &roots), ResolvedResource::NotFound);
    }

    #[test]
    fn test_read_bytes_found() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("doc.pdf"), b"%PDF-1.4").unwrap();

        let roots = SearchRoots::from_roots(vec![dir.path().to_path_buf()]);
        assert_eq!(read_bytes("doc.pdf", &roots).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_read_bytes_not_found_is_error() {
        let empty = TempDir::new().unwrap();
        let roots = SearchRoots::from_roots(vec![empty.path().to_path_buf()]);

        let err = read_bytes("doc.pdf", &roots).unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound { ref name } if name == "doc.pdf"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_extra_roots_append_after_discovered() {
        let roots = SearchRoots::from_roots(vec![PathBuf::from("/a")])
            .with_extra_roots(vec![PathBuf::from("/b")]);
        assert_eq!(roots.roots(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_lowercase_asset_dir_variant_is_probed() {
        let site = TempDir::new().unwrap();
        std::fs::create_dir(site.path().join("projects")).unwrap();
        std::fs::write(site.path().join("projects").join("esp8266.jpg"), b"jpeg").unwrap();

        let roots = SearchRoots::discover(site.path(), DEFAULT_ASSET_DIR);
        let resolved = resolve("esp8266.jpg", &roots);
        assert_eq!(
            resolved.path().unwrap(),
            site.path().join("projects").join("esp8266.jpg")
        );
    }
}

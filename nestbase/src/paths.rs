//! Relative module paths between generated files.
//!
//! Paths are computed lexically: output files usually do not exist yet, so
//! nothing is canonicalized against the filesystem.

use std::path::{Component, Path, PathBuf};

/// Suffixes dropped from module specifiers, longest first.
const TS_SUFFIXES: &[&str] = &[".d.ts", ".ts"];

/// Module specifier importing `to_file` from `from_file`.
///
/// The result is relative to `from_file`'s directory, uses `/` separators,
/// has its `.ts`/`.d.ts` suffix removed and always starts with `./` or
/// `../`.
pub fn relative_module_path(from_file: &Path, to_file: &Path) -> String {
    let from_dir = from_file.parent().unwrap_or_else(|| Path::new(""));
    let mut module = to_slash(&relative_path(to_file, from_dir));

    for suffix in TS_SUFFIXES {
        if let Some(stripped) = module.strip_suffix(suffix) {
            module = stripped.to_string();
            break;
        }
    }

    if module.starts_with("./") || module.starts_with("../") {
        module
    } else if module == ".." {
        "../".to_string()
    } else {
        format!("./{}", module)
    }
}

/// `path` expressed relative to the directory `base`.
///
/// When one path is absolute and the other is not, or they live under
/// different roots, `path` is returned normalized but otherwise unchanged.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    if path.has_root() != base.has_root() {
        return path;
    }

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (path_parts.first(), base_parts.first())
    {
        if a != b {
            return path.clone();
        }
    }

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base_parts.len() {
        result.push("..");
    }
    for part in &path_parts[common..] {
        result.push(part.as_os_str());
    }
    result
}

/// Remove `.` components and fold `..` into preceding normal components.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Join the normal components of `path` with `/`.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => Some(".".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve `path` against `cwd` when it is relative.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

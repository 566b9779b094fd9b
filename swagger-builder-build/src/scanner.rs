//! Source file scanner producing the declarations a generation pass works on.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use syn::ext::IdentExt;
use walkdir::WalkDir;

use crate::diagnostics::Diagnostics;
use crate::model::Declaration;

/// Scan a directory recursively and collect every item of every Rust file.
///
/// Files are visited in file-name order so repeated scans yield the same
/// sequence. Files that cannot be read or parsed are reported and skipped.
pub fn scan_directory(path: &Path, crate_name: &str, diagnostics: &mut dyn Diagnostics) -> Result<Vec<Declaration>> {
    if !path.exists() {
        anyhow::bail!("scan path {} does not exist", path.display());
    }

    let mut declarations = Vec::new();

    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path().extension().is_some_and(|ext| ext == "rs")
                && !e.path().to_string_lossy().contains("/generated/")
                && !e.path().to_string_lossy().contains("/target/")
        })
    {
        let file_path = entry.path();
        match scan_file(file_path, path, crate_name) {
            Ok(file_declarations) => {
                log::debug!("{}: {} declarations", file_path.display(), file_declarations.len());
                declarations.extend(file_declarations);
            }
            Err(err) => diagnostics.error(&format!("{err:#}")),
        }
    }

    Ok(declarations)
}

/// Scan a single Rust file.
fn scan_file(file_path: &Path, base_path: &Path, crate_name: &str) -> Result<Vec<Declaration>> {
    let content = fs::read_to_string(file_path).with_context(|| format!("Failed to read {}", file_path.display()))?;

    let module_path = compute_module_path(file_path, base_path, crate_name);
    parse_source(&content, &module_path).with_context(|| format!("Failed to parse {}", file_path.display()))
}

/// Parse source text that forms the module at `module_path`.
///
/// Inline `mod name { ... }` blocks are flattened with the extended module path.
pub fn parse_source(source: &str, module_path: &str) -> Result<Vec<Declaration>> {
    let syntax = syn::parse_file(source)?;
    let mut declarations = Vec::new();
    flatten_items(syntax.items, module_path, &mut declarations);
    Ok(declarations)
}

fn flatten_items(items: Vec<syn::Item>, module_path: &str, out: &mut Vec<Declaration>) {
    for item in items {
        match item {
            syn::Item::Mod(syn::ItemMod {
                ident,
                content: Some((_, nested)),
                ..
            }) => {
                let nested_path = format!("{module_path}::{}", ident.unraw());
                flatten_items(nested, &nested_path, out);
            }
            item => out.push(Declaration {
                module_path: module_path.to_string(),
                item,
            }),
        }
    }
}

/// Compute the module path from a file path.
/// e.g., "src/custom/models.rs" -> "crate::custom::models"
fn compute_module_path(file_path: &Path, base_path: &Path, crate_name: &str) -> String {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);

    let without_extension = relative.with_extension("");
    let mut parts: Vec<&str> = without_extension
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    if let Some(last) = parts.last()
        && (*last == "mod" || *last == "lib" || *last == "main")
    {
        parts.pop();
    }

    if parts.is_empty() {
        crate_name.to_string()
    } else {
        format!("{}::{}", crate_name, parts.join("::"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;
    use std::path::PathBuf;

    #[test]
    fn test_compute_module_path() {
        let base = PathBuf::from("src");
        assert_eq!(compute_module_path(&base.join("lib.rs"), &base, "crate"), "crate");
        assert_eq!(compute_module_path(&base.join("custom.rs"), &base, "crate"), "crate::custom");
        assert_eq!(
            compute_module_path(&base.join("custom/models/mod.rs"), &base, "crate"),
            "crate::custom::models"
        );
        assert_eq!(
            compute_module_path(&base.join("user.rs"), &base, "crate::examples"),
            "crate::examples::user"
        );
    }

    #[test]
    fn test_parse_source_flattens_inline_modules() {
        let declarations = parse_source(
            r#"
            struct Top;
            mod inner {
                struct Nested;
                mod r#deep {
                    struct Deeper;
                }
            }
            mod external;
            "#,
            "crate::custom",
        )
        .unwrap();

        let paths: Vec<&str> = declarations.iter().map(|d| d.module_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "crate::custom",
                "crate::custom::inner",
                "crate::custom::inner::deep",
                "crate::custom",
            ]
        );
    }

    #[test]
    fn test_scan_directory_reports_unparseable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.rs"), "struct Fine { a: u8 }").unwrap();
        fs::write(dir.path().join("bad.rs"), "struct {").unwrap();
        fs::write(dir.path().join("notes.txt"), "not rust").unwrap();

        let mut diagnostics = CollectingDiagnostics::new();
        let declarations = scan_directory(dir.path(), "crate", &mut diagnostics).unwrap();

        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].module_path, "crate::good");
        let errors: Vec<&str> = diagnostics.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("bad.rs"));
    }

    #[test]
    fn test_scan_directory_missing_path() {
        let mut diagnostics = CollectingDiagnostics::new();
        assert!(scan_directory(Path::new("/definitely/not/here"), "crate", &mut diagnostics).is_err());
    }
}

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "state.rs", "reducer.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared_modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let fs_modules = widget_dirs(&widgets_dir);
    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {declared_modules:?} do not match widget directories {fs_modules:?}",
            mod_rs.display()
        ));
    }

    for module in &declared_modules {
        validate_widget(&widgets_dir.join(module), module, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget(dir: &Path, module: &str, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(module);

    for required in REQUIRED_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required file {required}",
                dir.display()
            ));
        }
    }

    for file in rust_files(dir) {
        let parsed = parse(&file);
        for item in &parsed.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file.display()
                    ));
                }
            }
        }
    }

    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        let enums = enum_names(&parse(&event_rs));
        for suffix in ["Intent", "Event"] {
            let expected = format!("{prefix}{suffix}");
            if !enums.contains(&expected) {
                violations.push(format!(
                    "{}: expected enum {expected}",
                    event_rs.display()
                ));
            }
        }
        for name in &enums {
            if !name.starts_with(&prefix) {
                violations.push(format!(
                    "{}: event enum '{name}' must start with widget prefix '{prefix}'",
                    event_rs.display()
                ));
            }
        }
    }

    let mod_rs = dir.join("mod.rs");
    if mod_rs.is_file() {
        let facade = format!("{prefix}Widget");
        let has_facade = parse(&mod_rs).items.iter().any(|item| {
            matches!(item, Item::Struct(item_struct) if item_struct.ident == facade)
        });
        if !has_facade {
            violations.push(format!(
                "{}: expected struct {facade}",
                mod_rs.display()
            ));
        }
    }

    let view_dir = dir.join("view");
    if view_dir.is_dir() {
        for file in rust_files(&view_dir) {
            if file.file_name().is_some_and(|name| name == "mod.rs") {
                continue;
            }
            validate_view_file(&file, violations);
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in [
        "log::",
        "std::fs::",
        "tokio::",
        "reqwest::",
        "Task::",
        "iced::Task",
        "crate::storage",
        "crate::routers",
        "crate::app::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", "SystemTime::now", "unix_millis"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                view_count += 1;
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") && !name.starts_with(&expected_prefix)
                {
                    violations.push(format!(
                        "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one fn view, found {view_count}",
            file_path.display()
        ));
    }
}

fn widget_dirs(widgets_dir: &Path) -> BTreeSet<String> {
    let entries = fs::read_dir(widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });

    entries
        .map(|entry| {
            entry.unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
        })
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut files: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    files.sort();
    files
}

fn enum_names(file: &syn::File) -> BTreeSet<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

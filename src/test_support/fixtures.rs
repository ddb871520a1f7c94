//! Test fixtures for common graph shapes.

use semver::Version;

use crate::core::{LibraryType, PackageId, ProductType, ResolvedTarget};
use crate::graph::PackageGraph;

/// Snapshot text equivalent to [`two_package_graph`].
pub const TWO_PACKAGE_SNAPSHOT: &str = r#"
[[package]]
name = "app"
version = "1.0.0"
dependencies = ["json"]

[[package.target]]
name = "App"

[[package.target]]
name = "AppTests"

[[package.product]]
name = "app"
type = "executable"
targets = ["App"]

[[package.product]]
name = "app-tests"
type = "test"
targets = ["AppTests"]

[[package]]
name = "json"
version = "2.1.0"
identity = "swift-json"

[[package.target]]
name = "JSON"

[[package.product]]
name = "JSON"
type = { library = "static" }
targets = ["JSON"]
"#;

/// Package "P" with an executable `exe` (target T1) and an automatic
/// library `autolib` (target T2).
pub fn exe_and_autolib_graph() -> PackageGraph {
    let mut graph = PackageGraph::new();
    let p = PackageId::new("P", Version::new(1, 0, 0));
    graph.add_package(p.clone());

    let t1 = graph.add_target(ResolvedTarget::new("T1"), Some(&p));
    let t2 = graph.add_target(ResolvedTarget::new("T2"), Some(&p));

    graph.add_product_with(&p, "exe", ProductType::Executable, vec![t1]);
    graph.add_product_with(
        &p,
        "autolib",
        ProductType::Library(LibraryType::Automatic),
        vec![t2],
    );

    graph
}

/// One package declaring a product of every kind, each with its own target.
pub fn every_product_kind_graph() -> PackageGraph {
    let kinds = [
        ("static", ProductType::Library(LibraryType::Static)),
        ("dynamic", ProductType::Library(LibraryType::Dynamic)),
        ("automatic", ProductType::Library(LibraryType::Automatic)),
        ("exe", ProductType::Executable),
        ("snippet", ProductType::Snippet),
        ("plugin", ProductType::Plugin),
        ("tests", ProductType::Test),
        ("macros", ProductType::Macro),
    ];

    let mut graph = PackageGraph::new();
    let pkg = PackageId::new("kinds", Version::new(0, 1, 0));
    graph.add_package(pkg.clone());

    for (name, kind) in kinds {
        let target = graph.add_target(ResolvedTarget::new(format!("{}-target", name)), Some(&pkg));
        graph.add_product_with(&pkg, name, kind, vec![target]);
    }

    graph
}

/// "app" depending on "json" (identity "swift-json").
pub fn two_package_graph() -> PackageGraph {
    let mut graph = PackageGraph::new();
    let app = PackageId::new("app", Version::new(1, 0, 0));
    let json = PackageId::with_identity("swift-json", "json", Version::new(2, 1, 0));

    graph.add_package(app.clone());
    graph.add_package(json.clone());
    graph.add_dependency(&app, &json);

    let app_target = graph.add_target(ResolvedTarget::new("App"), Some(&app));
    let app_tests = graph.add_target(ResolvedTarget::new("AppTests"), Some(&app));
    let json_target = graph.add_target(ResolvedTarget::new("JSON"), Some(&json));

    graph.add_product_with(&app, "app", ProductType::Executable, vec![app_target]);
    graph.add_product_with(&app, "app-tests", ProductType::Test, vec![app_tests]);
    graph.add_product_with(
        &json,
        "JSON",
        ProductType::Library(LibraryType::Static),
        vec![json_target],
    );

    graph
}

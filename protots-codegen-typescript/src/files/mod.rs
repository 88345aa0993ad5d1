//! Generated TypeScript files.

mod service_network_client;
mod type_file;

use std::path::{Path, PathBuf};

use protots_ir::TypeRef;
pub use service_network_client::ServiceNetworkClientTs;
pub use type_file::TypeFile;

/// Directory of a type's file: its package segments.
pub fn package_dir(type_ref: &TypeRef) -> PathBuf {
    type_ref.package_path().iter().collect()
}

/// Output file of a root type, `<package segments>/<RootName>.ts`.
pub fn root_file_path(type_ref: &TypeRef) -> PathBuf {
    let root = type_ref.root();
    package_dir(&root).join(format!("{}.ts", root.simple_name()))
}

/// A relative path with `/` separators, as shown in reports.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

//! ServiceNetworkClient.ts, the transport every service client posts through.

use std::path::PathBuf;

use protots_core::GeneratedFile;
use protots_ir::TypeRef;

use super::package_dir;
use crate::code_file::{CodeFile, RawCode};

/// Fixed network client interface written next to each service.
pub struct ServiceNetworkClientTs {
    dir: PathBuf,
}

impl ServiceNetworkClientTs {
    /// The client interface for the package of `service`.
    pub fn beside(service: &TypeRef) -> Self {
        Self {
            dir: package_dir(service),
        }
    }
}

impl GeneratedFile for ServiceNetworkClientTs {
    fn path(&self) -> PathBuf {
        self.dir.join("ServiceNetworkClient.ts")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(RawCode::new(
                r#"// A network response.
// AxiosResponse fulfills the requirements of this interface.
export interface ServiceNetworkResponse<T = any> {
  data: T;
}

// A network client which can send requests.
// AxiosInstance fulfills the requirements of this interface and can be passed in via
//   (axios as ServiceNetworkClient)
export default interface ServiceNetworkClient {
  // Send a POST network request to a given path.
  // The path will not include the domain and will be something like "/users/add"
  // The data will be the a JSON string to send as the request payload.
  post<T = any, R = ServiceNetworkResponse<T>>(path: string, data?: any): Promise<R>;
}"#,
            ))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::display_path;

    #[test]
    fn test_path_is_beside_service() {
        let file = ServiceNetworkClientTs::beside(&"dinosaurs.DinosaursService".into());
        assert_eq!(
            display_path(&file.path()),
            "dinosaurs/ServiceNetworkClient.ts"
        );
    }

    #[test]
    fn test_render_ends_with_newline() {
        let content = ServiceNetworkClientTs::beside(&"Svc".into()).render();
        assert!(content.starts_with("// A network response.\n"));
        assert!(content.contains("\n\n// A network client which can send requests.\n"));
        assert!(content.ends_with("Promise<R>;\n}\n"));
    }
}

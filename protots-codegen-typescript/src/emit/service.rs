use protots_codegen::builder::CodeFragment;
use protots_core::{doc_lines, lower_first, to_kebab_case};
use protots_ir::{Record, Rpc, Service, TypeDecl, TypeRef};

use crate::{
    Error, GenerationContext, ImportPathResolver, Result,
    ast::{Class, ClassExport, Constructor, Import, Method, Param},
    code_file::CodeFile,
    files::TypeFile,
};

const CLIENT_TYPE: &str = "ServiceNetworkClient";

/// The HTTP path an RPC posts to, e.g. `dinosaurs/stampede` for
/// `DinosaursService.Stampede`.
pub fn rpc_path(service_name: &str, rpc_name: &str) -> String {
    let base = service_name
        .strip_suffix("Service")
        .unwrap_or(service_name);
    format!("{}/{}", to_kebab_case(base), to_kebab_case(rpc_name))
}

/// Emit the client class of a service.
///
/// Every request and response type must already be known.
pub fn service_file(service: &Service, context: &GenerationContext) -> Result<TypeFile> {
    let rpcs = service
        .rpcs
        .iter()
        .map(|rpc| ResolvedRpc::new(service, rpc, context))
        .collect::<Result<Vec<_>>>()?;

    let mut class = Class::new(service.name(), ClassExport::Default)
        .doc(doc_lines(&service.documentation))
        .section(vec![CodeFragment::line(format!("client: {}", CLIENT_TYPE))])
        .member(&Constructor::new().param(Param::new("client", CLIENT_TYPE)));
    for rpc in &rpcs {
        class = class.member(&rpc.method(service));
    }

    let code = CodeFile::new()
        .imports(service_imports(service, &rpcs, context)?)
        .sorted_imports()
        .add(class);
    Ok(TypeFile::new(service.type_ref.clone(), code))
}

/// An RPC whose request and response records are known.
struct ResolvedRpc<'a> {
    rpc: &'a Rpc,
    request: &'a Record,
    response: &'a Record,
    request_name: String,
    response_name: String,
}

impl<'a> ResolvedRpc<'a> {
    fn new(service: &Service, rpc: &'a Rpc, context: &'a GenerationContext) -> Result<Self> {
        let request = known_record(service, rpc, &rpc.request_type, context)?;
        let response = known_record(service, rpc, &rpc.response_type, context)?;
        Ok(Self {
            rpc,
            request,
            response,
            request_name: context.names.name_for(&request.type_ref)?,
            response_name: context.names.name_for(&response.type_ref)?,
        })
    }

    fn has_payload(&self) -> bool {
        self.request.field_count() > 0
    }

    fn method(&self, service: &Service) -> Method {
        let mut method = Method::new(lower_first(&self.rpc.name))
            .async_()
            .doc(doc_lines(&self.rpc.documentation));
        let payload = if self.has_payload() {
            method = method.param(Param::new("request", &self.request_name));
            "serialize(request)"
        } else {
            "null"
        };
        method
            .returns(format!("Promise<{}>", self.response_name))
            .body_line(format!(
                "const response = await this.client.post(\"{}\", {})",
                rpc_path(service.name(), &self.rpc.name),
                payload
            ))
            .body_line(format!(
                "return plainToClass({}, response.data as JSON)",
                self.response_name
            ))
    }
}

fn known_record<'a>(
    service: &Service,
    rpc: &Rpc,
    type_ref: &TypeRef,
    context: &'a GenerationContext,
) -> Result<&'a Record> {
    match context.names.type_for(type_ref) {
        Some(TypeDecl::Record(record)) => Ok(record),
        Some(decl) => Err(Error::UnsupportedDeclaration {
            type_ref: type_ref.clone(),
            kind: decl.kind(),
            usage: "used as an rpc request or response",
        }),
        None => Err(Error::UnknownRpcType {
            service: service.type_ref.clone(),
            rpc: rpc.name.clone(),
            type_ref: type_ref.clone(),
        }),
    }
}

fn service_imports(
    service: &Service,
    rpcs: &[ResolvedRpc<'_>],
    context: &GenerationContext,
) -> Result<Vec<Import>> {
    let mut imports = vec![Import::new(format!("./{}", CLIENT_TYPE)).default(CLIENT_TYPE)];
    if rpcs.is_empty() {
        return Ok(imports);
    }

    let mut transformer = Import::new("class-transformer").named("plainToClass");
    if rpcs.iter().any(ResolvedRpc::has_payload) {
        transformer = transformer.named("serialize");
    }
    imports.push(transformer);

    for rpc in rpcs {
        let request = rpc.has_payload().then_some(&rpc.request.type_ref);
        for type_ref in request.into_iter().chain([&rpc.response.type_ref]) {
            if !context.names.needs_import(type_ref) {
                continue;
            }
            imports.push(ImportPathResolver::import_for(
                &service.type_ref,
                type_ref,
                &context.names,
            )?);
        }
    }
    Ok(imports)
}

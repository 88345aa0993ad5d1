use protots_codegen::builder::{CodeFragment, Renderable};
use protots_core::{doc_lines, quote_string};
use protots_ir::{Cardinality, Field, Record, ScalarKind, TypeDecl, TypeRef};

use crate::{
    Error, GenerationContext, Result,
    ast::{Class, ClassExport, Constructor, Decorator, Param, Property},
    deferred::placeholder_token,
};

/// The class for one record. Nested types are emitted separately.
pub(super) fn record_class(record: &Record, context: &mut GenerationContext) -> Result<Class> {
    let name = context.names.name_for(&record.type_ref)?;
    let export = if record.type_ref.is_root() {
        ClassExport::Default
    } else {
        ClassExport::Named
    };

    let mut members = Vec::new();
    for field in &record.fields {
        members.extend(property(field, false, &record.type_ref, context)?.to_fragments());
    }
    for one_of in &record.one_ofs {
        if !members.is_empty() {
            members.push(CodeFragment::blank());
        }
        members.push(CodeFragment::comment(format!(
            "{}: At most one of these fields will be non-null",
            one_of.name
        )));
        members.extend(CodeFragment::comments(doc_lines(&one_of.documentation)));
        for field in &one_of.fields {
            members.extend(property(field, true, &record.type_ref, context)?.to_fragments());
        }
    }

    let constructor = constructor(record, &name, context)?
        .map(|c| c.to_fragments())
        .unwrap_or_default();

    Ok(Class::new(name, export)
        .doc(doc_lines(&record.documentation))
        .section(members)
        .section(constructor))
}

fn property(
    field: &Field,
    in_one_of: bool,
    declaring: &TypeRef,
    context: &mut GenerationContext,
) -> Result<Property> {
    let optional = in_one_of || field.cardinality == Cardinality::Optional;
    let initializer = default_literal(field).or_else(|| {
        if optional {
            Some("undefined".to_string())
        } else if field.is_repeated() {
            Some("[]".to_string())
        } else {
            None
        }
    });

    Ok(Property::new(
        field.member_name(),
        context
            .names
            .field_type(&field.type_ref, field.is_repeated())?,
    )
    .doc(doc_lines(&field.documentation))
    .decorator(decorator(field, declaring, context)?)
    .optional(optional)
    .initializer(initializer))
}

/// Association for a field's type: the resolved decorator for records,
/// nothing for scalars and enums, and a placeholder for unknown types.
fn decorator(
    field: &Field,
    declaring: &TypeRef,
    context: &mut GenerationContext,
) -> Result<Decorator> {
    let type_ref = &field.type_ref;
    if type_ref.is_scalar() {
        return Ok(Decorator::None);
    }
    match context.names.type_for(type_ref) {
        Some(TypeDecl::Record(_)) => Ok(Decorator::Association(
            context.names.name_for(type_ref)?,
        )),
        Some(TypeDecl::Enum(_)) => Ok(Decorator::None),
        Some(decl @ TypeDecl::Service(_)) => Err(Error::UnsupportedDeclaration {
            type_ref: type_ref.clone(),
            kind: decl.kind(),
            usage: "used as a field type",
        }),
        None => {
            context.deferred.add_unresolved_field_type(type_ref, declaring);
            Ok(Decorator::Placeholder(placeholder_token(type_ref)))
        }
    }
}

/// String defaults become quoted literals; anything else is emitted as written.
fn default_literal(field: &Field) -> Option<String> {
    let value = field.default.as_deref()?;
    Some(match ScalarKind::of(&field.type_ref) {
        Some(ScalarKind::String) => quote_string(value),
        _ => value.to_string(),
    })
}

/// Required fields become positional parameters. A trailing `configure`
/// callback is added whenever some fields are not positional.
fn constructor(
    record: &Record,
    class_name: &str,
    context: &GenerationContext,
) -> Result<Option<Constructor>> {
    let total = record.field_count();
    if total == 0 {
        return Ok(None);
    }

    let mut constructor = Constructor::new().multiline();
    let mut required = 0;
    for field in record.required_fields() {
        let mut param = Param::new(
            field.member_name(),
            context.names.field_type(&field.type_ref, false)?,
        );
        if let Some(value) = default_literal(field) {
            param = param.default_value(value);
        }
        constructor = constructor.param(param);
        required += 1;
    }
    if required < total {
        constructor = constructor.configure(class_name);
    }
    Ok(Some(constructor))
}

#[cfg(test)]
mod tests {
    use protots_codegen::builder::CodeBuilder;
    use protots_ir::{Enum, OneOf};

    use super::*;

    fn render(record: &Record, context: &mut GenerationContext) -> String {
        let class = record_class(record, context).unwrap();
        let mut builder = CodeBuilder::typescript();
        builder.emit(&class);
        builder.build()
    }

    fn known(context: &mut GenerationContext, decl: impl Into<TypeDecl>) {
        context.names.add(&decl.into());
    }

    #[test]
    fn test_no_fields_no_constructor() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Empty").doc("Nothing at all.");
        assert_eq!(
            render(&record, &mut context),
            "// Nothing at all.\nexport default class Empty {}\n"
        );
    }

    #[test]
    fn test_only_optional_fields() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Egg")
            .field(Field::new("size", "double").optional())
            .field(Field::new("spots", "int32").repeated());
        assert_eq!(
            render(&record, &mut context),
            "export default class Egg {
  size?: number = undefined
  spots: number[] = []

  constructor(configure: ((o: Egg) => void) | undefined = undefined) {
    configure?.call(this, this)
  }
}
"
        );
    }

    #[test]
    fn test_all_fields_required() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Bone")
            .field(Field::new("name", "string").default_value("femur"))
            .field(Field::new("length", "float"));
        assert_eq!(
            render(&record, &mut context),
            "export default class Bone {
  name: string = \"femur\"
  length: number

  constructor(
    name: string = \"femur\",
    length: number
  ) {
    this.name = name
    this.length = length
  }
}
"
        );
    }

    #[test]
    fn test_associations_and_placeholders() {
        let mut context = GenerationContext::new();
        known(&mut context, Record::new("dinos.Egg"));
        known(&mut context, Enum::new("geology.Period"));
        let record = Record::new("dinos.Nest")
            .field(Field::new("eggs", "dinos.Egg").repeated().doc("Eggs."))
            .field(Field::new("period", "geology.Period"))
            .field(Field::new("laid_at", "google.protobuf.Timestamp").optional())
            .field(Field::new("parent", "dinos.Dinosaur").optional());

        assert_eq!(
            render(&record, &mut context),
            "export default class Nest {
  // Eggs.
  @Type(() => Egg)
  eggs: Egg[] = []
  period: Period
  @Type(() => Date)
  laid_at?: Date = undefined
  {{fieldDecorator:dinos.Dinosaur}}parent?: Dinosaur = undefined

  constructor(
    period: Period,
    configure: ((o: Nest) => void) | undefined = undefined
  ) {
    this.period = period
    configure?.call(this, this)
  }
}
"
        );
        assert_eq!(
            context
                .deferred
                .pending(&context.names)
                .into_iter()
                .map(|(d, r)| (d.as_str(), r.as_str()))
                .collect::<Vec<_>>(),
            vec![("dinos.Nest", "dinos.Dinosaur")]
        );
    }

    #[test]
    fn test_one_of_group() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Dinosaur.Diet")
            .field(Field::new("calories", "uint64"))
            .one_of(
                OneOf::new("food")
                    .doc("What it eats.")
                    .field(Field::new("plant", "string"))
                    .field(Field::new("prey_count", "int32").json_name("preyCount")),
            );
        assert_eq!(
            render(&record, &mut context),
            "export class Dinosaur_Diet {
  calories: number

  // food: At most one of these fields will be non-null
  // What it eats.
  plant?: string = undefined
  preyCount?: number = undefined

  constructor(
    calories: number,
    configure: ((o: Dinosaur_Diet) => void) | undefined = undefined
  ) {
    this.calories = calories
    configure?.call(this, this)
  }
}
"
        );
    }

    #[test]
    fn test_only_one_of_fields() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Choice")
            .one_of(OneOf::new("pick").field(Field::new("a", "bool")));
        assert_eq!(
            render(&record, &mut context),
            "export default class Choice {
  // pick: At most one of these fields will be non-null
  a?: boolean = undefined

  constructor(configure: ((o: Choice) => void) | undefined = undefined) {
    configure?.call(this, this)
  }
}
"
        );
    }

    #[test]
    fn test_non_string_default_is_verbatim() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Herd")
            .field(Field::new("size", "int32").optional().default_value("12"))
            .field(Field::new("motto", "string").optional().default_value("'roar'"));
        let code = render(&record, &mut context);
        assert!(code.contains("  size?: number = 12\n"));
        assert!(code.contains("  motto?: string = 'roar'\n"));
    }

    #[test]
    fn test_service_field_is_unsupported() {
        let mut context = GenerationContext::new();
        known(&mut context, protots_ir::Service::new("dinos.Hatchery"));
        let record = Record::new("dinos.Nest").field(Field::new("hatchery", "dinos.Hatchery"));
        let err = record_class(&record, &mut context).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDeclaration { .. }));
    }

    #[test]
    fn test_unknown_scalar_is_fatal() {
        let mut context = GenerationContext::new();
        let record = Record::new("dinos.Nest").field(Field::new("weight", "float128"));
        let err = record_class(&record, &mut context).unwrap_err();
        assert!(matches!(err, Error::UnknownScalar { .. }));
    }
}

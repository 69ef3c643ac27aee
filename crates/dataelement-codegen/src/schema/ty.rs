use super::Error;

/// Value kinds stored inline rather than behind a reference type.
///
/// Primitive fields are passed and returned by value, never null-checked,
/// and get a literal zero value when no default expression is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Primitive {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl Primitive {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "char" => Self::Char,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "usize" => Self::Usize,
            "f32" => Self::F32,
            "f64" => Self::F64,
            _ => return None,
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub(crate) fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

/// Semantic type descriptor of a field: a primitive kind or a named
/// reference type.
///
/// Reference types are carried as source text and only parsed into a
/// `syn::Type` at emission time; a spelling that does not parse is an
/// `UnresolvedFieldType` error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldTy {
    Primitive(Primitive),
    Named(String),
}

impl FieldTy {
    /// Classifies a declared member type (marker front end).
    pub(crate) fn from_ast(ty: &syn::Type) -> Self {
        if let syn::Type::Path(path) = ty {
            if path.qself.is_none() && path.path.segments.len() == 1 {
                let segment = &path.path.segments[0];
                if segment.arguments.is_none() {
                    if let Some(primitive) = Primitive::from_name(&segment.ident.to_string()) {
                        return Self::Primitive(primitive);
                    }
                }
            }
        }

        Self::Named(render_type(ty))
    }

    /// Classifies a schema document type string (schema front end).
    pub(crate) fn from_name(name: &str) -> Self {
        match Primitive::from_name(name) {
            Some(primitive) => Self::Primitive(primitive),
            None => Self::Named(name.to_string()),
        }
    }

    pub(crate) fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub(crate) fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(primitive) => Some(*primitive),
            Self::Named(_) => None,
        }
    }

    /// The spelling used in schema documents and diagnostics.
    pub(crate) fn display_name(&self) -> &str {
        match self {
            Self::Primitive(primitive) => primitive.name(),
            Self::Named(name) => name,
        }
    }

    /// Resolves the descriptor into an emittable type.
    pub(crate) fn to_type(&self) -> Result<syn::Type, Error> {
        syn::parse_str(self.display_name())
            .map_err(|_| Error::UnresolvedFieldType(self.display_name().to_string()))
    }
}

/// Renders a declared type back to compact source text.
fn render_type(ty: &syn::Type) -> String {
    let mut out = String::new();

    for (index, piece) in quote::quote!(#ty).to_string().split_whitespace().enumerate() {
        // Token-stream rendering space-separates every token; joining
        // identifiers back-to-back would fuse them, so keep a space only
        // between two ident-like pieces.
        let glue = index > 0
            && out.ends_with(|c: char| c.is_alphanumeric() || c == '_')
            && piece.starts_with(|c: char| c.is_alphanumeric() || c == '_');

        if glue {
            out.push(' ');
        }
        out.push_str(piece);
    }

    out
}

//! Data model for extracted documentation — format-agnostic.

/// Complete documentation record extracted from a single source file.
///
/// All sequences preserve source order (order of first appearance) and are
/// never deduplicated: a name declared twice appears twice.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    /// Path the record was extracted from, for provenance.
    pub file: String,
    /// First `/** ... */` block in the file, trimmed. Absent if none.
    pub description: Option<String>,
    pub functions: Vec<FunctionDoc>,
    pub structs: Vec<StructDoc>,
    pub constants: Vec<ConstantDoc>,
}

/// A documented function: doc-comment plus the declaration it sits on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionDoc {
    pub name: String,
    /// Trimmed doc-comment text. May be empty for `/** */`.
    pub description: String,
    /// Raw text between the declaration's parentheses, unsplit.
    pub params: String,
}

/// A struct definition with its decomposed member list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StructDoc {
    pub name: String,
    pub members: Vec<Member>,
}

/// One struct member: everything before the final token is the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub ty: String,
    pub name: String,
}

/// A `#define` constant: name plus the raw remainder of the line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstantDoc {
    pub name: String,
    /// Trimmed replacement text; never type-checked or evaluated.
    pub value: String,
}

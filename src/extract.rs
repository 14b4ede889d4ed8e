//! Documentation extraction — lexical pattern matching over raw source text.
//!
//! Recognizes the C doc-comment convention without parsing C: `/** ... */`
//! blocks, the function declaration shape, single-level `struct` bodies and
//! line-anchored `#define` directives. Anything the patterns miss is simply
//! absent from the record; malformed-but-readable text never errors here.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Pattern library ----------------------------------------------------------

// First match is the file description, wherever it sits in the file.
static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*\s*(.*?)\s*\*/").unwrap());

// Doc block immediately followed by a function-shaped declaration:
// return type, optional pointer marker, name, parenthesized parameter list.
// The comment text is matched with `[^*]|\*[^/]` so it cannot run past `*/`;
// a doc block followed by unrelated code must not attach to a later function.
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*\*\s*((?:[^*]|\*[^/])*?)\s*\*/\s*\w+\s+\*?\s*(\w+)\s*\((.*?)\)").unwrap()
});

// Single-level struct body only: [^}] stops at the first closing brace, so a
// nested aggregate is truncated there. Known limitation, pinned by test.
static RE_STRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"struct\s+(\w+)\s*\{([^}]+)\}").unwrap());

static RE_DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#define\s+(\w+)\s+(.+)").unwrap());

// -- Per-file extraction ------------------------------------------------------

/// Extract a documentation record from one file's text.
///
/// Zero matches for any construct yield an empty sequence for that field, not
/// an error. Sequences follow source order and keep duplicates.
pub fn parse(path: &str, source: &str) -> SourceDoc {
    let mut doc = SourceDoc {
        file: path.to_string(),
        ..Default::default()
    };

    if let Some(caps) = RE_DOC_BLOCK.captures(source) {
        doc.description = Some(caps[1].trim().to_string());
    }

    for caps in RE_FUNCTION.captures_iter(source) {
        doc.functions.push(FunctionDoc {
            name: caps[2].to_string(),
            description: caps[1].trim().to_string(),
            params: caps[3].trim().to_string(),
        });
    }

    for caps in RE_STRUCT.captures_iter(source) {
        doc.structs.push(StructDoc {
            name: caps[1].to_string(),
            members: decompose_members(&caps[2]),
        });
    }

    for caps in RE_DEFINE.captures_iter(source) {
        doc.constants.push(ConstantDoc {
            name: caps[1].to_string(),
            value: caps[2].trim().to_string(),
        });
    }

    doc
}

// -- Member decomposition -----------------------------------------------------

/// Split a struct body into `(type, name)` member pairs.
///
/// One declaration per `;`-terminated segment. A trimmed segment needs at
/// least two whitespace-separated tokens: the last is the member name, the
/// rest joined with single spaces form the type. Segments that don't qualify
/// (empty, single-token) are dropped without error, and multi-line
/// declarations have their internal whitespace normalized to single spaces.
pub fn decompose_members(body: &str) -> Vec<Member> {
    let mut members = Vec::new();

    for segment in body.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = segment.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }
        members.push(Member {
            ty: tokens[..tokens.len() - 1].join(" "),
            name: tokens[tokens.len() - 1].to_string(),
        });
    }

    members
}

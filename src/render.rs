//! Markdown document synthesis from per-file documentation records.
//!
//! Rendering is a pure function of its inputs: identical records in identical
//! order always produce byte-identical section bodies. The generation
//! timestamp is injected by the caller so the core stays deterministic.

use crate::model::*;

/// Fixed table of contents. Intentionally static, never derived from the
/// scanned input set.
const TOC_ENTRIES: &[(&str, &str)] = &[
    ("Project Structure", "project-structure"),
    ("Boot Process", "boot-process"),
    ("Kernel API", "kernel-api"),
    ("Memory Layout", "memory-layout"),
    ("Development Tools", "development-tools"),
];

/// Render the complete documentation document.
///
/// `tree` is the pre-rendered indented file listing from the discovery step;
/// records are emitted in the order given (processing order).
pub fn render(records: &[SourceDoc], tree: &str, title: &str, timestamp: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    // Header
    out.push(format!("# {} Documentation", title));
    out.push(format!("*Generated on {}*", timestamp));
    out.push(String::new());

    // Table of contents
    out.push("## Table of Contents".to_string());
    out.push(String::new());
    for (i, (name, anchor)) in TOC_ENTRIES.iter().enumerate() {
        out.push(format!("{}. [{}](#{})", i + 1, name, anchor));
    }
    out.push(String::new());

    // Project structure
    out.push("## Project Structure".to_string());
    out.push(String::new());
    out.push("```".to_string());
    for line in tree.lines() {
        out.push(line.to_string());
    }
    out.push("```".to_string());
    out.push(String::new());

    // Per-file sections
    for doc in records {
        render_file_section(&mut out, doc);
    }

    out.join("\n")
}

/// Render one file's section. Empty subsections are omitted entirely —
/// no heading is emitted for a construct the file doesn't have.
fn render_file_section(out: &mut Vec<String>, doc: &SourceDoc) {
    out.push(format!("## {}", doc.file));
    out.push(String::new());

    if let Some(ref desc) = doc.description {
        out.push(desc.clone());
        out.push(String::new());
    }

    if !doc.functions.is_empty() {
        out.push("### Functions".to_string());
        out.push(String::new());
        for func in &doc.functions {
            out.push(format!("#### `{}`", func.name));
            out.push(String::new());
            out.push(func.description.clone());
            out.push(String::new());
            if !func.params.is_empty() {
                out.push(format!("**Parameters:** `{}`", func.params));
                out.push(String::new());
            }
        }
    }

    if !doc.structs.is_empty() {
        out.push("### Data Structures".to_string());
        out.push(String::new());
        for st in &doc.structs {
            out.push(format!("#### `struct {}`", st.name));
            out.push("```c".to_string());
            out.push(format!("struct {} {{", st.name));
            for member in &st.members {
                out.push(format!("    {} {};", member.ty, member.name));
            }
            out.push("};".to_string());
            out.push("```".to_string());
            out.push(String::new());
        }
    }

    if !doc.constants.is_empty() {
        out.push("### Constants".to_string());
        out.push(String::new());
        for constant in &doc.constants {
            out.push(format!("- `{}` = `{}`", constant.name, constant.value));
        }
        out.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str) -> SourceDoc {
        SourceDoc {
            file: file.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn header_and_static_toc() {
        let output = render(&[], "", "Kernel", "2024-01-01 00:00:00");
        assert!(output.starts_with("# Kernel Documentation\n*Generated on 2024-01-01 00:00:00*"));
        assert!(output.contains("## Table of Contents"));
        assert!(output.contains("1. [Project Structure](#project-structure)"));
        assert!(output.contains("5. [Development Tools](#development-tools)"));
    }

    #[test]
    fn tree_listing_fenced() {
        let output = render(&[], "./\n  kernel/\n    kernel.c", "Kernel", "ts");
        assert!(output.contains("```\n./\n  kernel/\n    kernel.c\n```"));
    }

    #[test]
    fn empty_functions_omit_heading() {
        let mut doc = record("src/empty.c");
        doc.constants.push(ConstantDoc {
            name: "MAX".into(),
            value: "100".into(),
        });
        let output = render(&[doc], "", "Kernel", "ts");
        assert!(!output.contains("### Functions"));
        assert!(output.contains("### Constants"));
        assert!(output.contains("- `MAX` = `100`"));
    }

    #[test]
    fn struct_block_reconstructed() {
        let mut doc = record("src/point.c");
        doc.structs.push(StructDoc {
            name: "Point".into(),
            members: vec![
                Member { ty: "int".into(), name: "x".into() },
                Member { ty: "int".into(), name: "y".into() },
            ],
        });
        let output = render(&[doc], "", "Kernel", "ts");
        assert!(output.contains("#### `struct Point`"));
        assert!(output.contains("```c\nstruct Point {\n    int x;\n    int y;\n};\n```"));
    }

    #[test]
    fn function_params_line_only_when_present() {
        let mut doc = record("src/io.c");
        doc.functions.push(FunctionDoc {
            name: "outb".into(),
            description: "Write one byte".into(),
            params: "int port, int value".into(),
        });
        doc.functions.push(FunctionDoc {
            name: "halt".into(),
            description: "Stop the CPU".into(),
            params: String::new(),
        });
        let output = render(&[doc], "", "Kernel", "ts");
        assert!(output.contains("**Parameters:** `int port, int value`"));
        let halt_section = output.split("#### `halt`").nth(1).unwrap();
        assert!(!halt_section.contains("**Parameters:**"));
    }

    #[test]
    fn file_sections_in_input_order() {
        let mut first = record("kernel/kernel.c");
        first.description = Some("Main kernel".into());
        first.functions.push(FunctionDoc {
            name: "kmain".into(),
            description: "Entry point".into(),
            params: "void".into(),
        });
        let second = record("src/bare.c");

        let output = render(&[first, second], "", "Kernel", "ts");
        let kernel_pos = output.find("## kernel/kernel.c").unwrap();
        let bare_pos = output.find("## src/bare.c").unwrap();
        assert!(kernel_pos < bare_pos);

        // First file has a description and a Functions subsection.
        assert!(output.contains("Main kernel"));
        assert!(output.contains("#### `kmain`"));
        // Second file section carries neither.
        let bare_section = &output[bare_pos..];
        assert!(!bare_section.contains("### Functions"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut doc = record("src/a.c");
        doc.constants.push(ConstantDoc {
            name: "N".into(),
            value: "1".into(),
        });
        let records = vec![doc];
        assert_eq!(
            render(&records, "./", "Kernel", "ts"),
            render(&records, "./", "Kernel", "ts")
        );
    }
}

use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::error::{ClassdocError, Result};
use super::super::{ClassRecord, MethodRecord};
use super::LanguageParser;

/// Python-specific parser using Tree-sitter
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let python_language = tree_sitter_python::language();
        parser.set_language(&python_language)
            .map_err(|e| ClassdocError::Parser(format!("Failed to set Python language: {}", e)))?;

        Ok(Self { parser })
    }
}

impl LanguageParser for PythonParser {
    fn extract_classes(&mut self, content: &str, file_path: &Path) -> Result<Vec<ClassRecord>> {
        let tree = self.parser.parse(content, None)
            .ok_or_else(|| ClassdocError::Parser(format!("Failed to parse {}", file_path.display())))?;

        self.walk_tree(tree.root_node(), content, file_path)
    }

    fn file_extensions(&self) -> &[&str] {
        &["py"]
    }

    fn language_name(&self) -> &str {
        "python"
    }
}

impl PythonParser {
    /// Pre-order walk over the whole tree.
    ///
    /// A class is recorded before any class nested inside it. The first node
    /// that is not valid Python 3 (in the same order) aborts the file.
    fn walk_tree(&self, root: Node, source: &str, file_path: &Path) -> Result<Vec<ClassRecord>> {
        let mut classes = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();

            if is_invalid_node(node) {
                let position = node.start_position();
                return Err(ClassdocError::Parse {
                    path: file_path.to_path_buf(),
                    line: position.row + 1,
                    column: position.column + 1,
                });
            }

            if node.kind() == "class_definition" {
                if let Some(record) = self.parse_python_class(node, source) {
                    classes.push(record);
                }
            }

            if cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Ok(classes);
                }
            }
        }
    }

    /// Parse a Python class definition
    fn parse_python_class(&self, node: Node, source: &str) -> Option<ClassRecord> {
        let name = self.node_text(node.child_by_field_name("name")?, source);

        let mut methods = Vec::new();
        if let Some(body_node) = node.child_by_field_name("body") {
            let mut cursor = body_node.walk();
            for child in body_node.named_children(&mut cursor) {
                if let Some(method_name) = self.method_name(child, source) {
                    methods.push(MethodRecord { name: method_name });
                }
            }
        }

        Some(ClassRecord::new(name, methods))
    }

    /// Name of a direct class-body statement if it defines a function
    fn method_name(&self, node: Node, source: &str) -> Option<String> {
        let function = match node.kind() {
            "function_definition" => node,
            "decorated_definition" => {
                let definition = node.child_by_field_name("definition")?;
                if definition.kind() != "function_definition" {
                    return None;
                }
                definition
            }
            _ => return None,
        };

        function
            .child_by_field_name("name")
            .map(|name_node| self.node_text(name_node, source))
    }

    /// Extract text content of a node
    fn node_text(&self, node: Node, source: &str) -> String {
        source[node.byte_range()].to_string()
    }
}

/// Tree-sitter recovers from bad input and also accepts Python 2 statements;
/// both count as syntax errors here.
fn is_invalid_node(node: Node) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    match node.kind() {
        "print_statement" | "exec_statement" => true,
        // `except E, e:` puts the comma directly under the clause
        "except_clause" => {
            let mut cursor = node.walk();
            let has_comma = node.children(&mut cursor).any(|child| child.kind() == ",");
            has_comma
        }
        _ => false,
    }
}

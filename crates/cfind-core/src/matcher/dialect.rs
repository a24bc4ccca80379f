//! Basic-vs-advanced regex dialect check.
//!
//! The `regex` crate accepts a superset of POSIX extended syntax. When
//! advanced syntax is off, patterns are limited to the baseline: nested
//! bracket classes and class set operations (`&&`, `--`, `~~`) are refused.
//! Everything else is left to the engine.

use regex_syntax::ast::{self, Ast, ClassSet, ClassSetItem};

use crate::error::SearchError;

const NESTED_CLASS: &str = "a nested character class";
const CLASS_SET_OPERATION: &str = "a character class set operation";

/// Reject `pattern` if it uses advanced-only syntax.
///
/// Patterns the parser cannot read are let through; the engine reports them
/// as [`SearchError::InvalidPattern`] with its own message.
pub(crate) fn check_basic(pattern: &str) -> Result<(), SearchError> {
    let Ok(parsed) = ast::parse::Parser::new().parse(pattern) else {
        return Ok(());
    };
    match advanced_feature(&parsed) {
        Some(feature) => Err(SearchError::UnsupportedSyntax {
            pattern: pattern.to_string(),
            feature,
        }),
        None => Ok(()),
    }
}

fn advanced_feature(node: &Ast) -> Option<&'static str> {
    match node {
        Ast::ClassBracketed(class) => class_set_feature(&class.kind),
        Ast::Repetition(rep) => advanced_feature(&rep.ast),
        Ast::Group(group) => advanced_feature(&group.ast),
        Ast::Alternation(alt) => alt.asts.iter().find_map(advanced_feature),
        Ast::Concat(concat) => concat.asts.iter().find_map(advanced_feature),
        _ => None,
    }
}

fn class_set_feature(set: &ClassSet) -> Option<&'static str> {
    match set {
        ClassSet::BinaryOp(_) => Some(CLASS_SET_OPERATION),
        ClassSet::Item(item) => class_item_feature(item),
    }
}

fn class_item_feature(item: &ClassSetItem) -> Option<&'static str> {
    match item {
        ClassSetItem::Bracketed(_) => Some(NESTED_CLASS),
        ClassSetItem::Union(union) => union.items.iter().find_map(class_item_feature),
        _ => None,
    }
}

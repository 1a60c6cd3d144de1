//! Serialization of the typed model into the fixed expression grammar.
//!
//! Rendering is pure and deterministic: the same tree always produces
//! byte-identical text. Groups are always parenthesized explicitly, so the
//! output needs no operator-precedence rules to read back correctly.

use thiserror::Error;

use crate::types::{
    Arg, Comparator, ComparatorShape, Condition, ConditionGroup, FunctionCall, GroupChild,
    LeftOperand, Literal, RightOperand, Rule,
};

/// A tree handed to the renderer violates a construction-time invariant.
/// This signals a defect in the caller; no partial text is emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("condition group has no children")]
    EmptyGroup,

    #[error("property reference name is empty")]
    EmptyPropertyName,

    #[error("function '{function}' call does not match its signature")]
    BadFunctionCall { function: &'static str },

    #[error("'{name}' is not a valid rule name")]
    BadRuleName { name: String },

    #[error("string literal contains a control character")]
    BadStringLiteral,
}

/// Render a rule's root condition group to expression text.
///
/// # Errors
///
/// Returns [`RenderError`] if the tree violates a construction invariant.
pub fn render_rule(rule: &Rule) -> Result<String, RenderError> {
    render_group(rule.root())
}

/// Render a condition group to expression text.
///
/// # Errors
///
/// Returns [`RenderError`] if the tree violates a construction invariant.
pub fn render_group(group: &ConditionGroup) -> Result<String, RenderError> {
    let mut out = String::new();
    write_group(&mut out, group)?;
    Ok(out)
}

fn write_group(out: &mut String, group: &ConditionGroup) -> Result<(), RenderError> {
    if group.children().is_empty() {
        return Err(RenderError::EmptyGroup);
    }
    if group.is_negated() {
        out.push('!');
    }
    out.push('(');
    let join = group.operator().token();
    for (i, child) in group.children().iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(join);
            out.push(' ');
        }
        match child {
            GroupChild::Condition(cond) => write_condition(out, cond)?,
            GroupChild::Group(nested) => write_group(out, nested)?,
        }
    }
    out.push(')');
    Ok(())
}

fn write_condition(out: &mut String, cond: &Condition) -> Result<(), RenderError> {
    match cond {
        Condition::RuleRef { rule, evaluates_to } => {
            // The reference phrase is whitespace-tokenized on read-back, so
            // only single-token names survive: alphanumerics and underscores.
            if rule.is_empty()
                || !rule.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(RenderError::BadRuleName { name: rule.clone() });
            }
            out.push_str("{Rule ");
            out.push_str(rule);
            out.push_str(" evaluates to ");
            out.push_str(if *evaluates_to { "true" } else { "false" });
            out.push('}');
            Ok(())
        }
        Condition::Compare {
            left,
            comparator,
            right,
            trim,
        } => write_compare(out, left, *comparator, right, *trim),
    }
}

fn write_compare(
    out: &mut String,
    left: &LeftOperand,
    comparator: Comparator,
    right: &RightOperand,
    trim: bool,
) -> Result<(), RenderError> {
    match comparator.shape() {
        ComparatorShape::Symbolic(op) => {
            out.push('(');
            write_left(out, left)?;
            out.push(' ');
            out.push_str(op);
            out.push(' ');
            write_right(out, right)?;
            out.push(')');
        }
        ComparatorShape::Function(kind) => {
            out.push('@');
            out.push_str(kind.name());
            out.push('(');
            if trim {
                out.push_str("@trim(");
                write_left(out, left)?;
                out.push(')');
            } else {
                write_left(out, left)?;
            }
            out.push(',');
            write_right(out, right)?;
            out.push(')');
        }
    }
    Ok(())
}

fn write_left(out: &mut String, operand: &LeftOperand) -> Result<(), RenderError> {
    match operand {
        LeftOperand::Property(prop) => write_property(out, prop.name()),
        LeftOperand::Call(call) => write_call(out, call),
    }
}

fn write_right(out: &mut String, operand: &RightOperand) -> Result<(), RenderError> {
    match operand {
        RightOperand::Literal(lit) => write_literal(out, lit),
        RightOperand::Call(call) => write_call(out, call),
    }
}

fn write_literal(out: &mut String, lit: &Literal) -> Result<(), RenderError> {
    // The grammar has no escape for control characters; an unescaped
    // newline would terminate the quoted literal on read-back.
    if let Literal::Str(v) = lit {
        if v.chars().any(char::is_control) {
            return Err(RenderError::BadStringLiteral);
        }
    }
    out.push_str(&lit.to_string());
    Ok(())
}

fn write_property(out: &mut String, name: &str) -> Result<(), RenderError> {
    if name.trim().is_empty() {
        return Err(RenderError::EmptyPropertyName);
    }
    out.push_str(name);
    Ok(())
}

fn write_call(out: &mut String, call: &FunctionCall) -> Result<(), RenderError> {
    // Construction already enforced the signature; re-check before emitting
    // so a defective tree never produces partial text.
    if call.args().len() != call.kind().signature().arity() {
        return Err(RenderError::BadFunctionCall {
            function: call.kind().name(),
        });
    }
    out.push('@');
    out.push_str(call.kind().name());
    out.push('(');
    for (i, arg) in call.args().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match arg {
            Arg::Property(prop) => write_property(out, prop.name())?,
            Arg::Literal(lit) => write_literal(out, lit)?,
            Arg::Call(nested) => write_call(out, nested)?,
        }
    }
    out.push(')');
    Ok(())
}

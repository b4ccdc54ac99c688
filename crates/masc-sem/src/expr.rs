//! Expression typing rules. Every `infer` call returns a [`Ty`];
//! `Ty::Unknown` is returned (after a diagnostic has already been
//! emitted) rather than propagating an error up the call stack, so the
//! caller can keep traversing instead of bailing out.
//!
//! `line` is threaded down from the enclosing statement rather than
//! carried on `Expr` itself: only statement-level AST nodes carry a
//! `line`, and every expression in this grammar lives entirely within one
//! statement, so the enclosing statement's line is an accurate diagnostic
//! anchor for everything beneath it.

use masc_par::ast::{AddOp, BinOp, CompareOp, Expr, FuncCall, MulOp, TypeTag};

use crate::{Analyzer, Ty};

impl<'a> Analyzer<'a> {
    pub(crate) fn infer(&mut self, expr: &Expr, line: u32) -> Ty {
        match expr {
            Expr::IntLiteral(_) => Ty::Known(TypeTag::Int),
            Expr::FloatLiteral(_) => Ty::Known(TypeTag::Float),
            Expr::StringLiteral(_) => Ty::Known(TypeTag::String),
            Expr::CharLiteral(_) => Ty::Known(TypeTag::Char),
            Expr::BoolLiteral(_) => Ty::Known(TypeTag::Bool),
            Expr::Ident(name) => match self.scopes.resolve(*name) {
                Some(tag) => Ty::Known(tag),
                None => {
                    self.report(format!("undeclared variable '{}'", self.name(*name)), line);
                    Ty::Unknown
                }
            },
            Expr::BinaryExpression { left, op, right } => {
                self.infer_binary(left, *op, right, line)
            }
            Expr::FuncCall(call) => self.infer_call(call),
        }
    }

    fn infer_binary(&mut self, left: &Expr, op: BinOp, right: &Expr, line: u32) -> Ty {
        let left_ty = self.infer(left, line);
        let right_ty = self.infer(right, line);

        match op {
            BinOp::Compare(cmp) => self.infer_comparison(cmp, left_ty, right_ty, line),
            BinOp::Add(add_op) => self.infer_additive(add_op, left_ty, right_ty, line),
            BinOp::Sub => self.infer_other_arithmetic("-", left_ty, right_ty, line),
            BinOp::Mul(mul_op) => {
                let symbol = match mul_op {
                    MulOp::Mul => "*",
                    MulOp::Div => "/",
                    MulOp::Rem => "%",
                };
                self.infer_other_arithmetic(symbol, left_ty, right_ty, line)
            }
        }
    }

    /// Comparison: operands must have equal types; result is always
    /// `bool`, even when the operands mismatched.
    fn infer_comparison(&mut self, op: CompareOp, left: Ty, right: Ty, line: u32) -> Ty {
        if let (Some(left_tag), Some(right_tag)) = (left.tag(), right.tag()) {
            if left_tag != right_tag {
                let symbol = compare_symbol(op);
                self.report(
                    format!(
                        "type mismatch in comparison '{symbol}': expected {left_tag}, got {right_tag}"
                    ),
                    line,
                );
            }
        }
        Ty::Known(TypeTag::Bool)
    }

    /// Additive family (`+`, `.`): if either operand is `string`, the
    /// result is `string` (concatenation), regardless of the other
    /// operand's type. Otherwise both must be the same numeric type.
    fn infer_additive(&mut self, op: AddOp, left: Ty, right: Ty, line: u32) -> Ty {
        if left.tag() == Some(TypeTag::String) || right.tag() == Some(TypeTag::String) {
            return Ty::Known(TypeTag::String);
        }

        let symbol = match op {
            AddOp::Add => "+",
            AddOp::Concat => ".",
        };

        match (left.tag(), right.tag()) {
            (Some(left_tag), Some(right_tag)) => {
                if left_tag != right_tag
                    || !matches!(left_tag, TypeTag::Int | TypeTag::Float)
                {
                    self.report(
                        format!(
                            "type mismatch in expression '{symbol}': expected {left_tag}, got {right_tag}"
                        ),
                        line,
                    );
                    Ty::Known(left_tag)
                } else {
                    Ty::Known(left_tag)
                }
            }
            (Some(left_tag), None) => Ty::Known(left_tag),
            (None, _) => Ty::Unknown,
        }
    }

    /// "Other arithmetic" (`-`, `*`, `/`, `%`): left must be `int` or
    /// `float`; right must equal left; result is always left's type, even
    /// when either check failed.
    fn infer_other_arithmetic(&mut self, symbol: &str, left: Ty, right: Ty, line: u32) -> Ty {
        let Some(left_tag) = left.tag() else {
            return Ty::Unknown;
        };

        if !matches!(left_tag, TypeTag::Int | TypeTag::Float) {
            self.report(
                format!("type mismatch in expression '{symbol}': expected int or float, got {left_tag}"),
                line,
            );
            return Ty::Known(left_tag);
        }

        if let Some(right_tag) = right.tag() {
            if right_tag != left_tag {
                self.report(
                    format!(
                        "type mismatch in expression '{symbol}': expected {left_tag}, got {right_tag}"
                    ),
                    line,
                );
            }
        }

        Ty::Known(left_tag)
    }

    /// `FuncCall`: look the name up in the function table, check arity and
    /// per-position argument types, and return the declared return type
    /// regardless of any argument errors.
    pub(crate) fn infer_call(&mut self, call: &FuncCall) -> Ty {
        let Some(sig) = self.functions.get(call.name).cloned() else {
            self.report(
                format!("undeclared function '{}'", self.name(call.name)),
                call.line,
            );
            for arg in &call.args {
                self.infer(arg, call.line);
            }
            return Ty::Unknown;
        };

        if call.args.len() != sig.param_types.len() {
            self.report(
                format!("argument count mismatch in function '{}'", self.name(call.name)),
                call.line,
            );
        }

        for (index, arg) in call.args.iter().enumerate() {
            let arg_ty = self.infer(arg, call.line);
            if let Some(param_tag) = sig.param_types.get(index) {
                if let Some(arg_tag) = arg_ty.tag() {
                    if arg_tag != *param_tag {
                        self.report(
                            format!(
                                "type mismatch in argument {} of function '{}'",
                                index + 1,
                                self.name(call.name)
                            ),
                            call.line,
                        );
                    }
                }
            }
        }

        Ty::Known(sig.return_type)
    }
}

fn compare_symbol(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "==",
        CompareOp::NEq => "!=",
        CompareOp::Lt => "<",
        CompareOp::LtOe => "<=",
        CompareOp::Gt => ">",
        CompareOp::GtOe => ">=",
    }
}

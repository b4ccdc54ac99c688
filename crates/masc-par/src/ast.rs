//! AST node definitions.
//!
//! The AST is a tagged-variant sum type, not a heterogeneous node hierarchy
//! dispatched at runtime: every node the analyser has to handle is an enum
//! variant the compiler checks exhaustively, not a string or an
//! `Any`-style downcast.

use masc_util::Symbol;

/// A full program: an ordered sequence of top-level declarations.
///
/// Statements are allowed at the top level alongside function definitions:
/// there is no separate module-scope restriction.
pub type Program = Vec<Decl>;

/// One top-level declaration, or (recursively) one statement inside a
/// `CodeBlock`. `Program` and `CodeBlock` draw their elements from the
/// same set, except that a nested block cannot itself contain a
/// `Function` or another `Program`.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(Function),
    Var(Var),
    Assignment(Assignment),
    Return(Return),
    If(If),
    While(While),
    For(For),
    Print(Print),
    Input(Input),
    FuncCall(FuncCall),
}

impl Decl {
    pub fn line(&self) -> u32 {
        match self {
            Decl::Function(f) => f.line,
            Decl::Var(v) => v.line,
            Decl::Assignment(a) => a.line,
            Decl::Return(r) => r.line,
            Decl::If(i) => i.line,
            Decl::While(w) => w.line,
            Decl::For(f) => f.line,
            Decl::Print(p) => p.line,
            Decl::Input(i) => i.line,
            Decl::FuncCall(c) => c.line,
        }
    }
}

/// One of the five primitive types. Modeled as a closed enum rather than a
/// string tag: equality is a tag comparison, and there is no typo-class
/// bug a string comparison invites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Char,
    Bool,
    String,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Char => "char",
            TypeTag::Bool => "bool",
            TypeTag::String => "string",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub ty: TypeTag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub line: u32,
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_type: TypeTag,
    pub body: CodeBlock,
}

/// An ordered sequence of statements. Unlike `Program`, a `CodeBlock` may not
/// contain a `Function` or another top-level `Program`.
pub type CodeBlock = Vec<Decl>;

#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    pub line: u32,
    pub name: Symbol,
    pub ty: TypeTag,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub line: u32,
    pub name: Symbol,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub line: u32,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub line: u32,
    pub condition: Expr,
    pub then_block: CodeBlock,
    pub else_block: Option<CodeBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub line: u32,
    pub condition: Expr,
    pub body: CodeBlock,
}

/// The `for` loop's init clause: either a full `VarDecl` (consuming its own
/// `;`) or an `AssignOrCall`.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Var(Var),
    Assignment(Assignment),
    FuncCall(FuncCall),
}

/// The `for` loop's increment clause: an `AssignOrCall` with no trailing
/// `;`. A `VarDecl` is not a valid increment.
#[derive(Debug, Clone, PartialEq)]
pub enum ForIncrement {
    Assignment(Assignment),
    FuncCall(FuncCall),
}

/// A `for` loop. All four subcomponents are always present: there is no
/// `for (;;)` form in this grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub line: u32,
    pub init: Box<ForInit>,
    pub condition: Expr,
    pub increment: Box<ForIncrement>,
    pub body: CodeBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub line: u32,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub line: u32,
    pub target_name: Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub line: u32,
    pub name: Symbol,
    pub args: Vec<Expr>,
}

/// One of the comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NEq,
    Lt,
    LtOe,
    Gt,
    GtOe,
}

/// One of the additive-family operators (`+`, and `.` for concatenation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Concat,
}

/// One of the multiplicative-family operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
    Rem,
}

/// A binary operator, tagged by which typing family it belongs to rather
/// than strictly by the precedence level it was parsed at: `-` is parsed
/// at `Additive` precedence but typed under the "other arithmetic" rule
/// alongside `*`, `/`, `%`, so it gets its own variant instead of sitting
/// in `Add`. The AST shape should make the typing split visible rather
/// than have the analyser re-derive it from which grammar production
/// produced the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Compare(CompareOp),
    Add(AddOp),
    Sub,
    Mul(MulOp),
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BinOp::Compare(CompareOp::Eq) => "==",
            BinOp::Compare(CompareOp::NEq) => "!=",
            BinOp::Compare(CompareOp::Lt) => "<",
            BinOp::Compare(CompareOp::LtOe) => "<=",
            BinOp::Compare(CompareOp::Gt) => ">",
            BinOp::Compare(CompareOp::GtOe) => ">=",
            BinOp::Add(AddOp::Add) => "+",
            BinOp::Sub => "-",
            BinOp::Add(AddOp::Concat) => ".",
            BinOp::Mul(MulOp::Mul) => "*",
            BinOp::Mul(MulOp::Div) => "/",
            BinOp::Mul(MulOp::Rem) => "%",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(Symbol),
    CharLiteral(char),
    BoolLiteral(bool),
    Ident(Symbol),
    BinaryExpression {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    FuncCall(FuncCall),
}

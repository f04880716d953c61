//! Error context for "while parsing X" notes.

/// What was being parsed when an error occurred.
///
/// ```ignore
/// self.in_error_context(ErrorContext::IfStatement, |p| p.parse_if_inner(start))
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Statements ===
    Script,
    Block,
    IfStatement,
    DoStatement,
    ForLoop,
    TryStatement,
    CatchClause,
    WithStatement,
    AssignBlock,
    FuncBlock,
    InheritBlock,

    // === Expressions ===
    Expression,
    ArrayLiteral,
    ArgumentList,
    FunctionCall,
    IndexExpression,
    MemberAccess,
    FunctionExpression,
    FunctionParams,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Script => "the script",
            Self::Block => "a block",
            Self::IfStatement => "an if statement",
            Self::DoStatement => "a do block",
            Self::ForLoop => "a for loop",
            Self::TryStatement => "a try statement",
            Self::CatchClause => "a catch clause",
            Self::WithStatement => "a with statement",
            Self::AssignBlock => "an assignment block",
            Self::FuncBlock => "a function definition",
            Self::InheritBlock => "an inherit block",
            Self::Expression => "an expression",
            Self::ArrayLiteral => "an array literal",
            Self::ArgumentList => "an argument list",
            Self::FunctionCall => "a function call",
            Self::IndexExpression => "an index expression",
            Self::MemberAccess => "a member access",
            Self::FunctionExpression => "a function expression",
            Self::FunctionParams => "function parameters",
        }
    }
}

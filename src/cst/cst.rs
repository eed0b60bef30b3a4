use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Non-terminals of the Wumpus World grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Rule {
    Program,
    Declarations,
    ConstantDeclaration,
    FunctionDeclaration,
    ReturnType,
    FormalParams,
    VarDeclaration,
    InitBlock,
    GridSize,
    MandatoryAgent,
    MandatoryWumpus,
    MandatoryGold,
    InitStatement,
    Location,
    PlayBlock,
    Block,
    Statement,
    MoveStmt,
    ShootStmt,
    GrabStmt,
    PrintPosStmt,
    Direction,
    IfStmt,
    WhileStmt,
    ReturnStmt,
    ActionAssignment,
    Var,
    ConditionalExpression,
    Term,
    Element,
    Sense,
    Expr,
    Exprfac,
    Exprbase,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Program => "program",
            Rule::Declarations => "declarations",
            Rule::ConstantDeclaration => "constant_declaration",
            Rule::FunctionDeclaration => "function_declaration",
            Rule::ReturnType => "return_type",
            Rule::FormalParams => "formal_params",
            Rule::VarDeclaration => "var_declaration",
            Rule::InitBlock => "init_block",
            Rule::GridSize => "grid_size",
            Rule::MandatoryAgent => "mandatory_agent",
            Rule::MandatoryWumpus => "mandatory_wumpus",
            Rule::MandatoryGold => "mandatory_gold",
            Rule::InitStatement => "init_statement",
            Rule::Location => "location",
            Rule::PlayBlock => "play_block",
            Rule::Block => "block",
            Rule::Statement => "statement",
            Rule::MoveStmt => "move_stmt",
            Rule::ShootStmt => "shoot_stmt",
            Rule::GrabStmt => "grab_stmt",
            Rule::PrintPosStmt => "print_pos_stmt",
            Rule::Direction => "direction",
            Rule::IfStmt => "if_stmt",
            Rule::WhileStmt => "while_stmt",
            Rule::ReturnStmt => "return_stmt",
            Rule::ActionAssignment => "action_assignment",
            Rule::Var => "var",
            Rule::ConditionalExpression => "conditional_expression",
            Rule::Term => "term",
            Rule::Element => "element",
            Rule::Sense => "sense",
            Rule::Expr => "expr",
            Rule::Exprfac => "exprfac",
            Rule::Exprbase => "exprbase",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node of the concrete syntax tree.
///
/// Leaves carry exactly one token and branches carry a rule and their
/// children in source order, punctuation included.
#[derive(Debug, Clone, PartialEq)]
pub enum CstNode {
    Leaf(Token),
    Branch { rule: Rule, children: Vec<CstNode> },
}

impl CstNode {
    pub fn branch(rule: Rule, children: Vec<CstNode>) -> Self {
        CstNode::Branch { rule, children }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CstNode::Leaf(_))
    }

    /// The rule for branches, the terminal name for leaves.
    pub fn rule_name(&self) -> &'static str {
        match self {
            CstNode::Leaf(token) => token.kind.name(),
            CstNode::Branch { rule, .. } => rule.name(),
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            CstNode::Leaf(_) => None,
            CstNode::Branch { rule, .. } => Some(*rule),
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            CstNode::Leaf(token) => Some(token),
            CstNode::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> &[CstNode] {
        match self {
            CstNode::Leaf(_) => &[],
            CstNode::Branch { children, .. } => children,
        }
    }

    /// Visits every node depth-first, pre-order. The node this is called on
    /// has depth 0.
    pub fn walk<'a, F: FnMut(&'a CstNode, usize)>(&'a self, mut visit: F) {
        let mut pending = vec![(self, 0)];

        while let Some((node, depth)) = pending.pop() {
            visit(node, depth);
            for child in node.children().iter().rev() {
                pending.push((child, depth + 1));
            }
        }
    }

    /// Terminals from left to right.
    pub fn leaves(&self) -> Vec<&Token> {
        let mut leaves = Vec::new();
        self.walk(|node, _| {
            if let Some(token) = node.token() {
                leaves.push(token);
            }
        });
        leaves
    }

    /// The first branch for `rule` in pre-order.
    pub fn find(&self, rule: Rule) -> Option<&CstNode> {
        let mut found = None;
        self.walk(|node, _| {
            if found.is_none() && node.rule() == Some(rule) {
                found = Some(node);
            }
        });
        found
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(|_, depth| deepest = deepest.max(depth));
        deepest
    }
}

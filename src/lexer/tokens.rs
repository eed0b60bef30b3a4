use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map.insert("init", TokenKind::Init);
        map.insert("play", TokenKind::Play);
        map.insert("move", TokenKind::Move);
        map.insert("shoot", TokenKind::Shoot);
        map.insert("grab", TokenKind::Grab);
        map.insert("print_position", TokenKind::PrintPosition);
        map.insert("grid_size", TokenKind::GridSize);
        map.insert("place_agent", TokenKind::PlaceAgent);
        map.insert("place_wumpus", TokenKind::PlaceWumpus);
        map.insert("place_gold", TokenKind::PlaceGold);
        map.insert("place_pit", TokenKind::PlacePit);
        map.insert("clear_room", TokenKind::ClearRoom);
        map.insert("north", TokenKind::North);
        map.insert("south", TokenKind::South);
        map.insert("east", TokenKind::East);
        map.insert("west", TokenKind::West);
        map.insert("sense_stench", TokenKind::SenseStench);
        map.insert("sense_breeze", TokenKind::SenseBreeze);
        map.insert("sense_glitter", TokenKind::SenseGlitter);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("and", TokenKind::Logic);
        map.insert("or", TokenKind::Logic);
        map.insert("const", TokenKind::Const);
        map.insert("int", TokenKind::Int);
        map.insert("bool", TokenKind::Bool);
        map.insert("void", TokenKind::Void);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map
    };

    /// Maps interchange names (`LPAREN`, `PLACE_GOLD`, ...) back to kinds.
    static ref NAME_LOOKUP: HashMap<&'static str, TokenKind> =
        TokenKind::ALL.iter().map(|kind| (kind.name(), *kind)).collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Integer,
    Boolean,
    Comment,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,

    Assignment, // =
    Comparison, // == != <= < >= >
    Logic,      // and or

    Plus,
    Minus,
    Multiply,
    Divide,

    // Reserved
    Const,
    Int,
    Bool,
    Void,
    Function,
    Return,
    Init,
    Play,
    If,
    Else,
    While,

    // World setup
    GridSize,
    PlaceAgent,
    PlaceWumpus,
    PlaceGold,
    PlacePit,
    ClearRoom,

    // Agent actions
    Move,
    Shoot,
    Grab,
    PrintPosition,
    North,
    South,
    East,
    West,
    SenseStench,
    SenseBreeze,
    SenseGlitter,
}

impl TokenKind {
    pub const ALL: [TokenKind; 47] = [
        TokenKind::EOF,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Boolean,
        TokenKind::Comment,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Comma,
        TokenKind::Assignment,
        TokenKind::Comparison,
        TokenKind::Logic,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Const,
        TokenKind::Int,
        TokenKind::Bool,
        TokenKind::Void,
        TokenKind::Function,
        TokenKind::Return,
        TokenKind::Init,
        TokenKind::Play,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::GridSize,
        TokenKind::PlaceAgent,
        TokenKind::PlaceWumpus,
        TokenKind::PlaceGold,
        TokenKind::PlacePit,
        TokenKind::ClearRoom,
        TokenKind::Move,
        TokenKind::Shoot,
        TokenKind::Grab,
        TokenKind::PrintPosition,
        TokenKind::North,
        TokenKind::South,
        TokenKind::East,
        TokenKind::West,
        TokenKind::SenseStench,
        TokenKind::SenseBreeze,
        TokenKind::SenseGlitter,
    ];

    /// The terminal name used by the grammar, the token listing and the
    /// interchange format.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "ID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Comment => "COMMENT",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LEFTBRACKET",
            TokenKind::CloseBracket => "RIGHTBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Comparison => "COMPARISON",
            TokenKind::Logic => "LOGIC",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Const => "CONST",
            TokenKind::Int => "INT",
            TokenKind::Bool => "BOOL",
            TokenKind::Void => "VOID",
            TokenKind::Function => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::Init => "INIT",
            TokenKind::Play => "PLAY",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::GridSize => "GRID_SIZE",
            TokenKind::PlaceAgent => "PLACE_AGENT",
            TokenKind::PlaceWumpus => "PLACE_WUMPUS",
            TokenKind::PlaceGold => "PLACE_GOLD",
            TokenKind::PlacePit => "PLACE_PIT",
            TokenKind::ClearRoom => "CLEAR_ROOM",
            TokenKind::Move => "MOVE",
            TokenKind::Shoot => "SHOOT",
            TokenKind::Grab => "GRAB",
            TokenKind::PrintPosition => "PRINT_POSITION",
            TokenKind::North => "NORTH",
            TokenKind::South => "SOUTH",
            TokenKind::East => "EAST",
            TokenKind::West => "WEST",
            TokenKind::SenseStench => "SENSE_STENCH",
            TokenKind::SenseBreeze => "SENSE_BREEZE",
            TokenKind::SenseGlitter => "SENSE_GLITTER",
        }
    }

    pub fn from_name(name: &str) -> Option<TokenKind> {
        NAME_LOOKUP.get(name).copied()
    }

    pub fn is_reserved(self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| *kind == self)
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::Comparison
                | TokenKind::Logic
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}

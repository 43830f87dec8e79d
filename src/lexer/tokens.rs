use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

use super::escapes::decode_literal;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("as", TokenKind::As);
        map.insert("attr", TokenKind::Attr);
        map.insert("break", TokenKind::Break);
        map.insert("case", TokenKind::Case);
        map.insert("catch", TokenKind::Catch);
        map.insert("class", TokenKind::Class);
        map.insert("continue", TokenKind::Continue);
        map.insert("del", TokenKind::Del);
        map.insert("do", TokenKind::Do);
        map.insert("else", TokenKind::Else);
        map.insert("enum", TokenKind::Enum);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("func", TokenKind::Func);
        map.insert("gen", TokenKind::Gen);
        map.insert("get", TokenKind::Get);
        map.insert("guard", TokenKind::Guard);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("infix", TokenKind::Infix);
        map.insert("init", TokenKind::Init);
        map.insert("inline", TokenKind::Inline);
        map.insert("left", TokenKind::Left);
        map.insert("let", TokenKind::Let);
        map.insert("loop", TokenKind::Loop);
        map.insert("match", TokenKind::Match);
        map.insert("mut", TokenKind::Mut);
        map.insert("namespace", TokenKind::Namespace);
        map.insert("postfix", TokenKind::Postfix);
        map.insert("prefix", TokenKind::Prefix);
        map.insert("protocol", TokenKind::Protocol);
        map.insert("pub", TokenKind::Pub);
        map.insert("return", TokenKind::Return);
        map.insert("right", TokenKind::Right);
        map.insert("self", TokenKind::SelfKw);
        map.insert("set", TokenKind::Set);
        map.insert("static", TokenKind::Static);
        map.insert("throw", TokenKind::Throw);
        map.insert("throws", TokenKind::Throws);
        map.insert("true", TokenKind::True);
        map.insert("try", TokenKind::Try);
        map.insert("use", TokenKind::Use);
        map.insert("while", TokenKind::While);
        map.insert("yield", TokenKind::Yield);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Add);
        map.insert("-", TokenKind::Sub);
        map.insert("*", TokenKind::Mul);
        map.insert("/", TokenKind::Div);
        map.insert("%", TokenKind::Mod);
        map.insert("**", TokenKind::Pow);
        map.insert("<<", TokenKind::LSh);
        map.insert(">>", TokenKind::RSh);

        map.insert("<", TokenKind::LT);
        map.insert(">", TokenKind::GT);
        map.insert("<=", TokenKind::LE);
        map.insert(">=", TokenKind::GE);
        map.insert("==", TokenKind::Eq);
        map.insert("!=", TokenKind::NE);
        map.insert("===", TokenKind::Id);
        map.insert("!==", TokenKind::NI);

        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("^^", TokenKind::Xor);

        map.insert("=", TokenKind::Assign);
        map.insert("+=", TokenKind::AssignAdd);
        map.insert("-=", TokenKind::AssignSub);
        map.insert("*=", TokenKind::AssignMul);
        map.insert("/=", TokenKind::AssignDiv);
        map.insert("%=", TokenKind::AssignMod);
        map.insert("**=", TokenKind::AssignPow);
        map.insert("<<=", TokenKind::AssignLSh);
        map.insert(">>=", TokenKind::AssignRSh);

        map.insert("&", TokenKind::Ampersand);
        map.insert("|", TokenKind::Pipe);
        map.insert("^", TokenKind::Hat);

        map.insert("!", TokenKind::ExclMark);
        map.insert("?", TokenKind::QuesMark);

        map.insert(":", TokenKind::Colon);
        map.insert("::", TokenKind::DoubleColon);

        map.insert("->", TokenKind::RightArrow);
        map.insert("~", TokenKind::Tilde);
        map.insert("~=", TokenKind::TildeEq);
        map
    };
}

/// How an operator kind may be reused when declaring a custom operator.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CustomOperatorRule {
    /// The symbol itself may be overloaded.
    Overloadable,
    /// Only longer symbols starting with it may be declared.
    LongFormOnly,
    /// Never part of a custom operator.
    Reserved,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    LambdaArg,
    Identifier,
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    GeneralOperator,
    Underscore, // _

    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
    Pow, // **
    LSh, // <<
    RSh, // >>

    // Comparison
    LT, // <
    GT, // >
    LE, // <=
    GE, // >=
    NE, // !=
    Eq, // ==
    Id, // ===
    NI, // !==

    // Logical
    And, // &&
    Or,  // ||
    Xor, // ^^

    // Assignment
    Assign,    // =
    AssignAdd, // +=
    AssignSub, // -=
    AssignMul, // *=
    AssignDiv, // /=
    AssignMod, // %=
    AssignPow, // **=
    AssignLSh, // <<=
    AssignRSh, // >>=

    // Control
    Ampersand,   // &
    Pipe,        // |
    Hat,         // ^
    ExclMark,    // !
    QuesMark,    // ?
    Colon,       // :
    DoubleColon, // ::
    Semicolon,   // ;
    Comma,       // ,
    Dot,         // .
    DoubleDot,   // ..
    DoubleDotLT, // ..<
    RightArrow,  // ->
    Tilde,       // ~
    TildeEq,     // ~=

    ParenL,   // (
    ParenR,   // )
    BracketL, // [
    BracketR, // ]
    BraceL,   // {
    BraceR,   // }

    // Reserved
    As,
    Attr,
    Break,
    Case,
    Catch,
    Class,
    Continue,
    Del,
    DelOpt,
    Do,
    Else,
    Enum,
    False,
    For,
    Func,
    Gen,
    Get,
    GetOpt,
    Guard,
    If,
    In,
    InOpt,
    Infix,
    Init,
    InitAmp,
    InitOpt,
    Inline,
    Left,
    Let,
    LetAmp,
    LetOpt,
    Loop,
    Match,
    Mut,
    Namespace,
    Postfix,
    Prefix,
    Protocol,
    Pub,
    PubOpt,
    Return,
    Right,
    SelfKw,
    Set,
    SetOpt,
    Static,
    Throw,
    Throws,
    ThrowsOpt,
    True,
    Try,
    TryExcl,
    TryOpt,
    Use,
    While,
    Yield,

    ErrorToken,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        (TokenKind::As as u8..=TokenKind::Yield as u8).contains(&(*self as u8))
    }

    pub fn is_operator(&self) -> bool {
        (TokenKind::Add as u8..=TokenKind::BraceR as u8).contains(&(*self as u8))
            || *self == TokenKind::GeneralOperator
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::LambdaArg
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// The modifier variant a parser forms from this keyword followed directly by
    /// `modifier`, e.g. `let?` or `try!`. The lexer itself never produces these.
    pub fn with_modifier(&self, modifier: char) -> Option<TokenKind> {
        match (self, modifier) {
            (TokenKind::Del, '?') => Some(TokenKind::DelOpt),
            (TokenKind::Get, '?') => Some(TokenKind::GetOpt),
            (TokenKind::In, '?') => Some(TokenKind::InOpt),
            (TokenKind::Init, '?') => Some(TokenKind::InitOpt),
            (TokenKind::Init, '&') => Some(TokenKind::InitAmp),
            (TokenKind::Let, '?') => Some(TokenKind::LetOpt),
            (TokenKind::Let, '&') => Some(TokenKind::LetAmp),
            (TokenKind::Pub, '?') => Some(TokenKind::PubOpt),
            (TokenKind::Set, '?') => Some(TokenKind::SetOpt),
            (TokenKind::Throws, '?') => Some(TokenKind::ThrowsOpt),
            (TokenKind::Try, '?') => Some(TokenKind::TryOpt),
            (TokenKind::Try, '!') => Some(TokenKind::TryExcl),
            _ => None,
        }
    }

    pub fn custom_operator_rule(&self) -> Option<CustomOperatorRule> {
        use TokenKind::*;

        match self {
            Add | Sub | Mul | Div | Mod | Pow | LSh | RSh | LT | GT | LE | GE | NE | Eq | Id
            | NI | And | Or | Xor | Ampersand | Pipe | Hat | ExclMark => {
                Some(CustomOperatorRule::Overloadable)
            }
            Assign | AssignAdd | AssignSub | AssignMul | AssignDiv | AssignMod | AssignPow
            | AssignLSh | AssignRSh | QuesMark | Colon | DoubleColon | RightArrow | Tilde
            | TildeEq => Some(CustomOperatorRule::LongFormOnly),
            Underscore | Semicolon | Comma | Dot | DoubleDot | DoubleDotLT | ParenL | ParenR
            | BracketL | BracketR | BraceL | BraceR => Some(CustomOperatorRule::Reserved),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, quotes and escapes included.
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Decoded contents of a string or char literal.
    pub fn cooked_value(&self) -> Option<String> {
        if self.is_one_of_many(&[TokenKind::StringLiteral, TokenKind::CharLiteral]) {
            decode_literal(&self.lexeme)
        } else {
            None
        }
    }
}

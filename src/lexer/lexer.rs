use std::sync::Arc;

use crate::{
    errors::errors::{ErrorImpl, LexError},
    Position, MK_SPAN, MK_TOKEN,
};

use super::{
    escapes::{simple_escape, unicode_escape, MAX_UNICODE_DIGITS},
    tokens::{Token, TokenKind, KEYWORD_LOOKUP, OPERATOR_LOOKUP},
};

/// The scanner's current state. Exactly one is active at a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexerState {
    Default,
    NewLine,

    Integer,
    Float,

    String,
    StringEscape,

    Char,
    CharEscape,

    Identifier,
    Underscore,

    Dollar,
    Operator,

    Dot,
    DoubleDot,

    Error,
    Eof,
}

pub fn is_operator_symbol(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '~' | '|' | '&' | '^' | '?' | ':'
    )
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::ParenL),
        ')' => Some(TokenKind::ParenR),
        '[' => Some(TokenKind::BracketL),
        ']' => Some(TokenKind::BracketR),
        '{' => Some(TokenKind::BraceL),
        '}' => Some(TokenKind::BraceR),
        ';' => Some(TokenKind::Semicolon),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    file: Arc<String>,

    state: LexerState,
    /// State to resume once an escape sequence is complete.
    return_state: LexerState,

    pos: usize,
    line: usize,
    column: usize,

    tok_start: usize,
    tok_line: usize,
    tok_column: usize,
    /// Characters (escapes count once) between the quotes of the current literal.
    literal_len: usize,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            tokens: vec![],
            source,
            file: file_name,
            state: LexerState::Default,
            return_state: LexerState::Default,
            pos: 0,
            line: 1,
            column: 0,
            tok_start: 0,
            tok_line: 1,
            tok_column: 0,
            literal_len: 0,
        }
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        let mut rest = self.source[self.pos..].chars();
        rest.next();
        rest.next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.at() {
            self.pos += c.len_utf8();

            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn begin(&mut self, state: LexerState) {
        self.tok_start = self.pos;
        self.tok_line = self.line;
        self.tok_column = self.column;
        self.state = state;
        self.advance();
    }

    fn lexeme(&self) -> &str {
        &self.source[self.tok_start..self.pos]
    }

    /// Emits the pending token and returns to `Default` without consuming the
    /// current character, so it gets rescanned as the start of the next token.
    fn finish(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme().to_string();
        let token = MK_TOKEN!(
            kind,
            lexeme,
            self.tok_line,
            self.tok_column,
            MK_SPAN!(self.tok_start, self.pos, self.file)
        );

        log::trace!("{}", token);

        self.tokens.push(token);
        self.state = LexerState::Default;
    }

    fn error(&mut self, error: ErrorImpl, final_state: LexerState) -> LexError {
        self.state = final_state;

        LexError::new(
            error,
            final_state,
            Position(self.pos, Arc::clone(&self.file)),
            self.line,
            self.column,
        )
    }

    fn literal_context(&self) -> &'static str {
        match self.state {
            LexerState::StringEscape | LexerState::CharEscape => "escape sequence",
            LexerState::Char => "char literal",
            _ => "string literal",
        }
    }

    /// Advances the scanner by one transition. Returns `Ok(false)` once the end
    /// of input has been reached.
    pub fn step(&mut self) -> Result<bool, LexError> {
        let current = self.at();

        match self.state {
            LexerState::Default | LexerState::NewLine => return self.start_token(current),

            LexerState::Integer => match current {
                Some(c) if c.is_ascii_digit() => self.advance(),
                Some('.') if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                    self.advance();
                    self.state = LexerState::Float;
                }
                Some(c) if is_identifier_start(c) => return Err(self.malformed_number()),
                _ => self.finish(TokenKind::IntLiteral),
            },

            LexerState::Float => match current {
                Some(c) if c.is_ascii_digit() => self.advance(),
                Some(c) if is_identifier_start(c) => return Err(self.malformed_number()),
                _ => self.finish(TokenKind::FloatLiteral),
            },

            LexerState::Underscore => match current {
                Some(c) if is_identifier_continue(c) => {
                    self.advance();
                    self.state = LexerState::Identifier;
                }
                _ => self.finish(TokenKind::Underscore),
            },

            LexerState::Identifier => match current {
                Some(c) if is_identifier_continue(c) => self.advance(),
                _ => {
                    let kind = KEYWORD_LOOKUP
                        .get(self.lexeme())
                        .copied()
                        .unwrap_or(TokenKind::Identifier);
                    self.finish(kind);
                }
            },

            LexerState::Dollar => match current {
                Some(c) if c.is_ascii_digit() => self.advance(),
                Some(c) if is_identifier_start(c) => return Err(self.bad_lambda_arg()),
                _ if self.lexeme() == "$" => return Err(self.bad_lambda_arg()),
                _ => self.finish(TokenKind::LambdaArg),
            },

            LexerState::Operator => match current {
                Some(c) if is_operator_symbol(c) => self.advance(),
                _ => {
                    let kind = OPERATOR_LOOKUP
                        .get(self.lexeme())
                        .copied()
                        .unwrap_or(TokenKind::GeneralOperator);
                    self.finish(kind);
                }
            },

            LexerState::Dot => match current {
                Some('.') => {
                    self.advance();
                    self.state = LexerState::DoubleDot;
                }
                _ => self.finish(TokenKind::Dot),
            },

            LexerState::DoubleDot => match current {
                Some('<') => {
                    self.advance();
                    self.finish(TokenKind::DoubleDotLT);
                }
                _ => self.finish(TokenKind::DoubleDot),
            },

            LexerState::String | LexerState::Char => {
                let (quote, kind, escape) = if self.state == LexerState::String {
                    ('"', TokenKind::StringLiteral, LexerState::StringEscape)
                } else {
                    ('\'', TokenKind::CharLiteral, LexerState::CharEscape)
                };

                match current {
                    None => return Err(self.early_eof()),
                    Some('\\') => {
                        self.advance();
                        self.return_state = self.state;
                        self.state = escape;
                    }
                    Some(c) if c == quote => {
                        self.advance();

                        if kind == TokenKind::CharLiteral && self.literal_len != 1 {
                            let lexeme = self.lexeme().to_string();
                            return Err(self.error(
                                ErrorImpl::BadCharLiteral { lexeme },
                                LexerState::Error,
                            ));
                        }

                        self.finish(kind);
                    }
                    Some(_) => {
                        self.advance();
                        self.literal_len += 1;
                    }
                }
            }

            LexerState::StringEscape | LexerState::CharEscape => match current {
                None => return Err(self.early_eof()),
                Some('u') => {
                    self.advance();
                    self.unicode_escape()?;
                    self.literal_len += 1;
                    self.state = self.return_state;
                }
                Some(c) if simple_escape(c).is_some() => {
                    self.advance();
                    self.literal_len += 1;
                    self.state = self.return_state;
                }
                Some(c) => {
                    let state = self.state;
                    return Err(self.error(ErrorImpl::BadEscape { escape: c }, state));
                }
            },

            LexerState::Error | LexerState::Eof => return Ok(false),
        }

        Ok(true)
    }

    fn start_token(&mut self, current: Option<char>) -> Result<bool, LexError> {
        let Some(c) = current else {
            self.state = LexerState::Eof;
            return Ok(false);
        };

        match c {
            '\n' => {
                self.advance();
                self.state = LexerState::NewLine;
            }
            ' ' | '\t' | '\r' => {
                self.advance();
                self.state = LexerState::Default;
            }
            '0'..='9' => self.begin(LexerState::Integer),
            '_' => self.begin(LexerState::Underscore),
            c if c.is_ascii_alphabetic() => self.begin(LexerState::Identifier),
            '"' => {
                self.literal_len = 0;
                self.begin(LexerState::String);
            }
            '\'' => {
                self.literal_len = 0;
                self.begin(LexerState::Char);
            }
            '$' => self.begin(LexerState::Dollar),
            '.' => self.begin(LexerState::Dot),
            c if is_operator_symbol(c) => self.begin(LexerState::Operator),
            c => match punctuation(c) {
                Some(kind) => {
                    self.begin(LexerState::Default);
                    self.finish(kind);
                }
                None => {
                    return Err(self.error(
                        ErrorImpl::UnrecognisedCharacter { character: c },
                        LexerState::Error,
                    ))
                }
            },
        }

        Ok(true)
    }

    /// Consumes the `{hex}` part of a `\u{hex}` escape.
    fn unicode_escape(&mut self) -> Result<(), LexError> {
        let sequence_start = self.pos;

        match self.at() {
            None => return Err(self.early_eof()),
            Some('{') => self.advance(),
            Some(_) => return Err(self.bad_unicode_escape(sequence_start)),
        }

        let digits_start = self.pos;
        loop {
            match self.at() {
                None => return Err(self.early_eof()),
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && self.pos - digits_start < MAX_UNICODE_DIGITS => {
                    self.advance()
                }
                Some(_) => return Err(self.bad_unicode_escape(sequence_start)),
            }
        }

        let hex = self.source[digits_start..self.pos].to_string();
        if unicode_escape(&hex).is_none() {
            return Err(self.bad_unicode_escape(sequence_start));
        }

        self.advance();
        Ok(())
    }

    fn early_eof(&mut self) -> LexError {
        let context = self.literal_context().to_string();
        let state = self.state;
        self.error(ErrorImpl::EarlyEof { context }, state)
    }

    fn bad_unicode_escape(&mut self, sequence_start: usize) -> LexError {
        let end = self.at().map_or(self.pos, |c| self.pos + c.len_utf8());
        let sequence = format!("\\u{}", &self.source[sequence_start..end]);
        let state = self.state;
        self.error(ErrorImpl::BadUnicodeEscape { sequence }, state)
    }

    /// The pending lexeme extended by the current character when that character
    /// would continue an identifier.
    fn lexeme_with_offender(&self) -> String {
        match self.at() {
            Some(c) if is_identifier_continue(c) => {
                self.source[self.tok_start..self.pos + c.len_utf8()].to_string()
            }
            _ => self.lexeme().to_string(),
        }
    }

    fn malformed_number(&mut self) -> LexError {
        let lexeme = self.lexeme_with_offender();
        self.error(ErrorImpl::MalformedNumber { lexeme }, LexerState::Error)
    }

    fn bad_lambda_arg(&mut self) -> LexError {
        let lexeme = self.lexeme_with_offender();
        self.error(ErrorImpl::BadLambdaArg { lexeme }, LexerState::Error)
    }

    /// Runs the scanner to the end of input or the first error.
    pub fn run(&mut self) -> Result<(), LexError> {
        while self.step()? {}
        Ok(())
    }
}

/// Scans `source` in a single pass.
///
/// Returns every token produced before the scan stopped, together with the error
/// that stopped it, if any. `file` names the source in positions and defaults to
/// `"shell"`.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Option<LexError>) {
    let mut lex = Lexer::new(source, file);

    log::debug!("tokenizing {} ({} bytes)", lex.file, lex.source.len());

    let error = match lex.run() {
        Ok(()) => None,
        Err(error) => {
            log::debug!("tokenizing {} failed: {}", lex.file, error);
            Some(error)
        }
    };

    log::debug!("produced {} tokens for {}", lex.tokens.len(), lex.file);

    (lex.tokens, error)
}

/// Like [`tokenize`] but discards the partial token stream on failure.
pub fn try_tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, LexError> {
    match tokenize(source, file) {
        (_, Some(error)) => Err(error),
        (tokens, None) => Ok(tokens),
    }
}

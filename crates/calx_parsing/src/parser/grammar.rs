//! The non terminals of the grammar, one method each
//!
//! ```text
//! Program    ::= "int" Identifier "=" Expression ";"
//! Expression ::= Term ( "+" Term )*
//! Term       ::= Factor ( "*" Factor )*
//! Factor     ::= Number | "(" Expression ")"
//! ```

use super::{SyntacticParser, SyntaxResult};
use calx_tokens::token::TokenKind;

impl SyntacticParser<'_> {
    /// Parses a complete program, stopping after its `;`
    pub fn program(&mut self) -> SyntaxResult {
        self.non_terminal("Program", |parser| {
            parser.expect(TokenKind::IntKeyword)?;
            parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Assign)?;
            parser.expression()?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(())
        })
    }

    pub fn expression(&mut self) -> SyntaxResult {
        self.non_terminal("Expression", |parser| {
            parser.term()?;
            while parser.consume_if(TokenKind::Plus).is_some() {
                parser.term()?;
            }
            Ok(())
        })
    }

    pub fn term(&mut self) -> SyntaxResult {
        self.non_terminal("Term", |parser| {
            parser.factor()?;
            while parser.consume_if(TokenKind::Multiply).is_some() {
                parser.factor()?;
            }
            Ok(())
        })
    }

    pub fn factor(&mut self) -> SyntaxResult {
        self.non_terminal("Factor", |parser| match parser.peek().kind() {
            TokenKind::Number => {
                parser.consume();
                Ok(())
            }
            TokenKind::LParen => {
                parser.consume();
                parser.expression()?;
                parser.expect(TokenKind::RParen)?;
                Ok(())
            }
            TokenKind::IntKeyword
            | TokenKind::Identifier
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Multiply
            | TokenKind::RParen
            | TokenKind::Semicolon
            | TokenKind::EndOfInput => {
                Err(parser.error([TokenKind::Number, TokenKind::LParen]))
            }
        })
    }
}

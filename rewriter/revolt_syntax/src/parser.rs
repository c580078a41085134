//! Parser producing the arena tree.
//!
//! Deliberately shallow: it recognizes balanced delimiter groups and call
//! expressions whose callee is a literal identifier, and leaves every other
//! token in verbatim runs. That is enough structure for the rewriter to
//! find call sites and recurse through function bodies, closures, and
//! argument lists, while guaranteeing that unrecognized code round-trips
//! untouched.
//!
//! Keywords followed by a paren (`if (x)`) parse as calls too; that is
//! harmless because they print verbatim and no conversion rule carries a
//! keyword name.

use crate::error::ParseError;
use crate::lexer::lex;
use crate::token::{TokenId, TokenKind, TokenList};
use crate::tree::{ArgLabel, Argument, CallNode, Node, NodeId, SyntaxTree, TokenRange};

/// Parse `source` into a [`SyntaxTree`].
///
/// Fails only on lexical errors and unbalanced delimiters; there is no
/// recovery path, the whole call fails.
pub fn parse(source: &str) -> Result<SyntaxTree<'_>, ParseError> {
    let tokens = lex(source)?;
    let (nodes, root) = Parser {
        tokens: &tokens,
        pos: 0,
        nodes: Vec::new(),
    }
    .parse_file()?;
    Ok(SyntaxTree::new(source, tokens, nodes, root))
}

struct Parser<'t> {
    tokens: &'t TokenList,
    pos: usize,
    nodes: Vec<Node>,
}

impl Parser<'_> {
    fn parse_file(mut self) -> Result<(Vec<Node>, NodeId), ParseError> {
        let mut children = self.parse_until(&[])?;
        // The EOF token goes into a final run so its leading trivia (the
        // file's trailing whitespace and comments) is printed.
        let eof_run = self.alloc(Node::Run(TokenRange::new(self.pos as u32, self.pos as u32 + 1)));
        children.push(eof_run);
        let root = self.alloc(Node::Seq(children));
        Ok((self.nodes, root))
    }

    /// Parse children until EOF or one of `stops` (not consumed).
    ///
    /// A closing delimiter that is not a stop is an error: it means the
    /// input is unbalanced.
    fn parse_until(&mut self, stops: &[TokenKind]) -> Result<Vec<NodeId>, ParseError> {
        let mut children = Vec::new();
        let mut run_start = self.pos;
        loop {
            let kind = self.current_kind();
            if kind == TokenKind::Eof || stops.contains(&kind) {
                self.flush_run(&mut children, run_start);
                break;
            }
            if kind.is_closer() {
                return Err(ParseError::UnexpectedCloser {
                    found: kind.delimiter_char().unwrap_or('?'),
                    at: self.current_byte(),
                });
            }
            if kind.is_opener() {
                self.flush_run(&mut children, run_start);
                let group = self.parse_group()?;
                children.push(group);
                run_start = self.pos;
                continue;
            }
            if kind == TokenKind::Ident && self.peek_kind(1) == TokenKind::LParen {
                self.flush_run(&mut children, run_start);
                let call = self.parse_call()?;
                children.push(call);
                run_start = self.pos;
                continue;
            }
            self.pos += 1;
        }
        Ok(children)
    }

    /// Parse a balanced group. The cursor sits on the opener.
    fn parse_group(&mut self) -> Result<NodeId, ParseError> {
        let open = self.tid();
        let open_kind = self.current_kind();
        let close_kind = open_kind.matching_closer().unwrap_or(TokenKind::Eof);
        let open_byte = self.current_byte();
        self.pos += 1;

        let children = self.parse_until(&[close_kind])?;
        if self.current_kind() != close_kind {
            return Err(ParseError::UnclosedDelimiter {
                expected: close_kind.delimiter_char().unwrap_or('?'),
                open: open_byte,
            });
        }
        let close = self.tid();
        self.pos += 1;
        Ok(self.alloc(Node::Group {
            open,
            children,
            close,
        }))
    }

    /// Parse a call expression. The cursor sits on the callee identifier,
    /// which is known to be followed by `(`.
    fn parse_call(&mut self) -> Result<NodeId, ParseError> {
        let callee = self.tid();
        let dotted =
            self.pos > 0 && self.tokens.get(TokenId::new(self.pos as u32 - 1)).kind == TokenKind::Dot;
        self.pos += 1;

        let lparen = self.tid();
        let lparen_byte = self.current_byte();
        self.pos += 1;

        let mut args = Vec::new();
        if self.current_kind() != TokenKind::RParen {
            loop {
                let label = self.parse_arg_label();
                let expr_children =
                    self.parse_until(&[TokenKind::Comma, TokenKind::RParen])?;
                let expr = self.alloc(Node::Seq(expr_children));
                match self.current_kind() {
                    TokenKind::Comma => {
                        let comma = self.tid();
                        self.pos += 1;
                        args.push(Argument {
                            label,
                            expr,
                            comma: Some(comma),
                        });
                        if self.current_kind() == TokenKind::RParen {
                            break; // trailing comma
                        }
                    }
                    TokenKind::RParen => {
                        args.push(Argument {
                            label,
                            expr,
                            comma: None,
                        });
                        break;
                    }
                    _ => {
                        return Err(ParseError::UnclosedDelimiter {
                            expected: ')',
                            open: lparen_byte,
                        });
                    }
                }
            }
        }
        if self.current_kind() != TokenKind::RParen {
            return Err(ParseError::UnclosedDelimiter {
                expected: ')',
                open: lparen_byte,
            });
        }
        let rparen = self.tid();
        self.pos += 1;

        let trailing_closure = if self.current_kind() == TokenKind::LBrace {
            Some(self.parse_group()?)
        } else {
            None
        };

        Ok(self.alloc(Node::Call(CallNode {
            callee,
            dotted,
            lparen,
            args,
            rparen,
            trailing_closure,
        })))
    }

    /// `name:` at the start of an argument.
    fn parse_arg_label(&mut self) -> Option<ArgLabel> {
        if self.current_kind() == TokenKind::Ident && self.peek_kind(1) == TokenKind::Colon {
            let label = ArgLabel {
                name: self.tid(),
                colon: TokenId::new(self.pos as u32 + 1),
            };
            self.pos += 2;
            Some(label)
        } else {
            None
        }
    }

    fn flush_run(&mut self, children: &mut Vec<NodeId>, run_start: usize) {
        if run_start < self.pos {
            let run = Node::Run(TokenRange::new(run_start as u32, self.pos as u32));
            children.push(self.alloc(run));
        }
    }

    #[inline]
    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    fn tid(&self) -> TokenId {
        TokenId::new(self.pos as u32)
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.tokens.get(self.tid()).kind
    }

    #[inline]
    fn peek_kind(&self, n: usize) -> TokenKind {
        let idx = self.pos + n;
        if idx < self.tokens.len() {
            self.tokens.get(TokenId::new(idx as u32)).kind
        } else {
            TokenKind::Eof
        }
    }

    #[inline]
    fn current_byte(&self) -> u32 {
        self.tokens.get(self.tid()).text.start
    }
}

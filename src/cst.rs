//! Syntax kinds for the GDScript concrete syntax tree.
//!
//! `SyntaxKind` serves dual roles: the kinds readers assign to the tokens
//! they bump, and the kinds resolvers assign to the composite nodes they
//! push onto the reader stack. Unlike a conventional lexer/parser split,
//! nothing here is produced by scanning the whole input up front — every
//! variant is assigned by a reader as it consumes characters one at a time
//! (see `state.rs`, `reader.rs`).

use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`, exactly as the
/// teacher's `SyntaxKind` does for the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Trivia ---
    Whitespace = 0,
    Newline,
    CarriageReturn,
    Comment,
    /// Leading tabs/spaces of a line, measured against an indentation threshold.
    Indentation,
    /// A `\` immediately followed by a newline, absorbed as a continuation.
    LineContinuation,

    // --- Punctuation (single-char) ---
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Lt,
    Gt,
    At,
    Dollar,
    Underscore,

    // --- Operators ---
    Assign,
    /// `:=` inferred-type declaration marker.
    ColonEq,
    /// `->` return-type arrow.
    Arrow,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    /// `**`
    Pow,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    PowEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    ShlEq,
    ShrEq,
    Amp,
    Pipe,
    Caret,
    AmpEq,
    PipeEq,
    CaretEq,
    AmpAmp,
    PipePipe,
    Le,
    Ge,
    EqEq,
    NotEq,
    Bang,
    Tilde,

    // --- Word-shaped keywords and keyword-operators ---
    KwClassName,
    KwExtends,
    KwTool,
    KwFunc,
    KwStatic,
    KwVar,
    KwConst,
    KwSignal,
    KwEnum,
    KwClass,
    KwIf,
    KwElif,
    KwElse,
    KwFor,
    KwWhile,
    KwMatch,
    KwReturn,
    KwPass,
    KwContinue,
    KwBreak,
    KwYield,
    KwAwait,
    KwSetget,
    KwTrue,
    KwFalse,
    KwNull,
    KwSelf,
    KwSuper,
    KwPreload,
    KwAnd,
    KwOr,
    KwNot,
    KwAs,
    KwIs,
    KwIn,
    /// Contextual: only meaningful as a setget accessor name, an ordinary
    /// identifier everywhere else (spec.md §4.4 type-resolver note).
    KwGet,
    KwSet,

    // --- Literal/identifier leaves ---
    Identifier,
    Number,
    /// `r` raw-string prefix, immediately preceding the opening bounder.
    RawPrefix,
    /// One of `'`, `"`, `'''`, `"""`.
    Quote,
    /// Literal text between escapes/bounders inside a string.
    StringPart,
    /// A recognized two-character escape (`\n`, `\t`, ...).
    Escape,
    /// A run of bytes the core could not classify; carries its own text,
    /// never discarded (spec.md §3.1 "no loss on error").
    InvalidToken,
    /// `@` attribute name (`icon`, `export`, `onready`, custom...).
    AnnotationName,

    // --- Composite (node) kinds ---
    ClassDecl,
    ExtendsAttr,
    ClassNameAttr,
    ToolAttr,
    AnnotationAttr,
    SignalDecl,
    ParamList,
    Param,
    EnumDecl,
    EnumValue,
    ConstDecl,
    VarDecl,
    AccessorGetBody,
    AccessorSetBody,
    AccessorGetAlias,
    AccessorSetAlias,
    FuncDecl,
    InnerClassDecl,

    StatementList,
    IfStmt,
    ElifClause,
    ElseClause,
    ForStmt,
    WhileStmt,
    MatchStmt,
    MatchCase,
    VarDeclStmt,
    ReturnStmt,
    PassStmt,
    ContinueStmt,
    BreakStmt,
    ExprStmt,

    IdentifierExpr,
    NumberExpr,
    StringExpr,
    BoolExpr,
    NullExpr,
    SelfExpr,
    SuperExpr,
    ArrayExpr,
    DictExpr,
    DictEntry,
    BracketExpr,
    CallExpr,
    ArgList,
    IndexExpr,
    MemberExpr,
    UnaryExpr,
    BinaryExpr,
    IfExpr,
    GetNodeExpr,
    NodePathExpr,
    PathSpecifier,
    VarDeclExpr,
    LambdaExpr,
    PreloadExpr,
    AwaitExpr,
    YieldExpr,
    /// Wraps a run of bytes the core gave up on classifying (spec.md §7).
    Invalid,
    TypeRef,
    ArrayTypeRef,

    /// Must be last — used for bounds checking in `kind_from_raw`.
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Newline | CarriageReturn | Comment | Indentation | LineContinuation
        )
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KwClassName
                | KwExtends
                | KwTool
                | KwFunc
                | KwStatic
                | KwVar
                | KwConst
                | KwSignal
                | KwEnum
                | KwClass
                | KwIf
                | KwElif
                | KwElse
                | KwFor
                | KwWhile
                | KwMatch
                | KwReturn
                | KwPass
                | KwContinue
                | KwBreak
                | KwYield
                | KwAwait
                | KwSetget
                | KwTrue
                | KwFalse
                | KwNull
                | KwSelf
                | KwSuper
                | KwPreload
                | KwAnd
                | KwOr
                | KwNot
                | KwAs
                | KwIs
                | KwIn
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, InvalidToken | Invalid)
    }
}

/// Looks up a maximal identifier run against the keyword/keyword-operator
/// table. `spec.md` lists `and or as is in not` as members of the operator
/// *pattern set* (§4.4), but — unlike the symbolic operators — they are
/// word-shaped, so they are resolved the way an ordinary keyword lexer
/// resolves keywords: read the whole `[A-Za-z_][A-Za-z0-9_]*` run, then
/// look it up. This avoids the pattern resolver matching `and` as a prefix
/// of an identifier like `android`.
pub fn keyword_from_str(s: &str) -> Option<SyntaxKind> {
    Some(match s {
        "class_name" => KwClassName,
        "extends" => KwExtends,
        "tool" => KwTool,
        "func" => KwFunc,
        "static" => KwStatic,
        "var" => KwVar,
        "const" => KwConst,
        "signal" => KwSignal,
        "enum" => KwEnum,
        "class" => KwClass,
        "if" => KwIf,
        "elif" => KwElif,
        "else" => KwElse,
        "for" => KwFor,
        "while" => KwWhile,
        "match" => KwMatch,
        "return" => KwReturn,
        "pass" => KwPass,
        "continue" => KwContinue,
        "break" => KwBreak,
        "yield" => KwYield,
        "await" => KwAwait,
        "setget" => KwSetget,
        "true" => KwTrue,
        "false" => KwFalse,
        "null" => KwNull,
        "self" => KwSelf,
        "super" => KwSuper,
        "preload" => KwPreload,
        "and" => KwAnd,
        "or" => KwOr,
        "not" => KwNot,
        "as" => KwAs,
        "is" => KwIs,
        "in" => KwIn,
        "get" => KwGet,
        "set" => KwSet,
        _ => return None,
    })
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GdLang {}

impl Language for GdLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: bounds-checked above, and SyntaxKind is repr(u16).
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<GdLang>;
pub type SyntaxToken = rowan::SyntaxToken<GdLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// Bitset of `SyntaxKind`s for O(1) membership testing. Widened to `u128`
/// relative to the teacher's `u64` version since GDScript's kind catalog
/// (trivia + punctuation + operators + keywords + node kinds) runs past 64
/// variants; everything else about the type is unchanged.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets used as stop-sets by resolvers (spec.md §4.4).
pub mod token_sets {
    use super::*;

    /// Characters that terminate the expression resolver and are pushed
    /// back to whatever contains the expression (spec.md §4.4).
    pub const EXPR_STOP: TokenSet =
        TokenSet::new(&[Comma, RBrace, RParen, RBracket, Colon, Semicolon]);

    pub const STRING_ESCAPES: &[char] =
        &['\'', '"', '\\', 'a', 'b', 'f', 'n', 'r', 't', 'v', 'u'];
}

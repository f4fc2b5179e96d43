use core::fmt;

use thiserror::Error;

/// ошибка построения таблицы весов из текста правил
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError
{
    /// текст правил отсутствует или состоит из пробелов
    #[error("collation rules are empty")]
    Empty,
    /// текст правил не разбирается
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// сохранённые веса не совпадают с весами, построенными по тексту правил
    #[error("stored weights do not match the collation rules")]
    Inconsistent,
}

/// синтаксическая ошибка с позицией (в символах) от начала текста правил
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule syntax error at position {position}: {kind}")]
pub struct SyntaxError
{
    pub kind: SyntaxErrorKind,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind
{
    /// зарезервированный символ без кавычек
    UnexpectedCharacter(char),
    /// кавычка открыта, но не закрыта
    UnterminatedQuote,
    /// оператор без элемента слева
    MissingLeftOperand(char),
    /// оператор без элемента справа
    MissingRightOperand(char),
    /// элемент уже встречался в правилах, first - позиция первого вхождения
    DuplicateElement
    {
        element: String,
        first: usize,
    },
}

impl SyntaxError
{
    pub fn new(kind: SyntaxErrorKind, position: usize) -> Self
    {
        Self { kind, position }
    }
}

impl fmt::Display for SyntaxErrorKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::UnexpectedCharacter(c) => {
                write!(f, "reserved character '{}' must be quoted", c.escape_debug())
            }
            Self::UnterminatedQuote => f.write_str("unterminated quoted literal"),
            Self::MissingLeftOperand(op) => write!(f, "operator '{}' has no left operand", op),
            Self::MissingRightOperand(op) => write!(f, "operator '{}' has no right operand", op),
            Self::DuplicateElement { element, first } => write!(
                f,
                "\"{}\" is already assigned at position {}",
                element.escape_debug(),
                first
            ),
        }
    }
}

/// результат разбора правил
pub type RuleResult<T> = Result<T, RuleError>;

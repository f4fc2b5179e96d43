// синтаксис правил - подмножество правил RuleBasedCollator:
//
//  <   следующий элемент больше на первичном уровне
//  ;   следующий элемент больше на вторичном уровне (та же первичная группа)
//  ,   следующий элемент отличается только на третичном уровне
//  =   следующий элемент эквивалентен, отличается только порядком объявления (третичный уровень)
//
// элементы - символы, сокращения из нескольких символов или литералы в кавычках ('@', 'it''s').

mod tokens;

use std::collections::HashMap;

pub use tokens::is_reserved;
use tokens::{tokenize, Spanned, Token};

use crate::error::{RuleError, RuleResult, SyntaxError, SyntaxErrorKind};

/// отношение элемента к предыдущему
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation
{
    /// `<` - новая первичная группа
    Primary,
    /// `;` - новый вариант внутри первичной группы
    Secondary,
    /// `,` - следующий на третичном уровне
    Tertiary,
    /// `=` - эквивалентный элемент
    Equal,
}

/// элемент правил с отношением к предыдущему элементу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStatement
{
    pub relation: Relation,
    pub element: String,
    /// позиция элемента в тексте правил (в символах)
    pub position: usize,
}

impl Relation
{
    /// отношение, задаваемое символом оператора
    #[inline(always)]
    pub fn from_operator(c: char) -> Option<Self>
    {
        match c {
            '<' => Some(Self::Primary),
            ';' => Some(Self::Secondary),
            ',' => Some(Self::Tertiary),
            '=' => Some(Self::Equal),
            _ => None,
        }
    }

    /// символ оператора
    pub fn operator(self) -> char
    {
        match self {
            Self::Primary => '<',
            Self::Secondary => ';',
            Self::Tertiary => ',',
            Self::Equal => '=',
        }
    }
}

/// разобрать текст правил в последовательность элементов
pub fn parse_rules(text: &str) -> RuleResult<Vec<RuleStatement>>
{
    if text.trim().is_empty() {
        return Err(RuleError::Empty);
    }

    let statements = tokenize(text).and_then(|tokens| statements(&tokens));

    statements.map_err(|error| {
        tracing::debug!(position = error.position, "collation rules rejected: {}", error.kind);
        RuleError::from(error)
    })
}

/// элементы из потока токенов: оператор - элемент - оператор - элемент ...
fn statements(tokens: &[Spanned]) -> Result<Vec<RuleStatement>, SyntaxError>
{
    let mut result: Vec<RuleStatement> = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut seen = HashMap::<&str, usize>::new();
    // оператор, ожидающий правого операнда
    let mut pending: Option<(Relation, char, usize)> = None;

    for spanned in tokens {
        match &spanned.token {
            Token::Operator(relation, c) => {
                if let Some((_, previous, position)) = pending {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::MissingRightOperand(previous),
                        position,
                    ));
                }

                // правила могут начинаться с '<' - первая первичная группа
                if result.is_empty() && *relation != Relation::Primary {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::MissingLeftOperand(*c),
                        spanned.position,
                    ));
                }

                pending = Some((*relation, *c, spanned.position));
            }
            Token::Element(element) => {
                if let Some(&first) = seen.get(element.as_str()) {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::DuplicateElement {
                            element: element.clone(),
                            first,
                        },
                        spanned.position,
                    ));
                }

                seen.insert(element.as_str(), spanned.position);

                // соседние элементы без оператора токенизатор склеивает,
                // поэтому без оператора может идти только первый элемент
                let relation = match pending.take() {
                    Some((relation, ..)) => relation,
                    None => Relation::Primary,
                };

                result.push(RuleStatement {
                    relation,
                    element: element.clone(),
                    position: spanned.position,
                });
            }
        }
    }

    if let Some((_, c, position)) = pending {
        return Err(SyntaxError::new(
            SyntaxErrorKind::MissingRightOperand(c),
            position,
        ));
    }

    Ok(result)
}

use crate::error::{SyntaxError, SyntaxErrorKind};

use super::Relation;

/// символ кавычек
const QUOTE: char = '\'';

/// токен текста правил
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token
{
    /// оператор отношения и его символ
    Operator(Relation, char),
    /// элемент: одиночный символ, сокращение или литерал в кавычках
    Element(String),
}

/// токен и его позиция (в символах) в тексте правил
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned
{
    pub token: Token,
    pub position: usize,
}

/// разбить текст правил на токены
///
/// пробелы вне кавычек игнорируются, соседние символы и литералы без оператора
/// между ними склеиваются в один элемент (сокращение)
pub fn tokenize(text: &str) -> Result<Vec<Spanned>, SyntaxError>
{
    let mut tokens = vec![];
    let mut element = String::new();
    let mut element_start = 0;

    let mut iter = text.chars().enumerate().peekable();

    macro_rules! flush {
        () => {
            if !element.is_empty() {
                tokens.push(Spanned {
                    token: Token::Element(core::mem::take(&mut element)),
                    position: element_start,
                });
            }
        };
    }

    macro_rules! append {
        ($position: expr, $c: expr) => {
            if element.is_empty() {
                element_start = $position;
            }
            element.push($c);
        };
    }

    while let Some((position, c)) = iter.next() {
        if c.is_whitespace() {
            continue;
        }

        if let Some(relation) = Relation::from_operator(c) {
            flush!();
            tokens.push(Spanned {
                token: Token::Operator(relation, c),
                position,
            });
            continue;
        }

        if c == QUOTE {
            // '' вне кавычек - сам символ кавычки
            if iter.next_if(|&(_, next)| next == QUOTE).is_some() {
                append!(position, QUOTE);
                continue;
            }

            let mut closed = false;

            while let Some((inner_position, inner)) = iter.next() {
                if inner != QUOTE {
                    append!(inner_position, inner);
                    continue;
                }

                // '' внутри кавычек - экранированная кавычка
                if iter.next_if(|&(_, next)| next == QUOTE).is_some() {
                    append!(inner_position, QUOTE);
                    continue;
                }

                closed = true;
                break;
            }

            if !closed {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedQuote,
                    position,
                ));
            }

            continue;
        }

        if is_reserved(c) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedCharacter(c),
                position,
            ));
        }

        append!(position, c);
    }

    flush!();

    Ok(tokens)
}

/// символы ASCII, кроме букв и цифр, можно использовать только в кавычках
#[inline(always)]
pub fn is_reserved(c: char) -> bool
{
    c.is_ascii_punctuation() && c != QUOTE && Relation::from_operator(c).is_none()
}

//! Сопоставление строк по пользовательским правилам.
//!
//! Текст правил (`< a,A < à,À ; â,Â < b ...`) разбирается в таблицу весов из трёх уровней:
//! первичный (базовый символ), вторичный (вариант, диакритика) и третичный (регистр).
//! Строки сравниваются по уровням: сначала первичные веса всей строки, затем вторичные,
//! затем третичные. Символы, не упомянутые в правилах, идут после всех объявленных,
//! в порядке кодпоинтов.
//!
//! ```
//! use rule_collator::{options::Strength, Collator, WeightTable};
//!
//! let table = WeightTable::parse("< '@' < 0 < a,A < à,À").unwrap();
//! let collator = Collator::new(&table, Default::default());
//!
//! assert_eq!(collator.sort(&["À", "a", "@", "A", "à", "0"]), ["@", "0", "a", "A", "à", "À"]);
//! assert!(collator.with_strength(Strength::Secondary).equals("a", "A"));
//! ```

use core::cmp::Ordering;

mod compare;
mod error;
mod implicit;
pub mod key;
pub mod options;
pub mod rules;
mod sort;
mod table;
pub mod weights;

pub use compare::{compare, compare_blank, is_blank};
pub use error::{RuleError, RuleResult, SyntaxError, SyntaxErrorKind};
pub use key::{generate_key, CollationKey};
pub use options::{CollatorOptions, Strength};
pub use sort::{sort_all, sort_in_place, sorted_order};
pub use table::{CharacterGroup, WeightTable};
pub use weights::WeightEntry;

/// разобрать текст правил и построить таблицу весов
pub fn parse(rules: &str) -> RuleResult<WeightTable>
{
    WeightTable::parse(rules)
}

/// коллатор: таблица весов и настройки сравнения
#[derive(Debug, Clone, Copy)]
pub struct Collator<'a>
{
    table: &'a WeightTable,
    options: CollatorOptions,
}

impl<'a> Collator<'a>
{
    pub fn new(table: &'a WeightTable, options: CollatorOptions) -> Self
    {
        Self { table, options }
    }

    /// тот же коллатор с другим уровнем сравнения
    pub fn with_strength(self, strength: Strength) -> Self
    {
        Self {
            table: self.table,
            options: self.options.with_strength(strength),
        }
    }

    /// сравнить строки
    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering
    {
        compare(a, b, self.table, self.options.strength)
    }

    /// строки равны с точки зрения сопоставления
    #[inline]
    pub fn equals(&self, a: &str, b: &str) -> bool
    {
        self.compare(a, b) == Ordering::Equal
    }

    /// ключ сопоставления
    #[inline]
    pub fn get_collation_key<'s>(&self, text: &'s str) -> CollationKey<'s>
    {
        generate_key(text, self.table)
    }

    /// отсортированная копия списка
    pub fn sort<S: AsRef<str>>(&self, words: &[S]) -> Vec<String>
    {
        sort_all(words, self.table, self.options.strength)
    }

    /// отсортировать вектор на месте
    pub fn sort_in_place<S: AsRef<str>>(&self, words: &mut Vec<S>)
    {
        sort_in_place(words, self.table, self.options.strength)
    }

    pub fn table(&self) -> &'a WeightTable
    {
        self.table
    }

    pub fn options(&self) -> CollatorOptions
    {
        self.options
    }
}

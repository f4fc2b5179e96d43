use core::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::compare::is_blank;
use crate::key::{generate_key, CollationKey};
use crate::options::Strength;
use crate::table::WeightTable;

/// элемент сортировки: позиция во входном списке и ключ (None - пустая строка)
struct SortEntry<'s>
{
    index: usize,
    key: Option<CollationKey<'s>>,
}

impl<'s> SortEntry<'s>
{
    fn new(index: usize, text: &'s str, table: &WeightTable) -> Self
    {
        let key = match is_blank(text) {
            true => None,
            false => Some(generate_key(text, table)),
        };

        Self { index, key }
    }

    /// порядок пустых строк, затем ключей, при равенстве - порядок во входном списке
    #[inline(always)]
    fn compare(&self, other: &Self, strength: Strength) -> Ordering
    {
        let ordering = match (&self.key, &other.key) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.compare(b, strength),
        };

        ordering.then(self.index.cmp(&other.index))
    }
}

/// порядок элементов списка после сортировки (индексы во входном списке)
pub fn sorted_order<S: AsRef<str>>(
    words: &[S],
    table: &WeightTable,
    strength: Strength,
) -> Vec<usize>
{
    tracing::trace!(len = words.len(), ?strength, "collation sort");

    if words.is_empty() {
        return vec![];
    }

    let texts: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

    // ключ считается один раз для каждой позиции, включая повторяющиеся строки
    #[cfg(feature = "parallel")]
    let mut entries: Vec<SortEntry> = texts
        .par_iter()
        .enumerate()
        .map(|(index, &text)| SortEntry::new(index, text, table))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut entries: Vec<SortEntry> = texts
        .iter()
        .enumerate()
        .map(|(index, &text)| SortEntry::new(index, text, table))
        .collect();

    // индексы уникальны, порядок полный - устойчивость не зависит от алгоритма сортировки
    entries.sort_unstable_by(|a, b| a.compare(b, strength));

    entries.into_iter().map(|entry| entry.index).collect()
}

/// отсортировать список строк по таблице весов
pub fn sort_all<S: AsRef<str>>(words: &[S], table: &WeightTable, strength: Strength) -> Vec<String>
{
    sorted_order(words, table, strength)
        .into_iter()
        .map(|index| words[index].as_ref().to_owned())
        .collect()
}

/// отсортировать вектор на месте
pub fn sort_in_place<S: AsRef<str>>(words: &mut Vec<S>, table: &WeightTable, strength: Strength)
{
    let order = sorted_order(words.as_slice(), table, strength);
    let mut slots: Vec<Option<S>> = words.drain(..).map(Some).collect();

    words.extend(order.into_iter().filter_map(|index| slots[index].take()));
}

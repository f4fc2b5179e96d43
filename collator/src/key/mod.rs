use core::cmp::Ordering;

use crate::options::Strength;
use crate::table::WeightTable;
use crate::weights::WeightEntry;

/// ключ сопоставления: веса строки и сама строка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey<'s>
{
    source: &'s str,
    weights: Vec<WeightEntry>,
}

impl<'s> CollationKey<'s>
{
    /// исходная строка
    pub fn source(&self) -> &'s str
    {
        self.source
    }

    /// веса элементов строки
    pub fn weights(&self) -> &[WeightEntry]
    {
        &self.weights
    }

    /// сравнить ключи по уровням: сначала все первичные веса, затем вторичные, затем третичные
    #[inline]
    pub fn compare(&self, other: &Self, strength: Strength) -> Ordering
    {
        compare_weights(&self.weights, &other.weights, strength)
    }

    /// ключ в виде последовательности u32, сравниваемой лексикографически
    ///
    /// веса уровней записываются друг за другом через разделитель 0, поэтому каждый вес
    /// увеличен на 1
    pub fn sort_key(&self, strength: Strength) -> Vec<u32>
    {
        let mut primary = Vec::with_capacity(self.weights.len() * strength.levels() + 2);
        let mut secondary = vec![];
        let mut tertiary = vec![];

        for entry in self.weights.iter() {
            primary.push(entry.primary + 1);

            if strength as u8 >= 2 {
                secondary.push(entry.secondary + 1);
            }

            if strength as u8 >= 3 {
                tertiary.push(entry.tertiary + 1);
            }
        }

        macro_rules! append {
            ($($level: expr, $from:ident),+) => {
                $(
                    if strength as u8 >= $level {
                        primary.push(0);
                        primary.append(&mut $from);
                    }
                )+
            }
        }

        append!(2, secondary, 3, tertiary);

        primary
    }
}

/// создать ключ сопоставления строки по таблице весов
pub fn generate_key<'s>(text: &'s str, table: &WeightTable) -> CollationKey<'s>
{
    let mut weights = Vec::with_capacity(text.len());
    let mut rest = text;

    while let Some((entry, len)) = table.next_weights(rest) {
        weights.push(entry);
        rest = &rest[len ..];
    }

    CollationKey {
        source: text,
        weights,
    }
}

/// сравнение весов по уровням, на каждом уровне - лексикографически (префикс меньше)
#[inline]
pub fn compare_weights(a: &[WeightEntry], b: &[WeightEntry], strength: Strength) -> Ordering
{
    for level in 1 ..= strength.levels() {
        let ordering = a
            .iter()
            .map(|entry| entry.level(level))
            .cmp(b.iter().map(|entry| entry.level(level)));

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

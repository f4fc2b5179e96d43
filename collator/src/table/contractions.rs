use std::collections::HashMap;

use crate::weights::WeightEntry;

/// сокращения (элементы из нескольких символов), сгруппированные по первому символу
#[derive(Debug, Clone, Default)]
pub struct Contractions
{
    /// первый символ -> варианты, от самых длинных к коротким
    by_starter: HashMap<char, Vec<(String, WeightEntry)>>,
}

impl Contractions
{
    /// добавить сокращение
    pub fn insert(&mut self, element: &str, weights: WeightEntry)
    {
        let Some(starter) = element.chars().next() else {
            return;
        };

        let variants = self.by_starter.entry(starter).or_default();

        // порядок объявления среди сокращений одной длины сохраняется
        let len = element.chars().count();
        let pos = variants
            .iter()
            .position(|(existing, _)| existing.chars().count() < len)
            .unwrap_or(variants.len());

        variants.insert(pos, (element.to_owned(), weights));
    }

    /// самое длинное сокращение в начале строки: веса и длина в байтах
    #[inline(always)]
    pub fn longest_prefix(&self, starter: char, input: &str) -> Option<(WeightEntry, usize)>
    {
        self.by_starter
            .get(&starter)?
            .iter()
            .find(|(element, _)| input.starts_with(element.as_str()))
            .map(|(element, weights)| (*weights, element.len()))
    }

    pub fn is_empty(&self) -> bool
    {
        self.by_starter.is_empty()
    }
}

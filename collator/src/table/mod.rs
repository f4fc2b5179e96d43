mod contractions;

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use contractions::Contractions;

#[cfg(feature = "serde")]
use crate::error::RuleError;
use crate::error::RuleResult;
use crate::implicit::implicit_weights;
use crate::options::Strength;
use crate::rules::{parse_rules, Relation, RuleStatement};
use crate::weights::WeightEntry;

/// таблица весов, построенная по тексту правил
///
/// после построения не изменяется, может использоваться из нескольких потоков одновременно
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "TableData", into = "TableData")
)]
pub struct WeightTable
{
    /// исходный текст правил
    rules: String,
    /// элементы и их веса в порядке объявления
    entries: Vec<(String, WeightEntry)>,
    /// элементы из одного символа
    singles: HashMap<char, WeightEntry>,
    /// элементы из нескольких символов
    contractions: Contractions,
    /// количество первичных групп, с этого значения начинаются вычисляемые веса
    primary_count: u32,
}

/// элементы, имеющие одинаковые веса до заданного уровня включительно
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGroup
{
    /// веса первого элемента группы
    pub weights: WeightEntry,
    /// элементы группы в порядке объявления
    pub members: Vec<String>,
}

impl WeightTable
{
    /// разобрать текст правил и построить таблицу
    pub fn parse(rules: &str) -> RuleResult<Self>
    {
        let statements = parse_rules(rules)?;
        let table = Self::from_statements(rules, &statements);

        tracing::debug!(
            elements = table.entries.len(),
            primary_groups = table.primary_count,
            contractions = !table.contractions.is_empty(),
            "collation weight table built"
        );

        Ok(table)
    }

    /// таблица из уже разобранных элементов правил
    ///
    /// `<` увеличивает первичный вес и сбрасывает остальные, `;` увеличивает вторичный вес
    /// и сбрасывает третичный, `,` и `=` увеличивают третичный вес
    pub fn from_statements(rules: &str, statements: &[RuleStatement]) -> Self
    {
        let mut entries = Vec::with_capacity(statements.len());
        let mut current: Option<WeightEntry> = None;

        for statement in statements {
            let weights = match current {
                None => WeightEntry::new(0, 0, 0),
                Some(previous) => advance(previous, statement.relation),
            };

            entries.push((statement.element.clone(), weights));
            current = Some(weights);
        }

        Self::from_entries(rules.to_owned(), entries)
    }

    /// построить индексы поиска по списку элементов
    fn from_entries(rules: String, entries: Vec<(String, WeightEntry)>) -> Self
    {
        let mut singles = HashMap::with_capacity(entries.len());
        let mut contractions = Contractions::default();

        for (element, weights) in entries.iter() {
            let mut chars = element.chars();

            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    singles.insert(c, *weights);
                }
                (Some(_), Some(_)) => contractions.insert(element, *weights),
                (None, _) => (),
            }
        }

        let primary_count = entries
            .iter()
            .map(|(_, weights)| weights.primary + 1)
            .max()
            .unwrap_or(0);

        Self {
            rules,
            entries,
            singles,
            contractions,
            primary_count,
        }
    }

    /// веса в начале строки: самое длинное сокращение, символ из таблицы или вычисляемые веса;
    /// возвращает веса и количество прочитанных байт
    #[inline(always)]
    pub fn next_weights(&self, input: &str) -> Option<(WeightEntry, usize)>
    {
        let c = input.chars().next()?;

        if let Some(found) = self.contractions.longest_prefix(c, input) {
            return Some(found);
        }

        let weights = match self.singles.get(&c) {
            Some(&weights) => weights,
            None => implicit_weights(c, self.primary_count),
        };

        Some((weights, c.len_utf8()))
    }

    /// веса элемента, объявленного в правилах
    pub fn get(&self, element: &str) -> Option<WeightEntry>
    {
        let mut chars = element.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => self.singles.get(&c).copied(),
            _ => self
                .entries
                .iter()
                .find(|(existing, _)| existing == element)
                .map(|(_, weights)| *weights),
        }
    }

    /// группы элементов, неразличимых при заданном уровне сравнения
    pub fn groups(&self, strength: Strength) -> Vec<CharacterGroup>
    {
        let mut groups: Vec<CharacterGroup> = vec![];

        for (element, weights) in self.entries.iter() {
            if let Some(group) = groups.last_mut() {
                let same = (1 ..= strength.levels())
                    .all(|level| group.weights.level(level) == weights.level(level));

                if same {
                    group.members.push(element.clone());
                    continue;
                }
            }

            groups.push(CharacterGroup {
                weights: *weights,
                members: vec![element.clone()],
            });
        }

        groups
    }

    /// элементы и их веса в порядке объявления
    pub fn entries(&self) -> impl Iterator<Item = (&str, WeightEntry)>
    {
        self.entries
            .iter()
            .map(|(element, weights)| (element.as_str(), *weights))
    }

    /// исходный текст правил
    pub fn rules(&self) -> &str
    {
        &self.rules
    }

    /// количество первичных групп
    pub fn primary_count(&self) -> u32
    {
        self.primary_count
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

/// веса следующего элемента в зависимости от отношения к предыдущему
#[inline(always)]
fn advance(previous: WeightEntry, relation: Relation) -> WeightEntry
{
    match relation {
        Relation::Primary => WeightEntry::new(previous.primary + 1, 0, 0),
        Relation::Secondary => WeightEntry::new(previous.primary, previous.secondary + 1, 0),
        Relation::Tertiary | Relation::Equal => WeightEntry::new(
            previous.primary,
            previous.secondary,
            previous.tertiary + 1,
        ),
    }
}

/// сериализуемое представление таблицы
///
/// при загрузке таблица заново строится по тексту правил, сохранённые веса должны с ней совпасть
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TableData
{
    rules: String,
    entries: Vec<(String, WeightEntry)>,
}

#[cfg(feature = "serde")]
impl TryFrom<TableData> for WeightTable
{
    type Error = RuleError;

    fn try_from(data: TableData) -> Result<Self, Self::Error>
    {
        let table = Self::parse(&data.rules)?;

        if table.entries != data.entries {
            tracing::debug!(
                stored = data.entries.len(),
                built = table.entries.len(),
                "stored collation weights rejected"
            );
            return Err(RuleError::Inconsistent);
        }

        Ok(table)
    }
}

#[cfg(feature = "serde")]
impl From<WeightTable> for TableData
{
    fn from(table: WeightTable) -> Self
    {
        Self {
            rules: table.rules,
            entries: table.entries,
        }
    }
}

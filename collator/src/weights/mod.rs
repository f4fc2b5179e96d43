use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// веса элемента правил, 3 уровня
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightEntry
{
    /// номер первичной группы в порядке объявления
    pub primary: u32,
    /// номер варианта внутри первичной группы (`;`)
    pub secondary: u32,
    /// номер в порядке объявления внутри вторичной группы (`,` / `=`)
    pub tertiary: u32,
}

impl WeightEntry
{
    pub const fn new(primary: u32, secondary: u32, tertiary: u32) -> Self
    {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// вес на уровне 1 ..= 3
    #[inline(always)]
    pub(crate) fn level(&self, level: usize) -> u32
    {
        match level {
            1 => self.primary,
            2 => self.secondary,
            3 => self.tertiary,
            _ => unreachable!(),
        }
    }

    /// в виде, близком к записи весов в allkeys
    pub fn format(&self) -> String
    {
        format!(
            "[.{:04X}.{:04X}.{:04X}]",
            self.primary, self.secondary, self.tertiary,
        )
    }
}

impl Debug for WeightEntry
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}

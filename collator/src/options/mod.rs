#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// уровень сравнения: сколько уровней весов участвует в сравнении
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strength
{
    Primary = 1,   // базовые символы
    Secondary = 2, // диакритические знаки / варианты
    Tertiary = 3,  // регистр
}

/// настройки коллатора
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollatorOptions
{
    /// уровень сравнения
    pub strength: Strength,
}

impl Strength
{
    /// количество уровней весов, участвующих в сравнении
    #[inline(always)]
    pub fn levels(self) -> usize
    {
        self as usize
    }
}

impl Default for Strength
{
    fn default() -> Self
    {
        Self::Tertiary
    }
}

impl Default for CollatorOptions
{
    fn default() -> Self
    {
        Self {
            strength: Default::default(),
        }
    }
}

impl CollatorOptions
{
    /// задать уровень сравнения
    pub fn with_strength(mut self, strength: Strength) -> Self
    {
        self.strength = strength;
        self
    }
}

impl From<Strength> for CollatorOptions
{
    fn from(strength: Strength) -> Self
    {
        Self { strength }
    }
}

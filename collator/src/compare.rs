use core::cmp::Ordering;

use crate::key::generate_key;
use crate::options::Strength;
use crate::table::WeightTable;

/// строка пустая или состоит только из пробельных символов
#[inline(always)]
pub fn is_blank(text: &str) -> bool
{
    text.trim().is_empty()
}

/// сравнение пустых строк: пустые равны между собой и меньше любой непустой строки;
/// None - обе строки непустые
#[inline(always)]
pub fn compare_blank(a: &str, b: &str) -> Option<Ordering>
{
    match (is_blank(a), is_blank(b)) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

/// сравнить две строки по таблице весов
pub fn compare(a: &str, b: &str, table: &WeightTable, strength: Strength) -> Ordering
{
    if let Some(ordering) = compare_blank(a, b) {
        return ordering;
    }

    generate_key(a, table).compare(&generate_key(b, table), strength)
}

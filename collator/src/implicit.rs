// вычисляемые веса - для символов, не упомянутых в правилах
//
// первичный вес: количество первичных групп таблицы + кодпоинт, т.е. такие символы идут после всех
// объявленных групп и упорядочены между собой по кодпоинту. вторичный и третичный веса - нулевые.

use crate::weights::WeightEntry;

/// рассчитать веса символа, отсутствующего в таблице
#[inline(always)]
pub fn implicit_weights(c: char, primary_count: u32) -> WeightEntry
{
    WeightEntry::new(primary_count + u32::from(c), 0, 0)
}


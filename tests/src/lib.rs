// общие данные для тестов: французские правила сопоставления и списки слов,
// отсортированные вручную

use rule_collator::WeightTable;

/// французский алфавит с расширенными символами:
///  - строчные и прописные буквы различаются, строчная идёт первой
///  - буквы без диакритики идут перед буквами с диакритикой (a < à < â, e < é < è < ê < ë ...)
///  - æ и œ - отдельные буквы
///  - цифры и символы идут перед буквами
pub const FRENCH_RULES: &str = concat!(
    "< '@'='!'='#'='$'='%'='&'='*' ",
    "< 0 < 1 < 2 < 3 < 4 < 5 < 6 < 7 < 8 < 9 ",
    "< a<A < à<À < â<Â < æ<Æ ",
    "< b<B < c<C < ç<Ç < d<D ",
    "< e<E < é<É < è<È < ê<Ê < ë<Ë < f<F < g<G ",
    "< h<H < i<I; î<Î < ï<Ï < j<J < k<K < l<L ",
    "< m<M < n<N < o<O < ô<Ô < ö<Ö < œ<Œ < p<P ",
    "< q<Q < r<R < s<S < t<T < u<U < ù<Ù < û<Û ",
    "< v,V < w<W < x<X < y<Y < ÿ<Ÿ < z<Z ",
);

/// алфавит в порядке сопоставления
pub const ALPHABET_IN_ORDER: &[&str] = &[
    "a", "A", "à", "À", "â", "Â", "æ", "Æ", "b", "B", "c", "C", "ç", "Ç", "d", "D", "e", "E", "é",
    "É", "è", "È", "ê", "Ê", "ë", "Ë", "f", "F", "g", "G", "h", "H", "i", "I", "î", "Î", "ï", "Ï",
    "j", "J", "k", "K", "l", "L", "m", "M", "n", "N", "o", "O", "ô", "Ô", "ö", "Ö", "œ", "Œ", "p",
    "P", "q", "Q", "r", "R", "s", "S", "t", "T", "u", "U", "ù", "Ù", "û", "Û", "v", "V", "w", "W",
    "x", "X", "y", "Y", "ÿ", "Ÿ", "z", "Z",
];

/// символы, цифры и сочетания букв с диакритикой
pub const SORTED_WORD_SET: &[&str] = &[
    "@", "$", "1", "aàâ", "aâà", "Aàâ", "Aâà", "àaâ", "àAâ", "àâa", "àâA", "âaà", "âAà", "âàa",
    "âàA", "æaA", "ÆaA", "bâà", "Bàâ",
];

/// французские слова
pub const SORTED_WORD_SET_2: &[&str] = &[
    "@", "1", "Aaron", "àAron", "chaque", "chemin", "cote", "coté", "côte", "côté", "lie", "lire",
    "pint", "pylon", "savoir", "yen", "yuan", "yucca", "zoo", "Zürich",
];

/// таблица весов французских правил
pub fn french_table() -> WeightTable
{
    match WeightTable::parse(FRENCH_RULES) {
        Ok(table) => table,
        Err(error) => panic!("french rules: {}", error),
    }
}

/// детерминированная перестановка: элементы с чётных позиций в обратном порядке,
/// затем с нечётных
pub fn scrambled<'a>(words: &[&'a str]) -> Vec<&'a str>
{
    let even = words.iter().step_by(2).rev();
    let odd = words.iter().skip(1).step_by(2);

    even.chain(odd).copied().collect()
}

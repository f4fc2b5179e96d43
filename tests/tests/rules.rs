use core::cmp::Ordering;

use rule_collation_tests::*;
use rule_collator::{
    generate_key, parse, Collator, CollatorOptions, RuleError, Strength, SyntaxErrorKind,
    WeightEntry, WeightTable,
};

fn syntax_error(rules: &str) -> (SyntaxErrorKind, usize)
{
    match parse(rules) {
        Err(RuleError::Syntax(error)) => (error.kind, error.position),
        Err(other) => panic!("{:?}: unexpected error {:?}", rules, other),
        Ok(_) => panic!("{:?}: parsed without errors", rules),
    }
}

#[test]
fn unquoted_reserved_character()
{
    assert_eq!(
        syntax_error("a < ? < d"),
        (SyntaxErrorKind::UnexpectedCharacter('?'), 4)
    );
    assert_eq!(
        syntax_error("< @ < a"),
        (SyntaxErrorKind::UnexpectedCharacter('@'), 2)
    );
}

#[test]
fn empty_rules()
{
    assert!(matches!(parse(""), Err(RuleError::Empty)));
    assert!(matches!(parse("   \n\t"), Err(RuleError::Empty)));
}

#[test]
fn malformed_rules()
{
    assert_eq!(
        syntax_error("a < 'b"),
        (SyntaxErrorKind::UnterminatedQuote, 4)
    );
    assert_eq!(
        syntax_error("a < b <"),
        (SyntaxErrorKind::MissingRightOperand('<'), 6)
    );
    assert_eq!(
        syntax_error(", a < b"),
        (SyntaxErrorKind::MissingLeftOperand(','), 0)
    );
    assert_eq!(
        syntax_error("a < b ; ; c"),
        (SyntaxErrorKind::MissingRightOperand(';'), 6)
    );
    assert_eq!(
        syntax_error("a < b < A , b"),
        (
            SyntaxErrorKind::DuplicateElement {
                element: "b".into(),
                first: 4
            },
            12
        )
    );
}

#[test]
fn error_messages()
{
    assert_eq!(RuleError::Empty.to_string(), "collation rules are empty");

    let error = parse("a < ? < d").unwrap_err();

    assert_eq!(
        error.to_string(),
        "rule syntax error at position 4: reserved character '?' must be quoted"
    );
}

#[test]
fn french_table_weights()
{
    let table = french_table();

    // 7 символов + 10 цифр + 84 буквы
    assert_eq!(table.len(), 101);
    assert_eq!(table.rules(), FRENCH_RULES);

    assert_eq!(table.get("@"), Some(WeightEntry::new(0, 0, 0)));
    assert_eq!(table.get("*"), Some(WeightEntry::new(0, 0, 6)));
    assert_eq!(table.get("0"), Some(WeightEntry::new(1, 0, 0)));
    assert_eq!(table.get("a"), Some(WeightEntry::new(11, 0, 0)));
    assert_eq!(table.get("A"), Some(WeightEntry::new(12, 0, 0)));

    let capital_i = table.get("I").unwrap();
    let i_circumflex = table.get("î").unwrap();

    assert_eq!(i_circumflex.primary, capital_i.primary);
    assert_eq!(i_circumflex.secondary, 1);

    let v = table.get("v").unwrap();
    let capital_v = table.get("V").unwrap();

    assert_eq!((capital_v.primary, capital_v.secondary), (v.primary, v.secondary));
    assert_eq!(capital_v.tertiary, 1);

    assert_eq!(table.get("ü"), None);
}

#[test]
fn primary_ranks_increase_in_declaration_order()
{
    let table = french_table();

    let primaries: Vec<u32> = table.entries().map(|(_, weights)| weights.primary).collect();

    assert!(primaries.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(table.primary_count(), *primaries.last().unwrap() + 1);
}

#[test]
fn groups()
{
    let table = french_table();

    let symbols = &table.groups(Strength::Secondary)[0];

    assert_eq!(symbols.members, ["@", "!", "#", "$", "%", "&", "*"]);

    let i_group = table
        .groups(Strength::Primary)
        .into_iter()
        .find(|group| group.members.iter().any(|member| member == "î"))
        .unwrap();

    assert_eq!(i_group.members, ["I", "î"]);
}

#[test]
fn collation_keys()
{
    let table = french_table();
    let collator = Collator::new(&table, CollatorOptions::default());

    let cote = collator.get_collation_key("coté");
    let cote_circumflex = collator.get_collation_key("côte");

    assert_eq!(cote.source(), "coté");
    assert_eq!(cote.weights().len(), 4);
    assert_eq!(cote.compare(&cote_circumflex, Strength::Tertiary), Ordering::Less);
    assert!(cote.sort_key(Strength::Tertiary) < cote_circumflex.sort_key(Strength::Tertiary));

    assert_eq!(generate_key("coté", &table), cote);
}

#[test]
fn tables_are_independent()
{
    let forward = WeightTable::parse("a < b").unwrap();
    let backward = WeightTable::parse("b < a").unwrap();

    let forward = Collator::new(&forward, CollatorOptions::default());
    let backward = Collator::new(&backward, CollatorOptions::default());

    assert_eq!(forward.compare("a", "b"), Ordering::Less);
    assert_eq!(backward.compare("a", "b"), Ordering::Greater);
    assert_eq!(forward.compare("a", "b"), Ordering::Less);
}

#[test]
fn shared_between_threads()
{
    let table = french_table();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0 .. 4)
            .map(|_| {
                scope.spawn(|| {
                    Collator::new(&table, CollatorOptions::default())
                        .sort(&scrambled(SORTED_WORD_SET_2))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), SORTED_WORD_SET_2);
        }
    });
}

#[test]
fn options()
{
    let options = CollatorOptions::default();

    assert_eq!(options.strength, Strength::Tertiary);
    assert_eq!(
        options.with_strength(Strength::Primary),
        CollatorOptions::from(Strength::Primary)
    );
    assert!(Strength::Primary < Strength::Secondary);
    assert_eq!(Strength::Secondary.levels(), 2);
}

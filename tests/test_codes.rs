use tinylink::shortener::CodeGenerator;

#[test]
fn test_first_code_is_aaaa() {
    let mut generator = CodeGenerator::new();
    assert_eq!(generator.next_code(), "AAAA");
}

#[test]
fn test_codes_increment_in_lexicographic_order() {
    let mut generator = CodeGenerator::new();
    assert_eq!(generator.next_code(), "AAAA");
    assert_eq!(generator.next_code(), "AAAB");
    assert_eq!(generator.next_code(), "AAAC");
}

#[test]
fn test_carry_across_last_position() {
    let mut generator = CodeGenerator::new();

    // Consume codes up to and including "AAAZ"
    for _ in 0..26 {
        generator.next_code();
    }

    assert_eq!(generator.next_code(), "AABA");
}

#[test]
fn test_codes_are_distinct_and_sorted() {
    let mut generator = CodeGenerator::new();
    let codes: Vec<String> = (0..100).map(|_| generator.next_code()).collect();

    let mut sorted = codes.clone();
    sorted.sort();
    sorted.dedup();

    assert_eq!(codes, sorted);
    assert_eq!(codes.len(), 100);
}

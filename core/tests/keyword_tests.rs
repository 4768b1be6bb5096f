use core::tokenizer::{normalize, NoiseWords};

#[test]
fn it_lowercases_plain_words() {
    let noise = NoiseWords::new();
    assert_eq!(normalize("Word", &noise).as_deref(), Some("word"));
}

#[test]
fn it_strips_trailing_punctuation() {
    let noise = NoiseWords::new();
    assert_eq!(normalize("night,", &noise).as_deref(), Some("night"));
    assert_eq!(normalize("question??", &noise).as_deref(), Some("question"));
    assert_eq!(normalize("end.;!", &noise).as_deref(), Some("end"));
}

#[test]
fn it_rejects_letters_after_punctuation() {
    let noise = NoiseWords::new();
    assert_eq!(normalize("test-case", &noise), None);
    assert_eq!(normalize("can't", &noise), None);
    assert_eq!(normalize("2fast", &noise), None);
}

#[test]
fn it_rejects_empty_letter_runs() {
    let noise = NoiseWords::new();
    assert_eq!(normalize("...", &noise), None);
    assert_eq!(normalize("42", &noise), None);
    assert_eq!(normalize("", &noise), None);
}

#[test]
fn it_rejects_noise_words_regardless_of_case() {
    let noise = NoiseWords::from_words(["the", "and"]);
    assert_eq!(normalize("The", &noise), None);
    assert_eq!(normalize("AND,", &noise), None);
    assert_eq!(normalize("theory", &noise).as_deref(), Some("theory"));
}

#[test]
fn standard_list_filters_common_words() {
    let noise = NoiseWords::standard();
    assert!(!noise.is_empty());
    assert_eq!(normalize("the", &noise), None);
    assert_eq!(normalize("Could", &noise), None);
    assert_eq!(normalize("engine", &noise).as_deref(), Some("engine"));
}

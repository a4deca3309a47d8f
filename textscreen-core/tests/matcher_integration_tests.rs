// textscreen-core/tests/matcher_integration_tests.rs
use anyhow::anyhow;
use textscreen_core::vocabulary::{TransliterateFn, Vocabulary, VocabularyBuilder};
use textscreen_core::SensitiveTrie;
use textscreen_pinyin::PinyinTable;

fn demo_table() -> PinyinTable {
    PinyinTable::from_entries([
        ('傻', "sha"),
        ('逼', "bi"),
        ('叉', "cha"),
        ('垃', "la"),
        ('圾', "ji"),
        ('妈', "ma"),
        ('的', "de"),
    ])
}

fn demo_vocabulary() -> Vocabulary {
    let mut builder = VocabularyBuilder::new(demo_table());
    builder.add_words(["傻逼", "傻叉", "垃圾", "妈的", "sb"]);
    builder.build()
}

fn demo_trie() -> SensitiveTrie {
    SensitiveTrie::from_vocabulary(&demo_vocabulary())
}

#[test_log::test]
fn vocabulary_merges_phonetic_variants() {
    let vocabulary = demo_vocabulary();
    let words: Vec<&str> = vocabulary.iter().collect();
    assert_eq!(
        words,
        vec!["傻逼", "傻叉", "垃圾", "妈的", "sb", "shabi", "shacha", "laji", "made"]
    );
}

#[test]
fn masks_words_with_interleaved_noise() {
    let (words, redacted) = demo_trie().match_text("你是一个大傻&逼，大傻 叉");
    assert_eq!(words, vec!["傻逼", "傻叉"]);
    assert_eq!(redacted, "你是一个大***，大***");
}

#[test]
fn masks_words_with_emoji_noise() {
    let (words, redacted) = demo_trie().match_text("你是傻☺叉");
    assert_eq!(words, vec!["傻叉"]);
    assert_eq!(redacted, "你是***");
}

#[test]
fn catches_romanized_evasions() {
    let trie = demo_trie();

    let (words, redacted) = trie.match_text("shabi东西");
    assert_eq!(words, vec!["shabi"]);
    assert_eq!(redacted, "*****东西");

    let (words, redacted) = trie.match_text("他made东西");
    assert_eq!(words, vec!["made"]);
    assert_eq!(redacted, "他****东西");
}

#[test]
fn latin_matching_is_case_insensitive() {
    let mut trie = SensitiveTrie::new();
    trie.add_word("sb");
    let (words, redacted) = trie.match_text("SB");
    assert_eq!(words, vec!["sb"]);
    assert_eq!(redacted, "**");
}

#[test]
fn dynamic_word_addition_takes_effect_immediately() {
    let mut trie = demo_trie();
    trie.add_word("牛大大");
    let (words, redacted) = trie.match_text("今天，牛大大签发军令");
    assert_eq!(words, vec!["牛大大"]);
    assert_eq!(redacted, "今天，***签发军令");
}

#[test]
fn reports_multiple_words_in_first_seen_order() {
    let (words, redacted) = demo_trie().match_text("什么垃圾打野，傻逼一样，叫你来开龙不来，SB");
    assert_eq!(words, vec!["垃圾", "傻逼", "sb"]);
    assert_eq!(redacted, "什么**打野，**一样，叫你来开龙不来，**");
}

#[test]
fn clean_text_is_returned_verbatim() {
    let (words, redacted) = demo_trie().match_text("正常的内容☺");
    assert!(words.is_empty());
    assert_eq!(redacted, "正常的内容☺");
}

#[test]
fn redaction_preserves_code_point_length() {
    let trie = demo_trie();
    for text in [
        "你是一个大傻&逼，大傻 叉",
        "shabi东西",
        "什么垃圾打野，傻逼一样，叫你来开龙不来，SB",
        "正常的内容☺",
        "",
    ] {
        let (_, redacted) = trie.match_text(text);
        assert_eq!(
            redacted.chars().count(),
            text.chars().count(),
            "length changed for {text:?}"
        );
    }
}

#[test]
fn matching_is_deterministic() {
    let trie = demo_trie();
    let text = "什么垃圾打野，傻逼一样，叫你来开龙不来，SB";
    let first = trie.match_text(text);
    let second = trie.match_text(text);
    assert_eq!(first, second);
}

#[test_log::test]
fn failed_transliteration_drops_only_the_phonetic_variant() {
    let converter = TransliterateFn(|word: &str| {
        if word == "妈的" {
            Err(anyhow!("no reading for '妈'"))
        } else {
            demo_table().convert(word).map_err(Into::into)
        }
    });
    let mut builder = VocabularyBuilder::new(converter);
    builder.add_words(["妈的", "垃圾"]);
    let vocabulary = builder.build();
    let words: Vec<&str> = vocabulary.iter().collect();
    assert_eq!(words, vec!["妈的", "垃圾", "laji"]);

    let trie = SensitiveTrie::from_vocabulary(&vocabulary);
    let (matched, redacted) = trie.match_text("他妈的东西");
    assert_eq!(matched, vec!["妈的"]);
    assert_eq!(redacted, "他**东西");
}

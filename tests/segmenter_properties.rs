// Property-style coverage of the public splitting API across input shapes.

use typeslice::{preview_split, split_text, SplitOptions};

fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

#[test]
fn segments_are_non_empty_after_trim() {
    let inputs = [
        "짧은 문장입니다.".to_string(),
        "첫 문단.\n\n둘째 문단.".to_string(),
        "구두점없는한글텍스트".repeat(40),
        "쉼표가, 아주 많은, 문장이, 계속, 이어지는, 경우".to_string(),
        "Mixed English and 한국어. Sentences here! And questions? 그리고 말줄임…".to_string(),
    ];

    for input in &inputs {
        let segments = split_text(input, &SplitOptions::default());
        for segment in &segments {
            assert!(!segment.trim().is_empty(), "empty segment for input {input:?}");
        }
    }
}

#[test]
fn order_preservation_modulo_whitespace() {
    let inputs = [
        "첫째 문장. 둘째 문장! 셋째 문장?\n\n넷째 문단.".to_string(),
        format!("{}, {}", "가".repeat(120), "나".repeat(160)),
        "사이 공백 포함 단어 ".repeat(30),
    ];

    for input in &inputs {
        let segments = split_text(input, &SplitOptions::default());
        assert_eq!(
            squash_whitespace(&segments.concat()),
            squash_whitespace(input),
            "content drift for input {input:?}"
        );
    }
}

#[test]
fn total_function_over_degenerate_inputs() {
    // None of these may panic; each returns a defined result.
    assert_eq!(split_text("", &SplitOptions::default()), vec![String::new()]);
    assert_eq!(split_text("   ", &SplitOptions::default()), vec![String::new()]);
    assert_eq!(split_text("\n\n\n", &SplitOptions::default()), vec![String::new()]);

    let huge = "a".repeat(50_000);
    let segments = split_text(&huge, &SplitOptions::default());
    assert!(!segments.is_empty());
    assert_eq!(segments.concat(), huge);
}

#[test]
fn short_circuit_below_max_length() {
    let s = "응답하라 한 줄 텍스트";
    let segments = split_text(s, &SplitOptions::default());
    assert_eq!(segments, vec![s.to_string()]);
}

#[test]
fn segments_respect_soft_ceiling_for_punctuated_text() {
    // Well-punctuated prose should never produce a segment far past max;
    // each sentence here fits, so accumulation caps at the ceiling.
    let sentence = format!("{}. ", "문".repeat(60));
    let text = sentence.repeat(10);
    let segments = split_text(&text, &SplitOptions::default());

    assert!(segments.len() > 1);
    for segment in &segments {
        assert!(
            segment.chars().count() <= 150,
            "segment over ceiling: {} chars",
            segment.chars().count()
        );
    }
}

#[test]
fn even_distribution_for_unpunctuated_run() {
    // 310 chars, max 150: three near-equal parts, not 150+150+10.
    let text = "무".repeat(310);
    let segments = split_text(&text, &SplitOptions::default());

    assert_eq!(segments.len(), 3);
    let lengths: Vec<usize> = segments.iter().map(|s| s.chars().count()).collect();
    assert_eq!(lengths.iter().sum::<usize>(), 310);
    assert!(lengths.iter().all(|&len| (102..=104).contains(&len)), "lengths {lengths:?}");
}

#[test]
fn one_segment_per_sentence_when_pair_overflows() {
    let first = format!("{}.", "앞".repeat(90));
    let second = format!("{}.", "뒤".repeat(90));
    let text = format!("{first} {second}");

    let segments = split_text(&text, &SplitOptions::default());
    assert_eq!(segments, vec![first, second]);
}

#[test]
fn clause_split_balances_comma_sentence() {
    // One 251-char sentence, comma near the middle: two balanced parts cut
    // at the soft break.
    let text = format!("{}, {}.", "앞".repeat(120), "뒤".repeat(128));
    let segments = split_text(&text, &SplitOptions::default());

    assert_eq!(segments.len(), 2);
    assert!(segments[0].ends_with(','));
}

#[test]
fn preview_projection_is_consistent() {
    let text = format!("{}\n\n{}", "시".repeat(200), "구".repeat(40));
    let preview = preview_split(&text, &SplitOptions::default());

    assert_eq!(preview.segment_count, preview.segments.len());
    assert_eq!(preview.original_length, text.chars().count());

    for (i, segment) in preview.segments.iter().enumerate() {
        assert_eq!(segment.index, i + 1);
        assert!(segment.preview.chars().count() <= 53);
        if segment.length > 50 {
            assert!(segment.preview.ends_with("..."));
        } else {
            assert_eq!(segment.preview.chars().count(), segment.length);
        }
    }
}

#[test]
fn rejoining_segments_is_lossy_by_design() {
    // Newline boundaries vanish on rejoin, so a second pass may segment
    // differently. The guarantee is determinism per input, not idempotence.
    let text = "첫 줄\n둘째 줄\n셋째 줄";
    let options = SplitOptions::default();

    let first_pass = split_text(text, &options);
    let rejoined = first_pass.join(" ");
    let second_pass = split_text(&rejoined, &options);

    assert_eq!(first_pass.len(), 3);
    assert_eq!(second_pass.len(), 1);
}

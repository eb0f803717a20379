use vidquiz::models::overlay::{
    NextAction, Overlay, OverlayKind, OverlayRow, AUTO_DIMENSION, GENERIC_CORRECT_FEEDBACK,
    GENERIC_INCORRECT_FEEDBACK,
};

fn base_row() -> OverlayRow {
    OverlayRow {
        video_title: "Intro to Photosynthesis".to_string(),
        timestamp: "30".to_string(),
        title: "Chloroplasts".to_string(),
        content: "Where light reactions happen".to_string(),
        overlay_type: "info".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_parse_basic_info_overlay() {
    let overlay = Overlay::parse_row(&base_row(), 4, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.id, 4);
    assert_eq!(overlay.timestamp, 30);
    assert_eq!(overlay.kind, OverlayKind::Info);
    assert_eq!(overlay.next_action, NextAction::Continue);
    assert!(overlay.options.is_empty());
    assert!(overlay.image.is_none());
    assert!(overlay.group.is_none());
}

#[test]
fn test_rows_for_other_videos_are_skipped() {
    assert!(Overlay::parse_row(&base_row(), 0, "A Different Video").is_none());
}

#[test]
fn test_mandatory_fields_reject_row() {
    let mut row = base_row();
    row.timestamp = "not-a-number".to_string();
    assert!(Overlay::parse_row(&row, 0, "Intro to Photosynthesis").is_none());

    let mut row = base_row();
    row.timestamp = "0".to_string();
    assert!(Overlay::parse_row(&row, 0, "Intro to Photosynthesis").is_none());

    let mut row = base_row();
    row.title = "  ".to_string();
    assert!(Overlay::parse_row(&row, 0, "Intro to Photosynthesis").is_none());

    let mut row = base_row();
    row.content = String::new();
    assert!(Overlay::parse_row(&row, 0, "Intro to Photosynthesis").is_none());
}

#[test]
fn test_unrecognized_type_defaults_to_info() {
    let mut row = base_row();
    row.overlay_type = "Carousel".to_string();
    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();
    assert_eq!(overlay.kind, OverlayKind::Info);

    let mut row = base_row();
    row.overlay_type = String::new();
    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();
    assert_eq!(overlay.kind, OverlayKind::Info);
}

#[test]
fn test_type_is_lowercased() {
    let mut row = base_row();
    row.overlay_type = "QUIZ".to_string();
    row.correct_answers = "Thylakoid".to_string();
    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();
    assert_eq!(overlay.kind, OverlayKind::Quiz);
}

#[test]
fn test_quiz_options_from_correct_and_wrong_fields() {
    let mut row = base_row();
    row.overlay_type = "quiz".to_string();
    row.correct_answers = "Thylakoid | Stroma ".to_string();
    row.wrong_answer_1 = "Nucleus".to_string();
    row.wrong_answer_2 = "  ".to_string();
    row.wrong_answer_3 = "Ribosome".to_string();
    row.correct_feedback = "Nice!".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.options.len(), 4);
    assert_eq!(overlay.options[0].text, "Thylakoid");
    assert!(overlay.options[0].is_correct);
    assert_eq!(overlay.options[0].feedback, "Nice!");
    assert_eq!(overlay.options[1].text, "Stroma");
    assert!(overlay.options[1].is_correct);
    // Wrong answers follow the correct ones, in column order, blanks skipped.
    assert_eq!(overlay.options[2].text, "Nucleus");
    assert!(!overlay.options[2].is_correct);
    assert_eq!(overlay.options[2].feedback, GENERIC_INCORRECT_FEEDBACK);
    assert_eq!(overlay.options[3].text, "Ribosome");
}

#[test]
fn test_generic_feedback_fallbacks() {
    let mut row = base_row();
    row.overlay_type = "quiz".to_string();
    row.correct_answers = "Thylakoid".to_string();
    row.wrong_answer_1 = "Nucleus".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.options[0].feedback, GENERIC_CORRECT_FEEDBACK);
    assert_eq!(overlay.options[1].feedback, GENERIC_INCORRECT_FEEDBACK);
}

#[test]
fn test_quiz_without_correct_answer_has_no_options() {
    let mut row = base_row();
    row.overlay_type = "quiz".to_string();
    row.wrong_answer_1 = "Nucleus".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    // Degenerate but valid: a quiz row with no correct answer yields zero
    // options, including none from the wrong-answer columns.
    assert!(overlay.options.is_empty());
}

#[test]
fn test_true_false_synthesizes_missing_false() {
    let mut row = base_row();
    row.overlay_type = "true_false".to_string();
    row.correct_answers = "TRUE".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.kind, OverlayKind::TrueFalse);
    assert_eq!(overlay.options.len(), 2);
    assert_eq!(overlay.options[0].text, "TRUE");
    assert!(overlay.options[0].is_correct);
    assert_eq!(overlay.options[1].text, "FALSE");
    assert!(!overlay.options[1].is_correct);
}

#[test]
fn test_true_false_keeps_supplied_pair() {
    let mut row = base_row();
    row.overlay_type = "true_false".to_string();
    row.correct_answers = "FALSE".to_string();
    row.wrong_answer_1 = "TRUE".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.options.len(), 2);
    let true_option = overlay
        .options
        .iter()
        .find(|o| o.text.eq_ignore_ascii_case("true"))
        .unwrap();
    let false_option = overlay
        .options
        .iter()
        .find(|o| o.text.eq_ignore_ascii_case("false"))
        .unwrap();
    assert!(!true_option.is_correct);
    assert!(false_option.is_correct);
}

#[test]
fn test_matching_type_gets_no_options() {
    let mut row = base_row();
    row.overlay_type = "matching".to_string();
    row.correct_answers = "A|B".to_string();

    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    assert_eq!(overlay.kind, OverlayKind::Matching);
    assert!(overlay.options.is_empty());
}

#[test]
fn test_image_attached_only_with_url() {
    let overlay = Overlay::parse_row(&base_row(), 0, "Intro to Photosynthesis").unwrap();
    assert!(overlay.image.is_none());

    let mut row = base_row();
    row.image_url = "https://example.com/leaf.png".to_string();
    row.image_width = "320".to_string();
    let overlay = Overlay::parse_row(&row, 0, "Intro to Photosynthesis").unwrap();

    let image = overlay.image.unwrap();
    assert_eq!(image.url, "https://example.com/leaf.png");
    assert_eq!(image.width, "320");
    assert_eq!(image.height, AUTO_DIMENSION);
}

#[test]
fn test_from_cells_maps_ordered_fields() {
    let cells: Vec<String> = vec![
        "Intro to Photosynthesis",
        "45",
        "Check-in",
        "What organelle?",
        "quiz",
        "Chloroplast",
        "Nucleus",
        "",
        "",
        "Well done",
        "Try again",
        "next_question",
        "",
        "",
        "",
        "unit-1",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    let row = OverlayRow::from_cells(&cells);
    assert_eq!(row.video_title, "Intro to Photosynthesis");
    assert_eq!(row.timestamp, "45");
    assert_eq!(row.overlay_type, "quiz");
    assert_eq!(row.correct_answers, "Chloroplast");
    assert_eq!(row.wrong_answer_1, "Nucleus");
    assert_eq!(row.next_action, "next_question");
    assert_eq!(row.group_name, "unit-1");
}

#[test]
fn test_from_cells_tolerates_short_rows() {
    let cells: Vec<String> = vec!["Video", "10", "Title", "Content"]
        .into_iter()
        .map(str::to_string)
        .collect();

    let row = OverlayRow::from_cells(&cells);
    assert_eq!(row.content, "Content");
    assert_eq!(row.overlay_type, "");
    assert_eq!(row.group_name, "");
}

#[test]
fn test_next_action_grammar() {
    assert_eq!(NextAction::parse(""), NextAction::Continue);
    assert_eq!(NextAction::parse("continue"), NextAction::Continue);
    assert_eq!(
        NextAction::parse("next_question"),
        NextAction::NextQuestion { target: None }
    );
    assert_eq!(NextAction::parse("end"), NextAction::End);
    assert_eq!(
        NextAction::parse("if_correct:42"),
        NextAction::IfCorrect("42".to_string())
    );
    assert_eq!(
        NextAction::parse("if_incorrect: group-b "),
        NextAction::IfIncorrect("group-b".to_string())
    );
    // Unrecognized directives silently fall back to continue.
    assert_eq!(NextAction::parse("bogus"), NextAction::Continue);
    assert_eq!(NextAction::parse("if_correct"), NextAction::Continue);
}

#[test]
fn test_next_action_param_keeps_everything_after_first_colon() {
    assert_eq!(
        NextAction::parse("if_correct:a:b:c"),
        NextAction::IfCorrect("a:b:c".to_string())
    );
}

//! Tests for the VEC and exam type lookup tables.

use rstest::rstest;

use crate::exam::domain::{ExamType, ParseVecCodeError, RenderError, VecCode};

#[rstest]
#[case("arrl", "ARRL-VEC")]
#[case("golden", "GEARS")]
#[case("lagroup", "GLAARG")]
#[case("mo-kan", "MO-KAN VEC")]
#[case("west-carolina", "Western Carolina ARS VEC")]
fn code_maps_to_label(#[case] code: &str, #[case] label: &str) {
    let vec = VecCode::from_code(code).expect("code is in the table");

    assert_eq!(vec.label(), label);
}

#[rstest]
fn label_and_code_lookups_agree_for_every_vec() {
    for vec in VecCode::ALL {
        assert_eq!(VecCode::from_code(vec.code()), Ok(vec));
        assert_eq!(VecCode::from_label(vec.label()), Ok(vec));
    }
}

#[rstest]
#[case("ARRL")]
#[case("ARRL-VEC")]
#[case("")]
#[case("nonexistent")]
fn unknown_codes_are_rejected(#[case] code: &str) {
    let error = VecCode::from_code(code).expect_err("code is not in the table");

    assert_eq!(error, ParseVecCodeError(code.to_owned()));
    assert_eq!(
        RenderError::from(error),
        RenderError::UnknownVecCode(code.to_owned())
    );
}

#[rstest]
#[case(ExamType::Remote, "remote", "Remote")]
#[case(ExamType::InPerson, "inperson", "In-Person")]
#[case(ExamType::All, "all", "All")]
fn exam_type_table(#[case] exam_type: ExamType, #[case] code: &str, #[case] label: &str) {
    assert_eq!(exam_type.code(), code);
    assert_eq!(ExamType::from_code(code), Ok(exam_type));
    assert_eq!(ExamType::from_label(label), Ok(exam_type));
}

#[rstest]
fn exam_type_rejects_label_as_code() {
    assert!(ExamType::try_from("In-Person").is_err());
}

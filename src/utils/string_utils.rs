//! 요청 본문 문자열 정규화 헬퍼
//!
//! 검증기는 "없음"과 "공백뿐"을 같은 것으로 취급하므로, 두 경우 모두
//! 빈 문자열로 바꾼 뒤 길이/형식 검사를 수행합니다. 값이 있으면 원본을
//! 그대로 유지합니다 (길이 검사는 공백을 포함한 원본 기준).

/// 없거나 공백뿐이면 `""`, 아니면 원본 문자열
pub fn normalize_blank(value: Option<&str>) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw.to_string(),
        _ => String::new(),
    }
}

/// 빈 문자열이 아닌 값만 남깁니다. 부분 갱신에서 "제공된 필드"를 가려낼 때 사용합니다.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|raw| !raw.is_empty()).map(str::to_string)
}

/// 쉼표로 구분된 목록을 나눕니다. 각 항목의 공백은 보존됩니다.
pub fn split_comma_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

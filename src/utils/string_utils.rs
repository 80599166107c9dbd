//! # 문자열 유틸리티
//!
//! 요청 필드 검증과 정리에 쓰이는 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;

/// 선택적 문자열을 정리합니다. 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator` 커스텀 규칙: 공백뿐인 문자열 거부
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("값이 비어 있습니다".into()));
    }
    Ok(())
}

/// 앞뒤 공백을 제거하여 역직렬화합니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// 빈 문자열과 공백뿐인 문자열을 `None`으로 역직렬화합니다.
///
/// 부분 업데이트 DTO에서 "값을 보내지 않음"과 "빈 값을 보냄"을
/// 같은 의미로 취급하기 위해 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 검색어를 정규식 메타문자가 이스케이프된 리터럴 패턴으로 변환합니다.
pub fn escape_search_term(term: &str) -> String {
    regex::escape(term)
}

/// snake_case 식별자를 camelCase로 변환합니다. (`type_animal` → `typeAnimal`)
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

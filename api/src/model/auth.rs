use derive_new::new;
use garde::Validate;
use kernel::model::{id::UserId, user::event::CreateUser, user::User};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::model::parking::ReservationResponse;

// 学籍番号は「数字2桁 + 英字2文字 + 数字3桁」（例: 23db029）
static STUDENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[a-zA-Z]{2}\d{3}$").unwrap());

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[garde(custom(student_id_format))]
    pub student_id: String,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(custom(password_strength))]
    pub password: String,
}

impl From<RegisterUserRequest> for CreateUser {
    fn from(value: RegisterUserRequest) -> Self {
        let RegisterUserRequest {
            student_id,
            name,
            password,
        } = value;
        Self {
            user_id: UserId::new(student_id),
            user_name: name,
            password,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub student_id: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    pub active_reservation: Option<ReservationResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub student_id: UserId,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { user_id, user_name } = value;
        Self {
            student_id: user_id,
            name: user_name,
        }
    }
}

// バリデーションは補助的なもので、正しさの境界はストレージの制約にある
fn student_id_format(value: &str, _context: &()) -> garde::Result {
    if STUDENT_ID_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(garde::Error::new(
            "学籍番号は「数字2桁 + 英字2文字 + 数字3桁」の形式で入力してください。",
        ))
    }
}

fn password_strength(value: &str, _context: &()) -> garde::Result {
    let long_enough = value.len() >= 8;
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(garde::Error::new(
            "パスワードは8文字以上の英数字の両方を含めてください。",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(student_id: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            student_id: student_id.into(),
            name: "駐車 太郎".into(),
            password: password.into(),
        }
    }

    #[test]
    fn well_formed_registration_passes_validation() {
        assert!(register_request("23db029", "abcd1234").validate(&()).is_ok());
    }

    #[test]
    fn malformed_student_id_is_rejected() {
        assert!(register_request("23029", "abcd1234").validate(&()).is_err());
        assert!(register_request("db23029", "abcd1234").validate(&()).is_err());
    }

    #[test]
    fn weak_password_is_rejected() {
        // 短い・数字のみ・英字のみ
        assert!(register_request("23db029", "ab12").validate(&()).is_err());
        assert!(register_request("23db029", "12345678").validate(&()).is_err());
        assert!(register_request("23db029", "abcdefgh").validate(&()).is_err());
    }
}

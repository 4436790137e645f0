use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

// 文字列ベースの ID 型を定義するマクロ
// 学籍番号（例: 23db029）や駐車場 ID（例: A）をそのまま ID として使う
macro_rules! define_string_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $id_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_string_id!(UserId);
define_string_id!(LotId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn raw(&self) -> Uuid {
        self.0
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for ReservationId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

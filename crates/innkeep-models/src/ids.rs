//! Strongly-typed ID newtypes for domain entities.
//!
//! Every table in the schema uses `BIGSERIAL` keys. Each newtype wraps the
//! `i64` key so a `TenantId` cannot be passed where a `UserId` is expected,
//! and only positive values can be constructed from untrusted input.
//!
//! # Example
//!
//! ```ignore
//! use innkeep_models::ids::{TenantId, UserId};
//!
//! let tenant = TenantId::new(5).unwrap();
//! let user: UserId = "42".parse().unwrap();
//! assert!(TenantId::new(0).is_none());
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use utoipa::ToSchema;

/// Error returned when parsing an id from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    NotANumber(String),
    NotPositive(i64),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdParseError::NotANumber(raw) => write!(f, "'{}' is not a valid id", raw),
            IdParseError::NotPositive(v) => write!(f, "id must be positive, got {}", v),
        }
    }
}

impl std::error::Error for IdParseError {}

/// Macro to define a strongly-typed ID newtype over a positive `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
        #[schema(value_type = i64)]
        pub struct $name(i64);

        impl $name {
            /// Wraps `value` if it is a positive key.
            #[inline]
            pub const fn new(value: i64) -> Option<Self> {
                if value > 0 { Some(Self(value)) } else { None }
            }

            /// Get the inner key value.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = IdParseError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(IdParseError::NotPositive(value))
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| IdParseError::NotANumber(s.to_string()))?;
                Self::try_from(value)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i64 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i64 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let raw = <i64 as Decode<'r, sqlx::Postgres>>::decode(value)?;
                Ok(Self::try_from(raw)?)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i64 as PgHasArrayType>::array_type_info()
            }
        }

        // Rejects zero and negative keys at the serde boundary.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = i64::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Tenant entities.
    TenantId
);

define_id!(
    /// Strongly-typed ID for User entities.
    UserId
);

define_id!(
    /// Strongly-typed ID for tenant-scoped version rows.
    VersionId
);

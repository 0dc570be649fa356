use crate::domain::models::account::Account;
use serde::Deserialize;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("k3x9f2m1q8w7e4r5t6y0"))]
    id: String,
    #[schema(examples("your_name"))]
    name: String,
    #[schema(examples("your@email.com"))]
    email: String,
}

/// Sign up form as submitted. Every field is optional on the wire so the
/// controller can tell an empty body from a partially filled one.
///
/// The body is read as a JSON object first: keys that do not carry one of
/// the four fields (unknown keys, `null` values) are counted in
/// `unmapped_keys`, so `{"foo": 1}` is not an empty form.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct SignUpDTO {
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password_confirmation: Option<String>,

    #[serde(skip)]
    pub unmapped_keys: usize,
}

impl SignUpDTO {
    pub fn is_empty(&self) -> bool {
        self.unmapped_keys == 0
            && self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.password_confirmation.is_none()
    }
}

impl TryFrom<Map<String, Value>> for SignUpDTO {
    type Error = serde_json::Error;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let keys = body.len();

        let mut dto = SignUpDTO {
            name: take_field(&mut body, "name")?,
            email: take_field(&mut body, "email")?,
            password: take_field(&mut body, "password")?,
            password_confirmation: take_field(&mut body, "passwordConfirmation")?,
            unmapped_keys: 0,
        };

        let mapped = [
            &dto.name,
            &dto.email,
            &dto.password,
            &dto.password_confirmation,
        ]
        .into_iter()
        .filter(|field| field.is_some())
        .count();

        dto.unmapped_keys = keys - mapped;

        Ok(dto)
    }
}

fn take_field(body: &mut Map<String, Value>, key: &str) -> Result<Option<String>, serde_json::Error> {
    body.remove(key)
        .map(serde_json::from_value::<Option<String>>)
        .transpose()
        .map(Option::flatten)
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
        }
    }
}

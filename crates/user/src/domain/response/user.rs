use crate::model::User as UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub email: String,
}

impl From<UserModel> for ProfileResponse {
    fn from(value: UserModel) -> Self {
        ProfileResponse {
            id: value.id,
            email: value.email,
        }
    }
}

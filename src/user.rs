//! Conversions for data-plane users.
//!
//! The service never returns passwords, and it returns the mechanism only
//! when one was set, so the read path leans on the prior Model for
//! everything except the name and mechanism.

use crate::cluster::Collector;
use crate::error::ProviderError;
use crate::generated::dataplane::{
    create_user_request, update_user_request, CreateUserRequest, ListUsersResponse,
    SaslMechanism, UpdateUserRequest, User,
};
use crate::model::UserModel;
use crate::types::{from_wire, value_to_wire};
use crate::value::Value;

/// Build the create request for a user. `name` and `password` are required.
pub fn build_create_user_request(model: &UserModel) -> Result<CreateUserRequest, ProviderError> {
    Ok(CreateUserRequest {
        user: Some(create_user_request::User {
            name: model.name.clone().require("name")?,
            password: model.password.clone().require("password")?,
            mechanism: value_to_wire::<SaslMechanism>(&model.mechanism)?,
        }),
    })
}

/// Build the update request for a user.
///
/// The data plane replaces credentials wholesale, so the full password and
/// mechanism are always sent.
pub fn build_update_user_request(model: &UserModel) -> Result<UpdateUserRequest, ProviderError> {
    Ok(UpdateUserRequest {
        user: Some(update_user_request::User {
            name: model.name.clone().require("name")?,
            password: model.password.clone().require("password")?,
            mechanism: value_to_wire::<SaslMechanism>(&model.mechanism)?,
        }),
    })
}

/// Find a user by name in a list response.
pub fn find_user<'a>(response: &'a ListUsersResponse, name: &str) -> Result<&'a User, ProviderError> {
    response
        .users
        .iter()
        .find(|user| user.name == name)
        .ok_or_else(|| ProviderError::NotFound(format!("user '{}'", name)))
}

/// Map a user returned by the service into a Model.
///
/// `password`, `cluster_api_url` and `allow_deletion` come from `prior`. A
/// mechanism the service leaves out keeps the prior value.
pub fn user_model_from_response(prior: &UserModel, user: &User) -> Result<UserModel, ProviderError> {
    let mut c = Collector::default();
    let mechanism = match user.mechanism {
        Some(mechanism) => c.value("mechanism", from_wire::<SaslMechanism>(mechanism, "mechanism")),
        None => prior.mechanism.clone(),
    };
    let model = UserModel {
        name: Value::Known(user.name.clone()),
        password: prior.password.clone(),
        mechanism,
        cluster_api_url: prior.cluster_api_url.clone(),
        allow_deletion: prior.allow_deletion.clone(),
    };
    c.finish(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserModel {
        UserModel {
            name: Value::Known("alice".into()),
            password: Value::Known("hunter22".into()),
            mechanism: Value::Known("scram-sha-512".into()),
            cluster_api_url: Value::Known("https://api.example.com".into()),
            allow_deletion: Value::Known(true),
        }
    }

    #[test]
    fn test_create_request() {
        let req = build_create_user_request(&alice()).unwrap();
        let user = req.user.unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.password, "hunter22");
        assert_eq!(user.mechanism, SaslMechanism::ScramSha512 as i32);
    }

    #[test]
    fn test_create_without_mechanism_leaves_it_unset() {
        let model = UserModel {
            mechanism: Value::Null,
            ..alice()
        };
        let req = build_create_user_request(&model).unwrap();
        assert_eq!(req.user.unwrap().mechanism, 0);
    }

    #[test]
    fn test_create_requires_password() {
        let model = UserModel {
            password: Value::Unknown,
            ..alice()
        };
        let err = build_create_user_request(&model).unwrap_err();
        assert!(matches!(err, ProviderError::MissingRequired(ref p) if p == "password"));
    }

    #[test]
    fn test_bad_mechanism() {
        let model = UserModel {
            mechanism: Value::Known("plain".into()),
            ..alice()
        };
        assert!(matches!(
            build_update_user_request(&model),
            Err(ProviderError::Validation(_))
        ));
    }

    #[test]
    fn test_response_keeps_password() {
        let user = User {
            name: "alice".into(),
            mechanism: Some(SaslMechanism::ScramSha256 as i32),
        };
        let model = user_model_from_response(&alice(), &user).unwrap();
        assert_eq!(model.password, Value::Known("hunter22".into()));
        assert_eq!(model.mechanism, Value::Known("scram-sha-256".into()));
        assert_eq!(model.allow_deletion, Value::Known(true));
    }

    #[test]
    fn test_response_without_mechanism_keeps_prior() {
        let user = User {
            name: "alice".into(),
            mechanism: None,
        };
        let model = user_model_from_response(&alice(), &user).unwrap();
        assert_eq!(model.mechanism, Value::Known("scram-sha-512".into()));
    }

    #[test]
    fn test_response_unknown_mechanism_is_diagnostic() {
        let user = User {
            name: "alice".into(),
            mechanism: Some(9),
        };
        let err = user_model_from_response(&alice(), &user).unwrap_err();
        let ProviderError::Diagnostics(diags) = err else {
            panic!("expected diagnostics");
        };
        assert_eq!(diags[0].attribute.as_deref(), Some("mechanism"));
    }

    #[test]
    fn test_find_user() {
        let response = ListUsersResponse {
            users: vec![User {
                name: "bob".into(),
                mechanism: None,
            }],
        };
        assert_eq!(find_user(&response, "bob").unwrap().name, "bob");
        assert!(find_user(&response, "alice").unwrap_err().is_not_found());
    }
}

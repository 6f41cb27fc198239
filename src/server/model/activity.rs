//! Domain models for activity operations

use crate::{
    model::activity::{ActivityDto, ActivitySignupDto, ActivityWithSignupsDto},
    server::model::{camper::Camper, signup::Signup},
};

/// The activity domain model
///
/// Activities are managed outside the API, so name and difficulty may be unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

impl Activity {
    /// Converts an entity model to the activity domain model
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}

/// A signup owned by an activity, paired with the camper who signed up.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySignup {
    pub signup: Signup,
    pub camper: Camper,
}

impl ActivitySignup {
    pub fn into_dto(self) -> ActivitySignupDto {
        ActivitySignupDto {
            id: self.signup.id,
            time: self.signup.time,
            camper_id: self.signup.camper_id,
            activity_id: self.signup.activity_id,
            camper: self.camper.into_dto(),
        }
    }
}

/// An activity together with all of its signups, ordered by signup ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityWithSignups {
    pub activity: Activity,
    pub signups: Vec<ActivitySignup>,
}

impl ActivityWithSignups {
    pub fn into_dto(self) -> ActivityWithSignupsDto {
        ActivityWithSignupsDto {
            id: self.activity.id,
            name: self.activity.name,
            difficulty: self.activity.difficulty,
            signups: self
                .signups
                .into_iter()
                .map(ActivitySignup::into_dto)
                .collect(),
        }
    }
}

/// Parameters for inserting an activity when seeding the store
#[derive(Debug, Clone, PartialEq)]
pub struct CreateActivityParams {
    pub name: String,
    pub difficulty: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_missing_fields_as_null() {
        let activity = Activity {
            id: 4,
            name: None,
            difficulty: None,
        };

        assert_eq!(
            serde_json::to_value(activity.into_dto()).unwrap(),
            serde_json::json!({ "id": 4, "name": null, "difficulty": null })
        );
    }

    #[test]
    fn activity_with_signups_embeds_camper_only() {
        let activity = ActivityWithSignups {
            activity: Activity {
                id: 1,
                name: Some("Archery".to_string()),
                difficulty: Some(2),
            },
            signups: vec![ActivitySignup {
                signup: Signup {
                    id: 5,
                    time: 9,
                    camper_id: 7,
                    activity_id: 1,
                },
                camper: Camper {
                    id: 7,
                    name: "Sam".to_string(),
                    age: 12,
                },
            }],
        };

        let json = serde_json::to_value(activity.into_dto()).unwrap();
        let signup = &json["signups"][0];

        assert_eq!(signup["camper"]["name"], "Sam");
        assert!(signup.get("activity").is_none());
    }
}

//! Maintenance window selection.
//!
//! The Model exposes three sibling attributes (`day_hour`, `anytime`,
//! `unspecified`); the wire carries a oneof. [`MaintenanceWindow`] sits
//! between the two so that at most one variant ever exists.

use std::sync::LazyLock;

use crate::accessor::Attrs;
use crate::error::ProviderError;
use crate::generated::controlplane::{
    maintenance_window_config::Window, Anytime, DayHour, DayOfWeek, MaintenanceWindowConfig,
    Unspecified,
};
use crate::schema::{AttributeType, ObjectType};
use crate::types::ModelEnum;
use crate::value::{Object, Value};

static DAY_HOUR_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with("hour_of_day", AttributeType::Int64)
        .with("day_of_week", AttributeType::String)
});

/// The `maintenance_window_config` block.
pub static MAINTENANCE_WINDOW_TYPE: LazyLock<ObjectType> = LazyLock::new(|| {
    ObjectType::new()
        .with_object("day_hour", &DAY_HOUR_TYPE)
        .with("anytime", AttributeType::Bool)
        .with("unspecified", AttributeType::Bool)
});

/// When the service may run maintenance on a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceWindow {
    /// A fixed weekly slot.
    DayHour {
        /// Hour of the day, 0 to 23, UTC.
        hour_of_day: i32,
        /// Day of the week.
        day_of_week: DayOfWeek,
    },
    /// Any time.
    Anytime,
    /// Left to the service's default.
    Unspecified,
}

impl MaintenanceWindow {
    /// Read the window from a Model block.
    ///
    /// Variants are checked in the order `day_hour`, `anytime`,
    /// `unspecified`; the first one set wins. A block selecting nothing
    /// yields `None`.
    pub fn from_block(block: &Value<Object>) -> Result<Option<Self>, ProviderError> {
        let Some(object) = block.as_option() else {
            return Ok(None);
        };
        let attrs = Attrs::at(object, "maintenance_window_config");
        if let Some(day_hour) = attrs.nested("day_hour")? {
            let day_hour = day_hour.attrs();
            let hour_of_day = day_hour.required_int32("hour_of_day")?;
            if !(0..=23).contains(&hour_of_day) {
                return Err(ProviderError::Validation(format!(
                    "{}: hour must be between 0 and 23, got {}",
                    day_hour.path_of("hour_of_day"),
                    hour_of_day
                )));
            }
            let day = day_hour.required_string("day_of_week")?;
            let day_of_week = DayOfWeek::from_model_str(&day)?;
            return Ok(Some(Self::DayHour {
                hour_of_day,
                day_of_week,
            }));
        }
        if attrs.bool("anytime")? == Value::Known(true) {
            return Ok(Some(Self::Anytime));
        }
        if attrs.bool("unspecified")? == Value::Known(true) {
            return Ok(Some(Self::Unspecified));
        }
        Ok(None)
    }

    /// Read the window from the wire. An empty oneof yields `None`.
    pub fn from_wire(config: &MaintenanceWindowConfig) -> Result<Option<Self>, ProviderError> {
        Ok(match &config.window {
            None => None,
            Some(Window::DayHour(day_hour)) => {
                let day_of_week = DayOfWeek::try_from(day_hour.day_of_week).map_err(|_| {
                    ProviderError::Validation(format!(
                        "maintenance_window_config.day_hour.day_of_week: unknown day {}",
                        day_hour.day_of_week
                    ))
                })?;
                Some(Self::DayHour {
                    hour_of_day: day_hour.hour_of_day,
                    day_of_week,
                })
            },
            Some(Window::Anytime(_)) => Some(Self::Anytime),
            Some(Window::Unspecified(_)) => Some(Self::Unspecified),
        })
    }

    /// Encode for the wire.
    pub fn to_wire(self) -> MaintenanceWindowConfig {
        let window = match self {
            Self::DayHour {
                hour_of_day,
                day_of_week,
            } => Window::DayHour(DayHour {
                hour_of_day,
                day_of_week: day_of_week.into(),
            }),
            Self::Anytime => Window::Anytime(Anytime {}),
            Self::Unspecified => Window::Unspecified(Unspecified {}),
        };
        MaintenanceWindowConfig {
            window: Some(window),
        }
    }

    /// Encode as a Model block. Attributes of unselected variants are null.
    pub fn to_object(self) -> Result<Object, ProviderError> {
        let builder = Object::builder(&MAINTENANCE_WINDOW_TYPE);
        let builder = match self {
            Self::DayHour {
                hour_of_day,
                day_of_week,
            } => {
                let day = day_of_week.model_str().ok_or_else(|| {
                    ProviderError::Validation("day_of_week must be specified".into())
                })?;
                let day_hour = Object::builder(&DAY_HOUR_TYPE)
                    .set("hour_of_day", hour_of_day)
                    .set("day_of_week", day)
                    .build()?;
                builder
                    .set("day_hour", day_hour)
                    .set("anytime", Value::<bool>::Null)
                    .set("unspecified", Value::<bool>::Null)
            },
            Self::Anytime => builder
                .set("day_hour", Value::<Object>::Null)
                .set("anytime", true)
                .set("unspecified", Value::<bool>::Null),
            Self::Unspecified => builder
                .set("day_hour", Value::<Object>::Null)
                .set("anytime", Value::<bool>::Null)
                .set("unspecified", true),
        };
        builder.build()
    }
}

/// Build the wire maintenance window from a Model block.
pub fn maintenance_window_spec(
    block: &Value<Object>,
) -> Result<Option<MaintenanceWindowConfig>, ProviderError> {
    Ok(MaintenanceWindow::from_block(block)?.map(MaintenanceWindow::to_wire))
}

/// Map the wire maintenance window to a Model block.
pub fn maintenance_window_object(
    config: Option<&MaintenanceWindowConfig>,
) -> Result<Value<Object>, ProviderError> {
    let Some(config) = config else {
        return Ok(Value::Null);
    };
    match MaintenanceWindow::from_wire(config)? {
        Some(window) => window.to_object().map(Value::Known),
        None => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(day_hour: Value<Object>, anytime: Value<bool>, unspecified: Value<bool>) -> Value<Object> {
        Value::Known(
            Object::builder(&MAINTENANCE_WINDOW_TYPE)
                .set("day_hour", day_hour)
                .set("anytime", anytime)
                .set("unspecified", unspecified)
                .build()
                .unwrap(),
        )
    }

    fn day_hour(hour: i64, day: &str) -> Value<Object> {
        Value::Known(
            Object::builder(&DAY_HOUR_TYPE)
                .set("hour_of_day", hour)
                .set("day_of_week", day)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_day_hour_takes_priority() {
        let window = MaintenanceWindow::from_block(&block(
            day_hour(4, "TUESDAY"),
            Value::Known(true),
            Value::Null,
        ))
        .unwrap();
        assert_eq!(
            window,
            Some(MaintenanceWindow::DayHour {
                hour_of_day: 4,
                day_of_week: DayOfWeek::Tuesday
            })
        );
    }

    #[test]
    fn test_anytime_before_unspecified() {
        let window = MaintenanceWindow::from_block(&block(
            Value::Null,
            Value::Known(true),
            Value::Known(true),
        ))
        .unwrap();
        assert_eq!(window, Some(MaintenanceWindow::Anytime));
    }

    #[test]
    fn test_nothing_selected() {
        let window = MaintenanceWindow::from_block(&block(
            Value::Null,
            Value::Known(false),
            Value::Null,
        ))
        .unwrap();
        assert_eq!(window, None);
        assert_eq!(maintenance_window_spec(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_hour_out_of_range() {
        let err = MaintenanceWindow::from_block(&block(
            day_hour(24, "MONDAY"),
            Value::Null,
            Value::Null,
        ))
        .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(ref m)
            if m.starts_with("maintenance_window_config.day_hour.hour_of_day")));
    }

    #[test]
    fn test_bad_day() {
        let err = MaintenanceWindow::from_block(&block(
            day_hour(1, "Funday"),
            Value::Null,
            Value::Null,
        ))
        .unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
    }

    #[test]
    fn test_wire_round_trip() {
        for window in [
            MaintenanceWindow::DayHour {
                hour_of_day: 23,
                day_of_week: DayOfWeek::Sunday,
            },
            MaintenanceWindow::Anytime,
            MaintenanceWindow::Unspecified,
        ] {
            let wire = window.to_wire();
            assert_eq!(MaintenanceWindow::from_wire(&wire).unwrap(), Some(window));
            let object = maintenance_window_object(Some(&wire)).unwrap();
            assert_eq!(MaintenanceWindow::from_block(&object).unwrap(), Some(window));
        }
    }

    #[test]
    fn test_empty_wire_window_is_null() {
        assert!(maintenance_window_object(Some(&MaintenanceWindowConfig::default()))
            .unwrap()
            .is_null());
    }
}

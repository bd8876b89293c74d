mod alert;
mod button;
mod choice;
mod field_popup;
mod password_field;
mod progress;
mod spinner;
mod strength_meter;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use choice::{ChoiceCard, ToggleButton};
pub(crate) use field_popup::FieldPopup;
pub(crate) use password_field::PasswordField;
pub(crate) use progress::ProgressBar;
pub(crate) use spinner::Spinner;
pub(crate) use strength_meter::StrengthMeter;

use crate::dom::SharedPage;
use crate::model::{BookingForm, Severity, ValidationError};
use crate::notifier::Alerts;
use crate::validator::rules::{
    MIN_ADDRESS_LEN, MIN_NAME_LEN, has_min_len, validate_days, validate_email, validate_phone,
};
use tracing::{debug, info};

pub const CAR_PLACEHOLDER: &str = "Choose...";
pub const VALIDATION_PASSED: &str = "Form validation passed!";

/// Trait defining the interface for a booking form validator.
pub trait Validator {
    /// Stops at the first failing rule.
    fn validate(&self, form: &BookingForm) -> Result<(), ValidationError>;
}

pub struct BookingValidator {
    car_placeholder: String,
}

impl BookingValidator {
    pub fn new() -> Self {
        Self {
            car_placeholder: CAR_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for BookingValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for BookingValidator {
    fn validate(&self, form: &BookingForm) -> Result<(), ValidationError> {
        if !has_min_len(&form.name, MIN_NAME_LEN) {
            return Err(ValidationError::NameTooShort);
        }
        if !validate_email(&form.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validate_phone(&form.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !has_min_len(&form.address, MIN_ADDRESS_LEN) {
            return Err(ValidationError::AddressTooShort);
        }
        if form.city.is_empty() {
            return Err(ValidationError::MissingCity);
        }
        if form.car == self.car_placeholder {
            return Err(ValidationError::MissingCar);
        }
        if !validate_days(&form.days) {
            return Err(ValidationError::DaysOutOfRange);
        }
        if form.date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        if form.pickup_location.is_empty() {
            return Err(ValidationError::MissingPickupLocation);
        }
        if form.dropoff_location.is_empty() {
            return Err(ValidationError::MissingDropoffLocation);
        }
        Ok(())
    }
}

/// Reads the ten booking controls, shows one alert for the outcome and
/// returns whether the form may be submitted.
pub async fn validate_booking_form(page: &SharedPage, alerts: &dyn Alerts) -> bool {
    let form = BookingForm::read_from(&*page.lock().await);

    match BookingValidator::new().validate(&form) {
        Ok(()) => {
            info!("Booking form valid for car '{}'", form.car);
            alerts.show_alert(Severity::Success, VALIDATION_PASSED, None).await;
            true
        }
        Err(e) => {
            debug!("Booking form rejected: {:?}", e);
            alerts.show_alert(Severity::Error, &e.to_string(), None).await;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "Ravi Kumar".into(),
            email: "ravi@example.in".into(),
            phone: "98765-43210".into(),
            address: "12 MG Road".into(),
            city: "Pune".into(),
            car: "Honda City".into(),
            days: "3".into(),
            date: "2024-05-01".into(),
            pickup_location: "Airport".into(),
            dropoff_location: "Station".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(BookingValidator::new().validate(&valid_form()), Ok(()));
    }

    #[test]
    fn each_rule_reports_its_error() {
        let validator = BookingValidator::new();
        let cases: [(fn(&mut BookingForm), ValidationError); 10] = [
            (|f: &mut BookingForm| f.name = "Al".into(), ValidationError::NameTooShort),
            (|f: &mut BookingForm| f.email = "ravi@example".into(), ValidationError::InvalidEmail),
            (|f: &mut BookingForm| f.phone = "12345".into(), ValidationError::InvalidPhone),
            (|f: &mut BookingForm| f.address = "Road".into(), ValidationError::AddressTooShort),
            (|f: &mut BookingForm| f.city.clear(), ValidationError::MissingCity),
            (|f: &mut BookingForm| f.car = CAR_PLACEHOLDER.into(), ValidationError::MissingCar),
            (|f: &mut BookingForm| f.days = "31".into(), ValidationError::DaysOutOfRange),
            (|f: &mut BookingForm| f.date.clear(), ValidationError::MissingDate),
            (|f: &mut BookingForm| f.pickup_location.clear(), ValidationError::MissingPickupLocation),
            (|f: &mut BookingForm| f.dropoff_location.clear(), ValidationError::MissingDropoffLocation),
        ];

        for (break_field, expected) in cases {
            let mut form = valid_form();
            break_field(&mut form);
            assert_eq!(validator.validate(&form), Err(expected));
        }
    }

    #[test]
    fn first_failure_wins() {
        let mut form = valid_form();
        form.email = "nope".into();
        form.days = "0".into();
        form.dropoff_location.clear();
        assert_eq!(
            BookingValidator::new().validate(&form),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn messages_match_page_copy() {
        assert_eq!(
            ValidationError::DaysOutOfRange.to_string(),
            "Rental days must be between 1 and 30"
        );
        assert_eq!(
            ValidationError::MissingDropoffLocation.to_string(),
            "Please enter drop-off location"
        );
    }
}

// In-memory model of the booking page: form controls, alert banners,
// the vehicle container and the navigation target.

pub mod container;
pub mod helpers;
pub mod schedule;

use crate::notifier::banner::{Banner, BannerId};
use container::VehicleContainer;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;

pub use container::RenderedCard;
pub use schedule::ScheduledTask;

/// Element ids the page scripts read and write.
pub mod ids {
    pub const BILL_NAME: &str = "billname";
    pub const BILL_EMAIL: &str = "billemail";
    pub const BILL_PHONE: &str = "billphone";
    pub const BILL_ADDRESS: &str = "billaddress";
    pub const BILL_CITY: &str = "billcity";
    pub const CAR_SELECT: &str = "cars11";
    pub const RENTAL_DAYS: &str = "dayss";
    pub const PICKUP_DATE: &str = "date";
    pub const FROM_LOCATION: &str = "fl";
    pub const TO_LOCATION: &str = "tl";
    pub const PRICE_FILTER: &str = "priceFilter";
    pub const TYPE_FILTER: &str = "typeFilter";
    pub const VEHICLE_SEARCH: &str = "vehicleSearch";
    pub const RESULT_COUNT: &str = "resultCount";

    pub const BOOKING_FORM: [&str; 10] = [
        BILL_NAME,
        BILL_EMAIL,
        BILL_PHONE,
        BILL_ADDRESS,
        BILL_CITY,
        CAR_SELECT,
        RENTAL_DAYS,
        PICKUP_DATE,
        FROM_LOCATION,
        TO_LOCATION,
    ];
}

/// Anything form control values can be read from by element id.
pub trait FormSource {
    fn value(&self, id: &str) -> Option<&str>;
}

impl FormSource for HashMap<String, String> {
    fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub text: String,
    pub attributes: BTreeMap<String, String>,
}

pub type SharedPage = Arc<Mutex<Page>>;

#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
    /// Leading children of `<body>`; index 0 is the first child.
    banners: Vec<Banner>,
    container: Option<VehicleContainer>,
    location: Option<String>,
    scrolled_to: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }

    /// Adds a control with an initial value.
    pub fn with_control(mut self, id: &str, value: &str) -> Self {
        self.insert_element(id).value = value.to_string();
        self
    }

    /// Adds every booking form control, empty.
    pub fn with_booking_form(mut self) -> Self {
        for id in ids::BOOKING_FORM {
            self.insert_element(id);
        }
        self
    }

    /// Adds the vehicle container, showing `vehicles`.
    pub fn with_vehicles(mut self, vehicles: &[crate::model::Vehicle]) -> Self {
        let mut container = VehicleContainer::new();
        container.render(vehicles);
        self.container = Some(container);
        self
    }

    pub fn insert_element(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Sets a control's value. Returns false when the element is absent.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub(crate) fn prepend_banner(&mut self, banner: Banner) {
        self.banners.insert(0, banner);
    }

    pub(crate) fn take_banner(&mut self, id: BannerId) -> Option<Banner> {
        let index = self.banners.iter().position(|b| b.id() == id)?;
        Some(self.banners.remove(index))
    }

    pub fn container(&self) -> Option<&VehicleContainer> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut VehicleContainer> {
        self.container.as_mut()
    }

    /// Text of the result counter, if it has been created.
    pub fn result_count(&self) -> Option<&str> {
        self.text(ids::RESULT_COUNT)
    }

    pub fn navigate(&mut self, url: String) {
        self.location = Some(url);
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub(crate) fn scroll_into_view(&mut self, target: &str) {
        self.scrolled_to = Some(target.to_string());
    }

    /// Element id or card name last scrolled into view.
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}

impl FormSource for Page {
    fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_requires_element() {
        let mut page = Page::new().with_control(ids::TYPE_FILTER, "suv");
        assert!(page.set_value(ids::TYPE_FILTER, "sedan"));
        assert_eq!(page.value(ids::TYPE_FILTER), Some("sedan"));

        assert!(!page.set_value(ids::PRICE_FILTER, "budget"));
        assert_eq!(page.value(ids::PRICE_FILTER), None);
    }

    #[test]
    fn booking_form_controls_start_empty() {
        let page = Page::new().with_booking_form();
        for id in ids::BOOKING_FORM {
            assert_eq!(page.value(id), Some(""));
        }
        assert!(page.container().is_none());
        assert!(page.result_count().is_none());
    }
}

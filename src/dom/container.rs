use crate::dom::schedule::ScheduledTask;
use crate::model::Vehicle;

pub const NO_VEHICLES_MESSAGE: &str = "No vehicles found matching your criteria.";

/// A card currently rendered in the vehicle container.
#[derive(Debug)]
pub struct RenderedCard {
    pub vehicle: Vehicle,
    pub box_shadow: String,
    pub(crate) revert: Option<ScheduledTask>,
}

impl RenderedCard {
    fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            vehicle: vehicle.clone(),
            box_shadow: String::new(),
            revert: None,
        }
    }
}

/// The `.row` element holding vehicle cards.
///
/// Every render replaces the whole content and bumps `generation`, so pending
/// highlight timers can tell whether their card still exists.
#[derive(Debug, Default)]
pub struct VehicleContainer {
    cards: Vec<RenderedCard>,
    empty_message: Option<&'static str>,
    generation: u64,
}

impl VehicleContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content with fresh copies of `vehicles`.
    pub fn render(&mut self, vehicles: &[Vehicle]) {
        self.cards = vehicles.iter().map(RenderedCard::from_vehicle).collect();
        self.empty_message = None;
        self.generation += 1;
    }

    /// Like `render`, but shows the empty-result paragraph when nothing matched.
    pub fn render_results(&mut self, vehicles: &[Vehicle]) {
        self.render(vehicles);
        if vehicles.is_empty() {
            self.empty_message = Some(NO_VEHICLES_MESSAGE);
        }
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [RenderedCard] {
        &mut self.cards
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.vehicle.name.as_str()).collect()
    }

    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn to_html(&self) -> String {
        match self.empty_message {
            Some(message) => format!("<p class=\"col-12 text-center text-muted\">{}</p>", message),
            None => self.cards.iter().map(|c| c.vehicle.markup.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_content() {
        let mut container = VehicleContainer::new();
        container.render(&[Vehicle::new("Swift", 2000), Vehicle::new("City", 4000)]);
        assert_eq!(container.names(), vec!["Swift", "City"]);
        let first = container.generation();

        container.render_results(&[]);
        assert!(container.cards().is_empty());
        assert_eq!(container.empty_message(), Some(NO_VEHICLES_MESSAGE));
        assert!(container.to_html().contains("text-muted"));
        assert!(container.generation() > first);
    }
}

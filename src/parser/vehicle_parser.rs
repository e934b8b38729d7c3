// Vehicle card extraction from the rendered listing page
use crate::model::{ParserError, Vehicle};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref PRICE_DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
}

pub trait Parser {
    fn parse(&self, html: &str) -> Result<Vec<Vehicle>, ParserError>;
}

/// Reads `.card` elements from the first `.row` container, in page order.
pub struct VehicleCardParser {
    container: Selector,
    card: Selector,
    title: Selector,
    price: Selector,
}

impl VehicleCardParser {
    pub fn new() -> Result<Self, ParserError> {
        let selector = |css: &str| Selector::parse(css).map_err(|e| ParserError::HtmlParseError(e.to_string()));
        Ok(Self {
            container: selector(".row")?,
            card: selector(".card")?,
            title: selector(".card-title")?,
            price: selector(".card-text")?,
        })
    }
}

/// First run of digits in `text`, or 0 when there is none. Runs too long
/// for `u64` saturate.
pub fn parse_price(text: &str) -> u64 {
    PRICE_DIGITS
        .find(text)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

impl Parser for VehicleCardParser {
    fn parse(&self, html: &str) -> Result<Vec<Vehicle>, ParserError> {
        let document = Html::parse_document(html);
        let container = document
            .select(&self.container)
            .next()
            .ok_or_else(|| ParserError::MissingField(".row".into()))?;

        let mut vehicles = Vec::new();
        for card in container.select(&self.card) {
            let name = card
                .select(&self.title)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
                .unwrap_or_default();
            let price = card
                .select(&self.price)
                .next()
                .map(|p| parse_price(&p.text().collect::<String>()))
                .unwrap_or(0);

            vehicles.push(Vehicle {
                name,
                price,
                markup: card.html(),
            });
        }

        Ok(vehicles)
    }
}

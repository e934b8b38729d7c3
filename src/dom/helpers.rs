// Small page behaviours: character counters, tooltips, smooth scroll and
// the Enter-key guard on the booking form.
use crate::dom::Page;
use tracing::debug;

const COUNTER_LOW_COLOR: &str = "#dc3545";
const COUNTER_COLOR: &str = "#6c757d";
const COUNTER_LOW_THRESHOLD: i64 = 20;

/// Live "characters remaining" display bound to an input.
#[derive(Debug, Clone)]
pub struct CharacterCounter {
    input_id: String,
    counter_id: String,
    max_chars: usize,
}

impl CharacterCounter {
    /// Returns `None` unless both elements are on the page.
    pub fn attach(page: &Page, input_id: &str, counter_id: &str, max_chars: usize) -> Option<Self> {
        if page.element(input_id).is_none() || page.element(counter_id).is_none() {
            debug!("Character counter skipped: {} or {} missing", input_id, counter_id);
            return None;
        }
        Some(Self {
            input_id: input_id.to_string(),
            counter_id: counter_id.to_string(),
            max_chars,
        })
    }

    /// Input event handler. Returns the remaining count, negative once over.
    pub fn on_input(&self, page: &mut Page) -> Option<i64> {
        let typed = page.element(&self.input_id)?.value.chars().count();
        let remaining = self.max_chars as i64 - typed as i64;

        let counter = page.element_mut(&self.counter_id)?;
        counter.text = remaining.to_string();
        let color = if remaining < COUNTER_LOW_THRESHOLD {
            COUNTER_LOW_COLOR
        } else {
            COUNTER_COLOR
        };
        counter.attributes.insert("style.color".into(), color.into());
        Some(remaining)
    }
}

pub fn smooth_scroll(page: &mut Page, element_id: &str) -> bool {
    if page.element(element_id).is_none() {
        return false;
    }
    page.scroll_into_view(element_id);
    true
}

pub fn add_tooltip(page: &mut Page, element_id: &str, tooltip_text: &str) -> bool {
    let Some(element) = page.element_mut(element_id) else {
        return false;
    };
    element.attributes.insert("title".into(), tooltip_text.into());
    element.attributes.insert("data-toggle".into(), "tooltip".into());
    element.attributes.insert("data-placement".into(), "top".into());
    true
}

/// Enter only submits the booking form from inside a textarea.
pub fn suppresses_enter(key: &str, target_is_textarea: bool) -> bool {
    key == "Enter" && !target_is_textarea
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_remaining_and_color() {
        let mut page = Page::new().with_control("notes", "").with_control("notesLeft", "");
        let counter = CharacterCounter::attach(&page, "notes", "notesLeft", 25).unwrap();

        page.set_value("notes", "abc");
        assert_eq!(counter.on_input(&mut page), Some(22));
        assert_eq!(page.text("notesLeft"), Some("22"));
        assert_eq!(page.attribute("notesLeft", "style.color"), Some(COUNTER_COLOR));

        page.set_value("notes", "abcdefghij");
        assert_eq!(counter.on_input(&mut page), Some(15));
        assert_eq!(page.attribute("notesLeft", "style.color"), Some(COUNTER_LOW_COLOR));
    }

    #[test]
    fn counter_needs_both_elements() {
        let page = Page::new().with_control("notes", "");
        assert!(CharacterCounter::attach(&page, "notes", "notesLeft", 10).is_none());
    }

    #[test]
    fn tooltip_sets_bootstrap_attributes() {
        let mut page = Page::new().with_control("billphone", "");
        assert!(add_tooltip(&mut page, "billphone", "10 digits"));
        assert_eq!(page.attribute("billphone", "title"), Some("10 digits"));
        assert_eq!(page.attribute("billphone", "data-toggle"), Some("tooltip"));
        assert_eq!(page.attribute("billphone", "data-placement"), Some("top"));
        assert!(!add_tooltip(&mut page, "missing", "x"));
    }

    #[test]
    fn scroll_and_enter_guard() {
        let mut page = Page::new().with_control("date", "");
        assert!(smooth_scroll(&mut page, "date"));
        assert_eq!(page.scrolled_to(), Some("date"));
        assert!(!smooth_scroll(&mut page, "nowhere"));

        assert!(suppresses_enter("Enter", false));
        assert!(!suppresses_enter("Enter", true));
        assert!(!suppresses_enter("a", false));
    }
}

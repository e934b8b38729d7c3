// notifier/banner.rs

use crate::dom::ScheduledTask;
use crate::model::Severity;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// A dismissible alert inserted at the top of the page body.
#[derive(Debug)]
pub struct Banner {
    id: BannerId,
    severity: Severity,
    message: String,
    auto_remove: Option<ScheduledTask>,
}

impl Banner {
    pub(crate) fn new(id: BannerId, severity: Severity, message: &str) -> Self {
        Self {
            id,
            severity,
            message: message.to_string(),
            auto_remove: None,
        }
    }

    pub(crate) fn schedule_removal(&mut self, task: ScheduledTask) {
        self.auto_remove = Some(task);
    }

    /// Called from the removal task itself so it is not aborted mid-flight.
    pub(crate) fn disarm(&mut self) {
        if let Some(task) = self.auto_remove.take() {
            task.disarm();
        }
    }

    pub fn id(&self) -> BannerId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.severity.css_kind())
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\" role=\"alert\">\n  <strong>{}!</strong> {}\n  \
             <button type=\"button\" class=\"close\" data-dismiss=\"alert\" aria-label=\"Close\">\n    \
             <span aria-hidden=\"true\">&times;</span>\n  </button>\n</div>",
            self.class_name(),
            self.severity.title(),
            escape_html(&self.message)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_uses_danger_palette() {
        let banner = Banner::new(BannerId(1), Severity::Error, "Invalid email format");
        assert_eq!(banner.class_name(), "alert alert-danger alert-dismissible fade show");
        let html = banner.to_html();
        assert!(html.contains("<strong>Error!</strong> Invalid email format"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("data-dismiss=\"alert\""));
    }

    #[test]
    fn message_is_escaped() {
        let banner = Banner::new(BannerId(2), Severity::Info, "<b>Tom & Jerry</b>");
        assert!(banner.to_html().contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert_eq!(BannerId(2).to_string(), "alert-2");
    }
}

use super::slot::Slot;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown template slot {{{{{name}}}}} at byte {offset}")]
    UnknownSlot { name: String, offset: usize },
    #[error("Unterminated template slot at byte {offset}")]
    Unterminated { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A page template parsed into literal text and named slots.
///
/// Parsing happens once, up front, so a bad placeholder is reported when the
/// template is loaded rather than surviving into published pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    segments: Vec<Segment>,
}

impl PageTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = vec![];
        let mut rest = source;
        let mut offset = 0usize;

        while let Some(open) = rest.find(OPEN) {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + OPEN.len()..];
            let close = after_open.find(CLOSE).ok_or(TemplateError::Unterminated {
                offset: offset + open,
            })?;
            let name = after_open[..close].trim();
            let slot = Slot::from_name(name).ok_or_else(|| TemplateError::UnknownSlot {
                name: name.to_string(),
                offset: offset + open,
            })?;
            segments.push(Segment::Slot(slot));

            let consumed = open + OPEN.len() + close + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Slots this template uses, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(slot) => Some(*slot),
            Segment::Literal(_) => None,
        })
    }

    /// Fills every slot with the value `fill` returns for it.
    pub fn fill<F>(&self, mut fill: F) -> String
    where
        F: FnMut(Slot) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(&fill(*slot)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_literals_and_slots() {
        let t = PageTemplate::parse("<h1>{{TITLE}}</h1>{{ BODY }}!").unwrap();
        assert_eq!(t.slots().collect::<Vec<_>>(), vec![Slot::Title, Slot::Body]);
        let page = t.fill(|slot| format!("[{}]", slot.name()));
        assert_eq!(page, "<h1>[TITLE]</h1>[BODY]!");
    }

    #[test]
    fn template_without_slots_is_literal() {
        let t = PageTemplate::parse("static page").unwrap();
        assert_eq!(t.slots().count(), 0);
        assert_eq!(t.fill(|_| unreachable!()), "static page");
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let err = PageTemplate::parse("ok {{TOOL_NAME}}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownSlot {
                name: "TOOL_NAME".into(),
                offset: 3
            }
        );
        assert_eq!(err.to_string(), "Unknown template slot {{TOOL_NAME}} at byte 3");
    }

    #[test]
    fn unterminated_slot_is_rejected() {
        let err = PageTemplate::parse("a {{TITLE}} b {{BODY").unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { offset: 14 });
    }

    #[test]
    fn slot_filled_each_time_it_appears() {
        let t = PageTemplate::parse("{{TITLE}} | {{TITLE}}").unwrap();
        assert_eq!(t.fill(|_| "x".into()), "x | x");
    }
}

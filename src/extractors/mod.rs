use crate::error::ImportError;
use crate::model::{DirectionStep, Recipe};
use scraper::{ElementRef, Html, Selector};

mod blue_apron;
mod hello_fresh;

pub use blue_apron::BlueApronExtractor;
pub use hello_fresh::HelloFreshExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ImportError>;
}

/// How a site signals that a meal is quick to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickMealRule {
    /// Quick when the ready time is at most this many minutes.
    ReadyWithin(u32),
    /// Quick when a marker element is present, optionally with exactly this text.
    Marker {
        selector: &'static str,
        text: Option<&'static str>,
    },
}

impl QuickMealRule {
    pub fn applies(
        &self,
        scope: ElementRef,
        ready_minutes: Option<u32>,
    ) -> Result<bool, ImportError> {
        match self {
            QuickMealRule::ReadyWithin(limit) => {
                Ok(ready_minutes.is_some_and(|minutes| minutes <= *limit))
            }
            QuickMealRule::Marker { selector, text } => has_marker(scope, selector, *text),
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, ImportError> {
    Selector::parse(css)
        .map_err(|e| ImportError::extraction(format!("invalid selector '{css}': {e}")))
}

pub(crate) fn select_first<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Option<ElementRef<'a>>, ImportError> {
    Ok(scope.select(&selector(css)?).next())
}

/// True when `scope` contains an element matching `css` (and `text`, if given).
pub(crate) fn has_marker(
    scope: ElementRef,
    css: &str,
    text: Option<&str>,
) -> Result<bool, ImportError> {
    let selector = selector(css)?;
    let found = scope.select(&selector).any(|el| match text {
        Some(expected) => element_text(el).trim() == expected,
        None => true,
    });
    Ok(found)
}

/// All text under the element, concatenated without separators.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// Text under `element`, skipping everything inside `excluded`.
pub(crate) fn text_excluding(element: ElementRef, excluded: Option<ElementRef>) -> String {
    element
        .descendants()
        .filter(|node| match excluded {
            Some(skip) => !node.ancestors().any(|ancestor| ancestor.id() == skip.id()),
            None => true,
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}

/// Collapse every whitespace run into a single space and trim.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse the first whitespace-delimited token as a whole number.
///
/// Thousands separators are ignored and a trailing unit made of letters is
/// stripped, so `"450 kcal"`, `"1,040 kcal"` and `"25min"` all parse. Anything
/// else after the digits (`"1.5"`, `"2-4"`, `"n/a"`) gives `None`.
pub fn parse_leading_number(text: &str) -> Option<u32> {
    let token = text.split_whitespace().next()?.replace(',', "");
    let split = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, unit) = token.split_at(split);
    if !unit.chars().all(char::is_alphabetic) {
        return None;
    }
    digits.parse().ok()
}

/// Drop any query string or fragment from an image URL.
pub fn strip_query(url: &str) -> String {
    url.split(['?', '#']).next().unwrap_or_default().trim().to_string()
}

pub(crate) fn image_src(scope: ElementRef, css: &str) -> Result<Option<String>, ImportError> {
    Ok(select_first(scope, css)?
        .and_then(|img| img.value().attr("src"))
        .map(strip_query)
        .filter(|src| !src.is_empty()))
}

/// Split a measurement block on its line breaks into amount and unit.
pub fn split_measurement_lines(text: &str) -> (Option<String>, Option<String>) {
    let mut tokens = text
        .split('\n')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);
    (tokens.next(), tokens.next())
}

/// Turn the text of a direction block into a step.
///
/// Blank lines are collapsed; the first line becomes the title (colon
/// stripped) and the remaining lines the body. A single line is kept as
/// free text.
pub fn split_direction(raw: &str) -> Option<DirectionStep> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.split_first() {
        None => None,
        Some((only, [])) => Some(DirectionStep::Text(clean_text(only))),
        Some((title, body)) => Some(DirectionStep::Titled {
            title: title.trim_matches(':').trim_end().to_string(),
            text: clean_text(&body.join(" ")),
        }),
    }
}

/// Element holding exactly the given text, e.g. a "Calories" label.
pub(crate) fn find_label<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .find(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| text.trim() == label)
        })
        .and_then(|node| node.parent())
        .and_then(ElementRef::wrap)
}

pub(crate) fn parent_element(element: ElementRef) -> Option<ElementRef> {
    element.parent().and_then(ElementRef::wrap)
}

pub(crate) fn next_element(element: ElementRef) -> Option<ElementRef> {
    element.next_siblings().find_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("450 kcal"), Some(450));
        assert_eq!(parse_leading_number("  25 min"), Some(25));
        assert_eq!(parse_leading_number("35min"), Some(35));
        assert_eq!(parse_leading_number("n/a"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("1,040 kcal"), Some(1040));
        assert_eq!(parse_leading_number("1,200kcal"), Some(1200));
        assert_eq!(parse_leading_number("1.5 hours"), None);
        assert_eq!(parse_leading_number("2-4"), None);
        assert_eq!(parse_leading_number("1½ cups"), None);
        assert_eq!(parse_leading_number("kcal"), None);
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://media.blueapron.com/recipes/udon.jpg?quality=80&width=600"),
            "https://media.blueapron.com/recipes/udon.jpg"
        );
        assert_eq!(
            strip_query("https://img.hellofresh.com/tacos.png"),
            "https://img.hellofresh.com/tacos.png"
        );
    }

    #[test]
    fn test_split_measurement_lines() {
        assert_eq!(
            split_measurement_lines("2\ncups"),
            (Some("2".to_string()), Some("cups".to_string()))
        );
        assert_eq!(split_measurement_lines("\n  3  \n"), (Some("3".to_string()), None));
        assert_eq!(split_measurement_lines("   "), (None, None));
    }

    #[test]
    fn test_split_direction_with_title() {
        let raw = "\n\nCook the noodles:\n\n\n  Heat a large pot of water.  \n";
        let step = split_direction(raw).unwrap();
        assert_eq!(
            step,
            DirectionStep::Titled {
                title: "Cook the noodles".to_string(),
                text: "Heat a large pot of water.".to_string(),
            }
        );
    }

    #[test]
    fn test_split_direction_single_line() {
        let step = split_direction("  Serve warm. \n").unwrap();
        assert_eq!(step, DirectionStep::Text("Serve warm.".to_string()));
        assert!(split_direction("\n \n").is_none());
    }

    #[test]
    fn test_text_excluding_skips_span() {
        let html = Html::parse_fragment("<li><span>2\ncups</span> flour</li>");
        let li = html.select(&selector("li").unwrap()).next().unwrap();
        let span = li.select(&selector("span").unwrap()).next();
        assert_eq!(text_excluding(li, span).trim(), "flour");
        assert_eq!(clean_text(&text_excluding(li, None)), "2 cups flour");
    }

    #[test]
    fn test_ready_within_rule() {
        let html = Html::parse_fragment("<div></div>");
        let root = html.root_element();
        let rule = QuickMealRule::ReadyWithin(20);
        assert!(rule.applies(root, Some(15)).unwrap());
        assert!(rule.applies(root, Some(20)).unwrap());
        assert!(!rule.applies(root, Some(25)).unwrap());
        assert!(!rule.applies(root, None).unwrap());
    }

    #[test]
    fn test_marker_rule() {
        let html = Html::parse_fragment(r#"<div><span class="tag">20-Min Meal</span></div>"#);
        let root = html.root_element();
        let matching = QuickMealRule::Marker {
            selector: "span.tag",
            text: Some("20-Min Meal"),
        };
        let other_text = QuickMealRule::Marker {
            selector: "span.tag",
            text: Some("Veggie"),
        };
        assert!(matching.applies(root, None).unwrap());
        assert!(!other_text.applies(root, Some(5)).unwrap());
    }

    #[test]
    fn test_find_label_and_siblings() {
        let html = Html::parse_document(
            r#"<div><div><span>Calories</span><span>450 kcal</span></div></div>"#,
        );
        let label = find_label(&html, "Calories").unwrap();
        let value = next_element(label).unwrap();
        assert_eq!(element_text(value), "450 kcal");
        assert_eq!(parent_element(label).unwrap().value().name(), "div");
    }
}

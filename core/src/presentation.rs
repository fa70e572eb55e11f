//! Plain-text renderers over already-resolved view-models.

use std::fmt::Write;

use crate::error::{ApiError, RenderError};
use crate::types::{Record, Starship};
use crate::view::{DetailModel, ListModel};

pub const SPINNER: &str = "Loading...";
pub const SELECT_PROMPT: &str = "Select an item from a list";

pub fn error_indicator(error: &ApiError) -> String {
    format!("BOOM! Something has gone terribly wrong: {error}")
}

pub fn render_name<R: Record>(record: &R) -> String {
    record.name().to_string()
}

pub fn render_model_and_name(starship: &Starship) -> String {
    format!("{} ({})", starship.name, starship.model)
}

/// One `[id] label` line per record, in list order.
pub fn item_list<T: Record>(
    model: &ListModel<T>,
    label: impl Fn(&T) -> String,
) -> Result<String, RenderError> {
    if let Some(error) = &model.error {
        return Ok(error_indicator(error));
    }
    let Some(items) = &model.data else {
        return Ok(SPINNER.to_string());
    };
    let mut out = String::new();
    for item in items {
        if item.id().is_empty() {
            return Err(RenderError::MissingField("id"));
        }
        writeln!(out, "[{}] {}", item.id(), label(item))
            .map_err(|e| RenderError::Failed(e.to_string()))?;
    }
    Ok(out)
}

pub fn item_details<T: Record>(model: &DetailModel<T>) -> Result<String, RenderError> {
    if !model.selected {
        return Ok(SELECT_PROMPT.to_string());
    }
    if model.loading {
        return Ok(SPINNER.to_string());
    }
    if let Some(error) = &model.error {
        return Ok(error_indicator(error));
    }
    let item = model.item.as_ref().ok_or(RenderError::MissingField("item"))?;
    let image = model.image.as_ref().ok_or(RenderError::MissingField("image"))?;

    let mut out = String::new();
    let write_err = |e: std::fmt::Error| RenderError::Failed(e.to_string());
    writeln!(out, "image: {image}").map_err(write_err)?;
    writeln!(out, "{}", item.name()).map_err(write_err)?;
    for (term, value) in item.fields() {
        writeln!(out, "  {term}: {value}").map_err(write_err)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Person;

    fn vader() -> Person {
        Person {
            id: "4".to_string(),
            name: "Darth Vader".to_string(),
            gender: "male".to_string(),
            birth_year: "41.9BBY".to_string(),
            eye_color: "yellow".to_string(),
        }
    }

    #[test]
    fn list_renders_spinner_then_items() {
        let loading = ListModel::<Person> {
            data: None,
            loading: true,
            error: None,
        };
        assert_eq!(item_list(&loading, render_name).unwrap(), SPINNER);

        let ready = ListModel {
            data: Some(vec![vader()]),
            loading: false,
            error: None,
        };
        assert_eq!(item_list(&ready, render_name).unwrap(), "[4] Darth Vader\n");
    }

    #[test]
    fn list_with_blank_id_is_render_error() {
        let mut broken = vader();
        broken.id.clear();
        let model = ListModel {
            data: Some(vec![broken]),
            loading: false,
            error: None,
        };
        assert_eq!(
            item_list(&model, render_name),
            Err(RenderError::MissingField("id"))
        );
    }

    #[test]
    fn details_states() {
        let mut model = DetailModel::<Person> {
            selected: false,
            item: None,
            image: None,
            loading: false,
            error: None,
        };
        assert_eq!(item_details(&model).unwrap(), SELECT_PROMPT);

        model.selected = true;
        model.loading = true;
        assert_eq!(item_details(&model).unwrap(), SPINNER);

        model.loading = false;
        model.item = Some(vader());
        model.image = Some("img/characters/4.jpg".to_string());
        let text = item_details(&model).unwrap();
        assert!(text.starts_with("image: img/characters/4.jpg\nDarth Vader\n"));
        assert!(text.contains("  Birth Year: 41.9BBY\n"));
        assert!(text.contains("  Eye Color: yellow\n"));
    }

    #[test]
    fn details_failure_renders_indicator() {
        let model = DetailModel::<Person> {
            selected: true,
            item: None,
            image: None,
            loading: false,
            error: Some(ApiError::Transport {
                status: 500,
                path: "/people/4/".to_string(),
            }),
        };
        assert_eq!(
            item_details(&model).unwrap(),
            "BOOM! Something has gone terribly wrong: could not fetch /people/4/, received 500"
        );
    }

    #[test]
    fn starship_label_includes_model() {
        let ship = Starship {
            id: "2".to_string(),
            name: "CR90 corvette".to_string(),
            model: "CR90 corvette".to_string(),
            manufacturer: String::new(),
            cost_in_credits: String::new(),
            length: String::new(),
            crew: String::new(),
            passengers: String::new(),
            cargo_capacity: String::new(),
        };
        assert_eq!(render_model_and_name(&ship), "CR90 corvette (CR90 corvette)");
    }
}
